use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Backend client variants
///
/// Selected once at configuration time; every configured backend slot uses
/// the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Chunks kept in a process-local map, one per backend slot
    #[default]
    Memory,
    /// Chunks written to a remote storage node over HTTP
    Http,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(BackendKind::Memory),
            "http" => Ok(BackendKind::Http),
            _ => Err(anyhow::anyhow!("Invalid backend kind: {}", s)),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Http => write!(f, "http"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_case_insensitively() {
        assert_eq!("memory".parse::<BackendKind>().unwrap(), BackendKind::Memory);
        assert_eq!(" HTTP ".parse::<BackendKind>().unwrap(), BackendKind::Http);
        assert!("s3".parse::<BackendKind>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for kind in [BackendKind::Memory, BackendKind::Http] {
            assert_eq!(kind.to_string().parse::<BackendKind>().unwrap(), kind);
        }
    }
}
