use axum::extract::Multipart;
use bytes::Bytes;
use distributor_core::AppError;

use crate::error::HttpAppError;

const FILE_FIELD: &str = "file";
const MAX_FILENAME_LENGTH: usize = 255;

/// Extract file data and filename from a multipart form.
/// Exactly one field named "file" is accepted; other fields are ignored.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<(Bytes, String), HttpAppError> {
    let mut file_data: Option<Bytes> = None;
    let mut filename: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        if file_data.is_some() {
            return Err(AppError::InvalidInput(
                "Multiple file fields are not allowed; send exactly one field named 'file'"
                    .to_string(),
            )
            .into());
        }

        filename = field.file_name().map(|s| s.to_string());
        file_data = Some(field.bytes().await?);
    }

    let file_data =
        file_data.ok_or_else(|| AppError::InvalidInput("No file provided".to_string()))?;
    let filename = sanitize_filename(filename.as_deref().unwrap_or_default());

    Ok((file_data, filename))
}

/// Validate file size
pub fn validate_file_size(file_size: usize, max_size: usize) -> Result<(), AppError> {
    if file_size > max_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size exceeds maximum allowed size of {} MB",
            max_size / 1024 / 1024
        )));
    }
    Ok(())
}

/// Keep only the last path component and drop characters that cannot appear
/// inside a quoted `Content-Disposition` filename.
pub fn sanitize_filename(filename: &str) -> String {
    let filename_only = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();

    let sanitized: String = filename_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| if c == '"' || c.is_control() { '_' } else { c })
        .collect();

    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        return "unknown".to_string();
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_filename_strips_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\report.pdf"), "report.pdf");
    }

    #[test]
    fn sanitize_filename_replaces_quotes_and_controls() {
        assert_eq!(sanitize_filename("a\"b\nc.txt"), "a_b_c.txt");
    }

    #[test]
    fn sanitize_filename_falls_back_for_empty_names() {
        assert_eq!(sanitize_filename(""), "unknown");
        assert_eq!(sanitize_filename("dir/"), "unknown");
        assert_eq!(sanitize_filename(".."), "unknown");
    }

    #[test]
    fn sanitize_filename_keeps_unicode() {
        assert_eq!(sanitize_filename("résumé 2024.pdf"), "résumé 2024.pdf");
    }

    #[test]
    fn validate_file_size_boundaries() {
        assert!(validate_file_size(1024, 1024).is_ok());
        assert!(matches!(
            validate_file_size(1025, 1024),
            Err(AppError::PayloadTooLarge(_))
        ));
    }
}
