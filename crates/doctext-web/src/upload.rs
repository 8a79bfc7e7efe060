use axum::extract::Multipart;
use thiserror::Error;

/// The file payload and filename received in a single request.
///
/// The filename is used only to determine the document format; it never
/// becomes part of a filesystem path.
pub struct Upload {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Upload rejection reasons; all map to HTTP 400.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file part in the request")]
    NoFilePart,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("Failed to read form field: {0}")]
    Field(String),
}

/// Parse a multipart form into the uploaded file.
///
/// The upload is expected in a field named `file`; unknown fields are
/// drained and ignored.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<Upload, UploadError> {
    let mut upload: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Field(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or("").to_string();
            if filename.is_empty() {
                return Err(UploadError::NoSelectedFile);
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| UploadError::Field(e.to_string()))?
                .to_vec();

            upload = Some(Upload { filename, data });
        } else {
            // Ignore unknown fields
            let _ = field.bytes().await;
        }
    }

    upload.ok_or(UploadError::NoFilePart)
}
