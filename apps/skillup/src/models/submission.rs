use std::path::Path;

use bytes::Bytes;

use crate::errors::AppError;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The user's input for one analysis: a resume file and a target job title.
///
/// Held in memory for the lifetime of a session so that retries can replay
/// the whole analysis without asking for the input again.
#[derive(Debug, Clone)]
pub struct Submission {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Bytes,
    pub job_title: String,
}

impl Submission {
    pub fn new(
        file_name: impl Into<String>,
        bytes: impl Into<Bytes>,
        job_title: impl Into<String>,
    ) -> Result<Self, AppError> {
        let file_name = file_name.into();
        let bytes = bytes.into();
        let job_title = job_title.into().trim().to_string();

        if job_title.is_empty() {
            return Err(AppError::Validation(
                "Please upload a resume and enter a job title".to_string(),
            ));
        }
        if bytes.is_empty() {
            return Err(AppError::Validation(format!(
                "Resume file '{file_name}' is empty"
            )));
        }
        let mime_type = mime_for(&file_name).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported resume format '{file_name}': expected .pdf or .docx"
            ))
        })?;

        Ok(Self {
            file_name,
            mime_type,
            bytes,
            job_title,
        })
    }

    /// Reads the resume from disk and validates it together with the job title.
    pub async fn from_path(path: &Path, job_title: &str) -> Result<Self, AppError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::Validation(format!("Invalid resume path: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        Self::new(file_name, bytes, job_title)
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let (_, ext) = file_name.rsplit_once('.')?;
    match ext.to_ascii_lowercase().as_str() {
        "pdf" => Some(PDF_MIME),
        "docx" => Some(DOCX_MIME),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_pdf_submission_is_accepted() {
        let s = Submission::new("resume.PDF", b"%PDF-1.4".to_vec(), "  Data Scientist ").unwrap();
        assert_eq!(s.mime_type, PDF_MIME);
        assert_eq!(s.job_title, "Data Scientist");
    }

    #[test]
    fn test_blank_job_title_is_rejected() {
        let err = Submission::new("resume.pdf", b"%PDF".to_vec(), "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = Submission::new("resume.pdf", Vec::new(), "Engineer").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        assert!(Submission::new("resume.txt", b"hello".to_vec(), "Engineer").is_err());
        assert!(Submission::new("resume", b"hello".to_vec(), "Engineer").is_err());
    }

    #[tokio::test]
    async fn test_from_path_reads_docx() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"PK\x03\x04fake docx").unwrap();

        let s = Submission::from_path(file.path(), "Product Manager").await.unwrap();
        assert_eq!(s.mime_type, DOCX_MIME);
        assert_eq!(s.bytes.as_ref(), b"PK\x03\x04fake docx");
        assert!(s.file_name.ends_with(".docx"));
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Submission::from_path(&dir.path().join("nope.pdf"), "Engineer")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
