//! File intake validation
//!
//! The demo never reads file contents; the only thing inspected is the
//! metadata of a user-selected file (name, size, MIME type). Validation
//! rejects oversized or wrong-typed files with a user-facing message and
//! otherwise does nothing.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Size limit for policy and claim uploads.
pub const UPLOAD_SIZE_LIMIT: u64 = 10 * 1024 * 1024;

/// Size limit for supporting claim documents.
pub const DOCUMENT_SIZE_LIMIT: u64 = 5 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";
const CLAIM_MIMES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];
const DOCUMENT_MIMES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/jpeg",
    "image/png",
];

/// Metadata of a user-selected file. This is all the demo ever touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime: mime.into(),
        }
    }

    /// Size formatted the way the UI displays it.
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size_bytes as f64 / 1024.0 / 1024.0)
    }
}

fn check(
    meta: &FileMeta,
    limit: u64,
    allowed: &[&str],
    expected: &str,
) -> Result<(), ValidationError> {
    if !allowed.contains(&meta.mime.as_str()) {
        return Err(ValidationError::UnsupportedFileType {
            mime: meta.mime.clone(),
            expected: expected.to_string(),
        });
    }
    if meta.size_bytes > limit {
        return Err(ValidationError::FileTooLarge {
            size_bytes: meta.size_bytes,
            limit_bytes: limit,
        });
    }
    Ok(())
}

/// Policy uploads must be PDF and at most 10MB.
pub fn validate_policy_upload(meta: &FileMeta) -> Result<(), ValidationError> {
    check(meta, UPLOAD_SIZE_LIMIT, &[PDF_MIME], "PDF")
}

/// Claim files may be PDF, DOC or DOCX, at most 10MB.
pub fn validate_claim_upload(meta: &FileMeta) -> Result<(), ValidationError> {
    check(meta, UPLOAD_SIZE_LIMIT, CLAIM_MIMES, "PDF, DOC or DOCX")
}

/// Supporting documents also allow images, at most 5MB.
pub fn validate_document_upload(meta: &FileMeta) -> Result<(), ValidationError> {
    check(
        meta,
        DOCUMENT_SIZE_LIMIT,
        DOCUMENT_MIMES,
        "PDF, DOC, DOCX, JPG or PNG",
    )
}

/// Built-in sample files the terminal demo lets the user "select".
///
/// The list deliberately includes an oversized file and a wrong-typed
/// file so both rejection paths are reachable from the UI.
pub fn sample_policy_files() -> Vec<FileMeta> {
    vec![
        FileMeta::new("HealthPolicy_Basic.pdf", 2_412_332, PDF_MIME),
        FileMeta::new("HealthPolicy_Family.pdf", 4_876_010, PDF_MIME),
        FileMeta::new("HealthPolicy_HDHP.pdf", 1_204_788, PDF_MIME),
        FileMeta::new("FullPlanArchive.pdf", 11 * 1024 * 1024, PDF_MIME),
        FileMeta::new("PolicyNotes.txt", 5_120, "text/plain"),
    ]
}

/// Sample claim files for the predictor page.
pub fn sample_claim_files() -> Vec<FileMeta> {
    vec![
        FileMeta::new("Claim_Surgery_0412.pdf", 3_310_240, PDF_MIME),
        FileMeta::new("Claim_Emergency_0227.docx", 801_355, CLAIM_MIMES[2]),
        FileMeta::new("Claim_Wellness_0103.pdf", 412_009, PDF_MIME),
        FileMeta::new("Claim_Imaging_Bundle.pdf", 12 * 1024 * 1024, PDF_MIME),
    ]
}

/// Sample supporting documents for the documentation page. Names are
/// chosen so they match checklist entries by first word; the oversized
/// hospital-records scan demonstrates the tighter 5MB limit.
pub fn sample_document_files() -> Vec<FileMeta> {
    vec![
        FileMeta::new("Pre-Authorization_Approval.pdf", 412_300, PDF_MIME),
        FileMeta::new("Itemized_Bill_0412.pdf", 188_022, PDF_MIME),
        FileMeta::new("Insurance_Card_Copy.jpg", 2_240_881, "image/jpeg"),
        FileMeta::new("Photo_ID_Scan.png", 1_406_221, "image/png"),
        FileMeta::new("Treatment_Plan.docx", 352_110, DOCUMENT_MIMES[2]),
        FileMeta::new("Hospital_Admission_Records.pdf", 6 * 1024 * 1024, PDF_MIME),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_upload_accepts_small_pdf() {
        let meta = FileMeta::new("policy.pdf", 1024, "application/pdf");
        assert!(validate_policy_upload(&meta).is_ok());
    }

    #[test]
    fn test_policy_upload_rejects_oversize() {
        // 11MB against the 10MB limit
        let meta = FileMeta::new("policy.pdf", 11 * 1024 * 1024, "application/pdf");
        let err = validate_policy_upload(&meta).unwrap_err();
        assert_eq!(
            err,
            ValidationError::FileTooLarge {
                size_bytes: 11 * 1024 * 1024,
                limit_bytes: UPLOAD_SIZE_LIMIT,
            }
        );
    }

    #[test]
    fn test_policy_upload_rejects_non_pdf() {
        let meta = FileMeta::new("policy.txt", 1024, "text/plain");
        assert!(matches!(
            validate_policy_upload(&meta),
            Err(ValidationError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn test_claim_upload_accepts_docx() {
        let meta = FileMeta::new(
            "claim.docx",
            1024,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        );
        assert!(validate_claim_upload(&meta).is_ok());
    }

    #[test]
    fn test_document_upload_limit_is_tighter() {
        let meta = FileMeta::new("scan.jpg", 6 * 1024 * 1024, "image/jpeg");
        assert!(matches!(
            validate_document_upload(&meta),
            Err(ValidationError::FileTooLarge { .. })
        ));
        let meta = FileMeta::new("scan.jpg", 4 * 1024 * 1024, "image/jpeg");
        assert!(validate_document_upload(&meta).is_ok());
    }

    #[test]
    fn test_sample_lists_cover_rejection_paths() {
        let samples = sample_policy_files();
        assert!(samples.iter().any(|f| validate_policy_upload(f).is_ok()));
        assert!(samples
            .iter()
            .any(|f| matches!(validate_policy_upload(f), Err(ValidationError::FileTooLarge { .. }))));
        assert!(samples.iter().any(|f| matches!(
            validate_policy_upload(f),
            Err(ValidationError::UnsupportedFileType { .. })
        )));
    }

    #[test]
    fn test_document_samples_cover_both_outcomes() {
        let samples = sample_document_files();
        assert!(samples.iter().any(|f| validate_document_upload(f).is_ok()));
        assert!(samples.iter().any(|f| matches!(
            validate_document_upload(f),
            Err(ValidationError::FileTooLarge { .. })
        )));
    }

    #[test]
    fn test_display_size() {
        let meta = FileMeta::new("a.pdf", 2 * 1024 * 1024 + 512 * 1024, "application/pdf");
        assert_eq!(meta.display_size(), "2.50 MB");
    }
}
