//! Request validation — the first pipeline stage. Pure; no side effects.

use bytes::Bytes;

use crate::errors::AppError;

/// The enumerated analysis task. Selects which instruction template is sent
/// to the model alongside the resume page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisKind {
    /// General fit/strengths assessment. Default when `promptType` is absent.
    #[default]
    Analysis,
    /// Percentage match between description and resume.
    Match,
    /// Skills required by the description but missing from the resume.
    Skills,
}

impl AnalysisKind {
    /// Parses the `promptType` form value. `None` for unknown kinds; the
    /// validator turns that into a `BadInput`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "analysis" => Some(AnalysisKind::Analysis),
            "match" => Some(AnalysisKind::Match),
            "skills" => Some(AnalysisKind::Skills),
            _ => None,
        }
    }
}

/// Raw multipart fields as the handler drained them, before any checks.
#[derive(Debug, Default)]
pub struct RawAnalysisForm {
    pub resume: Option<Bytes>,
    pub job_description: Option<String>,
    pub prompt_type: Option<String>,
}

/// A validated request. Owned by one request's handling, dropped with it.
#[derive(Debug)]
pub struct AnalysisRequest {
    pub resume: Bytes,
    pub job_description: String,
    pub kind: AnalysisKind,
}

/// Checks fields in a fixed order; the first failure wins and later fields
/// are not inspected.
pub fn validate(form: RawAnalysisForm) -> Result<AnalysisRequest, AppError> {
    let resume = match form.resume {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => {
            return Err(AppError::BadInput(
                "No resume file was provided.".to_string(),
            ))
        }
    };

    let job_description = form
        .job_description
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();
    if job_description.is_empty() {
        return Err(AppError::BadInput(
            "Job description cannot be empty.".to_string(),
        ));
    }

    // An absent field defaults; a present-but-unknown value is an error.
    let kind = match form.prompt_type.as_deref() {
        None => AnalysisKind::default(),
        Some(s) => AnalysisKind::parse(s).ok_or_else(|| {
            AppError::BadInput("Invalid analysis type specified.".to_string())
        })?,
    };

    Ok(AnalysisRequest {
        resume,
        job_description,
        kind,
    })
}
