// Instruction templates for each analysis kind, plus the composite prompt.
// Templates are fixed at compile time; extend by adding a new AnalysisKind
// member with its instruction, never by editing existing texts without a
// version note.

use crate::analysis::validate::AnalysisKind;

/// General fit assessment.
pub const ANALYSIS_INSTRUCTION: &str =
    "You are an HR specialist in technical recruitment. Analyze the job \
     description and the attached resume. Determine how well the resume \
     matches the job requirements and highlight the candidate's relevant \
     strengths and experiences.";

/// ATS-style percentage match.
pub const MATCH_INSTRUCTION: &str =
    "You are a skilled ATS tracker. Estimate the percentage match between \
     the job description and the attached resume. State the percentage \
     first, then briefly justify it.";

/// Missing-skills gap report.
pub const SKILLS_INSTRUCTION: &str =
    "You are a career development analyst. List the skills required by the \
     job description that are missing from the attached resume.";

/// The fixed instruction text for a kind. Total over `AnalysisKind`: every
/// kind the validator accepts has a template.
pub fn instruction_for(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Analysis => ANALYSIS_INSTRUCTION,
        AnalysisKind::Match => MATCH_INSTRUCTION,
        AnalysisKind::Skills => SKILLS_INSTRUCTION,
    }
}

/// Builds the single composite text block sent to the model: job description
/// first, instruction second.
pub fn compose_prompt(job_description: &str, kind: AnalysisKind) -> String {
    format!(
        "**JOB DESCRIPTION:**\n{}\n\n**TASK:**\n{}",
        job_description.trim(),
        instruction_for(kind)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_leads_with_job_description() {
        let text = compose_prompt("Need a Go developer", AnalysisKind::Analysis);
        assert!(text.starts_with("**JOB DESCRIPTION:**\nNeed a Go developer"));
    }

    #[test]
    fn composite_ends_with_selected_instruction() {
        for kind in [AnalysisKind::Analysis, AnalysisKind::Match, AnalysisKind::Skills] {
            let text = compose_prompt("any description", kind);
            assert!(text.ends_with(instruction_for(kind)));
        }
    }

    #[test]
    fn match_composite_carries_percentage_instruction() {
        let text = compose_prompt("Need a Go developer with 5 years experience", AnalysisKind::Match);
        assert!(text.contains("Need a Go developer with 5 years experience"));
        assert!(text.contains("percentage match"));
    }

    #[test]
    fn no_instruction_is_blank() {
        for kind in [AnalysisKind::Analysis, AnalysisKind::Match, AnalysisKind::Skills] {
            assert!(!instruction_for(kind).trim().is_empty());
        }
    }

    #[test]
    fn instructions_are_distinct() {
        assert_ne!(ANALYSIS_INSTRUCTION, MATCH_INSTRUCTION);
        assert_ne!(MATCH_INSTRUCTION, SKILLS_INSTRUCTION);
        assert_ne!(ANALYSIS_INSTRUCTION, SKILLS_INSTRUCTION);
    }

    #[test]
    fn composite_trims_the_job_description() {
        let text = compose_prompt("  padded description  ", AnalysisKind::Skills);
        assert!(text.contains("**JOB DESCRIPTION:**\npadded description\n"));
    }
}
