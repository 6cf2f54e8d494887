//! Pure filename derivation for downloaded documents, kept apart from the
//! network code so the fallback rules are unit-testable.

pub const RESUME_FALLBACK: &str = "resume.docx";
pub const COVER_LETTER_FILENAME: &str = "FO_Cover_Letter.docx";

/// Extracts the suggested filename from a `Content-Disposition` header value.
///
/// Handles the shape the backend emits: `attachment; filename="name.docx"`,
/// with or without quotes. Returns `None` when the header is absent or carries
/// no filename token.
pub fn filename_from_content_disposition(header: Option<&str>) -> Option<String> {
    let header = header?;
    let (_, rest) = header.split_once("filename=")?;
    let name = rest
        .split(';')
        .next()
        .unwrap_or(rest)
        .trim()
        .trim_matches('"')
        .trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Server-suggested name with the documented fallback.
pub fn resume_filename(header: Option<&str>) -> String {
    filename_from_content_disposition(header).unwrap_or_else(|| RESUME_FALLBACK.to_string())
}

/// Study guides are named after the job title, whitespace folded to
/// underscores.
pub fn study_guide_filename(job_title: &str) -> String {
    let slug: String = job_title
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("FO_Study_Guide_{slug}.docx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_filename() {
        let header = Some("attachment; filename=\"FO_Engineer_Acme.docx\"");
        assert_eq!(
            filename_from_content_disposition(header).as_deref(),
            Some("FO_Engineer_Acme.docx")
        );
    }

    #[test]
    fn parses_unquoted_filename() {
        let header = Some("attachment; filename=report.docx");
        assert_eq!(
            filename_from_content_disposition(header).as_deref(),
            Some("report.docx")
        );
    }

    #[test]
    fn missing_header_falls_back() {
        assert_eq!(resume_filename(None), RESUME_FALLBACK);
    }

    #[test]
    fn header_without_filename_falls_back() {
        assert_eq!(resume_filename(Some("attachment")), RESUME_FALLBACK);
        assert_eq!(resume_filename(Some("attachment; filename=")), RESUME_FALLBACK);
    }

    #[test]
    fn study_guide_name_replaces_whitespace() {
        assert_eq!(
            study_guide_filename("Project Manager"),
            "FO_Study_Guide_Project_Manager.docx"
        );
    }
}
