use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("file is not valid UTF-8 text")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to extract .docx text: {0}")]
    Docx(String),
}

/// Converts a user-selected file into plain resume text.
///
/// `.txt` is decoded as UTF-8, `.docx` goes through structured text
/// extraction. Any other suffix yields `Ok(None)`: the file is ignored and
/// existing state must stay untouched.
pub fn import_resume(path: &Path) -> Result<Option<String>, ImportError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("txt") => {
            let data = fs::read(path)?;
            Ok(Some(String::from_utf8(data)?))
        }
        Some("docx") => {
            let data = fs::read(path)?;
            extract_docx_text(&data).map(Some)
        }
        _ => Ok(None),
    }
}

fn extract_docx_text(data: &[u8]) -> Result<String, ImportError> {
    use docx_rs::read_docx;

    let docx = read_docx(data).map_err(|e| ImportError::Docx(format!("{e:?}")))?;
    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn txt_import_returns_exact_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.txt");
        fs::write(&path, "Jane Doe, Engineer").expect("write fixture");

        let text = import_resume(&path).expect("import").expect("txt is handled");
        assert_eq!(text, "Jane Doe, Engineer");
    }

    #[test]
    fn unknown_extension_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.pdf");
        fs::write(&path, b"%PDF-1.4").expect("write fixture");

        assert!(import_resume(&path).expect("import").is_none());
    }

    #[test]
    fn missing_txt_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.txt");

        assert!(import_resume(&path).is_err());
    }

    #[test]
    fn invalid_utf8_txt_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).expect("write fixture");

        assert!(import_resume(&path).is_err());
    }

    #[test]
    fn docx_import_extracts_paragraph_text() {
        use docx_rs::{Docx, Paragraph, Run};

        let mut buffer = Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Engineer")))
            .build()
            .pack(&mut buffer)
            .expect("pack docx");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.docx");
        fs::write(&path, buffer.into_inner()).expect("write fixture");

        let text = import_resume(&path)
            .expect("import")
            .expect("docx is handled");
        assert_eq!(text, "Jane Doe\nEngineer\n");
    }
}
