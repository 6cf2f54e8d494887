use color_eyre::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::client::GeneratedDocument;

/// Writes a generated document under the download directory and returns the
/// final path. The caller drops the byte buffer with the document value as
/// soon as this returns.
pub fn save_document(download_dir: &Path, document: &GeneratedDocument) -> Result<PathBuf> {
    if !download_dir.exists() {
        fs::create_dir_all(download_dir)?;
    }

    let path = download_dir.join(&document.filename);
    let mut file = fs::File::create(&path)?;
    file.write_all(&document.bytes)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_under_derived_filename() {
        let dir = tempfile::tempdir().expect("tempdir");
        let document = GeneratedDocument {
            filename: "FO_Cover_Letter.docx".to_string(),
            bytes: vec![1, 2, 3],
        };

        let path = save_document(dir.path(), &document).expect("save");
        assert_eq!(path, dir.path().join("FO_Cover_Letter.docx"));
        assert_eq!(fs::read(path).expect("read back"), vec![1, 2, 3]);
    }

    #[test]
    fn creates_missing_download_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("downloads");
        let document = GeneratedDocument {
            filename: "resume.docx".to_string(),
            bytes: Vec::new(),
        };

        let path = save_document(&nested, &document).expect("save");
        assert!(path.exists());
    }
}
