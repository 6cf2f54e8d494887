use std::path::PathBuf;
use tracing::debug;

use crate::app::state::{GenerationOutcome, GenerationRequest};
use crate::client::GenerationClient;
use crate::download::save_document;

/// Owns the I/O side of the app: the generation client and the directory
/// generated documents are saved into. The event loop hands it captured
/// requests; state never touches the network directly.
#[derive(Debug, Clone)]
pub struct AppActions {
    pub client: GenerationClient,
    pub download_dir: PathBuf,
}

impl AppActions {
    pub fn new(api_base: impl Into<String>, download_dir: PathBuf) -> Self {
        Self {
            client: GenerationClient::new(api_base),
            download_dir,
        }
    }

    /// Runs one generation request to completion. Every error collapses into
    /// a generic failure outcome; the byte buffer of a binary response is
    /// dropped as soon as the file write returns.
    pub async fn perform(&self, request: GenerationRequest) -> GenerationOutcome {
        let kind = request.kind();
        debug!("dispatching {} generation", kind.label());

        let saved = match request {
            GenerationRequest::Resume {
                api_key,
                base_resume,
                job_description,
            } => {
                self.client
                    .generate_resume(&api_key, &base_resume, &job_description)
                    .await
            }
            GenerationRequest::CoverLetter {
                api_key,
                base_resume,
                job_description,
            } => {
                self.client
                    .generate_cover_letter(&api_key, &base_resume, &job_description)
                    .await
            }
            GenerationRequest::Questions { api_key, job_role } => {
                return match self.client.generate_questions(&api_key, &job_role).await {
                    Ok(questions) => GenerationOutcome::Questions(questions),
                    Err(e) => {
                        debug!("questions generation failed: {e}");
                        GenerationOutcome::Failed(failure_message(kind))
                    }
                };
            }
            GenerationRequest::StudyGuide {
                api_key,
                job_title,
                company,
            } => {
                self.client
                    .generate_study_guide(&api_key, &job_title, &company)
                    .await
            }
        };

        match saved {
            Ok(document) => match save_document(&self.download_dir, &document) {
                Ok(path) => GenerationOutcome::Saved(path),
                Err(e) => {
                    debug!("saving generated document failed: {e}");
                    GenerationOutcome::Failed(failure_message(kind))
                }
            },
            Err(e) => {
                debug!("{} generation failed: {e}", kind.label());
                GenerationOutcome::Failed(failure_message(kind))
            }
        }
    }
}

fn failure_message(kind: crate::domain::GenerationKind) -> String {
    format!("{} generation failed", kind.label())
}
