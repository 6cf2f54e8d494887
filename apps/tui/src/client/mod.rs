//! Remote generation client — the single point of entry for all calls to the
//! JobEase backend. No other module issues HTTP requests.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::InterviewQuestion;

pub mod filename;

use filename::{resume_filename, study_guide_filename, COVER_LETTER_FILENAME};

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // The UI shows a generic failure message; the status is kept for logs.
    #[error("generation failed (status {status})")]
    Api { status: u16 },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentRequest<'a> {
    api_key: &'a str,
    base_resume: &'a str,
    job_description: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsRequest<'a> {
    api_key: &'a str,
    job_role: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StudyGuideRequest<'a> {
    api_key: &'a str,
    job_title: &'a str,
    company: &'a str,
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    questions: Vec<InterviewQuestion>,
}

/// A binary document returned by the backend, paired with the filename it
/// should be saved under.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// HTTP client for the four generation endpoints.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Tailors the base resume to a job description. The filename comes from
    /// the `Content-Disposition` header when the server suggests one.
    pub async fn generate_resume(
        &self,
        api_key: &str,
        base_resume: &str,
        job_description: &str,
    ) -> Result<GeneratedDocument, GenerateError> {
        let body = DocumentRequest {
            api_key,
            base_resume,
            job_description,
        };
        let response = self
            .client
            .post(self.endpoint("generate-resume"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("generate-resume returned {status}");
            return Err(GenerateError::Api {
                status: status.as_u16(),
            });
        }

        let disposition = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().await?;

        Ok(GeneratedDocument {
            filename: resume_filename(disposition.as_deref()),
            bytes: bytes.to_vec(),
        })
    }

    /// Cover letters always save under the same fixed name.
    pub async fn generate_cover_letter(
        &self,
        api_key: &str,
        base_resume: &str,
        job_description: &str,
    ) -> Result<GeneratedDocument, GenerateError> {
        let body = DocumentRequest {
            api_key,
            base_resume,
            job_description,
        };
        let response = self
            .client
            .post(self.endpoint("generate-cover-letter"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("generate-cover-letter returned {status}");
            return Err(GenerateError::Api {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(GeneratedDocument {
            filename: COVER_LETTER_FILENAME.to_string(),
            bytes: bytes.to_vec(),
        })
    }

    /// The one JSON-shaped operation: returns the question list that replaces
    /// the in-memory one.
    pub async fn generate_questions(
        &self,
        api_key: &str,
        job_role: &str,
    ) -> Result<Vec<InterviewQuestion>, GenerateError> {
        let body = QuestionsRequest { api_key, job_role };
        let response = self
            .client
            .post(self.endpoint("generate-questions"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("generate-questions returned {status}");
            return Err(GenerateError::Api {
                status: status.as_u16(),
            });
        }

        let parsed: QuestionsResponse = response.json().await?;
        debug!("received {} interview questions", parsed.questions.len());
        Ok(parsed.questions)
    }

    /// Study guide for a tracked job; filename derives from the job title.
    pub async fn generate_study_guide(
        &self,
        api_key: &str,
        job_title: &str,
        company: &str,
    ) -> Result<GeneratedDocument, GenerateError> {
        let body = StudyGuideRequest {
            api_key,
            job_title,
            company,
        };
        let response = self
            .client
            .post(self.endpoint("generate-study-guide"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("generate-study-guide returned {status}");
            return Err(GenerateError::Api {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(GeneratedDocument {
            filename: study_guide_filename(job_title),
            bytes: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = GenerationClient::new("http://localhost:8000/api");
        assert_eq!(
            client.endpoint("generate-resume"),
            "http://localhost:8000/api/generate-resume"
        );
    }

    #[test]
    fn request_bodies_use_camel_case_fields() {
        let body = DocumentRequest {
            api_key: "sk-ant-test",
            base_resume: "resume",
            job_description: "jd",
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert!(json.get("apiKey").is_some());
        assert!(json.get("baseResume").is_some());
        assert!(json.get("jobDescription").is_some());
    }

    #[test]
    fn questions_response_deserializes() {
        let raw = r#"{"questions":[{"category":"Behavioral","question":"Tell me about a time..."}]}"#;
        let parsed: QuestionsResponse = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(parsed.questions.len(), 1);
        assert_eq!(parsed.questions[0].category, "Behavioral");
    }
}
