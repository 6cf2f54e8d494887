use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

/// Upper bound on concurrently saved resume profiles.
pub const MAX_RESUMES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    pub const COUNT: usize = 4;

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interview => "interview",
            Self::Offer => "offer",
            Self::Rejected => "rejected",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Applied),
            1 => Some(Self::Interview),
            2 => Some(Self::Offer),
            3 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "applied" => Some(Self::Applied),
            "interview" => Some(Self::Interview),
            "offer" => Some(Self::Offer),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }
}

/// The four server-side generation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationKind {
    Resume,
    CoverLetter,
    Questions,
    StudyGuide,
}

impl GenerationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::CoverLetter => "Cover Letter",
            Self::Questions => "Interview Questions",
            Self::StudyGuide => "Study Guide",
        }
    }
}

/// A saved resume text. Replaced wholesale on edit (delete + recreate),
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct ResumeProfile {
    pub id: Uuid,
    pub name: String,
    pub content: String,
}

impl ResumeProfile {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One tracked job application.
#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub status: JobStatus,
    pub date: NaiveDate,
}

impl JobApplication {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        status: JobStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            status,
            date,
        }
    }
}

/// A generated interview question as returned by the questions endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InterviewQuestion {
    pub category: String,
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_status_index_round_trip() {
        for index in 0..JobStatus::COUNT {
            let status = JobStatus::from_index(index).expect("index in range");
            assert_eq!(JobStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(JobStatus::from_index(JobStatus::COUNT), None);
    }

    #[test]
    fn resume_profile_ids_are_unique() {
        let a = ResumeProfile::new("Draft A", "text");
        let b = ResumeProfile::new("Draft A", "text");
        assert_ne!(a.id, b.id);
    }
}
