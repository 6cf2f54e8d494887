use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::{
    GenerationKind, InterviewQuestion, JobApplication, JobStatus, ResumeProfile, MAX_RESUMES,
};
use crate::reminders::{ReminderNotifier, ReminderPermission};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    ApiKeySetup,
    Suite,
}

/// The six mutually exclusive panels of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Resume,
    CoverLetter,
    Tracker,
    Interview,
    Reminders,
    StudyGuide,
}

impl Tab {
    pub const ALL: [Self; 6] = [
        Self::Resume,
        Self::CoverLetter,
        Self::Tracker,
        Self::Interview,
        Self::Reminders,
        Self::StudyGuide,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Resume => "Resume",
            Self::CoverLetter => "Cover Letter",
            Self::Tracker => "Job Tracker",
            Self::Interview => "Interview",
            Self::Reminders => "Reminders",
            Self::StudyGuide => "Study Guide",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|tab| *tab == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Focus cycle for the tab, first entry is the default focus.
    pub const fn controls(self) -> &'static [Control] {
        match self {
            Self::Resume => &[
                Control::SavedResumes,
                Control::ImportPath,
                Control::ResumeBuffer,
                Control::JobDescription,
                Control::GenerateResume,
            ],
            Self::CoverLetter => &[Control::GenerateCoverLetter],
            Self::Tracker => &[
                Control::JobTitle,
                Control::JobCompany,
                Control::JobStatusField,
                Control::JobDate,
                Control::AddJob,
                Control::JobList,
            ],
            Self::Interview => &[
                Control::JobRole,
                Control::CustomQuestions,
                Control::GenerateQuestions,
            ],
            Self::Reminders => &[Control::ReminderTime, Control::EnableReminder],
            Self::StudyGuide => &[Control::StudyJobList, Control::GenerateStudyGuide],
        }
    }
}

/// Every focusable control across the six tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SavedResumes,
    ImportPath,
    ResumeBuffer,
    JobDescription,
    GenerateResume,
    GenerateCoverLetter,
    JobTitle,
    JobCompany,
    JobStatusField,
    JobDate,
    AddJob,
    JobList,
    JobRole,
    CustomQuestions,
    GenerateQuestions,
    ReminderTime,
    EnableReminder,
    StudyJobList,
    GenerateStudyGuide,
}

impl Control {
    /// Text-entry controls toggle an editing mode on Enter.
    pub const fn is_text_field(self) -> bool {
        matches!(
            self,
            Self::ImportPath
                | Self::ResumeBuffer
                | Self::JobDescription
                | Self::JobTitle
                | Self::JobCompany
                | Self::JobDate
                | Self::JobRole
                | Self::CustomQuestions
                | Self::ReminderTime
        )
    }

    /// Multi-line fields keep Enter as a newline while editing.
    pub const fn is_multiline(self) -> bool {
        matches!(
            self,
            Self::ResumeBuffer | Self::JobDescription | Self::CustomQuestions
        )
    }
}

/// Modal dialogs replacing the original browser confirm/prompt/alert calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    ConfirmDeleteResume(Uuid),
    ConfirmDeleteJob(Uuid),
    PromptResumeName,
    Help,
}

/// Everything a spawned generation task needs, captured at dispatch time so
/// later edits to the form fields cannot leak into an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Resume {
        api_key: String,
        base_resume: String,
        job_description: String,
    },
    CoverLetter {
        api_key: String,
        base_resume: String,
        job_description: String,
    },
    Questions {
        api_key: String,
        job_role: String,
    },
    StudyGuide {
        api_key: String,
        job_title: String,
        company: String,
    },
}

impl GenerationRequest {
    pub const fn kind(&self) -> GenerationKind {
        match self {
            Self::Resume { .. } => GenerationKind::Resume,
            Self::CoverLetter { .. } => GenerationKind::CoverLetter,
            Self::Questions { .. } => GenerationKind::Questions,
            Self::StudyGuide { .. } => GenerationKind::StudyGuide,
        }
    }
}

/// Result of a finished generation task, applied back on the event loop.
#[derive(Debug)]
pub enum GenerationOutcome {
    Saved(PathBuf),
    Questions(Vec<InterviewQuestion>),
    Failed(String),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub active_tab: Tab,
    pub focus: Control,
    pub editing: bool,
    pub modal: Option<Modal>,
    pub prompt_input: String,
    pub status_message: String,

    // Held in memory only, sent with every generation request.
    pub api_key: String,

    pub resumes: Vec<ResumeProfile>,
    pub selected_resume: Option<Uuid>,
    pub resume_list_index: usize,
    pub resume_buffer: String,
    pub import_path: String,
    pub job_description: String,

    pub jobs: Vec<JobApplication>,
    pub job_list_index: usize,
    pub new_job_title: String,
    pub new_job_company: String,
    pub new_job_status_index: usize,
    pub new_job_date: String,

    pub job_role: String,
    pub custom_questions: String,
    pub generated_questions: Vec<InterviewQuestion>,

    pub study_job_index: Option<usize>,

    pub reminder_time: String,
    pub reminder_enabled: bool,

    pub generating: Option<GenerationKind>,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(api_key_prefill: Option<String>) -> Self {
        let api_key = api_key_prefill.unwrap_or_default();
        let screen = if api_key.is_empty() {
            AppScreen::ApiKeySetup
        } else {
            AppScreen::Suite
        };

        Self {
            running: true,
            screen,
            active_tab: Tab::Resume,
            focus: Tab::Resume.controls()[0],
            editing: false,
            modal: None,
            prompt_input: String::new(),
            status_message: String::new(),
            api_key,
            resumes: Vec::new(),
            selected_resume: None,
            resume_list_index: 0,
            resume_buffer: String::new(),
            import_path: String::new(),
            job_description: String::new(),
            jobs: Vec::new(),
            job_list_index: 0,
            new_job_title: String::new(),
            new_job_company: String::new(),
            new_job_status_index: 0,
            new_job_date: String::new(),
            job_role: String::new(),
            custom_questions: String::new(),
            generated_questions: Vec::new(),
            study_job_index: None,
            reminder_time: "09:00".to_string(),
            reminder_enabled: false,
            generating: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    /// Per-frame tick for the busy indicator.
    pub fn update(&mut self) {
        if self.generating.is_some() {
            self.throbber_state.calc_next();
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    // ---- tab and focus ----------------------------------------------------

    /// Pure display change, no side effects on data.
    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.focus = tab.controls()[0];
        self.editing = false;
    }

    pub fn next_tab(&mut self) {
        self.set_tab(self.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.set_tab(self.active_tab.prev());
    }

    pub fn focus_next(&mut self) {
        let controls = self.active_tab.controls();
        let current = controls.iter().position(|c| *c == self.focus).unwrap_or(0);
        self.focus = controls[(current + 1) % controls.len()];
    }

    pub fn focus_prev(&mut self) {
        let controls = self.active_tab.controls();
        let current = controls.iter().position(|c| *c == self.focus).unwrap_or(0);
        self.focus = controls[(current + controls.len() - 1) % controls.len()];
    }

    // ---- resumes ----------------------------------------------------------

    /// Opens the name prompt for saving the current buffer, or rejects with a
    /// visible message when the buffer is empty or the collection is full.
    pub fn save_resume_request(&mut self) {
        if self.resume_buffer.trim().is_empty() {
            self.notify("Load or paste a resume first");
            return;
        }
        if self.resumes.len() >= MAX_RESUMES {
            self.notify(format!("Maximum {MAX_RESUMES} resumes"));
            return;
        }
        self.prompt_input.clear();
        self.modal = Some(Modal::PromptResumeName);
    }

    /// Completes the name prompt. An empty name aborts with no state change.
    pub fn confirm_resume_name(&mut self) {
        self.modal = None;
        let name = self.prompt_input.trim().to_string();
        if name.is_empty() {
            return;
        }

        let profile = ResumeProfile::new(name, self.resume_buffer.clone());
        self.selected_resume = Some(profile.id);
        self.resume_list_index = self.resumes.len();
        self.resumes.push(profile);
        self.notify("Resume saved");
    }

    /// Loads a saved profile into the buffer. Unknown ids are a no-op.
    pub fn select_resume(&mut self, id: Uuid) {
        if let Some(profile) = self.resumes.iter().find(|r| r.id == id) {
            self.selected_resume = Some(id);
            self.resume_buffer = profile.content.clone();
        }
    }

    pub fn resume_under_cursor(&self) -> Option<&ResumeProfile> {
        self.resumes.get(self.resume_list_index)
    }

    /// Destructive actions go through an explicit confirmation modal.
    pub fn request_delete_resume(&mut self) {
        if let Some(profile) = self.resume_under_cursor() {
            self.modal = Some(Modal::ConfirmDeleteResume(profile.id));
        }
    }

    pub fn delete_resume(&mut self, id: Uuid) {
        self.resumes.retain(|r| r.id != id);
        if self.selected_resume == Some(id) {
            self.selected_resume = None;
            self.resume_buffer.clear();
        }
        if self.resume_list_index >= self.resumes.len() && self.resume_list_index > 0 {
            self.resume_list_index = self.resumes.len() - 1;
        }
    }

    // ---- jobs -------------------------------------------------------------

    /// Appends a job from the form fields. Title and company are required;
    /// an empty date falls back to the current local day.
    pub fn add_job(&mut self) {
        let title = self.new_job_title.trim();
        let company = self.new_job_company.trim();
        if title.is_empty() || company.is_empty() {
            self.notify("Title and company are required");
            return;
        }

        let date = if self.new_job_date.trim().is_empty() {
            Local::now().date_naive()
        } else {
            match NaiveDate::parse_from_str(self.new_job_date.trim(), "%Y-%m-%d") {
                Ok(date) => date,
                Err(_) => {
                    self.notify("Date must be YYYY-MM-DD");
                    return;
                }
            }
        };

        let status = JobStatus::from_index(self.new_job_status_index).unwrap_or(JobStatus::Applied);
        self.jobs.push(JobApplication::new(title, company, status, date));

        self.new_job_title.clear();
        self.new_job_company.clear();
        self.new_job_status_index = 0;
        self.new_job_date.clear();
        self.notify("Job added");
    }

    pub fn job_under_cursor(&self) -> Option<&JobApplication> {
        self.jobs.get(self.job_list_index)
    }

    pub fn request_delete_job(&mut self) {
        if let Some(job) = self.job_under_cursor() {
            self.modal = Some(Modal::ConfirmDeleteJob(job.id));
        }
    }

    pub fn delete_job(&mut self, id: Uuid) {
        let Some(position) = self.jobs.iter().position(|j| j.id == id) else {
            return;
        };
        self.jobs.remove(position);
        if self.job_list_index >= self.jobs.len() && self.job_list_index > 0 {
            self.job_list_index = self.jobs.len() - 1;
        }
        // Keep the study-guide selection pointing at the same job.
        self.study_job_index = match self.study_job_index {
            Some(selected) if selected == position => None,
            Some(selected) if selected > position => Some(selected - 1),
            other => other,
        };
    }

    // ---- generation orchestration -----------------------------------------

    /// Validates the operation-specific inputs and either records a visible
    /// message (nothing dispatched, marker untouched) or marks the operation
    /// in flight and returns the request for the event loop to spawn.
    pub fn start_generation(&mut self, kind: GenerationKind) -> Option<GenerationRequest> {
        if let Some(in_flight) = self.generating {
            self.notify(format!(
                "{} generation already in progress",
                in_flight.label()
            ));
            return None;
        }

        let request = match kind {
            GenerationKind::Resume | GenerationKind::CoverLetter => {
                if self.api_key.is_empty()
                    || self.resume_buffer.trim().is_empty()
                    || self.job_description.trim().is_empty()
                {
                    self.notify("Please fill all fields");
                    return None;
                }
                let api_key = self.api_key.clone();
                let base_resume = self.resume_buffer.clone();
                let job_description = self.job_description.clone();
                if kind == GenerationKind::Resume {
                    GenerationRequest::Resume {
                        api_key,
                        base_resume,
                        job_description,
                    }
                } else {
                    GenerationRequest::CoverLetter {
                        api_key,
                        base_resume,
                        job_description,
                    }
                }
            }
            GenerationKind::Questions => {
                if self.api_key.is_empty() || self.job_role.trim().is_empty() {
                    self.notify("Enter an API key and job role");
                    return None;
                }
                GenerationRequest::Questions {
                    api_key: self.api_key.clone(),
                    job_role: self.job_role.trim().to_string(),
                }
            }
            GenerationKind::StudyGuide => {
                let job = self.study_job_index.and_then(|index| self.jobs.get(index));
                let Some(job) = job else {
                    self.notify("Select a job first");
                    return None;
                };
                if self.api_key.is_empty() {
                    self.notify("Enter an API key first");
                    return None;
                }
                GenerationRequest::StudyGuide {
                    api_key: self.api_key.clone(),
                    job_title: job.title.clone(),
                    company: job.company.clone(),
                }
            }
        };

        self.generating = Some(kind);
        self.notify(format!("Generating {}...", kind.label().to_lowercase()));
        Some(request)
    }

    /// Applies a finished generation. The in-flight marker clears
    /// unconditionally, success or failure.
    pub fn finish_generation(&mut self, outcome: GenerationOutcome) {
        self.generating = None;
        match outcome {
            GenerationOutcome::Saved(path) => {
                self.notify(format!("Saved {}", path.display()));
            }
            GenerationOutcome::Questions(questions) => {
                self.notify(format!("Generated {} questions", questions.len()));
                self.generated_questions = questions;
            }
            GenerationOutcome::Failed(message) => self.notify(message),
        }
    }

    // ---- import -----------------------------------------------------------

    /// Replaces the resume buffer with imported text. The buffer is transient
    /// state until saved under a name.
    pub fn apply_imported_text(&mut self, text: String) {
        self.resume_buffer = text;
        self.notify("Resume loaded");
    }

    // ---- reminders --------------------------------------------------------

    /// Enables reminders only when the platform grants permission. Denied and
    /// unsupported outcomes leave state unchanged, silently.
    pub fn enable_reminders(&mut self, notifier: &dyn ReminderNotifier) {
        if self.reminder_enabled {
            return;
        }
        match notifier.request_permission() {
            ReminderPermission::Granted => {
                self.reminder_enabled = true;
                self.notify(format!("Reminder set for {}", self.reminder_time));
            }
            ReminderPermission::Denied | ReminderPermission::Unsupported => {}
        }
    }

    // ---- modal ------------------------------------------------------------

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.prompt_input.clear();
    }

    /// Applies a confirmed modal action.
    pub fn confirm_modal(&mut self) {
        match self.modal.clone() {
            Some(Modal::ConfirmDeleteResume(id)) => {
                self.modal = None;
                self.delete_resume(id);
            }
            Some(Modal::ConfirmDeleteJob(id)) => {
                self.modal = None;
                self.delete_job(id);
            }
            Some(Modal::PromptResumeName) => self.confirm_resume_name(),
            Some(Modal::Help) | None => self.modal = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminders::testing::FakeNotifier;

    fn app() -> App {
        App::new(Some("sk-ant-test".to_string()))
    }

    fn save_resume(app: &mut App, name: &str) {
        app.save_resume_request();
        if app.modal == Some(Modal::PromptResumeName) {
            app.prompt_input = name.to_string();
            app.confirm_resume_name();
        }
    }

    #[test]
    fn resume_collection_never_exceeds_capacity_and_ids_are_unique() {
        let mut app = app();
        for i in 0..10 {
            app.resume_buffer = format!("resume {i}");
            save_resume(&mut app, &format!("Draft {i}"));
        }

        assert_eq!(app.resumes.len(), MAX_RESUMES);
        let mut ids: Vec<_> = app.resumes.iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), MAX_RESUMES);
    }

    #[test]
    fn eighth_resume_is_rejected_with_message() {
        let mut app = app();
        for i in 0..7 {
            app.resume_buffer = format!("resume {i}");
            save_resume(&mut app, &format!("Draft {i}"));
        }
        app.status_message.clear();

        app.resume_buffer = "one more".to_string();
        app.save_resume_request();
        assert_eq!(app.modal, None);
        assert_eq!(app.resumes.len(), 7);
        assert!(!app.status_message.is_empty());
    }

    #[test]
    fn first_save_selects_the_new_profile() {
        let mut app = app();
        app.resume_buffer = "Jane Doe, Engineer".to_string();
        save_resume(&mut app, "Draft A");

        assert_eq!(app.resumes.len(), 1);
        assert_eq!(app.selected_resume, Some(app.resumes[0].id));
        assert_eq!(app.resumes[0].name, "Draft A");
    }

    #[test]
    fn empty_prompt_aborts_save() {
        let mut app = app();
        app.resume_buffer = "text".to_string();
        app.save_resume_request();
        app.prompt_input.clear();
        app.confirm_resume_name();

        assert!(app.resumes.is_empty());
        assert_eq!(app.selected_resume, None);
    }

    #[test]
    fn empty_buffer_rejects_save() {
        let mut app = app();
        app.resume_buffer = "   ".to_string();
        app.save_resume_request();

        assert_eq!(app.modal, None);
        assert!(app.resumes.is_empty());
    }

    #[test]
    fn deleting_selected_resume_clears_buffer() {
        let mut app = app();
        app.resume_buffer = "text".to_string();
        save_resume(&mut app, "Draft A");
        let id = app.resumes[0].id;

        app.delete_resume(id);
        assert!(app.resumes.is_empty());
        assert_eq!(app.selected_resume, None);
        assert!(app.resume_buffer.is_empty());
    }

    #[test]
    fn deleting_non_selected_resume_keeps_buffer() {
        let mut app = app();
        app.resume_buffer = "first".to_string();
        save_resume(&mut app, "Draft A");
        let first = app.resumes[0].id;
        app.resume_buffer = "second".to_string();
        save_resume(&mut app, "Draft B");

        app.delete_resume(first);
        assert_eq!(app.resumes.len(), 1);
        assert_eq!(app.resume_buffer, "second");
        assert_eq!(app.selected_resume, Some(app.resumes[0].id));
    }

    #[test]
    fn selecting_unknown_resume_is_a_no_op() {
        let mut app = app();
        app.resume_buffer = "text".to_string();
        save_resume(&mut app, "Draft A");
        let selected = app.selected_resume;

        app.select_resume(Uuid::new_v4());
        assert_eq!(app.selected_resume, selected);
        assert_eq!(app.resume_buffer, "text");
    }

    #[test]
    fn select_resume_loads_content_into_buffer() {
        let mut app = app();
        app.resume_buffer = "alpha".to_string();
        save_resume(&mut app, "A");
        let first = app.resumes[0].id;
        app.resume_buffer = "beta".to_string();
        save_resume(&mut app, "B");

        app.select_resume(first);
        assert_eq!(app.resume_buffer, "alpha");
        assert_eq!(app.selected_resume, Some(first));
    }

    #[test]
    fn add_job_requires_title_and_company() {
        let mut app = app();
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "  ".to_string();
        app.add_job();
        assert!(app.jobs.is_empty());

        app.new_job_company = "Acme".to_string();
        app.add_job();
        assert_eq!(app.jobs.len(), 1);
        assert_eq!(app.jobs[0].date, Local::now().date_naive());
        assert_eq!(app.jobs[0].status, JobStatus::Applied);
        assert!(app.new_job_title.is_empty());
    }

    #[test]
    fn add_job_honors_supplied_date() {
        let mut app = app();
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "Acme".to_string();
        app.new_job_date = "2026-01-15".to_string();
        app.add_job();

        let expected = NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date");
        assert_eq!(app.jobs[0].date, expected);
    }

    #[test]
    fn add_job_rejects_malformed_date() {
        let mut app = app();
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "Acme".to_string();
        app.new_job_date = "January 15".to_string();
        app.add_job();

        assert!(app.jobs.is_empty());
    }

    #[test]
    fn generation_with_missing_inputs_emits_nothing() {
        let mut app = app();
        assert_eq!(app.start_generation(GenerationKind::Resume), None);
        assert_eq!(app.generating, None);
        assert_eq!(app.status_message, "Please fill all fields");

        assert_eq!(app.start_generation(GenerationKind::Questions), None);
        assert_eq!(app.generating, None);

        assert_eq!(app.start_generation(GenerationKind::StudyGuide), None);
        assert_eq!(app.generating, None);
    }

    #[test]
    fn generation_without_credential_emits_nothing() {
        let mut app = App::new(None);
        app.resume_buffer = "resume".to_string();
        app.job_description = "jd".to_string();

        assert_eq!(app.start_generation(GenerationKind::Resume), None);
        assert_eq!(app.generating, None);
    }

    #[test]
    fn valid_generation_sets_in_flight_marker() {
        let mut app = app();
        app.resume_buffer = "resume".to_string();
        app.job_description = "jd".to_string();

        let request = app.start_generation(GenerationKind::Resume);
        assert!(matches!(request, Some(GenerationRequest::Resume { .. })));
        assert_eq!(app.generating, Some(GenerationKind::Resume));
    }

    #[test]
    fn second_generation_is_refused_while_in_flight() {
        let mut app = app();
        app.resume_buffer = "resume".to_string();
        app.job_description = "jd".to_string();
        app.start_generation(GenerationKind::Resume);

        assert_eq!(app.start_generation(GenerationKind::CoverLetter), None);
        assert_eq!(app.generating, Some(GenerationKind::Resume));
    }

    #[test]
    fn finish_generation_clears_marker_on_failure() {
        let mut app = app();
        app.resume_buffer = "resume".to_string();
        app.job_description = "jd".to_string();
        app.start_generation(GenerationKind::Resume);

        app.finish_generation(GenerationOutcome::Failed(
            "Resume generation failed".into(),
        ));
        assert_eq!(app.generating, None);
        assert_eq!(app.status_message, "Resume generation failed");
    }

    #[test]
    fn finish_generation_replaces_question_list() {
        let mut app = app();
        app.job_role = "PM".to_string();
        app.generated_questions = vec![InterviewQuestion {
            category: "old".to_string(),
            question: "old".to_string(),
        }];
        app.start_generation(GenerationKind::Questions);

        app.finish_generation(GenerationOutcome::Questions(vec![InterviewQuestion {
            category: "Behavioral".to_string(),
            question: "Tell me about a time...".to_string(),
        }]));
        assert_eq!(app.generating, None);
        assert_eq!(app.generated_questions.len(), 1);
        assert_eq!(app.generated_questions[0].category, "Behavioral");
    }

    #[test]
    fn study_guide_uses_selected_tracked_job() {
        let mut app = app();
        app.new_job_title = "Project Manager".to_string();
        app.new_job_company = "Acme".to_string();
        app.add_job();
        app.study_job_index = Some(0);

        let request = app.start_generation(GenerationKind::StudyGuide);
        match request {
            Some(GenerationRequest::StudyGuide {
                job_title, company, ..
            }) => {
                assert_eq!(job_title, "Project Manager");
                assert_eq!(company, "Acme");
            }
            other => panic!("unexpected request: {other:?}"),
        }
    }

    #[test]
    fn deleting_a_job_keeps_study_selection_on_the_same_job() {
        let mut app = app();
        for (title, company) in [("A", "Acme"), ("B", "Beta"), ("C", "Corp")] {
            app.new_job_title = title.to_string();
            app.new_job_company = company.to_string();
            app.add_job();
        }
        app.study_job_index = Some(2);

        let first = app.jobs[0].id;
        app.delete_job(first);
        assert_eq!(app.study_job_index, Some(1));
        assert_eq!(app.jobs[1].title, "C");

        let selected = app.jobs[1].id;
        app.delete_job(selected);
        assert_eq!(app.study_job_index, None);
    }

    #[test]
    fn reminder_granted_enables_and_confirms_time() {
        let mut app = app();
        app.enable_reminders(&FakeNotifier(ReminderPermission::Granted));

        assert!(app.reminder_enabled);
        assert_eq!(app.status_message, "Reminder set for 09:00");
    }

    #[test]
    fn reminder_denied_and_unsupported_are_silent() {
        let mut app = app();
        app.enable_reminders(&FakeNotifier(ReminderPermission::Denied));
        assert!(!app.reminder_enabled);
        assert!(app.status_message.is_empty());

        app.enable_reminders(&FakeNotifier(ReminderPermission::Unsupported));
        assert!(!app.reminder_enabled);
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn tab_switching_has_no_data_side_effects() {
        let mut app = app();
        app.resume_buffer = "text".to_string();
        save_resume(&mut app, "Draft A");
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "Acme".to_string();
        app.add_job();

        for tab in Tab::ALL {
            app.set_tab(tab);
        }
        assert_eq!(app.resumes.len(), 1);
        assert_eq!(app.jobs.len(), 1);
        assert_eq!(app.resume_buffer, "text");
    }

    #[test]
    fn confirm_modal_deletes_job() {
        let mut app = app();
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "Acme".to_string();
        app.add_job();

        app.request_delete_job();
        assert!(matches!(app.modal, Some(Modal::ConfirmDeleteJob(_))));
        app.confirm_modal();
        assert!(app.jobs.is_empty());
        assert_eq!(app.modal, None);
    }

    #[test]
    fn dismissing_confirm_keeps_entry() {
        let mut app = app();
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "Acme".to_string();
        app.add_job();

        app.request_delete_job();
        app.close_modal();
        assert_eq!(app.jobs.len(), 1);
    }
}
