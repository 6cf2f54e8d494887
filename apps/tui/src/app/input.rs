use crossterm::event::KeyCode;
use std::path::Path;

use crate::app::state::{App, AppScreen, Control, GenerationRequest, Modal, Tab};
use crate::domain::{GenerationKind, JobStatus};
use crate::import::import_resume;
use crate::reminders::ReminderNotifier;

/// Applies one key event to the application state. Returns a generation
/// request when the key triggered an orchestration action that passed
/// validation; the event loop dispatches it.
pub fn handle_input(
    app: &mut App,
    notifier: &dyn ReminderNotifier,
    key: KeyCode,
) -> Option<GenerationRequest> {
    if app.modal.is_some() {
        handle_modal_input(app, key);
        return None;
    }

    if app.screen == AppScreen::ApiKeySetup {
        handle_api_key_input(app, key);
        return None;
    }

    if key == KeyCode::F(1) {
        app.modal = Some(Modal::Help);
        return None;
    }

    if app.editing {
        handle_editing_input(app, key);
        return None;
    }

    handle_suite_input(app, notifier, key)
}

fn handle_modal_input(app: &mut App, key: KeyCode) {
    match app.modal {
        Some(Modal::PromptResumeName) => match key {
            KeyCode::Enter => app.confirm_modal(),
            KeyCode::Esc => app.close_modal(),
            KeyCode::Backspace => {
                app.prompt_input.pop();
            }
            KeyCode::Char(c) => app.prompt_input.push(c),
            _ => {}
        },
        Some(Modal::ConfirmDeleteResume(_) | Modal::ConfirmDeleteJob(_)) => match key {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => app.confirm_modal(),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => app.close_modal(),
            _ => {}
        },
        Some(Modal::Help) => {
            if matches!(key, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q')) {
                app.close_modal();
            }
        }
        None => {}
    }
}

/// Credential gate: the suite is unreachable until a key is entered.
fn handle_api_key_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char(c) => app.api_key.push(c),
        KeyCode::Backspace => {
            app.api_key.pop();
        }
        KeyCode::Enter => {
            if app.api_key.is_empty() {
                app.notify("Enter an API key");
            } else {
                app.screen = AppScreen::Suite;
                app.status_message.clear();
            }
        }
        KeyCode::Esc => app.running = false,
        _ => {}
    }
}

fn handle_editing_input(app: &mut App, key: KeyCode) {
    let multiline = app.focus.is_multiline();
    match key {
        KeyCode::Esc => app.editing = false,
        KeyCode::Enter if multiline => push_char(app, '\n'),
        KeyCode::Enter => {
            app.editing = false;
            // Single-line submit: the import path field acts on Enter.
            if app.focus == Control::ImportPath {
                run_import(app);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = focused_field_mut(app) {
                field.pop();
            }
        }
        KeyCode::Char(c) => push_char(app, c),
        KeyCode::Tab if multiline => push_char(app, '\t'),
        _ => {}
    }
}

fn push_char(app: &mut App, c: char) {
    if let Some(field) = focused_field_mut(app) {
        field.push(c);
    }
}

fn focused_field_mut(app: &mut App) -> Option<&mut String> {
    match app.focus {
        Control::ImportPath => Some(&mut app.import_path),
        Control::ResumeBuffer => Some(&mut app.resume_buffer),
        Control::JobDescription => Some(&mut app.job_description),
        Control::JobTitle => Some(&mut app.new_job_title),
        Control::JobCompany => Some(&mut app.new_job_company),
        Control::JobDate => Some(&mut app.new_job_date),
        Control::JobRole => Some(&mut app.job_role),
        Control::CustomQuestions => Some(&mut app.custom_questions),
        Control::ReminderTime => Some(&mut app.reminder_time),
        _ => None,
    }
}

fn handle_suite_input(
    app: &mut App,
    notifier: &dyn ReminderNotifier,
    key: KeyCode,
) -> Option<GenerationRequest> {
    match key {
        KeyCode::Char('q') => {
            app.running = false;
            None
        }
        KeyCode::Tab => {
            app.next_tab();
            None
        }
        KeyCode::BackTab => {
            app.prev_tab();
            None
        }
        KeyCode::Up => {
            move_focus_up(app);
            None
        }
        KeyCode::Down => {
            move_focus_down(app);
            None
        }
        KeyCode::Left | KeyCode::Right => {
            cycle_select(app, key);
            None
        }
        KeyCode::Char('s') if app.active_tab == Tab::Resume => {
            app.save_resume_request();
            None
        }
        KeyCode::Char('d') => {
            match app.focus {
                Control::SavedResumes => app.request_delete_resume(),
                Control::JobList => app.request_delete_job(),
                _ => {}
            }
            None
        }
        KeyCode::Enter => activate(app, notifier),
        _ => None,
    }
}

/// Up flows out of a list when its cursor sits on the first entry.
fn move_focus_up(app: &mut App) {
    match app.focus {
        Control::SavedResumes if app.resume_list_index > 0 => app.resume_list_index -= 1,
        Control::JobList if app.job_list_index > 0 => app.job_list_index -= 1,
        Control::StudyJobList => {
            match app.study_job_index {
                Some(0) | None => app.focus_prev(),
                Some(index) => app.study_job_index = Some(index - 1),
            }
            return;
        }
        _ => app.focus_prev(),
    }
    if matches!(app.focus, Control::SavedResumes) && app.resume_list_index == 0
        && app.resumes.is_empty()
    {
        app.focus_prev();
    }
}

fn move_focus_down(app: &mut App) {
    match app.focus {
        Control::SavedResumes if app.resume_list_index + 1 < app.resumes.len() => {
            app.resume_list_index += 1;
        }
        Control::JobList if app.job_list_index + 1 < app.jobs.len() => {
            app.job_list_index += 1;
        }
        Control::StudyJobList if !app.jobs.is_empty() => match app.study_job_index {
            None => app.study_job_index = Some(0),
            Some(index) if index + 1 < app.jobs.len() => {
                app.study_job_index = Some(index + 1);
            }
            Some(_) => app.focus_next(),
        },
        _ => app.focus_next(),
    }
}

/// Left/Right cycle the value of select-style controls.
fn cycle_select(app: &mut App, key: KeyCode) {
    if app.focus != Control::JobStatusField {
        return;
    }
    if key == KeyCode::Right {
        app.new_job_status_index = (app.new_job_status_index + 1) % JobStatus::COUNT;
    } else {
        app.new_job_status_index =
            (app.new_job_status_index + JobStatus::COUNT - 1) % JobStatus::COUNT;
    }
}

fn activate(app: &mut App, notifier: &dyn ReminderNotifier) -> Option<GenerationRequest> {
    match app.focus {
        Control::GenerateResume => app.start_generation(GenerationKind::Resume),
        Control::GenerateCoverLetter => app.start_generation(GenerationKind::CoverLetter),
        Control::GenerateQuestions => app.start_generation(GenerationKind::Questions),
        Control::GenerateStudyGuide => app.start_generation(GenerationKind::StudyGuide),
        Control::AddJob => {
            app.add_job();
            None
        }
        Control::EnableReminder => {
            app.enable_reminders(notifier);
            None
        }
        Control::SavedResumes => {
            if let Some(profile) = app.resume_under_cursor() {
                let id = profile.id;
                app.select_resume(id);
            }
            None
        }
        Control::StudyJobList => {
            if app.study_job_index.is_none() && !app.jobs.is_empty() {
                app.study_job_index = Some(0);
            }
            None
        }
        Control::JobList => None,
        _ if app.focus.is_text_field() => {
            app.editing = true;
            None
        }
        _ => None,
    }
}

/// Runs the file import for the path typed into the import field. Failures
/// surface as a status message and leave the buffer untouched.
pub fn run_import(app: &mut App) {
    let raw = app.import_path.trim().to_string();
    if raw.is_empty() {
        return;
    }
    match import_resume(Path::new(&raw)) {
        Ok(Some(text)) => app.apply_imported_text(text),
        Ok(None) => app.notify("Only .txt and .docx files are supported"),
        Err(e) => app.notify(format!("Import failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Tab;
    use crate::reminders::testing::FakeNotifier;
    use crate::reminders::ReminderPermission;

    fn app() -> App {
        App::new(Some("sk-ant-test".to_string()))
    }

    fn notifier() -> FakeNotifier {
        FakeNotifier(ReminderPermission::Granted)
    }

    #[test]
    fn gate_requires_non_empty_key() {
        let mut app = App::new(None);
        assert_eq!(app.screen, AppScreen::ApiKeySetup);

        handle_input(&mut app, &notifier(), KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::ApiKeySetup);

        for c in "sk-ant-test".chars() {
            handle_input(&mut app, &notifier(), KeyCode::Char(c));
        }
        handle_input(&mut app, &notifier(), KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::Suite);
        assert_eq!(app.api_key, "sk-ant-test");
    }

    #[test]
    fn tab_key_cycles_panels() {
        let mut app = app();
        assert_eq!(app.active_tab, Tab::Resume);
        handle_input(&mut app, &notifier(), KeyCode::Tab);
        assert_eq!(app.active_tab, Tab::CoverLetter);
        handle_input(&mut app, &notifier(), KeyCode::BackTab);
        assert_eq!(app.active_tab, Tab::Resume);
    }

    #[test]
    fn generate_button_dispatches_request() {
        let mut app = app();
        app.resume_buffer = "resume".to_string();
        app.job_description = "jd".to_string();
        app.focus = Control::GenerateResume;

        let request = handle_input(&mut app, &notifier(), KeyCode::Enter);
        assert!(matches!(request, Some(GenerationRequest::Resume { .. })));
    }

    #[test]
    fn generate_button_without_inputs_dispatches_nothing() {
        let mut app = app();
        app.focus = Control::GenerateResume;

        let request = handle_input(&mut app, &notifier(), KeyCode::Enter);
        assert_eq!(request, None);
        assert_eq!(app.generating, None);
    }

    #[test]
    fn editing_captures_characters_into_focused_field() {
        let mut app = app();
        app.set_tab(Tab::Tracker);
        app.focus = Control::JobTitle;

        handle_input(&mut app, &notifier(), KeyCode::Enter);
        assert!(app.editing);
        for c in "PM".chars() {
            handle_input(&mut app, &notifier(), KeyCode::Char(c));
        }
        handle_input(&mut app, &notifier(), KeyCode::Enter);
        assert!(!app.editing);
        assert_eq!(app.new_job_title, "PM");
    }

    #[test]
    fn multiline_field_keeps_enter_as_newline() {
        let mut app = app();
        app.focus = Control::ResumeBuffer;
        handle_input(&mut app, &notifier(), KeyCode::Enter);
        handle_input(&mut app, &notifier(), KeyCode::Char('a'));
        handle_input(&mut app, &notifier(), KeyCode::Enter);
        handle_input(&mut app, &notifier(), KeyCode::Char('b'));
        handle_input(&mut app, &notifier(), KeyCode::Esc);

        assert_eq!(app.resume_buffer, "a\nb");
        assert!(!app.editing);
    }

    #[test]
    fn delete_key_on_job_list_asks_for_confirmation() {
        let mut app = app();
        app.new_job_title = "Engineer".to_string();
        app.new_job_company = "Acme".to_string();
        app.add_job();
        app.set_tab(Tab::Tracker);
        app.focus = Control::JobList;

        handle_input(&mut app, &notifier(), KeyCode::Char('d'));
        assert!(matches!(app.modal, Some(Modal::ConfirmDeleteJob(_))));

        handle_input(&mut app, &notifier(), KeyCode::Char('n'));
        assert_eq!(app.modal, None);
        assert_eq!(app.jobs.len(), 1);

        handle_input(&mut app, &notifier(), KeyCode::Char('d'));
        handle_input(&mut app, &notifier(), KeyCode::Char('y'));
        assert!(app.jobs.is_empty());
    }

    #[test]
    fn status_select_cycles_with_arrows() {
        let mut app = app();
        app.set_tab(Tab::Tracker);
        app.focus = Control::JobStatusField;

        handle_input(&mut app, &notifier(), KeyCode::Right);
        assert_eq!(app.new_job_status_index, 1);
        handle_input(&mut app, &notifier(), KeyCode::Left);
        handle_input(&mut app, &notifier(), KeyCode::Left);
        assert_eq!(app.new_job_status_index, JobStatus::COUNT - 1);
    }

    #[test]
    fn import_of_unknown_extension_leaves_buffer_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"raw").expect("write fixture");

        let mut app = app();
        app.resume_buffer = "existing".to_string();
        app.import_path = path.display().to_string();
        run_import(&mut app);

        assert_eq!(app.resume_buffer, "existing");
    }

    #[test]
    fn txt_import_replaces_buffer() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe, Engineer").expect("write fixture");

        let mut app = app();
        app.import_path = path.display().to_string();
        run_import(&mut app);

        assert_eq!(app.resume_buffer, "Jane Doe, Engineer");
    }
}
