pub mod api_key;
pub mod cover_letter;
pub mod interview;
pub mod reminders;
pub mod resume;
pub mod study_guide;
pub mod tracker;
