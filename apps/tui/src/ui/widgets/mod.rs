pub mod fields;
pub mod popup;
pub mod tables;
