// Event loop for jobease-tui

pub mod loop_handler;

pub use loop_handler::run;
