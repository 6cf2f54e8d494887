use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "jobease-tui", version, about = "JobEase Suite TUI")]
pub struct CliArgs {
    /// Override the generation API base URL
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Override the download directory for generated documents
    #[arg(long = "download-dir", value_name = "PATH")]
    pub download_dir: Option<String>,

    /// Preload the resume buffer from a .txt or .docx file
    #[arg(long, value_name = "FILE")]
    pub import: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(base) = &self.api_base {
            std::env::set_var("JOBEASE_API_BASE", base);
        }
        if let Some(dir) = &self.download_dir {
            std::env::set_var("JOBEASE_DOWNLOAD_DIR", dir);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
