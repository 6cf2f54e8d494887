use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Runtime configuration resolved from `.env` / environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub download_dir: PathBuf,
    pub api_key: Option<String>,
}

/// Initializes the application configuration from the environment.
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig {
        api_base: get_api_base(),
        download_dir: get_download_dir(),
        api_key: env::var("JOBEASE_API_KEY").ok().filter(|k| !k.is_empty()),
    }
}

/// Base URL of the generation backend, without a trailing slash.
pub fn get_api_base() -> String {
    let base =
        env::var("JOBEASE_API_BASE").unwrap_or_else(|_| "http://localhost:8000/api".to_string());
    base.trim_end_matches('/').to_string()
}

/// Gets the directory path for saving generated documents.
pub fn get_download_dir() -> PathBuf {
    env::var("JOBEASE_DOWNLOAD_DIR").map_or_else(|_| PathBuf::from("./downloads"), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_strips_trailing_slash() {
        env::set_var("JOBEASE_API_BASE", "http://example.test/api/");
        assert_eq!(get_api_base(), "http://example.test/api");
        env::remove_var("JOBEASE_API_BASE");
    }
}
