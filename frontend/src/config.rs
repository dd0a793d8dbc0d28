/// Where the backend lives.
///
/// The default, an empty base, makes every request same-origin — the way the
/// app runs when the backend serves the built front-end itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    /// Origin prefix for API calls, e.g. `http://127.0.0.1:5000`.
    /// Empty means same-origin.
    pub api_base: String,
}

impl AppConfig {
    /// Captures `API_BASE_URL` from the build environment, falling back to
    /// same-origin when unset.
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("API_BASE_URL").unwrap_or("").to_string(),
        }
    }

    /// Full URL of the message endpoint. A trailing slash on the configured
    /// base is tolerated.
    pub fn message_url(&self) -> String {
        format!("{}/api/message", self.api_base.trim_end_matches('/'))
    }
}
