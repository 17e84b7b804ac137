//! Runtime configuration read from environment variables.

/// Public dog.ceo API root
pub const DEFAULT_API_BASE_URL: &str = "https://dog.ceo/api";
pub const DEFAULT_USER_AGENT: &str = "Dog-Breeds/1.0";

pub const API_BASE_URL_VAR: &str = "DOG_API_BASE_URL";
pub const USER_AGENT_VAR: &str = "DOG_API_USER_AGENT";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            window_size: [480.0, 800.0],
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let api_base_url = match read(API_BASE_URL_VAR) {
            Some(url) => {
                log::info!("{API_BASE_URL_VAR} set, using API at {url}");
                url.trim_end_matches('/').to_string()
            }
            None => defaults.api_base_url,
        };

        Self {
            api_base_url,
            user_agent: read(USER_AGENT_VAR).unwrap_or(defaults.user_agent),
            window_size: defaults.window_size,
        }
    }
}
