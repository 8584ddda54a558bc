//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The WASM bundle has no process environment, so `API_BASE_URL` is also
//! captured when the crate is compiled.

/// Backend used when `API_BASE_URL` is not set anywhere
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// `API_BASE_URL` as seen by the compiler
const BUILD_API_BASE_URL: Option<&str> = option_env!("API_BASE_URL");

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the REST API, without a trailing slash
    /// Example: https://courses.example.edu/api
    pub api_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    /// Falls back to the build-time value, then to [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Self {
        Self::resolve(std::env::var("API_BASE_URL").ok().as_deref(), BUILD_API_BASE_URL)
    }

    /// Configuration baked into the binary at compile time
    pub fn from_build_env() -> Self {
        Self::resolve(None, BUILD_API_BASE_URL)
    }

    fn resolve(runtime: Option<&str>, build: Option<&str>) -> Self {
        let api_base_url = runtime
            .or(build)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Self { api_base_url }
    }

    /// Check if the API points away from the local default
    pub fn is_custom_api(&self) -> bool {
        self.api_base_url != DEFAULT_API_BASE_URL
    }

    /// Absolute URL of an API path such as `/courses`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Resolution (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_resolve_defaults() {
        let config = Config::resolve(None, None);
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert!(!config.is_custom_api());
    }

    #[test]
    fn test_resolve_runtime_wins_over_build() {
        let config = Config::resolve(Some("https://a.edu/api"), Some("https://b.edu/api"));
        assert_eq!(config.api_base_url, "https://a.edu/api");
        assert!(config.is_custom_api());
    }

    #[test]
    fn test_resolve_build_value() {
        let config = Config::resolve(None, Some("https://b.edu/api"));
        assert_eq!(config.api_base_url, "https://b.edu/api");
    }

    #[test]
    fn test_resolve_trims_trailing_slash() {
        let config = Config::resolve(Some("https://a.edu/api/"), None);
        assert_eq!(config.api_base_url, "https://a.edu/api");
    }

    #[test]
    fn test_resolve_ignores_blank_values() {
        let config = Config::resolve(Some("  "), None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    // ========================================================================
    // Endpoints
    // ========================================================================

    #[test]
    fn test_endpoint_joins_paths() {
        let config = Config {
            api_base_url: "http://localhost:8080/api".to_string(),
        };
        assert_eq!(
            config.endpoint("/courses"),
            "http://localhost:8080/api/courses"
        );
        assert_eq!(
            config.endpoint("auth/login"),
            "http://localhost:8080/api/auth/login"
        );
    }

    #[test]
    fn test_config_clone() {
        let config = Config::resolve(Some("https://a.edu/api"), None);
        assert_eq!(config.clone(), config);
    }
}
