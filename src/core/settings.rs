use tracing::Level;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Process-level configuration, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub log_level: Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `API_KEY` wins over `GEMINI_API_KEY`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty =
            |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let defaults = Self::default();

        Self {
            api_key: non_empty("API_KEY").or_else(|| non_empty("GEMINI_API_KEY")),
            model: non_empty("PRISM_MODEL").unwrap_or(defaults.model),
            api_base: non_empty("PRISM_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            log_level: non_empty("PRISM_LOG")
                .and_then(|level| level.parse::<Level>().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
