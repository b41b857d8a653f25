use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrismError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Gemini API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("No API key configured (set API_KEY or GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Invalid color '{0}', expected \"R, G, B\" with channels 0-255")]
    InvalidColor(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("PrismError: {0}")]
    Custom(String),
}

impl From<reqwest::Error> for PrismError {
    fn from(error: reqwest::Error) -> Self {
        PrismError::Reqwest(Box::new(error))
    }
}

impl From<eframe::Error> for PrismError {
    fn from(error: eframe::Error) -> Self {
        PrismError::Window(error.to_string())
    }
}
