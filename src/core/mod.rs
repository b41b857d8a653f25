pub mod errors;
pub mod http;
pub mod settings;
pub mod tasks;

pub use errors::PrismError;
pub use settings::Settings;
