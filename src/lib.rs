pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the converter entry points for easier access
pub use error::ConvertError;
pub use generator::{surge_to_clash, surge_to_clash_with, ClashYamlOutput};
pub use models::{ExtraSettings, GeneralSettings, ProxyGroupRecord, ProxyRecord};
pub use settings::Settings;
