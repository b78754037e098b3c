use thiserror::Error;

/// Errors raised while converting a profile into a Clash document
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A positional or keyed port is not an integer in `1..=65535`
    #[error("Invalid port '{value}' for proxy '{proxy}'")]
    InvalidPort { proxy: String, value: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
