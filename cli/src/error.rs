use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Display Error: {0}")]
    Display(#[from] denom_display::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Toml Error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("Toml Deserialization Error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Asset Error: {0}")]
    Asset(String),

    #[error("Command Error: {0}")]
    Command(String),

    #[error("Parse Error: {0}")]
    Parse(String),
}
