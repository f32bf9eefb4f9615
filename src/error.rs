use thiserror::Error;

#[derive(Debug, Error)]
pub enum MsgboxError {
    #[error("Could not determine settings directory")]
    NoSettingsDir,

    #[error("Invalid settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),

    #[error("Failed to serialize settings: {0}")]
    SettingsSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
