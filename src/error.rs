use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("Invalid desktop entry: {0}")]
    DesktopEntry(#[from] DesktopEntryError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesktopEntryError {
    #[error("missing [Desktop Entry] group")]
    MissingGroup,
    #[error("missing required key: {0}")]
    MissingKey(&'static str),
    #[error("malformed line {line}: {content}")]
    MalformedLine { line: usize, content: String },
}

pub type Result<T> = std::result::Result<T, SessionsError>;
