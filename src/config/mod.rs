mod settings;

pub use settings::{Config, TomlConfig, TomlIconsConfig, TomlSessionsConfig, EXAMPLE_CONFIG};
