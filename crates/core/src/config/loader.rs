use figment::{
    providers::{Env, Serialized},
    Figment, Provider,
};

use super::{types::Config, ConfigError};

/// Prefix of environment variables overriding the built-in defaults
pub const ENV_PREFIX: &str = "HINTSORT_";

/// Load configuration: built-in defaults with environment variable overrides.
///
/// Nested keys use a double underscore, e.g. `HINTSORT_PLACER__BUFFER_SIZE`.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Load configuration from defaults merged with `provider` (useful for testing)
pub fn load_config_from<P: Provider>(provider: P) -> Result<Config, ConfigError> {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(provider)
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_without_overrides_uses_defaults() {
        let config = load_config_from(Serialized::defaults(Config::default())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_with_override() {
        let config =
            load_config_from(Serialized::default("project_dir", "/srv/project")).unwrap();
        assert_eq!(config.project_dir, PathBuf::from("/srv/project"));
        assert_eq!(config.source_dir, PathBuf::from("./downloaded_files"));
    }

    #[test]
    fn test_load_with_nested_override() {
        let config = load_config_from(Serialized::default("placer.buffer_size", 1024)).unwrap();
        assert_eq!(config.placer.buffer_size, 1024);
        assert!(config.placer.reject_parent_segments);
    }

    #[test]
    fn test_load_with_invalid_type_fails() {
        let result = load_config_from(Serialized::default("placer.buffer_size", "lots"));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
