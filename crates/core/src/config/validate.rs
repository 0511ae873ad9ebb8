use std::path::{Component, Path};

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Source and project directories differ
/// - Copy buffer is not 0
/// - Scaffold entries are non-empty and stay inside the project directory
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.source_dir == config.project_dir {
        return Err(ConfigError::ValidationError(
            "source_dir and project_dir must differ".to_string(),
        ));
    }

    if config.placer.buffer_size == 0 {
        return Err(ConfigError::ValidationError(
            "placer.buffer_size cannot be 0".to_string(),
        ));
    }

    for dir in &config.scaffold {
        let escapes = Path::new(dir)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if dir.trim().is_empty() || escapes {
            return Err(ConfigError::ValidationError(format!(
                "invalid scaffold directory: {:?}",
                dir
            )));
        }
    }

    Ok(())
}
