use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Pipeline configuration loaded from `~/.config/yth/config.toml`.
///
/// Passed explicitly into [`crate::pipeline::run`] so the pipeline can be
/// exercised against arbitrary temporary files without process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YthConfig {
    /// Source text file containing handle and description lines.
    pub input_path: PathBuf,
    /// Destination for the grouped, sorted handle list.
    pub output_path: PathBuf,
}

impl Default for YthConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/sample_input.txt"),
            output_path: PathBuf::from("data/handles_output.txt"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("yth")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<YthConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = YthConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: YthConfig = toml::from_str(&data)?;
    Ok(cfg)
}
