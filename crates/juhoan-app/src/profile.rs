use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use juhoan_config::Config;

const DEFAULT_CONFIG_FILE: &str = "config.json";

fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Resolve the effective config and the file it came from.
///
/// An explicit path must exist. Without one, `./config.json` is used when
/// present and built-in defaults otherwise. Environment variables are applied
/// last in every case. Runs before logging is set up and does not log.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    let source = match path {
        Some(path) => path.to_path_buf(),
        None if default_path.exists() => default_path,
        None => return Ok((Config::new(), None)),
    };

    let mut config = read_config_file(&source)?;
    config.apply_env();
    Ok((config, Some(source)))
}

/// Save `config` as pretty JSON, creating parent directories
pub fn write_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}
