use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use spdlog::debug;

use blog_titles::config::{read_config, Config};
use blog_titles::logger::default_log_location;

use crate::CFG_FILE_NAME;

fn get_config_path() -> Option<PathBuf> {
    let exe_dir = env::current_exe().ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.to_path_buf()));
    let cur_dir = env::current_dir().ok();
    let cfg_dir = dirs::config_dir().map(|dir| dir.join("blog-titles"));

    [exe_dir, cur_dir, cfg_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(CFG_FILE_NAME))
        .find(|path| path.exists())
}

/// An explicit path must exist. Without one, the first file found is used,
/// falling back to the built-in defaults.
pub(crate) fn open_config(cfg_path: Option<PathBuf>) -> Result<Config> {
    let Some(config_path) = cfg_path.or_else(get_config_path) else {
        return Ok(Config::default());
    };

    let mut config = read_config(&config_path)
        .with_context(|| format!("Could not load configuration from {}", config_path.display()))?;
    debug!("Configuration read from {}", config_path.display());

    if let Some(ref mut log) = config.log {
        if log.location.is_none() {
            log.location = Some(default_log_location());
        }
    }

    Ok(config)
}
