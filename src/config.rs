use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::content::metadata_file::{DEFAULT_METADATA_FILE, DEFAULT_TITLE_FIELD};
use crate::title_checker::CheckOptions;

pub const DEFAULT_BLOG_DIR: &str = "kutubuku/content/blog";

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Paths {
    pub blog_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            blog_dir: PathBuf::from(DEFAULT_BLOG_DIR),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Defaults {
    pub metadata_file: String,
    pub title_field: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            title_field: DEFAULT_TITLE_FIELD.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Log {
    pub level: LogLevel,
    #[serde(default)]
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub defaults: Defaults,
    pub log: Option<Log>,
}

impl Config {
    pub fn check_options(&self, fix: bool, quiet: bool) -> CheckOptions {
        CheckOptions {
            metadata_file: self.defaults.metadata_file.clone(),
            title_field: self.defaults.title_field.clone(),
            fix,
            quiet,
        }
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent().unwrap_or_else(|| Path::new("."));
        let rest = path.strip_prefix("${exe_dir}").unwrap_or(path.as_path());
        Ok(exe_dir.join(rest))
    } else {
        Ok(path)
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => Ok(cfg),
        Err(e) => Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    }
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    let mut cfg = match parse_config(&cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(e.kind(), format!("{} - file={}", e, cfg_path.display()))),
    };

    cfg.paths = Paths {
        blog_dir: parse_path(cfg.paths.blog_dir)?,
    };

    Ok(cfg)
}
