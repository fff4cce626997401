use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use spdlog::{debug, warn};

use crate::content::metadata_file::{MetadataFile, DEFAULT_METADATA_FILE, DEFAULT_TITLE_FIELD};
use crate::post_list::{PostDir, PostList};
use crate::text_utils::{is_slug, slugify};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckStatus::Pass => 0,
            CheckStatus::Fail => 1,
        }
    }
}

impl Display for CheckStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "PASS"),
            CheckStatus::Fail => write!(f, "FAIL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub dir: PathBuf,
    pub actual: String,
    pub expected: String,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mismatch in blog dir and blog title: {} != {}", self.actual, self.expected)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Display for Rename {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Renamed: {} -> {}", self.from.display(), self.to.display())
    }
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub metadata_file: String,
    pub title_field: String,
    /// Rename mismatching folders instead of only reporting them
    pub fix: bool,
    /// Do not print mismatch and rename lines
    pub quiet: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            title_field: DEFAULT_TITLE_FIELD.to_string(),
            fix: false,
            quiet: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub scanned: usize,
    pub skipped: Vec<PostDir>,
    pub mismatches: Vec<Mismatch>,
    pub renamed: Vec<Rename>,
    pub fixed: bool,
}

impl CheckReport {
    /// A fix run passes even when it found mismatches, as they were renamed.
    pub fn status(&self) -> CheckStatus {
        if !self.mismatches.is_empty() && !self.fixed {
            CheckStatus::Fail
        } else {
            CheckStatus::Pass
        }
    }
}

pub struct TitleChecker {
    options: CheckOptions,
}

impl TitleChecker {
    pub fn new(options: CheckOptions) -> Self {
        TitleChecker { options }
    }

    /// Scans every post directory under `root_dir` once.
    /// In fix mode the first rename failure stops the scan, leaving earlier renames in place.
    pub fn run(&self, root_dir: &Path) -> io::Result<CheckReport> {
        let post_list = PostList { root_dir: root_dir.to_path_buf() };
        let dirs = post_list.retrieve_dirs()?;
        debug!("Checking {} post directories in {}", dirs.len(), root_dir.display());

        let mut report = CheckReport {
            fixed: self.options.fix,
            ..CheckReport::default()
        };

        for post_dir in dirs {
            report.scanned += 1;

            let metadata = MetadataFile::in_dir(&post_dir.path, &self.options.metadata_file);
            let Some(title) = metadata.read_title(&self.options.title_field) else {
                debug!("No title found for {}. Skipping", post_dir.path.display());
                report.skipped.push(post_dir);
                continue;
            };

            let expected = slugify(&title);
            if expected.is_empty() {
                warn!("Title '{}' of {} has no characters usable in a folder name. Skipping", title, post_dir.path.display());
                report.skipped.push(post_dir);
                continue;
            }

            debug_assert!(is_slug(&expected), "invalid folder name {}", expected);

            if post_dir.name == expected {
                continue;
            }

            let mismatch = Mismatch {
                dir: post_dir.path.clone(),
                actual: post_dir.name.clone(),
                expected,
            };
            self.print(&mismatch);

            if self.options.fix {
                let rename = rename_post(&post_dir.path, &mismatch.expected)?;
                debug!("Post directory {} renamed to {}", mismatch.actual, mismatch.expected);
                self.print(&rename);
                report.renamed.push(rename);
            }
            report.mismatches.push(mismatch);
        }

        Ok(report)
    }

    fn print(&self, line: &dyn Display) {
        if !self.options.quiet {
            println!("{}", line);
        }
    }
}

/// Renames a post directory inside its parent. An existing target is never overwritten.
fn rename_post(dir: &Path, expected: &str) -> io::Result<Rename> {
    let parent = dir.parent().unwrap_or_else(|| Path::new("."));
    let target = parent.join(expected);

    if fs::symlink_metadata(&target).is_ok() {
        return Err(io::Error::new(
            ErrorKind::AlreadyExists,
            format!("Cannot rename {} to {}: target already exists", dir.display(), target.display())));
    }

    if let Err(e) = fs::rename(dir, &target) {
        return Err(io::Error::new(
            e.kind(), format!("Error renaming {} to {}: {}", dir.display(), target.display(), e)));
    }

    Ok(Rename {
        from: dir.to_path_buf(),
        to: target,
    })
}

/// Checks the post directories under `root_dir` with the default metadata layout.
pub fn check(root_dir: &Path, fix: bool) -> io::Result<CheckStatus> {
    let options = CheckOptions {
        fix,
        ..CheckOptions::default()
    };
    let report = TitleChecker::new(options).run(root_dir)?;
    Ok(report.status())
}
