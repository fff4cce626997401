use std::{fs, io};
use std::path::{Path, PathBuf};

use spdlog::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct PostDir {
    pub path: PathBuf,
    pub name: String,
}

pub struct PostList {
    pub root_dir: PathBuf,
}

impl PostList {
    /// Immediate subdirectories of the root, sorted by name.
    /// Files and other entries are ignored.
    pub fn retrieve_dirs(&self) -> io::Result<Vec<PostDir>> {
        let mut dirs = Self::list_dirs(self.root_dir.as_path())?;
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dirs)
    }

    fn list_dirs(posts_dir: &Path) -> io::Result<Vec<PostDir>> {
        let mut dirs: Vec<PostDir> = vec![];
        let entries = match fs::read_dir(posts_dir) {
            Ok(entries) => entries,
            Err(e) => return Err(io::Error::new(
                e.kind(), format!("Error listing blog directory {}: {}", posts_dir.display(), e))),
        };

        for entry in entries {
            let entry = entry?;
            // follows symlinks, a linked post folder is still a post
            if !entry.path().is_dir() {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(name) => {
                    warn!("Skipping directory with a non UTF-8 name: {}", name.to_string_lossy());
                    continue;
                }
            };
            dirs.push(PostDir { path: entry.path(), name });
        }
        Ok(dirs)
    }
}
