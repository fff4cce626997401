use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use spdlog::debug;

use crate::content::parsing_utils::find_field;

pub const DEFAULT_METADATA_FILE: &str = "contents.lr";
pub const DEFAULT_TITLE_FIELD: &str = "title";

/// The per-post file holding `key: value` lines, e.g.
/// ```text
/// title: My First Post
/// ---
/// pub_date: 2024-02-27
/// ```
pub struct MetadataFile {
    pub file_path: PathBuf,
}

impl MetadataFile {
    pub fn in_dir(post_dir: &Path, file_name: &str) -> MetadataFile {
        MetadataFile {
            file_path: post_dir.join(file_name),
        }
    }

    /// Returns None when the file is missing, unreadable or has no title line.
    pub fn read_title(&self, title_field: &str) -> Option<String> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) => {
                debug!("Metadata file not readable {}: {}", self.file_path.display(), e);
                return None;
            }
        };

        let lines = BufReader::new(file).lines().map_while(Result::ok);
        match find_field(lines, title_field) {
            Some(title) if !title.is_empty() => Some(title),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use tempfile::TempDir;

    use super::*;

    fn metadata_in(dir: &TempDir, content: &str) -> io::Result<MetadataFile> {
        fs::write(dir.path().join(DEFAULT_METADATA_FILE), content)?;
        Ok(MetadataFile::in_dir(dir.path(), DEFAULT_METADATA_FILE))
    }

    #[test]
    fn test_read_title() -> io::Result<()> {
        let dir = TempDir::new()?;
        let metadata = metadata_in(&dir, "_model: blog-post\n---\ntitle:  My First Post  \n---\nbody:\n\nHello\n")?;
        assert_eq!(metadata.read_title(DEFAULT_TITLE_FIELD), Some("My First Post".to_string()));
        Ok(())
    }

    #[test]
    fn test_first_title_wins() -> io::Result<()> {
        let dir = TempDir::new()?;
        let metadata = metadata_in(&dir, "title: First\ntitle: Second\n")?;
        assert_eq!(metadata.read_title(DEFAULT_TITLE_FIELD), Some("First".to_string()));
        Ok(())
    }

    #[test]
    fn test_missing_file() -> io::Result<()> {
        let dir = TempDir::new()?;
        let metadata = MetadataFile::in_dir(dir.path(), DEFAULT_METADATA_FILE);
        assert_eq!(metadata.read_title(DEFAULT_TITLE_FIELD), None);
        Ok(())
    }

    #[test]
    fn test_no_title_line() -> io::Result<()> {
        let dir = TempDir::new()?;
        let metadata = metadata_in(&dir, "_model: blog-post\n---\nauthor: someone\n")?;
        assert_eq!(metadata.read_title(DEFAULT_TITLE_FIELD), None);
        Ok(())
    }

    #[test]
    fn test_empty_title() -> io::Result<()> {
        let dir = TempDir::new()?;
        let metadata = metadata_in(&dir, "title:   \n")?;
        assert_eq!(metadata.read_title(DEFAULT_TITLE_FIELD), None);
        Ok(())
    }

    #[test]
    fn test_custom_field() -> io::Result<()> {
        let dir = TempDir::new()?;
        let metadata = metadata_in(&dir, "title: Ignored\nheadline: The Headline\n")?;
        assert_eq!(metadata.read_title("headline"), Some("The Headline".to_string()));
        Ok(())
    }
}
