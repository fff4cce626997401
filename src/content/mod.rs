pub mod metadata_file;
pub mod parsing_utils;
