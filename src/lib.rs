pub mod config;
pub mod logger;
pub mod content;
pub mod post_list;
pub mod text_utils;
pub mod title_checker;
