//! Metadata extraction for scene-style release names such as `Show.Name.S01E02.HDTV.x264-GROUP`.

pub mod config;
pub mod core;
pub mod utils;
