//! Command line, configuration, errors, image files, and progress display

/// Command-line interface
pub mod cli;
/// Grammar constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading, tile persistence, and assembly
pub mod image;
/// Progress display for batch tiling
pub mod progress;
