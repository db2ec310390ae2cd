//! Grammar constants and runtime configuration defaults

// Hilbert L-system grammar
/// Seed string interpreted directly at order 1
pub const HILBERT_AXIOM: &str = "+BF-AFA-FB+";
/// Production for the `A` non-terminal
pub const RULE_A: &str = "+BF-AFA-FB+";
/// Production for the `B` non-terminal
pub const RULE_B: &str = "-AF+BFB+FA-";

/// Default recursion order for the curve command
pub const DEFAULT_ORDER: u32 = 3;

/// Default distance covered by a single forward move
pub const DEFAULT_STEP_SIZE: f64 = 1.0;

// Order 12 already yields 16.7M points; higher orders exhaust memory quickly
/// Maximum order accepted by the command-line front end
pub const MAX_ORDER: u32 = 12;

/// Default number of tile rows
pub const DEFAULT_ROWS: u32 = 4;
/// Default number of tile columns
pub const DEFAULT_COLS: u32 = 4;

// Tile files are named `{CROP_PREFIX}_{row}_{col}.{extension}`
/// File name prefix for saved tile crops
pub const CROP_PREFIX: &str = "crop";
/// Default image format extension for saved tile crops
pub const DEFAULT_CROP_EXTENSION: &str = "png";

/// Extensions recognized when scanning a directory for source images
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
