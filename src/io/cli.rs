//! Command-line interface for curve export and batch image tiling

use crate::analysis::LatticeCoverage;
use crate::curve::{generate, generate_lattice};
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_CROP_EXTENSION, DEFAULT_ORDER, DEFAULT_ROWS, DEFAULT_STEP_SIZE,
    MAX_ORDER, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{HilbertError, Result, invalid_argument};
use crate::io::image::{assemble, export_image, load_image};
use crate::io::progress::ProgressManager;
use crate::spatial::point::Point;
use crate::spatial::tiles::{Tile, TileOptions, tile_image};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hilbertile")]
#[command(
    author,
    version,
    about = "Generate Hilbert curve points and cut images into curve-ordered tiles"
)]
/// Command-line arguments for the curve and tiling tools
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Write the points of a Hilbert curve as CSV
    Curve(CurveArgs),
    /// Cut images into a grid of tiles
    Tile(TileArgs),
}

/// Arguments of the `curve` subcommand
#[derive(Args)]
pub struct CurveArgs {
    /// Recursion order of the curve
    #[arg(short, long, default_value_t = DEFAULT_ORDER)]
    pub order: u32,

    /// Distance covered by each forward move
    #[arg(short, long, default_value_t = DEFAULT_STEP_SIZE)]
    pub step: f64,

    /// Start point as `x,y` or `x,y,z`
    #[arg(long, default_value = "0,0", value_parser = parse_point, allow_hyphen_values = true)]
    pub start: Point,

    /// Output CSV file (stdout if omitted)
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Check that the lattice path is connected and space-filling
    #[arg(long)]
    pub verify: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Tile visiting order used when assembling output images
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Traversal {
    /// Left to right, top to bottom
    RowMajor,
    /// Along the Hilbert curve; requires a square power-of-two grid
    Hilbert,
}

impl Traversal {
    /// Suffix used in output file names
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::RowMajor => "row_major",
            Self::Hilbert => "hilbert",
        }
    }
}

/// Arguments of the `tile` subcommand
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
#[derive(Args)]
pub struct TileArgs {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of tile rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Number of tile columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Write each tile as `crop_{row}_{col}.<ext>`
    #[arg(short, long)]
    pub save_crops: bool,

    /// Directory receiving tile files and assembled images
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Image format extension for saved tiles
    #[arg(short, long, default_value = DEFAULT_CROP_EXTENSION)]
    pub extension: String,

    /// Order in which tiles are laid out when assembling
    #[arg(short, long, value_enum, default_value_t = Traversal::RowMajor)]
    pub traversal: Traversal,

    /// Write `<stem>_<traversal>.png` with tiles placed in traversal order
    #[arg(short, long)]
    pub assemble: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl TileArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Parse `x,y` or `x,y,z` into a point
///
/// # Errors
///
/// Returns a message if the text does not hold two or three numbers
pub fn parse_point(text: &str) -> std::result::Result<Point, String> {
    let values = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|error| format!("invalid coordinate in '{text}': {error}"))?;

    match values.as_slice() {
        &[x, y] => Ok(Point::planar(x, y)),
        &[x, y, z] => Ok(Point::new(x, y, z)),
        _ => Err(format!("expected 'x,y' or 'x,y,z', got '{text}'")),
    }
}

impl Cli {
    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, generation, or file processing fails
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Curve(args) => run_curve(&args),
            Command::Tile(args) => FileProcessor::new(args).process(),
        }
    }
}

// Allow print for user feedback on verification results
#[allow(clippy::print_stderr)]
fn run_curve(args: &CurveArgs) -> Result<()> {
    if args.order > MAX_ORDER {
        return Err(invalid_argument(
            "order",
            &args.order,
            &format!("must not exceed {MAX_ORDER}"),
        ));
    }

    let points = generate(args.order, args.start, args.step)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| HilbertError::FileSystem {
                path: path.clone(),
                operation: "create output file",
                source: e,
            })?;
            write_points(BufWriter::new(file), &points).map_err(|e| HilbertError::FileSystem {
                path: path.clone(),
                operation: "write points",
                source: e,
            })?;
        }
        None => {
            let stdout = std::io::stdout();
            write_points(BufWriter::new(stdout.lock()), &points).map_err(|e| {
                HilbertError::FileSystem {
                    path: PathBuf::from("<stdout>"),
                    operation: "write points",
                    source: e,
                }
            })?;
        }
    }

    if args.verify {
        let coverage = LatticeCoverage::from_path(&generate_lattice(args.order)?);
        if !args.quiet {
            let (width, height) = coverage.dimensions();
            eprintln!(
                "order {}: {} points, {width}x{height} cells, connected: {}, space-filling: {}",
                args.order,
                points.len(),
                coverage.is_connected(),
                coverage.is_space_filling()
            );
        }
        if !coverage.is_space_filling() {
            return Err(invalid_argument(
                "order",
                &args.order,
                &"generated path is not space-filling",
            ));
        }
    }

    Ok(())
}

fn write_points<W: Write>(mut writer: W, points: &[Point]) -> std::io::Result<()> {
    writeln!(writer, "x,y,z")?;
    for point in points {
        writeln!(writer, "{},{},{}", point.x, point.y, point.z)?;
    }
    writer.flush()
}

/// Orchestrates batch tiling of image files with progress tracking
pub struct FileProcessor {
    args: TileArgs,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given tile arguments
    pub fn new(args: TileArgs) -> Self {
        let progress_manager = args.should_show_progress().then(ProgressManager::new);

        Self {
            args,
            progress_manager,
        }
    }

    /// Process files according to the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let nested = files.len() > 1;
        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index, nested)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn is_supported(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if Self::is_supported(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_argument(
                    "target",
                    &target.display(),
                    &"file is not a supported image type",
                ))
            }
        } else if target.is_dir() {
            let read_error = |e| HilbertError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).map_err(read_error)? {
                let path = entry.map_err(read_error)?.path();
                if path.is_file() && Self::is_supported(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_argument(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    // Allow print for user feedback on tiles that could not be written
    #[allow(clippy::print_stderr)]
    fn process_file(&self, input_path: &Path, index: usize, nested: bool) -> Result<()> {
        let image = load_image(input_path)?;
        let mut grid = tile_image(
            &image,
            self.args.rows,
            self.args.cols,
            &TileOptions::default(),
        )?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path, grid.len());
        }

        if self.args.save_crops {
            let crop_dir = self.crop_dir(input_path, nested);
            std::fs::create_dir_all(&crop_dir).map_err(|e| HilbertError::FileSystem {
                path: crop_dir.clone(),
                operation: "create directory",
                source: e,
            })?;

            let progress = self.progress_manager.as_ref();
            grid.save_crops(&crop_dir, &self.args.extension, |processed| {
                if let Some(pm) = progress {
                    pm.update_tiles(index, processed);
                }
            });

            if !self.args.quiet {
                for failure in grid.write_failures() {
                    eprintln!("Warning: {failure}");
                }
            }
        }

        if self.args.assemble {
            let ordered: Vec<&Tile> = match self.args.traversal {
                Traversal::RowMajor => grid.tiles().iter().collect(),
                Traversal::Hilbert => grid.in_hilbert_order()?,
            };
            let assembled = assemble(ordered, self.args.rows, self.args.cols)?;
            export_image(&assembled, &self.assembled_path(input_path))?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    // Each image gets its own folder when a directory is processed so crop names cannot collide
    fn crop_dir(&self, input_path: &Path, nested: bool) -> PathBuf {
        if nested {
            let stem = input_path.file_stem().unwrap_or_default();
            self.args.out_dir.join(stem)
        } else {
            self.args.out_dir.clone()
        }
    }

    fn assembled_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!(
            "{}_{}.png",
            stem.to_string_lossy(),
            self.args.traversal.suffix()
        );
        self.args.out_dir.join(name)
    }
}
