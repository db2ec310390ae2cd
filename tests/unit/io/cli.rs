//! Tests for argument parsing and the curve and tile commands

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hilbertile::io::cli::{Cli, Command, Traversal, parse_point};
    use hilbertile::spatial::Point;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::path::Path;

    fn write_source(dir: &Path, name: &str, width: u32, height: u32) {
        let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        assert!(DynamicImage::ImageRgba8(image).save(dir.join(name)).is_ok());
    }

    // Tests point parsing with two and three coordinates
    // Verified by ignoring the z component
    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1,2"), Ok(Point::planar(1.0, 2.0)));
        assert_eq!(parse_point("-4, -2.5, 1"), Ok(Point::new(-4.0, -2.5, 1.0)));
        assert!(parse_point("1").is_err());
        assert!(parse_point("1,2,3,4").is_err());
        assert!(parse_point("a,b").is_err());
    }

    // Tests curve defaults and negative start coordinates
    // Verified by removing hyphen support on --start
    #[test]
    fn test_curve_arguments() {
        let Ok(cli) = Cli::try_parse_from(["hilbertile", "curve", "--start", "-4,-2.5", "-o", "4"])
        else {
            unreachable!("valid arguments");
        };
        let Command::Curve(args) = cli.command else {
            unreachable!("curve subcommand");
        };
        assert_eq!(args.order, 4);
        assert!((args.step - 1.0).abs() < f64::EPSILON);
        assert_eq!(args.start, Point::planar(-4.0, -2.5));
        assert!(args.output.is_none());
    }

    // Tests tile defaults and traversal parsing
    // Verified by changing the default traversal
    #[test]
    fn test_tile_arguments() {
        let Ok(cli) = Cli::try_parse_from(["hilbertile", "tile", "map.png", "-t", "hilbert"]) else {
            unreachable!("valid arguments");
        };
        let Command::Tile(args) = cli.command else {
            unreachable!("tile subcommand");
        };
        assert_eq!((args.rows, args.cols), (4, 4));
        assert_eq!(args.traversal, Traversal::Hilbert);
        assert!(!args.save_crops);
        assert!(args.should_show_progress());
        assert_eq!(Traversal::RowMajor.suffix(), "row_major");
    }

    // Tests the curve command writes a CSV with a header and 4^order rows
    // Verified by omitting the header line
    #[test]
    fn test_curve_command_writes_csv() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let output = dir.path().join("curve.csv");
        let Some(output_arg) = output.to_str() else {
            unreachable!("utf-8 temp path");
        };
        let Ok(cli) = Cli::try_parse_from([
            "hilbertile", "curve", "--order", "2", "--output", output_arg, "--verify", "--quiet",
        ]) else {
            unreachable!("valid arguments");
        };
        assert!(cli.run().is_ok());

        let Ok(content) = std::fs::read_to_string(&output) else {
            unreachable!("csv written");
        };
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.first(), Some(&"x,y,z"));
        assert_eq!(lines.len(), 17);
        assert_eq!(lines.get(1), Some(&"0,0,0"));
        assert_eq!(lines.get(2), Some(&"1,0,0"));
    }

    // Tests orders above the limit are rejected
    // Verified by removing the order limit
    #[test]
    fn test_curve_order_limit() {
        let Ok(cli) = Cli::try_parse_from(["hilbertile", "curve", "--order", "13"]) else {
            unreachable!("valid arguments");
        };
        assert!(cli.run().is_err());
    }

    // Tests a directory target tiles every image into its own crop folder
    // Verified by writing all crops into the output root
    #[test]
    fn test_tile_command_directory() {
        let Ok(input) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let Ok(output) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        write_source(input.path(), "first.png", 8, 8);
        write_source(input.path(), "second.png", 12, 8);
        assert!(std::fs::write(input.path().join("notes.txt"), "skip me").is_ok());

        let (Some(input_arg), Some(output_arg)) = (input.path().to_str(), output.path().to_str())
        else {
            unreachable!("utf-8 temp paths");
        };
        let Ok(cli) = Cli::try_parse_from([
            "hilbertile", "tile", input_arg, "-r", "2", "-c", "2", "--save-crops", "--out-dir",
            output_arg, "--traversal", "hilbert", "--assemble", "--quiet",
        ]) else {
            unreachable!("valid arguments");
        };
        assert!(cli.run().is_ok());

        for stem in ["first", "second"] {
            assert!(output.path().join(stem).join("crop_0_0.png").exists());
            assert!(output.path().join(stem).join("crop_1_1.png").exists());
            assert!(output.path().join(format!("{stem}_hilbert.png")).exists());
        }
    }

    // Tests Hilbert assembly on a non-square grid fails
    // Verified by falling back to row-major order
    #[test]
    fn test_tile_command_rejects_hilbert_on_uneven_grid() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        write_source(dir.path(), "map.png", 6, 6);
        let source = dir.path().join("map.png");
        let (Some(source_arg), Some(out_arg)) = (source.to_str(), dir.path().to_str()) else {
            unreachable!("utf-8 temp paths");
        };
        let Ok(cli) = Cli::try_parse_from([
            "hilbertile", "tile", source_arg, "-r", "2", "-c", "3", "-t", "hilbert", "-a", "-q",
            "-o", out_arg,
        ]) else {
            unreachable!("valid arguments");
        };
        assert!(cli.run().is_err());
    }

    // Tests unsupported and missing targets are reported
    // Verified by accepting any file extension
    #[test]
    fn test_tile_command_invalid_target() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory");
        };
        let text = dir.path().join("notes.txt");
        assert!(std::fs::write(&text, "not an image").is_ok());
        for target in [text, dir.path().join("missing.png")] {
            let Some(target_arg) = target.to_str() else {
                unreachable!("utf-8 temp path");
            };
            let Ok(cli) = Cli::try_parse_from(["hilbertile", "tile", target_arg, "-q"]) else {
                unreachable!("valid arguments");
            };
            assert!(cli.run().is_err());
        }
    }
}
