//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use hilbertile::HilbertError;
    use hilbertile::io::error::invalid_argument;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = HilbertError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read"));
    }

    // Tests InvalidArgument error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_argument_error() {
        let error = invalid_argument("step_size", &-1.5, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("step_size"));
        assert!(message.contains("-1.5"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests TileWrite error names the tile path and keeps its source
    // Verified by excluding source error from message
    #[test]
    fn test_tile_write_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = HilbertError::TileWrite {
            path: PathBuf::from("/restricted/crop_0_1.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("crop_0_1.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions from library errors
    // Verified by mapping image errors to FileSystem
    #[test]
    fn test_from_conversions() {
        let from_image: HilbertError =
            image::ImageError::IoError(std::io::Error::other("x")).into();
        assert!(matches!(from_image, HilbertError::ImageLoad { .. }));

        let from_io: HilbertError = std::io::Error::other("y").into();
        assert!(matches!(from_io, HilbertError::FileSystem { .. }));
    }
}
