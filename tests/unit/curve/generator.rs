//! Tests for Hilbert curve point generation

#[cfg(test)]
mod tests {
    use hilbertile::HilbertError;
    use hilbertile::curve::{generate, generate_lattice, point_count};
    use hilbertile::spatial::Point;

    fn coords(points: &[Point]) -> Vec<(f64, f64, f64)> {
        points.iter().map(|p| (p.x, p.y, p.z)).collect()
    }

    // Tests the order-1 regression fixture from the seed string
    // Verified by skipping the leading right turn
    #[test]
    fn test_order_one_fixture() {
        let Ok(points) = generate(1, Point::origin(), 1.0) else {
            unreachable!("valid arguments");
        };
        assert_eq!(
            coords(&points),
            vec![
                (0.0, 0.0, 0.0),
                (0.0, 1.0, 0.0),
                (1.0, 1.0, 0.0),
                (1.0, 0.0, 0.0)
            ]
        );
    }

    // Tests the order-2 path against the hand-traced walk
    // Verified by swapping the turn directions
    #[test]
    fn test_order_two_lattice() {
        let Ok(path) = generate_lattice(2) else {
            unreachable!("valid order");
        };
        let expected = vec![
            [0, 0], [1, 0], [1, 1], [0, 1], [0, 2], [0, 3], [1, 3], [1, 2],
            [2, 2], [2, 3], [3, 3], [3, 2], [3, 1], [2, 1], [2, 0], [3, 0],
        ];
        assert_eq!(path, expected);
    }

    // Tests start offset and step scaling are applied to every point
    // Verified by adding the step before scaling
    #[test]
    fn test_start_and_step() {
        let start = Point::new(-4.0, -2.5, 0.0);
        let Ok(points) = generate(1, start, 0.5) else {
            unreachable!("valid arguments");
        };
        assert_eq!(points.first(), Some(&start));
        assert_eq!(
            coords(&points),
            vec![
                (-4.0, -2.5, 0.0),
                (-4.0, -2.0, 0.0),
                (-3.5, -2.0, 0.0),
                (-3.5, -2.5, 0.0)
            ]
        );
    }

    // Tests only the start keeps its depth and the walk runs in the z = 0 plane
    // Verified by carrying the start's z through every point
    #[test]
    fn test_depth_only_on_start() {
        let start = Point::<f64>::new(1.0, 2.0, 3.0);
        let Ok(points) = generate(2, start, 1.0) else {
            unreachable!("valid arguments");
        };
        assert_eq!(points.first(), Some(&start));
        assert_eq!(points.get(1), Some(&Point::new(2.0, 2.0, 0.0)));
        assert!(points.iter().skip(1).all(|p| p.z.abs() < f64::EPSILON));
    }

    // Tests point counts equal 4^order
    // Verified by pre-sizing with the forward count only
    #[test]
    fn test_point_counts() {
        for order in 1..=6 {
            let Ok(points) = generate(order, Point::<f64>::origin(), 1.0) else {
                unreachable!("valid arguments");
            };
            assert_eq!(Some(points.len()), point_count(order));
        }
        assert_eq!(point_count(1), Some(4));
        assert_eq!(point_count(3), Some(64));
        assert_eq!(point_count(64), None);
    }

    // Tests invalid orders and step sizes are rejected before generation
    // Verified by accepting zero step size
    #[test]
    fn test_invalid_arguments() {
        let origin = Point::<f64>::origin();
        for (order, step) in [(0, 1.0), (1, 0.0), (1, -1.0), (1, f64::NAN), (1, f64::INFINITY)] {
            let result = generate(order, origin, step);
            assert!(
                matches!(result, Err(HilbertError::InvalidArgument { .. })),
                "order {order} step {step} should be rejected"
            );
        }
    }

    // Tests single-precision points are supported
    // Verified by hard-coding f64 in the offset
    #[test]
    fn test_f32_points() {
        let Ok(points) = generate(2, Point::<f32>::origin(), 0.25_f32) else {
            unreachable!("valid arguments");
        };
        assert_eq!(points.len(), 16);
        assert_eq!(points.last(), Some(&Point::new(0.75_f32, 0.0, 0.0)));
    }
}
