//! Tests for the coordinate-only identity of points

#[cfg(test)]
mod tests {
    use gridgraph::spatial::{Coordinate, Direction, Locatable, Point};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_defaults() {
        let point = Point::new(1, 2);
        assert_eq!((point.x(), point.y(), point.z()), (1, 2, 0));
        assert_eq!(point.tag(), ' ');
        assert_eq!(point.to_string(), "(1,2,0: )");
    }

    #[test]
    fn test_equality_ignores_tag() {
        let plain = Point::new(1_i64, 2);
        let tagged = Point::tagged(1_i64, 2, '#');
        assert_eq!(plain, tagged);
        assert_eq!(hash_of(&plain), hash_of(&tagged));
    }

    #[test]
    fn test_depth_is_part_of_identity() {
        assert_eq!(Point::with_depth(1, 2, 3), Point::with_depth(1, 2, 3));
        assert_ne!(Point::with_depth(1, 2, 3), Point::with_depth(1, 2, 4));
        assert_ne!(Point::new(1, 2), Point::with_depth(1, 2, 1));
    }

    // Set membership is the graph membership test used by every search
    #[test]
    fn test_set_membership_by_location() {
        let graph: HashSet<Point<i32>> = [Point::tagged(3, 4, 'S')].into_iter().collect();
        assert!(graph.contains(&Point::new(3, 4)));
        assert_eq!(graph.get(&Point::new(3, 4)).map(Locatable::tag), Some('S'));
    }

    #[test]
    fn test_floating_point_coordinates() {
        let point = Point::new(0.5_f64, -1.5);
        let moved = point.step(Direction::Down).unwrap_or(point);
        assert!((moved.x() - 0.5).abs() < f64::EPSILON);
        assert!((moved.y() + 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unit_step_stops_at_domain_edges() {
        assert_eq!(0_u32.unit_step(-1), None);
        assert_eq!(0_u32.unit_step(1), Some(1));
        assert_eq!(i32::MAX.unit_step(1), None);
        assert_eq!(i32::MIN.unit_step(-1), None);
        assert_eq!(7_i8.unit_step(0), Some(7));
    }

    // Neighbours that would wrap around the coordinate domain are dropped
    #[test]
    fn test_cardinal_neighbours_at_unsigned_origin() {
        let neighbours = Point::new(0_u32, 0).cardinal_neighbours();
        assert_eq!(neighbours, [Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(Point::new(0_u8, 0).step(Direction::Up), None);
        assert_eq!(
            Point::new(u8::MAX, 3).step(Direction::Left),
            Some(Point::new(254, 3))
        );
    }

    #[test]
    fn test_cardinal_neighbours_order_and_depth() {
        let neighbours = Point::from_parts(5, 5, 2, 'q').cardinal_neighbours();
        assert_eq!(
            neighbours,
            [
                Point::with_depth(4, 5, 2),
                Point::with_depth(6, 5, 2),
                Point::with_depth(5, 4, 2),
                Point::with_depth(5, 6, 2),
            ]
        );
        assert!(neighbours.iter().all(|neighbour| neighbour.tag() == ' '));
    }

    #[test]
    fn test_location_keeps_tag() {
        let point = Point::tagged(2_u8, 3, 'E');
        let location = point.location();
        assert_eq!(location, point);
        assert_eq!(location.tag(), 'E');
    }

    proptest! {
        #[test]
        fn prop_tag_never_affects_identity(
            x in -1_000i32..1_000,
            y in -1_000i32..1_000,
            z in -5i32..5,
            first in proptest::char::any(),
            second in proptest::char::any()
        ) {
            let a = Point::from_parts(x, y, z, first);
            let b = Point::from_parts(x, y, z, second);
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
            prop_assert_ne!(a, Point::from_parts(x, y, z + 1, first));
        }
    }
}
