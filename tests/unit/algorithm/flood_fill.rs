//! Tests for breadth-first polygon filling

#[cfg(test)]
mod tests {
    use gridgraph::AlgorithmError;
    use gridgraph::algorithm::flood_fill::flood_fill;
    use gridgraph::algorithm::polygon::Polygon;
    use gridgraph::spatial::{CharGrid, Point};
    use std::collections::HashSet;

    fn boundary(rows: &[&str]) -> Vec<Point<i32>> {
        CharGrid::parse(rows)
            .and_then(|grid| grid.to_points(&['.']))
            .map(|points| points.into_iter().collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_square_fill_includes_boundary() {
        let square = boundary(&[".....", ".###.", ".#.#.", ".###.", "....."]);
        let filled = flood_fill(&square, &Point::new(2, 2)).unwrap_or_default();

        assert_eq!(filled.len(), 9);
        assert_eq!(filled.first(), Some(&Point::new(2, 2)));
        let filled: HashSet<Point<i32>> = filled.into_iter().collect();
        assert!(square.iter().all(|point| filled.contains(point)));
    }

    #[test]
    fn test_concave_fill_reaches_every_pocket() {
        let concave = boundary(&[
            "#######...",
            "#.....#...",
            "#####.###.",
            "....#...#.",
            "###.#...##",
            "#.#.#....#",
            "#.###....#",
            "#.....####",
            "#######...",
        ]);
        let filled = flood_fill(&concave, &Point::new(1, 1)).unwrap_or_default();

        assert_eq!(filled.len(), 73);
        let unique: HashSet<&Point<i32>> = filled.iter().collect();
        assert_eq!(unique.len(), filled.len());
        assert!(unique.contains(&Point::new(8, 6)));
        assert!(!unique.contains(&Point::new(3, 4)));
    }

    #[test]
    fn test_start_outside_fills_nothing() {
        let square = boundary(&[".....", ".###.", ".#.#.", ".###.", "....."]);
        let filled = flood_fill(&square, &Point::new(0, 0));
        assert_eq!(filled, Ok(Vec::new()));
    }

    #[test]
    fn test_fill_budget() {
        let polygon = Polygon::new(&boundary(&[".....", ".###.", ".#.#.", ".###.", "....."]));
        assert_eq!(
            polygon.flood_fill_with_limit(&Point::new(2, 2), 4),
            Err(AlgorithmError::BudgetExhausted {
                operation: "flood_fill",
                limit: 4
            })
        );
        assert_eq!(
            polygon
                .flood_fill_with_limit(&Point::new(2, 2), 9)
                .map(|filled| filled.len()),
            Ok(9)
        );
    }

    #[test]
    fn test_unsigned_ring_fills_from_interior_and_corner() {
        let ring: Vec<Point<u32>> = CharGrid::parse(&["###", "#.#", "###"])
            .and_then(|grid| grid.to_points(&['.']))
            .map(|points| points.into_iter().collect())
            .unwrap_or_default();

        let from_centre = flood_fill(&ring, &Point::new(1, 1)).unwrap_or_default();
        let from_corner = flood_fill(&ring, &Point::new(0, 0)).unwrap_or_default();

        assert_eq!(from_centre.len(), 9);
        assert_eq!(from_corner.len(), 9);
        assert_eq!(from_corner.first(), Some(&Point::new(0, 0)));
    }
}
