//! Tests for maze tile roles

#[cfg(test)]
mod tests {
    use gridgraph::spatial::{CharGrid, MazePoint, MazePointFactory, Point, TileRole};

    #[test]
    fn test_roles_from_tags() {
        assert_eq!(TileRole::from_tag('#'), TileRole::Wall);
        assert_eq!(TileRole::from_tag('S'), TileRole::Start);
        assert_eq!(TileRole::from_tag('E'), TileRole::End);
        assert_eq!(TileRole::from_tag('.'), TileRole::Open);
        assert_eq!(TileRole::from_tag(' '), TileRole::Open);
    }

    #[test]
    fn test_maze_point_flags() {
        let wall = MazePoint::from_point(Point::tagged(0, 0, '#'));
        assert!(wall.is_wall());
        assert!(!wall.is_start());

        let start = MazePoint::from_point(Point::tagged(1, 1, 'S'));
        assert!(start.is_start());
        assert_eq!(start.role(), TileRole::Start);
        assert_eq!(start, MazePoint::from_point(Point::new(1, 1)));
    }

    #[test]
    fn test_reference_maze_roles() {
        let points = CharGrid::parse(&crate::MAZE)
            .and_then(|grid| grid.to_points_with(&[], &MazePointFactory::<i32>::new()))
            .unwrap_or_default();

        assert_eq!(points.len(), 225);
        assert_eq!(points.iter().filter(|point| point.is_start()).count(), 1);
        assert_eq!(points.iter().filter(|point| point.is_end()).count(), 1);
        assert_eq!(points.iter().filter(|point| !point.is_wall()).count(), 104);
        assert_eq!(
            points
                .iter()
                .filter(|point| point.role() == TileRole::Open)
                .count(),
            102
        );
    }
}
