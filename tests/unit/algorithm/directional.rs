//! Tests for the turn-penalised search over directional points

#[cfg(test)]
mod tests {
    use gridgraph::algorithm::dijkstra::dijkstra;
    use gridgraph::algorithm::directional::{
        TurnPenalty, directional_neighbours, turn_penalty_search,
    };
    use gridgraph::spatial::{
        CharGrid, Direction, DirectionalPoint, DirectionalPointFactory, Locatable, Turn,
    };
    use std::collections::HashSet;

    fn directional_maze() -> HashSet<DirectionalPoint<i32>> {
        CharGrid::parse(&crate::MAZE)
            .and_then(|grid| grid.to_points_with(&['#'], &DirectionalPointFactory::new()))
            .unwrap_or_default()
    }

    #[test]
    fn test_default_penalty_costs() {
        let penalty = TurnPenalty::default();
        assert_eq!(penalty.step_cost(Turn::Straight), 1);
        assert_eq!(penalty.step_cost(Turn::Quarter), 1001);
        assert_eq!(penalty.step_cost(Turn::Reverse), 2001);
    }

    #[test]
    fn test_cost_depends_on_heading_change() {
        let penalty = TurnPenalty::default();
        let east = DirectionalPoint::new(0, 0, Direction::Right);

        let ahead = DirectionalPoint::new(1, 0, Direction::Right);
        let north = DirectionalPoint::new(0, -1, Direction::Up);
        let back = DirectionalPoint::new(-1, 0, Direction::Left);
        assert_eq!(penalty.cost(&east, &ahead, 10), 11);
        assert_eq!(penalty.cost(&east, &north, 10), 1011);
        assert_eq!(penalty.cost(&east, &back, 10), 2011);
    }

    #[test]
    fn test_cost_saturates() {
        let penalty = TurnPenalty::default();
        let east = DirectionalPoint::new(0, 0, Direction::Right);
        let north = DirectionalPoint::new(0, -1, Direction::Up);
        assert_eq!(penalty.cost(&east, &north, u64::MAX - 5), u64::MAX);
    }

    // Each neighbour faces the direction of the step that reaches it
    #[test]
    fn test_neighbours_carry_step_heading() {
        let factory = DirectionalPointFactory::new();
        let graph: HashSet<DirectionalPoint<i32>> = [(1, 1), (0, 1), (2, 1), (1, 2)]
            .into_iter()
            .map(|(x, y)| DirectionalPoint::new(x, y, Direction::None))
            .collect();

        let location = DirectionalPoint::new(1, 1, Direction::Up);
        let headings: Vec<(i32, i32, Direction)> = directional_neighbours(&location, &graph, &factory)
            .iter()
            .map(|point| (point.x(), point.y(), point.heading()))
            .collect();

        assert_eq!(
            headings,
            vec![
                (0, 1, Direction::Left),
                (2, 1, Direction::Right),
                (1, 2, Direction::Down),
            ]
        );
    }

    #[test]
    fn test_reference_maze_with_turn_penalty() {
        let maze = directional_maze();
        let start = DirectionalPoint::new(1, 13, Direction::Right);
        let end = DirectionalPoint::new(13, 1, Direction::None);

        let result = dijkstra(&maze, &start, &end, &turn_penalty_search(TurnPenalty::default()));
        assert_eq!(result.end_cost(), Some(7036));

        let path = result.path_to(&end).unwrap_or_default();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
    }

    // Flat penalties reduce the directional search to plain step counting
    #[test]
    fn test_flat_penalty_matches_unit_cost() {
        let maze = directional_maze();
        let start = DirectionalPoint::new(1, 13, Direction::Right);
        let end = DirectionalPoint::new(13, 1, Direction::None);
        let flat = TurnPenalty {
            straight: 1,
            quarter: 1,
            reverse: 1,
        };

        let result = dijkstra(&maze, &start, &end, &turn_penalty_search(flat));
        assert_eq!(result.end_cost(), Some(28));
    }

    #[test]
    fn test_unsigned_grid_from_origin() {
        let factory = DirectionalPointFactory::<u32>::new();
        let graph = CharGrid::parse(&["...", "...", "..."])
            .and_then(|grid| grid.to_points_with(&['#'], &factory))
            .unwrap_or_default();
        let start = DirectionalPoint::new(0_u32, 0, Direction::Right);
        let end = DirectionalPoint::new(2_u32, 2, Direction::None);

        let headings: Vec<Direction> = directional_neighbours(&start, &graph, &factory)
            .iter()
            .map(DirectionalPoint::heading)
            .collect();
        assert_eq!(headings, vec![Direction::Right, Direction::Down]);

        let result = dijkstra(
            &graph,
            &start,
            &end,
            &turn_penalty_search(TurnPenalty::default()),
        );
        assert_eq!(result.end_cost(), Some(1004));
    }
}
