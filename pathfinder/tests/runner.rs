use pathfinder::{
    Algorithm, AnimationSpeed, ConfigurationError, EditMode, Grid, GridSize, MemorySink,
    PointerEvent, Position, RenderEvent, SearchRunner, Sequencer,
};

fn runner_with_history() -> (SearchRunner, MemorySink) {
    let history = MemorySink::new();
    let runner = SearchRunner::default().with_sink(history.clone());
    (runner, history)
}

#[tokio::test]
async fn execute_records_the_run() {
    let (mut runner, history) = runner_with_history();
    let mut grid = Grid::with_default_endpoints(6, 6).unwrap();
    grid.set_wall(Position::new(0, 1), true).unwrap();

    let outcome = runner.execute(&mut grid, Algorithm::AStar).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.path_length(), 10);

    let on_path: Vec<_> = grid
        .cells()
        .filter(|cell| cell.is_on_path())
        .map(|cell| cell.position())
        .collect();
    assert_eq!(on_path.len(), outcome.path_length());
    assert!(outcome.path.iter().all(|pos| on_path.contains(pos)));

    let records = history.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.algorithm, Algorithm::AStar);
    assert_eq!(record.grid_size, GridSize::new(6, 6));
    assert_eq!(record.start, Position::new(0, 0));
    assert_eq!(record.end, Position::new(5, 5));
    assert_eq!(record.wall_positions, vec![Position::new(0, 1)]);
    assert!(record.path_found);
    assert_eq!(record.path_length, 10);
    assert_eq!(record.visited_count, outcome.visited_count);
    assert_eq!(record.execution_time, outcome.execution_time_ms());
}

#[tokio::test]
async fn consecutive_runs_start_from_a_clean_grid() {
    let (mut runner, history) = runner_with_history();
    let mut grid = Grid::with_default_endpoints(8, 8).unwrap();

    let first = runner
        .execute(&mut grid, Algorithm::Dijkstra)
        .await
        .unwrap();
    let second = runner
        .execute(&mut grid, Algorithm::DepthFirst)
        .await
        .unwrap();

    assert_eq!(grid.visited_count(), second.visited_count);
    assert_ne!(first.visited_count, second.visited_count);

    let algorithms: Vec<_> = history.records().iter().map(|r| r.algorithm).collect();
    assert_eq!(algorithms, vec![Algorithm::Dijkstra, Algorithm::DepthFirst]);
}

#[tokio::test]
async fn unreachable_end_is_reported_not_raised() {
    let (mut runner, history) = runner_with_history();
    let mut grid = Grid::with_default_endpoints(4, 4).unwrap();
    for row in 0..4 {
        grid.set_wall(Position::new(row, 2), true).unwrap();
    }

    let outcome = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();

    assert!(!outcome.success);
    assert!(outcome.path.is_empty());
    assert_eq!(outcome.visited_count, 7);

    let records = history.records();
    assert!(!records[0].path_found);
    assert_eq!(records[0].path_length, 0);
}

#[tokio::test]
async fn configuration_errors_leave_grid_and_history_untouched() {
    let (mut runner, history) = runner_with_history();
    let mut grid = Grid::new(4, 4).unwrap();
    grid.set_end(Position::new(3, 3)).unwrap();
    grid.set_wall(Position::new(1, 1), true).unwrap();

    let err = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConfigurationError>(),
        Some(&ConfigurationError::MissingStart)
    );
    assert!(history.records().is_empty());
    assert!(grid.cells().all(|cell| !cell.has_search_state()));
    assert_eq!(grid.walls(), vec![Position::new(1, 1)]);
}

#[tokio::test]
async fn sequencer_streams_visits_then_path() {
    let mut runner = SearchRunner::new(Sequencer::new(AnimationSpeed::INSTANT));
    let mut rx = runner.sequencer_mut().subscribe();
    let mut grid = Grid::with_default_endpoints(4, 4).unwrap();

    let outcome = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    let visits: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            RenderEvent::Visited(pos) => Some(*pos),
            _ => None,
        })
        .collect();
    let path: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            RenderEvent::Path(pos) => Some(*pos),
            _ => None,
        })
        .collect();

    assert_eq!(visits.len(), outcome.visited_count);
    assert!(visits.iter().all(|pos| grid[*pos].is_visited()));
    assert_eq!(path, outcome.path);
    assert_eq!(events.last(), Some(&RenderEvent::Finished { success: true }));
}

#[tokio::test]
async fn large_open_grid_streams_every_visit() {
    let mut runner = SearchRunner::default();
    let mut rx = runner.sequencer_mut().subscribe();
    let mut grid = Grid::with_default_endpoints(50, 50).unwrap();

    let outcome = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();
    assert!(outcome.visited_count > 2000);

    let mut visits = 0;
    let mut path = 0;
    let mut finished = false;
    while let Ok(event) = rx.try_recv() {
        match event {
            RenderEvent::Visited(_) => visits += 1,
            RenderEvent::Path(_) => path += 1,
            RenderEvent::Finished { success } => finished = success,
        }
    }

    assert_eq!(visits, outcome.visited_count);
    assert_eq!(path, outcome.path_length());
    assert!(finished);
}

#[tokio::test]
async fn speed_changes_apply_to_the_next_run() {
    let mut runner = SearchRunner::new(Sequencer::new(AnimationSpeed::new(195)));
    let mut grid = Grid::with_default_endpoints(1, 5).unwrap();

    let paced = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();
    assert!(paced.execution_time_ms() >= 18.0);

    runner.sequencer_mut().set_speed(AnimationSpeed::INSTANT);
    assert_eq!(runner.sequencer().speed(), AnimationSpeed::INSTANT);

    let instant = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();
    assert_eq!(instant.visited_count, paced.visited_count);
    assert!(instant.execution_time_ms() < paced.execution_time_ms());
}

#[tokio::test]
async fn slow_animation_suspends_each_expansion() {
    let mut runner = SearchRunner::new(Sequencer::new(AnimationSpeed::new(195)));
    let mut grid = Grid::with_default_endpoints(1, 5).unwrap();

    let outcome = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();

    // three expansions at 6ms each
    assert_eq!(outcome.visited_count, 3);
    assert!(outcome.execution_time_ms() >= 18.0);
}

#[tokio::test]
async fn edits_between_runs_change_the_outcome() {
    let (mut runner, _history) = runner_with_history();
    let mut grid = Grid::with_default_endpoints(3, 3).unwrap();

    let before = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();
    assert!(before.success);

    // paint a wall across the middle column, then drag the end behind it
    for event in [
        PointerEvent::Press(Position::new(0, 1)),
        PointerEvent::Move(Position::new(1, 1)),
        PointerEvent::Move(Position::new(2, 1)),
        PointerEvent::Release,
    ] {
        grid.handle_pointer(event);
    }
    assert_eq!(grid.edit_mode(), EditMode::Idle);

    let walled = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();
    assert!(!walled.success);

    grid.handle_pointer(PointerEvent::Press(Position::new(2, 2)));
    grid.handle_pointer(PointerEvent::Move(Position::new(2, 1)));
    grid.handle_pointer(PointerEvent::Move(Position::new(1, 0)));
    grid.handle_pointer(PointerEvent::Leave);
    assert_eq!(grid.end(), Some(Position::new(1, 0)));

    let moved = runner
        .execute(&mut grid, Algorithm::BreadthFirst)
        .await
        .unwrap();
    assert_eq!(moved.path, vec![Position::new(1, 0)]);
}
