use grid_snake::config::GRID_SIZE;
use grid_snake::direction::{Direction, Proposal};
use grid_snake::food::{RandomCells, ScriptedCells};
use grid_snake::game::{DeathReason, GameEngine, GameState, GameStatus, TickOutcome};
use grid_snake::snake::{Cell, Snake};

fn cells(snake: &Snake) -> Vec<Cell> {
    snake.segments().copied().collect()
}

#[test]
fn eating_food_grows_and_moves_the_food() {
    let state = GameState::playing(
        Snake::new(Cell::new(10, 10)),
        Direction::Right,
        Cell::new(11, 10),
    );
    let mut engine = GameEngine::with_state(state, RandomCells::from_seed(11));

    assert_eq!(engine.tick(), TickOutcome::Grew);

    let state = engine.state();
    assert_eq!(cells(&state.snake), vec![Cell::new(11, 10), Cell::new(10, 10)]);
    let food = state.food.expect("food respawns after eating");
    assert_ne!(food, Cell::new(11, 10));
    assert_ne!(food, Cell::new(10, 10));
}

#[test]
fn stepping_off_the_grid_ends_the_game_without_moving() {
    let state = GameState::playing(Snake::new(Cell::new(0, 0)), Direction::Left, Cell::new(7, 7));
    let mut engine = GameEngine::with_state(state, ScriptedCells::new(vec![]));

    assert_eq!(engine.tick(), TickOutcome::Collided(DeathReason::Wall));

    let state = engine.state();
    assert!(state.game_over());
    assert_eq!(cells(&state.snake), vec![Cell::new(0, 0)]);
    assert_eq!(state.direction, Some(Direction::Left));
    assert_eq!(state.food, Some(Cell::new(7, 7)));
}

#[test]
fn reversing_into_the_body_is_refused() {
    let snake = Snake::from_segments(vec![Cell::new(5, 5), Cell::new(5, 6)]).expect("valid body");
    let state = GameState::playing(snake, Direction::Up, Cell::new(0, 0));
    let mut engine = GameEngine::with_state(state, ScriptedCells::new(vec![]));

    assert_eq!(engine.steer(Direction::Down), Proposal::Reject);
    assert_eq!(engine.state().direction, Some(Direction::Up));
}

#[test]
fn plain_move_drops_the_tail() {
    let snake = Snake::from_segments(vec![
        Cell::new(5, 5),
        Cell::new(6, 5),
        Cell::new(6, 6),
        Cell::new(5, 6),
    ])
    .expect("valid body");
    let state = GameState::playing(snake, Direction::Up, Cell::new(15, 15));
    let mut engine = GameEngine::with_state(state, ScriptedCells::new(vec![]));

    assert_eq!(engine.tick(), TickOutcome::Moved);

    assert_eq!(
        cells(&engine.state().snake),
        vec![
            Cell::new(5, 4),
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
        ]
    );
    assert_eq!(engine.state().food, Some(Cell::new(15, 15)));
}

#[test]
fn stepwise_session_from_start_to_wall_and_reset() {
    let script = vec![Cell::new(12, 10), Cell::new(0, 0)];
    let mut engine = GameEngine::new(ScriptedCells::new(script));
    assert_eq!(engine.state().food, Some(Cell::new(12, 10)));

    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert!(engine.steer(Direction::Right).is_accepted());
    assert_eq!(engine.state().status, GameStatus::Playing);

    assert_eq!(engine.tick(), TickOutcome::Moved);
    assert_eq!(engine.tick(), TickOutcome::Grew);
    assert_eq!(engine.state().snake.len(), 2);
    assert_eq!(engine.state().food, Some(Cell::new(0, 0)));

    // Same-axis and reverse proposals are both ignored mid-game.
    assert_eq!(engine.steer(Direction::Right), Proposal::Reject);
    assert_eq!(engine.steer(Direction::Left), Proposal::Reject);

    for _ in 0..7 {
        assert_eq!(engine.tick(), TickOutcome::Moved);
    }
    assert_eq!(engine.state().snake.head(), Cell::new(19, 10));

    assert_eq!(engine.tick(), TickOutcome::Collided(DeathReason::Wall));
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert_eq!(engine.state().score(), 1);

    engine.reset();
    let state = engine.state();
    assert_eq!(cells(&state.snake), vec![Cell::new(10, 10)]);
    assert_eq!(state.direction, None);
    assert!(!state.started());
    assert!(!state.game_over());
    assert_eq!(state.food, Some(Cell::new(12, 10)));
}

#[test]
fn filling_the_grid_is_a_victory() {
    // Boustrophedon walk over every cell; the snake covers all but the last.
    let walk: Vec<Cell> = (0..GRID_SIZE * GRID_SIZE)
        .map(|k| {
            let y = k / GRID_SIZE;
            let x = if y % 2 == 0 {
                k % GRID_SIZE
            } else {
                GRID_SIZE - 1 - k % GRID_SIZE
            };
            Cell::new(x, y)
        })
        .collect();
    let last = walk[walk.len() - 1];
    let body: Vec<Cell> = walk[..walk.len() - 1].iter().rev().copied().collect();
    let snake = Snake::from_segments(body).expect("walk visits each cell once");
    assert_eq!(snake.head(), Cell::new(1, 19));

    let state = GameState::playing(snake, Direction::Left, last);
    let mut engine = GameEngine::with_state(state, ScriptedCells::new(vec![]));

    assert_eq!(engine.tick(), TickOutcome::Won);

    let state = engine.state();
    assert_eq!(state.status, GameStatus::Victory);
    assert!(state.game_over());
    assert_eq!(state.food, None);
    assert_eq!(state.snake.len(), 400);
    assert_eq!(engine.cells().draws(), 0);
    assert_eq!(engine.tick(), TickOutcome::Idle);
}
