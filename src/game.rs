use log::{debug, info};
use rand::rngs::StdRng;

use crate::direction::{Direction, DirectionArbiter, Proposal};
use crate::food::{CellSource, RandomCells, place_food};
use crate::snake::{Cell, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    /// No heading chosen yet.
    Waiting,
    Playing,
    GameOver,
    /// The snake covers every cell.
    Victory,
}

/// What ended a session in [`GameStatus::GameOver`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// Result of a single [`GameEngine::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Preconditions not met; nothing changed.
    Idle,
    Moved,
    Grew,
    Collided(DeathReason),
    Won,
}

/// Complete game state for one session.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub direction: Option<Direction>,
    pub food: Option<Cell>,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
}

impl GameState {
    /// Construction value before the first food is placed.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            snake: Snake::new(Cell::start()),
            direction: None,
            food: None,
            status: GameStatus::Waiting,
            death_reason: None,
        }
    }

    /// Builds a state that is already moving along `direction`.
    #[must_use]
    pub fn playing(snake: Snake, direction: Direction, food: Cell) -> Self {
        Self {
            snake,
            direction: Some(direction),
            food: Some(food),
            status: GameStatus::Playing,
            death_reason: None,
        }
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.status != GameStatus::Waiting
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver | GameStatus::Victory)
    }

    /// True when a tick would advance the snake.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started() && !self.game_over() && self.direction.is_some() && self.food.is_some()
    }

    /// Food eaten so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.len() - 1).unwrap_or(u32::MAX)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Owns the authoritative [`GameState`] and the food source.
///
/// Callers only ever see the state through shared references; every mutation
/// goes through [`steer`](Self::steer), [`tick`](Self::tick) or
/// [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct GameEngine<S = RandomCells<StdRng>> {
    state: GameState,
    cells: S,
}

impl GameEngine {
    /// Creates an engine whose food placement is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomCells::from_seed(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RandomCells::from_entropy())
    }
}

impl<S: CellSource> GameEngine<S> {
    /// Creates the initial state and places the first food.
    #[must_use]
    pub fn new(cells: S) -> Self {
        let mut engine = Self {
            state: GameState::initial(),
            cells,
        };
        engine.state.food = place_food(&mut engine.cells, &engine.state.snake);
        engine
    }

    /// Resumes from an explicit state, e.g. a scripted scenario.
    #[must_use]
    pub fn with_state(state: GameState, cells: S) -> Self {
        Self { state, cells }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Returns the food source, mostly for inspecting scripted draws.
    #[must_use]
    pub fn cells(&self) -> &S {
        &self.cells
    }

    /// Arbitrates `requested` against the current heading and applies it.
    pub fn steer(&mut self, requested: Direction) -> Proposal {
        let proposal =
            DirectionArbiter::propose(self.state.direction, requested, self.state.started());

        if let Proposal::Accept {
            direction,
            starts_game,
        } = proposal
        {
            self.state.direction = Some(direction);
            if starts_game {
                self.state.status = GameStatus::Playing;
                info!("game started heading {direction:?}");
            }
        }

        proposal
    }

    /// Advances the simulation by one step.
    ///
    /// Collision is judged against the body as it was before the move, tail
    /// included. A colliding head is never committed.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }
        let (Some(direction), Some(food)) = (self.state.direction, self.state.food) else {
            return TickOutcome::Idle;
        };

        let new_head = self.state.snake.head().step(direction);

        if let Some(reason) = collision(new_head, &self.state.snake) {
            self.state.status = GameStatus::GameOver;
            self.state.death_reason = Some(reason);
            info!("game over: {reason:?} at {new_head}, score {}", self.state.score());
            return TickOutcome::Collided(reason);
        }

        let ate = new_head == food;
        self.state.snake.advance(new_head, ate);

        if !ate {
            debug!("head moved to {new_head}");
            return TickOutcome::Moved;
        }

        self.state.food = place_food(&mut self.cells, &self.state.snake);
        if self.state.food.is_none() {
            self.state.status = GameStatus::Victory;
            info!("snake fills the grid, score {}", self.state.score());
            return TickOutcome::Won;
        }

        debug!("ate food at {new_head}, length {}", self.state.snake.len());
        TickOutcome::Grew
    }

    /// Restores the initial state with freshly placed food.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        self.state.food = place_food(&mut self.cells, &self.state.snake);
        info!("game reset");
    }
}

fn collision(head: Cell, body: &Snake) -> Option<DeathReason> {
    if !head.is_within_grid() {
        return Some(DeathReason::Wall);
    }
    if body.occupies(head) {
        return Some(DeathReason::SelfCollision);
    }
    None
}
