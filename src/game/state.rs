use super::{cell::Cell, config::GameConfig, direction::Direction};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::VecDeque;

/// Turns buffered between two ticks.
const MAX_PENDING: usize = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    GameOver,
}

/// What happened during a tick, for the driver to react to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub moved: bool,
    pub ate_apple: bool,
    /// The running score passed the stored high score this tick
    pub new_high_score: bool,
    pub game_over: bool,
}

/// Complete state of one game, advanced one tick at a time.
///
/// The random source only drives apple placement, so a seeded `R` makes a
/// whole run reproducible.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    config: GameConfig,
    /// Head at index 0
    snake: Vec<Cell>,
    /// Cell the tail left on the last move; a grown segment goes here
    vacated: Option<Cell>,
    direction: Direction,
    pending: VecDeque<Direction>,
    apple: Cell,
    score: u32,
    high_score: u32,
    run_state: RunState,
    rng: R,
}

impl GameState<StdRng> {
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self::with_rng(config, high_score, StdRng::from_entropy())
    }
}

impl<R: Rng> GameState<R> {
    pub fn with_rng(config: GameConfig, high_score: u32, rng: R) -> Self {
        let mut state = Self {
            snake: Vec::new(),
            vacated: None,
            direction: Direction::Right,
            pending: VecDeque::with_capacity(MAX_PENDING),
            apple: Cell::ORIGIN,
            score: 0,
            high_score,
            run_state: RunState::Running,
            rng,
            config,
        };
        state.reset_run();
        state
    }

    /// Advance one step. Does nothing once the game is over.
    pub fn tick(&mut self) -> TickOutcome {
        if self.run_state == RunState::GameOver {
            return TickOutcome::default();
        }

        if let Some(next) = self.pending.pop_front() {
            if !next.is_opposite(self.direction) {
                self.direction = next;
            }
        }

        self.advance();

        let high_before = self.high_score;
        let ate_apple = self.check_apple_consumption();
        let game_over = self.check_collisions();

        TickOutcome {
            moved: true,
            ate_apple,
            new_high_score: self.high_score > high_before,
            game_over,
        }
    }

    /// Queue a turn for an upcoming tick.
    ///
    /// Each request is checked against the last queued turn, or the current
    /// direction when nothing is queued: reversals and repeats are dropped,
    /// as is anything past the queue capacity. Returns whether it was queued.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.run_state == RunState::GameOver {
            return false;
        }
        let reference = self.pending.back().copied().unwrap_or(self.direction);
        if direction == reference
            || direction.is_opposite(reference)
            || self.pending.len() >= MAX_PENDING
        {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    /// Eat the apple if the head is on it: grow by one segment at the tail,
    /// bump the score (and high score) and move the apple.
    pub fn check_apple_consumption(&mut self) -> bool {
        if self.head() != self.apple {
            return false;
        }

        let tail = self.vacated.take().unwrap_or_else(|| self.tail());
        self.snake.push(tail);
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            log::debug!("new high score {}", self.high_score);
        }
        self.place_apple();
        true
    }

    /// End the game if the head hit the body or left the board.
    pub fn check_collisions(&mut self) -> bool {
        let head = self.head();
        let hit_body = self.snake[1..].contains(&head);
        if hit_body || !self.in_bounds(head) {
            self.run_state = RunState::GameOver;
            log::info!("game over with score {} at {:?}", self.score, head);
            return true;
        }
        false
    }

    /// Start a fresh run. The high score carries over.
    pub fn restart(&mut self) {
        self.reset_run();
        log::info!("game restarted");
    }

    /// Move the apple to `cell`, e.g. for scripted scenarios.
    pub fn set_apple(&mut self, cell: Cell) {
        self.apple = cell;
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn tail(&self) -> Cell {
        self.snake[self.snake.len() - 1]
    }

    pub fn body_parts(&self) -> usize {
        self.snake.len()
    }

    pub fn apple(&self) -> Cell {
        self.apple
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.config.cols() && cell.y >= 0 && cell.y < self.config.rows()
    }

    fn reset_run(&mut self) {
        // Every segment starts on the origin and unfolds as the head moves.
        self.snake = vec![Cell::ORIGIN; self.config.initial_body_parts.max(1)];
        self.vacated = None;
        self.direction = Direction::Right;
        self.pending.clear();
        self.score = 0;
        self.run_state = RunState::Running;
        self.place_apple();
    }

    fn advance(&mut self) {
        let head = self.head().step(self.direction);
        self.snake.insert(0, head);
        self.vacated = self.snake.pop();
    }

    /// Pick a random free cell. A full board leaves the apple where it is.
    fn place_apple(&mut self) {
        let (cols, rows) = (self.config.cols(), self.config.rows());
        let free: Vec<Cell> = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Cell::new(x, y)))
            .filter(|c| !self.snake.contains(c))
            .collect();
        if let Some(&cell) = free.choose(&mut self.rng) {
            self.apple = cell;
        }
    }
}
