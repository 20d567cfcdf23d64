//! The tick controller: one play session, driven once per frame.
//!
//! A [`GameSession`] owns the snake, the food, the level progression and the
//! phase of the game. The frame loop calls [`GameSession::update`] with the
//! current monotonic time and forwards key presses through
//! [`GameSession::handle_input`]. The session never sleeps or reads a clock.
pub mod config;

pub use config::{ConfigError, LevelSettings, SessionConfig};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, trace};

use crate::grid::{free_cells, CellIndex, FrontPosition, Grid, Position};
use crate::snake::{Food, FoodSpawner, SnakeBody};
use crate::types::{Input, Move};

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// nothing started yet
    StartScreen,
    /// a level is about to start, waiting for [`Input::Confirm`]
    LevelIntro,
    /// the snake is moving
    Playing,
    /// time is frozen
    Paused,
    /// play ended
    GameOver(Outcome),
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// the front crossed a field edge
    HitWall,
    /// the front ran into the snake's own body
    HitSelf,
    /// the last level's quota was eaten
    Completed,
}

/// One play session. Generic over the generator used for food placement.
#[derive(Debug, Clone)]
pub struct GameSession<R: Rng = SmallRng> {
    config: SessionConfig,
    grid: Grid,
    all_cells: Vec<CellIndex>,
    phase: Phase,
    level: usize,
    settings: LevelSettings,
    snake: SnakeBody,
    food: Food,
    food_pending: bool,
    spawner: FoodSpawner<R>,
    direction: Move,
    heading: Move,
    eaten: u32,
    accumulator: f32,
    last_frame: Option<f64>,
}

impl GameSession<SmallRng> {
    /// a session whose food placement is seeded with `seed`
    pub fn seeded(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        GameSession::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// validates `config` and sets up a session on the start screen at level 0
    pub fn new(config: SessionConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.grid_size);
        let settings = config.level(0);
        Ok(GameSession {
            config,
            grid,
            all_cells: grid.all_cells(),
            phase: Phase::StartScreen,
            level: 0,
            settings,
            snake: SnakeBody::new(config.initial_length, settings.intersection_threshold),
            food: Food::default(),
            food_pending: true,
            spawner: FoodSpawner::new(rng),
            direction: Move::Right,
            heading: Move::Right,
            eaten: 0,
            accumulator: 0.0,
            last_frame: None,
        })
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[allow(missing_docs)]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[allow(missing_docs)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// zero based index of the current level
    pub fn level(&self) -> usize {
        self.level
    }

    /// numbers in effect for the current level
    pub fn level_settings(&self) -> LevelSettings {
        self.settings
    }

    #[allow(missing_docs)]
    pub fn snake(&self) -> &SnakeBody {
        &self.snake
    }

    /// the food cell, `None` while it waits to be respawned
    pub fn food_cell(&self) -> Option<Position> {
        if self.food_pending {
            None
        } else {
            Some(self.food.cell())
        }
    }

    /// food eaten on the current level
    pub fn eaten(&self) -> u32 {
        self.eaten
    }

    /// direction the next committed step will take
    pub fn direction(&self) -> Move {
        self.direction
    }

    /// direction of the last committed step
    pub fn heading(&self) -> Move {
        self.heading
    }

    /// Jumps to a previously saved level. The level starts fresh on the next
    /// [`Input::Confirm`] that leaves the start screen or intro, or the next
    /// [`Input::Restart`] after a crash. Rejected while a level is playing or
    /// paused.
    pub fn restore_level(&mut self, level: usize) -> Result<(), ConfigError> {
        if matches!(self.phase, Phase::Playing | Phase::Paused) {
            return Err(ConfigError::LevelInProgress);
        }
        if level >= self.config.level_count {
            return Err(ConfigError::LevelOutOfRange {
                level,
                level_count: self.config.level_count,
            });
        }
        self.set_level(level);
        Ok(())
    }

    /// Applies one input event. Inputs that mean nothing in the current phase are dropped.
    pub fn handle_input(&mut self, input: Input) {
        trace!(?input, phase = ?self.phase, "input");
        match (input, self.phase) {
            (Input::Turn(mv), Phase::Playing) => self.turn(mv),
            (Input::PauseToggle, Phase::Playing) => self.phase = Phase::Paused,
            (Input::PauseToggle, Phase::Paused) => self.phase = Phase::Playing,
            (Input::Confirm, Phase::StartScreen) => self.phase = Phase::LevelIntro,
            (Input::Confirm, Phase::LevelIntro) => self.begin_level(),
            (Input::Confirm, Phase::GameOver(Outcome::Completed))
            | (Input::Restart, Phase::GameOver(Outcome::Completed)) => {
                self.set_level(0);
                self.phase = Phase::StartScreen;
            }
            (Input::Restart, Phase::Playing)
            | (Input::Restart, Phase::Paused)
            | (Input::Restart, Phase::GameOver(_)) => {
                debug!(level = self.level, "restarting level");
                self.phase = Phase::LevelIntro;
            }
            _ => {}
        }
    }

    /// Advances the simulation to `now`, monotonic seconds from the frame
    /// loop, and returns the phase afterwards.
    ///
    /// Every playing frame moves the front along the pending direction. Once a
    /// full tick period has built up the head commits one cell, unless the
    /// front already hit a wall or the body on this frame.
    #[instrument(level = "trace", skip(self))]
    pub fn update(&mut self, now: f64) -> Phase {
        let dt = match self.last_frame.replace(now) {
            Some(previous) => (now - previous).max(0.0) as f32,
            None => 0.0,
        };
        if self.phase != Phase::Playing {
            return self.phase;
        }

        let tick_period = self.settings.tick_period;
        self.accumulator += dt;
        let elapsed = self.accumulator.min(tick_period);
        let ready = self.accumulator >= tick_period;
        if ready {
            self.accumulator = 0.0;
        }

        let head = self.snake.head();
        let front = FrontPosition::from(head).advanced(self.direction, elapsed);
        self.snake.set_front(front);

        if let Some(outcome) = self.collision(front) {
            info!(?outcome, level = self.level, length = self.snake.len(), "game over");
            self.phase = Phase::GameOver(outcome);
            return self.phase;
        }

        if ready {
            self.commit(head);
        }
        self.phase
    }

    fn turn(&mut self, mv: Move) {
        if mv.is_not_opposite(&self.heading) {
            self.direction = mv;
        } else {
            trace!(%mv, heading = %self.heading, "ignoring reversal");
        }
    }

    fn collision(&self, front: FrontPosition) -> Option<Outcome> {
        let tick_period = self.settings.tick_period;
        let upper = (self.grid.size() - 1) as f32 + tick_period;
        let lower = -tick_period;
        if front.x >= upper || front.x <= lower || front.y >= upper || front.y <= lower {
            Some(Outcome::HitWall)
        } else if self.snake.check_self_intersection() {
            Some(Outcome::HitSelf)
        } else {
            None
        }
    }

    #[instrument(level = "trace", skip(self))]
    fn commit(&mut self, head: Position) {
        if !self.food_pending && self.snake.eat(&self.food) {
            self.eaten += 1;
            self.food_pending = true;
            debug!(eaten = self.eaten, quota = self.settings.food_quota, "food eaten");
            if self.eaten >= self.settings.food_quota {
                self.complete_level();
                return;
            }
        }

        self.snake.move_to(head.neighbour(self.direction));
        self.heading = self.direction;

        if self.food_pending {
            self.respawn_food();
        }
    }

    fn respawn_food(&mut self) {
        let free = free_cells(&self.grid, &self.all_cells, self.snake.cells());
        if self.spawner.spawn(&mut self.food, &self.grid, &free) {
            self.food_pending = false;
        }
    }

    fn complete_level(&mut self) {
        let next = self.level + 1;
        if next >= self.config.level_count {
            info!(level = self.level, "final level completed");
            self.phase = Phase::GameOver(Outcome::Completed);
        } else {
            info!(level = next, "level up");
            self.set_level(next);
            self.phase = Phase::LevelIntro;
        }
    }

    fn set_level(&mut self, level: usize) {
        self.level = level;
        self.settings = self.config.level(level);
    }

    fn begin_level(&mut self) {
        debug!(
            level = self.level,
            tick_period = self.settings.tick_period,
            quota = self.settings.food_quota,
            "starting level"
        );
        self.snake = SnakeBody::new(
            self.config.initial_length,
            self.settings.intersection_threshold,
        );
        self.direction = Move::Right;
        self.heading = Move::Right;
        self.eaten = 0;
        self.accumulator = 0.0;
        self.food_pending = true;
        self.respawn_food();
        self.phase = Phase::Playing;
    }

    #[cfg(test)]
    pub(crate) fn place_food_for_test(&mut self, cell: Position) {
        self.food = Food::new(cell);
        self.food_pending = false;
    }
}
