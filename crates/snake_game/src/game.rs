use crate::config::GameConfig;
use crate::food::Food;
use crate::input::InputState;
use crate::snake::{Body, Player};
use crate::timer::StepTimer;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;


#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Scene {
    /// Title screen. Rounds start straight in `Play`; nothing enters this
    /// scene yet.
    Menu,
    Play,
    Pause,
    GameOver,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    /// The head left the field.
    Wall,
    /// The head ran into a body segment.
    Body,
}

/// What a single logical step did.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StepOutcome {
    Moved,
    /// Food was eaten. `grew` is false once the body is at capacity.
    Ate { grew: bool },
    Crashed(Collision),
}

pub struct Game {
    config: GameConfig,
    scene: Scene,
    player: Player,
    body: Body,
    food: Food,
    timer: StepTimer,
    score: u32,
    rng: StdRng,
}

impl Game {
    /// Starts a round in `Play`. Fails when `config` does not validate.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A game with a deterministic food sequence.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scene: Scene::Play,
            player: Player::new(config.start_cell(), config.start_direction),
            body: Body::with_capacity(config.body_capacity()),
            food: Food::default(),
            timer: StepTimer::new(&config),
            score: 0,
            rng,
            config,
        })
    }

    /// Advances the game by one frame of `dt` seconds.
    ///
    /// Returns the outcome when a logical step was taken this frame.
    pub fn update(&mut self, dt: f32, input: &InputState) -> Option<StepOutcome> {
        match self.scene {
            Scene::Menu => {
                if input.confirm {
                    log::info!("Leaving the title screen");
                    self.scene = Scene::Play;
                }
                None
            }
            Scene::Pause => {
                if input.pause {
                    log::info!("Resumed");
                    self.scene = Scene::Play;
                }
                None
            }
            Scene::GameOver => {
                if input.confirm {
                    self.restart();
                }
                None
            }
            Scene::Play => {
                if input.pause {
                    log::info!("Paused");
                    self.scene = Scene::Pause;
                    return None;
                }
                if !self.food.alive && !self.spawn_food() {
                    log::info!("No free cell left for food, score {}", self.score);
                    self.scene = Scene::GameOver;
                    return None;
                }
                self.player.direction = input.steer(self.player.heading, self.player.direction);
                if self.timer.advance(dt) {
                    Some(self.step())
                } else {
                    None
                }
            }
        }
    }

    /// Takes one logical step regardless of the timer.
    pub fn step(&mut self) -> StepOutcome {
        self.player.advance();
        self.body.follow(self.player.last_position);

        let head = self.player.position;
        log::trace!("Head moved {:?} to {:?}", self.player.heading, head);

        if !head.in_bounds(self.config.grid_size) {
            return self.crash(Collision::Wall);
        }
        if self.body.occupies(head) {
            return self.crash(Collision::Body);
        }

        if self.food.alive && head == self.food.position {
            self.food.alive = false;
            self.score += 1;
            self.timer.speed_up();
            let grew = self.body.grow(self.player.last_position);
            if !grew {
                log::warn!(
                    "Body is at capacity ({} segments), not growing",
                    self.body.capacity()
                );
            }
            log::debug!(
                "Ate food at {:?}: score {}, length {}, move rate {:.3}s",
                head,
                self.score,
                self.body.len(),
                self.timer.move_rate()
            );
            return StepOutcome::Ate { grew };
        }

        StepOutcome::Moved
    }

    /// Puts every entity back to its starting state and resumes play.
    pub fn restart(&mut self) {
        log::info!("Restarting, previous score {}", self.score);
        self.player
            .reset(self.config.start_cell(), self.config.start_direction);
        self.body.clear();
        self.food.alive = false;
        self.timer.reset();
        self.score = 0;
        self.scene = Scene::Play;
    }

    fn crash(&mut self, collision: Collision) -> StepOutcome {
        log::info!(
            "Game over: {:?} collision at {:?}, score {}",
            collision,
            self.player.position,
            self.score
        );
        self.scene = Scene::GameOver;
        StepOutcome::Crashed(collision)
    }

    fn spawn_food(&mut self) -> bool {
        let Self {
            player,
            body,
            food,
            rng,
            config,
            ..
        } = self;
        let head = player.position;
        let spawned = food.respawn(rng, config.grid_size, |cell| {
            cell == head || body.occupies(cell)
        });
        if spawned {
            log::debug!("Food spawned at {:?}", food.position);
        }
        spawned
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn move_rate(&self) -> f32 {
        self.timer.move_rate()
    }
}
