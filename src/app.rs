use color_eyre::Result;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::time::Duration;

use crate::entities::{ARENA_HEIGHT, ARENA_WIDTH, GameState, Player, Wave};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};

/// Arena units moved per tick.
const PLAYER_VEL: i32 = 5;
const ENEMY_VEL: i32 = 1;
const SHOT_VEL: i32 = 4;

/// Each enemy rolls `0..FIRE_ROLL` per tick and fires on exactly 1, so the
/// trigger chance is 1/120 per tick (~every 2 s at 60 ticks/s, further gated
/// by the fire cooldown).
const FIRE_ROLL: i32 = 120;

const START_LIVES: i32 = 5;

/// The player cannot move its top edge above this line; it keeps the ship
/// out of the HUD band.
const TOP_MARGIN: i32 = 100;

/// Ticks the loss screen is held before the loop ends (5 s at 60 ticks/s).
pub const LOST_HOLD: u32 = 300;

/// ~60 ticks per second.
const TICK: Duration = Duration::from_millis(16);

/// The main application: run state, the live entities and the loop that
/// ties input, updates and rendering together.
pub struct App {
    pub running: bool,
    pub state: GameState,
    /// Decremented each time an enemy escapes past the bottom bound.
    pub lives: i32,
    /// Ticks spent on the loss screen so far.
    pub lost_ticks: u32,
    pub player: Player,
    pub wave: Wave,
    ticks: u64,
    input: InputManager,
    renderer: GameRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            state: GameState::Playing,
            lives: START_LIVES,
            lost_ticks: 0,
            player: Player::new(300, 650),
            wave: Wave::new(),
            ticks: 0,
            input: InputManager::new(),
            renderer: GameRenderer::new(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|frame| {
                let view = RenderView {
                    state: self.state,
                    player: &self.player,
                    enemies: &self.wave.enemies,
                    lives: self.lives,
                    level: self.wave.level,
                    ticks: self.ticks,
                    area: frame.area(),
                };
                self.renderer.render(frame, &view);
            })?;

            self.advance_loss_state();

            self.input.poll_events(self.state)?;
            let actions = self.input.actions(self.state);
            self.process_actions(&actions);

            if self.state == GameState::Playing {
                self.update_game();
            }

            std::thread::sleep(TICK);
        }
        Ok(())
    }

    /// Terminal check: flips to [`GameState::Lost`] once lives or health run
    /// out, counts ticks on the loss screen, and stops the loop after
    /// [`LOST_HOLD`] of them.
    pub fn advance_loss_state(&mut self) {
        if self.lives <= 0 || self.player.actor.health <= 0 {
            self.state = GameState::Lost;
            self.lost_ticks += 1;
        }
        if self.state == GameState::Lost && self.lost_ticks > LOST_HOLD {
            self.running = false;
        }
    }

    fn process_actions(&mut self, actions: &[InputAction]) {
        for action in actions {
            match action {
                InputAction::Quit => self.running = false,
                InputAction::Pause => self.state = GameState::Paused,
                InputAction::Resume => self.state = GameState::Playing,
                InputAction::Restart => *self = Self::new(),
                InputAction::MoveLeft => {
                    if self.player.actor.x > 0 {
                        self.player.actor.x -= PLAYER_VEL;
                    }
                }
                InputAction::MoveRight => {
                    if self.player.actor.x + PLAYER_VEL + self.player.actor.width() < ARENA_WIDTH {
                        self.player.actor.x += PLAYER_VEL;
                    }
                }
                InputAction::MoveUp => {
                    if self.player.actor.y + PLAYER_VEL + self.player.actor.height() > TOP_MARGIN {
                        self.player.actor.y -= PLAYER_VEL;
                    }
                }
                InputAction::MoveDown => {
                    if self.player.actor.y + PLAYER_VEL + self.player.actor.height() < ARENA_HEIGHT
                    {
                        self.player.actor.y += PLAYER_VEL;
                    }
                }
                InputAction::Fire => self.player.actor.shoot(),
            }
        }
    }

    /// One gameplay tick: wave spawning, enemy movement/fire/escape, then
    /// both projectile passes.
    pub fn update_game(&mut self) {
        self.ticks += 1;

        self.wave.tick();

        // Index-based walk so enemies can be removed without skipping the
        // next one.
        let mut i = 0;
        while i < self.wave.enemies.len() {
            let escaped = {
                let enemy = &mut self.wave.enemies[i];
                enemy.drift(ENEMY_VEL);
                enemy
                    .actor
                    .advance_shots(SHOT_VEL, ARENA_HEIGHT, &mut self.player.actor);
                if rand::rng().random_range(0..FIRE_ROLL) == 1 {
                    enemy.actor.shoot();
                }
                enemy.bottom() > ARENA_HEIGHT
            };

            if escaped {
                // Escaped past the bottom, not killed.
                self.lives -= 1;
                self.wave.enemies.remove(i);
            } else {
                i += 1;
            }
        }

        self.player
            .advance_shots(-SHOT_VEL, ARENA_HEIGHT, &mut self.wave.enemies);
    }
}
