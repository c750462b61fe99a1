use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::entities::GameState;

/// Semantic game actions produced from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    Pause,
    Resume,
    Restart,
    Quit,
}

/// Keys that act while held. Requires the terminal's keyboard-enhancement
/// protocol for release events; `main` enables it when supported.
#[derive(Debug, Default)]
struct HeldKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    fire: bool,
}

/// Polls crossterm events and turns them into [`InputAction`]s: one-shot
/// actions (quit, pause, restart) from key presses, continuous actions from
/// held movement/fire keys.
#[derive(Debug, Default)]
pub struct InputManager {
    held: HeldKeys,
    oneshot: Vec<InputAction>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all pending events without blocking. Call once per tick,
    /// before [`InputManager::actions`].
    pub fn poll_events(&mut self, game_state: GameState) -> color_eyre::Result<()> {
        self.oneshot.clear();

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.kind {
                    KeyEventKind::Press => self.on_press(key_event, game_state),
                    KeyEventKind::Release => self.on_release(key_event.code),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn on_press(&mut self, key_event: KeyEvent, game_state: GameState) {
        // Quit works in every state.
        let ctrl_c = key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl_c || matches!(key_event.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc) {
            self.oneshot.push(InputAction::Quit);
            return;
        }

        match game_state {
            GameState::Playing => {
                if matches!(key_event.code, KeyCode::Char('p' | 'P')) {
                    self.oneshot.push(InputAction::Pause);
                    return;
                }
            }
            GameState::Paused => {
                if matches!(key_event.code, KeyCode::Char('p' | 'P')) {
                    self.oneshot.push(InputAction::Resume);
                }
                return;
            }
            GameState::Lost => {
                if matches!(key_event.code, KeyCode::Char('r' | 'R')) {
                    self.oneshot.push(InputAction::Restart);
                }
                return;
            }
        }

        // Held keys only matter while playing. Opposite directions clear
        // each other so the last press wins.
        match key_event.code {
            KeyCode::Char('w' | 'W') | KeyCode::Up => {
                self.held.up = true;
                self.held.down = false;
            }
            KeyCode::Char('s' | 'S') | KeyCode::Down => {
                self.held.down = true;
                self.held.up = false;
            }
            KeyCode::Char('a' | 'A') | KeyCode::Left => {
                self.held.left = true;
                self.held.right = false;
            }
            KeyCode::Char('d' | 'D') | KeyCode::Right => {
                self.held.right = true;
                self.held.left = false;
            }
            KeyCode::Char(' ') => self.held.fire = true,
            _ => {}
        }
    }

    fn on_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w' | 'W') | KeyCode::Up => self.held.up = false,
            KeyCode::Char('s' | 'S') | KeyCode::Down => self.held.down = false,
            KeyCode::Char('a' | 'A') | KeyCode::Left => self.held.left = false,
            KeyCode::Char('d' | 'D') | KeyCode::Right => self.held.right = false,
            KeyCode::Char(' ') => self.held.fire = false,
            _ => {}
        }
    }

    /// All actions for this tick: one-shots first, then one action per held
    /// key (the latter only while playing).
    pub fn actions(&self, game_state: GameState) -> Vec<InputAction> {
        let mut actions = self.oneshot.clone();

        if game_state == GameState::Playing {
            if self.held.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.held.right {
                actions.push(InputAction::MoveRight);
            }
            if self.held.up {
                actions.push(InputAction::MoveUp);
            }
            if self.held.down {
                actions.push(InputAction::MoveDown);
            }
            if self.held.fire {
                actions.push(InputAction::Fire);
            }
        }

        actions
    }
}
