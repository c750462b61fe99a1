mod actor;
mod enemy;
mod game_state;
mod player;
mod projectile;
pub mod sprite;
mod wave;

// Re-export all public types
pub use actor::{Actor, COOLDOWN};
pub use enemy::{Enemy, Kind};
pub use game_state::GameState;
pub use player::Player;
pub use projectile::Projectile;
pub use sprite::Sprite;
pub use wave::Wave;

/// Fixed virtual arena, in arena units. The renderer scales this to
/// terminal cells; gameplay never depends on terminal size.
pub const ARENA_WIDTH: i32 = 750;
pub const ARENA_HEIGHT: i32 = 750;
