pub mod app;
pub mod entities;
pub mod input;
pub mod renderer;

// Library exports for testing
pub use app::App;
pub use entities::{
    ARENA_HEIGHT, ARENA_WIDTH, Actor, COOLDOWN, Enemy, GameState, Kind, Player, Projectile,
    Sprite, Wave,
};
