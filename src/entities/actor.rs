use super::projectile::Projectile;
use super::sprite::Sprite;

/// Ticks from firing until the next shot is allowed (~0.5 s at 60 ticks/s).
pub const COOLDOWN: u32 = 30;

/// Shared combat state embedded by [`Player`](super::Player) and
/// [`Enemy`](super::Enemy): position, health, the fire cooldown and the list
/// of shots this actor owns.
#[derive(Debug)]
pub struct Actor {
    pub x: i32,
    pub y: i32,
    pub health: i32,
    pub cooldown: u32,
    pub shots: Vec<Projectile>,
    pub sprite: &'static Sprite,
    pub shot_sprite: &'static Sprite,
}

impl Actor {
    pub fn new(
        x: i32,
        y: i32,
        health: i32,
        sprite: &'static Sprite,
        shot_sprite: &'static Sprite,
    ) -> Self {
        Self {
            x,
            y,
            health,
            cooldown: 0,
            shots: Vec::new(),
            sprite,
            shot_sprite,
        }
    }

    pub fn width(&self) -> i32 {
        self.sprite.width()
    }

    pub fn height(&self) -> i32 {
        self.sprite.height()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// A cooldown of 0 means ready to fire.
    pub fn can_fire(&self) -> bool {
        self.cooldown == 0
    }

    /// Advances the cooldown counter: wrap to 0 once it reaches [`COOLDOWN`],
    /// otherwise count up only when already nonzero. The counter never leaves
    /// 0 here; only [`Actor::shoot`] starts it. A full cycle is exactly
    /// COOLDOWN ticks after the shot.
    pub fn tick_cooldown(&mut self) {
        if self.cooldown >= COOLDOWN {
            self.cooldown = 0;
        } else if self.cooldown > 0 {
            self.cooldown += 1;
        }
    }

    /// Fires one shot at the actor's current position if the cooldown is at
    /// rest, starting the cooldown cycle. No-op otherwise.
    pub fn shoot(&mut self) {
        if self.can_fire() {
            self.shots
                .push(Projectile::new(self.x, self.y, self.shot_sprite));
            self.cooldown = 1;
        }
    }

    /// Ticks the cooldown once, then moves every owned shot by `vel`.
    /// Shots leaving the `[0, height]` band are dropped; a shot hitting
    /// `target` costs it 10 health and is dropped. Removal is index-based so
    /// no element is skipped or visited twice.
    pub fn advance_shots(&mut self, vel: i32, height: i32, target: &mut Actor) {
        self.tick_cooldown();

        let mut i = 0;
        while i < self.shots.len() {
            self.shots[i].advance(vel);
            if self.shots[i].is_off_screen(height) {
                self.shots.remove(i);
            } else if self.shots[i].collides_with(target.sprite, target.x, target.y) {
                target.health -= 10;
                self.shots.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
