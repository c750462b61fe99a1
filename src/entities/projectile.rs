use super::sprite::Sprite;

/// A shot in flight. Moves along the vertical axis only; the sign of the
/// velocity passed to [`Projectile::advance`] decides the direction.
#[derive(Debug)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub sprite: &'static Sprite,
}

impl Projectile {
    pub fn new(x: i32, y: i32, sprite: &'static Sprite) -> Self {
        Self { x, y, sprite }
    }

    /// Adds `vel` to the vertical coordinate. No bounds check here.
    pub fn advance(&mut self, vel: i32) {
        self.y += vel;
    }

    /// True when the vertical coordinate left the inclusive range
    /// `[0, height]`. A projectile exactly on the boundary is on-screen.
    pub fn is_off_screen(&self, height: i32) -> bool {
        !(0..=height).contains(&self.y)
    }

    /// Mask overlap against another entity's sprite at arena position
    /// (`x`, `y`).
    pub fn collides_with(&self, sprite: &Sprite, x: i32, y: i32) -> bool {
        self.sprite.overlaps(sprite, x - self.x, y - self.y)
    }
}
