use super::actor::Actor;
use super::sprite::{self, Sprite};

/// Visual flavor of an enemy. Each kind maps to a distinct sprite and shot
/// sprite; there is no stat difference between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Dragon,
    Turtle,
    Monster,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Dragon, Kind::Turtle, Kind::Monster];

    pub fn sprite(self) -> &'static Sprite {
        match self {
            Kind::Dragon => &sprite::DRAGON,
            Kind::Turtle => &sprite::TURTLE,
            Kind::Monster => &sprite::MONSTER,
        }
    }

    pub fn shot_sprite(self) -> &'static Sprite {
        match self {
            Kind::Dragon => &sprite::DRAGON_SHOT,
            Kind::Turtle => &sprite::TURTLE_SHOT,
            Kind::Monster => &sprite::MONSTER_SHOT,
        }
    }
}

/// An enemy drifts straight down at constant velocity and fires when the
/// loop's random roll tells it to. No other behavior.
#[derive(Debug)]
pub struct Enemy {
    pub actor: Actor,
    pub kind: Kind,
}

impl Enemy {
    pub fn new(x: i32, y: i32, kind: Kind) -> Self {
        Self {
            actor: Actor::new(x, y, 100, kind.sprite(), kind.shot_sprite()),
            kind,
        }
    }

    /// Constant downward drift.
    pub fn drift(&mut self, vel: i32) {
        self.actor.y += vel;
    }

    /// Lower edge of the sprite in arena units. An enemy whose bottom passes
    /// the arena height has escaped.
    pub fn bottom(&self) -> i32 {
        self.actor.y + self.actor.height()
    }
}
