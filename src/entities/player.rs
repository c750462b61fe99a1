use super::actor::Actor;
use super::enemy::Enemy;
use super::sprite::{PLAYER, PLAYER_SHOT};

/// The player ship. Movement is applied by the game loop (clamping lives
/// there, not here); this type owns the player-specific projectile pass.
#[derive(Debug)]
pub struct Player {
    pub actor: Actor,
    /// Recorded at construction, never consulted afterwards.
    pub max_health: i32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        let health = 100;
        Self {
            actor: Actor::new(x, y, health, &PLAYER, &PLAYER_SHOT),
            max_health: health,
        }
    }

    /// Ticks the cooldown once, then moves every owned shot by `vel`.
    /// Off-screen shots are dropped; a shot hitting an enemy removes that
    /// enemy and the shot together. Player shots kill in one hit, unlike
    /// enemy shots which chip 10 health per hit.
    pub fn advance_shots(&mut self, vel: i32, height: i32, enemies: &mut Vec<Enemy>) {
        self.actor.tick_cooldown();

        let mut i = 0;
        while i < self.actor.shots.len() {
            self.actor.shots[i].advance(vel);
            if self.actor.shots[i].is_off_screen(height) {
                self.actor.shots.remove(i);
                continue;
            }

            let hit = enemies.iter().position(|enemy| {
                self.actor.shots[i]
                    .collides_with(enemy.actor.sprite, enemy.actor.x, enemy.actor.y)
            });
            match hit {
                Some(e) => {
                    enemies.remove(e);
                    self.actor.shots.remove(i);
                }
                None => i += 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::enemy::Kind;
    use crate::entities::projectile::Projectile;

    #[test]
    fn test_new_player_records_max_health() {
        let player = Player::new(300, 650);
        assert_eq!(player.actor.health, 100);
        assert_eq!(player.max_health, 100);
        assert!(player.actor.can_fire());
    }

    #[test]
    fn test_hit_removes_one_enemy_and_the_shot() {
        let mut player = Player::new(300, 650);
        let mut enemies = vec![
            Enemy::new(100, 100, Kind::Dragon),
            Enemy::new(300, 300, Kind::Turtle),
            Enemy::new(500, 200, Kind::Monster),
        ];

        // Shot one tick above the middle enemy's sprite.
        player
            .actor
            .shots
            .push(Projectile::new(316, 296, &PLAYER_SHOT));
        player.actor.shots.push(Projectile::new(20, 650, &PLAYER_SHOT));

        player.advance_shots(-4, 750, &mut enemies);

        assert_eq!(enemies.len(), 2);
        assert!(enemies.iter().all(|e| e.kind != Kind::Turtle));
        // Only the missing shot was removed, the other is still in flight.
        assert_eq!(player.actor.shots.len(), 1);
        assert_eq!(player.actor.shots[0].y, 646);
    }

    #[test]
    fn test_miss_leaves_everything_in_place() {
        let mut player = Player::new(300, 650);
        let mut enemies = vec![Enemy::new(100, 100, Kind::Dragon)];

        player
            .actor
            .shots
            .push(Projectile::new(600, 600, &PLAYER_SHOT));
        player.advance_shots(-4, 750, &mut enemies);

        assert_eq!(enemies.len(), 1);
        assert_eq!(player.actor.shots.len(), 1);
    }

    #[test]
    fn test_off_screen_shot_dropped_without_killing() {
        let mut player = Player::new(300, 650);
        let mut enemies = vec![Enemy::new(100, 100, Kind::Dragon)];

        player.actor.shots.push(Projectile::new(100, 2, &PLAYER_SHOT));
        player.advance_shots(-4, 750, &mut enemies);

        assert!(player.actor.shots.is_empty());
        assert_eq!(enemies.len(), 1);
    }
}
