use rand::Rng;

use super::enemy::{Enemy, Kind};
use crate::entities::{ARENA_HEIGHT, ARENA_WIDTH};

/// Horizontal spawn band, bounded away from the arena edges.
const SPAWN_X_MIN: i32 = 50;
const SPAWN_X_MAX: i32 = ARENA_WIDTH - 100;
/// Vertical spawn band above the visible arena, so a wave trickles in
/// instead of arriving as a block.
const SPAWN_Y_MIN: i32 = -2 * ARENA_HEIGHT;
const SPAWN_Y_MAX: i32 = -100;

/// Wave and level bookkeeping. Owns the live enemy collection; spawning only
/// ever happens when that collection is empty, and each wave is 5 enemies
/// larger than the last.
#[derive(Debug)]
pub struct Wave {
    pub level: u32,
    pub wave_length: u32,
    pub enemies: Vec<Enemy>,
}

impl Default for Wave {
    fn default() -> Self {
        Self::new()
    }
}

impl Wave {
    pub fn new() -> Self {
        Self {
            level: 0,
            wave_length: 1,
            enemies: Vec::new(),
        }
    }

    /// Spawns the next wave once the current one is exhausted; no-op while
    /// any enemy is alive. Waves never partially replenish.
    pub fn tick(&mut self) {
        if !self.enemies.is_empty() {
            return;
        }

        if self.level > 0 {
            self.wave_length += 5;
        }
        self.level += 1;

        let mut rng = rand::rng();
        for _ in 0..self.wave_length {
            let x = rng.random_range(SPAWN_X_MIN..SPAWN_X_MAX);
            let y = rng.random_range(SPAWN_Y_MIN..SPAWN_Y_MAX);
            let kind = Kind::ALL[rng.random_range(0..Kind::ALL.len())];
            self.enemies.push(Enemy::new(x, y, kind));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_wave_is_a_single_enemy() {
        let mut wave = Wave::new();
        wave.tick();
        assert_eq!(wave.level, 1);
        assert_eq!(wave.wave_length, 1);
        assert_eq!(wave.enemies.len(), 1);
    }

    #[test]
    fn test_wave_grows_by_five_per_clear() {
        let mut wave = Wave::new();
        wave.tick();

        wave.enemies.clear();
        wave.tick();
        assert_eq!(wave.level, 2);
        assert_eq!(wave.wave_length, 6);
        assert_eq!(wave.enemies.len(), 6);

        wave.enemies.clear();
        wave.tick();
        assert_eq!(wave.level, 3);
        assert_eq!(wave.wave_length, 11);
        assert_eq!(wave.enemies.len(), 11);
    }

    #[test]
    fn test_no_respawn_while_enemies_remain() {
        let mut wave = Wave::new();
        wave.tick();
        let before = wave.enemies.len();

        for _ in 0..10 {
            wave.tick();
        }
        assert_eq!(wave.enemies.len(), before);
        assert_eq!(wave.level, 1);
    }

    #[test]
    fn test_spawn_positions_stay_in_band() {
        let mut wave = Wave::new();
        // Several clears to sample a good number of spawns.
        for _ in 0..4 {
            wave.enemies.clear();
            wave.tick();
        }
        for enemy in &wave.enemies {
            assert!((SPAWN_X_MIN..SPAWN_X_MAX).contains(&enemy.actor.x));
            assert!((SPAWN_Y_MIN..SPAWN_Y_MAX).contains(&enemy.actor.y));
        }
    }
}
