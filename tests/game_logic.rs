/// Integration tests for game logic
///
/// These tests drive interactions between entities and the game loop:
/// projectile exchange, wave progression, lives bookkeeping and the loss
/// timeout.
use starfall::{ARENA_HEIGHT, App, COOLDOWN, Enemy, GameState, Kind, Player};

#[test]
fn test_enemy_shot_chips_player_health_by_ten() {
    let mut player = Player::new(300, 650);
    let mut enemy = Enemy::new(300, 0, Kind::Monster);

    enemy.actor.shoot();
    assert_eq!(enemy.actor.shots.len(), 1);

    // Let the shot fall through the whole arena; it crosses the player's
    // sprite on the way down.
    for _ in 0..200 {
        enemy.actor.advance_shots(4, ARENA_HEIGHT, &mut player.actor);
    }

    assert_eq!(player.actor.health, 90);
    assert!(player.actor.is_alive());
    assert!(enemy.actor.shots.is_empty());
}

#[test]
fn test_player_shot_kills_enemy_in_one_hit() {
    let mut player = Player::new(300, 650);
    let mut enemies = vec![
        Enemy::new(284, 100, Kind::Dragon),
        Enemy::new(600, 400, Kind::Turtle),
    ];

    player.actor.shoot();

    // Shot travels up from the player into the first enemy's column.
    for _ in 0..200 {
        player.advance_shots(-4, ARENA_HEIGHT, &mut enemies);
    }

    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].kind, Kind::Turtle);
    assert!(player.actor.shots.is_empty());
}

#[test]
fn test_wave_progression_through_game_ticks() {
    let mut app = App::new();

    app.update_game();
    assert_eq!(app.wave.level, 1);
    assert_eq!(app.wave.enemies.len(), 1);

    app.wave.enemies.clear();
    app.update_game();
    assert_eq!(app.wave.level, 2);
    assert_eq!(app.wave.enemies.len(), 6);

    app.wave.enemies.clear();
    app.update_game();
    assert_eq!(app.wave.level, 3);
    assert_eq!(app.wave.enemies.len(), 11);
}

#[test]
fn test_escaped_enemy_costs_a_life() {
    let mut app = App::new();
    app.wave
        .enemies
        .push(Enemy::new(100, ARENA_HEIGHT, Kind::Dragon));

    app.update_game();

    assert_eq!(app.lives, 4);
    assert!(app.wave.enemies.is_empty());
}

#[test]
fn test_five_escapes_lose_the_run_and_time_out() {
    let mut app = App::new();
    assert_eq!(app.lives, 5);

    for escape in 1..=5i32 {
        app.wave
            .enemies
            .push(Enemy::new(100, ARENA_HEIGHT, Kind::Turtle));
        app.update_game();
        assert_eq!(app.lives, 5 - escape);

        app.advance_loss_state();
        if escape < 5 {
            assert_eq!(app.state, GameState::Playing, "lost before the 5th escape");
        }
    }

    // Lost exactly at the 5th escape.
    assert_eq!(app.state, GameState::Lost);
    assert!(app.running);

    // The loss screen holds for 300 ticks before the loop stops.
    for _ in 0..299 {
        app.advance_loss_state();
        assert!(app.running);
    }
    app.advance_loss_state();
    assert!(!app.running);
}

#[test]
fn test_health_depletion_also_loses_the_run() {
    let mut app = App::new();
    app.player.actor.health = 0;

    app.advance_loss_state();

    assert_eq!(app.state, GameState::Lost);
}

#[test]
fn test_fire_rate_is_cooldown_gated_across_ticks() {
    let mut player = Player::new(300, 650);
    let mut enemies = Vec::new();

    player.actor.shoot();
    assert_eq!(player.actor.shots.len(), 1);

    // advance_shots ticks the cooldown once per game tick; a second shot
    // only comes out after the full cycle.
    for _ in 0..COOLDOWN - 1 {
        player.advance_shots(-4, ARENA_HEIGHT, &mut enemies);
        player.actor.shoot();
    }
    assert_eq!(player.actor.shots.len(), 1);

    player.advance_shots(-4, ARENA_HEIGHT, &mut enemies);
    player.actor.shoot();
    assert_eq!(player.actor.shots.len(), 2);
}
