use crate::entities::{
    ARENA_HEIGHT, ARENA_WIDTH, Enemy, GameState, Kind, Player, sprite::CELL,
};
use rand::Rng;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Terminal cells needed for the full arena (one cell per sprite cell).
const GAME_COLS: u16 = (ARENA_WIDTH / CELL) as u16 + 1;
const GAME_ROWS: u16 = (ARENA_HEIGHT / CELL) as u16 + 1;

/// View struct that holds all game state needed for rendering.
pub struct RenderView<'a> {
    pub state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub lives: i32,
    pub level: u32,
    pub ticks: u64,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game.
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_game(frame, view);
        match view.state {
            GameState::Playing => {}
            GameState::Paused => self.render_paused(frame, view),
            GameState::Lost => self.render_lost(frame, view),
        }
    }

    /// Centered game area with side borders, sized for the virtual arena and
    /// clipped to whatever the terminal gives us.
    fn game_area(&self, frame: &mut Frame, area: Rect) -> Rect {
        let width = GAME_COLS.min(area.width.saturating_sub(2)) + 2;
        let height = GAME_ROWS.min(area.height.saturating_sub(2));
        let bordered = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + 1,
            width,
            height,
        };

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(bordered);
        frame.render_widget(block, bordered);
        inner
    }

    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let game_area = self.game_area(frame, area);

        // Blinking starfield backdrop.
        if view.ticks % 10 < 5 {
            let star_text = (0..game_area.height)
                .map(|_| {
                    let mut rng = rand::rng();
                    if rng.random_bool(0.05) { "." } else { " " }
                })
                .collect::<Vec<_>>()
                .join("\n");
            frame.render_widget(
                Paragraph::new(star_text).style(Style::default().fg(Color::DarkGray)),
                game_area,
            );
        }

        let buffer = frame.buffer_mut();

        // Enemies and their shots first, then the player on top.
        for enemy in view.enemies {
            let color = kind_color(enemy.kind);
            draw_sprite(
                buffer,
                game_area,
                enemy.actor.x,
                enemy.actor.y,
                enemy.actor.sprite.rows(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            );
            for shot in &enemy.actor.shots {
                draw_sprite(
                    buffer,
                    game_area,
                    shot.x,
                    shot.y,
                    shot.sprite.rows(),
                    Style::default().fg(color),
                );
            }
        }

        if view.player.actor.is_alive() {
            draw_sprite(
                buffer,
                game_area,
                view.player.actor.x,
                view.player.actor.y,
                view.player.actor.sprite.rows(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            );
        }
        for shot in &view.player.actor.shots {
            draw_sprite(
                buffer,
                game_area,
                shot.x,
                shot.y,
                shot.sprite.rows(),
                Style::default().fg(Color::Yellow),
            );
        }

        // HUD: lives top-left, level top-right.
        let lives_label = Line::from(vec![
            Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.lives),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let level_label = Line::from(vec![
            Span::styled("level:", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.level),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);

        let hud_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(lives_label), hud_area);
        frame.render_widget(
            Paragraph::new(level_label).alignment(Alignment::Right),
            hud_area,
        );

        // Controls hint at bottom.
        let controls = Line::from(Span::styled(
            "[WASD/Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        ));
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: 1,
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let pause_area = Rect {
            x: (area.x + area.width / 2).saturating_sub(15),
            y: (area.y + area.height / 2).saturating_sub(3),
            width: 30.min(area.width),
            height: 6.min(area.height),
        };

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Loss banner on top of the final game scene; the loop keeps it
    /// visible for a few seconds before exiting.
    fn render_lost(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let lost_text = vec![
            Line::from(""),
            Line::from("You need some milk!!").centered().red().bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let lost_area = Rect {
            x: (area.x + area.width / 2).saturating_sub(18),
            y: (area.y + area.height / 2).saturating_sub(3),
            width: 36.min(area.width),
            height: 7.min(area.height),
        };

        frame.render_widget(
            Paragraph::new(lost_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red)),
                )
                .alignment(Alignment::Center),
            lost_area,
        );
    }
}

fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::Dragon => Color::Red,
        Kind::Turtle => Color::Green,
        Kind::Monster => Color::Blue,
    }
}

/// Draws sprite rows at an arena position, scaled to terminal cells. Rows
/// outside the game area are clipped instead of wrapped.
fn draw_sprite(buffer: &mut Buffer, game_area: Rect, x: i32, y: i32, rows: &[&str], style: Style) {
    let cx = x.div_euclid(CELL);
    if cx < 0 {
        return;
    }

    for (i, row) in rows.iter().enumerate() {
        let cy = y.div_euclid(CELL) + i as i32;
        if cy < 0 || cy >= i32::from(game_area.height) {
            continue;
        }
        if cx + row.chars().count() as i32 > i32::from(game_area.width) {
            continue;
        }
        buffer.set_string(
            game_area.x + cx as u16,
            game_area.y + cy as u16,
            *row,
            style,
        );
    }
}
