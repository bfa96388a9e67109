//! UI rendering for the flight scene.
//!
//! The simulation runs in world units; everything here scales those to the
//! terminal cell grid before drawing.

use crate::constants::*;
use crate::game::{GamePhase, GameSession};
use crate::ui::game_common::{render_center_overlay, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game screen: play area, status bar, info panel, overlays.
pub fn render_game(frame: &mut Frame, area: Rect, session: &GameSession) {
    frame.render_widget(Clear, area);

    // Outer border
    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: play area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Left side: play area (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], session);
    render_status_bar_content(frame, v_chunks[1], session);
    render_info_panel(frame, h_chunks[1], session);

    match session.phase {
        GamePhase::Ready => render_ready_overlay(frame, v_chunks[0]),
        GamePhase::Stopped => render_game_over(frame, v_chunks[0], session),
        GamePhase::Active => {}
    }
}

/// Render the main play area with bird, pipes and ground.
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    // Scale world coordinates to the display area
    let x_scale = width as f64 / WORLD_WIDTH;
    let y_scale = height as f64 / WORLD_HEIGHT;

    let bird_row = (session.bird_y * y_scale).round() as usize;
    let bird_col = (BIRD_X * x_scale).round() as usize;
    // The visible sprite is larger than the hitbox; give it a wing row when
    // the scaled sprite spans at least two cells
    let bird_has_wing = (BIRD_SIZE * y_scale).round() as usize >= 2;

    let pipe_left = session.pipe_x();
    let pipe_right = pipe_left + PIPE_WIDTH;
    let gap_top = session.top_pipe_height;
    let gap_bottom = gap_top + PIPE_GAP;
    let gap_top_row = (gap_top * y_scale).round() as usize;
    let gap_bottom_row = (gap_bottom * y_scale).round() as usize;
    let ground_row = ((WORLD_HEIGHT - FLOOR_MARGIN) * y_scale).round() as usize;

    let mut lines = Vec::with_capacity(height);

    for display_row in 0..height {
        let mut spans = Vec::with_capacity(width);

        for display_col in 0..width {
            if display_row == bird_row && display_col == bird_col {
                // Bird glyph tracks the flap animation and velocity
                let bird_char = if session.flap_timer > 0 || session.bird_vel < -50.0 {
                    "▲"
                } else if session.bird_vel > 150.0 {
                    "▼"
                } else {
                    "►"
                };
                spans.push(Span::styled(
                    bird_char,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            if bird_has_wing && display_row + 1 == bird_row && display_col == bird_col {
                let wing_char = if session.flap_timer > 0 { "▀" } else { "▄" };
                spans.push(Span::styled(wing_char, Style::default().fg(Color::Yellow)));
                continue;
            }

            // Cell center in world units
            let world_x = (display_col as f64 + 0.5) / x_scale;

            let in_pipe_column = world_x >= pipe_left && world_x < pipe_right;
            if in_pipe_column && (display_row < gap_top_row || display_row > gap_bottom_row) {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else if in_pipe_column
                && (display_row == gap_top_row || display_row == gap_bottom_row)
            {
                spans.push(Span::styled("░", Style::default().fg(Color::DarkGray)));
            } else if display_row >= ground_row {
                spans.push(Span::styled("▒", Style::default().fg(Color::LightGreen)));
            } else {
                spans.push(Span::styled(" ", Style::default()));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom.
fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    match session.phase {
        GamePhase::Ready => render_status_bar(
            frame,
            area,
            "Press Space to fly!",
            Color::Yellow,
            &[("[Space/Up/Enter]", "Flap"), ("[Q]", "Quit")],
        ),
        GamePhase::Active => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Q]", "Quit")],
        ),
        GamePhase::Stopped => render_status_bar(
            frame,
            area,
            "Crashed!",
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Render the waiting-to-start overlay.
fn render_ready_overlay(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "SKYWARD",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to fly",
            Style::default().fg(Color::White),
        )),
    ];
    render_center_overlay(frame, area, Color::Cyan, lines);
}

/// Render the game-over overlay.
fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score {}", session.score),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Best {}", session.high_score),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_center_overlay(frame, area, Color::Red, lines);
}
