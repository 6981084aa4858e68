//! Terminal panels for the tournament frontend.
//!
//! Pure presentation: every function here only reads tournament
//! projections and draws. Commands are issued from main.rs key handling.

use crate::core::race::{RaceStatus, Race};
use crate::core::tournament::Tournament;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the whole screen: schedule on the left, track and results on the
/// right, key hints along the bottom.
pub fn draw_ui(frame: &mut Frame, tournament: &Tournament, status_line: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(chunks[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[0]);

    draw_roster(frame, left[0], tournament);
    draw_schedule(frame, left[1], tournament);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(14)])
        .split(columns[1]);

    draw_track(frame, right[0], tournament);
    draw_results(frame, right[1], tournament);

    draw_footer(frame, chunks[1], tournament, status_line);
}

/// Parse a `#RRGGBB` silk color into a terminal color.
fn silk_color(hex: &str) -> Color {
    let parsed = hex
        .strip_prefix('#')
        .and_then(|h| u32::from_str_radix(h, 16).ok());
    match parsed {
        Some(rgb) => Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8),
        None => Color::White,
    }
}

fn draw_roster(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    let mut lines = Vec::new();
    for horse in tournament.horses() {
        lines.push(Line::from(vec![
            Span::styled("█ ", Style::default().fg(silk_color(&horse.color))),
            Span::raw(format!("{:<18}", horse.name)),
            Span::styled(
                format!("{:>3}", horse.condition),
                Style::default().fg(Color::Yellow),
            ),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press 'h' to generate horses",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Stable ({})", tournament.horses().len())),
    );
    frame.render_widget(panel, area);
}

fn draw_schedule(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    let mut lines = Vec::new();
    for (idx, race) in tournament.races().iter().enumerate() {
        let marker = if idx + 1 == tournament.current_round() {
            "▶ "
        } else {
            "  "
        };
        let (status, style) = match race.status {
            RaceStatus::Pending => ("pending", Style::default().fg(Color::DarkGray)),
            RaceStatus::Running => ("running", Style::default().fg(Color::Green)),
            RaceStatus::Finished => ("finished", Style::default().fg(Color::Cyan)),
        };
        let winner = winner_name(tournament, race)
            .map(|n| format!(" 🏆 {}", n))
            .unwrap_or_default();
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::raw(format!("R{} {:>4}m ", race.round, race.distance)),
            Span::styled(status, style),
            Span::styled(winner, Style::default().fg(Color::Yellow)),
        ]));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Press 'g' to generate schedule",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Schedule"),
    );
    frame.render_widget(panel, area);
}

fn winner_name(tournament: &Tournament, race: &Race) -> Option<String> {
    let winner_id = race.winner?;
    tournament
        .horses()
        .iter()
        .find(|h| h.id == winner_id)
        .map(|h| h.name.clone())
}

fn draw_track(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    let title = match tournament.current_race() {
        Some(race) => format!(
            "Round {}/{} — {}m",
            tournament.current_round(),
            tournament.total_rounds(),
            race.distance
        ),
        None => "Track".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(race) = tournament.current_race() else {
        return;
    };

    if let Some(remaining) = tournament.countdown_remaining() {
        if remaining > 0.0 {
            let countdown = Paragraph::new(format!("Starting in {}...", remaining.ceil() as u32))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            frame.render_widget(countdown, inner);
            return;
        }
    }

    let lanes = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); race.horses.len()])
        .split(inner);

    for (lane, &horse_id) in lanes.iter().zip(race.horses.iter()) {
        let Some(horse) = tournament.horses().iter().find(|h| h.id == horse_id) else {
            continue;
        };
        let ratio = (horse.position / race.distance as f64).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(silk_color(&horse.color)))
            .ratio(ratio)
            .label(format!("{} {:>4.0}m", horse.name, horse.position));
        frame.render_widget(gauge, *lane);
    }
}

fn draw_results(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    let mut lines = Vec::new();

    if tournament.is_showing_results() || tournament.is_all_races_finished() {
        for result in tournament.current_race_results() {
            let style = match result.position {
                1 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                2 => Style::default().fg(Color::White),
                3 => Style::default().fg(Color::LightRed),
                _ => Style::default().fg(Color::DarkGray),
            };
            lines.push(Line::from(Span::styled(
                format!(
                    "{:>2}. {:<18} {:>6.2}s",
                    result.position, result.horse_name, result.time
                ),
                style,
            )));
        }
    } else if tournament.is_racing() {
        lines.push(Line::from(Span::styled(
            "Racing...",
            Style::default().fg(Color::Green),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "No results yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = if tournament.is_all_races_finished() {
        "Results — tournament complete!"
    } else {
        "Results"
    };
    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(panel, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, tournament: &Tournament, status_line: &str) {
    let hint = |label: &str, enabled: bool| {
        Span::styled(
            format!(" {} ", label),
            if enabled {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        )
    };

    let mut spans = vec![
        hint("[h] horses", !tournament.is_racing()),
        hint("[g] schedule", !tournament.horses().is_empty() && !tournament.is_racing()),
        hint("[s] start", tournament.can_start_race()),
        hint("[n] next round", tournament.can_advance_round()),
        hint("[r] reset", true),
        hint("[q] quit", true),
    ];
    if !status_line.is_empty() {
        spans.push(Span::styled(
            format!("  {}", status_line),
            Style::default().fg(Color::Red),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Commands"));
    frame.render_widget(footer, area);
}
