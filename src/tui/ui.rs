//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Spinner frames for the refresh indicator
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠇"];

/// Render the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(0),    // people list
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_people_list(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.show_help {
        render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled("People:", Theme::header())));
    frame.render_widget(header, area);
}

fn render_people_list(frame: &mut Frame, area: Rect, app: &App) {
    if app.people.is_empty() {
        let text = if app.refreshing {
            "Loading people..."
        } else {
            "No people loaded. Press r to fetch."
        };
        let placeholder = Paragraph::new(text)
            .style(Theme::muted())
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .people
        .iter()
        .enumerate()
        .map(|(i, person)| {
            let name_style = if i == app.list_selection.selected {
                Theme::selected()
            } else {
                Theme::normal().add_modifier(Modifier::BOLD)
            };

            // Two-line row: name as primary text, gender de-emphasized below
            let lines = vec![
                Line::from(Span::styled(person.name.clone(), name_style)),
                Line::from(Span::styled(
                    format!("  Gender: {}", person.gender),
                    Theme::muted(),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::NONE));
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(38)])
        .split(area);

    let mut left = String::new();

    if app.refreshing {
        let spinner = SPINNER_FRAMES[(app.tick_counter as usize) % SPINNER_FRAMES.len()];
        left.push_str(spinner);
        left.push_str(" refreshing · ");
    }

    left.push_str(&format!("page {}", app.current_page()));
    match app.total_count {
        Some(total) => left.push_str(&format!(" · {} of {} people", app.people.len(), total)),
        None => left.push_str(&format!(" · {} people", app.people.len())),
    }
    if app.last_updated.is_some() && !app.has_next {
        left.push_str(" · end of list");
    }
    if let Some(updated) = app.last_updated {
        left.push_str(&format!(" · updated {}", updated.format("%H:%M:%S")));
    }
    if let Some(message) = &app.status_message {
        left.push_str(" · ");
        left.push_str(message);
    }

    let status = Paragraph::new(left).style(Theme::status_bar());
    frame.render_widget(status, chunks[0]);

    let hints = Paragraph::new("r reload · n next · ? help · q quit")
        .style(Theme::status_bar())
        .alignment(Alignment::Right);
    frame.render_widget(hints, chunks[1]);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(44, 12, frame.area());

    let lines = vec![
        Line::from(Span::styled("Keys", Theme::header())),
        Line::from(""),
        Line::from("  j / ↓        move down"),
        Line::from("  k / ↑        move up"),
        Line::from("  g / G        jump to top / bottom"),
        Line::from("  r            reload current page"),
        Line::from("  n / Space    load next page"),
        Line::from("  q / Esc      quit"),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Theme::muted())),
    ];

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Theme::header()),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Centered rectangle of fixed width/height, clamped to the frame
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
