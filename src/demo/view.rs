//! Rendering for the demo.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::geometry::ContentDirection;
use crate::traits::RetryScheduler;

use super::app::DemoApp;

pub const COLOR_BORDER: Color = Color::DarkGray;
pub const COLOR_ACTIVE: Color = Color::LightGreen;
pub const COLOR_DELAYING: Color = Color::Yellow;
pub const COLOR_DIM: Color = Color::DarkGray;

/// Arrow pointing toward the side submenus open on.
fn submenu_arrow(direction: ContentDirection) -> &'static str {
    match direction {
        ContentDirection::Top => "▴",
        ContentDirection::Bottom => "▾",
        ContentDirection::Left => "◂",
        ContentDirection::Right => "▸",
    }
}

pub fn render<S: RetryScheduler + Clone>(frame: &mut Frame, app: &DemoApp<S>) {
    let Some(layout) = app.layout() else {
        return;
    };
    let direction = app.config().content_direction;
    let delaying = app.is_delaying();

    // Menu block, yellow while a switch is being deferred
    let (title, border) = if delaying {
        (" menu · delaying ", COLOR_DELAYING)
    } else {
        (" menu ", COLOR_BORDER)
    };
    let menu_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(title);
    frame.render_widget(menu_block, layout.menu);

    let arrow = submenu_arrow(direction);
    for (index, rect) in layout.items.iter().enumerate() {
        let Some(entry) = app.entries().get(index) else {
            continue;
        };
        let mut style = Style::default();
        if app.is_entry_active(index) {
            style = style.fg(Color::Black).bg(COLOR_ACTIVE).add_modifier(Modifier::BOLD);
        } else if app.hovered_entry() == Some(index) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(entry.label),
            Span::raw(" "),
            Span::raw(arrow),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), *rect);
    }

    render_content(frame, app, layout.content);
    render_status(frame, app, layout.status);
}

fn render_content<S: RetryScheduler + Clone>(frame: &mut Frame, app: &DemoApp<S>, area: Rect) {
    let entry = app.active_entry().and_then(|index| app.entries().get(index));
    let title = entry.map_or_else(|| " submenu ".to_string(), |e| format!(" {} ", e.label));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);

    let lines: Vec<Line> = match entry {
        Some(entry) => entry.children.iter().map(|child| Line::from(format!(" {}", child))).collect(),
        None => vec![Line::styled(
            " hover a menu item to open its submenu",
            Style::default().fg(COLOR_DIM),
        )],
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status<S: RetryScheduler + Clone>(frame: &mut Frame, app: &DemoApp<S>, area: Rect) {
    let config = app.config();
    let settings = format!(
        " direction: {}  delay: {}ms  threshold: {}  [q] quit",
        config.content_direction, config.delay_ms, config.threshold
    );
    let activity = app.activity().join(" · ");

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let text = vec![
        Line::styled(settings, Style::default().fg(COLOR_DIM)),
        Line::from(format!(" {}", activity)),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}
