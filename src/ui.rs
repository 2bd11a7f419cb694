//! The UI renders the application state into a sidebar and a content pane.
//!
//! The sidebar lists the outline with the active entry highlighted; the content pane
//! shows the wrapped document at the current scroll offset. Pane heights are fed back
//! into the application state each frame so viewport math always sees live geometry.

use crate::app_state::{AppState, Focus};
use crate::config::Config;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::collections::HashSet;

/// Renders the full frame: sidebar, content, and help bar.
pub fn draw(f: &mut Frame, app: &mut AppState, cfg: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let sidebar_width = u16::try_from(cfg.sidebar_width).unwrap_or(32);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(chunks[0]);

    app.set_pane_sizes(inner_height(panes[1]), inner_height(panes[0]));

    draw_sidebar(f, app, panes[0]);
    draw_content(f, app, panes[1]);
    draw_help(f, app, chunks[1]);
}

/// Rows inside a bordered block.
fn inner_height(area: Rect) -> usize {
    usize::from(area.height.saturating_sub(2))
}

fn draw_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let offset = app.sidebar_offset();
    let active = app.tracker.active();
    let focused = app.focus == Focus::Sidebar;

    let items: Vec<ListItem> = app
        .headings
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, heading)| {
            let indent = "  ".repeat(heading.level.saturating_sub(1));
            let mut style = Style::default();
            if Some(i) == active {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            if focused && i == app.sidebar_cursor {
                style = style.fg(Color::Cyan);
            }
            ListItem::new(Line::raw(format!("{indent}{}", heading.title))).style(style)
        })
        .collect();

    let title = match app.tracker.active_id() {
        Some(id) => format!("Contents [{id}]"),
        None => "Contents".to_string(),
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_content(f: &mut Frame, app: &AppState, area: Rect) {
    let height = inner_height(area);
    let start = app.viewport.scroll_y.min(app.doc.rows.len());
    let end = (start + height).min(app.doc.rows.len());

    let heading_rows: HashSet<usize> = app.headings.iter().map(|h| h.position).collect();
    let lines: Vec<Line> = (start..end)
        .map(|row| {
            let line = Line::raw(app.doc.rows[row].as_str());
            if heading_rows.contains(&row) {
                line.style(
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect();

    let title = app.file.to_string_lossy().to_string();
    let content =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help_text = if let Some(ref msg) = app.message {
        msg.clone()
    } else {
        match app.focus {
            Focus::Content => {
                "↑/↓: Scroll | PgUp/PgDn: Page | Home/End: Top/Bottom | Tab: Contents | q: Quit"
                    .to_string()
            }
            Focus::Sidebar => {
                "↑/↓: Move | Enter: Jump to section | Tab: Content | q: Quit".to_string()
            }
        }
    };

    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
