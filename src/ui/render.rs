//! Widget layout and drawing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;

/// Draw the full interface.
pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_body(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Devnet SOL Transfer")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_body(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(20)])
        .split(area);

    render_buttons(f, app, columns[0]);
    render_status(f, app, columns[1]);
}

fn render_buttons(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .actions()
        .iter()
        .map(|action| ListItem::new(action.label()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Actions"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if !app.session.provider_detected() {
        lines.push(Line::from(vec![
            Span::styled("No provider found. ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("Install Phantom: {}", app.install_url)),
        ]));
        lines.push(Line::from(""));
    }

    let visible = area.height.saturating_sub(2) as usize;
    let shown = visible.saturating_sub(lines.len());
    let status = app.status_lines();
    let start = status.len().saturating_sub(shown);
    for line in &status[start..] {
        lines.push(Line::from(line.as_str()));
    }

    let log = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: false });
    f.render_widget(log, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let accounts = format!(
        "funding: {}   wallet: {}",
        app.session
            .funding_address()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string()),
        app.session
            .connected_account()
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );

    let footer = Paragraph::new(vec![Line::from(accounts)])
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("↑/↓ select  Enter activate  q quit"),
        );
    f.render_widget(footer, area);
}
