//! UI rendering

use super::app::App;
use crate::models::{EnrichedProduct, Sex};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

/// Message shown when the composite query yields zero rows.
const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(3), // Owner chips
            Constraint::Length(3), // Category chips
            Constraint::Min(5),    // Results table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_search_input(frame, app, chunks[0]);
    render_owner_chips(frame, app, chunks[1]);
    render_category_chips(frame, app, chunks[2]);
    render_results_table(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the search input box
fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Search ");

    let input = Paragraph::new(app.filters.query.as_str()).block(block);
    frame.render_widget(input, area);

    // Put the terminal cursor at the end of the query text
    let cursor_x = area.x + 1 + u16::try_from(app.filters.query.chars().count()).unwrap_or(0);
    frame.set_cursor_position(Position::new(
        cursor_x.min(area.right().saturating_sub(2)),
        area.y + 1,
    ));
}

/// Render the exclusive owner chip row, `All` first
fn render_owner_chips(frame: &mut Frame, app: &App, area: Rect) {
    let chips = chip_line(app.owners(), app.filters.owner.as_deref());
    let block = Block::default().borders(Borders::ALL).title(" Owner ");
    frame.render_widget(Paragraph::new(chips).block(block), area);
}

/// Render the exclusive category chip row, `All` first
fn render_category_chips(frame: &mut Frame, app: &App, area: Rect) {
    let chips = chip_line(app.categories(), app.filters.category.as_deref());
    let block = Block::default().borders(Borders::ALL).title(" Category ");
    frame.render_widget(Paragraph::new(chips).block(block), area);
}

/// Builds one chip row: `All` plus one chip per value, the active one
/// highlighted. `selected == None` highlights `All`.
fn chip_line<'a>(values: &'a [String], selected: Option<&str>) -> Line<'a> {
    let active = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let inactive = Style::default();

    let mut spans = vec![Span::styled(
        " All ",
        if selected.is_none() { active } else { inactive },
    )];
    for value in values {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {value} "),
            if selected == Some(value.as_str()) {
                active
            } else {
                inactive
            },
        ));
    }
    Line::from(spans)
}

/// Render the results table, or the empty-state message when the composite
/// query yields zero rows
fn render_results_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(format!(" Products [{}] ", visible.len()));

    if visible.is_empty() {
        let empty = Paragraph::new(NO_MATCHING_MESSAGE)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row<'static>> = visible.iter().map(|p| product_row(p)).collect();
    drop(visible);

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Min(20),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["ID", "Product", "Category", "User"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .block(block);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// One table row: bold id, name, `<icon> - <title>` category label, and the
/// owner name colored by sex (`m` blue, anything else red).
fn product_row(product: &EnrichedProduct) -> Row<'static> {
    let owner_color = match product.user.sex {
        Sex::M => Color::Blue,
        Sex::F => Color::Red,
    };

    Row::new(vec![
        Span::styled(
            product.id.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(product.name.clone()),
        Span::raw(format!(
            "{} - {}",
            product.category.icon, product.category.title
        )),
        Span::styled(product.user.name.clone(), Style::default().fg(owner_color)),
    ])
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = format!(
        " {}/{} products │ Tab: owner │ ←/→: category │ ↑/↓: select │ Ctrl-R: reset │ Esc: quit",
        app.visible().len(),
        app.total()
    );

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
