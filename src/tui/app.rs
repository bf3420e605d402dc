//! Main application state and event loop

use super::ui;
use crate::core::filter::{self, FilterState};
use crate::errors::Result;
use crate::models::EnrichedProduct;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::TableState};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, trace};

/// Application state
pub struct App {
    /// The full enriched catalog, immutable after startup
    catalog: Vec<EnrichedProduct>,
    /// Distinct owner names in first-occurrence order
    owners: Vec<String>,
    /// All category titles from the fixture set, in fixture order
    categories: Vec<String>,
    /// Current filter fields
    pub filters: FilterState,
    /// Table selection + scroll state
    pub table_state: TableState,
    /// Should quit?
    pub should_quit: bool,
}

impl App {
    /// Creates the application state over an enriched catalog.
    ///
    /// `categories` is the global category title list: the chip row offers
    /// every category from the fixtures, independent of the other filters.
    #[must_use]
    pub fn new(catalog: Vec<EnrichedProduct>, categories: Vec<String>) -> Self {
        let owners = filter::owner_names(&catalog);
        let mut table_state = TableState::default();
        if !catalog.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            catalog,
            owners,
            categories,
            filters: FilterState::default(),
            table_state,
            should_quit: false,
        }
    }

    /// The composite query result for the current filter state.
    ///
    /// Recomputed freshly on every call; nothing is cached.
    #[must_use]
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        filter::visible_rows(&self.catalog, &self.filters)
    }

    /// Total number of products in the catalog.
    #[must_use]
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Owner chip labels in display order (without the leading "All").
    #[must_use]
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// Category chip labels in display order (without the leading "All").
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Moves the table selection back to the first visible row.
    fn reset_selection(&mut self) {
        if self.visible().is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    /// Cycles the owner chip selection, `All` included, in either direction.
    fn cycle_owner(&mut self, forward: bool) {
        let next = cycle(
            current_chip(&self.owners, self.filters.owner.as_deref()),
            self.owners.len(),
            forward,
        );
        self.filters.owner = chip_value(&self.owners, next);
        trace!("Owner filter set to {:?}", self.filters.owner);
        self.reset_selection();
    }

    /// Cycles the category chip selection, `All` included, in either direction.
    fn cycle_category(&mut self, forward: bool) {
        let next = cycle(
            current_chip(&self.categories, self.filters.category.as_deref()),
            self.categories.len(),
            forward,
        );
        self.filters.category = chip_value(&self.categories, next);
        trace!("Category filter set to {:?}", self.filters.category);
        self.reset_selection();
    }

    /// Move selection up within the visible rows
    fn select_prev(&mut self) {
        let current = self.table_state.selected().unwrap_or(0);
        if !self.visible().is_empty() && current > 0 {
            self.table_state.select(Some(current - 1));
        }
    }

    /// Move selection down within the visible rows
    fn select_next(&mut self) {
        let rows = self.visible().len();
        let current = self.table_state.selected().unwrap_or(0);
        if rows > 0 && current < rows - 1 {
            self.table_state.select(Some(current + 1));
        }
    }

    /// Clears the search query only.
    fn clear_query(&mut self) {
        self.filters.query.clear();
        self.reset_selection();
    }

    /// Clears all three filter fields in one action.
    fn reset_filters(&mut self) {
        self.filters.reset();
        self.reset_selection();
    }

    /// Handle input event
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => {
                    // Esc first clears an active search, then quits
                    if self.filters.query.is_empty() {
                        self.should_quit = true;
                    } else {
                        self.clear_query();
                    }
                }
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => self.should_quit = true,
                (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.clear_query(),
                (KeyCode::Char('r'), KeyModifiers::CONTROL) => self.reset_filters(),
                (KeyCode::Tab, _) => self.cycle_owner(true),
                (KeyCode::BackTab, _) => self.cycle_owner(false),
                (KeyCode::Right, _) => self.cycle_category(true),
                (KeyCode::Left, _) => self.cycle_category(false),
                (KeyCode::Up, _) => self.select_prev(),
                (KeyCode::Down, _) => self.select_next(),
                (KeyCode::Backspace, _) => {
                    self.filters.query.pop();
                    self.reset_selection();
                }
                (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
                    self.filters.query.push(c);
                    self.reset_selection();
                }
                _ => {}
            },
            _ => {}
        }
    }
}

/// Index of the selected chip in a row of `All` + `values` (0 = `All`).
fn current_chip(values: &[String], selected: Option<&str>) -> usize {
    selected
        .and_then(|s| values.iter().position(|v| v == s))
        .map_or(0, |i| i + 1)
}

/// Next chip index when stepping through `All` + `len` chips, wrapping.
fn cycle(current: usize, len: usize, forward: bool) -> usize {
    let total = len + 1;
    if forward {
        (current + 1) % total
    } else {
        (current + total - 1) % total
    }
}

/// Filter value for a chip index (0 = `All` = no filtering).
fn chip_value(values: &[String], index: usize) -> Option<String> {
    if index == 0 {
        None
    } else {
        values.get(index - 1).cloned()
    }
}

/// Run the TUI application over an enriched catalog
///
/// # Errors
/// Returns an error if the terminal cannot be put into or restored from raw
/// mode, or if drawing fails.
pub fn run(catalog: Vec<EnrichedProduct>, categories: Vec<String>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, categories);
    info!(
        "Catalog browser started with {} products, {} owners, {} categories",
        app.total(),
        app.owners().len(),
        app.categories().len()
    );

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("Catalog browser stopped");

    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(&event);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
