//! Main UI Application
//!
//! Maps key presses to session intents and renders the current results.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Clear},
};

use crate::catalog::{Catalog, CatalogItem, Listing, RecipeCategory, WindmillColor, price_sort_key};
use crate::query::{Mode, SortOrder};
use crate::session::{IngredientMark, Session};

/// Lines taken by one result card
const CARD_HEIGHT: usize = 4;

/// Truncate a string to fit within max_len characters, adding "…" if truncated
fn truncate_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        name.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let truncated: String = name.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}

/// Step to the next option, going from "all" to the first and from the last back to "all"
fn cycle<T: Clone + PartialEq>(options: &[T], current: Option<&T>) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(value) => options
            .iter()
            .position(|o| o == value)
            .and_then(|i| options.get(i + 1))
            .cloned(),
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Main UI application
pub struct App<'a> {
    session: Session<'a>,
    /// Highlighted result card
    cursor: usize,
    /// Highlighted ingredient on the current card
    ingredient_cursor: usize,
    /// Highlighted locked-ingredient badge
    lock_cursor: usize,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog, start_mode: Mode) -> Self {
        Self {
            session: Session::with_mode(catalog, start_mode),
            cursor: 0,
            ingredient_cursor: 0,
            lock_cursor: 0,
        }
    }

    pub fn session(&self) -> &Session<'a> {
        &self.session
    }

    /// Handle a key press. Returns true when the viewer should quit.
    pub fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Ok(true),
            KeyCode::Esc => {
                if self.session.filter().text.is_empty() {
                    return Ok(true);
                }
                self.session.clear_text();
            }

            // Locked ingredients
            KeyCode::Char('a') if ctrl => {
                if let Some(ingredient) = self.highlighted_ingredient() {
                    self.lock(&ingredient);
                }
            }
            KeyCode::Char('x') if ctrl => self.session.clear_ingredients(),
            KeyCode::Delete => {
                if let Some(removed) = self.session.unlock_ingredient(self.lock_cursor) {
                    log::debug!("Unlocked '{}'", removed);
                }
            }
            KeyCode::Enter => {
                let text = self.session.filter().text.clone();
                self.lock(&text);
            }
            KeyCode::Left if shift => self.lock_cursor = self.lock_cursor.saturating_sub(1),
            KeyCode::Right if shift => self.lock_cursor += 1,

            // Filters
            KeyCode::Tab => self.next_mode(),
            KeyCode::F(2) if self.session.mode().shows_recipes() => {
                let next = cycle(&RecipeCategory::ALL, self.session.filter().category.as_ref());
                self.session.set_category(next);
            }
            KeyCode::F(3) if self.session.mode().shows_recipes() => {
                let effects = self.session.catalog().effect_categories();
                let next = cycle(effects, self.session.filter().effect_category.as_ref());
                self.session.set_effect_category(next);
            }
            KeyCode::F(4) if self.session.mode().shows_goods() => {
                let next = cycle(&WindmillColor::ALL, self.session.filter().windmill_color.as_ref());
                self.session.set_windmill_color(next);
            }
            KeyCode::F(5) => {
                let current = self.session.filter().sort_order;
                let next = cycle(&SortOrder::ALL, Some(&current)).unwrap_or_default();
                self.session.set_sort_order(next);
            }

            // Navigation
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                self.ingredient_cursor = 0;
            }
            KeyCode::Down => {
                self.cursor += 1;
                self.ingredient_cursor = 0;
            }
            KeyCode::Left => self.ingredient_cursor = self.ingredient_cursor.saturating_sub(1),
            KeyCode::Right => self.ingredient_cursor += 1,

            // Search text
            KeyCode::Backspace => {
                let mut text = self.session.filter().text.clone();
                text.pop();
                self.session.set_text(text);
            }
            KeyCode::Char(c) if !ctrl => {
                let mut text = self.session.filter().text.clone();
                text.push(c);
                self.session.set_text(text);
            }
            _ => {}
        }

        self.clamp_cursors();
        Ok(false)
    }

    fn next_mode(&mut self) {
        let next = match self.session.mode() {
            Mode::Recipes => Mode::Goods,
            Mode::Goods => Mode::All,
            Mode::All => Mode::Recipes,
        };
        self.session.switch_mode(next);
        self.cursor = 0;
        self.ingredient_cursor = 0;
        self.lock_cursor = 0;
    }

    /// Lock an ingredient and move the badge cursor onto it
    fn lock(&mut self, ingredient: &str) {
        if self.session.lock_ingredient(ingredient) {
            self.lock_cursor = self.session.filter().selected.len().saturating_sub(1);
        }
    }

    fn clamp_cursors(&mut self) {
        let locked = self.session.filter().selected.len();
        self.lock_cursor = self.lock_cursor.min(locked.saturating_sub(1));

        let results = self.session.results();
        self.cursor = self.cursor.min(results.len().saturating_sub(1));
        let ingredients = results.get(self.cursor).map_or(0, |item| item.ingredients().len());
        self.ingredient_cursor = self.ingredient_cursor.min(ingredients.saturating_sub(1));
    }

    /// Ingredient under the cursor on the highlighted card
    fn highlighted_ingredient(&self) -> Option<String> {
        self.session
            .results()
            .get(self.cursor)
            .and_then(|item| item.ingredients().get(self.ingredient_cursor).cloned())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn render(&self, frame: &mut Frame) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(4),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_modes(frame, chunks[0]);
        self.render_search(frame, chunks[1]);
        self.render_filters(frame, chunks[2]);
        self.render_summary(frame, chunks[3]);
        self.render_results(frame, chunks[4]);
        self.render_keys(frame, chunks[5]);
    }

    fn render_modes(&self, frame: &mut Frame, area: Rect) {
        let catalog = self.session.catalog();
        let mut spans = Vec::new();
        for mode in Mode::ALL {
            let count = match mode {
                Mode::Recipes => catalog.recipes().len(),
                Mode::Goods => catalog.goods().len(),
                Mode::All => catalog.len(),
            };
            let style = if mode == self.session.mode() {
                Style::default().fg(Color::White).bg(Color::Rgb(58, 126, 58)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ({}) ", mode.label(), count), style));
            spans.push(Span::raw("  "));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Grand Bazaar Finder ")
            .border_style(Style::default().fg(Color::Rgb(74, 158, 74)));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_search(&self, frame: &mut Frame, area: Rect) {
        let filter = self.session.filter();
        let placeholder = match self.session.mode() {
            Mode::Recipes => "Type an ingredient or recipe name, press Enter to lock…",
            Mode::Goods => "Search windmill goods or inputs…",
            Mode::All => "Search recipes and windmill goods…",
        };

        let mut spans = vec![Span::raw(" ")];
        if filter.text.is_empty() {
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(filter.text.clone(), Style::default().add_modifier(Modifier::BOLD)));
            spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }

        for (i, locked) in filter.selected.iter().enumerate() {
            let mut style = Style::default().fg(Color::Rgb(122, 78, 0)).bg(Color::Rgb(255, 243, 208));
            if i == self.lock_cursor {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("[{} ×]", locked), style));
        }

        let block = Block::default().borders(Borders::ALL).title(" Search ");
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect) {
        let filter = self.session.filter();
        let mode = self.session.mode();
        let label = Style::default().fg(Color::Rgb(139, 94, 60)).add_modifier(Modifier::BOLD);
        let active = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

        let mut first = Vec::new();
        if mode.shows_recipes() {
            first.push(Span::styled(" CATEGORY: ", label));
            let (name, style) = match filter.category {
                Some(cat) => (cat.name(), active.bg(rgb(cat.color()))),
                None => ("All", active),
            };
            first.push(Span::styled(name, style));
        }
        if mode.shows_goods() {
            first.push(Span::styled(" WINDMILL: ", label));
            let (name, style) = match filter.windmill_color {
                Some(color) => (color.name(), active.bg(rgb(color.color()))),
                None => ("All", active),
            };
            first.push(Span::styled(name, style));
        }

        let mut second = Vec::new();
        if mode.shows_recipes() {
            second.push(Span::styled(" EFFECT: ", label));
            second.push(Span::styled(
                filter.effect_category.clone().unwrap_or_else(|| "All Effects".to_string()),
                active,
            ));
        }
        second.push(Span::styled(" SORT PRICE: ", label));
        second.push(Span::styled(filter.sort_order.label(), active));

        frame.render_widget(Paragraph::new(vec![Line::from(first), Line::from(second)]), area);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.summary_lines()), area);
    }

    /// Result count, followed by the usage hint while nothing is filtered
    fn summary_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", self.session.summary()),
            Style::default().fg(Color::Rgb(139, 94, 60)).add_modifier(Modifier::BOLD),
        ))];
        if self.session.show_hint() {
            lines.push(Line::from(Span::styled(
                " Press Enter to lock in an ingredient, Ctrl+A to lock the highlighted one",
                Style::default().fg(Color::Rgb(122, 92, 0)),
            )));
        }
        lines
    }

    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let results = self.session.results();
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if results.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No results found, try a different ingredient or name!",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            )))
            .alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        // Keep the highlighted card on screen
        let visible = (inner.height as usize / CARD_HEIGHT).max(1);
        let first = self.cursor.saturating_sub(visible - 1);
        let width = inner.width as usize;

        let mut lines: Vec<Line> = Vec::new();
        for (index, item) in results.iter().enumerate().skip(first).take(visible) {
            lines.extend(self.card_lines(item, index == self.cursor, width));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Lines for one result card
    fn card_lines(&self, item: &CatalogItem<'_>, selected: bool, width: usize) -> Vec<Line<'static>> {
        let name_style = if selected {
            Style::default().fg(Color::Black).bg(Color::Rgb(255, 224, 130)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let (tag, tag_color) = match item {
            CatalogItem::Recipe(recipe) => (recipe.category.name().to_string(), rgb(recipe.category.color())),
            CatalogItem::Good(good) => (format!("{} Windmill", good.windmill.name()), rgb(good.windmill.color())),
        };

        let mut header = vec![
            Span::styled(truncate_name(item.name(), width.saturating_sub(tag.len() + 4)), name_style),
            Span::raw("  "),
            Span::styled(tag, Style::default().fg(Color::White).bg(tag_color)),
        ];
        if item.as_good().is_some_and(|g| g.requires_purple_wonderstone()) {
            header.push(Span::styled(
                "  Purple Wonderstone Required",
                Style::default().fg(Color::Rgb(107, 33, 168)).add_modifier(Modifier::BOLD),
            ));
        }

        let mut ingredients = vec![Span::raw("   ")];
        for (i, ingredient) in item.ingredients().iter().enumerate() {
            let mut style = match self.session.ingredient_mark(ingredient) {
                IngredientMark::Locked => Style::default().fg(Color::Black).bg(Color::Rgb(200, 247, 197)),
                IngredientMark::Typed => Style::default().fg(Color::Black).bg(Color::Rgb(255, 224, 130)),
                IngredientMark::Plain => Style::default().fg(Color::Gray),
            };
            if selected && i == self.ingredient_cursor {
                style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
            }
            ingredients.push(Span::styled(ingredient.clone(), style));
            ingredients.push(Span::raw(" "));
        }

        let detail = match item {
            CatalogItem::Recipe(recipe) => recipe.effect.clone().filter(|e| !e.is_empty()),
            CatalogItem::Good(good) => good.time.clone(),
        };
        let mut footer = vec![Span::styled(
            format!("   {} ", item.display_price()),
            Style::default().fg(Color::Rgb(122, 78, 0)).add_modifier(Modifier::BOLD),
        )];
        if selected {
            footer.push(Span::styled(
                format!("({}) ", price_sort_key(item.price())),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if let Some(detail) = detail {
            footer.push(Span::styled(detail, Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)));
        }

        vec![Line::from(header), Line::from(ingredients), Line::from(footer), Line::from("")]
    }

    fn render_keys(&self, frame: &mut Frame, area: Rect) {
        let keys = " Tab mode  F2 category  F3 effect  F4 windmill  F5 sort  \
                    ←/→ ingredient  Ctrl+A lock  Shift+←/→ pick lock  Del unlock  Ctrl+X clear  Esc quit";
        frame.render_widget(
            Paragraph::new(keys).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Recipe, WindmillGood};

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Recipe::new("Omelet", RecipeCategory::MainDish, &["Egg", "Milk"])
                    .with_price("260 G")
                    .with_effect("Stamina Lv. 2"),
                Recipe::new("Hot Milk", RecipeCategory::Other, &["Milk"])
                    .with_price("80 G")
                    .with_effect("Fatigue Recovery Lv. 1"),
            ],
            vec![WindmillGood::new("Butter", WindmillColor::Blue, &["Milk"]).with_price("180 G")],
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn shift(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn type_text(app: &mut App<'_>, text: &str) {
        for c in text.chars() {
            app.handle_input(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("Omelet", 10), "Omelet");
        assert_eq!(truncate_name("Omelet Rice", 6), "Omele…");
        assert_eq!(truncate_name("Omelet", 1), "…");
    }

    #[test]
    fn test_cycle_wraps_through_all() {
        let options = [1, 2, 3];
        assert_eq!(cycle(&options, None), Some(1));
        assert_eq!(cycle(&options, Some(&1)), Some(2));
        assert_eq!(cycle(&options, Some(&3)), None);
    }

    #[test]
    fn test_typing_and_enter_locks_ingredient() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Recipes);

        type_text(&mut app, "egg");
        assert_eq!(app.session().filter().text, "egg");

        app.handle_input(key(KeyCode::Enter)).unwrap();
        assert_eq!(app.session().filter().selected, ["egg"]);
        assert_eq!(app.session().filter().text, "");
        assert_eq!(app.session().results().len(), 1);
    }

    #[test]
    fn test_ctrl_a_locks_highlighted_ingredient() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Recipes);

        app.handle_input(key(KeyCode::Right)).unwrap();
        app.handle_input(ctrl('a')).unwrap();
        assert_eq!(app.session().filter().selected, ["Milk"]);

        app.handle_input(key(KeyCode::Delete)).unwrap();
        assert!(app.session().filter().selected.is_empty());
    }

    #[test]
    fn test_tab_switches_mode_and_resets() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Recipes);
        type_text(&mut app, "milk");
        app.handle_input(key(KeyCode::F(2))).unwrap();

        app.handle_input(key(KeyCode::Tab)).unwrap();
        assert_eq!(app.session().mode(), Mode::Goods);
        assert!(app.session().filter().is_default());
    }

    #[test]
    fn test_filter_keys_respect_mode() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Goods);

        // Category and effect do not apply to goods
        app.handle_input(key(KeyCode::F(2))).unwrap();
        app.handle_input(key(KeyCode::F(3))).unwrap();
        assert_eq!(app.session().filter().category, None);
        assert_eq!(app.session().filter().effect_category, None);

        app.handle_input(key(KeyCode::F(4))).unwrap();
        assert_eq!(app.session().filter().windmill_color, Some(WindmillColor::Red));
    }

    #[test]
    fn test_sort_key_cycles() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Recipes);

        app.handle_input(key(KeyCode::F(5))).unwrap();
        assert_eq!(app.session().filter().sort_order, SortOrder::Ascending);
        app.handle_input(key(KeyCode::F(5))).unwrap();
        assert_eq!(app.session().filter().sort_order, SortOrder::Descending);
        app.handle_input(key(KeyCode::F(5))).unwrap();
        assert_eq!(app.session().filter().sort_order, SortOrder::Unsorted);
    }

    #[test]
    fn test_escape_clears_text_then_quits() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::All);
        type_text(&mut app, "b");

        assert!(!app.handle_input(key(KeyCode::Esc)).unwrap());
        assert_eq!(app.session().filter().text, "");
        assert!(app.handle_input(key(KeyCode::Esc)).unwrap());
        assert!(app.handle_input(ctrl('c')).unwrap());
    }

    #[test]
    fn test_cursor_stays_within_results() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::All);
        for _ in 0..10 {
            app.handle_input(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(app.cursor, 2);

        type_text(&mut app, "omelet");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn test_delete_removes_picked_lock() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Recipes);
        for ingredient in ["egg", "milk", "sugar"] {
            type_text(&mut app, ingredient);
            app.handle_input(key(KeyCode::Enter)).unwrap();
        }
        assert_eq!(app.lock_cursor, 2);

        app.handle_input(shift(KeyCode::Left)).unwrap();
        app.handle_input(key(KeyCode::Delete)).unwrap();
        assert_eq!(app.session().filter().selected, ["egg", "sugar"]);

        // Cursor cannot run past the remaining badges
        for _ in 0..5 {
            app.handle_input(shift(KeyCode::Right)).unwrap();
        }
        assert_eq!(app.lock_cursor, 1);
        app.handle_input(key(KeyCode::Delete)).unwrap();
        assert_eq!(app.session().filter().selected, ["egg"]);
    }

    #[test]
    fn test_summary_shown_with_hint() {
        let catalog = catalog();
        let mut app = App::new(&catalog, Mode::Recipes);

        let lines = app.summary_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), " Showing all 2 recipes");
        assert!(line_text(&lines[1]).contains("Press Enter"));

        type_text(&mut app, "egg");
        let lines = app.summary_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), " 1 recipe found");
    }
}
