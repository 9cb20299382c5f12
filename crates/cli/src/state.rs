//! Application state for mode management and table interaction.

use maester_core::{Category, Character, PageIndex, TableView, columns};

/// Top-level screen: the data table, or a full-screen character profile
/// replacing it.
#[derive(Clone, Debug)]
pub enum AppMode {
    Table,
    Profile(ProfileState),
}

/// Drill-down view of one character resource.
#[derive(Clone, Debug)]
pub struct ProfileState {
    /// Hyperlink the profile was opened from.
    pub url: String,
    /// The fetched record, once it arrives.
    pub character: Option<Character>,
    /// Fetch failure shown in place of the record.
    pub error: Option<String>,
}

impl ProfileState {
    pub fn loading(url: String) -> Self {
        Self {
            url,
            character: None,
            error: None,
        }
    }
}

/// Mutable application state driving rendering and input handling.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Active category; columns and rows always derive from this together.
    pub category: Category,
    /// Remote page of the active category.
    pub page: PageIndex,
    /// Sort and filter state over the active collection.
    pub view: TableView,
    /// Position within the visible (filtered, sorted) rows.
    pub selected_row: usize,
    /// Column targeted by sort toggling and filter editing.
    pub active_column: usize,
    /// Whether keystrokes currently edit the active column's filter.
    pub editing_filter: bool,
    pub mode: AppMode,
}

impl Default for AppState {
    fn default() -> Self {
        let category = Category::default();
        Self {
            category,
            page: PageIndex::default(),
            view: TableView::new(columns(category).len()),
            selected_row: 0,
            active_column: 0,
            editing_filter: false,
            mode: AppMode::Table,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column_count(&self) -> usize {
        columns(self.category).len()
    }

    /// Activates a category. Page, sort, filters, and selection reset in the
    /// same update so columns and rows swap atomically. Returns `false` when
    /// the category was already active.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.page.reset();
        self.view.reset(self.column_count());
        self.selected_row = 0;
        self.active_column = 0;
        self.editing_filter = false;
        true
    }

    /// Cycles the active column left to right, wrapping.
    pub fn next_column(&mut self) {
        self.active_column = (self.active_column + 1) % self.column_count();
    }

    pub fn open_profile(&mut self, url: String) {
        self.mode = AppMode::Profile(ProfileState::loading(url));
    }

    pub fn close_profile(&mut self) {
        self.mode = AppMode::Table;
    }

    pub fn in_profile(&self) -> bool {
        matches!(self.mode, AppMode::Profile(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maester_core::SortOrder;

    #[test]
    fn default_state_browses_houses_at_page_zero() {
        let state = AppState::new();
        assert_eq!(state.category, Category::Houses);
        assert!(state.page.at_floor());
        assert!(!state.in_profile());
    }

    #[test]
    fn category_switch_resets_page_sort_and_filters() {
        let mut state = AppState::new();
        state.page.advance();
        state.view.toggle_sort(1);
        state.view.push_filter_char(0, 'x');
        state.selected_row = 3;
        state.active_column = 2;

        assert!(state.select_category(Category::Books));
        assert!(state.page.at_floor());
        assert_eq!(state.view.sort(), None);
        assert_eq!(state.view.filter(0), "");
        assert_eq!(state.selected_row, 0);
        assert_eq!(state.active_column, 0);
    }

    #[test]
    fn reselecting_active_category_is_a_noop() {
        let mut state = AppState::new();
        state.page.advance();
        state.view.toggle_sort(0);

        assert!(!state.select_category(Category::Houses));
        assert!(!state.page.at_floor());
        assert_eq!(state.view.sort(), Some((0, SortOrder::Ascending)));
    }

    #[test]
    fn active_column_wraps() {
        let mut state = AppState::new();
        state.next_column();
        state.next_column();
        assert_eq!(state.active_column, 2);
        state.next_column();
        assert_eq!(state.active_column, 0);
    }

    #[test]
    fn profile_replaces_table_and_esc_returns() {
        let mut state = AppState::new();
        state.open_profile("https://example.com/characters/339".into());
        assert!(state.in_profile());

        state.close_profile();
        assert!(!state.in_profile());
    }
}
