//! Table view state: column schemas, sorting, filtering, and paging.
//!
//! The original page delegated sorting and filtering to a table library and
//! drove remote paging from a separate page counter. Both live here as plain
//! state: [`TableView`] derives the visible row order for the active
//! collection, and [`PageIndex`] drives which remote page is requested.

use crate::domain::{Book, Category, Character, House};
use crate::resolver::{self, ResolverCache};
use crate::store::ResourceStore;

/// Identity of a rendered column across all categories.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnId {
    Name,
    Words,
    CurrentLord,
    Authors,
    Pages,
    Gender,
    Aliases,
}

/// Descriptor for one rendered column.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub id: ColumnId,
    pub header: &'static str,
    /// Numeric columns sort by value instead of lexicographically.
    pub numeric: bool,
}

const HOUSE_COLUMNS: [Column; 3] = [
    Column {
        id: ColumnId::Name,
        header: "Name",
        numeric: false,
    },
    Column {
        id: ColumnId::Words,
        header: "Words",
        numeric: false,
    },
    Column {
        id: ColumnId::CurrentLord,
        header: "Current Lord",
        numeric: false,
    },
];

const BOOK_COLUMNS: [Column; 3] = [
    Column {
        id: ColumnId::Name,
        header: "Name",
        numeric: false,
    },
    Column {
        id: ColumnId::Authors,
        header: "Author",
        numeric: false,
    },
    Column {
        id: ColumnId::Pages,
        header: "Pages",
        numeric: true,
    },
];

const CHARACTER_COLUMNS: [Column; 3] = [
    Column {
        id: ColumnId::Name,
        header: "Name",
        numeric: false,
    },
    Column {
        id: ColumnId::Gender,
        header: "Gender",
        numeric: false,
    },
    Column {
        id: ColumnId::Aliases,
        header: "Aliases",
        numeric: false,
    },
];

/// Ordered column schema for a category.
pub fn columns(category: Category) -> &'static [Column] {
    match category {
        Category::Houses => &HOUSE_COLUMNS,
        Category::Books => &BOOK_COLUMNS,
        Category::Characters => &CHARACTER_COLUMNS,
    }
}

/// Projects a house into display cells, resolving the lord link through the
/// cache. An absent or unresolved link renders as "Unknown".
pub fn house_cells(house: &House, lords: &ResolverCache) -> Vec<String> {
    let lord = match &house.current_lord {
        Some(url) => lords.display(url).to_string(),
        None => resolver::UNKNOWN.to_string(),
    };
    vec![house.name.clone(), house.words.clone(), lord]
}

/// Projects a book into display cells. Authors render comma-joined.
pub fn book_cells(book: &Book) -> Vec<String> {
    vec![
        book.name.clone(),
        book.authors.join(", "),
        book.number_of_pages.to_string(),
    ]
}

/// Projects a character into display cells. Aliases render comma-joined.
pub fn character_cells(character: &Character) -> Vec<String> {
    vec![
        character.name.clone(),
        character.gender.clone(),
        character.aliases.join(", "),
    ]
}

/// All records of the active category's collection, projected to display
/// cells in column order.
pub fn collection_rows(
    category: Category,
    store: &ResourceStore,
    lords: &ResolverCache,
) -> Vec<Vec<String>> {
    match category {
        Category::Houses => store
            .houses()
            .items()
            .iter()
            .map(|house| house_cells(house, lords))
            .collect(),
        Category::Characters => store
            .characters()
            .items()
            .iter()
            .map(character_cells)
            .collect(),
        Category::Books => store.books().items().iter().map(book_cells).collect(),
    }
}

/// Direction of the single active sort.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Sort {
    column: usize,
    order: SortOrder,
}

/// Sorting and filtering state over the active collection.
///
/// Filters are per-column, case-insensitive substring matches. Sorting is
/// single-column with the tri-state cycle unsorted → ascending → descending
/// → unsorted. Both are reset when the active category changes.
#[derive(Clone, Debug)]
pub struct TableView {
    filters: Vec<String>,
    sort: Option<Sort>,
}

impl TableView {
    pub fn new(column_count: usize) -> Self {
        Self {
            filters: vec![String::new(); column_count],
            sort: None,
        }
    }

    /// Clears sort and filters for a fresh column schema.
    pub fn reset(&mut self, column_count: usize) {
        self.filters = vec![String::new(); column_count];
        self.sort = None;
    }

    /// Advances the tri-state sort cycle on the given column. Toggling a
    /// different column starts its cycle at ascending.
    pub fn toggle_sort(&mut self, column: usize) {
        self.sort = match self.sort {
            Some(Sort {
                column: current,
                order: SortOrder::Ascending,
            }) if current == column => Some(Sort {
                column,
                order: SortOrder::Descending,
            }),
            Some(Sort {
                column: current,
                order: SortOrder::Descending,
            }) if current == column => None,
            _ => Some(Sort {
                column,
                order: SortOrder::Ascending,
            }),
        };
    }

    /// Active sort as (column, order), if any.
    pub fn sort(&self) -> Option<(usize, SortOrder)> {
        self.sort.map(|s| (s.column, s.order))
    }

    pub fn filter(&self, column: usize) -> &str {
        self.filters.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn push_filter_char(&mut self, column: usize, ch: char) {
        if let Some(filter) = self.filters.get_mut(column) {
            filter.push(ch);
        }
    }

    pub fn pop_filter_char(&mut self, column: usize) {
        if let Some(filter) = self.filters.get_mut(column) {
            filter.pop();
        }
    }

    /// Indices of `rows` that survive the filters, in render order.
    ///
    /// Filtering runs before sorting. Without an active sort the surviving
    /// rows keep their insertion order.
    pub fn visible_rows(&self, rows: &[Vec<String>], schema: &[Column]) -> Vec<usize> {
        let lowered: Vec<String> = self.filters.iter().map(|f| f.to_lowercase()).collect();

        let mut visible: Vec<usize> = (0..rows.len())
            .filter(|&row| {
                lowered.iter().enumerate().all(|(column, needle)| {
                    needle.is_empty()
                        || rows[row]
                            .get(column)
                            .is_some_and(|cell| cell.to_lowercase().contains(needle))
                })
            })
            .collect();

        if let Some(Sort { column, order }) = self.sort {
            let numeric = schema.get(column).is_some_and(|c| c.numeric);
            visible.sort_by(|&a, &b| {
                let left = rows[a].get(column).map(String::as_str).unwrap_or("");
                let right = rows[b].get(column).map(String::as_str).unwrap_or("");
                let ordering = if numeric {
                    let left = left.parse::<u64>().unwrap_or(0);
                    let right = right.parse::<u64>().unwrap_or(0);
                    left.cmp(&right)
                } else {
                    left.to_lowercase().cmp(&right.to_lowercase())
                };
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            });
        }

        visible
    }
}

/// Zero-based counter driving which remote page is requested.
///
/// The floor is page 0: retreating from it is a no-op, and the UI disables
/// the Previous control there. Advancing is unconditional; a page past the
/// end of the remote data comes back as an empty collection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageIndex(u32);

impl PageIndex {
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }

    /// Steps back one page. Returns `false` at the floor, where nothing
    /// changes.
    pub fn retreat(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }

    pub fn at_floor(self) -> bool {
        self.0 == 0
    }

    /// The 1-based page number the remote API expects.
    pub fn wire_page(self) -> u32 {
        self.0 + 1
    }
}
