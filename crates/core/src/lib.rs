//! Domain records and view state for the Ice and Fire table browser.
//!
//! This crate is free of I/O. It owns:
//! - the record types returned by the remote API ([`domain`]),
//! - the per-category collections and their fetch lifecycle ([`store`]),
//! - the table view state: columns, sorting, filtering, paging ([`table`]),
//! - the lord-name resolution cache ([`resolver`]).
//!
//! Network calls live in `maester-api`; the terminal frontend in `maester-cli`
//! drives both and feeds completed fetches back into the store.

pub mod domain;
pub mod resolver;
pub mod store;
pub mod table;

pub use domain::{Book, Category, Character, House};
pub use resolver::{ResolutionState, ResolverCache};
pub use store::{Collection, FetchStatus, ResourceStore};
pub use table::{Column, ColumnId, PageIndex, SortOrder, TableView, collection_rows, columns};
