//! Record types returned by the Ice and Fire API.
//!
//! The remote resources are loosely shaped: any field may be absent or empty
//! on any given record. Every struct therefore deserializes with defaults so
//! a missing `authors` or `aliases` becomes an empty list rather than a
//! decode failure.

use serde::{Deserialize, Deserializer};

/// Data kind the browser is currently pointed at.
///
/// Exactly one category is active at a time. The lowercase display form
/// doubles as the remote collection path segment (`houses`, `characters`,
/// `books`).
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    Houses,
    Characters,
    Books,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Houses, Category::Characters, Category::Books];
}

/// A noble house. `current_lord` is a hyperlink to a character resource.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct House {
    pub url: String,
    pub name: String,
    pub words: String,
    /// Link to the ruling character. The API sends an empty string when the
    /// seat is vacant; that is normalized to `None` here.
    #[serde(deserialize_with = "empty_as_none")]
    pub current_lord: Option<String>,
}

/// A published book.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub url: String,
    pub name: String,
    pub authors: Vec<String>,
    pub number_of_pages: u64,
}

/// A person. Carries the extra fields shown on the profile screen.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub url: String,
    pub name: String,
    pub gender: String,
    pub aliases: Vec<String>,
    pub born: String,
    pub died: String,
    pub titles: Vec<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()))
}
