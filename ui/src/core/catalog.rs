//! Language catalog: the code → display-name table offered in the selectors.
//!
//! The bundled table lives in `assets/languages.json` and is embedded at
//! compile time. Entry order is the file order; it drives option order.

use serde_json::{Map, Value};
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/languages.json"
));

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("language table is not a JSON object: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("display name for `{code}` is not a string")]
    InvalidName { code: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageCatalog {
    entries: Vec<Language>,
}

impl LanguageCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(code, name)` pairs. A repeated code keeps its first
    /// position and takes the last name.
    pub fn from_pairs<I, C, N>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let mut entries: Vec<Language> = Vec::new();
        for (code, name) in pairs {
            let code = code.into();
            let name = name.into();
            match entries.iter_mut().find(|entry| entry.code == code) {
                Some(existing) => existing.name = name,
                None => entries.push(Language { code, name }),
            }
        }
        Self { entries }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let table: Map<String, Value> = serde_json::from_str(raw)?;
        let mut pairs = Vec::with_capacity(table.len());
        for (code, value) in table {
            match value {
                Value::String(name) => pairs.push((code, name)),
                _ => return Err(CatalogError::InvalidName { code }),
            }
        }
        Ok(Self::from_pairs(pairs))
    }

    /// The table shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Language> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
    }
}
