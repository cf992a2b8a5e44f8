use std::collections::HashMap;

use serde::Serialize;

use crate::error::{DictError, Result};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,

    /// Empty when the language has no variant column.
    pub variant: String,
}

impl LanguageEntry {
    /// `Chinese (Mandarin)` for entries with a variant, plain `French` otherwise.
    pub fn description(&self) -> String {
        if self.variant.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.variant)
        }
    }
}

/// Languages known to the build, looked up by code.
///
/// Later rows replace earlier rows with the same code. `codes()` yields
/// each code once, in the order it first appeared in the table file.
#[derive(Debug, Default, Clone)]
pub struct LanguageTable {
    by_code: HashMap<String, LanguageEntry>,
    order: Vec<String>,
}

impl LanguageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: LanguageEntry) {
        if !self.by_code.contains_key(&entry.code) {
            self.order.push(entry.code.clone());
        }
        self.by_code.insert(entry.code.clone(), entry);
    }

    pub fn get(&self, code: &str) -> Option<&LanguageEntry> {
        self.by_code.get(code)
    }

    pub fn resolve(&self, code: &str) -> Result<&LanguageEntry> {
        self.get(code)
            .ok_or_else(|| DictError::UnknownLanguage(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
