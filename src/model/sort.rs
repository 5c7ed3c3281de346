//! Sorted view over a list model
//!
//! `SortProxy` keeps a proxy-row to source-row mapping. It never copies
//! source data; it only reads the sort role while sorting.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_provider::DataLocale;
use tracing::{debug, warn};

use super::{ListModel, ModelIndex, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Sensitive,
    Insensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// How a [`SortProxy`] orders rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    /// Role whose text is compared
    pub role: Role,
    pub case_sensitivity: CaseSensitivity,
    /// Compare with Unicode collation (root locale) instead of code points
    pub locale_aware: bool,
    pub order: SortOrder,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            role: Role::DISPLAY,
            case_sensitivity: CaseSensitivity::Sensitive,
            locale_aware: false,
            order: SortOrder::Ascending,
        }
    }
}

impl SortOptions {
    /// Build the comparator for these options
    pub fn comparator(&self) -> Comparator {
        let collator = if self.locale_aware {
            build_collator(self.case_sensitivity)
        } else {
            None
        };
        Comparator {
            options: *self,
            collator,
        }
    }

    /// Compare two cell texts under these options
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.comparator().compare(a, b)
    }
}

fn build_collator(case_sensitivity: CaseSensitivity) -> Option<Collator> {
    let mut options = CollatorOptions::new();
    // Secondary strength ignores case but still orders accents
    options.strength = Some(match case_sensitivity {
        CaseSensitivity::Sensitive => Strength::Tertiary,
        CaseSensitivity::Insensitive => Strength::Secondary,
    });

    match Collator::try_new(&DataLocale::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            warn!(error = %e, "Collation unavailable, sorting by code point");
            None
        }
    }
}

/// Text comparison built from [`SortOptions`]
///
/// Holds the collator so a whole sort shares one instance.
pub struct Comparator {
    options: SortOptions,
    collator: Option<Collator>,
}

impl Comparator {
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ordering = match (&self.collator, self.options.case_sensitivity) {
            (Some(collator), _) => collator.compare(a, b),
            (None, CaseSensitivity::Sensitive) => a.cmp(b),
            // Equal folded keys keep their source order (stable sort)
            (None, CaseSensitivity::Insensitive) => fold(a).cmp(&fold(b)),
        };

        match self.options.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Proxy-to-source row mapping kept in sort order
#[derive(Debug, Clone, Default)]
pub struct SortProxy {
    options: SortOptions,
    sort_column: Option<usize>,
    mapping: Vec<usize>,
}

impl SortProxy {
    pub fn new(options: SortOptions) -> Self {
        Self {
            options,
            sort_column: None,
            mapping: Vec::new(),
        }
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Column last sorted on, if any
    pub fn sort_column(&self) -> Option<usize> {
        self.sort_column
    }

    /// Re-sort all top-level rows of `source` by `column`
    pub fn sort<M: ListModel + ?Sized>(&mut self, source: &M, column: usize) {
        let count = source.row_count(&ModelIndex::invalid());
        let keys: Vec<String> = (0..count)
            .map(|row| {
                source
                    .data(&ModelIndex::new(row, column), self.options.role)
                    .to_text()
            })
            .collect();

        let mut mapping: Vec<usize> = (0..count).collect();
        let comparator = self.options.comparator();
        mapping.sort_by(|&a, &b| comparator.compare(&keys[a], &keys[b]));

        debug!(rows = count, column, role = %self.options.role, "Sorted model rows");

        self.mapping = mapping;
        self.sort_column = Some(column);
    }

    /// Number of mapped rows
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Source rows in sorted order
    pub fn source_rows(&self) -> &[usize] {
        &self.mapping
    }

    /// Source index for a proxy row
    ///
    /// Rows outside the mapping pass through unchanged so the source applies
    /// its own bounds.
    pub fn map_to_source(&self, proxy_row: usize, column: usize) -> ModelIndex {
        let row = self.mapping.get(proxy_row).copied().unwrap_or(proxy_row);
        ModelIndex::new(row, column)
    }

    /// Proxy row currently showing `source_row`
    pub fn map_from_source(&self, source_row: usize) -> Option<usize> {
        self.mapping.iter().position(|&row| row == source_row)
    }
}
