//! Column mapping for the header row of an export section
//!
//! ForeFlight pads every row with trailing empty columns, so blank header
//! cells are ignored and the first occurrence of a name wins.

use crate::{Error, Result};
use csv::StringRecord;
use std::collections::HashMap;

/// Column name to index mapping for one section
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Section the header belongs to (for error messages)
    pub section: String,

    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Build the mapping from a header row
    pub fn analyze(section: &str, headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().trim_start_matches('\u{feff}').trim();
            if column_name.is_empty() {
                continue;
            }
            name_to_index
                .entry(column_name.to_string())
                .or_insert(index);
        }

        ColumnMapping {
            section: section.to_string(),
            name_to_index,
        }
    }

    /// Fail with `MissingColumn` on the first required column that is absent
    pub fn require(&self, columns: &[&str]) -> Result<()> {
        match columns.iter().find(|column| !self.has_column(column)) {
            Some(column) => Err(Error::missing_column(&self.section, *column)),
            None => Ok(()),
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Number of named columns
    pub fn column_count(&self) -> usize {
        self.name_to_index.len()
    }
}
