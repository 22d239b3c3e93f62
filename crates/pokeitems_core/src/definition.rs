//! Serializable table definitions.
//!
//! A definition is unvalidated input; `ItemTable::from_definition` is the
//! only way to turn one into something lookups can use.

use serde::{Deserialize, Serialize};

use crate::data::{BUILTIN_MAX_INDEX, builtin_items};
use crate::error::{CoreError, CoreErrorCode};
use crate::generation::Generation;
use crate::table::ItemTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDefinition {
    pub index: u16,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableDefinition {
    pub generation: Generation,
    pub max_index: u16,
    pub entries: Vec<EntryDefinition>,
}

impl TableDefinition {
    pub fn builtin(generation: Generation) -> Self {
        Self {
            generation,
            max_index: BUILTIN_MAX_INDEX,
            entries: builtin_items(generation)
                .iter()
                .map(|item| EntryDefinition {
                    index: item.index,
                    name: item.name.to_string(),
                })
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("invalid item table definition: {e}"),
            )
        })
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        serde_json::from_slice(bytes).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("invalid item table definition: {e}"),
            )
        })
    }

    pub fn to_json_string_pretty(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("failed to serialize item table definition: {e}"),
            )
        })
    }

    pub fn build(self) -> Result<ItemTable, CoreError> {
        ItemTable::from_definition(self)
    }
}

impl ItemTable {
    pub fn builtin(generation: Generation) -> Result<Self, CoreError> {
        let items = builtin_items(generation);
        Self::new(
            generation,
            BUILTIN_MAX_INDEX,
            items.iter().map(|item| (item.name, item.index)),
        )
    }

    pub fn from_definition(definition: TableDefinition) -> Result<Self, CoreError> {
        Self::new(
            definition.generation,
            definition.max_index,
            definition
                .entries
                .into_iter()
                .map(|entry| (entry.name, entry.index)),
        )
    }

    pub fn to_definition(&self) -> TableDefinition {
        TableDefinition {
            generation: self.generation(),
            max_index: u16::from(self.max_index()),
            entries: self
                .entries()
                .map(|entry| EntryDefinition {
                    index: u16::from(entry.index),
                    name: entry.name.to_string(),
                })
                .collect(),
        }
    }
}
