use std::collections::HashMap;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreErrorCode};
use crate::generation::Generation;

/// Largest index the on-disk formats can hold.
pub const MAX_STORABLE_INDEX: u16 = u8::MAX as u16;

const NO_ITEM_NAME: &str = "noItem";
const PLACEHOLDER_PREFIXES: [&str; 3] = ["unused", "questionMark", "teruSama"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemEntry<'a> {
    pub index: u8,
    pub name: &'a str,
}

impl ItemEntry<'_> {
    /// True for `noItem` and the numbered `unusedN`, `questionMarkN` and
    /// `teruSamaN` slots. These carry no item but must keep their index.
    pub fn is_placeholder(&self) -> bool {
        is_placeholder_name(self.name)
    }
}

pub fn is_placeholder_name(name: &str) -> bool {
    if name == NO_ITEM_NAME {
        return true;
    }
    PLACEHOLDER_PREFIXES.iter().any(|&prefix| {
        name.strip_prefix(prefix)
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
    })
}

/// Validated, immutable item table for one generation.
///
/// `names[i]` is the item at index `i`; the vector always covers
/// `0..=max_index` with no holes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTable {
    generation: Generation,
    max_index: u8,
    names: Vec<String>,
    by_name: HashMap<String, u8>,
}

impl ItemTable {
    pub fn new<I, S>(generation: Generation, max_index: u16, entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        match Self::validate(generation, max_index, entries) {
            Ok(table) => {
                tracing::debug!(
                    generation = %generation,
                    entries = table.len(),
                    "item table validated"
                );
                Ok(table)
            }
            Err(err) => {
                tracing::warn!(
                    generation = %generation,
                    code = ?err.code,
                    "rejected item table: {}",
                    err.message
                );
                Err(err)
            }
        }
    }

    fn validate<I, S>(generation: Generation, max_index: u16, entries: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        let max_index = u8::try_from(max_index).map_err(|_| {
            CoreError::new(
                CoreErrorCode::IndexOverflow,
                format!(
                    "{generation} declares max index {max_index}, above {MAX_STORABLE_INDEX}"
                ),
            )
        })?;

        let mut slots: Vec<Option<String>> = vec![None; usize::from(max_index) + 1];
        let mut by_name = HashMap::with_capacity(slots.len());

        for (name, index) in entries {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(CoreError::new(
                    CoreErrorCode::InvalidName,
                    format!("{generation} index {index} has an empty name"),
                ));
            }
            let Ok(narrow) = u8::try_from(index) else {
                return Err(CoreError::new(
                    CoreErrorCode::IndexOverflow,
                    format!("index {index} for '{name}' does not fit in 8 bits"),
                ));
            };
            if narrow > max_index {
                return Err(CoreError::new(
                    CoreErrorCode::IndexOverflow,
                    format!(
                        "index {index} for '{name}' is outside {generation} range 0..={max_index}"
                    ),
                ));
            }

            let slot = &mut slots[usize::from(narrow)];
            if let Some(existing) = slot.as_ref() {
                return Err(CoreError::new(
                    CoreErrorCode::DuplicateIndex,
                    format!("{generation} index {index} is used by both '{existing}' and '{name}'"),
                ));
            }
            if let Some(previous) = by_name.insert(name.clone(), narrow) {
                return Err(CoreError::new(
                    CoreErrorCode::DuplicateName,
                    format!("{generation} defines '{name}' at both {previous} and {index}"),
                ));
            }
            *slot = Some(name);
        }

        let mut names = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            let Some(name) = slot else {
                return Err(CoreError::new(
                    CoreErrorCode::IndexGap,
                    format!("{generation} has no item at index {index}"),
                ));
            };
            names.push(name);
        }

        Ok(Self {
            generation,
            max_index,
            names,
            by_name,
        })
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn max_index(&self) -> u8 {
        self.max_index
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Result<u8, CoreError> {
        self.by_name.get(name).copied().ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::UnknownItemName,
                format!("'{name}' is not a {} item", self.generation),
            )
        })
    }

    pub fn name_of(&self, index: usize) -> Result<&str, CoreError> {
        if index > usize::from(self.max_index) {
            return Err(CoreError::new(
                CoreErrorCode::IndexOutOfRange,
                format!(
                    "index {index} is outside {} range 0..={}",
                    self.generation, self.max_index
                ),
            ));
        }
        self.names.get(index).map(String::as_str).ok_or_else(|| {
            CoreError::new(
                CoreErrorCode::UndefinedIndex,
                format!("{} table has no name at index {index}", self.generation),
            )
        })
    }

    /// Looser lookup for names spelled the way other tools write them
    /// (`CLEAR_BELL`, `clear-bell`, `Clear Bell`). Case and the separators
    /// `_`, `-` and space are ignored.
    pub fn resolve(&self, query: &str) -> Result<ItemEntry<'_>, CoreError> {
        if let Some(&index) = self.by_name.get(query) {
            return Ok(self.entry_at(index));
        }

        let wanted = fold_name(query);
        let mut matches = self.entries().filter(|entry| fold_name(entry.name) == wanted);
        let Some(first) = matches.next() else {
            return Err(CoreError::new(
                CoreErrorCode::UnknownItemName,
                format!("'{query}' does not match any {} item", self.generation),
            ));
        };
        if let Some(second) = matches.next() {
            return Err(CoreError::new(
                CoreErrorCode::AmbiguousItemName,
                format!(
                    "'{query}' matches both '{}' and '{}' in {}",
                    first.name, second.name, self.generation
                ),
            ));
        }
        Ok(first)
    }

    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.names.iter().enumerate(),
        }
    }

    fn entry_at(&self, index: u8) -> ItemEntry<'_> {
        ItemEntry {
            index,
            name: &self.names[usize::from(index)],
        }
    }
}

fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Ascending-index walk over a table. Cloning restarts from the clone
/// point without touching the table.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, String>>,
}

// A validated table has at most 256 slots, so positions always fit a u8.
fn to_entry<'a>((index, name): (usize, &'a String)) -> ItemEntry<'a> {
    ItemEntry {
        index: index as u8,
        name: name.as_str(),
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = ItemEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(to_entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(to_entry)
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

impl<'a> IntoIterator for &'a ItemTable {
    type Item = ItemEntry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
