use std::sync::OnceLock;

use crate::error::{CoreError, CoreErrorCode};
use crate::generation::Generation;
use crate::table::{Entries, ItemEntry, ItemTable};

static BUILTIN: OnceLock<ItemRegistry> = OnceLock::new();

/// Both generations' item tables behind one lookup surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRegistry {
    gen1: ItemTable,
    gen2: ItemTable,
}

impl ItemRegistry {
    /// Build and validate the built-in tables.
    pub fn load_builtin() -> Result<Self, CoreError> {
        let gen1 = ItemTable::builtin(Generation::Gen1)?;
        let gen2 = ItemTable::builtin(Generation::Gen2)?;
        Self::from_tables(gen1, gen2)
    }

    /// Shared built-in registry. The first caller validates the tables;
    /// everyone else waits for that and then reads without locking.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in tables fail validation.
    pub fn builtin() -> &'static ItemRegistry {
        BUILTIN.get_or_init(|| match Self::load_builtin() {
            Ok(registry) => registry,
            Err(err) => panic!("built-in item tables are invalid: {err}"),
        })
    }

    pub fn from_tables(gen1: ItemTable, gen2: ItemTable) -> Result<Self, CoreError> {
        for (expected, table) in [(Generation::Gen1, &gen1), (Generation::Gen2, &gen2)] {
            if table.generation() != expected {
                return Err(CoreError::new(
                    CoreErrorCode::GenerationMismatch,
                    format!(
                        "expected a {expected} table, got one for {}",
                        table.generation()
                    ),
                ));
            }
        }
        Ok(Self { gen1, gen2 })
    }

    pub fn generations(&self) -> [Generation; 2] {
        Generation::ALL
    }

    pub fn table(&self, generation: Generation) -> &ItemTable {
        match generation {
            Generation::Gen1 => &self.gen1,
            Generation::Gen2 => &self.gen2,
        }
    }

    pub fn max_index(&self, generation: Generation) -> u8 {
        self.table(generation).max_index()
    }

    pub fn contains(&self, generation: Generation, name: &str) -> bool {
        self.table(generation).contains(name)
    }

    pub fn index_of(&self, generation: Generation, name: &str) -> Result<u8, CoreError> {
        self.table(generation).index_of(name)
    }

    pub fn name_of(&self, generation: Generation, index: usize) -> Result<&str, CoreError> {
        self.table(generation).name_of(index)
    }

    pub fn resolve(&self, generation: Generation, query: &str) -> Result<ItemEntry<'_>, CoreError> {
        self.table(generation).resolve(query)
    }

    pub fn all_entries(&self, generation: Generation) -> Entries<'_> {
        self.table(generation).entries()
    }
}
