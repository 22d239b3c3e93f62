//! Literal item tables for the built-in generations.

mod gen1;
mod gen2;

use crate::generation::Generation;

/// Highest index either built-in generation declares. Both formats store
/// the item as a single byte.
pub(crate) const BUILTIN_MAX_INDEX: u16 = 0xFF;

pub(crate) struct ItemDef {
    pub(crate) index: u16,
    pub(crate) name: &'static str,
}

pub(crate) fn builtin_items(generation: Generation) -> &'static [ItemDef] {
    match generation {
        Generation::Gen1 => gen1::GEN1_ITEMS,
        Generation::Gen2 => gen2::GEN2_ITEMS,
    }
}
