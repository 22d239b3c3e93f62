use std::collections::BTreeSet;
use std::thread;

use pokeitems_core::{CoreErrorCode, Generation, ItemRegistry, ItemTable};

fn registry() -> &'static ItemRegistry {
    ItemRegistry::builtin()
}

#[test]
fn gen1_potion_maps_both_ways() {
    let registry = registry();
    assert_eq!(registry.index_of(Generation::Gen1, "potion").unwrap(), 20);
    assert_eq!(registry.name_of(Generation::Gen1, 20).unwrap(), "potion");
}

#[test]
fn gen2_leftovers_maps_both_ways() {
    let registry = registry();
    assert_eq!(registry.index_of(Generation::Gen2, "leftovers").unwrap(), 146);
    assert_eq!(registry.name_of(Generation::Gen2, 146).unwrap(), "leftovers");
}

#[test]
fn crystal_only_items_are_plain_entries() {
    let registry = registry();
    assert_eq!(registry.index_of(Generation::Gen2, "clearBell").unwrap(), 70);
    assert_eq!(registry.index_of(Generation::Gen2, "gsBall").unwrap(), 115);
    assert_eq!(registry.index_of(Generation::Gen2, "blueCard").unwrap(), 116);
    assert_eq!(registry.index_of(Generation::Gen2, "eggTicket").unwrap(), 129);
}

#[test]
fn same_index_names_different_items_per_generation() {
    let registry = registry();
    assert_eq!(registry.name_of(Generation::Gen1, 18).unwrap(), "hyperPotion");
    assert_eq!(registry.name_of(Generation::Gen2, 18).unwrap(), "potion");
    assert_eq!(registry.index_of(Generation::Gen2, "potion").unwrap(), 18);
}

#[test]
fn every_name_round_trips_through_its_index() {
    let registry = registry();
    for generation in Generation::ALL {
        for entry in registry.all_entries(generation) {
            let index = registry.index_of(generation, entry.name).unwrap();
            assert_eq!(index, entry.index);
            assert_eq!(
                registry.name_of(generation, usize::from(index)).unwrap(),
                entry.name
            );
        }
    }
}

#[test]
fn every_index_in_range_round_trips_through_its_name() {
    let registry = registry();
    for generation in Generation::ALL {
        let max = usize::from(registry.max_index(generation));
        for index in 0..=max {
            let name = registry.name_of(generation, index).unwrap();
            let back = registry.index_of(generation, name).unwrap();
            assert_eq!(usize::from(back), index, "{generation} index {index} ({name})");
        }
    }
}

#[test]
fn all_entries_cover_the_full_range_in_order() {
    let registry = registry();
    for generation in Generation::ALL {
        assert_eq!(registry.max_index(generation), 255);

        let indices: Vec<u8> = registry.all_entries(generation).map(|e| e.index).collect();
        let expected: Vec<u8> = (0..=255).collect();
        assert_eq!(indices, expected);

        let unique: BTreeSet<u8> = indices.iter().copied().collect();
        assert_eq!(unique.len(), 256);
    }
}

#[test]
fn all_entries_is_restartable() {
    let registry = registry();
    let entries = registry.all_entries(Generation::Gen1);
    assert_eq!(entries.len(), 256);

    let first_pass: Vec<_> = entries.clone().collect();
    let second_pass: Vec<_> = entries.collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(
        registry.all_entries(Generation::Gen1).next_back().unwrap().name,
        "tm55"
    );
}

#[test]
fn gen2_only_name_is_unknown_in_gen1() {
    let err = registry()
        .index_of(Generation::Gen1, "leftovers")
        .expect_err("leftovers is not a Gen 1 item");
    assert_eq!(err.code, CoreErrorCode::UnknownItemName);
    assert!(!err.is_construction_error());
}

#[test]
fn lookups_are_case_sensitive() {
    let err = registry()
        .index_of(Generation::Gen1, "POTION")
        .expect_err("exact lookup must not fold case");
    assert_eq!(err.code, CoreErrorCode::UnknownItemName);
}

#[test]
fn index_256_is_out_of_range() {
    let err = registry()
        .name_of(Generation::Gen1, 256)
        .expect_err("256 is outside 0..=255");
    assert_eq!(err.code, CoreErrorCode::IndexOutOfRange);
}

#[test]
fn placeholders_keep_their_literal_slots() {
    let registry = registry();
    assert_eq!(registry.name_of(Generation::Gen1, 0).unwrap(), "noItem");
    assert_eq!(registry.name_of(Generation::Gen1, 44).unwrap(), "questionMark44");
    assert_eq!(registry.name_of(Generation::Gen1, 150).unwrap(), "unused150");
    assert_eq!(registry.name_of(Generation::Gen2, 25).unwrap(), "teruSama25");
    assert_eq!(registry.name_of(Generation::Gen2, 255).unwrap(), "unused255");

    let placeholders = registry
        .all_entries(Generation::Gen1)
        .filter(|e| e.is_placeholder())
        .count();
    // noItem, two ?????s and unused98..=unused195
    assert_eq!(placeholders, 1 + 2 + 98);
}

#[test]
fn machine_ranges_line_up() {
    let registry = registry();
    assert_eq!(registry.index_of(Generation::Gen1, "hm01").unwrap(), 196);
    assert_eq!(registry.index_of(Generation::Gen1, "tm01").unwrap(), 201);
    assert_eq!(registry.index_of(Generation::Gen1, "tm50").unwrap(), 250);
    assert_eq!(registry.index_of(Generation::Gen2, "tm01").unwrap(), 191);
    assert_eq!(registry.index_of(Generation::Gen2, "tm05").unwrap(), 196);
    assert_eq!(registry.index_of(Generation::Gen2, "tm29").unwrap(), 221);
    assert_eq!(registry.index_of(Generation::Gen2, "hm07").unwrap(), 249);
}

#[test]
fn resolve_accepts_constant_style_names() {
    let registry = registry();
    for query in ["CLEAR_BELL", "clear-bell", "Clear Bell", "clearBell"] {
        let entry = registry.resolve(Generation::Gen2, query).unwrap();
        assert_eq!(entry.name, "clearBell");
        assert_eq!(entry.index, 70);
    }
    assert_eq!(registry.resolve(Generation::Gen1, "SS_TICKET").unwrap().index, 63);

    let err = registry
        .resolve(Generation::Gen1, "CLEAR_BELL")
        .expect_err("clear bell does not exist in Gen 1");
    assert_eq!(err.code, CoreErrorCode::UnknownItemName);
}

#[test]
fn load_builtin_matches_shared_instance() {
    let loaded = ItemRegistry::load_builtin().expect("built-in tables should validate");
    assert_eq!(&loaded, ItemRegistry::builtin());
}

#[test]
fn builtin_is_initialized_once_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| ItemRegistry::builtin() as *const ItemRegistry as usize))
        .collect();
    let addresses: BTreeSet<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("reader thread panicked"))
        .collect();
    assert_eq!(addresses.len(), 1);
}

#[test]
fn from_tables_rejects_swapped_generations() {
    let gen1 = ItemTable::builtin(Generation::Gen1).unwrap();
    let gen2 = ItemTable::builtin(Generation::Gen2).unwrap();

    let err = ItemRegistry::from_tables(gen2, gen1).expect_err("tables are swapped");
    assert_eq!(err.code, CoreErrorCode::GenerationMismatch);
    assert!(err.is_construction_error());
}

#[test]
fn registry_is_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ItemRegistry>();
}
