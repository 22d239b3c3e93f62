use pokeitems_core::{Generation, ItemRegistry, ItemTable};
use pokeitems_render::{
    JsonStyle, TextRenderOptions, format_entry_line, render_entry_json, render_table_json,
    render_table_text, render_table_text_with_options,
};
use serde_json::json;

fn table(generation: Generation) -> &'static ItemTable {
    ItemRegistry::builtin().table(generation)
}

#[test]
fn table_json_uses_canonical_top_level_order() {
    let value = render_table_json(table(Generation::Gen1), JsonStyle::CanonicalV1);
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(keys, vec!["generation", "max_index", "count", "entries"]);
    assert_eq!(value["generation"], 1);
    assert_eq!(value["max_index"], 255);
    assert_eq!(value["count"], 256);
}

#[test]
fn table_json_lists_entries_in_index_order() {
    let value = render_table_json(table(Generation::Gen2), JsonStyle::CanonicalV1);
    let entries = value["entries"].as_array().expect("entries should be an array");

    assert_eq!(entries.len(), 256);
    assert_eq!(entries[146], json!({ "index": 146, "name": "leftovers" }));
    assert!(
        entries
            .iter()
            .enumerate()
            .all(|(i, e)| e["index"] == json!(i))
    );
}

#[test]
fn entry_json_carries_generation() {
    let registry = ItemRegistry::builtin();
    let entry = registry.resolve(Generation::Gen2, "CLEAR_BELL").unwrap();
    let value = render_entry_json(Generation::Gen2, &entry);

    assert_eq!(
        value,
        json!({ "generation": 2, "index": 70, "name": "clearBell" })
    );
}

#[test]
fn text_lists_every_entry_with_hex_and_decimal() {
    let text = render_table_text(table(Generation::Gen1));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Generation 1 items (256)");
    assert_eq!(lines.len(), 257);
    assert_eq!(lines[1], "0x00    0  noItem");
    assert_eq!(lines[21], "0x14   20  potion");
    assert_eq!(lines[256], "0xFF  255  tm55");
}

#[test]
fn text_can_hide_placeholders() {
    let options = TextRenderOptions {
        hide_placeholders: true,
    };
    let text = render_table_text_with_options(table(Generation::Gen1), options);

    assert!(text.starts_with("Generation 1 items (155)\n"));
    assert!(!text.contains("unused"));
    assert!(!text.contains("questionMark"));
    assert!(!text.contains("noItem"));
    assert!(text.contains("  masterBall\n"));
}

#[test]
fn entry_line_pads_decimal_index() {
    let registry = ItemRegistry::builtin();
    let entry = registry.resolve(Generation::Gen2, "leftovers").unwrap();
    assert_eq!(format_entry_line(&entry), "0x92  146  leftovers");
}
