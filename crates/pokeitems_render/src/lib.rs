use std::fmt::Write as _;

use pokeitems_core::{Generation, ItemEntry, ItemTable};
use serde_json::{Map as JsonMap, Value as JsonValue};

const INDEX_COL_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    pub hide_placeholders: bool,
}

pub fn render_table_json(table: &ItemTable, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(table_json(table)),
    }
}

pub fn render_entry_json(generation: Generation, entry: &ItemEntry<'_>) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "generation".to_string(),
        JsonValue::from(generation.number()),
    );
    out.extend(entry_json(entry));
    JsonValue::Object(out)
}

pub fn render_table_text(table: &ItemTable) -> String {
    render_table_text_with_options(table, TextRenderOptions::default())
}

pub fn render_table_text_with_options(table: &ItemTable, options: TextRenderOptions) -> String {
    let shown: Vec<ItemEntry<'_>> = table
        .entries()
        .filter(|entry| !(options.hide_placeholders && entry.is_placeholder()))
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{} items ({})", table.generation(), shown.len());
    for entry in &shown {
        let _ = writeln!(out, "{}", format_entry_line(entry));
    }
    out
}

pub fn format_entry_line(entry: &ItemEntry<'_>) -> String {
    format!(
        "0x{:02X}  {:>width$}  {}",
        entry.index,
        entry.index,
        entry.name,
        width = INDEX_COL_WIDTH
    )
}

fn table_json(table: &ItemTable) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert(
        "generation".to_string(),
        JsonValue::from(table.generation().number()),
    );
    out.insert("max_index".to_string(), JsonValue::from(table.max_index()));
    out.insert("count".to_string(), JsonValue::from(table.len()));
    out.insert(
        "entries".to_string(),
        JsonValue::Array(
            table
                .entries()
                .map(|entry| JsonValue::Object(entry_json(&entry)))
                .collect(),
        ),
    );
    out
}

fn entry_json(entry: &ItemEntry<'_>) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();
    out.insert("index".to_string(), JsonValue::from(entry.index));
    out.insert("name".to_string(), JsonValue::String(entry.name.to_string()));
    out
}
