// src/core/html.rs
// Thin helpers over `scraper` so the page specs read as "table → rows → cells".
// Everything here is tolerant: absence comes back as None / empty.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

static TR: LazyLock<Selector> = LazyLock::new(|| css("tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| css("td"));

/// Compile a selector known at build time.
/// Panics on a malformed pattern, which is a programming error, not bad input.
pub fn css(pattern: &str) -> Selector {
    Selector::parse(pattern).unwrap_or_else(|e| panic!("bad selector {pattern:?}: {e}"))
}

pub fn parse(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Visible text of an element, whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

pub fn first_match<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}

/// All `<tr>` under the table, nested tables included.
pub fn rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    table.select(&TR).collect()
}

/// Text of every `<td>` under the row.
pub fn cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&TD).map(text_of).collect()
}

/// Nearest element named one of `names` that opens before `target` in
/// document order. Ancestors count, like a backward scan of the source.
pub fn preceding_element<'a>(doc: &'a Html, target: ElementRef<'a>, names: &[&str]) -> Option<ElementRef<'a>> {
    let mut nearest = None;
    for node in doc.tree.root().descendants() {
        if node.id() == target.id() {
            return nearest;
        }
        if let Some(el) = ElementRef::wrap(node) {
            if names.contains(&el.value().name()) {
                nearest = Some(el);
            }
        }
    }
    None
}
