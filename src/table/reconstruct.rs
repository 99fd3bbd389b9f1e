// src/table/reconstruct.rs
//
// The rules page has no <table>: it is a flat run of divs. Header divs
// carry an extra class; every div (header or data) carries the broad one.
// Columns are recovered purely by position modulo the header count.

use super::raw_table::{Column, RawTable};
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashMap;
use tracing::{debug, instrument, trace, warn};

pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Config(format!("selector {css:?}: {e:?}")))
}

/// Text of an element when it holds exactly one node: that text node, or
/// recursively the single child element's text. Anything else is `None`.
fn single_string(el: ElementRef<'_>) -> Option<String> {
    let mut children = el.children();
    let only = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match only.value() {
        Node::Text(t) => Some(String::from(&**t)),
        Node::Element(_) => ElementRef::wrap(only).and_then(single_string),
        Node::Comment(c) => Some(String::from(&**c)),
        _ => None,
    }
}

/// Parse `html` and rebuild the table marked by the two selectors.
#[instrument(level = "debug", skip(html, header_sel, cell_sel), fields(bytes = html.len()))]
pub fn reconstruct(html: &str, header_sel: &Selector, cell_sel: &Selector) -> Result<RawTable> {
    let doc = Html::parse_document(html);

    let headers: Vec<Option<String>> = doc.select(header_sel).map(single_string).collect();
    debug!(count = headers.len(), ?headers, "header nodes");

    let cells = doc.select(cell_sel).map(single_string);
    reconstruct_from_cells(headers, cells)
}

/// Core of [`reconstruct`] over already-extracted node texts.
///
/// `cells` is every generic node in document order, headers included. A
/// cell whose text equals a header name is taken to be that header and
/// skipped; every other cell at position `i` lands in the column named by
/// header slot `i % H`, where `H` is the number of distinct header names.
pub fn reconstruct_from_cells<I>(headers: Vec<Option<String>>, cells: I) -> Result<RawTable>
where
    I: IntoIterator<Item = Option<String>>,
{
    // distinct header keys, first appearance wins
    let mut keys: Vec<Option<String>> = Vec::new();
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    for h in &headers {
        if !index.contains_key(h) {
            index.insert(h.clone(), keys.len());
            keys.push(h.clone());
        }
    }

    let h = keys.len();
    if h == 0 {
        return Err(ScrapeError::Structural(
            "no header cells found; cannot assign columns".to_string(),
        ));
    }
    if h != headers.len() {
        warn!(
            slots = headers.len(),
            distinct = h,
            "duplicate header names collapse into one column"
        );
    }

    let mut data: Vec<Vec<Option<String>>> = vec![Vec::new(); h];
    for (i, cell) in cells.into_iter().enumerate() {
        if index.contains_key(&cell) {
            trace!(i, ?cell, "header node, skipped");
            continue;
        }
        let slot = &headers[i % h];
        let col = index[slot];
        if cell.is_none() {
            warn!(i, column = ?slot, "cell has no single text node");
        }
        trace!(i, column = ?slot, ?cell, "cell");
        data[col].push(cell);
    }

    let columns = keys
        .into_iter()
        .zip(data)
        .map(|(name, cells)| Column {
            name: name.unwrap_or_default(),
            cells,
        })
        .collect();

    let table = RawTable::new(columns)?;
    debug!(
        columns = table.column_count(),
        rows = table.row_count(),
        "table reconstructed"
    );
    Ok(table)
}
