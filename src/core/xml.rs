// src/core/xml.rs
//
// Minimal reader for the portal's fixed XML shape:
//
//   <rows>
//     <row id="..."><cell>..</cell><cell>..</cell>...</row>
//     ...
//   </rows>
//
// Tag-block scanning, no attributes kept, no nesting beyond row/cell.
// A document with exactly one <row> is just a one-iteration scan here,
// so the single-row-instead-of-array quirk of the upstream handler
// never becomes a special case.

use crate::core::sanitize::unescape_entities;

/// Extract all `<row>` blocks and split each into its `<cell>` texts.
/// Cell text is entity-unescaped; CDATA sections are unwrapped.
pub fn parse_rows(doc: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some(block) = next_tag_block(doc, "row", pos) {
        let inner = &doc[block.inner_start..block.inner_end];
        rows.push(parse_cells(inner));
        pos = block.resume;
    }
    rows
}

fn parse_cells(row_inner: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some(block) = next_tag_block(row_inner, "cell", pos) {
        let raw = &row_inner[block.inner_start..block.inner_end];
        cells.push(cell_text(raw));
        pos = block.resume;
    }
    cells
}

/// One `<tag ...>inner</tag>` occurrence. `resume` is where the scan for
/// the next sibling starts (right after the closing tag, or after the
/// `/>` of a self-closing tag).
pub struct TagBlock {
    pub inner_start: usize,
    pub inner_end: usize,
    pub resume: usize,
}

/// Find the next `<tag ...>` block at or after `from`. Self-closing tags
/// (`<cell/>`) yield an empty inner range.
pub fn next_tag_block(s: &str, tag: &str, from: usize) -> Option<TagBlock> {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");

    let rest = s.get(from..)?;
    let mut at = from + rest.find(&open)?;
    loop {
        // Reject prefix matches like <rowset> for <row>
        let after = at + open.len();
        match s[after..].chars().next() {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => break,
            Some(_) => {
                let rest = s.get(after..)?;
                at = after + rest.find(&open)?;
            }
            None => return None,
        }
    }

    let open_end = s[at..].find('>')? + at + 1;
    if s[..open_end].ends_with("/>") {
        return Some(TagBlock { inner_start: open_end, inner_end: open_end, resume: open_end });
    }
    let close_at = s[open_end..].find(&close)? + open_end;
    Some(TagBlock {
        inner_start: open_end,
        inner_end: close_at,
        resume: close_at + close.len(),
    })
}

fn cell_text(raw: &str) -> String {
    let t = raw.trim();
    let unwrapped = t
        .strip_prefix("<![CDATA[")
        .and_then(|x| x.strip_suffix("]]>"))
        .unwrap_or(t);
    unescape_entities(unwrapped).trim().to_string()
}
