//! HTML rendering of the transfer table and its page.
//!
//! Rendering is pure: it reads transfers and produces markup, nothing else.
//! The table layout follows the dashboard example: a caption line, then a
//! table with identical header and footer rows (ID, Asset, Amount) and one
//! body row per transfer with abbreviated id and asset.

use crate::error::MountError;
use crate::types::Transfer;
use std::fmt::Write;

pub const CAPTION: &str = "List of transfers";
pub const COLUMNS: [&str; 3] = ["ID", "Asset", "Amount"];
pub const PAGE_TITLE: &str = "Transfers";

/// Characters of the transfer id shown in the ID column
pub const ID_PREFIX_CHARS: usize = 6;
/// Characters of the asset id shown in the Asset column
pub const ASSET_PREFIX_CHARS: usize = 2;

/// Display values for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRow {
    pub id: String,
    pub asset: String,
    pub amount: String,
}

impl TransferRow {
    pub fn from_transfer(transfer: &Transfer) -> Self {
        Self {
            id: prefix(&transfer.id, ID_PREFIX_CHARS).to_string(),
            asset: prefix(&transfer.asset_id, ASSET_PREFIX_CHARS).to_string(),
            amount: transfer.amount.to_string(),
        }
    }
}

pub fn rows(transfers: &[Transfer]) -> Vec<TransferRow> {
    transfers.iter().map(TransferRow::from_transfer).collect()
}

/// First `n` characters of `s` (Unicode scalar values, not bytes).
pub fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn label_row(out: &mut String) {
    out.push_str("<tr>");
    for label in COLUMNS {
        let _ = write!(out, "<th>{}</th>", label);
    }
    out.push_str("</tr>");
}

/// Render the component markup for the given transfers.
pub fn render_table(transfers: &[Transfer]) -> String {
    let mut out = String::new();
    let _ = write!(out, "<div><div>{}</div><table>", CAPTION);

    out.push_str("<thead>");
    label_row(&mut out);
    out.push_str("</thead><tfoot>");
    label_row(&mut out);
    out.push_str("</tfoot><tbody>");

    for row in rows(transfers) {
        let _ = write!(
            out,
            "<tr><th>{}</th><td>{}</td><td>{}</td></tr>",
            escape_html(&row.id),
            escape_html(&row.asset),
            escape_html(&row.amount),
        );
    }

    out.push_str("</tbody></table></div>");
    out
}

/// The element the component is mounted into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
}

impl Container {
    /// Resolve an id selector such as `#transfer-list`.
    pub fn from_selector(selector: &str) -> Result<Self, MountError> {
        let id = selector
            .trim()
            .strip_prefix('#')
            .filter(|id| {
                !id.is_empty()
                    && id
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            })
            .ok_or_else(|| MountError::UnsupportedSelector(selector.to_string()))?;
        Ok(Self { id: id.to_string() })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Place `content` as the sole child of this container.
    pub fn mount(&self, content: &str) -> String {
        format!("<div id=\"{}\">{}</div>", escape_html(&self.id), content)
    }
}

/// A standalone HTML document holding the mounted component.
pub fn render_page(container: &Container, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        PAGE_TITLE,
        container.mount(content)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_TABLE: &str = "<div><div>List of transfers</div><table>\
        <thead><tr><th>ID</th><th>Asset</th><th>Amount</th></tr></thead>\
        <tfoot><tr><th>ID</th><th>Asset</th><th>Amount</th></tr></tfoot>\
        <tbody></tbody></table></div>";

    #[test]
    fn test_render_table_empty_has_header_and_footer_only() {
        assert_eq!(render_table(&[]), EMPTY_TABLE);
    }

    #[test]
    fn test_render_table_single_row() {
        let transfers = vec![Transfer::new("abc123", "c", "r", 5u64, "XY9988")];
        let html = render_table(&transfers);
        assert!(html.contains("<tbody><tr><th>abc123</th><td>XY</td><td>5</td></tr></tbody>"));
    }

    #[test]
    fn test_render_table_row_per_transfer_in_order() {
        let transfers = vec![
            Transfer::new("1000000001", "c", "r", 1u64, "aa"),
            Transfer::new("1000000002", "c", "r", 2u64, "bb"),
        ];
        let html = render_table(&transfers);
        assert_eq!(html.matches("<tr>").count(), 4);
        let first = html.find("<td>aa</td>").unwrap();
        let second = html.find("<td>bb</td>").unwrap();
        assert!(first < second);
        assert!(html.contains("<th>100000</th>"));
    }

    #[test]
    fn test_render_table_escapes_markup() {
        let transfers = vec![Transfer::new("<b>", "c", "r", 1u64, "&x")];
        let html = render_table(&transfers);
        assert!(html.contains("<th>&lt;b&gt;</th>"));
        assert!(html.contains("<td>&amp;x</td>"));
    }

    #[test]
    fn test_transfer_row_short_values_unchanged() {
        let row = TransferRow::from_transfer(&Transfer::new("7", "c", "r", 0u64, "a"));
        assert_eq!(row.id, "7");
        assert_eq!(row.asset, "a");
        assert_eq!(row.amount, "0");
    }

    #[test]
    fn test_prefix_counts_chars() {
        assert_eq!(prefix("héllo wörld", 6), "héllo ");
        assert_eq!(prefix("ab", 6), "ab");
        assert_eq!(prefix("", 2), "");
    }

    #[test]
    fn test_container_from_selector() {
        let container = Container::from_selector("#transfer-list").unwrap();
        assert_eq!(container.id(), "transfer-list");
    }

    #[test]
    fn test_container_rejects_non_id_selectors() {
        for selector in [".transfer-list", "#", "div", "#a b", "#a>b", ""] {
            assert_eq!(
                Container::from_selector(selector),
                Err(MountError::UnsupportedSelector(selector.to_string())),
                "selector {selector:?}"
            );
        }
    }

    #[test]
    fn test_mount_wraps_content() {
        let container = Container::from_selector("#transfer-list").unwrap();
        assert_eq!(container.mount("<p>x</p>"), "<div id=\"transfer-list\"><p>x</p></div>");
    }

    #[test]
    fn test_render_page_contains_mounted_table() {
        let container = Container::from_selector("#transfer-list").unwrap();
        let page = render_page(&container, EMPTY_TABLE);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Transfers</title>"));
        assert!(page.contains(&format!("<div id=\"transfer-list\">{}</div>", EMPTY_TABLE)));
    }
}
