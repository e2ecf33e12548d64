use unicode_width::UnicodeWidthStr;

use super::Cell;
use super::color::paint;

/// Align rows of cells into space-separated columns.
///
/// Widths are measured on the plain cell text and color is applied after
/// padding, so escape sequences never shift a column. The last column is
/// left unpadded.
pub fn format(rows: &[Vec<Cell>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(&cell.text));
        }
    }

    rows.iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            row.iter()
                .enumerate()
                .map(|(i, cell)| {
                    let painted = paint(&cell.text, cell.tone);
                    if i == last {
                        painted
                    } else {
                        let fill = widths[i].saturating_sub(display_width(&cell.text));
                        format!("{}{}", painted, " ".repeat(fill))
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Compute the terminal display width of a string.
///
/// Wide characters (CJK, emoji) count as 2 columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
