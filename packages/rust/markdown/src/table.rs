//! GFM pipe tables.

/// Make a cell value safe inside a pipe table row.
pub fn escape_cell(value: &str) -> String {
    value
        .trim()
        .replace('|', r"\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}

/// Render a table with a header row. Rows are padded or truncated to the
/// header's width. Cell values are escaped here; pass them raw.
pub fn markdown_table(header: &[String], rows: &[Vec<String>]) -> String {
    let col_count = header.len();
    if col_count == 0 {
        return String::new();
    }

    let mut md = String::new();

    // Header row
    push_row(&mut md, header.iter().map(String::as_str), col_count);

    // Separator row
    md.push_str("| ");
    md.push_str(&vec!["---"; col_count].join(" | "));
    md.push_str(" |\n");

    for row in rows {
        push_row(&mut md, row.iter().map(String::as_str), col_count);
    }

    md
}

fn push_row<'a>(md: &mut String, cells: impl Iterator<Item = &'a str>, col_count: usize) {
    let mut cells: Vec<String> = cells.take(col_count).map(escape_cell).collect();
    cells.resize(col_count, String::new());

    md.push_str("| ");
    md.push_str(&cells.join(" | "));
    md.push_str(" |\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let md = markdown_table(
            &strings(&["name", "qty"]),
            &[strings(&["apple", "3"]), strings(&["pear", "5"])],
        );
        assert_eq!(
            md,
            "| name | qty |\n| --- | --- |\n| apple | 3 |\n| pear | 5 |\n"
        );
    }

    #[test]
    fn short_and_long_rows_are_normalized() {
        let md = markdown_table(
            &strings(&["a", "b", "c"]),
            &[strings(&["1"]), strings(&["1", "2", "3", "4"])],
        );
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[2], "| 1 |  |  |");
        assert_eq!(lines[3], "| 1 | 2 | 3 |");
    }

    #[test]
    fn cells_are_escaped() {
        assert_eq!(escape_cell("a|b"), r"a\|b");
        assert_eq!(escape_cell("line one\nline two"), "line one<br>line two");
        assert_eq!(escape_cell("  padded  "), "padded");
    }

    #[test]
    fn empty_header_renders_nothing() {
        assert_eq!(markdown_table(&[], &[strings(&["x"])]), "");
    }
}
