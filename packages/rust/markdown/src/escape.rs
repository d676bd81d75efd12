//! Escaping for text placed outside code fences.

/// Characters that can start or alter inline formatting.
const SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '~', '&'];

/// Backslash-escape Markdown-significant characters for use in headings and
/// other inline text. Line breaks become spaces.
pub fn escape_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\n' || ch == '\r' {
            out.push(' ');
            continue;
        }
        if SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Make `text` safe inside `<!-- ... -->`.
pub fn comment_safe(text: &str) -> String {
    text.replace("-->", "--&gt;")
}

/// An ATX heading of the given level with escaped text.
pub fn heading(level: u8, text: &str) -> String {
    format!("{} {}", "#".repeat(usize::from(level.max(1))), escape_inline(text))
}
