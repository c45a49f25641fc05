//! Literal rendering of server-supplied text.
//!
//! Names, descriptions, HTML content and server messages are shown as the
//! characters they contain. Tabs become spaces; every other control character
//! (ESC and BEL included) is written as `\u{..}` so content cannot drive the
//! terminal.

/// Splits `content` into display lines. A trailing `\r` per line is dropped.
pub fn literal_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| escape_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

/// Single-line form of `literal_lines`, for names, descriptions and messages.
pub fn literal_text(content: &str) -> String {
    literal_lines(content).join(" ")
}

fn escape_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\t' => out.push_str("    "),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
