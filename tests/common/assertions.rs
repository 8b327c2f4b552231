//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Assert text is a well-formed brace literal with `rows` lines of
/// `row_bytes` tokens each.
pub fn assert_literal_shape(text: &str, rows: usize, row_bytes: usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines.len(),
        rows + 2,
        "Expected {rows} rows between braces, got:\n{text}"
    );
    assert_eq!(lines[0], "{");
    assert_eq!(lines[rows + 1], "}");
    assert!(text.ends_with("}\n"), "Literal must end with a newline");

    for (y, line) in lines[1..=rows].iter().enumerate() {
        let tokens: Vec<&str> = line.split_terminator(',').collect();
        assert_eq!(tokens.len(), row_bytes, "Row {y}: {line:?}");
        for token in tokens {
            assert!(
                token.len() == 4
                    && token.starts_with("0x")
                    && token[2..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
                "Row {y}: malformed token {token:?}"
            );
        }
    }
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
