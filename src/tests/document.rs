use super::Document;

#[test]
fn test_render_reproduces_input() {
    for text in ["a\nb", "a\nb\n", "\n\n", "single", "trailing spaces  \n\r\n"] {
        assert_eq!(Document::parse(text).render(), text);
    }
}

#[test]
fn test_trailing_newline_is_empty_line() {
    let doc = Document::parse("a\nb\n");
    assert_eq!(doc.lines(), ["a", "b", ""]);
    assert_eq!(doc.len(), 3);
}

#[test]
fn test_remove_spans_uses_one_snapshot() {
    let mut doc = Document::parse("0\n1\n2\n3\n4\n5\n6");
    // Given in ascending order on purpose: removal must still use original indices.
    doc.remove_spans(&[(1, 2), (4, 5)]);
    assert_eq!(doc.lines(), ["0", "3", "6"]);
}

#[test]
fn test_remove_span_truncated_at_end() {
    let mut doc = Document::parse("0\n1\n2");
    doc.remove_spans(&[(1, 10), (7, 9)]);
    assert_eq!(doc.lines(), ["0"]);
}

#[test]
fn test_insert_block_positions() {
    let mut doc = Document::parse("a\nb");
    assert_eq!(doc.insert_block(1, vec!["x".to_string(), "y".to_string()]), 1);
    assert_eq!(doc.render(), "a\nx\ny\nb");

    assert_eq!(doc.insert_block(99, vec!["z".to_string()]), 4);
    assert_eq!(doc.render(), "a\nx\ny\nb\nz");

    assert_eq!(doc.insert_block(0, vec!["top".to_string()]), 0);
    assert_eq!(doc.lines()[0], "top");
}

#[test]
fn test_line_count_ignores_final_newline() {
    assert_eq!(Document::parse("a\nb\n").line_count(), 2);
    assert_eq!(Document::parse("a\nb").line_count(), 2);
    assert_eq!(Document::parse("a\n\n").line_count(), 2);
    assert_eq!(Document::parse("").line_count(), 0);
}
