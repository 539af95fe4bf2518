//! Indentation transform properties

use codeblock::editable::{line_start, transform, IndentDirection, INDENT_UNIT};

const SAMPLES: &[&str] = &[
    "",
    "abc",
    "fn main() {\n    body();\n}",
    "  indented\n  twice\n",
    "héllo\n  wörld",
    "\ttab\n single",
];

fn insert_at_char(text: &str, caret: usize, unit: &str) -> String {
    let mut out: String = text.chars().take(caret).collect();
    out.push_str(unit);
    out.extend(text.chars().skip(caret));
    out
}

#[test]
fn test_indent_inserts_unit_at_every_caret() {
    for text in SAMPLES {
        for caret in 0..=text.chars().count() {
            let edit = transform(text, caret, IndentDirection::Forward);
            assert_eq!(edit.new_text, insert_at_char(text, caret, INDENT_UNIT), "{:?}@{}", text, caret);
            assert_eq!(edit.new_caret, caret + 2);
        }
    }
}

#[test]
fn test_outdent_is_noop_without_literal_unit() {
    for text in SAMPLES {
        for caret in 0..=text.chars().count() {
            let start = line_start(text, caret);
            let line: String = text.chars().skip(start).take(2).collect();
            if line == INDENT_UNIT {
                continue;
            }
            let edit = transform(text, caret, IndentDirection::Backward);
            assert_eq!(edit.new_text, *text, "{:?}@{}", text, caret);
            assert_eq!(edit.new_caret, caret);
        }
    }
}

#[test]
fn test_outdent_removes_unit_and_clamps_caret() {
    let text = "x\n  yz";
    // Caret inside, right after, and past the indent unit
    for (caret, expected) in [(2, 2), (3, 2), (4, 2), (6, 4)] {
        let edit = transform(text, caret, IndentDirection::Backward);
        assert_eq!(edit.new_text, "x\nyz");
        assert_eq!(edit.new_caret, expected, "caret {}", caret);
    }
}

#[test]
fn test_outdent_on_first_line() {
    // No preceding newline: the line starts at offset 0
    for (caret, expected) in [(3, 1), (2, 0), (0, 0)] {
        let edit = transform("  x", caret, IndentDirection::Backward);
        assert_eq!(edit.new_text, "x");
        assert_eq!(edit.new_caret, expected, "caret {}", caret);
    }
}

#[test]
fn test_indent_then_outdent_restores_line_start() {
    let text = "a\nb";
    let indented = transform(text, 2, IndentDirection::Forward);
    assert_eq!(indented.new_text, "a\n  b");
    let restored = transform(&indented.new_text, indented.new_caret, IndentDirection::Backward);
    assert_eq!(restored.new_text, text);
    assert_eq!(restored.new_caret, 2);
}

#[test]
fn test_out_of_range_caret_is_clamped() {
    let edit = transform("ab", 99, IndentDirection::Forward);
    assert_eq!(edit.new_text, "ab  ");
    assert_eq!(edit.new_caret, 4);
}
