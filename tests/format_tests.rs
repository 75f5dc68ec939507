//! Line-level behavior of the INI dialect.

use serde_ini::{from_str, from_str_with_options, to_string, ErrorKind, IniOptions, Section, Value};

#[test]
fn test_lines_before_first_header_are_ignored() {
    let doc = from_str("Orphan = 1\nstray text\n[A]\nX = 2").unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.section("A").unwrap().len(), 1);
}

#[test]
fn test_lines_without_equals_are_ignored() {
    let doc = from_str("[A]\njust words\n\n  \nX = 1\n; not a comment, just ignored").unwrap();
    let names: Vec<_> = doc.section("A").unwrap().entries().names().collect();
    assert_eq!(names, vec!["X"]);
}

#[test]
fn test_header_needs_brackets_at_line_edges() {
    let doc = from_str("[A]\n [B]\n[C] \nX = 1").unwrap();
    let names: Vec<_> = doc.sections().names().collect();
    assert_eq!(names, vec!["A"]);
    assert_eq!(doc.value("A", "X").unwrap(), &Value::Int32(1));
}

#[test]
fn test_header_with_equals_is_a_header() {
    let doc = from_str("[a=b]\nX = 1").unwrap();
    assert_eq!(doc.section("a=b").unwrap().len(), 1);
}

#[test]
fn test_empty_header_name() {
    let doc = from_str("[]\nX = 1").unwrap();
    assert_eq!(doc.value("", "X").unwrap(), &Value::Int32(1));
    assert_eq!(to_string(&doc), "[]\nX = 1");
}

#[test]
fn test_value_split_on_first_equals() {
    let doc = from_str("[A]\nQuery = \"a=b=c\"").unwrap();
    assert_eq!(doc.value("A", "Query").unwrap(), &Value::from("a=b=c"));
}

#[test]
fn test_quoted_literals_have_no_escapes() {
    let doc = from_str("[A]\nPath = \"C:\\temp\\new\"\nInner = \"say \"hi\"\"").unwrap();
    assert_eq!(doc.value("A", "Path").unwrap(), &Value::from("C:\\temp\\new"));
    assert_eq!(doc.value("A", "Inner").unwrap(), &Value::from("say \"hi\""));
}

#[test]
fn test_char_literal_keeps_first_character() {
    let doc = from_str("[A]\nC = 'xyz'").unwrap();
    assert_eq!(doc.value("A", "C").unwrap(), &Value::Char('x'));
}

#[test]
fn test_empty_char_literal_is_invalid() {
    let err = from_str("[A]\nC = ''").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_integer_widths() {
    let doc = from_str("[N]\nMax32 = 2147483647\nOver32 = 2147483648\nNeg = -2147483649").unwrap();
    let n = doc.section("N").unwrap();
    assert_eq!(n.value("Max32").unwrap(), &Value::Int32(i32::MAX));
    assert_eq!(n.value("Over32").unwrap(), &Value::Int64(2_147_483_648));
    assert_eq!(n.value("Neg").unwrap(), &Value::Int64(-2_147_483_649));
}

#[test]
fn test_bare_word_is_invalid() {
    let err = from_str("[A]\nGood = 1\nBad = yes").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_duplicate_entry_reports_its_line() {
    let err = from_str("[A]\nX = 1\nY = 2\nX = 3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert_eq!(err.line(), Some(4));
}

#[test]
fn test_same_section_after_other_section_is_duplicate() {
    let err = from_str("[A]\n[B]\n[A]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_carriage_returns_kept_when_not_normalizing() {
    let options = IniOptions::new().with_normalize_line_endings(false);
    let doc = from_str_with_options("[A]\r\nX = 1\r\n", &options).unwrap();

    // "[A]\r" does not end with ']', so there is no section.
    assert!(doc.is_empty());
}

#[test]
fn test_render_spacing() {
    let doc = from_str("[A]\nX=1\nY   =   'y'\n\n\n[B]\n\n\nZ=\"z\"").unwrap();
    assert_eq!(to_string(&doc), "[A]\nX = 1\nY = 'y'\n\n[B]\nZ = \"z\"");
}

#[test]
fn test_float_render_keeps_fraction() {
    let doc = from_str("[F]\nWhole = 2.0\nTiny = 0.000001").unwrap();
    let text = to_string(&doc);
    assert!(text.contains("Whole = 2.0"));
    assert_eq!(from_str(&text).unwrap(), doc);
}

#[test]
fn test_kind_asymmetries() {
    let mut section = Section::new("K");
    section.push(serde_ini::Entry::new("Single", 0.5f32)).unwrap();
    section.push(serde_ini::Entry::new("Small64", 5i64)).unwrap();

    let back = Section::parse_text(&section.to_text()).unwrap();
    assert_eq!(back.value("Single").unwrap(), &Value::Float64(0.5));
    assert_eq!(back.value("Small64").unwrap(), &Value::Int32(5));
}

#[test]
fn test_names_that_cannot_be_written_are_rejected() {
    let mut section = Section::new("S");
    for name in ["a=b", " pad", "pad ", "line\nbreak"] {
        let err = section.push(serde_ini::Entry::new(name, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{:?}", name);
    }
    assert!(section.is_empty());

    section.push(serde_ini::Entry::new("a", 1)).unwrap();
    assert!(section.rename_entry("a", "a=b").is_err());

    let mut doc = serde_ini::Document::new();
    let err = doc.push(Section::new("two\nlines")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(doc.is_empty());
}

#[test]
fn test_unusual_but_writable_names_roundtrip() {
    let mut doc = serde_ini::Document::new();
    let mut section = Section::new(" spaced [section] ");
    section.push(serde_ini::Entry::new("has space", 1)).unwrap();
    section.push(serde_ini::Entry::new("[bracket]", 'b')).unwrap();
    section.push(serde_ini::Entry::new("", "empty name")).unwrap();
    doc.push(section).unwrap();
    doc.push(Section::new("a=b")).unwrap();

    let text = to_string(&doc);
    assert_eq!(from_str(&text).unwrap(), doc);
}

#[test]
fn test_nan_does_not_equal_itself() {
    let doc = from_str("[F]\nX = NaN").unwrap();
    let value = doc.value("F", "X").unwrap();
    assert!(value.as_f64().unwrap().is_nan());

    // Same text, but the documents compare unequal.
    assert_eq!(to_string(&doc), "[F]\nX = NaN");
    assert_ne!(from_str(&to_string(&doc)).unwrap(), doc);
}
