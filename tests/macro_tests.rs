use serde_ini::{ini, Document, Entry, Error, ErrorKind, Section, Value};

#[test]
fn test_ini_macro_empty_document() {
    let doc = ini!({}).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.to_text(), "");
}

#[test]
fn test_ini_macro_empty_section() {
    let doc = ini!({ "Empty": {} }).unwrap();
    assert_eq!(doc.len(), 1);
    assert!(doc.section("Empty").unwrap().is_empty());
    assert_eq!(doc.to_text(), "[Empty]");
}

#[test]
fn test_ini_macro_value_kinds() {
    let doc = ini!({
        "Kinds": {
            "text": "hello",
            "owned": String::from("owned"),
            "char": 'c',
            "small": 7,
            "large": 7_000_000_000i64,
            "single": 1.5f32,
            "double": 2.25,
        }
    })
    .unwrap();

    let kinds = doc.section("Kinds").unwrap();
    assert_eq!(kinds.value("text").unwrap(), &Value::Text("hello".to_string()));
    assert_eq!(kinds.value("owned").unwrap(), &Value::Text("owned".to_string()));
    assert_eq!(kinds.value("char").unwrap(), &Value::Char('c'));
    assert_eq!(kinds.value("small").unwrap(), &Value::Int32(7));
    assert_eq!(kinds.value("large").unwrap(), &Value::Int64(7_000_000_000));
    assert_eq!(kinds.value("single").unwrap(), &Value::Float32(1.5));
    assert_eq!(kinds.value("double").unwrap(), &Value::Float64(2.25));
}

#[test]
fn test_ini_macro_expression_values() {
    let base = 40;
    let label = format!("user-{}", base);
    let doc = ini!({ "Computed": { "sum": base + 2, "label": label.as_str() } }).unwrap();

    assert_eq!(doc.value("Computed", "sum").unwrap(), &Value::Int32(42));
    assert_eq!(
        doc.value("Computed", "label").unwrap(),
        &Value::Text("user-40".to_string())
    );
}

#[test]
fn test_ini_macro_preserves_order() {
    let doc = ini!({
        "Zeta": { "b": 1, "a": 2 },
        "Alpha": { "d": 3, "c": 4 },
    })
    .unwrap();

    assert_eq!(doc.to_text(), "[Zeta]\nb = 1\na = 2\n\n[Alpha]\nd = 3\nc = 4");
}

#[test]
fn test_ini_macro_equals_builder() {
    let from_macro = ini!({ "A": { "X": 1 }, "B": {} }).unwrap();

    let built = Document::from_sections([
        Section::from_entries("A", [Entry::new("X", 1)]).unwrap(),
        Section::new("B"),
    ])
    .unwrap();

    assert_eq!(from_macro, built);
}

#[test]
fn test_ini_macro_rejects_duplicates() {
    let err = ini!({ "Same": {}, "Same": {} }).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateName);

    let err = ini!({ "S": { "k": 1, "k": 'k' } }).unwrap_err();
    assert_eq!(err, Error::DuplicateName("k".to_string()));
}

#[test]
fn test_ini_macro_document_is_mutable() {
    let mut doc = ini!({ "A": { "X": 1 } }).unwrap();
    doc.section_mut("A").unwrap().set_value("X", 2).unwrap();
    doc.section_mut("A").unwrap().set_value("Y", "new").unwrap();

    assert_eq!(doc.to_text(), "[A]\nX = 2\nY = \"new\"");
}
