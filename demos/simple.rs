//! Parse, edit, and re-render an INI document.
//!
//! Run with: cargo run --example simple

use serde_ini::{from_str, to_json_string_pretty, to_string, Entry, Section, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = "[User]\nName = \"Ann\"\nAge = 30\n\n[Window]\nWidth = 1280\nScale = 1.25\n";

    // Parse INI text
    let mut doc = from_str(text)?;
    println!("Sections: {:?}", doc.sections().names().collect::<Vec<_>>());
    println!("User.Age = {}", doc.value("User", "Age")?);

    // Edit in place
    let mut user = doc.section_mut("User")?;
    user.set_value("Age", 31)?;
    user.push(Entry::new("Initial", 'A'))?;
    user.rename_entry("Name", "FullName")?;

    doc.insert(
        1,
        Section::from_entries("Theme", [Entry::new("Accent", "teal")])?,
    )?;

    // Names are unique per scope
    assert!(doc.push(Section::new("Window")).is_err());

    let rendered = to_string(&doc);
    println!("INI output:\n{}\n", rendered);

    // Round trip
    let back = from_str(&rendered)?;
    assert_eq!(back, doc);
    assert_eq!(back.value("User", "Age")?, &Value::Int32(31));
    println!("✓ Round-trip successful");

    println!("JSON output:\n{}", to_json_string_pretty(&doc)?);

    Ok(())
}
