//! Convert sections to and from two-column name/value tables.
//!
//! Run with: cargo run --example tables

use serde_ini::{from_str, Document, Table};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let doc = from_str("[Server]\nHost = \"localhost\"\nPort = 8080\n\n[Client]\nRetries = 3\n")?;

    let tables = doc.to_tables();
    for table in &tables {
        println!("{} {:?}", table.name, table.columns);
        for row in &table.rows {
            println!("  {:?}", row);
        }
    }

    // Tables serialize with serde like any other struct
    let json = serde_json::to_string_pretty(&tables)?;
    println!("Tables as JSON:\n{}\n", json);

    let tables_back: Vec<Table> = serde_json::from_str(&json)?;
    let imported = Document::from_tables(tables_back)?;

    // Imported values are text
    println!("Imported:\n{}", imported.to_text());
    assert_eq!(imported.value("Server", "Port")?.as_str(), Some("8080"));

    Ok(())
}
