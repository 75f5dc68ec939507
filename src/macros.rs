/// Builds a [`Document`](crate::Document) from literal sections and entries.
///
/// Evaluates to `Result<Document>`, failing with
/// [`Error::DuplicateName`](crate::Error::DuplicateName) on a repeated section
/// name or a repeated entry name within one section, and with
/// [`Error::InvalidArgument`](crate::Error::InvalidArgument) on a name that
/// cannot be written as text (see [`format`](crate::format)). Entry values accept
/// anything convertible into a [`Value`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use serde_ini::{ini, Value};
///
/// let doc = ini!({
///     "User": {
///         "Name": "Ann",
///         "Age": 30,
///     },
///     "Empty": {},
/// })
/// .unwrap();
///
/// assert_eq!(doc.value("User", "Age").unwrap(), &Value::Int32(30));
/// assert_eq!(doc.len(), 2);
/// ```
#[macro_export]
macro_rules! ini {
    ({ $($section:literal : { $($name:literal : $value:expr),* $(,)? }),* $(,)? }) => {{
        let results: ::std::vec::Vec<$crate::Result<$crate::Section>> = ::std::vec![
            $({
                let entries: ::std::vec::Vec<$crate::Entry> =
                    ::std::vec![$($crate::Entry::new($name, $value)),*];
                $crate::Section::from_entries($section, entries)
            }),*
        ];
        results
            .into_iter()
            .collect::<$crate::Result<::std::vec::Vec<$crate::Section>>>()
            .and_then($crate::Document::from_sections)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Document, Entry, Error, Value};

    #[test]
    fn test_ini_macro_empty() {
        let doc = ini!({}).unwrap();
        assert!(doc.is_empty());
        assert!(doc.is_loaded());
    }

    #[test]
    fn test_ini_macro_keeps_order_and_kinds() {
        let doc = ini!({
            "B": { "z": 'z', "y": 1.5 },
            "A": { "x": 9_000_000_000i64 },
        })
        .unwrap();

        let names: Vec<_> = doc.sections().names().collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(
            doc.section("B").unwrap().entries().to_vec(),
            vec![Entry::new("z", 'z'), Entry::new("y", 1.5)]
        );
        assert_eq!(doc.value("A", "x").unwrap(), &Value::Int64(9_000_000_000));
    }

    #[test]
    fn test_ini_macro_duplicates() {
        let err = ini!({ "A": {}, "A": {} }).unwrap_err();
        assert_eq!(err, Error::DuplicateName("A".to_string()));

        let err = ini!({ "A": { "k": 1, "k": 2 } }).unwrap_err();
        assert_eq!(err, Error::DuplicateName("k".to_string()));
    }

    #[test]
    fn test_ini_macro_matches_parsed_text() {
        let built = ini!({ "User": { "Name": "Ann", "Age": 30 } }).unwrap();
        let parsed = Document::parse("[User]\nName = \"Ann\"\nAge = 30\n").unwrap();
        assert_eq!(built, parsed);
    }
}
