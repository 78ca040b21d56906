//! Layered lookup across the three localized string tables
//!

use std::collections::HashMap;

/// The three string tables the game loads, in load order.
///
/// The patch table overrides the base table and the expansion table overrides
/// both, so lookups walk the layers newest first. A blank value does not hide
/// an older entry; it falls through to the next layer.
pub struct StringTables {
    base: HashMap<String, String>,
    patch: HashMap<String, String>,
    expansion: HashMap<String, String>,
}

impl StringTables {
    /// Combine the `string.tbl`, `patchstring.tbl` and `expansionstring.tbl` contents.
    pub fn new(
        base: HashMap<String, String>,
        patch: HashMap<String, String>,
        expansion: HashMap<String, String>,
    ) -> StringTables {
        StringTables {
            base,
            patch,
            expansion,
        }
    }

    /// Resolve a string key to its newest non-blank value, if any table holds one.
    pub fn resolve(&self, key: &str) -> Option<&str> {
        [&self.expansion, &self.patch, &self.base]
            .into_iter()
            .filter_map(|table| table.get(key))
            .map(String::as_str)
            .find(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use crate::tables::StringTables;

    fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn patch_overrides_base() {
        let tables = StringTables::new(
            table(&[("42", "Skeleton")]),
            table(&[("42", "Returned")]),
            table(&[]),
        );

        assert_eq!(tables.resolve("42"), Some("Returned"));
    }

    #[test]
    fn expansion_overrides_patch_and_base() {
        let tables = StringTables::new(
            table(&[("42", "Skeleton")]),
            table(&[("42", "Returned")]),
            table(&[("42", "Burning Dead")]),
        );

        assert_eq!(tables.resolve("42"), Some("Burning Dead"));
    }

    #[test]
    fn blank_value_falls_through() {
        let tables = StringTables::new(
            table(&[("42", "Skeleton")]),
            table(&[("42", "  ")]),
            table(&[]),
        );

        assert_eq!(tables.resolve("42"), Some("Skeleton"));
    }

    #[test]
    fn missing_key_resolves_to_none() {
        let tables = StringTables::new(table(&[]), table(&[]), table(&[]));

        assert_eq!(tables.resolve("42"), None);
    }
}
