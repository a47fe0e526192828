//! Item set parsing
//!
//! Mining tools serialise item sets in several ways. Accepted forms:
//!
//! - `frozenset({'milk', 'bread'})`
//! - `{'milk', 'bread'}` and `['milk', 'bread']`
//! - `milk, bread`

use std::fmt;

use serde::{Serialize, Serializer};

/// An ordered, duplicate-free set of item names.
///
/// Items keep the order they appear in the source cell so cards read the
/// same way the data file does.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemSet {
    items: Vec<String>,
}

impl ItemSet {
    /// Builds an item set from names, dropping blanks and duplicates.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items: Vec<String> = Vec::new();
        for name in names {
            let name: String = name.into();
            let name = name.trim();
            if name.is_empty() || items.iter().any(|existing| existing == name) {
                continue;
            }
            items.push(name.to_string());
        }
        Self { items }
    }

    /// Parses a serialised item set cell.
    ///
    /// Returns an empty set when the cell holds no items; the caller
    /// decides whether that is an error.
    pub fn parse(raw: &str) -> Self {
        let inner = strip_wrappers(raw.trim());
        Self::new(split_items(inner).into_iter().map(unquote))
    }

    /// Returns the item names in display order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.items.join(", "))
    }
}

impl Serialize for ItemSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// Peels `frozenset(...)`, `{...}`, `[...]` and `(...)` layers.
fn strip_wrappers(mut s: &str) -> &str {
    loop {
        let trimmed = s.trim();
        let next = if let Some(rest) = trimmed.strip_prefix("frozenset(") {
            rest.strip_suffix(')')
        } else if let Some(rest) = trimmed.strip_prefix('{') {
            rest.strip_suffix('}')
        } else if let Some(rest) = trimmed.strip_prefix('[') {
            rest.strip_suffix(']')
        } else if let Some(rest) = trimmed.strip_prefix('(') {
            rest.strip_suffix(')')
        } else {
            None
        };

        match next {
            Some(inner) => s = inner,
            None => return trimmed,
        }
    }
}

/// Splits on commas that are not inside a quoted item.
///
/// A quote only opens when it is the first non-space character of an
/// item, so apostrophes inside plain names are literal.
fn split_items(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut at_item_start = true;
    let mut start = 0;

    for (idx, c) in s.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, ',') => {
                parts.push(&s[start..idx]);
                start = idx + 1;
                at_item_start = true;
            }
            (None, '\'' | '"') if at_item_start => {
                quote = Some(c);
                at_item_start = false;
            }
            (None, c) if c.is_whitespace() => {}
            (None, _) => at_item_start = false,
        }
    }
    parts.push(&s[start..]);
    parts
}

fn unquote(s: &str) -> &str {
    let s = s.trim();
    for q in ['\'', '"'] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frozenset_repr() {
        let set = ItemSet::parse("frozenset({'whole milk', 'yogurt'})");
        assert_eq!(set.items(), ["whole milk", "yogurt"]);
    }

    #[test]
    fn test_parse_single_item_frozenset() {
        let set = ItemSet::parse("frozenset({'rolls/buns'})");
        assert_eq!(set.items(), ["rolls/buns"]);
    }

    #[test]
    fn test_parse_list_and_set_repr() {
        assert_eq!(ItemSet::parse("['a', 'b']").items(), ["a", "b"]);
        assert_eq!(ItemSet::parse("{\"a\", \"b\"}").items(), ["a", "b"]);
    }

    #[test]
    fn test_parse_plain_list() {
        let set = ItemSet::parse("bread,  butter ,jam");
        assert_eq!(set.items(), ["bread", "butter", "jam"]);
    }

    #[test]
    fn test_comma_inside_quotes_kept() {
        let set = ItemSet::parse("frozenset({'salt, coarse', 'pepper'})");
        assert_eq!(set.items(), ["salt, coarse", "pepper"]);
    }

    #[test]
    fn test_apostrophe_in_plain_list() {
        let set = ItemSet::parse("children's food, milk");
        assert_eq!(set.items(), ["children's food", "milk"]);
    }

    #[test]
    fn test_apostrophe_inside_quoted_item() {
        let set = ItemSet::parse("frozenset({\"children's food\", 'milk'})");
        assert_eq!(set.items(), ["children's food", "milk"]);
    }

    #[test]
    fn test_duplicates_and_blanks_dropped() {
        let set = ItemSet::parse("a, , a, b");
        assert_eq!(set.items(), ["a", "b"]);
    }

    #[test]
    fn test_empty_cell() {
        assert!(ItemSet::parse("").is_empty());
        assert!(ItemSet::parse("frozenset()").is_empty());
        assert!(ItemSet::parse("frozenset({})").is_empty());
    }

    #[test]
    fn test_display_joins_items() {
        let set = ItemSet::new(["milk", "bread"]);
        assert_eq!(set.to_string(), "milk, bread");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serializes_as_array() {
        let set = ItemSet::new(["milk"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["milk"]"#);
    }
}
