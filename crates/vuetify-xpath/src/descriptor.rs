//! Content and class descriptors for component locators.
//!
//! A descriptor captures "what should this element contain / look like":
//! nothing at all, a literal text string, an XPath fragment, or an ordered
//! list of further descriptors. The same shape doubles as a CSS class
//! constraint when a locator accepts extra classes.

use serde::{Deserialize, Serialize};

/// A recursive description of element content or CSS classes.
///
/// Whether a [`Text`](Self::Text) value is treated as literal text or as an
/// XPath fragment is decided at predicate-formatting time by
/// [`is_xpath`](crate::predicate::is_xpath); the descriptor itself does not
/// distinguish the two.
///
/// Descriptors serialize untagged, so data-driven test inputs read
/// naturally: `null` is [`Absent`](Self::Absent), a JSON string is
/// [`Text`](Self::Text), a JSON array is [`Sequence`](Self::Sequence).
///
/// Literal text must not contain double-quote characters: predicates embed
/// the text verbatim with no escaping, and an embedded `"` produces a
/// malformed selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Descriptor {
    /// No constraint.
    #[default]
    Absent,
    /// Literal text to search for, or an XPath fragment such as
    /// `//div[@id='x']`.
    Text(String),
    /// An ordered list of descriptors. Order is preserved and duplicates
    /// are allowed; each entry contributes its own predicate.
    Sequence(Vec<Descriptor>),
}

impl Descriptor {
    /// Creates a text descriptor.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Creates a sequence descriptor from anything convertible.
    #[must_use]
    pub fn sequence<T: Into<Self>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if this descriptor imposes no constraint.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<&str> for Descriptor {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Descriptor {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl<T: Into<Descriptor>> From<Vec<T>> for Descriptor {
    fn from(items: Vec<T>) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Descriptor>, const N: usize> From<[T; N]> for Descriptor {
    fn from(items: [T; N]) -> Self {
        Self::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Descriptor>> From<Option<T>> for Descriptor {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

impl FromIterator<Descriptor> for Descriptor {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod conversion_tests {
        use super::*;

        #[test]
        fn test_from_str() {
            assert_eq!(Descriptor::from("Save"), Descriptor::Text("Save".into()));
        }

        #[test]
        fn test_from_string() {
            let desc: Descriptor = String::from("Save").into();
            assert_eq!(desc, Descriptor::Text("Save".into()));
        }

        #[test]
        fn test_from_array() {
            let desc = Descriptor::from(["One", "Two"]);
            assert_eq!(
                desc,
                Descriptor::Sequence(vec![
                    Descriptor::Text("One".into()),
                    Descriptor::Text("Two".into()),
                ])
            );
        }

        #[test]
        fn test_from_vec() {
            let desc = Descriptor::from(vec!["One", "Two"]);
            assert!(matches!(desc, Descriptor::Sequence(ref items) if items.len() == 2));
        }

        #[test]
        fn test_from_option() {
            assert_eq!(Descriptor::from(None::<&str>), Descriptor::Absent);
            assert_eq!(
                Descriptor::from(Some("x")),
                Descriptor::Text("x".into())
            );
        }

        #[test]
        fn test_from_iterator() {
            let desc: Descriptor = ["a", "b"].into_iter().map(Descriptor::from).collect();
            assert!(matches!(desc, Descriptor::Sequence(ref items) if items.len() == 2));
        }

        #[test]
        fn test_nested_sequence() {
            let desc = Descriptor::sequence([
                Descriptor::from("a"),
                Descriptor::from(["b", "c"]),
            ]);
            let Descriptor::Sequence(items) = desc else {
                panic!("expected a sequence");
            };
            assert_eq!(items.len(), 2);
            assert!(matches!(items[1], Descriptor::Sequence(_)));
        }

        #[test]
        fn test_default_is_absent() {
            assert!(Descriptor::default().is_absent());
            assert!(!Descriptor::from("x").is_absent());
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_null_deserializes_to_absent() {
            let desc: Descriptor = serde_json::from_str("null").unwrap();
            assert_eq!(desc, Descriptor::Absent);
        }

        #[test]
        fn test_string_deserializes_to_text() {
            let desc: Descriptor = serde_json::from_str(r#""Save""#).unwrap();
            assert_eq!(desc, Descriptor::Text("Save".into()));
        }

        #[test]
        fn test_array_deserializes_to_sequence() {
            let desc: Descriptor = serde_json::from_str(r#"["a", ["b", "c"]]"#).unwrap();
            assert_eq!(
                desc,
                Descriptor::Sequence(vec![
                    Descriptor::Text("a".into()),
                    Descriptor::Sequence(vec![
                        Descriptor::Text("b".into()),
                        Descriptor::Text("c".into()),
                    ]),
                ])
            );
        }

        #[test]
        fn test_round_trip() {
            let desc = Descriptor::from(["Hello", "//div[@id='x']"]);
            let json = serde_json::to_string(&desc).unwrap();
            let back: Descriptor = serde_json::from_str(&json).unwrap();
            assert_eq!(desc, back);
        }

        #[test]
        fn test_absent_serializes_to_null() {
            assert_eq!(serde_json::to_string(&Descriptor::Absent).unwrap(), "null");
        }
    }
}
