//! XPath predicate composition.
//!
//! Predicates are the bracketed `[...]` qualifiers appended to an XPath
//! step. Vuetify components render a root element carrying the component
//! class with nested regions following a `componentName__partName` class
//! convention; these helpers compose predicates matching that convention
//! from [`Descriptor`] values.
//!
//! Every function here is a total, deterministic mapping from its inputs
//! to a string. Absent or empty inputs degrade to the empty string (no
//! constraint) rather than failing.

use std::sync::OnceLock;

use regex::Regex;

use crate::descriptor::Descriptor;

/// A double-slash element step optionally followed by bracketed
/// qualifiers, e.g. `//div[@id='x']`. Deliberately loose: an unanchored
/// search, not a full XPath grammar check.
const XPATH_STEP_PATTERN: &str = r"//[a-z*]+(\[.*\])*";

fn xpath_step_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(XPATH_STEP_PATTERN).unwrap())
}

/// Returns `true` if `text` has the shape of an XPath element-step
/// expression rather than literal text to search for.
#[must_use]
pub fn is_xpath(text: &str) -> bool {
    xpath_step_regex().is_match(text)
}

/// Formats a content descriptor into zero or more predicates.
///
/// An XPath-shaped string yields a predicate matching elements that
/// contain the element identified by that fragment. Any other string
/// yields a predicate matching elements whose text body contains it.
/// A sequence recurses, concatenating one predicate per entry in order.
///
/// Literal text is embedded verbatim: an embedded `"` produces a
/// malformed predicate, so callers must supply quote-free text.
#[must_use]
pub fn content_predicate(content: &Descriptor) -> String {
    match content {
        Descriptor::Absent => String::new(),
        Descriptor::Text(text) => {
            if is_xpath(text) {
                format!("[.{text}]")
            } else {
                format!("[contains(.,\"{text}\")]")
            }
        }
        Descriptor::Sequence(items) => items.iter().map(content_predicate).collect(),
    }
}

/// Formats one known CSS class token into a whole-token class predicate.
///
/// The boundary-space `concat` keeps `v-list` from matching the
/// `v-list-item` class.
#[must_use]
pub fn class_token(class: &str) -> String {
    format!("[contains(concat(\" \",@class,\" \"),\" {class} \")]")
}

/// Formats a class descriptor into whole-token class predicates, one per
/// class name, concatenated in order. Absent contributes nothing.
#[must_use]
pub fn class_predicate(classes: &Descriptor) -> String {
    match classes {
        Descriptor::Absent => String::new(),
        Descriptor::Text(class) => class_token(class),
        Descriptor::Sequence(items) => items.iter().map(class_predicate).collect(),
    }
}

// Empty text lifts the part requirement entirely; an empty sequence still
// requires the part element to exist.
fn requires_part(value: &Descriptor) -> bool {
    match value {
        Descriptor::Absent => false,
        Descriptor::Text(text) => !text.is_empty(),
        Descriptor::Sequence(_) => true,
    }
}

/// Formats one named part of a component as a predicate requiring a
/// descendant of class `family__part` whose content matches `value`.
///
/// Components nest their regions under the root element:
///
/// ```text
/// <v-foo>
///   <div class="v-foo__title" ... />
///   <div class="v-foo__contents" ... />
/// </v-foo>
/// ```
///
/// An absent value emits nothing at all — the part is not required to
/// exist.
#[must_use]
pub fn element_predicate(family: &str, part: &str, value: &Descriptor) -> String {
    if !requires_part(value) {
        return String::new();
    }
    let class_name = format!("{family}__{part}");
    format!(
        "[.//*{}{}]",
        class_token(&class_name),
        content_predicate(value)
    )
}

/// Formats several named parts of one component, in the given order,
/// skipping absent entries.
#[must_use]
pub fn elements_predicate(family: &str, parts: &[(&str, &Descriptor)]) -> String {
    parts
        .iter()
        .map(|(part, value)| element_predicate(family, part, value))
        .collect()
}

/// Formats a three-way toggle into a predicate: absent means no
/// constraint, `true` wraps `true_expr`, `false` wraps `false_expr`.
#[must_use]
pub fn toggle_predicate(toggle: Option<bool>, true_expr: &str, false_expr: &str) -> String {
    match toggle {
        None => String::new(),
        Some(true) => format!("[{true_expr}]"),
        Some(false) => format!("[{false_expr}]"),
    }
}
