//! XPath selector builders for Vuetify components.
//!
//! Vuetify renders each component as a root element carrying the
//! component class (`v-btn`, `v-card`, ...) with nested regions following
//! a `componentName__partName` class convention. Browser tests that want
//! to click "the Save button" or read "the card titled Settings" need
//! selectors encoding that convention; writing them by hand is noisy and
//! brittle.
//!
//! The building blocks:
//!
//! - [`Descriptor`] — what an element should contain or look like:
//!   literal text, an XPath fragment, an ordered list of either, or
//!   nothing at all.
//! - [`predicate`] — composes the bracketed `[...]` qualifiers from
//!   descriptors.
//! - [`components`] — one locator builder per supported component shape.
//! - [`XPath`] — the finished expression, with `document.evaluate`
//!   renderings for drivers that evaluate JavaScript instead of taking
//!   raw XPath.
//!
//! # Example
//!
//! ```
//! use vuetify_xpath::{v_btn, VBtn, VCard};
//!
//! // Single-argument form: the component's default parameter.
//! assert_eq!(
//!     v_btn("Save"),
//!     r#"//*[contains(concat(" ",@class," ")," v-btn ")][contains(.,"Save")]"#,
//! );
//!
//! // Named-options form for everything else.
//! let submit = VBtn::new("Submit").css_class("primary").disabled(false).xpath();
//! let settings = VCard::default().title("Settings").text("Theme").xpath();
//! ```
//!
//! Every builder is a total, pure function over its inputs: absent
//! options degrade to "no constraint", and nothing here performs I/O.
//! Literal text must not contain double-quote characters — predicates
//! embed text verbatim, with no escaping.

#![warn(missing_docs)]

pub mod components;
pub mod descriptor;
pub mod predicate;
pub mod xpath;

pub use components::{
    v_avatar, v_btn, v_card, v_chip, v_icon, v_img, v_list, v_list_item, v_list_item_action,
    v_list_item_avatar, v_list_item_group, v_list_item_icon, v_list_item_subtitle,
    v_list_item_title, v_list_tile, v_text_field, v_textarea, v_toolbar, VAvatar, VBtn, VCard,
    VChip, VIcon, VImg, VList, VListItem, VListItemAction, VListItemAvatar, VListItemGroup,
    VListItemIcon, VListItemSubtitle, VListItemTitle, VListTile, VTextField, VTextarea, VToolbar,
};
pub use descriptor::Descriptor;
pub use xpath::XPath;

/// Convenience re-exports for test code.
pub mod prelude {
    pub use super::components::*;
    pub use super::descriptor::Descriptor;
    pub use super::predicate::{
        class_predicate, class_token, content_predicate, element_predicate, elements_predicate,
        is_xpath, toggle_predicate,
    };
    pub use super::xpath::XPath;
}
