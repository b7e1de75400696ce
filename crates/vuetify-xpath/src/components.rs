//! Locator builders for the supported Vuetify component shapes.
//!
//! Each component has an options struct whose fields are all optional
//! (`Default` imposes no constraint), field-named builder methods, and an
//! [`xpath`](VBtn::xpath) method assembling the final selector. A free
//! convenience function per component takes only that component's default
//! parameter — text content for a card, label text for a text field, icon
//! class for an icon — and is exactly equivalent to building the options
//! struct with that one field set.
//!
//! Every locator starts at `//*` and narrows by the component's root
//! class, so it matches the component element wherever it sits in the
//! document.

use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;
use crate::predicate::{
    class_predicate, class_token, content_predicate, elements_predicate, toggle_predicate,
};
use crate::xpath::XPath;

// Root-class + optional caller classes + content. Most components reduce
// to this shape.
fn content_component(root_class: &str, css_class: &Descriptor, content: &Descriptor) -> XPath {
    XPath::new(format!(
        "//*{}{}{}",
        class_token(root_class),
        class_predicate(css_class),
        content_predicate(content)
    ))
}

// Chip and toolbar render their content inside a fixed-class child
// element; the content predicate nests inside that child predicate, which
// is emitted even when the content is unconstrained.
fn wrapped_content_component(
    root_class: &str,
    content_class: &str,
    css_class: &Descriptor,
    content: &Descriptor,
) -> XPath {
    XPath::new(format!(
        "//*{}{}[*[@class=\"{content_class}\"]{}]",
        class_token(root_class),
        class_predicate(css_class),
        content_predicate(content)
    ))
}

/// Locator options for `v-avatar`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VAvatar {
    /// Expected avatar content.
    pub content: Descriptor,
    /// Extra CSS classes on the avatar root.
    pub css_class: Descriptor,
}

impl VAvatar {
    /// Creates options constraining the avatar content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the avatar root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the avatar selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-avatar", &self.css_class, &self.content)
    }
}

/// Locates a `v-avatar` by its content.
#[must_use]
pub fn v_avatar(content: impl Into<Descriptor>) -> XPath {
    VAvatar::new(content).xpath()
}

/// Locator options for `v-btn`.
///
/// Default parameter: `content`. The `disabled` toggle is three-way:
/// unset imposes no constraint, `true` requires `@disabled="disabled"`,
/// `false` requires the attribute to be missing.
///
/// ```
/// use vuetify_xpath::VBtn;
///
/// let xpath = VBtn::new("Save").disabled(true).xpath();
/// assert!(xpath.as_str().ends_with("[@disabled=\"disabled\"]"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VBtn {
    /// Expected button content.
    pub content: Descriptor,
    /// Extra CSS classes on the button root.
    pub css_class: Descriptor,
    /// Expected disabled state.
    pub disabled: Option<bool>,
}

impl VBtn {
    /// Creates options constraining the button content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the button root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Requires the button to be disabled (`true`) or enabled (`false`).
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Builds the button selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        XPath::new(format!(
            "//*{}{}{}{}",
            class_token("v-btn"),
            class_predicate(&self.css_class),
            content_predicate(&self.content),
            toggle_predicate(self.disabled, "@disabled=\"disabled\"", "not(@disabled)")
        ))
    }
}

/// Locates a `v-btn` by its content.
#[must_use]
pub fn v_btn(content: impl Into<Descriptor>) -> XPath {
    VBtn::new(content).xpath()
}

/// Locator options for `v-card`.
///
/// Default parameter: `content`. The named regions (`title`, `subtitle`,
/// `text`, `actions`) each match a descendant carrying the corresponding
/// `v-card__…` class; an unset region is not required to exist.
///
/// ```
/// use vuetify_xpath::VCard;
///
/// let xpath = VCard::default().title("Settings").xpath();
/// assert!(xpath.as_str().contains("v-card__title"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VCard {
    /// Expected content anywhere in the card.
    pub content: Descriptor,
    /// Extra CSS classes on the card root.
    pub css_class: Descriptor,
    /// Expected title region content.
    pub title: Descriptor,
    /// Expected subtitle region content.
    pub subtitle: Descriptor,
    /// Expected text region content.
    pub text: Descriptor,
    /// Expected actions region content.
    pub actions: Descriptor,
}

impl VCard {
    /// Creates options constraining the card content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the card root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Requires title region content.
    #[must_use]
    pub fn title(mut self, title: impl Into<Descriptor>) -> Self {
        self.title = title.into();
        self
    }

    /// Requires subtitle region content.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<Descriptor>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Requires text region content.
    #[must_use]
    pub fn text(mut self, text: impl Into<Descriptor>) -> Self {
        self.text = text.into();
        self
    }

    /// Requires actions region content.
    #[must_use]
    pub fn actions(mut self, actions: impl Into<Descriptor>) -> Self {
        self.actions = actions.into();
        self
    }

    /// Builds the card selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        XPath::new(format!(
            "//*{}{}{}{}",
            class_token("v-card"),
            class_predicate(&self.css_class),
            elements_predicate(
                "v-card",
                &[
                    ("title", &self.title),
                    ("subtitle", &self.subtitle),
                    ("text", &self.text),
                    ("actions", &self.actions),
                ],
            ),
            content_predicate(&self.content)
        ))
    }
}

/// Locates a `v-card` by its content.
#[must_use]
pub fn v_card(content: impl Into<Descriptor>) -> XPath {
    VCard::new(content).xpath()
}

/// Locator options for `v-chip`.
///
/// Default parameter: `content`. Chips render their content in a
/// `v-chip__content` child, so the content constraint applies there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VChip {
    /// Expected chip content.
    pub content: Descriptor,
    /// Extra CSS classes on the chip root.
    pub css_class: Descriptor,
}

impl VChip {
    /// Creates options constraining the chip content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the chip root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the chip selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        wrapped_content_component("v-chip", "v-chip__content", &self.css_class, &self.content)
    }
}

/// Locates a `v-chip` by its content.
#[must_use]
pub fn v_chip(content: impl Into<Descriptor>) -> XPath {
    VChip::new(content).xpath()
}

/// Locator options for `v-icon`.
///
/// Default parameter: `icon`. Icon fonts carry the glyph as a CSS class
/// (`mdi-home`, `fa-plus`), so the `icon` value is matched as a class
/// token rather than text content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VIcon {
    /// Icon class name(s), e.g. `mdi-home`.
    pub icon: Descriptor,
    /// Extra CSS classes on the icon root.
    pub css_class: Descriptor,
}

impl VIcon {
    /// Creates options constraining the icon class.
    #[must_use]
    pub fn new(icon: impl Into<Descriptor>) -> Self {
        Self {
            icon: icon.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the icon root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the icon selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        XPath::new(format!(
            "//*{}{}{}",
            class_token("v-icon"),
            class_predicate(&self.icon),
            class_predicate(&self.css_class)
        ))
    }
}

/// Locates a `v-icon` by its icon class.
#[must_use]
pub fn v_icon(icon: impl Into<Descriptor>) -> XPath {
    VIcon::new(icon).xpath()
}

/// Locator options for `v-img`.
///
/// Default parameter: `src`. The component embeds its source into an
/// inline `background-image` style:
///
/// ```text
/// <div style='background-image: url("http://localhost/harold.png");'>
/// ```
///
/// so the `src` value is matched as a substring of the style attribute,
/// including the closing `");`. A relative path therefore still matches a
/// fully-qualified URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VImg {
    /// Source URL substring to look for.
    pub src: Option<String>,
    /// Extra CSS classes on the image root.
    pub css_class: Descriptor,
}

impl VImg {
    /// Creates options constraining the image source.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the image root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the image selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        let src_predicate = match &self.src {
            Some(src) if !src.is_empty() => format!(
                "[*{}[contains(@style, '{src}\");')]]",
                class_token("v-image__image")
            ),
            _ => String::new(),
        };
        XPath::new(format!(
            "//*{}{}{src_predicate}",
            class_token("v-image"),
            class_predicate(&self.css_class)
        ))
    }
}

/// Locates a `v-img` by a substring of its source URL.
#[must_use]
pub fn v_img(src: impl Into<String>) -> XPath {
    VImg::new(src).xpath()
}

/// Locator options for `v-list`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VList {
    /// Expected content anywhere in the list.
    pub content: Descriptor,
    /// Extra CSS classes on the list root.
    pub css_class: Descriptor,
}

impl VList {
    /// Creates options constraining the list content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the list root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the list selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-list", &self.css_class, &self.content)
    }
}

/// Locates a `v-list` by its content.
#[must_use]
pub fn v_list(content: impl Into<Descriptor>) -> XPath {
    VList::new(content).xpath()
}

/// Locator options for `v-list-item`.
///
/// Default parameter: `content`. Every constraint, the content included,
/// targets the matching `v-list-item__…` region rather than the item's
/// whole text body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItem {
    /// Expected content region content.
    pub content: Descriptor,
    /// Extra CSS classes on the item root.
    pub css_class: Descriptor,
    /// Expected title region content.
    pub title: Descriptor,
    /// Expected subtitle region content.
    pub subtitle: Descriptor,
    /// Expected action region content.
    pub action: Descriptor,
    /// Expected avatar region content.
    pub avatar: Descriptor,
    /// Expected icon region content.
    pub icon: Descriptor,
}

impl VListItem {
    /// Creates options constraining the item's content region.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the item root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Requires title region content.
    #[must_use]
    pub fn title(mut self, title: impl Into<Descriptor>) -> Self {
        self.title = title.into();
        self
    }

    /// Requires subtitle region content.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<Descriptor>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Requires action region content.
    #[must_use]
    pub fn action(mut self, action: impl Into<Descriptor>) -> Self {
        self.action = action.into();
        self
    }

    /// Requires avatar region content.
    #[must_use]
    pub fn avatar(mut self, avatar: impl Into<Descriptor>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Requires icon region content.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Descriptor>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Builds the list-item selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        XPath::new(format!(
            "//*{}{}{}",
            class_token("v-list-item"),
            class_predicate(&self.css_class),
            elements_predicate(
                "v-list-item",
                &[
                    ("content", &self.content),
                    ("title", &self.title),
                    ("subtitle", &self.subtitle),
                    ("action", &self.action),
                    ("avatar", &self.avatar),
                    ("icon", &self.icon),
                ],
            )
        ))
    }
}

/// Locates a `v-list-item` by its content region.
#[must_use]
pub fn v_list_item(content: impl Into<Descriptor>) -> XPath {
    VListItem::new(content).xpath()
}

/// Locator options for `v-list-item__title`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItemTitle {
    /// Expected title content.
    pub content: Descriptor,
    /// Extra CSS classes on the title element.
    pub css_class: Descriptor,
}

impl VListItemTitle {
    /// Creates options constraining the title content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the title element.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the title selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-list-item__title", &self.css_class, &self.content)
    }
}

/// Locates a `v-list-item__title` by its content.
#[must_use]
pub fn v_list_item_title(content: impl Into<Descriptor>) -> XPath {
    VListItemTitle::new(content).xpath()
}

/// Locator options for `v-list-item__subtitle`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItemSubtitle {
    /// Expected subtitle content.
    pub content: Descriptor,
    /// Extra CSS classes on the subtitle element.
    pub css_class: Descriptor,
}

impl VListItemSubtitle {
    /// Creates options constraining the subtitle content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the subtitle element.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the subtitle selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-list-item__subtitle", &self.css_class, &self.content)
    }
}

/// Locates a `v-list-item__subtitle` by its content.
#[must_use]
pub fn v_list_item_subtitle(content: impl Into<Descriptor>) -> XPath {
    VListItemSubtitle::new(content).xpath()
}

/// Locator options for `v-list-item__action`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItemAction {
    /// Expected action content.
    pub content: Descriptor,
    /// Extra CSS classes on the action element.
    pub css_class: Descriptor,
}

impl VListItemAction {
    /// Creates options constraining the action content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the action element.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the action selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-list-item__action", &self.css_class, &self.content)
    }
}

/// Locates a `v-list-item__action` by its content.
#[must_use]
pub fn v_list_item_action(content: impl Into<Descriptor>) -> XPath {
    VListItemAction::new(content).xpath()
}

/// Locator options for `v-list-item__avatar`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItemAvatar {
    /// Expected avatar content.
    pub content: Descriptor,
    /// Extra CSS classes on the avatar element.
    pub css_class: Descriptor,
}

impl VListItemAvatar {
    /// Creates options constraining the avatar content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the avatar element.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the avatar selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-list-item__avatar", &self.css_class, &self.content)
    }
}

/// Locates a `v-list-item__avatar` by its content.
#[must_use]
pub fn v_list_item_avatar(content: impl Into<Descriptor>) -> XPath {
    VListItemAvatar::new(content).xpath()
}

/// Locator options for `v-list-item__icon`.
///
/// Default parameter: `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItemIcon {
    /// Expected icon content.
    pub content: Descriptor,
    /// Extra CSS classes on the icon element.
    pub css_class: Descriptor,
}

impl VListItemIcon {
    /// Creates options constraining the icon content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the icon element.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the icon selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        content_component("v-list-item__icon", &self.css_class, &self.content)
    }
}

/// Locates a `v-list-item__icon` by its content.
#[must_use]
pub fn v_list_item_icon(content: impl Into<Descriptor>) -> XPath {
    VListItemIcon::new(content).xpath()
}

/// Locator options for `v-list-item-group`.
///
/// Default parameter: `items`. The group's regions follow the
/// `v-list-group__…` class convention even though the root class is
/// `v-list-item-group`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListItemGroup {
    /// Expected header region content.
    pub header: Descriptor,
    /// Expected items region content.
    pub items: Descriptor,
    /// Extra CSS classes on the group root.
    pub css_class: Descriptor,
}

impl VListItemGroup {
    /// Creates options constraining the items region.
    #[must_use]
    pub fn new(items: impl Into<Descriptor>) -> Self {
        Self {
            items: items.into(),
            ..Self::default()
        }
    }

    /// Requires header region content.
    #[must_use]
    pub fn header(mut self, header: impl Into<Descriptor>) -> Self {
        self.header = header.into();
        self
    }

    /// Requires extra CSS classes on the group root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the list-item-group selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        XPath::new(format!(
            "//*{}{}{}",
            class_token("v-list-item-group"),
            class_predicate(&self.css_class),
            elements_predicate(
                "v-list-group",
                &[("header", &self.header), ("items", &self.items)],
            )
        ))
    }
}

/// Locates a `v-list-item-group` by its items.
#[must_use]
pub fn v_list_item_group(items: impl Into<Descriptor>) -> XPath {
    VListItemGroup::new(items).xpath()
}

/// Locator options for the legacy `v-list__tile` (Vuetify 1.5 lists).
///
/// Default parameter: `content`. Note the subtitle region's class is
/// `v-list__tile__sub-title`, hyphenated unlike its modern counterpart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VListTile {
    /// Expected content region content.
    pub content: Descriptor,
    /// Extra CSS classes on the tile root.
    pub css_class: Descriptor,
    /// Expected title region content.
    pub title: Descriptor,
    /// Expected sub-title region content.
    pub subtitle: Descriptor,
    /// Expected action region content.
    pub action: Descriptor,
    /// Expected avatar region content.
    pub avatar: Descriptor,
}

impl VListTile {
    /// Creates options constraining the tile's content region.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the tile root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Requires title region content.
    #[must_use]
    pub fn title(mut self, title: impl Into<Descriptor>) -> Self {
        self.title = title.into();
        self
    }

    /// Requires sub-title region content.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<Descriptor>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Requires action region content.
    #[must_use]
    pub fn action(mut self, action: impl Into<Descriptor>) -> Self {
        self.action = action.into();
        self
    }

    /// Requires avatar region content.
    #[must_use]
    pub fn avatar(mut self, avatar: impl Into<Descriptor>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Builds the list-tile selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        XPath::new(format!(
            "//*{}{}{}",
            class_token("v-list__tile"),
            class_predicate(&self.css_class),
            elements_predicate(
                "v-list__tile",
                &[
                    ("content", &self.content),
                    ("title", &self.title),
                    ("sub-title", &self.subtitle),
                    ("action", &self.action),
                    ("avatar", &self.avatar),
                ],
            )
        ))
    }
}

/// Locates a legacy `v-list__tile` by its content region.
#[must_use]
pub fn v_list_tile(content: impl Into<Descriptor>) -> XPath {
    VListTile::new(content).xpath()
}

/// Locator options for `v-textarea`.
///
/// Default parameter: `label`. The selector resolves to the `<textarea>`
/// control itself, found by descending through the element owning the
/// matching `<label>`; with no label constraint it resolves to any
/// `<textarea>` under the component root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VTextarea {
    /// Label text identifying the field.
    pub label: Option<String>,
    /// Extra CSS classes on the component root.
    pub css_class: Descriptor,
}

impl VTextarea {
    /// Creates options constraining the field label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the component root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the textarea selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        let label_step = match &self.label {
            Some(label) if !label.is_empty() => {
                format!("//*[label[contains(text(),\"{label}\")]]")
            }
            _ => String::new(),
        };
        XPath::new(format!(
            "//*{}{}{label_step}//textarea",
            class_token("v-textarea"),
            class_predicate(&self.css_class)
        ))
    }
}

/// Locates a `v-textarea` control by its label text.
#[must_use]
pub fn v_textarea(label: impl Into<String>) -> XPath {
    VTextarea::new(label).xpath()
}

/// Locator options for `v-text-field`.
///
/// Default parameter: `label`. The selector resolves to the `<input>`
/// control itself; the label constraint is a predicate on the component
/// root rather than a step, so the input need not be a descendant of the
/// label's own wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VTextField {
    /// Label text identifying the field.
    pub label: Option<String>,
    /// Extra CSS classes on the component root.
    pub css_class: Descriptor,
}

impl VTextField {
    /// Creates options constraining the field label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the component root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the text-field selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        let label_predicate = match &self.label {
            Some(label) if !label.is_empty() => {
                format!("[.//*[label[contains(text(),\"{label}\")]]]")
            }
            _ => String::new(),
        };
        XPath::new(format!(
            "//*{}{}{label_predicate}//input",
            class_token("v-text-field"),
            class_predicate(&self.css_class)
        ))
    }
}

/// Locates a `v-text-field` control by its label text.
#[must_use]
pub fn v_text_field(label: impl Into<String>) -> XPath {
    VTextField::new(label).xpath()
}

/// Locator options for `v-toolbar`.
///
/// Default parameter: `content`. Toolbars render their content in a
/// `v-toolbar__content` child, so the content constraint applies there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VToolbar {
    /// Expected toolbar content.
    pub content: Descriptor,
    /// Extra CSS classes on the toolbar root.
    pub css_class: Descriptor,
}

impl VToolbar {
    /// Creates options constraining the toolbar content.
    #[must_use]
    pub fn new(content: impl Into<Descriptor>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Requires extra CSS classes on the toolbar root.
    #[must_use]
    pub fn css_class(mut self, css_class: impl Into<Descriptor>) -> Self {
        self.css_class = css_class.into();
        self
    }

    /// Builds the toolbar selector.
    #[must_use]
    pub fn xpath(&self) -> XPath {
        wrapped_content_component(
            "v-toolbar",
            "v-toolbar__content",
            &self.css_class,
            &self.content,
        )
    }
}

/// Locates a `v-toolbar` by its content.
#[must_use]
pub fn v_toolbar(content: impl Into<Descriptor>) -> XPath {
    VToolbar::new(content).xpath()
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn content_strategy() -> impl Strategy<Value = Descriptor> {
        let leaf = prop_oneof![
            1 => Just(Descriptor::Absent),
            4 => "[A-Za-z0-9 ]{0,12}".prop_map(Descriptor::Text),
        ];
        leaf.prop_recursive(2, 12, 3, |inner| {
            proptest::collection::vec(inner, 0..3).prop_map(Descriptor::Sequence)
        })
    }

    proptest! {
        /// Locators are pure: identical options always build identical
        /// selector strings.
        #[test]
        fn prop_locators_are_pure(content in content_strategy(), disabled in proptest::option::of(any::<bool>())) {
            let options = VBtn { content, css_class: Descriptor::Absent, disabled };
            prop_assert_eq!(options.xpath(), options.xpath());
        }

        /// The convenience form always equals the options form with the
        /// default parameter set.
        #[test]
        fn prop_default_param_equivalence(content in content_strategy()) {
            prop_assert_eq!(v_btn(content.clone()), VBtn::new(content.clone()).xpath());
            prop_assert_eq!(v_card(content.clone()), VCard::new(content.clone()).xpath());
            prop_assert_eq!(v_list_item(content.clone()), VListItem::new(content).xpath());
        }

        /// Every locator selects from the document root with an
        /// any-element step.
        #[test]
        fn prop_locators_start_at_any_element(content in content_strategy()) {
            prop_assert!(v_avatar(content.clone()).as_str().starts_with("//*"));
            prop_assert!(v_chip(content.clone()).as_str().starts_with("//*"));
            prop_assert!(v_toolbar(content).as_str().starts_with("//*"));
        }
    }
}
