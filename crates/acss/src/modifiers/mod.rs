//! Rule modifiers.
//!
//! A [`Modifier`] is a pure `Rule -> Rule` transform that adds selector or
//! query context without touching declarations. The one exception is
//! [`Modifier::GeneratedContent`] (`::before`, `::after`), which declares
//! `content: ""` when the rule has no `content` of its own.
//!
//! Named modifiers live in [`MODIFIERS`]; modifiers that take an argument
//! (`has`, `aria`, `data`, `supports`, `groupHas`, `peerHas`) live in
//! [`PARAM_MODIFIERS`].
//!
//! ## Submodules
//!
//! - [`pseudo`]: pseudo-classes and pseudo-elements
//! - [`media`]: breakpoints, color scheme and media features
//! - [`relational`]: group, peer and direction templates
//! - [`attributes`]: ARIA state selectors and parameterized modifiers

pub mod attributes;
pub mod media;
pub mod pseudo;
pub mod relational;

use std::borrow::Cow;

use phf::phf_map;

use crate::rule::Rule;

pub use attributes::{aria, data, group_has, has, peer_has, supports};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Appended after the class selector.
    Selector(Cow<'static, str>),
    /// A pseudo-element that needs a `content` declaration to render.
    GeneratedContent(Cow<'static, str>),
    /// A selector template; `&` stands for the class.
    Template(Cow<'static, str>),
    Media(Cow<'static, str>),
    Supports(Cow<'static, str>),
}

impl Modifier {
    pub const fn selector(suffix: &'static str) -> Self {
        Modifier::Selector(Cow::Borrowed(suffix))
    }

    pub const fn media(query: &'static str) -> Self {
        Modifier::Media(Cow::Borrowed(query))
    }

    pub const fn template(template: &'static str) -> Self {
        Modifier::Template(Cow::Borrowed(template))
    }

    pub const fn generated_content(suffix: &'static str) -> Self {
        Modifier::GeneratedContent(Cow::Borrowed(suffix))
    }

    /// Wraps `rule` with this modifier's context.
    pub fn apply(&self, rule: &Rule) -> Rule {
        match self {
            Modifier::Selector(suffix) => rule.wrap_with_selector(suffix.as_ref()),
            Modifier::GeneratedContent(suffix) => rule
                .wrap_with_selector(suffix.as_ref())
                .with_default_declaration("content", "\"\""),
            Modifier::Template(template) => rule.wrap_with_selector_template(template.as_ref()),
            Modifier::Media(query) => rule.wrap_with_media_query(query.as_ref()),
            Modifier::Supports(query) => rule.wrap_with_supports_query(query.as_ref()),
        }
    }

    /// Looks up a named modifier (`hover`, `md`, `groupFocus`).
    pub fn named(name: &str) -> Option<Modifier> {
        MODIFIERS.get(name).cloned()
    }
}

/// A modifier that needs an argument.
pub type ParamModifier = fn(&str) -> Modifier;

/// Named modifiers, keyed by their chain name.
pub static MODIFIERS: phf::Map<&'static str, Modifier> = phf_map! {
    // Pseudo-classes
    "hover" => pseudo::HOVER,
    "focus" => pseudo::FOCUS,
    "active" => pseudo::ACTIVE,
    "disabled" => pseudo::DISABLED,
    "focusVisible" => pseudo::FOCUS_VISIBLE,
    "focusWithin" => pseudo::FOCUS_WITHIN,
    "firstChild" => pseudo::FIRST_CHILD,
    "lastChild" => pseudo::LAST_CHILD,
    "visited" => pseudo::VISITED,
    "checked" => pseudo::CHECKED,
    "indeterminate" => pseudo::INDETERMINATE,
    "default" => pseudo::DEFAULT,
    "required" => pseudo::REQUIRED,
    "valid" => pseudo::VALID,
    "invalid" => pseudo::INVALID,
    "inRange" => pseudo::IN_RANGE,
    "outOfRange" => pseudo::OUT_OF_RANGE,
    "placeholderShown" => pseudo::PLACEHOLDER_SHOWN,
    "autofill" => pseudo::AUTOFILL,
    "readOnly" => pseudo::READ_ONLY,
    "empty" => pseudo::EMPTY,
    "even" => pseudo::EVEN,
    "odd" => pseudo::ODD,
    "firstOfType" => pseudo::FIRST_OF_TYPE,
    "lastOfType" => pseudo::LAST_OF_TYPE,
    "onlyChild" => pseudo::ONLY_CHILD,
    "onlyOfType" => pseudo::ONLY_OF_TYPE,
    "target" => pseudo::TARGET,
    "open" => pseudo::OPEN,
    // Pseudo-elements
    "before" => pseudo::BEFORE,
    "after" => pseudo::AFTER,
    "placeholder" => pseudo::PLACEHOLDER,
    "file" => pseudo::FILE,
    "marker" => pseudo::MARKER,
    "selection" => pseudo::SELECTION,
    "firstLine" => pseudo::FIRST_LINE,
    "firstLetter" => pseudo::FIRST_LETTER,
    "backdropEl" => pseudo::BACKDROP,
    // Responsive
    "sm" => media::SM,
    "md" => media::MD,
    "lg" => media::LG,
    "xl" => media::XL,
    "_2xl" => media::XL2,
    "maxSm" => media::MAX_SM,
    "maxMd" => media::MAX_MD,
    "maxLg" => media::MAX_LG,
    "maxXl" => media::MAX_XL,
    "max2xl" => media::MAX_2XL,
    // Color scheme and media features
    "dark" => media::DARK,
    "motionReduce" => media::MOTION_REDUCE,
    "motionSafe" => media::MOTION_SAFE,
    "print" => media::PRINT,
    "portrait" => media::PORTRAIT,
    "landscape" => media::LANDSCAPE,
    "contrastMore" => media::CONTRAST_MORE,
    "contrastLess" => media::CONTRAST_LESS,
    "forcedColors" => media::FORCED_COLORS,
    // ARIA
    "ariaChecked" => attributes::ARIA_CHECKED,
    "ariaDisabled" => attributes::ARIA_DISABLED,
    "ariaExpanded" => attributes::ARIA_EXPANDED,
    "ariaHidden" => attributes::ARIA_HIDDEN,
    "ariaPressed" => attributes::ARIA_PRESSED,
    "ariaReadonly" => attributes::ARIA_READONLY,
    "ariaRequired" => attributes::ARIA_REQUIRED,
    "ariaSelected" => attributes::ARIA_SELECTED,
    // Group
    "groupHover" => relational::GROUP_HOVER,
    "groupFocus" => relational::GROUP_FOCUS,
    "groupActive" => relational::GROUP_ACTIVE,
    "groupFocusVisible" => relational::GROUP_FOCUS_VISIBLE,
    "groupFocusWithin" => relational::GROUP_FOCUS_WITHIN,
    "groupDisabled" => relational::GROUP_DISABLED,
    "groupChecked" => relational::GROUP_CHECKED,
    "groupEmpty" => relational::GROUP_EMPTY,
    "groupFirst" => relational::GROUP_FIRST,
    "groupLast" => relational::GROUP_LAST,
    "groupOdd" => relational::GROUP_ODD,
    "groupEven" => relational::GROUP_EVEN,
    "groupOpen" => relational::GROUP_OPEN,
    "groupVisited" => relational::GROUP_VISITED,
    // Peer
    "peerHover" => relational::PEER_HOVER,
    "peerFocus" => relational::PEER_FOCUS,
    "peerActive" => relational::PEER_ACTIVE,
    "peerFocusVisible" => relational::PEER_FOCUS_VISIBLE,
    "peerFocusWithin" => relational::PEER_FOCUS_WITHIN,
    "peerDisabled" => relational::PEER_DISABLED,
    "peerChecked" => relational::PEER_CHECKED,
    "peerInvalid" => relational::PEER_INVALID,
    "peerRequired" => relational::PEER_REQUIRED,
    "peerPlaceholderShown" => relational::PEER_PLACEHOLDER_SHOWN,
    "peerEmpty" => relational::PEER_EMPTY,
    "peerFirst" => relational::PEER_FIRST,
    "peerLast" => relational::PEER_LAST,
    "peerOdd" => relational::PEER_ODD,
    "peerEven" => relational::PEER_EVEN,
    "peerOpen" => relational::PEER_OPEN,
    "peerVisited" => relational::PEER_VISITED,
    // Direction
    "rtl" => relational::RTL,
    "ltr" => relational::LTR,
};

/// Modifiers that take a single string argument.
pub static PARAM_MODIFIERS: phf::Map<&'static str, ParamModifier> = phf_map! {
    "has" => has,
    "aria" => aria,
    "data" => data,
    "supports" => supports,
    "groupHas" => group_has,
    "peerHas" => peer_has,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_lookup() {
        assert_eq!(Modifier::named("hover"), Some(pseudo::HOVER));
        assert_eq!(Modifier::named("md"), Some(Modifier::media("(min-width: 768px)")));
        assert!(Modifier::named("bg").is_none());
    }

    #[test]
    fn selector_modifiers_leave_declarations_alone() {
        let rule = Rule::new([("color", "red")]);
        let hovered = pseudo::HOVER.apply(&rule);
        assert_eq!(hovered.declarations(), rule.declarations());
        assert_eq!(hovered.selectors(), [":hover"]);
    }

    #[test]
    fn generated_content_injects_empty_content_once() {
        let rule = Rule::new([("color", "red")]);
        let before = pseudo::BEFORE.apply(&rule);
        assert_eq!(before.declaration("content"), Some("\"\""));
        assert_eq!(before.selectors(), ["::before"]);

        let custom = pseudo::AFTER.apply(&Rule::new([("content", "'>'")]));
        assert_eq!(custom.declaration("content"), Some("'>'"));
    }

    #[test]
    fn param_modifiers_are_registered() {
        let data = PARAM_MODIFIERS.get("data").map(|f| f("state=open"));
        assert_eq!(data, Some(Modifier::Selector("[data-state=open]".into())));
    }
}
