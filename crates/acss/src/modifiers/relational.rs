//! Selector templates relative to another element.
//!
//! Group modifiers style a descendant of a `.group` element, peer modifiers
//! style a later sibling of a `.peer` element, and direction modifiers
//! scope to a `[dir]` ancestor.

use super::Modifier;

pub const GROUP_HOVER: Modifier = Modifier::template(".group:hover &");
pub const GROUP_FOCUS: Modifier = Modifier::template(".group:focus &");
pub const GROUP_ACTIVE: Modifier = Modifier::template(".group:active &");
pub const GROUP_FOCUS_VISIBLE: Modifier = Modifier::template(".group:focus-visible &");
pub const GROUP_FOCUS_WITHIN: Modifier = Modifier::template(".group:focus-within &");
pub const GROUP_DISABLED: Modifier = Modifier::template(".group:disabled &");
pub const GROUP_CHECKED: Modifier = Modifier::template(".group:checked &");
pub const GROUP_EMPTY: Modifier = Modifier::template(".group:empty &");
pub const GROUP_FIRST: Modifier = Modifier::template(".group:first-child &");
pub const GROUP_LAST: Modifier = Modifier::template(".group:last-child &");
pub const GROUP_ODD: Modifier = Modifier::template(".group:nth-child(odd) &");
pub const GROUP_EVEN: Modifier = Modifier::template(".group:nth-child(even) &");
pub const GROUP_OPEN: Modifier = Modifier::template(".group[open] &");
pub const GROUP_VISITED: Modifier = Modifier::template(".group:visited &");

pub const PEER_HOVER: Modifier = Modifier::template(".peer:hover ~ &");
pub const PEER_FOCUS: Modifier = Modifier::template(".peer:focus ~ &");
pub const PEER_ACTIVE: Modifier = Modifier::template(".peer:active ~ &");
pub const PEER_FOCUS_VISIBLE: Modifier = Modifier::template(".peer:focus-visible ~ &");
pub const PEER_FOCUS_WITHIN: Modifier = Modifier::template(".peer:focus-within ~ &");
pub const PEER_DISABLED: Modifier = Modifier::template(".peer:disabled ~ &");
pub const PEER_CHECKED: Modifier = Modifier::template(".peer:checked ~ &");
pub const PEER_INVALID: Modifier = Modifier::template(".peer:invalid ~ &");
pub const PEER_REQUIRED: Modifier = Modifier::template(".peer:required ~ &");
pub const PEER_PLACEHOLDER_SHOWN: Modifier = Modifier::template(".peer:placeholder-shown ~ &");
pub const PEER_EMPTY: Modifier = Modifier::template(".peer:empty ~ &");
pub const PEER_FIRST: Modifier = Modifier::template(".peer:first-child ~ &");
pub const PEER_LAST: Modifier = Modifier::template(".peer:last-child ~ &");
pub const PEER_ODD: Modifier = Modifier::template(".peer:nth-child(odd) ~ &");
pub const PEER_EVEN: Modifier = Modifier::template(".peer:nth-child(even) ~ &");
pub const PEER_OPEN: Modifier = Modifier::template(".peer[open] ~ &");
pub const PEER_VISITED: Modifier = Modifier::template(".peer:visited ~ &");

pub const RTL: Modifier = Modifier::template("[dir=\"rtl\"] &");
pub const LTR: Modifier = Modifier::template("[dir=\"ltr\"] &");
