//! Media query modifiers.
//!
//! Breakpoints are mobile-first: `md` applies from 768px up, `maxMd` below
//! it. Stacking two media modifiers nests two `@media` blocks.

use super::Modifier;

pub const SM: Modifier = Modifier::media("(min-width: 640px)");
pub const MD: Modifier = Modifier::media("(min-width: 768px)");
pub const LG: Modifier = Modifier::media("(min-width: 1024px)");
pub const XL: Modifier = Modifier::media("(min-width: 1280px)");
pub const XL2: Modifier = Modifier::media("(min-width: 1536px)");

pub const MAX_SM: Modifier = Modifier::media("(max-width: 639px)");
pub const MAX_MD: Modifier = Modifier::media("(max-width: 767px)");
pub const MAX_LG: Modifier = Modifier::media("(max-width: 1023px)");
pub const MAX_XL: Modifier = Modifier::media("(max-width: 1279px)");
pub const MAX_2XL: Modifier = Modifier::media("(max-width: 1535px)");

pub const DARK: Modifier = Modifier::media("(prefers-color-scheme: dark)");

pub const MOTION_REDUCE: Modifier = Modifier::media("(prefers-reduced-motion: reduce)");
pub const MOTION_SAFE: Modifier = Modifier::media("(prefers-reduced-motion: no-preference)");
pub const PRINT: Modifier = Modifier::media("print");
pub const PORTRAIT: Modifier = Modifier::media("(orientation: portrait)");
pub const LANDSCAPE: Modifier = Modifier::media("(orientation: landscape)");
pub const CONTRAST_MORE: Modifier = Modifier::media("(prefers-contrast: more)");
pub const CONTRAST_LESS: Modifier = Modifier::media("(prefers-contrast: less)");
pub const FORCED_COLORS: Modifier = Modifier::media("(forced-colors: active)");

/// A `min-width` modifier for an arbitrary breakpoint, or `None` for an
/// unknown name.
pub fn min_width(breakpoint: &str) -> Option<Modifier> {
    palette::tokens::breakpoint(breakpoint)
        .map(|px| Modifier::Media(format!("(min-width: {}px)", px).into()))
}

/// The matching `max-width` modifier: one pixel below the breakpoint.
pub fn max_width(breakpoint: &str) -> Option<Modifier> {
    palette::tokens::breakpoint(breakpoint)
        .map(|px| Modifier::Media(format!("(max-width: {}px)", px - 1).into()))
}
