//! Theme tokens for atomic CSS generation.
//!
//! This crate holds the static lookup data that utility functions resolve
//! their arguments against, plus theme creation for runtime-switchable themes.
//!
//! # Overview
//!
//! - **Scales**: the spacing scale (`4` -> `1rem`) and named sizes (`full` -> `100%`)
//! - **Colors**: shade tokens (`blue-500` -> `#3b82f6`) and named colors (`white`)
//! - **Tokens**: radii, shadows, text sizes, font weights, animations and breakpoints
//! - **Themes**: [`ThemeConfig`] -> [`Theme`], emitting `--twc-*` custom properties
//!
//! # Usage
//!
//! ```
//! use palette::{resolve_color, resolve_spacing, ThemeConfig, create_theme};
//!
//! assert_eq!(resolve_spacing(4.0), "1rem");
//! assert_eq!(resolve_color("blue-500"), "#3b82f6");
//! assert_eq!(resolve_color("#ff0000"), "#ff0000");
//!
//! let config = ThemeConfig::from_json(r#"{ "shadows": { "card": "0 1px 2px #0003" } }"#).unwrap();
//! let theme = create_theme(&config);
//! assert!(theme.css_text.starts_with(":root {"));
//! ```

pub mod colors;
pub mod error;
pub mod scale;
pub mod theme;
pub mod tokens;

// Re-export main types at crate root
pub use colors::{resolve_color, resolve_color_with_opacity};
pub use error::PaletteError;
pub use scale::{resolve_size, resolve_spacing};
pub use theme::{Theme, ThemeConfig, ThemeVars, create_theme};
pub use tokens::TextSize;
