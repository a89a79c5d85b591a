//! Theme creation.
//!
//! A [`ThemeConfig`] lists design tokens. [`create_theme`] turns it into a
//! block of `--twc-*` custom properties plus a mirrored [`ThemeVars`] whose
//! leaves are `var(..)` references that can be handed to utility functions.
//!
//! The theme named `default` targets `:root`; any other name targets
//! `[data-theme="<name>"]`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

pub const DEFAULT_THEME: &str = "default";
const VAR_PREFIX: &str = "--twc";

/// A font size / line height pair as written in theme configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSizeConfig {
    #[serde(alias = "font_size")]
    pub font_size: String,
    #[serde(alias = "line_height")]
    pub line_height: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyConfig {
    #[serde(alias = "text_sizes")]
    pub text_sizes: IndexMap<String, TextSizeConfig>,
    #[serde(alias = "font_weights")]
    pub font_weights: IndexMap<String, String>,
}

/// Design tokens for one theme. Map order is preserved from the input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: Option<String>,
    /// Color name -> shade -> value.
    pub colors: IndexMap<String, IndexMap<String, String>>,
    pub spacing: IndexMap<String, String>,
    pub typography: TypographyConfig,
    pub borders: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
}

impl ThemeConfig {
    /// Parse a theme configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let config: ThemeConfig = serde_json::from_str(json)?;
        if let Some(name) = &config.name {
            if name.is_empty() || name.contains(['"', ']', '\\']) {
                return Err(PaletteError::InvalidName(name.clone()));
            }
        }
        Ok(config)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_THEME)
    }
}

/// `var(..)` references mirroring a [`ThemeConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ThemeVars {
    pub colors: IndexMap<String, IndexMap<String, String>>,
    pub spacing: IndexMap<String, String>,
    pub text_sizes: IndexMap<String, TextSizeConfig>,
    pub font_weights: IndexMap<String, String>,
    pub borders: IndexMap<String, String>,
    pub shadows: IndexMap<String, String>,
}

/// The output of [`create_theme`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    /// A complete rule declaring every custom property, or empty when the
    /// configuration has no tokens.
    pub css_text: String,
    pub vars: ThemeVars,
}

impl Theme {
    /// Selector the theme's custom properties are declared under.
    pub fn selector(&self) -> String {
        selector_for(&self.name)
    }
}

fn selector_for(name: &str) -> String {
    if name == DEFAULT_THEME {
        ":root".to_string()
    } else {
        format!("[data-theme=\"{}\"]", name)
    }
}

fn var_name(parts: &[&str]) -> String {
    let mut name = String::from(VAR_PREFIX);
    for part in parts {
        name.push('-');
        name.push_str(part);
    }
    name
}

fn var_ref(name: &str) -> String {
    format!("var({})", name)
}

/// Collects `  --name: value;` lines and hands back the matching reference.
struct PropertyWriter {
    lines: Vec<String>,
}

impl PropertyWriter {
    fn declare(&mut self, parts: &[&str], value: &str) -> String {
        let name = var_name(parts);
        self.lines.push(format!("  {}: {};", name, value));
        var_ref(&name)
    }
}

/// Build the custom-property block and `var()` accessors for a theme.
pub fn create_theme(config: &ThemeConfig) -> Theme {
    let name = config.name().to_string();
    let mut out = PropertyWriter { lines: Vec::new() };
    let mut vars = ThemeVars::default();

    for (color, scale) in &config.colors {
        let shades = vars.colors.entry(color.clone()).or_default();
        for (shade, value) in scale {
            let reference = out.declare(&["color", color, shade], value);
            shades.insert(shade.clone(), reference);
        }
    }

    for (key, value) in &config.spacing {
        let reference = out.declare(&["spacing", key], value);
        vars.spacing.insert(key.clone(), reference);
    }

    for (size, text) in &config.typography.text_sizes {
        let font_size = out.declare(&["text", size, "fs"], &text.font_size);
        let line_height = out.declare(&["text", size, "lh"], &text.line_height);
        vars.text_sizes.insert(
            size.clone(),
            TextSizeConfig {
                font_size,
                line_height,
            },
        );
    }

    for (weight, value) in &config.typography.font_weights {
        let reference = out.declare(&["font", weight], value);
        vars.font_weights.insert(weight.clone(), reference);
    }

    for (border, value) in &config.borders {
        let reference = out.declare(&["border", border], value);
        vars.borders.insert(border.clone(), reference);
    }

    for (shadow, value) in &config.shadows {
        let reference = out.declare(&["shadow", shadow], value);
        vars.shadows.insert(shadow.clone(), reference);
    }

    let css_text = if out.lines.is_empty() {
        String::new()
    } else {
        format!("{} {{\n{}\n}}", selector_for(&name), out.lines.join("\n"))
    };

    Theme {
        name,
        css_text,
        vars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_targets_root() {
        let config = ThemeConfig::from_json(r##"{ "colors": { "primary": { "500": "#3b82f6" } } }"##)
            .unwrap();
        let theme = create_theme(&config);
        assert_eq!(theme.name, "default");
        assert!(theme.css_text.starts_with(":root {"));
        assert!(!theme.css_text.contains("data-theme"));
    }

    #[test]
    fn named_theme_targets_data_attribute() {
        let config = ThemeConfig {
            name: Some("dark".into()),
            ..Default::default()
        };
        let theme = create_theme(&config);
        assert_eq!(theme.selector(), "[data-theme=\"dark\"]");
        assert_eq!(theme.css_text, "");
    }

    #[test]
    fn rejects_names_that_break_the_selector() {
        let err = ThemeConfig::from_json(r#"{ "name": "a\"]" }"#).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidName(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = ThemeConfig::from_json("{ colors: ").unwrap_err();
        assert!(matches!(err, PaletteError::InvalidConfig(_)));
    }

    #[test]
    fn accepts_snake_case_typography_keys() {
        let config = ThemeConfig::from_json(
            r#"{ "typography": { "font_weights": { "bold": "800" } } }"#,
        )
        .unwrap();
        let theme = create_theme(&config);
        assert_eq!(theme.vars.font_weights["bold"], "var(--twc-font-bold)");
    }
}
