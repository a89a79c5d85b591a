//! Atomic CSS from composable style rules.
//!
//! This crate bundles the workspace:
//!
//! - [`acss`]: rules, modifiers, utilities, composition and the registry
//! - [`fluent`]: chains, the `tw!` macro and textual chain expressions
//! - [`palette`]: theme tokens and theme creation
//!
//! ```
//! use atomcss::prelude::*;
//!
//! let mut session = Session::new();
//! let button = tw!(px(4).py(2).rounded.bg("blue-500").hover(bg("blue-600")));
//! let class = button.resolve_in(&mut session);
//!
//! assert_eq!(class.split(' ').count(), 5);
//! assert!(session.generate_css().contains(":hover"));
//! ```

pub mod error;

pub use acss;
pub use fluent;
pub use palette;

pub use error::{AtomError, Result};
// Re-export the log crate so users can use atomcss::log::info!, etc.
pub use log;

pub use acss::{
    Composition, Diagnostic, DiagnosticKind, DiagnosticKinds, DynamicResult, DynamicValue, Item,
    Rule, Session, SessionConfig, StylesheetPublisher, Value, combine, css, cx, dcx, dynamic,
    generate_css, layer, reset_global, when,
};
pub use fluent::{Chain, parse_chain, tw};
pub use palette::{Theme, ThemeConfig, create_theme};

/// Parses a chain expression and resolves it on the global session.
///
/// ```
/// let class = atomcss::class_for("tw.flex.gap(2)").unwrap();
/// assert_eq!(class.split(' ').count(), 2);
/// ```
pub fn class_for(expression: &str) -> Result<String> {
    Ok(parse_chain(expression)?.resolve())
}

/// Builds a theme from its JSON configuration.
pub fn theme_from_json(json: &str) -> Result<Theme> {
    let config = ThemeConfig::from_json(json)?;
    Ok(create_theme(&config))
}

/// Installs the file logger from [`fluent`].
pub fn init_logger(path: impl Into<std::path::PathBuf>) -> Result<()> {
    Ok(fluent::init_logger(path)?)
}

/// Everything needed to compose styles.
pub mod prelude {
    pub use acss::modifiers::{self, media, pseudo, relational};
    pub use acss::utilities::*;
    pub use acss::{
        DynamicResult, Rule, Session, SessionConfig, Value, combine, css, cx, dcx, dynamic,
        generate_css, layer, when,
    };
    pub use fluent::{Chain, parse_chain, tw};
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::prelude::*;
    use super::{AtomError, StylesheetPublisher, class_for, theme_from_json};

    static LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn theme_vars_feed_utilities() {
        let theme =
            theme_from_json(r##"{ "name": "brand", "colors": { "brand": { "500": "#ff5500" } } }"##)
                .unwrap();
        assert_eq!(theme.selector(), "[data-theme=\"brand\"]");

        let mut session = Session::new();
        let class = session.cx([bg(theme.vars.colors["brand"]["500"].as_str())]);
        let css = session.generate_css().replace(&class, "x");
        insta::assert_snapshot!(css, @r"
        .x {
          background-color: var(--twc-color-brand-500);
        }
        ");
    }

    #[test]
    fn invalid_inputs_surface_as_errors() {
        assert!(matches!(theme_from_json("{ nope"), Err(AtomError::Theme(_))));
        assert!(matches!(
            theme_from_json(r#"{ "name": "a]b" }"#),
            Err(AtomError::Theme(_))
        ));
        assert!(matches!(class_for("tw.p("), Err(AtomError::Chain(_))));
    }

    #[test]
    fn class_for_uses_the_global_session() {
        let _guard = LOCK.lock().unwrap_or_else(|e| e.into_inner());
        crate::reset_global();

        let class = class_for("tw.flex.itemsCenter.gap(2)").unwrap();
        let tokens: Vec<&str> = class.split(' ').collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1], "itemsCenter");
        assert!(generate_css().contains("gap: 0.5rem;"));
    }

    #[test]
    fn publisher_sees_chain_resolutions() {
        let mut session = Session::new();
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&published);
        let mut publisher = StylesheetPublisher::attach(&mut session, move |css: &str| {
            sink.lock().unwrap().push(css.to_string())
        });

        tw!(flex.p(4)).resolve_in(&mut session);
        tw!(hover(bg("red-500"))).resolve_in(&mut session);
        assert!(publisher.flush(&session));
        assert!(!publisher.flush(&session));

        let published = published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert!(published[0].contains(":hover"));
    }
}
