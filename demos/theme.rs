//! Creates a light and a dark theme and styles a panel with theme
//! variables.
//!
//! Run with `cargo run --example theme`.

use atomcss::prelude::*;
use atomcss::theme_from_json;

const LIGHT: &str = r##"{
    "colors": { "surface": { "50": "#ffffff" }, "ink": { "900": "#0f172a" } },
    "spacing": { "panel": "1.5rem" }
}"##;

const DARK: &str = r##"{
    "name": "dark",
    "colors": { "surface": { "50": "#0f172a" }, "ink": { "900": "#f8fafc" } }
}"##;

fn main() -> atomcss::Result<()> {
    let light = theme_from_json(LIGHT)?;
    let dark = theme_from_json(DARK)?;

    let mut session = Session::new();
    let panel = session.cx([
        bg(light.vars.colors["surface"]["50"].as_str()),
        text_color(light.vars.colors["ink"]["900"].as_str()),
        p(light.vars.spacing["panel"].as_str()),
        rounded("lg"),
    ]);

    println!("{}\n", light.css_text);
    println!("{}\n", dark.css_text);
    println!("{}\n", session.generate_css());
    println!("<section class=\"{}\">...</section>", panel);
    Ok(())
}
