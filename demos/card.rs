//! Builds a card component three ways and prints the generated stylesheet.
//!
//! Run with `cargo run --example card`.

use atomcss::prelude::*;

fn main() -> atomcss::Result<()> {
    let mut session = Session::new();
    session.set_diagnostic_sink(|diagnostic| eprintln!("warning: {}", diagnostic.message));

    // Plain utility functions and modifiers.
    let container = session.cx([
        flex(),
        flex_col(),
        gap(4),
        p(6),
        rounded("xl"),
        bg("white"),
        shadow("md"),
        when([pseudo::HOVER]).apply(&[shadow("lg")]),
        when([media::MD]).apply(&[flex_row(), p(8)]),
    ]);

    // The chain macro.
    let title = tw!(text("lg").font("semibold").textColor("slate-900").groupHover.textColor("blue-600"))
        .resolve_in(&mut session);

    // A chain expression parsed at runtime.
    let button = parse_chain(
        "tw.px(4).py(2).rounded.bg('blue-500').textColor('white').transitionColors.hover(bg('blue-600'))",
    )?
    .resolve_in(&mut session);

    // A color only known at runtime.
    let accent = session.dynamic("#f97316");
    let badge = session.dcx([bg(&accent), px(2), rounded("full")]);

    println!("<div class=\"group {}\">", container);
    println!("  <h2 class=\"{}\">Title</h2>", title);
    println!("  <span class=\"{}\" style=\"{}\">new</span>", badge.class_name, badge.style_attribute());
    println!("  <button class=\"{}\">Open</button>", button);
    println!("</div>");
    println!();
    println!("{}", session.generate_css());
    Ok(())
}
