//! The chain's name table.
//!
//! Every name a chain understands maps to a [`Handler`] describing how an
//! access to it behaves. Names are the camelCase spellings used in chain
//! expressions (`flexCol`, `textColor`, `groupHover`). Names missing from
//! the table become raw class names.

use std::collections::HashMap;

use acss::modifiers::{MODIFIERS, Modifier, PARAM_MODIFIERS, ParamModifier};
use acss::utilities as u;
use acss::{Rule, Value, combine};
use once_cell::sync::Lazy;

/// Builds a utility's rule from call arguments.
pub type Utility = fn(&[Value]) -> Rule;

#[derive(Clone, Debug)]
pub enum Handler {
    /// A value-less style, added on access.
    Style(fn() -> Rule),
    /// A fixed class name such as `group` or `peer`.
    Raw(&'static str),
    /// A modifier: pending on access, applied to a group on call.
    Modifier(Modifier),
    /// A modifier built from a string argument.
    ParamModifier(ParamModifier),
    /// A utility taking arguments. Accessed without a call it runs with
    /// none.
    Utility(Utility),
}

/// Looks up `name`.
pub fn lookup(name: &str) -> Option<Handler> {
    if let Some(modifier) = MODIFIERS.get(name) {
        return Some(Handler::Modifier(modifier.clone()));
    }
    if let Some(param) = PARAM_MODIFIERS.get(name) {
        return Some(Handler::ParamModifier(*param));
    }
    TABLE.get(name).cloned()
}

/// Whether `name` is known to the chain.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

fn arg(args: &[Value], index: usize) -> Option<Value> {
    args.get(index).cloned()
}

/// Adapts a single-argument utility. Without an argument there is nothing
/// to declare, so the rule is empty and the composer skips it.
macro_rules! one {
    ($f:path) => {
        Handler::Utility(|args: &[Value]| match arg(args, 0) {
            Some(value) => $f(value),
            None => Rule::default(),
        })
    };
    ($f:path, $default:expr) => {
        Handler::Utility(|args: &[Value]| $f(arg(args, 0).unwrap_or_else(|| Value::from($default))))
    };
}

fn grid(args: &[Value]) -> Rule {
    match arg(args, 0) {
        Some(columns) => combine(&[u::grid(), u::grid_cols(columns)]),
        None => u::grid(),
    }
}

fn ring(args: &[Value]) -> Rule {
    let width = arg(args, 0).unwrap_or_else(|| Value::from(u::DEFAULT_RING_WIDTH));
    let color = arg(args, 1).unwrap_or_else(|| Value::from(u::DEFAULT_RING_COLOR));
    u::ring(width, color)
}

fn transition(_: &[Value]) -> Rule {
    u::transition()
}

static TABLE: Lazy<HashMap<&'static str, Handler>> = Lazy::new(|| {
    let entries: Vec<(&'static str, Handler)> = vec![
        // Spacing
        ("p", one!(u::p)),
        ("px", one!(u::px)),
        ("py", one!(u::py)),
        ("pt", one!(u::pt)),
        ("pr", one!(u::pr)),
        ("pb", one!(u::pb)),
        ("pl", one!(u::pl)),
        ("ps", one!(u::ps)),
        ("pe", one!(u::pe)),
        ("m", one!(u::m)),
        ("mx", one!(u::mx)),
        ("my", one!(u::my)),
        ("mt", one!(u::mt)),
        ("mr", one!(u::mr)),
        ("mb", one!(u::mb)),
        ("ml", one!(u::ml)),
        ("ms", one!(u::ms)),
        ("me", one!(u::me)),
        ("gap", one!(u::gap)),
        ("gapX", one!(u::gap_x)),
        ("gapY", one!(u::gap_y)),
        ("spaceX", one!(u::space_x)),
        ("spaceY", one!(u::space_y)),
        // Colors
        ("bg", one!(u::bg)),
        ("textColor", one!(u::text_color)),
        ("borderColor", one!(u::border_color)),
        // Typography
        ("text", one!(u::text)),
        ("font", one!(u::font)),
        ("fontFamily", one!(u::font_family)),
        ("tracking", one!(u::tracking)),
        ("leading", one!(u::leading)),
        ("textAlign", one!(u::text_align)),
        ("textTransform", one!(u::text_transform)),
        ("textDecoration", one!(u::text_decoration)),
        ("whitespace", one!(u::whitespace)),
        ("lineClamp", one!(u::line_clamp)),
        ("italic", Handler::Style(u::italic)),
        ("notItalic", Handler::Style(u::not_italic)),
        ("truncate", Handler::Style(u::truncate)),
        ("antialiased", Handler::Style(u::antialiased)),
        ("subpixelAntialiased", Handler::Style(u::subpixel_antialiased)),
        ("uppercase", Handler::Style(u::uppercase)),
        ("tabularNums", Handler::Style(u::tabular_nums)),
        // Layout
        ("flex", Handler::Style(u::flex)),
        ("flexCol", Handler::Style(u::flex_col)),
        ("flexRow", Handler::Style(u::flex_row)),
        ("flexWrap", Handler::Style(u::flex_wrap)),
        ("flexNowrap", Handler::Style(u::flex_nowrap)),
        ("inlineFlex", Handler::Style(u::inline_flex)),
        ("flex1", Handler::Style(u::flex_1)),
        ("flexAuto", Handler::Style(u::flex_auto)),
        ("flexNone", Handler::Style(u::flex_none)),
        ("grow", one!(u::grow, 1)),
        ("shrink", one!(u::shrink, 1)),
        ("order", one!(u::order)),
        ("grid", Handler::Utility(grid)),
        ("gridCols", one!(u::grid_cols)),
        ("gridRows", one!(u::grid_rows)),
        ("colSpan", one!(u::col_span)),
        ("w", one!(u::w)),
        ("h", one!(u::h)),
        ("size", one!(u::size)),
        ("minW", one!(u::min_w)),
        ("minH", one!(u::min_h)),
        ("maxW", one!(u::max_w)),
        ("maxH", one!(u::max_h)),
        ("display", one!(u::display)),
        ("hidden", Handler::Style(u::hidden)),
        ("block", Handler::Style(u::block)),
        ("items", one!(u::items)),
        ("justify", one!(u::justify)),
        ("self", one!(u::self_align)),
        ("overflow", one!(u::overflow)),
        ("overflowX", one!(u::overflow_x)),
        ("overflowY", one!(u::overflow_y)),
        ("relative", Handler::Style(u::relative)),
        ("absolute", Handler::Style(u::absolute)),
        ("fixed", Handler::Style(u::fixed)),
        ("sticky", Handler::Style(u::sticky)),
        ("static", Handler::Style(u::static_position)),
        ("top", one!(u::top)),
        ("right", one!(u::right)),
        ("bottom", one!(u::bottom)),
        ("left", one!(u::left)),
        ("inset", one!(u::inset)),
        ("z", one!(u::z)),
        ("aspectRatio", one!(u::aspect_ratio)),
        ("visible", Handler::Style(u::visible)),
        ("invisible", Handler::Style(u::invisible)),
        ("isolate", Handler::Style(u::isolate)),
        ("container", Handler::Style(u::container)),
        ("boxBorder", Handler::Style(u::box_border)),
        // Borders
        ("rounded", one!(u::rounded, u::DEFAULT_RADIUS)),
        ("roundedT", one!(u::rounded_t, u::DEFAULT_RADIUS)),
        ("roundedR", one!(u::rounded_r, u::DEFAULT_RADIUS)),
        ("roundedB", one!(u::rounded_b, u::DEFAULT_RADIUS)),
        ("roundedL", one!(u::rounded_l, u::DEFAULT_RADIUS)),
        ("border", one!(u::border, u::DEFAULT_BORDER_WIDTH)),
        ("borderT", one!(u::border_t, u::DEFAULT_BORDER_WIDTH)),
        ("borderR", one!(u::border_r, u::DEFAULT_BORDER_WIDTH)),
        ("borderB", one!(u::border_b, u::DEFAULT_BORDER_WIDTH)),
        ("borderL", one!(u::border_l, u::DEFAULT_BORDER_WIDTH)),
        ("borderX", one!(u::border_x, u::DEFAULT_BORDER_WIDTH)),
        ("borderY", one!(u::border_y, u::DEFAULT_BORDER_WIDTH)),
        ("borderStyle", one!(u::border_style)),
        ("ring", Handler::Utility(ring)),
        ("ringColor", one!(u::ring_color)),
        ("outline", one!(u::outline, u::DEFAULT_BORDER_WIDTH)),
        ("outlineNone", Handler::Style(u::outline_none)),
        ("outlineColor", one!(u::outline_color)),
        ("outlineOffset", one!(u::outline_offset)),
        // Effects
        ("shadow", one!(u::shadow, u::DEFAULT_SHADOW)),
        ("shadowColor", one!(u::shadow_color)),
        ("opacity", one!(u::opacity)),
        ("backdrop", one!(u::backdrop)),
        ("blur", one!(u::blur)),
        ("filter", one!(u::filter)),
        ("mixBlendMode", one!(u::mix_blend_mode)),
        // Interactivity
        ("cursor", one!(u::cursor)),
        ("select", one!(u::select)),
        ("pointerEvents", one!(u::pointer_events)),
        ("resize", one!(u::resize, "both")),
        ("appearanceNone", Handler::Style(u::appearance_none)),
        ("srOnly", Handler::Style(u::sr_only)),
        ("notSrOnly", Handler::Style(u::not_sr_only)),
        // Transitions
        ("transition", Handler::Utility(transition)),
        ("transitionAll", Handler::Style(u::transition_all)),
        ("transitionColors", Handler::Style(u::transition_colors)),
        ("transitionOpacity", Handler::Style(u::transition_opacity)),
        ("transitionShadow", Handler::Style(u::transition_shadow)),
        ("transitionTransform", Handler::Style(u::transition_transform)),
        ("transitionNone", Handler::Style(u::transition_none)),
        ("duration", one!(u::duration, u::DEFAULT_DURATION)),
        ("delay", one!(u::delay)),
        ("ease", one!(u::ease, "in-out")),
        ("animate", one!(u::animate)),
        // Raw class names
        ("group", Handler::Raw("group")),
        ("peer", Handler::Raw("peer")),
    ];
    entries.into_iter().collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_take_precedence() {
        assert!(matches!(lookup("hover"), Some(Handler::Modifier(_))));
        assert!(matches!(lookup("has"), Some(Handler::ParamModifier(_))));
        assert!(matches!(lookup("flexCol"), Some(Handler::Style(_))));
        assert!(matches!(lookup("bg"), Some(Handler::Utility(_))));
        assert!(matches!(lookup("peer"), Some(Handler::Raw("peer"))));
        assert!(lookup("my-widget").is_none());
    }

    #[test]
    fn utilities_without_arguments() {
        let Some(Handler::Utility(rounded)) = lookup("rounded") else {
            panic!("rounded is a utility");
        };
        assert_eq!(rounded(&[]).declaration("border-radius"), Some("0.25rem"));

        let Some(Handler::Utility(p)) = lookup("p") else {
            panic!("p is a utility");
        };
        assert!(p(&[]).is_empty());
        assert_eq!(p(&[Value::from(4)]).declaration("padding"), Some("1rem"));
    }

    #[test]
    fn grid_with_columns() {
        let Some(Handler::Utility(grid)) = lookup("grid") else {
            panic!("grid is a utility");
        };
        let rule = grid(&[Value::from(3)]);
        assert_eq!(rule.declaration("display"), Some("grid"));
        assert_eq!(
            rule.declaration("grid-template-columns"),
            Some("repeat(3, minmax(0, 1fr))")
        );
    }
}
