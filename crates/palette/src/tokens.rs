//! Named design tokens: radii, shadows, typography, animations and breakpoints.

use phf::phf_map;

/// A font size paired with its default line height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextSize {
    pub font_size: &'static str,
    pub line_height: &'static str,
}

impl TextSize {
    const fn new(font_size: &'static str, line_height: &'static str) -> Self {
        Self {
            font_size,
            line_height,
        }
    }
}

/// Border radius tokens. `DEFAULT` is used when `rounded()` gets no argument.
pub static RADII: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "0px",
    "sm" => "0.125rem",
    "DEFAULT" => "0.25rem",
    "md" => "0.375rem",
    "lg" => "0.5rem",
    "xl" => "0.75rem",
    "2xl" => "1rem",
    "3xl" => "1.5rem",
    "full" => "9999px",
};

/// Box shadow presets. `DEFAULT` is used when `shadow()` gets no argument.
pub static SHADOWS: phf::Map<&'static str, &'static str> = phf_map! {
    "sm" => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    "DEFAULT" => "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    "md" => "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    "lg" => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    "xl" => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    "2xl" => "0 25px 50px -12px rgb(0 0 0 / 0.25)",
    "inner" => "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)",
    "none" => "0 0 #0000",
};

pub static TEXT_SIZES: phf::Map<&'static str, TextSize> = phf_map! {
    "xs" => TextSize::new("0.75rem", "1rem"),
    "sm" => TextSize::new("0.875rem", "1.25rem"),
    "base" => TextSize::new("1rem", "1.5rem"),
    "lg" => TextSize::new("1.125rem", "1.75rem"),
    "xl" => TextSize::new("1.25rem", "1.75rem"),
    "2xl" => TextSize::new("1.5rem", "2rem"),
    "3xl" => TextSize::new("1.875rem", "2.25rem"),
    "4xl" => TextSize::new("2.25rem", "2.5rem"),
    "5xl" => TextSize::new("3rem", "1"),
    "6xl" => TextSize::new("3.75rem", "1"),
    "7xl" => TextSize::new("4.5rem", "1"),
    "8xl" => TextSize::new("6rem", "1"),
    "9xl" => TextSize::new("8rem", "1"),
};

pub static FONT_WEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "thin" => "100",
    "extralight" => "200",
    "light" => "300",
    "normal" => "400",
    "medium" => "500",
    "semibold" => "600",
    "bold" => "700",
    "extrabold" => "800",
    "black" => "900",
};

pub static FONT_FAMILIES: phf::Map<&'static str, &'static str> = phf_map! {
    "sans" => "ui-sans-serif, system-ui, sans-serif, \"Apple Color Emoji\", \"Segoe UI Emoji\", \"Segoe UI Symbol\", \"Noto Color Emoji\"",
    "serif" => "ui-serif, Georgia, Cambria, \"Times New Roman\", Times, serif",
    "mono" => "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \"Liberation Mono\", \"Courier New\", monospace",
};

pub static LETTER_SPACINGS: phf::Map<&'static str, &'static str> = phf_map! {
    "tighter" => "-0.05em",
    "tight" => "-0.025em",
    "normal" => "0em",
    "wide" => "0.025em",
    "wider" => "0.05em",
    "widest" => "0.1em",
};

pub static LINE_HEIGHTS: phf::Map<&'static str, &'static str> = phf_map! {
    "none" => "1",
    "tight" => "1.25",
    "snug" => "1.375",
    "normal" => "1.5",
    "relaxed" => "1.625",
    "loose" => "2",
};

pub static ANIMATIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "spin" => "spin 1s linear infinite",
    "ping" => "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite",
    "pulse" => "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
    "bounce" => "bounce 1s infinite",
    "none" => "none",
};

/// `@keyframes` blocks backing [`ANIMATIONS`].
pub static KEYFRAMES: phf::Map<&'static str, &'static str> = phf_map! {
    "spin" => "@keyframes spin { to { transform: rotate(360deg); } }",
    "ping" => "@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }",
    "pulse" => "@keyframes pulse { 50% { opacity: .5; } }",
    "bounce" => "@keyframes bounce { 0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8,0,1,1); } 50% { transform: none; animation-timing-function: cubic-bezier(0,0,0.2,1); } }",
};

/// Responsive breakpoints, in ascending order.
pub const BREAKPOINTS: [(&str, u32); 5] = [
    ("sm", 640),
    ("md", 768),
    ("lg", 1024),
    ("xl", 1280),
    ("2xl", 1536),
];

pub fn radius(token: &str) -> String {
    lookup(&RADII, token)
}

pub fn shadow(token: &str) -> String {
    lookup(&SHADOWS, token)
}

pub fn font_weight(token: &str) -> String {
    lookup(&FONT_WEIGHTS, token)
}

pub fn font_family(token: &str) -> String {
    lookup(&FONT_FAMILIES, token)
}

pub fn letter_spacing(token: &str) -> String {
    lookup(&LETTER_SPACINGS, token)
}

pub fn line_height(token: &str) -> String {
    lookup(&LINE_HEIGHTS, token)
}

pub fn animation(token: &str) -> String {
    lookup(&ANIMATIONS, token)
}

pub fn text_size(token: &str) -> Option<TextSize> {
    TEXT_SIZES.get(token).copied()
}

/// Width in pixels of a named breakpoint.
pub fn breakpoint(name: &str) -> Option<u32> {
    BREAKPOINTS
        .iter()
        .find(|(bp, _)| *bp == name)
        .map(|(_, px)| *px)
}

fn lookup(map: &phf::Map<&'static str, &'static str>, token: &str) -> String {
    map.get(token)
        .map(|v| (*v).to_string())
        .unwrap_or_else(|| token.to_string())
}
