//! Color tokens.
//!
//! Shade tokens use the `name-shade` form (`blue-500`); a handful of named
//! colors (`white`, `current`) map to keywords. Anything else is treated as a
//! raw CSS color and passed through.

use phf::phf_map;

/// Shade tokens, keyed `name-shade`.
pub static SHADES: phf::Map<&'static str, &'static str> = phf_map! {
    "slate-50" => "#f8fafc",
    "slate-100" => "#f1f5f9",
    "slate-200" => "#e2e8f0",
    "slate-300" => "#cbd5e1",
    "slate-400" => "#94a3b8",
    "slate-500" => "#64748b",
    "slate-600" => "#475569",
    "slate-700" => "#334155",
    "slate-800" => "#1e293b",
    "slate-900" => "#0f172a",
    "slate-950" => "#020617",
    "gray-50" => "#f9fafb",
    "gray-100" => "#f3f4f6",
    "gray-200" => "#e5e7eb",
    "gray-300" => "#d1d5db",
    "gray-400" => "#9ca3af",
    "gray-500" => "#6b7280",
    "gray-600" => "#4b5563",
    "gray-700" => "#374151",
    "gray-800" => "#1f2937",
    "gray-900" => "#111827",
    "gray-950" => "#030712",
    "zinc-50" => "#fafafa",
    "zinc-100" => "#f4f4f5",
    "zinc-200" => "#e4e4e7",
    "zinc-300" => "#d4d4d8",
    "zinc-400" => "#a1a1aa",
    "zinc-500" => "#71717a",
    "zinc-600" => "#52525b",
    "zinc-700" => "#3f3f46",
    "zinc-800" => "#27272a",
    "zinc-900" => "#18181b",
    "zinc-950" => "#09090b",
    "red-50" => "#fef2f2",
    "red-100" => "#fee2e2",
    "red-200" => "#fecaca",
    "red-300" => "#fca5a5",
    "red-400" => "#f87171",
    "red-500" => "#ef4444",
    "red-600" => "#dc2626",
    "red-700" => "#b91c1c",
    "red-800" => "#991b1b",
    "red-900" => "#7f1d1d",
    "red-950" => "#450a0a",
    "amber-50" => "#fffbeb",
    "amber-100" => "#fef3c7",
    "amber-200" => "#fde68a",
    "amber-300" => "#fcd34d",
    "amber-400" => "#fbbf24",
    "amber-500" => "#f59e0b",
    "amber-600" => "#d97706",
    "amber-700" => "#b45309",
    "amber-800" => "#92400e",
    "amber-900" => "#78350f",
    "amber-950" => "#451a03",
    "green-50" => "#f0fdf4",
    "green-100" => "#dcfce7",
    "green-200" => "#bbf7d0",
    "green-300" => "#86efac",
    "green-400" => "#4ade80",
    "green-500" => "#22c55e",
    "green-600" => "#16a34a",
    "green-700" => "#15803d",
    "green-800" => "#166534",
    "green-900" => "#14532d",
    "green-950" => "#052e16",
    "blue-50" => "#eff6ff",
    "blue-100" => "#dbeafe",
    "blue-200" => "#bfdbfe",
    "blue-300" => "#93c5fd",
    "blue-400" => "#60a5fa",
    "blue-500" => "#3b82f6",
    "blue-600" => "#2563eb",
    "blue-700" => "#1d4ed8",
    "blue-800" => "#1e40af",
    "blue-900" => "#1e3a8a",
    "blue-950" => "#172554",
    "indigo-50" => "#eef2ff",
    "indigo-100" => "#e0e7ff",
    "indigo-200" => "#c7d2fe",
    "indigo-300" => "#a5b4fc",
    "indigo-400" => "#818cf8",
    "indigo-500" => "#6366f1",
    "indigo-600" => "#4f46e5",
    "indigo-700" => "#4338ca",
    "indigo-800" => "#3730a3",
    "indigo-900" => "#312e81",
    "indigo-950" => "#1e1b4b",
    "purple-50" => "#faf5ff",
    "purple-100" => "#f3e8ff",
    "purple-200" => "#e9d5ff",
    "purple-300" => "#d8b4fe",
    "purple-400" => "#c084fc",
    "purple-500" => "#a855f7",
    "purple-600" => "#9333ea",
    "purple-700" => "#7e22ce",
    "purple-800" => "#6b21a8",
    "purple-900" => "#581c87",
    "purple-950" => "#3b0764",
    "pink-50" => "#fdf2f8",
    "pink-100" => "#fce7f3",
    "pink-200" => "#fbcfe8",
    "pink-300" => "#f9a8d4",
    "pink-400" => "#f472b6",
    "pink-500" => "#ec4899",
    "pink-600" => "#db2777",
    "pink-700" => "#be185d",
    "pink-800" => "#9d174d",
    "pink-900" => "#831843",
    "pink-950" => "#500724",
};

/// Named colors that are not part of a shade scale.
pub static NAMED: phf::Map<&'static str, &'static str> = phf_map! {
    "white" => "#ffffff",
    "black" => "#000000",
    "transparent" => "transparent",
    "current" => "currentColor",
    "inherit" => "inherit",
};

/// Resolves a color token, or returns the input unchanged when it is not one.
pub fn resolve_color(token: &str) -> String {
    NAMED
        .get(token)
        .or_else(|| SHADES.get(token))
        .map(|v| (*v).to_string())
        .unwrap_or_else(|| token.to_string())
}

/// Resolves a color token and applies an opacity percentage (`0..=100`).
///
/// Six-digit hex colors become `rgb(r g b / a)`; other colors are mixed with
/// `transparent` through `color-mix`.
pub fn resolve_color_with_opacity(token: &str, opacity: f64) -> String {
    let color = resolve_color(token);
    let alpha = (opacity / 100.0).clamp(0.0, 1.0);
    match parse_hex(&color) {
        Some((r, g, b)) => format!("rgb({r} {g} {b} / {alpha})"),
        None => format!("color-mix(in srgb, {color} {opacity}%, transparent)"),
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
