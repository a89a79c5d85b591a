//! Spacing and size scales.
//!
//! Numeric utility arguments are looked up in [`SPACING`]. Values missing
//! from the table fall back to `n * 0.25rem`, so the scale is unbounded.

use phf::phf_map;

/// The spacing scale, keyed by the number's display form (`"0.5"`, `"4"`).
pub static SPACING: phf::Map<&'static str, &'static str> = phf_map! {
    "0" => "0px",
    "px" => "1px",
    "0.5" => "0.125rem",
    "1" => "0.25rem",
    "1.5" => "0.375rem",
    "2" => "0.5rem",
    "2.5" => "0.625rem",
    "3" => "0.75rem",
    "3.5" => "0.875rem",
    "4" => "1rem",
    "5" => "1.25rem",
    "6" => "1.5rem",
    "7" => "1.75rem",
    "8" => "2rem",
    "9" => "2.25rem",
    "10" => "2.5rem",
    "11" => "2.75rem",
    "12" => "3rem",
    "14" => "3.5rem",
    "16" => "4rem",
    "20" => "5rem",
    "24" => "6rem",
    "28" => "7rem",
    "32" => "8rem",
    "36" => "9rem",
    "40" => "10rem",
    "44" => "11rem",
    "48" => "12rem",
    "52" => "13rem",
    "56" => "14rem",
    "60" => "15rem",
    "64" => "16rem",
    "72" => "18rem",
    "80" => "20rem",
    "96" => "24rem",
};

/// Named sizes accepted by width/height utilities.
pub static SIZES: phf::Map<&'static str, &'static str> = phf_map! {
    "full" => "100%",
    "screen" => "100vw",
    "screenH" => "100vh",
    "min" => "min-content",
    "max" => "max-content",
    "fit" => "fit-content",
    "auto" => "auto",
};

/// Resolves a numeric spacing step to a CSS length.
pub fn resolve_spacing(step: f64) -> String {
    let key = step.to_string();
    match SPACING.get(key.as_str()) {
        Some(value) => (*value).to_string(),
        None => format!("{}rem", step * 0.25),
    }
}

/// Resolves a size token (`full`, `screen`, a spacing key) or passes the
/// string through unchanged.
pub fn resolve_size(token: &str) -> String {
    SIZES
        .get(token)
        .or_else(|| SPACING.get(token))
        .map(|v| (*v).to_string())
        .unwrap_or_else(|| token.to_string())
}
