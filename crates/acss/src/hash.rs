//! Identity hashing.
//!
//! A rule's identity covers its declarations (independent of insertion
//! order), selector suffixes, media and supports queries, selector template
//! and layer. The 64-bit digest is rendered in base 36 behind a prefix so it
//! is usable as a class name.

use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::rule::Rule;

pub const DEFAULT_CLASS_PREFIX: &str = "_";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Field separators keep `["ab", "c"]` and `["a", "bc"]` apart.
const UNIT: u8 = 0x1f;
const RECORD: u8 = 0x1e;

fn write_str(hasher: &mut FxHasher, value: &str) {
    hasher.write(value.as_bytes());
    hasher.write_u8(UNIT);
}

fn write_list(hasher: &mut FxHasher, items: &[String]) {
    hasher.write_usize(items.len());
    for item in items {
        write_str(hasher, item);
    }
    hasher.write_u8(RECORD);
}

/// The 64-bit identity of `rule` at `layer`.
pub fn fingerprint(rule: &Rule, layer: u64) -> u64 {
    let mut hasher = FxHasher::default();

    let mut declarations: Vec<(&String, &String)> = rule.declarations().iter().collect();
    declarations.sort_unstable();
    hasher.write_usize(declarations.len());
    for (property, value) in declarations {
        write_str(&mut hasher, property);
        write_str(&mut hasher, value);
    }
    hasher.write_u8(RECORD);

    write_list(&mut hasher, rule.selectors());
    write_list(&mut hasher, rule.media_queries());
    write_list(&mut hasher, rule.supports_queries());
    match rule.selector_template() {
        Some(template) => {
            hasher.write_u8(1);
            write_str(&mut hasher, template);
        }
        None => hasher.write_u8(0),
    }
    hasher.write_u64(layer);
    hasher.finish()
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::with_capacity(13);
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

/// Generates the class name for `rule` at `layer` using `prefix`.
///
/// The prefix must be a valid start of a CSS class name; the default `_`
/// keeps names from starting with a digit.
pub fn class_name(rule: &Rule, layer: u64, prefix: &str) -> String {
    format!("{}{}", prefix, to_base36(fingerprint(rule, layer)))
}

/// [`class_name`] with the default prefix.
pub fn generate_hash(rule: &Rule, layer: u64) -> String {
    class_name(rule, layer, DEFAULT_CLASS_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padding() -> Rule {
        Rule::new([("padding", "1rem")])
    }

    #[test]
    fn deterministic() {
        assert_eq!(generate_hash(&padding(), 3), generate_hash(&padding(), 3));
    }

    #[test]
    fn layer_changes_the_hash() {
        assert_ne!(generate_hash(&padding(), 0), generate_hash(&padding(), 1));
    }

    #[test]
    fn declaration_order_does_not_matter() {
        let a = Rule::new([("padding", "1rem"), ("color", "red")]);
        let b = Rule::new([("color", "red"), ("padding", "1rem")]);
        assert_eq!(generate_hash(&a, 0), generate_hash(&b, 0));
    }

    #[test]
    fn context_changes_the_hash() {
        let base = padding();
        let variants = [
            base.wrap_with_selector(":hover"),
            base.wrap_with_media_query("print"),
            base.wrap_with_supports_query("(display: grid)"),
            base.wrap_with_selector_template(".group:hover &"),
            Rule::new([("padding", "2rem")]),
        ];
        let plain = generate_hash(&base, 0);
        for variant in &variants {
            assert_ne!(generate_hash(variant, 0), plain, "{:?}", variant);
        }
    }

    #[test]
    fn field_boundaries_are_respected() {
        let a = Rule::new([("ab", "c")]);
        let b = Rule::new([("a", "bc")]);
        assert_ne!(generate_hash(&a, 0), generate_hash(&b, 0));
    }

    #[test]
    fn class_names_are_valid_identifiers() {
        for layer in 0..200 {
            let name = generate_hash(&padding(), layer);
            assert!(name.starts_with('_'));
            assert!(name[1..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u64::MAX), "3w5e11264sgsf");
    }
}
