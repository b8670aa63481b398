//! Text normalization
//!
//! Raw extracted text arrives full of bullet glyphs and ragged whitespace.
//! `normalize` deletes the glyphs and collapses whitespace runs to single
//! spaces. The function is pure and idempotent.

use regex::Regex;
use std::sync::OnceLock;

fn bullet_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[•\*\-\|➢▪◦●]").expect("Invalid bullet regex"))
}

fn whitespace_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

/// Strip bullet glyphs (deleted, not replaced with space) and collapse all
/// whitespace runs, trimming the ends.
pub fn normalize(text: &str) -> String {
    let stripped = bullet_regex().replace_all(text, "");
    whitespace_regex()
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_removed() {
        let text = "• Rust development\n▪ Systems programming\n➢ Networking";
        let normalized = normalize(text);
        assert_eq!(normalized, "Rust development Systems programming Networking");
    }

    #[test]
    fn test_glyphs_deleted_not_spaced() {
        // "co-located" loses its hyphen by deletion, not replacement
        assert_eq!(normalize("co-located"), "colocated");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let text = "  Python\t\tdeveloper \n\n cloud   infrastructure  ";
        assert_eq!(normalize(text), "Python developer cloud infrastructure");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t  "), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "• Rust | Python * Go",
            "  plain   text  ",
            "",
            "already normalized",
        ];
        for text in samples {
            let once = normalize(text);
            assert_eq!(normalize(&once), once);
        }
    }
}
