//! Templated usage sentences in subject-object-verb order.

/// Example sentence for a base word.
pub fn sov_example(word: &str, category: &str) -> String {
    match category {
        "Disaster Management" => format!("I people {word}"),
        "Movement Actions" | "Hand Actions" => format!("I now {word}"),
        c if c.contains("Daily") || c.contains("Activities") => format!("I {word} do"),
        _ => format!("I {word}"),
    }
}

/// Example sentence for the `-ing` variant of `word`. The suffix is appended
/// to the base word as-is, so `bake` gives `I bakeing am`.
pub fn progressive_example(word: &str) -> String {
    format!("I {word}ing am")
}

/// Example sentence for the `-ed` variant of `word`, appended like
/// [`progressive_example`].
pub fn past_example(word: &str) -> String {
    format!("I yesterday {word}ed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_by_category() {
        assert_eq!(sov_example("evacuate", "Disaster Management"), "I people evacuate");
        assert_eq!(sov_example("walk", "Movement Actions"), "I now walk");
        assert_eq!(sov_example("grab", "Hand Actions"), "I now grab");
        assert_eq!(sov_example("eat", "Daily Activities"), "I eat do");
        assert_eq!(sov_example("sue", "Legal"), "I sue");
        assert_eq!(sov_example("evacuee", "General"), "I evacuee");
    }

    #[test]
    fn variant_templates_append_to_base_word() {
        assert_eq!(progressive_example("walk"), "I walking am");
        assert_eq!(past_example("walk"), "I yesterday walked");
        assert_eq!(progressive_example("bake"), "I bakeing am");
        assert_eq!(past_example("bake"), "I yesterday bakeed");
    }
}
