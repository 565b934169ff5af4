//! Closed list of dataset categories.

/// Bucket for words not listed under any category.
pub const DEFAULT_CATEGORY: &str = "General";

/// Category name and the words filed under it.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Disaster Management",
        &[
            "evacuate", "rescue", "distribute", "deploy", "search", "alert", "warn",
            "emergency", "danger", "safe", "shelter", "relief",
        ],
    ),
    (
        "Movement Actions",
        &[
            "walk", "run", "jump", "sit", "stand", "climb", "swim", "fly", "drive", "ride",
            "jog", "sprint", "leap",
        ],
    ),
    (
        "Hand Actions",
        &[
            "push", "pull", "lift", "carry", "hold", "grab", "throw", "catch", "touch", "point",
            "wave", "shake",
        ],
    ),
    (
        "Daily Activities",
        &[
            "eat", "drink", "cook", "clean", "wash", "read", "write", "study", "work", "play",
            "brush", "bath",
        ],
    ),
    (
        "Communication",
        &[
            "talk", "speak", "listen", "watch", "call", "text", "email", "sign", "gesture",
            "ask", "answer",
        ],
    ),
    (
        "Sports & Exercise",
        &[
            "exercise", "kick", "bat", "serve", "box", "wrestle", "yoga", "meditate", "train",
            "race",
        ],
    ),
    (
        "Professional",
        &[
            "build", "repair", "operate", "manage", "produce", "sell", "deliver", "inventory",
            "design", "plan",
        ],
    ),
    (
        "Medical",
        &[
            "diagnose", "examine", "treat", "inject", "bandage", "operate", "measure", "cough",
            "heal", "cure",
        ],
    ),
    (
        "Food Preparation",
        &["chop", "cut", "mix", "stir", "bake", "fry", "boil", "serve", "slice", "peel"],
    ),
    (
        "Technology",
        &[
            "click", "type", "download", "save", "search", "connect", "charge", "upload",
            "delete", "browse",
        ],
    ),
    (
        "Household",
        &["iron", "fold", "hang", "load", "decorate", "plug", "heat", "lock", "sweep", "mop"],
    ),
    (
        "Shopping",
        &["shop", "browse", "buy", "bargain", "return", "pack", "select", "choose", "pay"],
    ),
    (
        "Education",
        &[
            "spell", "memorize", "solve", "experiment", "present", "research", "learn", "teach",
            "practice",
        ],
    ),
    (
        "Social",
        &["meet", "greet", "smile", "laugh", "cry", "hug", "kiss", "welcome", "introduce"],
    ),
    (
        "Transportation",
        &[
            "board", "accelerate", "brake", "steer", "travel", "sail", "exit", "park",
            "commute",
        ],
    ),
    (
        "Agricultural",
        &["plant", "plow", "water", "harvest", "prune", "grow", "cultivate", "seed"],
    ),
    (
        "Construction",
        &["construct", "demolish", "drill", "hammer", "saw", "measure", "weld", "nail"],
    ),
    (
        "Environmental",
        &["recycle", "conserve", "pollute", "plant", "protect", "preserve", "reduce", "reuse"],
    ),
    (
        "Financial",
        &["earn", "spend", "save", "borrow", "budget", "invest", "pay", "receive"],
    ),
    (
        "Legal",
        &["sue", "judge", "arrest", "fine", "prosecute", "defend", "rule"],
    ),
];

/// Category of `word`. A word listed under several categories belongs to the
/// one listed last.
pub fn category_of(word: &str) -> &'static str {
    CATEGORIES
        .iter()
        .rev()
        .find(|(_, words)| words.iter().any(|w| *w == word))
        .map(|(name, _)| *name)
        .unwrap_or(DEFAULT_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_category_wins() {
        assert_eq!(category_of("search"), "Technology");
        assert_eq!(category_of("operate"), "Medical");
        assert_eq!(category_of("plant"), "Environmental");
        assert_eq!(category_of("pay"), "Financial");
    }

    #[test]
    fn unlisted_word_is_general() {
        assert_eq!(category_of("walk"), "Movement Actions");
        assert_eq!(category_of("xyz123"), DEFAULT_CATEGORY);
    }
}
