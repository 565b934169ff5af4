//! Curated word lists and their union.

use std::collections::BTreeSet;

/// Core action vocabulary drawn from the CISLR word list.
pub const CISLR_VOCABULARY: &[&str] = &[
    // Disaster Management Actions
    "evacuate", "rescue", "distribute", "deploy", "search", "alert", "warn",
    "emergency", "danger", "safe", "shelter", "relief", "aid", "support",
    "assist", "protect", "injured", "injury", "medical", "medicine", "treat",
    "flood", "earthquake", "fire", "storm", "cyclone", "tsunami", "landslide",
    "disaster", "crisis", "victim", "survivor", "damage", "destroy", "rebuild",
    "recover", "evacuee", "refugee", "volunteer", "donation", "supply", "provision",

    // Movement Actions
    "walk", "run", "jog", "sprint", "jump", "leap", "hop", "skip",
    "sit", "stand", "lie", "kneel", "crouch", "bend", "bow", "stretch",
    "crawl", "climb", "descend", "ascend", "swim", "dive", "float",
    "fly", "drive", "ride", "pedal", "roll", "spin", "rotate", "twist",
    "turn", "slide", "slip", "fall", "trip", "stumble",

    // Hand & Arm Actions
    "push", "pull", "lift", "carry", "hold", "grab", "grasp", "grip",
    "release", "drop", "throw", "toss", "catch", "hit", "strike", "punch",
    "slap", "clap", "point", "wave", "shake", "touch", "feel", "scratch",
    "rub", "pat", "tap", "poke", "squeeze", "pinch", "twist", "tear",
    "fold", "unfold", "open", "close", "lock", "unlock", "turn",

    // Daily Life Actions
    "eat", "drink", "cook", "bake", "fry", "boil", "steam", "grill",
    "clean", "wash", "wipe", "scrub", "sweep", "mop", "vacuum", "dust",
    "bath", "shower", "brush", "comb", "shave", "dress", "wear", "remove",
    "read", "write", "draw", "paint", "sketch", "color", "erase",
    "study", "learn", "teach", "explain", "demonstrate", "practice",
    "work", "type", "calculate", "measure", "weigh", "count",

    // Communication Actions
    "talk", "speak", "say", "tell", "ask", "answer", "question", "reply",
    "call", "text", "email", "message", "chat", "discuss", "argue", "debate",
    "listen", "hear", "watch", "see", "look", "observe", "examine", "inspect",
    "read", "understand", "comprehend", "interpret", "translate",
    "sign", "gesture", "indicate", "signal", "express", "communicate",

    // Sports & Exercise Actions
    "play", "exercise", "train", "practice", "compete", "race", "win", "lose",
    "kick", "dribble", "pass", "shoot", "score", "defend", "attack",
    "bat", "bowl", "field", "catch", "throw", "pitch",
    "serve", "volley", "smash", "rally",
    "box", "wrestle", "fight", "punch", "kick",
    "yoga", "meditate", "balance", "pose",

    // Work & Professional Actions
    "build", "construct", "assemble", "install", "repair", "fix", "maintain",
    "design", "plan", "organize", "arrange", "prepare", "setup",
    "operate", "control", "manage", "supervise", "coordinate",
    "produce", "manufacture", "create", "make", "craft",
    "sell", "buy", "trade", "exchange", "purchase", "pay", "receive",
    "deliver", "transport", "load", "unload", "pack", "unpack",
    "inventory", "stock", "supply", "distribute", "allocate",

    // Medical & Health Actions
    "diagnose", "examine", "check", "test", "scan", "x-ray",
    "treat", "cure", "heal", "recover", "rehabilitate",
    "inject", "vaccinate", "medicate", "prescribe", "dose",
    "bandage", "dress", "stitch", "operate", "surgery",
    "measure", "temperature", "pressure", "pulse", "heartbeat",
    "cough", "sneeze", "vomit", "bleed", "hurt", "pain", "ache",

    // Food Preparation Actions
    "chop", "cut", "slice", "dice", "mince", "shred", "grate",
    "peel", "skin", "core", "pit", "seed",
    "mix", "stir", "blend", "whisk", "beat", "fold",
    "knead", "roll", "shape", "form", "mold",
    "season", "salt", "pepper", "spice", "flavor", "taste",
    "bake", "roast", "grill", "broil", "toast",
    "fry", "sauté", "pan-fry", "deep-fry",
    "boil", "simmer", "poach", "blanch", "steam",
    "serve", "plate", "garnish", "present",
];

/// Sign vocabulary drawn from the INCLUDE corpus.
pub const INCLUDE_VOCABULARY: &[&str] = &[
    // Technology Actions
    "click", "tap", "swipe", "scroll", "zoom", "pinch",
    "type", "keyboard", "mouse", "touchscreen", "screen",
    "download", "upload", "send", "receive", "share", "forward",
    "save", "delete", "copy", "paste", "cut", "undo", "redo",
    "search", "browse", "navigate", "surf", "explore",
    "connect", "disconnect", "login", "logout", "signin", "signout",
    "charge", "battery", "power", "switch", "button", "press",

    // Household Actions
    "iron", "fold", "hang", "dry", "wash", "rinse", "spin",
    "load", "unload", "sort", "separate", "organize",
    "decorate", "arrange", "rearrange", "place", "position",
    "plug", "unplug", "connect", "disconnect",
    "light", "switch", "dim", "brighten",
    "heat", "cool", "warm", "freeze", "thaw",
    "lock", "unlock", "secure", "protect", "guard",

    // Shopping & Commerce
    "shop", "browse", "select", "choose", "pick", "decide",
    "buy", "purchase", "order", "checkout", "pay",
    "bargain", "negotiate", "discount", "sale", "offer",
    "return", "exchange", "refund", "complain",
    "pack", "wrap", "bag", "box", "deliver",

    // Education Actions
    "read", "write", "spell", "pronounce", "recite",
    "memorize", "remember", "recall", "review", "revise",
    "solve", "calculate", "compute", "add", "subtract",
    "multiply", "divide", "count", "measure",
    "experiment", "test", "observe", "record", "note",
    "present", "demonstrate", "explain", "clarify", "illustrate",
    "question", "query", "inquire", "investigate", "research",

    // Social Actions
    "meet", "greet", "welcome", "introduce", "present",
    "shake hands", "hug", "kiss", "embrace", "pat",
    "smile", "laugh", "giggle", "grin", "chuckle",
    "cry", "weep", "sob", "tear", "sad",
    "angry", "mad", "furious", "upset", "irritated",
    "happy", "joyful", "cheerful", "excited", "thrilled",
    "surprised", "shocked", "amazed", "astonished",
    "confused", "puzzled", "uncertain", "doubtful",

    // Transportation Actions
    "board", "embark", "disembark", "alight", "exit",
    "accelerate", "brake", "stop", "park", "reverse",
    "steer", "navigate", "direct", "guide", "lead",
    "travel", "journey", "commute", "transport", "transfer",
    "fly", "sail", "cruise", "voyage", "navigate",
];

/// Phrase-level actions drawn from ISLTranslate.
pub const ISLTRANSLATE_VOCABULARY: &[&str] = &[
    // Agricultural Actions
    "plant", "sow", "seed", "grow", "cultivate", "farm",
    "plow", "till", "dig", "hoe", "rake", "weed",
    "water", "irrigate", "spray", "fertilize", "compost",
    "harvest", "reap", "gather", "collect", "pick",
    "prune", "trim", "cut", "crop", "thresh",

    // Construction Actions
    "build", "construct", "erect", "raise", "assemble",
    "demolish", "destroy", "dismantle", "tear down",
    "dig", "excavate", "drill", "bore", "tunnel",
    "pour", "concrete", "cement", "plaster", "paint",
    "hammer", "nail", "screw", "bolt", "weld",
    "saw", "cut", "drill", "sand", "polish",
    "measure", "level", "align", "square", "plumb",

    // Environmental Actions
    "recycle", "reuse", "reduce", "conserve", "preserve",
    "pollute", "contaminate", "dirty", "clean", "purify",
    "plant", "tree", "garden", "landscape", "green",
    "protect", "conserve", "save", "guard", "defend",

    // Financial Actions
    "earn", "make", "gain", "profit", "income",
    "spend", "pay", "purchase", "buy", "invest",
    "save", "deposit", "withdraw", "transfer", "send",
    "borrow", "lend", "loan", "credit", "debt",
    "budget", "plan", "calculate", "account", "balance",

    // Legal Actions
    "sue", "prosecute", "defend", "argue", "plead",
    "judge", "rule", "decide", "verdict", "sentence",
    "arrest", "detain", "custody", "jail", "prison",
    "fine", "penalty", "punish", "reward", "compensate",
];

/// Union several word lists into one deduplicated set.
///
/// Iteration order of the result is lexicographic, which is the order rows
/// are generated in.
pub fn aggregate(lists: &[&[&str]]) -> BTreeSet<String> {
    lists
        .iter()
        .flat_map(|list| list.iter())
        .map(|w| w.to_string())
        .collect()
}

/// All built-in vocabulary.
pub fn builtin_vocabulary() -> BTreeSet<String> {
    aggregate(&[CISLR_VOCABULARY, INCLUDE_VOCABULARY, ISLTRANSLATE_VOCABULARY])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let words = aggregate(&[&["run", "walk"], &["walk", "fly"]]);
        let words: Vec<_> = words.into_iter().collect();
        assert_eq!(words, vec!["fly", "run", "walk"]);
    }

    #[test]
    fn builtin_contains_every_list() {
        let words = builtin_vocabulary();
        for w in CISLR_VOCABULARY
            .iter()
            .chain(INCLUDE_VOCABULARY)
            .chain(ISLTRANSLATE_VOCABULARY)
        {
            assert!(words.contains(*w), "{w} missing");
        }
    }
}
