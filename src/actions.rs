//! Word to sign action resolution.
//!
//! Each vocabulary word names something the signing avatar should *do*; the
//! dictionary below maps the word to that action, and [`resolve_action`]
//! checks the result against the available assets.

use std::collections::HashMap;

use crate::inventory::AssetInventory;

pub(crate) const ACTION_TABLE: &[(&str, &str)] = &[
    // Disaster Management
    ("evacuate", "run"), ("rescue", "carry"), ("distribute", "give"), ("deploy", "send"),
    ("search", "find"), ("alert", "call"), ("warn", "wave"), ("emergency", "run"),
    ("danger", "stop"), ("safe", "protect"), ("shelter", "house"), ("relief", "help"),
    ("aid", "give"), ("support", "hold"), ("assist", "help"), ("protect", "guard"),
    ("injured", "fall"), ("injury", "hurt"), ("medical", "hospital"), ("medicine", "pill"),
    ("treat", "care"), ("flood", "water"), ("earthquake", "shake"), ("fire", "burn"),
    ("storm", "wind"), ("cyclone", "spin"), ("tsunami", "wave"), ("landslide", "fall"),
    ("disaster", "break"), ("crisis", "problem"), ("victim", "person"), ("survivor", "person"),
    ("damage", "break"), ("destroy", "break"), ("rebuild", "build"), ("recover", "improve"),

    // Movement
    ("walk", "walk"), ("run", "run"), ("jog", "run"), ("sprint", "run"), ("jump", "jump"),
    ("leap", "jump"), ("hop", "jump"), ("skip", "jump"), ("sit", "sit"), ("stand", "stand"),
    ("lie", "sleep"), ("kneel", "bow"), ("crouch", "bend"), ("bend", "bow"), ("bow", "bow"),
    ("stretch", "reach"), ("crawl", "move"), ("climb", "up"), ("descend", "down"),
    ("ascend", "up"), ("swim", "swim"), ("dive", "jump"), ("float", "swim"), ("fly", "fly"),
    ("drive", "car"), ("ride", "bike"), ("pedal", "cycle"), ("roll", "turn"),
    ("spin", "rotate"), ("rotate", "turn"), ("twist", "turn"), ("turn", "turn"),
    ("slide", "move"), ("slip", "fall"), ("fall", "fall"), ("trip", "fall"),
    ("stumble", "fall"),

    // Hand & Arm Actions
    ("push", "push"), ("pull", "pull"), ("lift", "carry"), ("carry", "carry"), ("hold", "hold"),
    ("grab", "take"), ("grasp", "hold"), ("grip", "hold"), ("release", "open"),
    ("drop", "fall"), ("throw", "throw"), ("toss", "throw"), ("catch", "catch"),
    ("hit", "strike"), ("strike", "hit"), ("punch", "hit"), ("slap", "hit"), ("clap", "clap"),
    ("point", "show"), ("wave", "wave"), ("shake", "shake"), ("touch", "touch"),
    ("feel", "touch"), ("scratch", "rub"), ("rub", "rub"), ("pat", "touch"), ("tap", "touch"),
    ("poke", "touch"), ("squeeze", "press"), ("pinch", "hold"), ("tear", "sad"),
    ("fold", "fold"), ("unfold", "open"), ("open", "open"), ("close", "close"),
    ("lock", "lock"), ("unlock", "open"),

    // Daily Activities
    ("eat", "eat"), ("drink", "drink"), ("cook", "cook"), ("bake", "cook"), ("fry", "cook"),
    ("boil", "cook"), ("steam", "cook"), ("grill", "cook"), ("clean", "wash"), ("wash", "wash"),
    ("wipe", "clean"), ("scrub", "wash"), ("sweep", "clean"), ("mop", "clean"),
    ("vacuum", "clean"), ("dust", "clean"), ("bath", "wash"), ("shower", "wash"),
    ("brush", "brush"), ("comb", "brush"), ("shave", "cut"), ("dress", "wear"), ("wear", "put"),
    ("remove", "take"), ("read", "read"), ("write", "write"), ("draw", "draw"),
    ("paint", "draw"), ("sketch", "draw"), ("color", "draw"), ("erase", "delete"),
    ("study", "learn"), ("learn", "learn"), ("teach", "teach"), ("explain", "show"),
    ("demonstrate", "show"), ("practice", "do"), ("work", "work"), ("type", "write"),
    ("calculate", "think"), ("measure", "check"), ("weigh", "measure"), ("count", "count"),

    // Communication
    ("talk", "speak"), ("speak", "speak"), ("say", "speak"), ("tell", "speak"), ("ask", "ask"),
    ("answer", "reply"), ("question", "ask"), ("reply", "answer"), ("call", "phone"),
    ("text", "write"), ("email", "write"), ("message", "send"), ("chat", "talk"),
    ("discuss", "talk"), ("argue", "fight"), ("debate", "talk"), ("listen", "hear"),
    ("hear", "hear"), ("watch", "see"), ("see", "look"), ("look", "see"), ("observe", "watch"),
    ("examine", "look"), ("inspect", "check"), ("understand", "know"), ("comprehend", "know"),
    ("interpret", "think"), ("translate", "change"), ("sign", "gesture"), ("gesture", "show"),
    ("indicate", "point"), ("signal", "wave"), ("express", "show"), ("communicate", "talk"),

    // Sports
    ("play", "play"), ("exercise", "move"), ("train", "practice"), ("compete", "fight"),
    ("race", "run"), ("win", "celebrate"), ("lose", "sad"), ("kick", "kick"),
    ("dribble", "move"), ("pass", "throw"), ("shoot", "throw"), ("score", "goal"),
    ("defend", "protect"), ("attack", "fight"), ("bat", "hit"), ("bowl", "throw"),
    ("field", "catch"), ("pitch", "throw"), ("serve", "give"), ("volley", "hit"),
    ("smash", "hit"), ("rally", "play"), ("box", "pack"), ("wrestle", "fight"),
    ("fight", "fight"), ("yoga", "balance"), ("meditate", "sit"), ("balance", "equal"),
    ("pose", "stand"),

    // Professional
    ("build", "make"), ("construct", "build"), ("assemble", "join"), ("install", "put"),
    ("repair", "fix"), ("fix", "repair"), ("maintain", "check"), ("design", "plan"),
    ("plan", "think"), ("organize", "arrange"), ("arrange", "order"), ("prepare", "make"),
    ("setup", "arrange"), ("operate", "cut"), ("control", "manage"), ("manage", "lead"),
    ("supervise", "watch"), ("coordinate", "organize"), ("produce", "make"),
    ("manufacture", "make"), ("create", "make"), ("make", "make"), ("craft", "make"),
    ("sell", "give"), ("buy", "take"), ("trade", "exchange"), ("exchange", "swap"),
    ("purchase", "buy"), ("pay", "give"), ("receive", "take"), ("deliver", "bring"),
    ("transport", "carry"), ("load", "put"), ("unload", "take"), ("pack", "wrap"),
    ("unpack", "open"), ("inventory", "count"), ("stock", "store"), ("supply", "give"),
    ("allocate", "divide"),

    // Medical
    ("diagnose", "check"), ("check", "see"), ("test", "try"), ("scan", "look"),
    ("cure", "heal"), ("heal", "fix"), ("rehabilitate", "exercise"), ("inject", "needle"),
    ("vaccinate", "inject"), ("medicate", "medicine"), ("prescribe", "write"), ("dose", "give"),
    ("bandage", "wrap"), ("stitch", "sew"), ("surgery", "operate"), ("temperature", "hot"),
    ("pressure", "push"), ("pulse", "heart"), ("heartbeat", "heart"), ("cough", "sick"),
    ("sneeze", "blow"), ("vomit", "sick"), ("bleed", "blood"), ("hurt", "pain"),
    ("pain", "hurt"), ("ache", "pain"),

    // Food Preparation
    ("chop", "cut"), ("cut", "cut"), ("slice", "cut"), ("dice", "cut"), ("mince", "cut"),
    ("shred", "tear"), ("grate", "rub"), ("peel", "remove"), ("skin", "remove"),
    ("core", "remove"), ("pit", "remove"), ("seed", "plant"), ("mix", "stir"), ("stir", "mix"),
    ("blend", "mix"), ("whisk", "stir"), ("beat", "mix"), ("knead", "press"), ("shape", "form"),
    ("form", "make"), ("mold", "shape"), ("season", "add"), ("salt", "sprinkle"),
    ("pepper", "sprinkle"), ("spice", "add"), ("flavor", "taste"), ("taste", "eat"),
    ("roast", "cook"), ("broil", "cook"), ("toast", "cook"), ("sauté", "fry"),
    ("simmer", "boil"), ("poach", "boil"), ("blanch", "boil"), ("plate", "put"),
    ("garnish", "decorate"), ("present", "show"),

    // Technology
    ("click", "press"), ("swipe", "move"), ("scroll", "move"), ("zoom", "enlarge"),
    ("keyboard", "type"), ("mouse", "point"), ("touchscreen", "touch"), ("screen", "see"),
    ("download", "receive"), ("upload", "send"), ("send", "give"), ("share", "give"),
    ("forward", "send"), ("save", "keep"), ("delete", "remove"), ("copy", "duplicate"),
    ("paste", "put"), ("undo", "reverse"), ("redo", "repeat"), ("browse", "look"),
    ("navigate", "go"), ("surf", "browse"), ("explore", "discover"), ("connect", "join"),
    ("disconnect", "separate"), ("login", "enter"), ("logout", "exit"), ("signin", "enter"),
    ("signout", "leave"), ("charge", "power"), ("battery", "energy"), ("power", "on"),
    ("switch", "toggle"), ("button", "press"), ("press", "push"),

    // Household
    ("iron", "press"), ("hang", "suspend"), ("dry", "remove"), ("rinse", "wash"),
    ("sort", "separate"), ("separate", "divide"), ("decorate", "beautify"),
    ("rearrange", "move"), ("place", "put"), ("position", "place"), ("plug", "connect"),
    ("unplug", "disconnect"), ("light", "shine"), ("dim", "darken"), ("brighten", "light"),
    ("heat", "warm"), ("cool", "cold"), ("warm", "heat"), ("freeze", "cold"), ("thaw", "melt"),
    ("secure", "protect"), ("guard", "protect"),

    // Shopping
    ("shop", "buy"), ("select", "choose"), ("choose", "pick"), ("pick", "select"),
    ("decide", "choose"), ("order", "request"), ("checkout", "pay"), ("bargain", "negotiate"),
    ("negotiate", "discuss"), ("discount", "reduce"), ("sale", "sell"), ("offer", "give"),
    ("return", "give"), ("refund", "return"), ("complain", "protest"), ("wrap", "cover"),
    ("bag", "pack"),

    // Education
    ("spell", "write"), ("pronounce", "say"), ("recite", "speak"), ("memorize", "remember"),
    ("remember", "recall"), ("recall", "think"), ("review", "check"), ("revise", "change"),
    ("solve", "answer"), ("compute", "calculate"), ("add", "plus"), ("subtract", "minus"),
    ("multiply", "times"), ("divide", "split"), ("experiment", "test"), ("record", "write"),
    ("note", "write"), ("clarify", "explain"), ("illustrate", "show"), ("query", "ask"),
    ("inquire", "ask"), ("investigate", "examine"), ("research", "study"),

    // Social
    ("meet", "greet"), ("greet", "hello"), ("welcome", "greet"), ("introduce", "present"),
    ("hug", "embrace"), ("kiss", "love"), ("embrace", "hold"), ("smile", "happy"),
    ("laugh", "happy"), ("giggle", "laugh"), ("grin", "smile"), ("chuckle", "laugh"),
    ("cry", "sad"), ("weep", "cry"), ("sob", "cry"), ("sad", "unhappy"), ("angry", "mad"),
    ("mad", "angry"), ("furious", "angry"), ("upset", "sad"), ("irritated", "annoyed"),
    ("happy", "joy"), ("joyful", "happy"), ("cheerful", "happy"), ("excited", "enthusiastic"),
    ("thrilled", "excited"), ("surprised", "shock"), ("shocked", "surprise"),
    ("amazed", "wonder"), ("astonished", "surprised"), ("confused", "puzzled"),
    ("puzzled", "confused"), ("uncertain", "doubt"), ("doubtful", "unsure"),

    // Transportation
    ("board", "enter"), ("embark", "board"), ("disembark", "exit"), ("alight", "descend"),
    ("exit", "leave"), ("accelerate", "quick"), ("brake", "stop"), ("stop", "halt"),
    ("park", "stop"), ("reverse", "backward"), ("steer", "direct"), ("direct", "guide"),
    ("guide", "lead"), ("lead", "direct"), ("travel", "journey"), ("journey", "go"),
    ("commute", "travel"), ("transfer", "change"), ("sail", "boat"), ("cruise", "sail"),
    ("voyage", "travel"),

    // Agricultural
    ("plant", "sow"), ("sow", "plant"), ("grow", "develop"), ("cultivate", "farm"),
    ("farm", "work"), ("plow", "dig"), ("till", "plow"), ("dig", "excavate"), ("hoe", "dig"),
    ("rake", "gather"), ("weed", "remove"), ("water", "pour"), ("irrigate", "water"),
    ("spray", "sprinkle"), ("fertilize", "feed"), ("compost", "fertilize"),
    ("harvest", "gather"), ("reap", "harvest"), ("gather", "collect"), ("collect", "gather"),
    ("prune", "cut"), ("trim", "cut"), ("crop", "harvest"), ("thresh", "separate"),

    // Construction
    ("demolish", "destroy"), ("dismantle", "take"), ("excavate", "dig"), ("drill", "bore"),
    ("bore", "drill"), ("tunnel", "dig"), ("pour", "flow"), ("concrete", "build"),
    ("cement", "join"), ("plaster", "cover"), ("hammer", "hit"), ("nail", "fasten"),
    ("screw", "turn"), ("bolt", "fasten"), ("weld", "join"), ("saw", "cut"), ("sand", "smooth"),
    ("polish", "shine"), ("level", "balance"), ("align", "straight"), ("square", "measure"),
    ("plumb", "straight"),

    // Environmental
    ("recycle", "reuse"), ("reuse", "again"), ("reduce", "less"), ("conserve", "save"),
    ("preserve", "keep"), ("pollute", "dirty"), ("contaminate", "pollute"), ("dirty", "soil"),
    ("purify", "clean"), ("tree", "plant"), ("garden", "grow"), ("landscape", "beautify"),
    ("green", "plant"),

    // Financial
    ("earn", "make"), ("gain", "receive"), ("profit", "gain"), ("income", "earn"),
    ("spend", "use"), ("invest", "put"), ("deposit", "put"), ("withdraw", "take"),
    ("borrow", "loan"), ("lend", "give"), ("loan", "lend"), ("credit", "borrow"),
    ("debt", "owe"), ("budget", "plan"), ("account", "record"),

    // Legal
    ("sue", "prosecute"), ("prosecute", "accuse"), ("plead", "beg"), ("judge", "decide"),
    ("rule", "judge"), ("verdict", "decision"), ("sentence", "punish"), ("arrest", "catch"),
    ("detain", "hold"), ("custody", "jail"), ("jail", "prison"), ("prison", "lock"),
    ("fine", "penalty"), ("penalty", "punish"), ("punish", "discipline"), ("reward", "prize"),
    ("compensate", "pay"),
];

/// Naive stemmer: strips `ing`, `ed`, `es` and `s`, in that order, each at
/// most once and only from the end of the word.
///
/// Words ending in `ss` lose one `s`; callers rely on this shape.
pub fn stem(word: &str) -> &str {
    let mut base = word;
    for suffix in ["ing", "ed", "es", "s"] {
        if let Some(stripped) = base.strip_suffix(suffix) {
            base = stripped;
        }
    }
    base
}

/// Immutable word → action dictionary.
#[derive(Debug, Clone, Default)]
pub struct ActionMap {
    actions: HashMap<String, String>,
}

impl ActionMap {
    /// The curated dictionary.
    pub fn builtin() -> Self {
        Self::from_pairs(ACTION_TABLE.iter().copied())
    }

    /// Build a dictionary; a later pair for the same word replaces an earlier one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            actions: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.actions.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Resolve `word` to the action the avatar performs.
///
/// The dictionary is consulted for the word, then its stem, before falling
/// back to the word itself. When `inventory` is non-empty the result must name
/// an asset: the word, then its stem, then each of `fallbacks` is tried in
/// turn, and the last fallback is returned even if no asset backs it.
pub fn resolve_action(
    word: &str,
    map: &ActionMap,
    inventory: &AssetInventory,
    fallbacks: &[String],
) -> String {
    let base = stem(word);
    let action = map
        .get(word)
        .or_else(|| map.get(base))
        .map(str::to_string)
        .unwrap_or_else(|| word.to_lowercase());

    if inventory.is_empty() || inventory.contains(&action) {
        return action;
    }
    if inventory.contains(word) {
        return word.to_lowercase();
    }
    if !base.is_empty() && inventory.contains(base) {
        return base.to_lowercase();
    }
    if let Some(found) = fallbacks.iter().find(|f| inventory.contains(f)) {
        return found.to_lowercase();
    }
    match fallbacks.last() {
        Some(last) => last.clone(),
        None => action,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_in_order() {
        assert_eq!(stem("walking"), "walk");
        assert_eq!(stem("jumped"), "jump");
        assert_eq!(stem("boxes"), "box");
        assert_eq!(stem("runs"), "run");
        assert_eq!(stem("dress"), "dres");
        assert_eq!(stem("walk"), "walk");
    }

    #[test]
    fn builtin_table_has_unique_words() {
        let map = ActionMap::builtin();
        assert_eq!(map.len(), ACTION_TABLE.len());
        assert_eq!(map.get("evacuate"), Some("run"));
        assert_eq!(map.get("search"), Some("find"));
    }
}
