use crate::dataset::DatasetRow;
use crate::example::{past_example, progressive_example};

/// `-ing` form of `word`, dropping a trailing `e`. `None` if the word already
/// ends in `ing`.
pub fn ing_form(word: &str) -> Option<String> {
    if word.ends_with("ing") {
        return None;
    }
    let stem = word.strip_suffix('e').unwrap_or(word);
    Some(format!("{stem}ing"))
}

/// `-ed` form of `word`; words ending in `e` only take a `d`. `None` if the
/// word already ends in `ed`.
pub fn ed_form(word: &str) -> Option<String> {
    if word.ends_with("ed") {
        return None;
    }
    if word.ends_with('e') {
        Some(format!("{word}d"))
    } else {
        Some(format!("{word}ed"))
    }
}

/// Derived rows for `row`: the `-ing` form first, then the `-ed` form.
/// Both reuse the base row's sign and category; their example sentences are
/// built from the base word.
pub fn expand(row: &DatasetRow) -> Vec<DatasetRow> {
    let mut out = Vec::with_capacity(2);
    if let Some(word) = ing_form(&row.word) {
        out.push(DatasetRow {
            sov_example: progressive_example(&row.word),
            word,
            sign: row.sign.clone(),
            category: row.category.clone(),
        });
    }
    if let Some(word) = ed_form(&row.word) {
        out.push(DatasetRow {
            sov_example: past_example(&row.word),
            word,
            sign: row.sign.clone(),
            category: row.category.clone(),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_e_is_handled() {
        assert_eq!(ing_form("bake").as_deref(), Some("baking"));
        assert_eq!(ed_form("bake").as_deref(), Some("baked"));
        assert_eq!(ing_form("walk").as_deref(), Some("walking"));
        assert_eq!(ed_form("walk").as_deref(), Some("walked"));
    }

    #[test]
    fn existing_suffix_is_skipped() {
        assert_eq!(ing_form("thing"), None);
        assert_eq!(ed_form("bleed"), None);
        assert_eq!(ed_form("injured"), None);
        assert_eq!(ing_form("injured").as_deref(), Some("injureding"));
    }
}
