use quickcheck::quickcheck;
use sign_dataset::{
    builtin_vocabulary, ed_form, expand, generate_dataset, ing_form, ActionMap, AssetInventory,
    Config, DatasetRow,
};

fn base(word: &str, category: &str) -> DatasetRow {
    DatasetRow {
        word: word.into(),
        sign: "walk".into(),
        sov_example: sign_dataset::example::sov_example(word, category),
        category: category.into(),
    }
}

#[test]
fn walk_variants() {
    let row = base("walk", "Movement Actions");
    assert_eq!(row.sov_example, "I now walk");
    let variants = expand(&row);
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].word, "walking");
    assert_eq!(variants[0].sov_example, "I walking am");
    assert_eq!(variants[1].word, "walked");
    assert_eq!(variants[1].sov_example, "I yesterday walked");
    for v in &variants {
        assert_eq!(v.sign, "walk");
        assert_eq!(v.category, "Movement Actions");
    }
}

#[test]
fn trailing_e_variants_keep_base_in_sentence() {
    let variants = expand(&base("bake", "Food Preparation"));
    assert_eq!(variants[0].word, "baking");
    assert_eq!(variants[0].sov_example, "I bakeing am");
    assert_eq!(variants[1].word, "baked");
    assert_eq!(variants[1].sov_example, "I yesterday bakeed");
}

#[test]
fn words_with_suffix_expand_once() {
    let variants = expand(&base("injured", "General"));
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].word, "injureding");
}

#[test]
fn dataset_keeps_base_then_variants() {
    let vocab = builtin_vocabulary();
    let rows = generate_dataset(
        &vocab,
        &ActionMap::builtin(),
        &AssetInventory::default(),
        &Config::default(),
    );
    let expected: usize = vocab
        .iter()
        .map(|w| 1 + ing_form(w).is_some() as usize + ed_form(w).is_some() as usize)
        .sum();
    assert_eq!(rows.len(), expected);
    assert_eq!(rows[0].word, vocab.iter().next().unwrap().as_str());
}

quickcheck! {
    fn no_double_ing(word: String) -> bool {
        match ing_form(&word) {
            Some(v) => !word.ends_with("ing") && v.ends_with("ing"),
            None => word.ends_with("ing"),
        }
    }

    fn no_double_ed(word: String) -> bool {
        match ed_form(&word) {
            Some(v) => !word.ends_with("ed") && v.ends_with("ed"),
            None => word.ends_with("ed"),
        }
    }
}
