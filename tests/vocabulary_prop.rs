use rand::seq::SliceRandom;
use rand::thread_rng;
use sign_dataset::{aggregate, builtin_vocabulary, vocabulary};

#[test]
fn aggregation_ignores_input_order() {
    let mut rng = thread_rng();
    let expected = builtin_vocabulary();
    for _ in 0..10 {
        let mut a = vocabulary::CISLR_VOCABULARY.to_vec();
        let mut b = vocabulary::INCLUDE_VOCABULARY.to_vec();
        let mut c = vocabulary::ISLTRANSLATE_VOCABULARY.to_vec();
        a.shuffle(&mut rng);
        b.shuffle(&mut rng);
        c.shuffle(&mut rng);
        let mut lists: Vec<&[&str]> = vec![&a, &b, &c];
        lists.shuffle(&mut rng);
        assert_eq!(aggregate(&lists), expected);
    }
}

#[test]
fn vocabulary_is_sorted_and_unique() {
    let words: Vec<String> = builtin_vocabulary().into_iter().collect();
    assert!(words.windows(2).all(|w| w[0] < w[1]));
    assert!(words.iter().any(|w| w == "shake hands"));
}
