use comment_rater::classify::{Answer, StarRating, Topic};
use proptest::prelude::*;

#[test]
fn label_vocabulary_is_fixed() {
    insta::assert_snapshot!(Topic::LABELS.join(","), @"cocina,servicio,baños,comida,otros");
}

#[test]
fn unrecognized_rating_displays_model_text() {
    let rating = StarRating::parse(" tres ");
    insta::assert_snapshot!(rating.to_string(), @"tres");
}

proptest! {
    #[test]
    fn star_count_is_the_rating(n in 1usize..=5, pad in "[ \t]{0,3}") {
        let raw = format!("{pad}{}{pad}", "⭐".repeat(n));
        let answer = Answer::rating(&raw);
        prop_assert_eq!(answer.value.stars(), Some(n as u8));
        prop_assert_eq!(answer.raw, "⭐".repeat(n));
    }

    #[test]
    fn too_many_stars_are_unrecognized(n in 6usize..40) {
        let stars = "⭐".repeat(n);
        prop_assert_eq!(StarRating::parse(&stars), StarRating::Unrecognized(stars));
    }

    #[test]
    fn any_letter_leaves_a_rating_unrecognized(stars in 1usize..=5, word in "[a-z]{1,8}") {
        let raw = format!("{} {word}", "⭐".repeat(stars));
        let answer = Answer::rating(&raw);
        prop_assert!(!answer.value.is_recognized());
        prop_assert_eq!(answer.raw, raw);
    }

    #[test]
    fn topic_answers_keep_trimmed_text(text in "[A-Za-z ]{1,30}") {
        let answer = Answer::topic(&text);
        prop_assert_eq!(answer.raw.as_str(), text.trim());
        if !answer.value.is_recognized() {
            prop_assert_eq!(answer.value.as_str(), text.trim());
        }
    }
}
