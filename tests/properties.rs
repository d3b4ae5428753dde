//! Property tests for criteria evaluation and classification.

use proptest::prelude::*;
use pwd_strength_api::{
    Criteria, MIN_LENGTH, PasswordStrength, SPECIAL_CHARS, check_password, classify, evaluate,
};
use secrecy::SecretString;

fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

fn special_char() -> impl Strategy<Value = char> {
    proptest::sample::select(SPECIAL_CHARS.chars().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn test_all_classes_and_long_enough_is_strong(
        upper in "[A-Z]",
        lower in "[a-z]",
        digit in "[0-9]",
        special in special_char(),
        filler in ".{4,40}",
    ) {
        let password = format!("{filler}{upper}{lower}{digit}{special}");
        let criteria = evaluate(&secret(&password));

        prop_assert_eq!(classify(&criteria), PasswordStrength::Strong);
    }

    #[test]
    fn test_evaluation_is_deterministic(password in ".{0,120}") {
        let first = check_password(&secret(&password));
        let second = check_password(&secret(&password));

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_details_always_have_five_keys(password in ".{0,120}") {
        let json = serde_json::to_value(evaluate(&secret(&password))).unwrap();
        let object = json.as_object().unwrap();

        prop_assert_eq!(object.len(), 5);
        for name in Criteria::NAMES {
            prop_assert!(object[name].is_boolean());
        }
    }

    #[test]
    fn test_seven_characters_never_long_enough(chars in proptest::collection::vec(any::<char>(), MIN_LENGTH - 1)) {
        let password: String = chars.into_iter().collect();

        prop_assert!(!evaluate(&secret(&password)).length);
    }

    #[test]
    fn test_eight_characters_always_long_enough(chars in proptest::collection::vec(any::<char>(), MIN_LENGTH)) {
        let password: String = chars.into_iter().collect();

        prop_assert!(evaluate(&secret(&password)).length);
    }

    #[test]
    fn test_punctuation_outside_set_is_not_special(password in "[_~\\-\\[\\]+=;'/`]{1,30}") {
        prop_assert!(!evaluate(&secret(&password)).special_chars);
    }

    #[test]
    fn test_strength_matches_score(password in ".{0,40}") {
        let response = check_password(&secret(&password));
        let expected = match response.details.score() {
            5 => PasswordStrength::Strong,
            3 | 4 => PasswordStrength::Moderate,
            _ => PasswordStrength::Weak,
        };

        prop_assert_eq!(response.strength, expected);
    }
}
