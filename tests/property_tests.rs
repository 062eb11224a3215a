use proptest::prelude::*;
use txtutil::{
    SubstitutionError, TokenMap, VariableMap, clean_spaces, fix_unicode_escaped_text,
    latin1_to_unicode, list_to_vec, trim_dot_zeros,
};

proptest! {
    #[test]
    fn latin1_one_char_per_byte(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(latin1_to_unicode(&bytes).chars().count(), bytes.len());
    }

    #[test]
    fn latin1_is_idempotent_on_clean_ascii(text in "[ -~]{0,64}") {
        let once = latin1_to_unicode(text.as_bytes());
        prop_assert_eq!(&once, &text);
        prop_assert_eq!(latin1_to_unicode(once.as_bytes()), once);
    }

    #[test]
    fn list_is_idempotent(text in "[a-z# \t\n]{0,128}") {
        let first = list_to_vec(&text);
        let joined = first.join("\n");
        prop_assert_eq!(list_to_vec(&joined), first);
    }

    #[test]
    fn list_items_are_trimmed_and_not_comments(text in "[a-z# \t\n]{0,128}") {
        for item in list_to_vec(&text) {
            prop_assert!(!item.is_empty());
            prop_assert!(!item.starts_with('#'));
            prop_assert_eq!(item, item.trim());
        }
    }

    #[test]
    fn clean_spaces_leaves_no_double_spaces(text in "[a-z \t\n]{0,64}") {
        let cleaned = clean_spaces(&text);
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert_eq!(clean_spaces(&cleaned), cleaned.clone());
    }

    #[test]
    fn trim_dot_zeros_keeps_value(int in 0u32..100_000, frac in 0u32..1_000_000) {
        let text = format!("{int}.{frac:06}");
        let trimmed = trim_dot_zeros(&text);
        prop_assert!(!trimmed.ends_with('.'));
        prop_assert!(!trimmed.contains('.') || !trimmed.ends_with('0'));
        prop_assert_eq!(trimmed.parse::<f64>().unwrap(), text.parse::<f64>().unwrap());
    }

    #[test]
    fn text_without_escapes_is_unchanged(text in "[^\\\\]{0,64}") {
        prop_assert_eq!(fix_unicode_escaped_text(&text), text.as_str());
    }

    #[test]
    fn detokenize_without_placeholders_is_identity(text in "[a-z <>{}]{0,64}") {
        prop_assume!(!txtutil::processor::has_tokens(&text));
        prop_assert_eq!(TokenMap::new().detokenize(&text).unwrap(), text);
    }

    #[test]
    fn self_reference_always_hits_depth(name in "[a-zA-Z0-9]{1,8}", depth in 1usize..12) {
        let vars = VariableMap::from_iter([(name.clone(), format!("{{{name}}}"))])
            .with_max_depth(depth);
        let template = format!("<{{{name}}}>");
        let err = vars.replace_vars(&template).unwrap_err();
        prop_assert!(
            matches!(err, SubstitutionError::MaxDepthExceeded { depth: d, .. } if d == depth),
            "unexpected error: {:?}",
            err
        );
        prop_assert_eq!(err.partial(), template.as_str());
    }

    #[test]
    fn unknown_tokens_become_sentinels(name in "[a-zA-Z0-9]{1,8}") {
        let err = TokenMap::new().detokenize(&format!("x<{name}>y")).unwrap_err();
        prop_assert_eq!(err.name(), Some(name.as_str()));
        prop_assert_eq!(err.partial(), format!("x!BAD-TOKEN:'{name}'!y"));
    }
}
