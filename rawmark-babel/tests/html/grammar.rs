//! Property tests for the single-tag grammar.

use proptest::prelude::*;
use rawmark_babel::match_tag_at_start;

fn tag_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9-]{0,12}"
}

fn attribute() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z_:][a-zA-Z0-9:._-]{0,8}",
        prop_oneof![
            Just(String::new()),
            "[a-z0-9./]{1,10}".prop_map(|v| format!("={v}")),
            "[^\"]{0,10}".prop_map(|v| format!("=\"{v}\"")),
            "[^']{0,10}".prop_map(|v| format!("='{v}'")),
        ],
    )
        .prop_map(|(name, value)| format!(" {name}{value}"))
}

proptest! {
    #[test]
    fn open_tag_name_is_captured_verbatim(
        name in tag_name(),
        attrs in prop::collection::vec(attribute(), 0..4),
        self_closing in any::<bool>(),
        rest in ".{0,20}",
    ) {
        let tag = format!("<{name}{}{}>", attrs.concat(), if self_closing { " /" } else { "" });
        let text = format!("{tag}{rest}");

        let parsed = match_tag_at_start(&text).expect("open tag should match");
        prop_assert!(parsed.is_open);
        prop_assert_eq!(parsed.name, name.as_str());
        prop_assert_eq!(parsed.raw_text, tag.as_str());
    }

    #[test]
    fn close_tag_name_is_captured_verbatim(name in tag_name(), pad in " {0,3}", rest in ".{0,20}") {
        let text = format!("</{name}{pad}>{rest}");

        let parsed = match_tag_at_start(&text).expect("close tag should match");
        prop_assert!(!parsed.is_open);
        prop_assert_eq!(parsed.name, name.as_str());
    }

    #[test]
    fn text_not_starting_with_a_tag_never_matches(text in "[^<].{0,30}") {
        prop_assert!(match_tag_at_start(&text).is_none());
    }

    #[test]
    fn matching_only_looks_at_the_start(name in tag_name(), prefix in "[a-z ]{1,5}") {
        let text = format!("{prefix}<{name}>");
        prop_assert!(match_tag_at_start(&text).is_none());
    }
}
