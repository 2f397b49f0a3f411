use std::collections::HashMap;

use lot_core::errors;
use lot_core::lang::colours;
use lot_core::lang::keywords;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }

    assert_eq!(seen.len(), 7);
}

#[test]
fn keywords_are_word_lexemes() {
    // The scanner only classifies runs that start with a letter or underscore, and stops at whitespace.
    for info in keywords::KEYWORDS {
        let first = info.canonical.chars().next().unwrap();
        assert!(first.is_ascii_alphabetic() || first == '_', "{}", info.canonical);
        assert!(
            !info.canonical.chars().any(char::is_whitespace),
            "keyword contains whitespace: {:?}",
            info.canonical
        );
    }
}

#[test]
fn keyword_lookup_is_case_sensitive_and_exact() {
    assert_eq!(keywords::from_str("PARK"), None);
    assert_eq!(keywords::from_str("par"), None);
    assert_eq!(keywords::from_str("parks"), None);
    assert_eq!(keywords::from_str(""), None);
}

#[test]
fn keyword_descriptions_present() {
    for info in keywords::KEYWORDS {
        assert!(
            !info.description.trim().is_empty(),
            "keyword {:?} has an empty description",
            info.id
        );
    }
}

#[test]
fn colours_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, colours::ColourId> = HashMap::new();

    for info in colours::COLOURS {
        assert_eq!(colours::from_str(info.canonical), Some(info.id));
        assert_eq!(info.id.as_str(), info.canonical, "colour as_str mismatch for {:?}", info.id);
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate colour spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }

    assert_eq!(seen.len(), 7);
}

#[test]
fn user_facing_messages_are_single_lines() {
    for msg in [
        errors::NOT_FOUND_MSG,
        errors::PARKING_LOT_FULL_MSG,
        errors::IDENTITY_CONFLICT_MSG,
    ] {
        assert!(!msg.is_empty());
        assert!(!msg.contains('\n'), "message spans lines: {msg:?}");
    }
}
