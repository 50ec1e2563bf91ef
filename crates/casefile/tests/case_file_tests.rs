//! Case file tests

use casefile::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// End-to-end investigation
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_knife_and_rope_investigation() {
    let mut case = CaseFile::new();
    assert_eq!(case.record("knife", "Green"), Ok(Recorded::NewClue));
    assert_eq!(case.record("knife", "Plum"), Ok(Recorded::KnownClue));
    assert_eq!(case.record("rope", "Green"), Ok(Recorded::NewClue));

    assert_eq!(case.clues().collect::<Vec<_>>(), vec!["knife", "rope"]);
    assert_eq!(
        case.top_suspect(),
        Some(TopSuspect {
            suspect: "Green".to_string(),
            count: 2,
        })
    );
    assert!(case.find_clue("knife"));
    assert!(!case.find_clue("candle"));
}

#[test]
fn test_associations_grouped_by_bucket() {
    let mut case = CaseFile::new();
    case.record("knife", "Green").unwrap();
    case.record("knife", "Plum").unwrap();
    case.record("rope", "Green").unwrap();

    let grouped: Vec<(usize, Vec<(&str, &str)>)> = case
        .associations()
        .map(|bucket| {
            (
                bucket.index(),
                bucket.iter().map(|a| (a.clue, a.suspect)).collect(),
            )
        })
        .collect();

    assert_eq!(
        grouped,
        vec![
            (5, vec![("knife", "Plum"), ("knife", "Green")]),
            (8, vec![("rope", "Green")]),
        ]
    );
}

#[test]
fn test_suspects_of_clue() {
    let mut case = CaseFile::new();
    case.record("knife", "Green").unwrap();
    case.record("candle", "Scarlet").unwrap(); // same bucket as knife
    case.record("knife", "Plum").unwrap();

    assert_eq!(case.suspects_of("knife").collect::<Vec<_>>(), vec!["Plum", "Green"]);
    assert_eq!(case.suspects_of("candle").collect::<Vec<_>>(), vec!["Scarlet"]);
    assert_eq!(case.suspects_of("rope").count(), 0);
}

// ═══════════════════════════════════════════════════════════════════════
// Limits
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_longest_accepted_names() {
    let mut case = CaseFile::new();
    let clue = "c".repeat(49);
    let suspect = "s".repeat(49);
    assert_eq!(case.record(&clue, &suspect), Ok(Recorded::NewClue));
    assert!(case.find_clue(&clue));
}

#[test]
fn test_overlong_clue_rejected() {
    let mut case = CaseFile::new();
    let clue = "c".repeat(50);
    assert_eq!(
        case.record(&clue, "Green"),
        Err(CaseFileError::KeyTooLong {
            field: "clue",
            len: 50,
            max: 49,
        })
    );
    assert!(!case.find_clue(&clue));
    assert_eq!(case.top_suspect(), None);
}

#[test]
fn test_custom_limits() {
    let config = CaseFileConfig::new()
        .with_bucket_count(1)
        .with_max_name_len(6);
    let mut case = CaseFile::with_config(config).unwrap();
    assert_eq!(case.config(), &config);

    assert!(case.record("knife", "Plum").is_ok());
    assert!(case.record("candle", "Plum").is_err());
    assert_eq!(case.associations().count(), 1);
}

#[test]
fn test_invalid_config_rejected() {
    let result = CaseFile::with_config(CaseFileConfig::new().with_bucket_count(0));
    assert!(matches!(result, Err(CaseFileError::InvalidConfig(_))));
}

// ═══════════════════════════════════════════════════════════════════════
// Release
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_clear_then_reuse() {
    let mut case = CaseFile::new();
    case.record("knife", "Green").unwrap();
    case.record("rope", "Plum").unwrap();

    case.clear();
    assert_eq!(case.clues().count(), 0);
    assert_eq!(case.associations().count(), 0);
    assert_eq!(case.top_suspect(), None);

    assert_eq!(case.record("rope", "Plum"), Ok(Recorded::NewClue));
    assert_eq!(case.clues().collect::<Vec<_>>(), vec!["rope"]);
}
