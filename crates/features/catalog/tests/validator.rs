use whub_catalog::domain::{
    SelectionIssue, is_position_allowed, validate_position_selection,
    validate_position_selection_with,
};
use whub_kernel::domain::config::ExclusivityMode;

#[test]
fn uppercase_position_is_allowed() {
    assert!(is_position_allowed("t-shirt", "FRONT"));
}

#[test]
fn tote_bag_single_front_is_valid() {
    let report = validate_position_selection("tote-bag", &["Front"]);
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn tote_bag_rejects_back() {
    let report = validate_position_selection("tote-bag", &["Front", "Back"]);
    assert!(!report.is_valid);

    let invalid: Vec<_> = report
        .errors
        .iter()
        .filter_map(|issue| match issue {
            SelectionIssue::InvalidPositions { invalid, .. } => Some(invalid.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(invalid, vec![vec!["Back".to_owned()]]);
    assert!(report.error_messages()[0].contains("Back"));
}

#[test]
fn cap_reports_invalid_and_count_together() {
    let report = validate_position_selection("cap", &["Front", "Back", "Left Sleeve"]);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 2);

    assert!(matches!(
        &report.errors[0],
        SelectionIssue::InvalidPositions { invalid, .. } if invalid == &["Left Sleeve"]
    ));
    assert!(matches!(
        report.errors[1],
        SelectionIssue::TooManyPositions { max: 2, selected: 3, .. }
    ));

    let messages = report.error_messages();
    assert!(messages[1].contains('2') && messages[1].contains('3'));
}

#[test]
fn mug_without_selection_misses_full_wrap() {
    let report = validate_position_selection::<&str>("mug", &[]);
    assert!(!report.is_valid);
    assert_eq!(
        report.errors,
        vec![SelectionIssue::MissingRequired {
            product_type: "Mug".to_owned(),
            missing: vec!["Full Wrap".to_owned()],
        }]
    );
}

#[test]
fn mug_full_wrap_alone_is_clean() {
    for mode in ExclusivityMode::ALL {
        let report = validate_position_selection_with("mug", &["Full Wrap"], mode);
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }
}

#[test]
fn unknown_type_yields_single_error() {
    let report = validate_position_selection("unknown-type", &["Front"]);
    assert!(!report.is_valid);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.error_messages(), vec!["Unknown product type: unknown-type".to_owned()]);
    assert!(report.warnings.is_empty());
}

#[test]
fn exclusivity_warning_never_blocks() {
    let report = validate_position_selection("mug", &["Full Wrap", "Right Side"]);
    assert!(report.is_valid);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warning_messages()[0].starts_with("Full Wrap"));
}

#[test]
fn owned_and_borrowed_selections_agree() {
    let owned = vec!["Front".to_owned(), "Neck Label".to_owned()];
    let borrowed = ["Front", "Neck Label"];
    assert_eq!(
        validate_position_selection("t-shirt", &owned),
        validate_position_selection("t-shirt", &borrowed)
    );
}
