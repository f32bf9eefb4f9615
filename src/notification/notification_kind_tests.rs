//! Tests for notification_kind

use super::*;
use insta::assert_snapshot;
use proptest::prelude::*;

fn describe(kind: NotificationKind) -> String {
    let p = kind.presentation();
    format!(
        "{} | {} | {} | {} | {} | {}",
        kind,
        p.visual_class,
        p.face.class_name(),
        p.shadow.class_name(),
        p.accent.name(),
        p.default_label
    )
}

#[test]
fn test_presentation_table() {
    let table = NotificationKind::ALL
        .iter()
        .map(|kind| describe(*kind))
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(table, @r"
    info | info | bounce-3 | scale | blue | ok
    success | success | bounce-1 | scale | green | continue
    error | error | bounce-2 | move | red | try again
    warning | warning | scale-pulse | scale | yellow | understand
    ");
}

#[test]
fn test_parse_known_kinds() {
    assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
    assert_eq!(NotificationKind::parse("error"), NotificationKind::Error);
    assert_eq!(NotificationKind::parse("warning"), NotificationKind::Warning);
    assert_eq!(NotificationKind::parse("info"), NotificationKind::Info);
}

#[test]
fn test_parse_unrecognized_falls_back_to_info() {
    assert_eq!(NotificationKind::parse(""), NotificationKind::Info);
    assert_eq!(NotificationKind::parse("danger"), NotificationKind::Info);
    // Matching is case-sensitive
    assert_eq!(NotificationKind::parse("Success"), NotificationKind::Info);
    assert_eq!(NotificationKind::parse(" error"), NotificationKind::Info);
}

#[test]
fn test_default_kind_is_info() {
    assert_eq!(NotificationKind::default(), NotificationKind::Info);
    assert_eq!(Presentation::default(), NotificationKind::Info.presentation());
}

#[test]
fn test_mouths_follow_kind() {
    assert_eq!(NotificationKind::Success.presentation().mouth, Mouth::Happy);
    assert_eq!(NotificationKind::Error.presentation().mouth, Mouth::Sad);
    assert_eq!(NotificationKind::Warning.presentation().mouth, Mouth::Neutral);
    assert_eq!(NotificationKind::Info.presentation().mouth, Mouth::Surprised);
}

#[test]
fn test_only_error_shadow_moves() {
    for kind in NotificationKind::ALL {
        let expected = if kind == NotificationKind::Error {
            ShadowMotion::Move
        } else {
            ShadowMotion::Scale
        };
        assert_eq!(kind.presentation().shadow, expected, "kind {}", kind);
    }
}

#[test]
fn test_face_periods() {
    assert_eq!(FaceVariant::Bounce1.period(), Duration::from_millis(1000));
    assert_eq!(FaceVariant::Bounce2.period(), Duration::from_millis(3000));
    assert_eq!(FaceVariant::ScalePulse.period(), Duration::from_millis(1500));
    assert_eq!(FaceVariant::Bounce3.period(), Duration::from_millis(2000));
}

#[test]
fn test_as_str_round_trips_through_parse() {
    for kind in NotificationKind::ALL {
        assert_eq!(NotificationKind::parse(kind.as_str()), kind);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The mapping is total: any string resolves to exactly one row, and
    /// anything outside the four known names resolves to the info row.
    #[test]
    fn prop_mapping_is_total(value in ".{0,24}") {
        let kind = NotificationKind::parse(&value);
        let known = ["info", "success", "error", "warning"];
        if known.contains(&value.as_str()) {
            prop_assert_eq!(kind.as_str(), value.as_str());
        } else {
            prop_assert_eq!(kind, NotificationKind::Info);
            prop_assert_eq!(kind.presentation(), NotificationKind::Info.presentation());
        }
    }

    #[test]
    fn prop_mapping_is_deterministic(value in "[a-z]{0,10}") {
        prop_assert_eq!(
            NotificationKind::parse(&value).presentation(),
            NotificationKind::parse(&value).presentation()
        );
    }
}
