//! Tests for LayoutRegions struct

use ratatui::layout::Rect;

use super::layout_regions::{LayoutRegions, Region};

#[test]
fn test_new_creates_empty_regions() {
    let regions = LayoutRegions::new();

    assert!(regions.page.is_none());
    assert!(regions.theme_switch.is_none());
    assert!(regions.message_box.is_none());
    assert!(regions.dismiss_primary.is_none());
    assert!(regions.dismiss_secondary.is_none());
    assert!(regions.action_button.is_none());
}

#[test]
fn test_clear_resets_all_regions() {
    let mut regions = LayoutRegions::new();

    regions.page = Some(Rect::new(0, 0, 100, 50));
    regions.message_box = Some(Rect::new(60, 30, 32, 13));
    regions.action_button = Some(Rect::new(70, 40, 12, 1));

    regions.clear();

    assert!(regions.page.is_none());
    assert!(regions.message_box.is_none());
    assert!(regions.action_button.is_none());
}

#[test]
fn test_region_enum_variants() {
    assert_ne!(Region::DismissPrimary, Region::DismissSecondary);
    assert_ne!(Region::MessageBox, Region::Page);
}
