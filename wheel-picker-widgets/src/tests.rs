use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

use proptest::prelude::*;
use wheel_picker::{
    ConfigError, Constraints, DpSize, Extent, Orientation, PickerOptions, ScrollPosition,
};

const LETTERS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn settle<T>(picker: &mut Picker<T>, mut now_ms: u64) -> u64 {
    while picker.tick(now_ms) {
        now_ms += 16;
    }
    now_ms
}

#[test]
fn color_from_rgb_literal() {
    assert_eq!(Color::from_rgb(0xEADDFF), Color::rgba(0xEA, 0xDD, 0xFF, 0xFF));
    assert_eq!(Color::TRANSPARENT.a, 0);
}

#[test]
fn double_shapes_round_only_outer_corners() {
    let (start, end) = double_surface_shapes(Orientation::Vertical, 16.0);
    assert_eq!(start.radii(), CornerRadii::start(16.0));
    assert_eq!(end.radii().top_start, 0.0);
    assert_eq!(end.radii().bottom_end, 16.0);

    let (top, bottom) = double_surface_shapes(Orientation::Horizontal, 8.0);
    assert_eq!(top.radii(), CornerRadii::top(8.0));
    assert_eq!(bottom.radii(), CornerRadii::bottom(8.0));
    assert_eq!(Shape::Rectangle.radii(), CornerRadii::ZERO);
}

#[test]
fn as_single_mirrors_text_offset() {
    let style = defaults::double_picker_style(&Palette::default(), Orientation::Vertical);
    let first = style.as_single(Part::First);
    let second = style.as_single(Part::Second);

    assert_eq!(first.text_offset_dp(), defaults::DOUBLE_TEXT_OFFSET_DP);
    assert_eq!(second.text_offset_dp(), -defaults::DOUBLE_TEXT_OFFSET_DP);
    assert_eq!(first.surface_shape, style.surface_shapes.0);
    assert_eq!(second.surface_shape, style.surface_shapes.1);
    assert_eq!(first.base.indicator_color, second.base.indicator_color);
}

#[test]
fn default_tokens() {
    assert_eq!(defaults::ITEMS_VISIBLE, 3);
    let palette = Palette::default();
    let single = defaults::single_picker_style(&palette);
    assert_eq!(single.surface_shape, Shape::Rounded(CornerRadii::all(16.0)));
    assert_eq!(single.text_offset_dp(), 0.0);
    assert_eq!(single.base.indicator_shape, Shape::Rectangle);
    assert_eq!(single.base.indicator_color, palette.primary_container);
    assert_eq!(single.base.selected_item_text_color, palette.on_primary_container);
}

#[test]
fn picker_reports_visible_item_data() {
    let mut picker = Picker::vertical((0..26).collect::<Vec<u32>>()).unwrap();
    picker.layout(Constraints::fixed(100, 120));
    picker.set_selected_index(Some(0));

    let data = picker.item_data();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].label, "0");
    assert!(data[0].selected);
    assert!(!data[1].selected);
    assert_eq!(
        data[0].size,
        DpSize {
            width: 100.0,
            height: 40.0
        }
    );

    picker.set_selected_index(Some(10));
    let now = settle(&mut picker, 0);
    assert!(now > 0);
    let labels: Vec<String> = picker.item_data().into_iter().map(|d| d.label).collect();
    assert_eq!(labels, vec!["9", "10", "11"]);
    assert_eq!(picker.selected_item(), Some(&10));
}

#[test]
fn picker_uses_custom_labels() {
    let picker = Picker::new(
        vec![1u8, 2, 3],
        PickerOptions::horizontal(0),
        |n: &u8| std::format!("#{n}"),
    )
    .unwrap();
    assert_eq!(picker.engine().count(), 3);
    assert_eq!(picker.label(1).as_deref(), Some("#2"));
    assert_eq!(picker.label(3), None);

    let picker = picker.with_label(|n: &u8| (n * 10).to_string());
    assert_eq!(picker.label(2).as_deref(), Some("30"));
}

#[test]
fn picker_rejects_even_visible_count() {
    let err = Picker::with_display_labels(
        LETTERS.to_vec(),
        PickerOptions::vertical(0).with_visible_count(4),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::VisibleCountNotOdd(4));
}

#[test]
fn tapping_selected_item_does_nothing() {
    let mut picker = Picker::vertical(LETTERS.to_vec()).unwrap();
    picker.layout(Constraints::fixed(100, 120));
    picker.set_selected_index(Some(2));
    settle(&mut picker, 0);

    assert!(!picker.tap(2));
    assert!(picker.tap(4));
    assert!(picker.engine().is_animating());
}

#[test]
fn value_mode_rejects_duplicates() {
    let err = ValuePicker::vertical(vec!["A", "B", "A"]).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateItems { first: 0, second: 2 });

    let mut picker = ValuePicker::vertical(vec!["A", "B"]).unwrap();
    assert!(picker.set_items(vec!["C", "C"]).is_err());
    assert_eq!(picker.items(), &["A", "B"]);
}

#[test]
fn value_mode_maps_values_at_the_boundary() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut picker = ValuePicker::vertical(LETTERS.to_vec())
        .unwrap()
        .with_on_value_change(move |value: &&str| sink.lock().unwrap().push(*value));
    picker.picker_mut().layout(Constraints::fixed(100, 120));

    picker.set_selected_value(Some(&"F"));
    settle(picker.picker_mut(), 0);
    assert_eq!(
        picker.picker().engine().scroll_position(),
        ScrollPosition::new(5, 0)
    );
    assert_eq!(picker.selected_value(), Some(&"F"));
    assert!(changes.lock().unwrap().is_empty());

    picker.picker_mut().engine_mut().scroll_by(-80);
    assert_eq!(*changes.lock().unwrap(), vec!["D"]);
}

#[test]
fn unknown_value_is_ignored() {
    let mut picker = ValuePicker::vertical(LETTERS.to_vec()).unwrap();
    picker.picker_mut().layout(Constraints::fixed(100, 120));
    picker.set_selected_value(Some(&"Z"));
    assert!(!picker.picker().engine().is_animating());
    assert_eq!(picker.selected_value(), None);
}

#[test]
fn value_callback_follows_replaced_items() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut picker = ValuePicker::vertical(vec![10u32, 20, 30])
        .unwrap()
        .with_on_value_change(move |value: &u32| sink.lock().unwrap().push(*value));
    picker.picker_mut().layout(Constraints::fixed(100, 120));
    picker.set_selected_value(Some(&10));

    // The selected value is gone: the centered item is reported instead.
    picker.set_items(vec![7, 8, 9]).unwrap();
    assert_eq!(*changes.lock().unwrap(), vec![7]);
    picker.set_selected_value(Some(&7));

    picker.picker_mut().engine_mut().scroll_by(40);
    assert_eq!(*changes.lock().unwrap(), vec![7, 8]);
}

#[test]
fn reordered_items_keep_the_selected_value() {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let mut picker = ValuePicker::vertical(LETTERS.to_vec())
        .unwrap()
        .with_on_value_change(move |value: &&str| sink.lock().unwrap().push(*value));
    picker.picker_mut().layout(Constraints::fixed(100, 120));
    picker.set_selected_value(Some(&"C"));
    let now = settle(picker.picker_mut(), 0);

    let mut reversed = LETTERS.to_vec();
    reversed.reverse();
    picker.set_items(reversed).unwrap();
    assert_eq!(picker.selected_value(), Some(&"C"));

    settle(picker.picker_mut(), now);
    assert_eq!(
        picker.picker().engine().scroll_position(),
        ScrollPosition::new(5, 0)
    );
    assert!(changes.lock().unwrap().is_empty());
}

proptest! {
    #[test]
    fn double_halves_share_the_extent(width in 0u32..5000, height in 0u32..5000) {
        let vertical = DoublePicker::vertical(vec![1], vec![2]).unwrap();
        let part = vertical.part_constraints(Constraints::fixed(width, height));
        prop_assert_eq!(part.max_width, Extent::Bounded(width / 2));
        prop_assert_eq!(part.max_height, Extent::Bounded(height));

        let horizontal = DoublePicker::horizontal(vec![1], vec![2]).unwrap();
        let part = horizontal.part_constraints(Constraints::fixed(width, height));
        prop_assert_eq!(part.max_width, Extent::Bounded(width));
        prop_assert_eq!(part.max_height, Extent::Bounded(height / 2));
    }
}
