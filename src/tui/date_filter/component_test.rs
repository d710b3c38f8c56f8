use super::*;
use crate::date::FixedClock;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_filter(locale: &str, today: NaiveDate) -> DateFilter {
    DateFilter::new(locale, Box::new(FixedClock(today)), Duration::from_millis(400))
}

fn type_str(filter: &mut DateFilter, bound: Bound, text: &str, start: Instant, step: Duration) {
    for (i, c) in text.chars().enumerate() {
        filter.type_char(bound, c, start + step * i as u32);
    }
}

fn selection(after: Option<&str>, before: Option<&str>) -> DateSelection {
    DateSelection {
        after: after.map(str::to_string),
        before: before.map(str::to_string),
    }
}

// ============================================================================
// 構築テスト
// ============================================================================

#[test]
fn construction_derives_placeholder_and_mask_from_locale() {
    let filter = make_filter("sv-SE", date(2024, 1, 1));
    assert_eq!(filter.placeholder(), "yyyy-mm-dd");
    assert_eq!(filter.mask(), "0000-M0-d0");

    let filter = make_filter("de-DE", date(2024, 1, 1));
    assert_eq!(filter.placeholder(), "dd.mm.yyyy");
    assert_eq!(filter.mask(), "d0.M0.0000");
}

#[test]
fn initial_bounds_are_display_formatted() {
    let filter = make_filter("en-US", date(2024, 1, 1))
        .with_title("Created")
        .with_after(Some(date(2023, 1, 15)))
        .with_before(None);

    assert_eq!(filter.title, "Created");
    assert_eq!(filter.text(Bound::After), "01/15/2023");
    assert_eq!(filter.text(Bound::Before), "");
    assert!(filter.is_active());
}

// ============================================================================
// クイックフィルタテスト
// ============================================================================

#[test]
fn quick_filters_clear_before_and_set_after() {
    let today = date(2024, 3, 31);
    let expected = [
        (0, "2024-03-24"),
        (1, "2024-02-29"),
        (2, "2023-12-31"),
        (3, "2023-03-31"),
    ];

    for (id, after) in expected {
        let mut filter = make_filter("sv-SE", today).with_before(Some(date(2025, 1, 1)));
        let emitted = filter.set_date_quick_filter(id);
        assert_eq!(emitted, selection(Some(after), None), "quick filter {id}");
        assert_eq!(filter.text(Bound::Before), "");
    }
}

#[test]
fn last_month_on_march_31_yields_end_of_february() {
    let mut filter = make_filter("en-US", date(2023, 3, 31));
    let emitted = filter.set_date_quick_filter(1);
    assert_eq!(emitted.after.as_deref(), Some("2023-02-28"));
    assert_eq!(filter.text(Bound::After), "02/28/2023");
}

#[test]
fn unknown_quick_filter_sets_after_to_today() {
    let mut filter = make_filter("sv-SE", date(2024, 6, 1));
    let emitted = filter.set_date_quick_filter(9);
    assert_eq!(emitted, selection(Some("2024-06-01"), None));
}

// ============================================================================
// 正規化テスト
// ============================================================================

#[test]
fn on_change_is_idempotent() {
    let mut filter = make_filter("sv-SE", date(2024, 1, 1))
        .with_after(Some(date(2023, 1, 15)))
        .with_before(Some(date(2023, 2, 1)));

    let first = filter.on_change();
    let second = filter.on_change();
    assert_eq!(first, second);
    assert_eq!(first, selection(Some("2023-01-15"), Some("2023-02-01")));
}

#[test]
fn typed_and_picked_dates_normalize_identically() {
    let start = Instant::now();
    let mut typed = make_filter("de-DE", date(2024, 1, 1));
    type_str(&mut typed, Bound::After, "15.01.2023", start, Duration::ZERO);
    let typed_selection = typed.on_change();

    let mut picked = make_filter("de-DE", date(2024, 1, 1));
    let picked_selection = picked.dp_after_date_select(PickerDate {
        year: 2023,
        month: 1,
        day: 15,
    });

    assert_eq!(typed_selection, picked_selection);
    assert_eq!(typed.dp_value(Bound::After), picked.dp_value(Bound::After));
}

#[test]
fn short_text_is_emitted_as_null() {
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));
    type_str(&mut filter, Bound::After, "2023-0", Instant::now(), Duration::ZERO);
    assert_eq!(filter.on_change(), selection(None, None));
    // 生テキストは保持される
    assert_eq!(filter.text(Bound::After), "2023-0");
}

#[test]
fn unparsable_text_is_emitted_as_null() {
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));
    type_str(&mut filter, Bound::Before, "2023-02-30", Instant::now(), Duration::ZERO);
    assert_eq!(filter.on_change(), selection(None, None));
    assert_eq!(filter.dp_value(Bound::Before), None);
}

// ============================================================================
// デバウンステスト
// ============================================================================

#[test]
fn typing_emits_once_after_debounce() {
    let start = Instant::now();
    let step = Duration::from_millis(50);
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));

    type_str(&mut filter, Bound::After, "2023-01-15", start, step);
    let last_key = start + step * 9;

    // 入力中は発火しない
    for i in 0..10u32 {
        assert_eq!(filter.tick(start + step * i), None);
    }
    assert_eq!(filter.tick(last_key + Duration::from_millis(399)), None);

    let emitted = filter.tick(last_key + Duration::from_millis(400));
    assert_eq!(emitted, Some(selection(Some("2023-01-15"), None)));

    // 2回目は発火しない
    assert_eq!(filter.tick(last_key + Duration::from_secs(5)), None);
}

#[test]
fn burst_uses_value_at_end_of_burst() {
    let start = Instant::now();
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));

    type_str(&mut filter, Bound::After, "2023-01-1", start, Duration::from_millis(10));
    filter.type_char(Bound::After, '9', start + Duration::from_millis(100));

    let emitted = filter.tick(start + Duration::from_millis(500));
    assert_eq!(emitted, Some(selection(Some("2023-01-19"), None)));
}

#[test]
fn debounced_value_matching_immediate_emission_is_suppressed() {
    let start = Instant::now();
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));

    type_str(&mut filter, Bound::After, "2023-01-15", start, Duration::ZERO);
    // デバウンス待ちの間にカレンダーで同じ日付を選択
    filter.dp_after_date_select(PickerDate {
        year: 2023,
        month: 1,
        day: 15,
    });

    assert_eq!(filter.tick(start + Duration::from_secs(1)), None);
}

#[test]
fn typing_back_to_previous_value_after_picker_emits_again() {
    let start = Instant::now();
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));

    type_str(&mut filter, Bound::After, "2023-01-15", start, Duration::ZERO);
    assert!(filter.tick(start + Duration::from_millis(400)).is_some());

    filter.dp_after_date_select(PickerDate {
        year: 2022,
        month: 5,
        day: 1,
    });

    filter.clear_after();
    let later = start + Duration::from_secs(1);
    type_str(&mut filter, Bound::After, "2023-01-15", later, Duration::ZERO);
    assert_eq!(
        filter.tick(later + Duration::from_millis(400)),
        Some(selection(Some("2023-01-15"), None))
    );
}

#[test]
fn destroy_cancels_pending_debounce() {
    let start = Instant::now();
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));

    type_str(&mut filter, Bound::After, "2023-01-15", start, Duration::ZERO);
    assert!(filter.next_deadline().is_some());

    filter.destroy();
    assert_eq!(filter.next_deadline(), None);
    assert_eq!(filter.tick(start + Duration::from_secs(1)), None);
}

#[test]
fn end_to_end_typing_after_field() {
    let start = Instant::now();
    let mut filter = make_filter("sv-SE", date(2024, 1, 1));
    assert_eq!(filter.mask().len(), 10);
    assert_eq!(filter.placeholder(), "yyyy-mm-dd");

    type_str(&mut filter, Bound::After, "2023-01-15", start, Duration::from_millis(30));

    let settled = start + Duration::from_secs(1);
    let emitted = filter.tick(settled).unwrap();
    assert_eq!(
        serde_json::to_value(&emitted).unwrap(),
        serde_json::json!({ "after": "2023-01-15", "before": null })
    );
}

// ============================================================================
// ピッカー・クリアテスト
// ============================================================================

#[test]
fn picker_selection_emits_immediately() {
    let mut filter = make_filter("en-GB", date(2024, 1, 1));
    let emitted = filter.dp_before_date_select(PickerDate {
        year: 2024,
        month: 2,
        day: 9,
    });

    assert_eq!(emitted, selection(None, Some("2024-02-09")));
    assert_eq!(filter.text(Bound::Before), "09/02/2024");
    assert_eq!(filter.next_deadline(), None);
}

#[test]
fn clear_before_emits_immediately() {
    let mut filter = make_filter("sv-SE", date(2024, 1, 1))
        .with_after(Some(date(2023, 1, 1)))
        .with_before(Some(date(2023, 6, 1)));

    let emitted = filter.clear_before();
    assert_eq!(emitted, selection(Some("2023-01-01"), None));

    let emitted = filter.clear_after();
    assert_eq!(emitted, selection(None, None));
    assert!(!filter.is_active());
}

#[test]
fn open_picker_starts_at_current_value_or_today() {
    let mut filter = make_filter("sv-SE", date(2024, 4, 10)).with_after(Some(date(2023, 1, 15)));

    filter.open_picker(Bound::After);
    assert_eq!(filter.picker.as_ref().unwrap().cursor, date(2023, 1, 15));

    filter.open_picker(Bound::Before);
    assert_eq!(filter.picker.as_ref().unwrap().cursor, date(2024, 4, 10));
}

#[test]
fn confirm_picker_writes_target_bound() {
    let mut filter = make_filter("sv-SE", date(2024, 4, 10));
    filter.open_picker(Bound::Before);
    if let Some(picker) = filter.picker.as_mut() {
        picker.move_days(-1);
    }

    let emitted = filter.confirm_picker();
    assert_eq!(emitted, Some(selection(None, Some("2024-04-09"))));
    assert!(filter.picker.is_none());
    assert_eq!(filter.confirm_picker(), None);
}

#[test]
fn focus_cycles_in_both_directions() {
    assert_eq!(Focus::QuickFilters.next(), Focus::Field(Bound::After));
    assert_eq!(Focus::Field(Bound::Before).next(), Focus::QuickFilters);
    assert_eq!(Focus::QuickFilters.prev(), Focus::Field(Bound::Before));
}
