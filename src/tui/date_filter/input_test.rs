use super::*;
use crate::date::FixedClock;
use chrono::NaiveDate;
use std::time::Duration;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_filter() -> DateFilter {
    DateFilter::new(
        "sv-SE",
        Box::new(FixedClock(date(2024, 3, 31))),
        Duration::from_millis(400),
    )
}

/// キー列を送り、即時に通知された選択範囲を集める
fn press(model: &mut DateFilter, keys: &[KeyCode], now: Instant) -> Vec<DateSelection> {
    let mut emitted = Vec::new();
    for key in keys {
        if let Some(msg) = key_to_msg(model, *key) {
            emitted.extend(update(model, msg, now));
        }
    }
    emitted
}

// ============================================================================
// クイックフィルタ
// ============================================================================

#[test]
fn enter_on_quick_filter_applies_it() {
    let mut model = make_filter();
    let now = Instant::now();

    let emitted = press(&mut model, &[KeyCode::Down, KeyCode::Enter], now);

    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].after.as_deref(), Some("2024-02-29"));
    assert_eq!(emitted[0].before, None);
}

#[test]
fn quick_filter_cursor_stays_in_range() {
    let mut model = make_filter();
    let now = Instant::now();

    press(&mut model, &[KeyCode::Up], now);
    assert_eq!(model.quick_filter_state.selected(), Some(0));

    press(&mut model, &[KeyCode::Down; 10], now);
    assert_eq!(model.quick_filter_state.selected(), Some(3));
    assert_eq!(model.selected_quick_filter(), Some(QuickFilter::LastYear));
}

// ============================================================================
// 入力欄
// ============================================================================

#[test]
fn typing_in_field_goes_through_debounce() {
    let mut model = make_filter();
    let now = Instant::now();

    press(&mut model, &[KeyCode::Tab], now);
    assert_eq!(model.focus, Focus::Field(Bound::After));

    let keys: Vec<KeyCode> = "2023-01-15".chars().map(KeyCode::Char).collect();
    let emitted = press(&mut model, &keys, now);

    assert!(emitted.is_empty());
    assert_eq!(model.text(Bound::After), "2023-01-15");
    assert_eq!(
        model.tick(now + Duration::from_millis(400)),
        Some(DateSelection {
            after: Some("2023-01-15".to_string()),
            before: None,
        })
    );
}

#[test]
fn letters_in_field_are_ignored() {
    let model = {
        let mut m = make_filter();
        m.focus = Focus::Field(Bound::Before);
        m
    };
    assert_eq!(key_to_msg(&model, KeyCode::Char('x')), None);
    assert_eq!(key_to_msg(&model, KeyCode::Char('7')), Some(Msg::Input('7')));
}

#[test]
fn backspace_and_delete_edit_focused_field() {
    let mut model = make_filter().with_before(Some(date(2023, 6, 1)));
    model.focus = Focus::Field(Bound::Before);
    let now = Instant::now();

    press(&mut model, &[KeyCode::Backspace], now);
    assert_eq!(model.text(Bound::Before), "2023-06-0");

    let emitted = press(&mut model, &[KeyCode::Delete], now);
    assert_eq!(emitted, vec![DateSelection::default()]);
    assert_eq!(model.text(Bound::Before), "");
}

#[test]
fn delete_clears_only_the_focused_bound() {
    let mut model = make_filter()
        .with_after(Some(date(2023, 1, 1)))
        .with_before(Some(date(2023, 6, 1)));
    let now = Instant::now();

    model.focus = Focus::Field(Bound::After);
    let emitted = press(&mut model, &[KeyCode::Delete], now);
    assert_eq!(
        emitted,
        vec![DateSelection {
            after: None,
            before: Some("2023-06-01".to_string()),
        }]
    );
    assert_eq!(model.text(Bound::Before), "2023-06-01");
}

// ============================================================================
// カレンダー
// ============================================================================

#[test]
fn enter_on_field_opens_picker_and_select_emits() {
    let mut model = make_filter();
    model.focus = Focus::Field(Bound::After);
    let now = Instant::now();

    press(&mut model, &[KeyCode::Enter], now);
    assert!(model.picker.is_some());

    let emitted = press(
        &mut model,
        &[KeyCode::Left, KeyCode::Up, KeyCode::PageUp, KeyCode::Enter],
        now,
    );

    // 2024-03-31 → -1日 → -7日 → -1か月
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].after.as_deref(), Some("2024-02-23"));
    assert!(model.picker.is_none());
}

#[test]
fn esc_closes_picker_before_dropdown() {
    let mut model = make_filter();
    model.focus = Focus::Field(Bound::After);
    let now = Instant::now();

    press(&mut model, &[KeyCode::Enter, KeyCode::Esc], now);
    assert!(model.picker.is_none());
    assert!(!model.should_close);

    press(&mut model, &[KeyCode::Esc], now);
    assert!(model.should_close);
}

#[test]
fn q_closes_only_outside_fields() {
    let mut model = make_filter();
    model.focus = Focus::Field(Bound::After);
    assert_eq!(key_to_msg(&model, KeyCode::Char('q')), None);

    model.focus = Focus::QuickFilters;
    assert_eq!(key_to_msg(&model, KeyCode::Char('q')), Some(Msg::Close));
}
