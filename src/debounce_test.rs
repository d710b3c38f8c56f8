use super::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn nothing_pending_yields_nothing() {
    let mut debouncer: Debouncer<u32> = Debouncer::default();
    assert_eq!(debouncer.poll(Instant::now()), None);
    assert_eq!(debouncer.deadline(), None);
}

#[test]
fn value_is_held_until_delay_elapses() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(ms(400));
    debouncer.signal(1, start);

    assert_eq!(debouncer.poll(start + ms(399)), None);
    assert!(debouncer.deadline().is_some());
    assert_eq!(debouncer.poll(start + ms(400)), Some(1));
    assert!(debouncer.deadline().is_none());
}

#[test]
fn burst_collapses_to_last_value() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(ms(400));

    // 100ms 間隔で 5 回入力
    for i in 0..5u64 {
        debouncer.signal(i, start + ms(i * 100));
        assert_eq!(debouncer.poll(start + ms(i * 100 + 50)), None);
    }

    assert_eq!(debouncer.deadline(), Some(start + ms(800)));
    assert_eq!(debouncer.poll(start + ms(799)), None);
    assert_eq!(debouncer.poll(start + ms(800)), Some(4));
    assert_eq!(debouncer.poll(start + ms(2000)), None);
}

#[test]
fn duplicate_consecutive_value_is_suppressed() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(ms(10));

    debouncer.signal("a", start);
    assert_eq!(debouncer.poll(start + ms(10)), Some("a"));

    debouncer.signal("a", start + ms(20));
    assert_eq!(debouncer.poll(start + ms(30)), None);
    assert!(debouncer.deadline().is_none());

    debouncer.signal("b", start + ms(40));
    assert_eq!(debouncer.poll(start + ms(50)), Some("b"));
}

#[test]
fn recorded_value_suppresses_matching_debounced_value() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(ms(10));

    debouncer.signal("a", start);
    debouncer.record("a");
    assert_eq!(debouncer.poll(start + ms(10)), None);
}

#[test]
fn recorded_value_resets_comparison_base() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(ms(10));

    debouncer.signal("a", start);
    assert_eq!(debouncer.poll(start + ms(10)), Some("a"));

    // 別経路で "b" を放出した後、"a" に戻すと再び放出される
    debouncer.record("b");
    debouncer.signal("a", start + ms(20));
    assert_eq!(debouncer.poll(start + ms(30)), Some("a"));
}

#[test]
fn cancel_drops_pending_value() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(ms(10));

    debouncer.signal(7, start);
    debouncer.cancel();
    assert_eq!(debouncer.poll(start + ms(100)), None);
    assert_eq!(debouncer.deadline(), None);
}
