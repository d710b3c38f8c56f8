//! 入力のデバウンス
//!
//! シングルスレッドのイベントループから駆動する、後縁（trailing edge）型の
//! デバウンサ。タイマースレッドは持たず、呼び出し側が `deadline()` まで
//! 待ってから `poll()` する。
//!
//! - `signal`: 値を受け取り、締め切りを `now + delay` に延長する
//! - `poll`: 締め切りを過ぎていれば保留中の値を放出する
//! - 直前に放出（または `record`）した値と同じ値は放出しない

use std::time::{Duration, Instant};

/// 既定の待ち時間
pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);

/// 後縁型デバウンサ
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
    last: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last: None,
        }
    }

    /// 値を受け取り、締め切りを延長する
    ///
    /// 保留中の値は置き換えられる。
    pub fn signal(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// 保留中の値の締め切り
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// 締め切りを過ぎていれば値を放出
    ///
    /// 直前の値と同じ場合は保留を解除するだけで `None` を返す。
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {}
            _ => return None,
        }

        let (_, value) = self.pending.take()?;
        if self.last.as_ref() == Some(&value) {
            return None;
        }
        self.last = Some(value.clone());
        Some(value)
    }

    /// デバウンスを経由せずに放出した値を記録
    pub fn record(&mut self, value: T) {
        self.last = Some(value);
    }

    /// 保留中の値を破棄
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T: Clone + PartialEq> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[cfg(test)]
#[path = "debounce_test.rs"]
mod tests;
