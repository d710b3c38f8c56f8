//! マスク付き日付入力
//!
//! 日付パターンに沿って数字だけを受け付け、フィールドが埋まると
//! 区切り文字を自動挿入する。入力途中のテキストはそのまま保持し、
//! 日付としての値は `resolve` で都度導出する。

use crate::date::{DateField, DatePattern, Segment};
use chrono::NaiveDate;

/// 入力位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    /// 入力中のセグメント番号
    segment: usize,
    /// そのフィールドに入力済みの桁数
    digits: usize,
}

/// マスク付き入力欄
#[derive(Debug, Clone)]
pub struct MaskedInput {
    pattern: DatePattern,
    text: String,
}

impl MaskedInput {
    pub fn new(pattern: DatePattern) -> Self {
        Self {
            pattern,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// 日付を表示形式で設定
    pub fn set_date(&mut self, date: NaiveDate) {
        self.text = self.pattern.format(date);
    }

    /// 日付として解決
    ///
    /// 最小文字数に満たない、または日付として不正なら `None`。
    pub fn resolve(&self) -> Option<NaiveDate> {
        if self.text.chars().count() < self.pattern.min_complete_len() {
            return None;
        }
        self.pattern.deformat(&self.text)
    }

    /// 1文字入力
    ///
    /// 受け付けた場合 `true`。
    pub fn push(&mut self, c: char) -> bool {
        let Some(cursor) = self.cursor() else {
            return false;
        };

        let segment = self.pattern.segments()[cursor.segment].clone();
        match segment {
            Segment::Literal(lit) => {
                // フィールドが埋まった直後、または先頭のリテラル
                if lit.starts_with(c) {
                    self.text.push_str(&lit);
                    return true;
                }
                if !c.is_ascii_digit() {
                    return false;
                }
                self.text.push_str(&lit);
                self.push(c)
            }
            Segment::Field(field) if c.is_ascii_digit() => self.push_digit(field, cursor, c),
            Segment::Field(field) => self.push_separator(field, cursor, c),
        }
    }

    fn push_digit(&mut self, field: DateField, cursor: Cursor, c: char) -> bool {
        if cursor.digits >= field.max_digits() {
            return false;
        }
        let mut filled = cursor.digits + 1;
        if cursor.digits == 0 && c > field.max_lead_digit() {
            // 先頭に置けない数字は1桁の値とみなしてゼロ埋め
            self.text.push('0');
            filled += 1;
        }
        self.text.push(c);

        if filled >= field.max_digits() {
            self.push_literal_after(cursor.segment);
        }
        true
    }

    fn push_separator(&mut self, field: DateField, cursor: Cursor, c: char) -> bool {
        if cursor.digits < field.min_digits() {
            return false;
        }
        match self.pattern.segments().get(cursor.segment + 1) {
            Some(Segment::Literal(lit)) if lit.starts_with(c) => {
                self.text.push_str(lit);
                true
            }
            _ => false,
        }
    }

    /// フィールドの直後が区切り文字なら追加
    fn push_literal_after(&mut self, segment: usize) {
        if let Some(Segment::Literal(lit)) = self.pattern.segments().get(segment + 1) {
            self.text.push_str(lit);
        }
    }

    /// 1文字削除
    ///
    /// 末尾に残った区切り文字もあわせて取り除く。
    pub fn pop(&mut self) {
        self.text.pop();
        while self.text.ends_with(|c: char| !c.is_ascii_digit()) {
            self.text.pop();
        }
    }

    /// 現在の入力位置を求める
    ///
    /// すべて入力済みなら `None`。
    fn cursor(&self) -> Option<Cursor> {
        let mut rest = self.text.as_str();
        let segments = self.pattern.segments();

        for (i, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Literal(lit) => match rest.strip_prefix(lit.as_str()) {
                    Some(tail) => rest = tail,
                    None => return Some(Cursor { segment: i, digits: 0 }),
                },
                Segment::Field(field) => {
                    let digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
                    rest = &rest[digits..];
                    let is_last = i + 1 == segments.len();
                    if rest.is_empty() && (digits < field.max_digits() || !is_last) {
                        if digits < field.max_digits() {
                            return Some(Cursor { segment: i, digits });
                        }
                        // フィールドは埋まっているが区切り文字がまだない
                        return Some(Cursor {
                            segment: i + 1,
                            digits: 0,
                        });
                    }
                }
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "masked_input_test.rs"]
mod tests;
