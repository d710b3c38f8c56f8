//! 日付パターン
//!
//! `yyyy-mm-dd` のようなプレースホルダを解析し、マスク生成・
//! 表示文字列と日付の相互変換を行う。

use chrono::{Datelike, NaiveDate};

/// 4桁で表示できる年の範囲
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1..=9999;

/// 日付の構成要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl DateField {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'y' | 'Y' => Some(DateField::Year),
            'm' | 'M' => Some(DateField::Month),
            'd' | 'D' => Some(DateField::Day),
            _ => None,
        }
    }

    /// プレースホルダ上の表記
    pub fn placeholder(&self) -> &'static str {
        match self {
            DateField::Year => "yyyy",
            DateField::Month => "mm",
            DateField::Day => "dd",
        }
    }

    /// 最大桁数
    pub fn max_digits(&self) -> usize {
        match self {
            DateField::Year => 4,
            DateField::Month | DateField::Day => 2,
        }
    }

    /// 完全な入力とみなす最小桁数（月・日は1桁を許容）
    pub fn min_digits(&self) -> usize {
        match self {
            DateField::Year => 4,
            DateField::Month | DateField::Day => 1,
        }
    }

    /// 先頭桁として許容する最大の数字
    ///
    /// マスクの `M`（0-1）と `d`（0-3）に対応する。
    pub fn max_lead_digit(&self) -> char {
        match self {
            DateField::Year => '9',
            DateField::Month => '1',
            DateField::Day => '3',
        }
    }
}

/// パターンの1要素
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Field(DateField),
    Literal(String),
}

/// 解析済みの日付パターン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    segments: Vec<Segment>,
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Field(DateField::Year),
                Segment::Literal("-".to_string()),
                Segment::Field(DateField::Month),
                Segment::Literal("-".to_string()),
                Segment::Field(DateField::Day),
            ],
        }
    }
}

impl DatePattern {
    /// プレースホルダを解析
    ///
    /// 年・月・日がちょうど1回ずつ現れ、フィールド同士が区切り文字で
    /// 隔てられている場合のみ `Some` を返す。
    pub fn parse(placeholder: &str) -> Option<Self> {
        let mut segments: Vec<Segment> = Vec::new();

        for c in placeholder.chars() {
            match DateField::from_char(c) {
                Some(field) => match segments.last() {
                    Some(Segment::Field(last)) if *last == field => {}
                    Some(Segment::Field(_)) => return None,
                    _ => segments.push(Segment::Field(field)),
                },
                None => match segments.last_mut() {
                    Some(Segment::Literal(lit)) => lit.push(c),
                    _ => segments.push(Segment::Literal(c.to_string())),
                },
            }
        }

        let fields: Vec<DateField> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Field(f) => Some(*f),
                Segment::Literal(_) => None,
            })
            .collect();

        let has_each = [DateField::Year, DateField::Month, DateField::Day]
            .iter()
            .all(|f| fields.iter().filter(|x| *x == f).count() == 1);

        if fields.len() == 3 && has_each {
            Some(Self { segments })
        } else {
            None
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// 正規化済みのプレースホルダ（例: `dd.mm.yyyy`）
    pub fn placeholder(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Field(f) => f.placeholder(),
                Segment::Literal(lit) => lit.as_str(),
            })
            .collect()
    }

    /// 入力マスク（例: `0000-M0-d0`）
    pub fn mask(&self) -> String {
        mask_for_placeholder(&self.placeholder())
    }

    /// 完全な日付とみなす最小文字数
    ///
    /// 年は4桁、月・日は1桁以上、区切り文字はすべて必要。
    pub fn min_complete_len(&self) -> usize {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Field(f) => f.min_digits(),
                Segment::Literal(lit) => lit.chars().count(),
            })
            .sum()
    }

    /// 表示文字列を日付に変換（deformat）
    ///
    /// 書式に合わない、または存在しない日付の場合は `None`。
    pub fn deformat(&self, text: &str) -> Option<NaiveDate> {
        let mut rest = text.trim();
        let (mut year, mut month, mut day) = (None, None, None);

        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => {
                    rest = rest.strip_prefix(lit.as_str())?;
                }
                Segment::Field(field) => {
                    let end = rest
                        .find(|c: char| !c.is_ascii_digit())
                        .unwrap_or(rest.len());
                    let (digits, tail) = rest.split_at(end);
                    if digits.len() < field.min_digits() || digits.len() > field.max_digits() {
                        return None;
                    }
                    let value: u32 = digits.parse().ok()?;
                    match field {
                        DateField::Year => year = Some(value as i32),
                        DateField::Month => month = Some(value),
                        DateField::Day => day = Some(value),
                    }
                    rest = tail;
                }
            }
        }

        if !rest.is_empty() {
            return None;
        }

        NaiveDate::from_ymd_opt(year?, month?, day?)
    }

    /// 日付を表示文字列に変換
    ///
    /// 年は `YEAR_RANGE` に丸める。
    pub fn format(&self, date: NaiveDate) -> String {
        let date = clamp_to_year_range(date);
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Field(DateField::Year) => format!("{:04}", date.year()),
                Segment::Field(DateField::Month) => format!("{:02}", date.month()),
                Segment::Field(DateField::Day) => format!("{:02}", date.day()),
                Segment::Literal(lit) => lit.clone(),
            })
            .collect()
    }
}

/// 日付を `YEAR_RANGE` 内に丸める
pub fn clamp_to_year_range(date: NaiveDate) -> NaiveDate {
    let min = NaiveDate::from_ymd_opt(*YEAR_RANGE.start(), 1, 1);
    let max = NaiveDate::from_ymd_opt(*YEAR_RANGE.end(), 12, 31);
    match (min, max) {
        (Some(min), Some(max)) => date.clamp(min, max),
        _ => date,
    }
}

/// プレースホルダから入力マスクを生成
///
/// `yyyy` → `0000`、`mm` → `M0`、`dd` → `d0`。その他の文字はそのまま残す。
pub fn mask_for_placeholder(placeholder: &str) -> String {
    placeholder
        .replace("yyyy", "0000")
        .replace("mm", "M0")
        .replace("dd", "d0")
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod tests;
