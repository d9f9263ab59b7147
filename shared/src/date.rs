//! 截止日期类型模块
//!
//! 后端可能返回纯日期 (`2025-01-01`) 或完整时间戳
//! (`2025-01-01T00:00:00.000Z`)，客户端只保留日期部分。

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const WIRE_FORMAT: &str = "%Y-%m-%d";
const LONG_FORMAT: &str = "%B %-d, %Y";

/// 任务截止日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DueDate(NaiveDate);

impl DueDate {
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// 解析日期字符串
    ///
    /// 依次尝试 `YYYY-MM-DD`、RFC 3339 以及无时区的 `YYYY-MM-DDTHH:MM:SS`。
    /// 空串或无法识别时返回 `None`。
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, WIRE_FORMAT) {
            return Some(Self(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(dt.naive_utc().date()));
        }
        if let Ok(dt) = NaiveDateTime::from_str(s) {
            return Some(Self(dt.date()));
        }
        None
    }

    /// 本地时区的今天，用作日期输入框的下限
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// 列表展示格式，例如 `January 5, 2025`
    pub fn long_format(&self) -> String {
        self.0.format(LONG_FORMAT).to_string()
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for DueDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DueDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DueDate::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid due date: {raw}")))
    }
}

/// `Option<DueDate>` 的宽松反序列化：`null`、空串和无法识别的值都视为缺失
pub mod optional {
    use super::DueDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<DueDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.collect_str(date),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DueDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(DueDate::parse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_timestamp_forms() {
        let plain = DueDate::parse("2025-01-05").unwrap();
        let stamped = DueDate::parse("2025-01-05T00:00:00.000Z").unwrap();
        let naive = DueDate::parse("2025-01-05T10:30:00").unwrap();

        assert_eq!(plain, stamped);
        assert_eq!(plain, naive);
        assert_eq!(plain.to_string(), "2025-01-05");
    }

    #[test]
    fn rejects_blank_and_garbage() {
        assert!(DueDate::parse("   ").is_none());
        assert!(DueDate::parse("next tuesday").is_none());
    }

    #[test]
    fn long_format_matches_list_display() {
        let date = DueDate::parse("2025-01-05").unwrap();
        assert_eq!(date.long_format(), "January 5, 2025");
    }
}
