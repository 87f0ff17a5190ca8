//! # 벽시계(wall-clock) 시각 유틸리티
//!
//! 교시표와 예상 출퇴근 시각은 날짜 없이 `"HH:MM"` 문자열로 주고받습니다.
//! 이 모듈은 그 문자열과 `chrono::NaiveTime` 사이의 변환을 담당합니다.
//!
//! - `parse_clock()`: `"08:30"` → `NaiveTime`
//! - `format_clock()`: `NaiveTime` → `"08:30"`
//! - `minutes_of_day()`: 자정부터 흐른 분(minute) 수. 초 단위는 버립니다.
//! - `hhmm`, `hhmm_option`: `#[serde(with = "...")]`에 쓰는 직렬화 모듈

use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// `"HH:MM"` 형식이 아닌 문자열을 만났을 때의 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wall-clock time {0:?}, expected HH:MM")]
pub struct ClockParseError(pub String);

/// `"HH:MM"` 문자열을 `NaiveTime`으로 변환합니다.
///
/// 앞뒤 공백은 무시합니다. `"8:05"`처럼 한 자리 시(hour)도 허용됩니다.
pub fn parse_clock(value: &str) -> Result<NaiveTime, ClockParseError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ClockParseError(value.to_string()))
}

/// `NaiveTime`을 `"HH:MM"` 문자열로 변환합니다. 초는 출력하지 않습니다.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// 자정 이후 경과한 분 수 (시 × 60 + 분)
///
/// `Timelike`를 구현한 타입이면 무엇이든 받습니다.
/// `NaiveTime`은 물론 `DateTime<Tz>`도 가능하며, 이때는 **그 시간대의 벽시계** 기준입니다.
pub fn minutes_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour() * 60 + time.minute()
}

/// `NaiveTime` 필드를 `"HH:MM"` 문자열로 직렬화합니다.
///
/// chrono 기본 직렬화는 `"08:00:00"`처럼 초까지 출력하므로 별도 모듈을 둡니다.
pub mod hhmm {
    use super::{format_clock, parse_clock};
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_clock(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_clock(&raw).map_err(D::Error::custom)
    }
}

/// `Option<NaiveTime>` 버전. `None`은 JSON `null`이 됩니다.
pub mod hhmm_option {
    use super::{format_clock, parse_clock};
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_str(&format_clock(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| parse_clock(&raw).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_bell_times() {
        let time = parse_clock("11:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(11, 30, 0).unwrap());
        assert_eq!(format_clock(time), "11:30");
        assert_eq!(parse_clock(" 8:05 ").unwrap(), NaiveTime::from_hms_opt(8, 5, 0).unwrap());
    }

    #[test]
    fn rejects_malformed_clock_strings() {
        for raw in ["", "25:00", "12:60", "noon", "12"] {
            assert_eq!(parse_clock(raw), Err(ClockParseError(raw.to_string())), "{raw}");
        }
    }

    #[test]
    fn minutes_of_day_discards_seconds() {
        let time = NaiveTime::from_hms_opt(13, 30, 59).unwrap();
        assert_eq!(minutes_of_day(&time), 13 * 60 + 30);
    }
}
