//! # 교시표(Period Table)
//!
//! 하루 수업 시간표의 "몇 교시"를 실제 벽시계 시각(시작/종료)으로 바꿔주는 표입니다.
//! 쉬는 시간과 점심 시간은 교시 경계에 이미 반영되어 있습니다.
//! (예: 3교시는 11:00에 끝나고 4교시는 11:30에 시작 → 그 사이 30분이 쉬는 시간)
//!
//! ## 기본 교시표
//! | 교시 | 시작  | 종료  |
//! |------|-------|-------|
//! | 1    | 08:00 | 09:00 |
//! | 2    | 09:00 | 10:00 |
//! | 3    | 10:00 | 11:00 |
//! | 4    | 11:30 | 12:30 |
//! | 5    | 12:30 | 13:30 |
//! | 6    | 13:30 | 14:30 |
//! | 7    | 15:30 | 16:30 |
//! | 8    | 16:30 | 17:30 |
//!
//! 학교마다 종 치는 시각이 다르므로 `PERIOD_TABLE_PATH`로 JSON 파일을 지정하면
//! 기본값 대신 그 표를 사용합니다.
//!
//! ```json
//! { "1": { "start": "08:00", "end": "09:00" }, "2": { "start": "09:00", "end": "10:00" } }
//! ```

use crate::services::clock;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// 교시 하나의 시작/종료 시각
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(with = "clock::hhmm")]
    pub start: NaiveTime,
    #[serde(with = "clock::hhmm")]
    pub end: NaiveTime,
}

/// 교시표를 불러오거나 만들 때 발생할 수 있는 에러
#[derive(Debug, Error)]
pub enum PeriodTableError {
    /// JSON 문법 오류, 또는 시각이 `"HH:MM"` 형식이 아님
    #[error("invalid period table: {0}")]
    Json(#[from] serde_json::Error),

    /// 교시가 하나도 없음
    #[error("period table is empty")]
    Empty,

    /// 시작 시각이 종료 시각보다 늦거나 같음
    #[error("period {period} starts at {start} but ends at {end}")]
    InvalidRange {
        period: i64,
        start: NaiveTime,
        end: NaiveTime,
    },
}

// const fn 안의 panic!은 컴파일 타임에 평가되므로, 잘못된 상수는 빌드 단계에서 걸립니다.
const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid bell time"),
    }
}

const REFERENCE_PERIODS: [(i64, NaiveTime, NaiveTime); 8] = [
    (1, hm(8, 0), hm(9, 0)),
    (2, hm(9, 0), hm(10, 0)),
    (3, hm(10, 0), hm(11, 0)),
    (4, hm(11, 30), hm(12, 30)), // 11:00-11:30 쉬는 시간
    (5, hm(12, 30), hm(13, 30)),
    (6, hm(13, 30), hm(14, 30)),
    (7, hm(15, 30), hm(16, 30)), // 14:30-15:30 점심
    (8, hm(16, 30), hm(17, 30)),
];

/// 교시 번호 → `Period` 매핑
///
/// `BTreeMap`을 사용하므로 교시 번호 순서대로 순회/직렬화됩니다.
/// 한 번 만들어지면 변경되지 않으며, `AppState`에서 `Arc`로 공유합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeriodTable {
    periods: BTreeMap<i64, Period>,
}

impl PeriodTable {
    /// 교시 목록으로 교시표를 만듭니다. 모든 교시는 `start < end`여야 합니다.
    pub fn new(
        periods: impl IntoIterator<Item = (i64, Period)>,
    ) -> Result<Self, PeriodTableError> {
        let periods: BTreeMap<i64, Period> = periods.into_iter().collect();
        if periods.is_empty() {
            return Err(PeriodTableError::Empty);
        }
        if let Some((&period, p)) = periods.iter().find(|(_, p)| p.start >= p.end) {
            return Err(PeriodTableError::InvalidRange {
                period,
                start: p.start,
                end: p.end,
            });
        }
        Ok(Self { periods })
    }

    /// JSON 문자열에서 교시표를 읽습니다.
    ///
    /// JSON 객체의 키는 문자열이지만 serde_json이 `"1"` → `1`로 변환해 줍니다.
    pub fn from_json(raw: &str) -> Result<Self, PeriodTableError> {
        let periods: BTreeMap<i64, Period> = serde_json::from_str(raw)?;
        Self::new(periods)
    }

    /// 교시 번호로 조회합니다. 표에 없는 번호면 `None`.
    pub fn get(&self, hour_period: i64) -> Option<&Period> {
        self.periods.get(&hour_period)
    }

    /// 등록된 교시 수
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &Period)> {
        self.periods.iter().map(|(&hour, period)| (hour, period))
    }
}

impl Default for PeriodTable {
    /// 기준 학교(Institut Bitàcola)의 8교시 시간표
    fn default() -> Self {
        let periods = REFERENCE_PERIODS
            .iter()
            .map(|&(hour, start, end)| (hour, Period { start, end }))
            .collect();
        Self { periods }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_breaks_between_periods() {
        let table = PeriodTable::default();
        assert_eq!(table.period_count(), 8);
        assert_eq!(table.get(3).unwrap().end, hm(11, 0));
        assert_eq!(table.get(4).unwrap().start, hm(11, 30));
        assert_eq!(table.get(6).unwrap().end, hm(14, 30));
        assert_eq!(table.get(7).unwrap().start, hm(15, 30));
    }

    #[test]
    fn unknown_periods_are_absent() {
        let table = PeriodTable::default();
        assert!(table.get(0).is_none());
        assert!(table.get(9).is_none());
        assert!(table.get(-1).is_none());
    }

    #[test]
    fn loads_custom_table_from_json() {
        let table = PeriodTable::from_json(
            r#"{ "1": { "start": "07:45", "end": "08:40" }, "2": { "start": "08:40", "end": "09:35" } }"#,
        )
        .unwrap();
        assert_eq!(table.period_count(), 2);
        assert_eq!(table.get(1).unwrap().start, hm(7, 45));
        assert_eq!(table.get(2).unwrap().end, hm(9, 35));
    }

    #[test]
    fn rejects_inverted_period() {
        let err = PeriodTable::from_json(r#"{ "3": { "start": "11:00", "end": "10:00" } }"#)
            .unwrap_err();
        assert!(matches!(err, PeriodTableError::InvalidRange { period: 3, .. }));
    }

    #[test]
    fn rejects_bad_clock_strings_and_empty_tables() {
        let err = PeriodTable::from_json(r#"{ "1": { "start": "8h", "end": "09:00" } }"#)
            .unwrap_err();
        assert!(matches!(err, PeriodTableError::Json(_)));
        assert!(matches!(PeriodTable::from_json("{}"), Err(PeriodTableError::Empty)));
    }

    #[test]
    fn serializes_as_hhmm_keyed_by_period() {
        let json = serde_json::to_value(PeriodTable::default()).unwrap();
        assert_eq!(json["4"]["start"], "11:30");
        assert_eq!(json["8"]["end"], "17:30");
    }
}
