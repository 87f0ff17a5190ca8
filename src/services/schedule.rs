//! # 예상 출퇴근 시각 계산
//!
//! 직원의 주간 시간표와 요일이 주어지면, 그날 몇 시에 와서 몇 시에 가야 하는지를 계산합니다.
//!
//! ## 계산 규칙
//! 1. 그 요일의 시간표 칸만 골라냅니다.
//! 2. 하나도 없으면 "오늘은 일정 없음" (`has_schedule_today = false`, 시각 둘 다 없음)
//! 3. 가장 이른 교시의 **시작** 시각 → 예상 출근 시각
//! 4. 가장 늦은 교시의 **종료** 시각 → 예상 퇴근 시각
//!
//! 교시표에 없는 교시 번호는 에러가 아니라 해당 시각이 `None`이 될 뿐입니다.

use crate::models::ScheduleSession;
use crate::services::{clock, periods::PeriodTable};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// 특정 요일의 예상 출퇴근 시각
///
/// 요청마다 새로 계산하는 일회성 값이며 DB에 저장하지 않습니다.
/// `has_schedule_today`가 false이면 두 시각은 항상 `None`입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedTimes {
    #[serde(with = "clock::hhmm_option", default)]
    pub expected_entry: Option<NaiveTime>,
    #[serde(with = "clock::hhmm_option", default)]
    pub expected_exit: Option<NaiveTime>,
    pub has_schedule_today: bool,
}

impl ExpectedTimes {
    /// 그날 시간표가 없을 때의 값
    pub const NO_SCHEDULE: Self = Self {
        expected_entry: None,
        expected_exit: None,
        has_schedule_today: false,
    };
}

/// 시간표와 요일로부터 예상 출퇴근 시각을 계산합니다.
///
/// # 매개변수
/// - `sessions`: 한 직원의 시간표 (여러 요일이 섞여 있어도 됨)
/// - `day_of_week`: 조회할 요일 (월요일 = 1)
/// - `periods`: 교시 번호 → 벽시계 시각 변환표
///
/// `is_lective_hour`가 false인 칸(비수업 업무)도 출퇴근 범위에 포함됩니다.
pub fn calculate_expected_times(
    sessions: &[ScheduleSession],
    day_of_week: i64,
    periods: &PeriodTable,
) -> ExpectedTimes {
    let mut hours = sessions
        .iter()
        .filter(|session| session.day_of_week == day_of_week)
        .map(|session| session.hour_period);

    // let-else: 첫 번째 값이 없으면(그 요일 시간표가 비어 있으면) 바로 반환
    let Some(first) = hours.next() else {
        return ExpectedTimes::NO_SCHEDULE;
    };

    // 한 번의 순회로 최솟값과 최댓값을 함께 구합니다.
    let (earliest, latest) = hours.fold((first, first), |(lo, hi), hour| {
        (lo.min(hour), hi.max(hour))
    });

    ExpectedTimes {
        expected_entry: periods.get(earliest).map(|period| period.start),
        expected_exit: periods.get(latest).map(|period| period.end),
        has_schedule_today: true,
    }
}
