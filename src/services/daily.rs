//! # 하루치 출결 요약
//!
//! 직원 한 명, 현지 날짜 하루에 대해 다음을 한 번에 계산합니다.
//! 1. 날짜 → 요일
//! 2. 시간표 + 요일 → 예상 출퇴근 시각
//! 3. 그날의 첫 출근 기록, 마지막 퇴근 기록
//! 4. 학교 시간대로 변환한 뒤 출결 상태 판정

use crate::models::{AttendanceRecord, RecordType, ScheduleSession};
use crate::services::{
    calendar::day_of_week,
    periods::PeriodTable,
    schedule::{calculate_expected_times, ExpectedTimes},
    status::{get_attendance_status, AttendanceStatus},
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;

/// `GET /employees/{id}/attendance/status`와 `GET /attendance/daily`의 응답 항목
#[derive(Debug, Clone, Serialize)]
pub struct DailyAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub day_of_week: i64,
    pub expected: ExpectedTimes,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
}

/// `date`(학교 현지 날짜)에 찍힌 `record_type` 기록의 시각들
fn timestamps_on<'a, Tz: TimeZone>(
    records: &'a [AttendanceRecord],
    record_type: RecordType,
    date: NaiveDate,
    tz: &'a Tz,
) -> impl Iterator<Item = DateTime<Utc>> + 'a {
    records
        .iter()
        .filter(move |r| r.record_type == record_type)
        .map(|r| r.timestamp)
        .filter(move |ts| ts.with_timezone(tz).date_naive() == date)
}

/// 직원 한 명의 하루 출결을 요약합니다.
///
/// `records`에 다른 날짜의 기록이 섞여 있어도 학교 시간대 기준으로 `date`에 해당하는 것만 씁니다.
/// 출근이 여러 번이면 가장 이른 것, 퇴근이 여러 번이면 가장 늦은 것을 사용합니다.
pub fn summarize_day<Tz: TimeZone>(
    employee_id: &str,
    date: NaiveDate,
    sessions: &[ScheduleSession],
    records: &[AttendanceRecord],
    periods: &PeriodTable,
    tz: &Tz,
) -> DailyAttendance {
    let day_of_week = day_of_week(date);
    let expected = calculate_expected_times(sessions, day_of_week, periods);

    let check_in = timestamps_on(records, RecordType::CheckIn, date, tz).min();
    let check_out = timestamps_on(records, RecordType::CheckOut, date, tz).max();

    let local_in = check_in.map(|ts| ts.with_timezone(tz));
    let local_out = check_out.map(|ts| ts.with_timezone(tz));
    let status = get_attendance_status(
        local_in.as_ref(),
        local_out.as_ref(),
        expected.expected_entry,
        expected.expected_exit,
    );

    DailyAttendance {
        employee_id: employee_id.to_string(),
        date,
        day_of_week,
        expected,
        check_in,
        check_out,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::calendar::tests::record;
    use crate::services::schedule::tests::session;
    use crate::services::status::{EntryStatus, ExitStatus, OverallStatus, StatusColor};
    use chrono_tz::Europe::Madrid;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn classifies_using_local_wall_clock() {
        // 월요일 1~6교시 → 08:00 ~ 14:30
        let sessions = vec![session(1, 1), session(1, 6), session(2, 3)];
        let records = vec![
            record(RecordType::CheckIn, "2026-10-19T06:05:00Z"), // 현지 08:05 → 지각
            record(RecordType::CheckOut, "2026-10-19T12:35:00Z"), // 현지 14:35
        ];

        let day = summarize_day("e-1", monday(), &sessions, &records, &PeriodTable::default(), &Madrid);
        assert_eq!(day.day_of_week, 1);
        assert!(day.expected.has_schedule_today);
        assert_eq!(day.status.entry_status, EntryStatus::Late);
        assert_eq!(day.status.exit_status, ExitStatus::OnTime);
        assert_eq!(day.status.overall_status, OverallStatus::CompleteWithIssues);
        assert_eq!(day.status.overall_color, StatusColor::Red);
    }

    #[test]
    fn picks_first_check_in_and_last_check_out_of_that_day() {
        let sessions = vec![session(1, 2), session(1, 5)];
        let records = vec![
            record(RecordType::CheckIn, "2026-10-19T07:30:00Z"),
            record(RecordType::CheckIn, "2026-10-19T06:55:00Z"),
            record(RecordType::CheckOut, "2026-10-19T09:00:00Z"),
            record(RecordType::CheckOut, "2026-10-19T11:45:00Z"),
            // 다른 날 기록은 무시
            record(RecordType::CheckOut, "2026-10-20T15:00:00Z"),
        ];

        let day = summarize_day("e-1", monday(), &sessions, &records, &PeriodTable::default(), &Madrid);
        assert_eq!(day.check_in.unwrap().to_rfc3339(), "2026-10-19T06:55:00+00:00");
        assert_eq!(day.check_out.unwrap().to_rfc3339(), "2026-10-19T11:45:00+00:00");
        assert_eq!(day.status.overall_status, OverallStatus::CompleteOk);
    }

    #[test]
    fn day_without_schedule_or_records_is_absent() {
        let day = summarize_day("e-1", monday(), &[], &[], &PeriodTable::default(), &Madrid);
        assert_eq!(day.expected, ExpectedTimes::NO_SCHEDULE);
        assert_eq!(day.status.overall_status, OverallStatus::Absent);
        assert!(day.check_in.is_none());
    }
}
