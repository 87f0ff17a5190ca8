//! # 요일과 "오늘" 계산
//!
//! 출퇴근 기록은 UTC로 저장되지만, "오늘", "무슨 요일"은 학교 현지 달력으로 정해집니다.
//! 이 모듈의 함수들은 모두 시간대를 인자로 받아 그 차이를 명시적으로 처리합니다.

use crate::models::{AttendanceRecord, RecordType};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// ISO 요일 번호: 월요일 = 1 … 일요일 = 7
pub fn day_of_week(date: NaiveDate) -> i64 {
    i64::from(date.weekday().number_from_monday())
}

/// 학교 시간대 기준 오늘 날짜
pub fn local_today<Tz: TimeZone>(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

/// 학교 시간대 기준 오늘의 요일 번호
pub fn today_day_of_week<Tz: TimeZone>(tz: &Tz) -> i64 {
    day_of_week(local_today(tz))
}

/// 현지 날짜가 시작되는 순간을 UTC 시각으로 바꿉니다.
///
/// 서머타임 전환으로 자정이 두 번 있으면 앞쪽을 씁니다.
/// 자정이 건너뛰어지는 시간대(예: 아바나의 3월 전환일)는 자정 이후 처음 존재하는
/// 벽시계 시각(15분 단위로 탐색)이 그날의 시작입니다.
fn local_midnight_utc<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=96)
        .map(|quarter| midnight + Duration::minutes(15 * quarter))
        .find_map(|wall| tz.from_local_datetime(&wall).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// 현지 날짜 하루를 덮는 UTC 반열린 구간 `[start, end)`
///
/// DB에서 "그날의 기록"을 조회할 때 사용합니다.
/// 서머타임 전환일에는 구간 길이가 23시간 또는 25시간이 됩니다.
pub fn local_day_bounds<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = local_midnight_utc(date, tz);
    let end = date
        .succ_opt()
        .map(|next| local_midnight_utc(next, tz))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    (start, end)
}

fn has_record_on<Tz: TimeZone>(
    records: &[AttendanceRecord],
    record_type: RecordType,
    day: NaiveDate,
    tz: &Tz,
) -> bool {
    records.iter().any(|record| {
        record.record_type == record_type && record.timestamp.with_timezone(tz).date_naive() == day
    })
}

/// 주어진 현지 날짜에 출근 기록이 하나라도 있는지
pub fn has_checked_in_today<Tz: TimeZone>(
    records: &[AttendanceRecord],
    today: NaiveDate,
    tz: &Tz,
) -> bool {
    has_record_on(records, RecordType::CheckIn, today, tz)
}

/// 주어진 현지 날짜에 퇴근 기록이 하나라도 있는지
pub fn has_checked_out_today<Tz: TimeZone>(
    records: &[AttendanceRecord],
    today: NaiveDate,
    tz: &Tz,
) -> bool {
    has_record_on(records, RecordType::CheckOut, today, tz)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::CheckMethod;
    use chrono_tz::Europe::Madrid;

    pub(crate) fn record(record_type: RecordType, rfc3339: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: format!("r-{rfc3339}"),
            employee_id: "e-1".to_string(),
            record_type,
            timestamp: DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc),
            method: CheckMethod::Web,
            location: None,
            notes: None,
            created_at: "2026-10-19T06:00:00.000Z".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekdays_are_numbered_from_monday() {
        assert_eq!(day_of_week(date(2026, 10, 19)), 1); // 월
        assert_eq!(day_of_week(date(2026, 10, 23)), 5); // 금
        assert_eq!(day_of_week(date(2026, 10, 25)), 7); // 일
    }

    #[test]
    fn day_bounds_follow_the_local_calendar() {
        // 마드리드 10월 19일 = UTC+2 (서머타임)
        let (start, end) = local_day_bounds(date(2026, 10, 19), &Madrid);
        assert_eq!(start.to_rfc3339(), "2026-10-18T22:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-10-19T22:00:00+00:00");
    }

    #[test]
    fn day_bounds_stretch_on_the_autumn_clock_change() {
        // 2026-10-25 03:00 CEST → 02:00 CET: 그날은 25시간
        let (start, end) = local_day_bounds(date(2026, 10, 25), &Madrid);
        assert_eq!((end - start).num_hours(), 25);
    }

    #[test]
    fn day_starts_at_the_first_valid_instant_when_midnight_is_skipped() {
        // 아바나 2026-03-08: 00:00 CST → 01:00 CDT, 자정이 없는 날
        let havana = chrono_tz::America::Havana;
        let (start, end) = local_day_bounds(date(2026, 3, 8), &havana);
        assert_eq!(start.to_rfc3339(), "2026-03-08T05:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2026-03-09T04:00:00+00:00");
        assert_eq!((end - start).num_hours(), 23);

        // 전날 구간과 빈틈 없이 이어집니다.
        let (_, previous_end) = local_day_bounds(date(2026, 3, 7), &havana);
        assert_eq!(previous_end, start);
    }

    #[test]
    fn checks_for_records_on_the_local_day() {
        let records = vec![
            // 현지 10월 19일 00:30 (UTC로는 18일)
            record(RecordType::CheckIn, "2026-10-18T22:30:00Z"),
            record(RecordType::CheckOut, "2026-10-18T12:00:00Z"),
        ];
        assert!(has_checked_in_today(&records, date(2026, 10, 19), &Madrid));
        assert!(!has_checked_out_today(&records, date(2026, 10, 19), &Madrid));
        assert!(has_checked_out_today(&records, date(2026, 10, 18), &Madrid));
        assert!(!has_checked_in_today(&records, date(2026, 10, 18), &Madrid));
    }
}
