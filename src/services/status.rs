//! # 출결 상태 판정
//!
//! 실제 출근/퇴근 시각과 예상 출퇴근 시각을 비교해 출근 상태, 퇴근 상태, 종합 상태와
//! 화면 표시용 색상을 계산합니다. 입력 네 개만으로 결정되는 순수 함수이며 실패하지 않습니다.
//!
//! ## 출근 판정 (우선순위 순)
//! 1. 출근 기록과 예상 출근 시각이 모두 있음: 실제 ≤ 예상 → `early`(초록), 실제 > 예상 → `late`(빨강)
//! 2. 출근 기록만 있음 → `on-time`(초록)
//! 3. 그 외 → `missing`(회색)
//!
//! 예상 시각과 정확히 같은 출근도 `early`로 표시됩니다. 이 도메인에서 `early`는
//! "늦지 않았다"는 뜻이고, 색상과 종합 상태는 `on-time`과 똑같이 취급됩니다.
//!
//! ## 퇴근 판정
//! 1. 퇴근 기록과 예상 퇴근 시각이 모두 있음: 실제 < 예상 → `early`(빨강, 조퇴), 그 외 → `on-time`(초록)
//! 2. 퇴근 기록만 있음 → `on-time`(초록)
//! 3. 그 외 → `missing`(회색)
//!
//! ## 종합 판정
//! | 출근 | 퇴근 | 종합 상태 | 색상 |
//! |------|------|-----------|------|
//! | 있음 | 있음 | 둘 다 초록이면 `complete-ok`, 아니면 `complete-with-issues` | 초록 / 빨강 |
//! | 있음 | 없음 | `partial` | 출근이 빨강이면 빨강, 아니면 주황 |
//! | 없음 | 있음/없음 | `absent` | 회색 |
//!
//! ## 시간대
//! 비교는 분 단위 벽시계 시각으로 합니다. 인자로 `DateTime<Tz>`를 받으므로
//! 실제 시각이 **어느 시간대의 벽시계인지**가 타입에 드러납니다.
//! 호출하는 쪽에서 학교 시간대로 변환한 뒤 넘겨야 예상 시각(학교 벽시계)과 비교가 맞습니다.

use crate::services::clock::minutes_of_day;
use chrono::{DateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

/// 표시 색상. 상태에서 색상이 결정되며, 그 반대는 없습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusColor {
    Green,
    Red,
    Orange,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryStatus {
    OnTime,
    Late,
    Early,
    Missing,
}

impl EntryStatus {
    pub fn color(self) -> StatusColor {
        match self {
            EntryStatus::OnTime | EntryStatus::Early => StatusColor::Green,
            EntryStatus::Late => StatusColor::Red,
            EntryStatus::Missing => StatusColor::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExitStatus {
    OnTime,
    Early,
    Late,
    Missing,
}

impl ExitStatus {
    pub fn color(self) -> StatusColor {
        match self {
            ExitStatus::OnTime | ExitStatus::Late => StatusColor::Green,
            ExitStatus::Early => StatusColor::Red,
            ExitStatus::Missing => StatusColor::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverallStatus {
    CompleteOk,
    CompleteWithIssues,
    Partial,
    Absent,
}

/// 하루치 출결 판정 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStatus {
    pub entry_status: EntryStatus,
    pub exit_status: ExitStatus,
    pub overall_status: OverallStatus,
    pub entry_color: StatusColor,
    pub exit_color: StatusColor,
    pub overall_color: StatusColor,
}

fn classify_entry<Tz: TimeZone>(
    check_in: Option<&DateTime<Tz>>,
    expected_entry: Option<NaiveTime>,
) -> EntryStatus {
    match (check_in, expected_entry) {
        (Some(actual), Some(expected)) if minutes_of_day(actual) <= minutes_of_day(&expected) => {
            EntryStatus::Early
        }
        (Some(_), Some(_)) => EntryStatus::Late,
        (Some(_), None) => EntryStatus::OnTime,
        (None, _) => EntryStatus::Missing,
    }
}

fn classify_exit<Tz: TimeZone>(
    check_out: Option<&DateTime<Tz>>,
    expected_exit: Option<NaiveTime>,
) -> ExitStatus {
    match (check_out, expected_exit) {
        (Some(actual), Some(expected)) if minutes_of_day(actual) < minutes_of_day(&expected) => {
            ExitStatus::Early
        }
        (Some(_), _) => ExitStatus::OnTime,
        (None, _) => ExitStatus::Missing,
    }
}

/// 실제 출퇴근 시각과 예상 시각으로 출결 상태를 판정합니다.
///
/// # 매개변수
/// - `check_in`, `check_out`: 실제 출근/퇴근 시각. 학교 시간대로 변환된 값이어야 합니다.
/// - `expected_entry`, `expected_exit`: 학교 벽시계 기준 예상 시각 (`calculate_expected_times` 결과)
///
/// 날짜 부분은 무시하고 시:분만 비교합니다.
pub fn get_attendance_status<Tz: TimeZone>(
    check_in: Option<&DateTime<Tz>>,
    check_out: Option<&DateTime<Tz>>,
    expected_entry: Option<NaiveTime>,
    expected_exit: Option<NaiveTime>,
) -> AttendanceStatus {
    let entry_status = classify_entry(check_in, expected_entry);
    let exit_status = classify_exit(check_out, expected_exit);
    let entry_color = entry_status.color();
    let exit_color = exit_status.color();

    let (overall_status, overall_color) = match (check_in.is_some(), check_out.is_some()) {
        (true, true) if entry_color == StatusColor::Green && exit_color == StatusColor::Green => {
            (OverallStatus::CompleteOk, StatusColor::Green)
        }
        (true, true) => (OverallStatus::CompleteWithIssues, StatusColor::Red),
        (true, false) if entry_color == StatusColor::Red => (OverallStatus::Partial, StatusColor::Red),
        (true, false) => (OverallStatus::Partial, StatusColor::Orange),
        // 출근 없이 퇴근만 찍힌 날도 결근으로 봅니다. 퇴근 상태는 그대로 보고합니다.
        (false, _) => (OverallStatus::Absent, StatusColor::Gray),
    };

    AttendanceStatus {
        entry_status,
        exit_status,
        overall_status,
        entry_color,
        exit_color,
        overall_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::clock::parse_clock;
    use chrono::{FixedOffset, NaiveDate, Utc};

    fn local(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        // 학교 시간대를 흉내 낸 UTC+2 고정 오프셋
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let naive = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();
        tz.from_local_datetime(&naive).single().unwrap()
    }

    fn at(raw: &str) -> Option<NaiveTime> {
        Some(parse_clock(raw).unwrap())
    }

    #[test]
    fn no_records_is_absent_whatever_the_expectation() {
        let expected = [None, at("08:00")];
        for entry in expected {
            for exit in expected {
                let status = get_attendance_status::<Utc>(None, None, entry, exit);
                assert_eq!(
                    status,
                    AttendanceStatus {
                        entry_status: EntryStatus::Missing,
                        exit_status: ExitStatus::Missing,
                        overall_status: OverallStatus::Absent,
                        entry_color: StatusColor::Gray,
                        exit_color: StatusColor::Gray,
                        overall_color: StatusColor::Gray,
                    }
                );
            }
        }
    }

    #[test]
    fn check_in_at_expected_time_counts_as_early() {
        let status = get_attendance_status(Some(&local(8, 0)), None, at("08:00"), None);
        assert_eq!(status.entry_status, EntryStatus::Early);
        assert_eq!(status.entry_color, StatusColor::Green);
    }

    #[test]
    fn check_in_one_minute_after_is_late() {
        let status = get_attendance_status(Some(&local(8, 1)), None, at("08:00"), None);
        assert_eq!(status.entry_status, EntryStatus::Late);
        assert_eq!(status.entry_color, StatusColor::Red);
    }

    #[test]
    fn seconds_do_not_make_a_check_in_late() {
        let check_in = local(8, 0) + chrono::Duration::seconds(59);
        let status = get_attendance_status(Some(&check_in), None, at("08:00"), None);
        assert_eq!(status.entry_status, EntryStatus::Early);
    }

    #[test]
    fn check_in_without_expectation_is_on_time() {
        let status = get_attendance_status(Some(&local(11, 45)), None, None, None);
        assert_eq!(status.entry_status, EntryStatus::OnTime);
        assert_eq!(status.entry_color, StatusColor::Green);
    }

    #[test]
    fn check_out_boundary_is_inclusive_on_the_on_time_side() {
        let on_time = get_attendance_status(
            Some(&local(8, 0)),
            Some(&local(13, 30)),
            at("08:00"),
            at("13:30"),
        );
        assert_eq!(on_time.exit_status, ExitStatus::OnTime);
        assert_eq!(on_time.exit_color, StatusColor::Green);

        let early = get_attendance_status(
            Some(&local(8, 0)),
            Some(&local(13, 29)),
            at("08:00"),
            at("13:30"),
        );
        assert_eq!(early.exit_status, ExitStatus::Early);
        assert_eq!(early.exit_color, StatusColor::Red);
    }

    #[test]
    fn check_out_without_expectation_is_on_time() {
        let status = get_attendance_status(Some(&local(8, 0)), Some(&local(9, 0)), None, None);
        assert_eq!(status.exit_status, ExitStatus::OnTime);
        assert_eq!(status.overall_status, OverallStatus::CompleteOk);
    }

    #[test]
    fn complete_day_is_ok_only_when_both_sides_are_green() {
        let ok = get_attendance_status(
            Some(&local(7, 55)),
            Some(&local(14, 40)),
            at("08:00"),
            at("14:30"),
        );
        assert_eq!(ok.overall_status, OverallStatus::CompleteOk);
        assert_eq!(ok.overall_color, StatusColor::Green);

        let late = get_attendance_status(
            Some(&local(8, 10)),
            Some(&local(14, 40)),
            at("08:00"),
            at("14:30"),
        );
        assert_eq!(late.overall_status, OverallStatus::CompleteWithIssues);
        assert_eq!(late.overall_color, StatusColor::Red);

        let left_early = get_attendance_status(
            Some(&local(7, 55)),
            Some(&local(14, 0)),
            at("08:00"),
            at("14:30"),
        );
        assert_eq!(left_early.overall_status, OverallStatus::CompleteWithIssues);
        assert_eq!(left_early.overall_color, StatusColor::Red);
    }

    #[test]
    fn partial_day_color_follows_the_entry() {
        let late = get_attendance_status(Some(&local(9, 30)), None, at("09:00"), at("13:30"));
        assert_eq!(late.overall_status, OverallStatus::Partial);
        assert_eq!(late.overall_color, StatusColor::Red);
        assert_eq!(late.exit_status, ExitStatus::Missing);
        assert_eq!(late.exit_color, StatusColor::Gray);

        let early = get_attendance_status(Some(&local(8, 50)), None, at("09:00"), at("13:30"));
        assert_eq!(early.overall_status, OverallStatus::Partial);
        assert_eq!(early.overall_color, StatusColor::Orange);
    }

    #[test]
    fn check_out_without_check_in_is_still_absent() {
        let status = get_attendance_status(None, Some(&local(12, 0)), at("08:00"), at("13:30"));
        assert_eq!(status.entry_status, EntryStatus::Missing);
        assert_eq!(status.exit_status, ExitStatus::Early);
        assert_eq!(status.overall_status, OverallStatus::Absent);
        assert_eq!(status.overall_color, StatusColor::Gray);
    }

    #[test]
    fn compares_on_the_wall_clock_of_the_given_timezone() {
        // 08:05 (UTC+2) = 06:05 UTC. 학교 벽시계로 바꾸면 08:00 대비 지각입니다.
        let utc = local(8, 5).with_timezone(&Utc);
        let status = get_attendance_status(Some(&utc), None, at("08:00"), None);
        assert_eq!(status.entry_status, EntryStatus::Early, "UTC wall clock reads 06:05");

        let school = utc.with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        let status = get_attendance_status(Some(&school), None, at("08:00"), None);
        assert_eq!(status.entry_status, EntryStatus::Late);
    }

    #[test]
    fn serializes_with_kebab_case_vocabulary() {
        let status = get_attendance_status(
            Some(&local(8, 10)),
            Some(&local(14, 40)),
            at("08:00"),
            at("14:30"),
        );
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["entry_status"], "late");
        assert_eq!(json["exit_status"], "on-time");
        assert_eq!(json["overall_status"], "complete-with-issues");
        assert_eq!(json["overall_color"], "red");
    }
}
