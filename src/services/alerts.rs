//! # 출결 판정 → 알림
//!
//! 하루 출결 요약(`DailyAttendance`)에서 관리자가 확인해야 할 항목을 뽑습니다.
//!
//! | 판정 | 알림 |
//! |------|------|
//! | 종합 `absent` | `absence` 하나만 |
//! | 출근 `late` | `late_arrival` |
//! | 퇴근 `early` | `early_departure` |
//! | 출근은 있고 퇴근 `missing` | `missing_checkout` |
//!
//! 그날 시간표가 없거나 승인된 부재가 그날을 덮으면 알림을 만들지 않습니다.

use crate::models::AlertType;
use crate::services::{
    clock::format_clock,
    daily::DailyAttendance,
    status::{EntryStatus, ExitStatus, OverallStatus},
};
use chrono::{DateTime, NaiveTime, TimeZone, Utc};

/// 저장 전의 알림 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    pub alert_type: AlertType,
    pub title: String,
    pub description: String,
}

fn local_clock<Tz: TimeZone>(instant: Option<DateTime<Utc>>, tz: &Tz) -> String {
    instant
        .map(|ts| format_clock(ts.with_timezone(tz).time()))
        .unwrap_or_else(|| "--:--".to_string())
}

fn expected_clock(time: Option<NaiveTime>) -> String {
    time.map(format_clock).unwrap_or_else(|| "--:--".to_string())
}

/// 하루 출결 요약에서 알림 초안을 만듭니다.
///
/// `excused`: 승인된 부재가 그날을 덮는지
pub fn alerts_for_day<Tz: TimeZone>(
    day: &DailyAttendance,
    excused: bool,
    tz: &Tz,
) -> Vec<AlertDraft> {
    if excused || !day.expected.has_schedule_today {
        return Vec::new();
    }

    let date = day.date;
    let status = &day.status;

    if status.overall_status == OverallStatus::Absent {
        return vec![AlertDraft {
            alert_type: AlertType::Absence,
            title: format!("Absence on {date}"),
            description: format!(
                "No check-in recorded; expected from {} to {}",
                expected_clock(day.expected.expected_entry),
                expected_clock(day.expected.expected_exit),
            ),
        }];
    }

    let mut drafts = Vec::new();
    if status.entry_status == EntryStatus::Late {
        drafts.push(AlertDraft {
            alert_type: AlertType::LateArrival,
            title: format!("Late arrival on {date}"),
            description: format!(
                "Checked in at {}, expected {}",
                local_clock(day.check_in, tz),
                expected_clock(day.expected.expected_entry),
            ),
        });
    }
    match status.exit_status {
        ExitStatus::Early => drafts.push(AlertDraft {
            alert_type: AlertType::EarlyDeparture,
            title: format!("Early departure on {date}"),
            description: format!(
                "Checked out at {}, expected {}",
                local_clock(day.check_out, tz),
                expected_clock(day.expected.expected_exit),
            ),
        }),
        ExitStatus::Missing => drafts.push(AlertDraft {
            alert_type: AlertType::MissingCheckout,
            title: format!("Missing check-out on {date}"),
            description: format!(
                "Checked in at {} but no check-out was recorded",
                local_clock(day.check_in, tz),
            ),
        }),
        ExitStatus::OnTime | ExitStatus::Late => {}
    }
    drafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordType;
    use crate::services::calendar::tests::record;
    use crate::services::daily::summarize_day;
    use crate::services::periods::PeriodTable;
    use crate::services::schedule::tests::session;
    use chrono::NaiveDate;
    use chrono_tz::Europe::Madrid;

    fn monday(records: &[crate::models::AttendanceRecord], with_schedule: bool) -> DailyAttendance {
        let sessions = if with_schedule {
            vec![session(1, 1), session(1, 6)] // 08:00 ~ 14:30
        } else {
            Vec::new()
        };
        summarize_day(
            "e-1",
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            &sessions,
            records,
            &PeriodTable::default(),
            &Madrid,
        )
    }

    fn types(drafts: &[AlertDraft]) -> Vec<AlertType> {
        drafts.iter().map(|d| d.alert_type).collect()
    }

    #[test]
    fn absent_day_raises_a_single_absence_alert() {
        let drafts = alerts_for_day(&monday(&[], true), false, &Madrid);
        assert_eq!(types(&drafts), [AlertType::Absence]);
        assert_eq!(drafts[0].title, "Absence on 2026-10-19");
        assert!(drafts[0].description.contains("08:00"));
    }

    #[test]
    fn late_and_early_are_reported_in_local_time() {
        let day = monday(
            &[
                record(RecordType::CheckIn, "2026-10-19T06:10:00Z"), // 08:10
                record(RecordType::CheckOut, "2026-10-19T12:00:00Z"), // 14:00
            ],
            true,
        );
        let drafts = alerts_for_day(&day, false, &Madrid);
        assert_eq!(
            types(&drafts),
            [AlertType::LateArrival, AlertType::EarlyDeparture]
        );
        assert_eq!(drafts[0].description, "Checked in at 08:10, expected 08:00");
        assert_eq!(drafts[1].description, "Checked out at 14:00, expected 14:30");
    }

    #[test]
    fn check_in_without_check_out_is_a_missing_checkout() {
        let day = monday(&[record(RecordType::CheckIn, "2026-10-19T05:50:00Z")], true);
        assert_eq!(
            types(&alerts_for_day(&day, false, &Madrid)),
            [AlertType::MissingCheckout]
        );
    }

    #[test]
    fn clean_days_unscheduled_days_and_excused_days_raise_nothing() {
        let clean = monday(
            &[
                record(RecordType::CheckIn, "2026-10-19T05:55:00Z"),
                record(RecordType::CheckOut, "2026-10-19T12:40:00Z"),
            ],
            true,
        );
        assert!(alerts_for_day(&clean, false, &Madrid).is_empty());
        assert!(alerts_for_day(&monday(&[], false), false, &Madrid).is_empty());
        assert!(alerts_for_day(&monday(&[], true), true, &Madrid).is_empty());
    }
}
