//! # 출퇴근 기록 모델 정의
//!
//! 직원이 출근(check-in) 또는 퇴근(check-out)할 때마다 한 행씩 쌓이는 원시 기록입니다.
//! 출결 상태(지각, 조퇴 등)는 저장하지 않고, 조회할 때마다 이 기록과 시간표로부터 계산합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 기록 종류. DB에는 `'check_in'`, `'check_out'` 문자열로 저장됩니다.
///
/// `#[derive(sqlx::Type)]`: 이 enum을 SQL 값으로 바인딩/디코딩할 수 있게 합니다.
/// `rename_all = "snake_case"`: `CheckIn` ↔ `"check_in"` 변환 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RecordType {
    CheckIn,
    CheckOut,
}

impl RecordType {
    /// 에러 메시지용 이름
    pub fn label(self) -> &'static str {
        match self {
            RecordType::CheckIn => "check-in",
            RecordType::CheckOut => "check-out",
        }
    }
}

/// 출퇴근을 찍은 방법
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum CheckMethod {
    #[default]
    Web,
    Qr,
    Nfc,
    Manual,
}

/// 출퇴근 기록 엔티티: DB의 `attendance_records` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub record_type: RecordType,
    /// 실제로 찍은 시각 (UTC). 현지 벽시계 시각은 조회할 때 학교 시간대로 변환합니다.
    pub timestamp: DateTime<Utc>,
    pub method: CheckMethod,
    /// 위치 정보 (선택, 예: 건물 이름 또는 좌표 문자열)
    pub location: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

/// 출퇴근 기록 요청: `POST /api/v1/attendance`
#[derive(Debug, Deserialize)]
pub struct CreateAttendanceRequest {
    pub employee_id: String,
    pub record_type: RecordType,
    /// 생략하면 서버의 현재 시각을 사용합니다.
    /// `"2026-10-19T08:02:00+02:00"`처럼 오프셋이 붙은 RFC 3339 문자열을 받습니다.
    pub timestamp: Option<DateTime<Utc>>,
    /// 생략하면 `web`
    pub method: Option<CheckMethod>,
    pub location: Option<String>,
    pub notes: Option<String>,
}
