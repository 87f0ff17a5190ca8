//! # 알림 모델 정의
//!
//! 하루 출결 판정에서 문제가 있는 항목(지각, 조퇴, 퇴근 누락, 결근)마다 알림이 하나씩 생깁니다.
//! 관리자가 확인하면 `resolved`로 바뀝니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AlertType {
    LateArrival,
    EarlyDeparture,
    MissingCheckout,
    Absence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Resolved,
}

/// 알림 엔티티: DB의 `alerts` 테이블 한 행
///
/// (직원, 종류, 날짜) 조합은 유일합니다. 같은 날을 다시 판정해도 알림이 늘어나지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Alert {
    pub id: String,
    pub employee_id: String,
    pub alert_type: AlertType,
    pub status: AlertStatus,
    /// 문제가 있었던 학교 현지 날짜
    pub alert_date: NaiveDate,
    pub title: String,
    pub description: Option<String>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: String,
}
