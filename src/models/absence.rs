//! # 부재 모델 정의
//!
//! 병가, 개인 사유, 휴가, 연수 등으로 출근하지 않는 기간입니다.
//! 직원이 신청하면 `pending`으로 시작하고, 관리자가 `approved` 또는 `rejected`로 처리합니다.
//!
//! 하루짜리 결근 사유서도 `start_date == end_date`인 부재 하나로 표현합니다.
//! 승인된 부재가 덮는 날에는 결근/지각 알림을 만들지 않습니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 부재 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AbsenceType {
    SickLeave,
    Personal,
    Vacation,
    Training,
    Other,
}

/// 검토 상태. 처음에는 항상 `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// 부재 엔티티: DB의 `absences` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Absence {
    pub id: String,
    pub employee_id: String,
    pub absence_type: AbsenceType,
    pub status: ReviewStatus,
    /// 학교 현지 날짜, 양 끝 포함
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    /// 관리자가 승인/반려하면서 남긴 답변
    pub admin_response: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: String,
}

/// 부재 신청: `POST /api/v1/absences`
#[derive(Debug, Deserialize)]
pub struct CreateAbsenceRequest {
    pub employee_id: String,
    pub absence_type: AbsenceType,
    pub start_date: NaiveDate,
    /// 생략하면 `start_date` 하루
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// 부재 검토: `PUT /api/v1/absences/{id}/review`
///
/// `status`는 `approved` 또는 `rejected`만 받습니다.
#[derive(Debug, Deserialize)]
pub struct ReviewAbsenceRequest {
    pub status: ReviewStatus,
    pub admin_response: Option<String>,
}
