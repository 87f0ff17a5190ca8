//! # 부재 데이터베이스 쿼리 모듈
//!
//! `start_date`/`end_date`는 `YYYY-MM-DD` 텍스트라서 문자열 비교가 곧 날짜 비교입니다.

use crate::error::AppError;
use crate::models::{Absence, AbsenceType, ReviewStatus};
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

const ABSENCE_COLUMNS: &str = "id, employee_id, absence_type, status, start_date, end_date, \
     reason, admin_response, reviewed_at, created_at";

/// 새 부재를 `pending` 상태로 등록합니다.
pub async fn create_absence(
    pool: &SqlitePool,
    employee_id: &str,
    absence_type: AbsenceType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: Option<&str>,
) -> Result<Absence, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query(
        r#"
        INSERT INTO absences (id, employee_id, absence_type, start_date, end_date, reason)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(employee_id)
    .bind(absence_type)
    .bind(start_date)
    .bind(end_date)
    .bind(reason)
    .execute(pool)
    .await?;

    get_absence(pool, &id)
        .await?
        .ok_or(AppError::Internal("Failed to retrieve created absence".to_string()))
}

pub async fn get_absence(pool: &SqlitePool, id: &str) -> Result<Option<Absence>, AppError> {
    let sql = format!("SELECT {ABSENCE_COLUMNS} FROM absences WHERE id = ?");
    let absence = sqlx::query_as::<_, Absence>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(absence)
}

/// 부재 목록을 시작일 순으로 조회합니다. 조건이 `None`이면 거르지 않습니다.
pub async fn list_absences(
    pool: &SqlitePool,
    employee_id: Option<&str>,
    status: Option<ReviewStatus>,
) -> Result<Vec<Absence>, AppError> {
    let sql = format!(
        "SELECT {ABSENCE_COLUMNS} FROM absences \
         WHERE (? IS NULL OR employee_id = ?) \
           AND (? IS NULL OR status = ?) \
         ORDER BY start_date, id"
    );
    let absences = sqlx::query_as::<_, Absence>(&sql)
        .bind(employee_id)
        .bind(employee_id)
        .bind(status)
        .bind(status)
        .fetch_all(pool)
        .await?;

    Ok(absences)
}

/// `date`를 덮는 승인된 부재 (모든 직원)
pub async fn list_approved_absences_on(
    pool: &SqlitePool,
    date: NaiveDate,
) -> Result<Vec<Absence>, AppError> {
    let sql = format!(
        "SELECT {ABSENCE_COLUMNS} FROM absences \
         WHERE status = 'approved' AND start_date <= ? AND end_date >= ? \
         ORDER BY employee_id, start_date"
    );
    let absences = sqlx::query_as::<_, Absence>(&sql)
        .bind(date)
        .bind(date)
        .fetch_all(pool)
        .await?;

    Ok(absences)
}

/// 부재를 승인 또는 반려합니다. 해당 ID가 없으면 `Ok(None)`.
pub async fn review_absence(
    pool: &SqlitePool,
    id: &str,
    status: ReviewStatus,
    admin_response: Option<&str>,
) -> Result<Option<Absence>, AppError> {
    let result = sqlx::query(
        "UPDATE absences SET status = ?, admin_response = ?, reviewed_at = ? WHERE id = ?",
    )
    .bind(status)
    .bind(admin_response)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_absence(pool, id).await
}
