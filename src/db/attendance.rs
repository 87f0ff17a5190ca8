//! # 출퇴근 기록 데이터베이스 쿼리 모듈
//!
//! `attendance_records` 테이블에 기록을 쌓고, 기간으로 잘라 조회합니다.
//!
//! `timestamp` 컬럼은 sqlx가 `DateTime<Utc>`를 RFC 3339 텍스트(`...+00:00`)로 저장합니다.
//! 모든 값이 같은 UTC 표기이므로 문자열 비교 순서가 곧 시간 순서입니다.

use crate::db::conflict_on_unique;
use crate::error::AppError;
use crate::models::{AttendanceRecord, CheckMethod, RecordType};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

const RECORD_COLUMNS: &str =
    "id, employee_id, record_type, timestamp, method, location, notes, created_at";

/// 새 기록에 필요한 값들. 요청 본문에서 기본값을 채운 뒤 만들어집니다.
#[derive(Debug, Clone)]
pub struct NewAttendanceRecord<'a> {
    pub employee_id: &'a str,
    pub record_type: RecordType,
    pub timestamp: DateTime<Utc>,
    pub method: CheckMethod,
    pub location: Option<&'a str>,
    pub notes: Option<&'a str>,
    /// 하루 한 번 제한을 적용할 학교 현지 날짜. `Some`이면 같은 직원, 같은 종류,
    /// 같은 날짜의 기록이 이미 있을 때 저장하지 않고 409를 돌려줍니다.
    pub daily_limit_date: Option<NaiveDate>,
}

pub async fn create_attendance_record(
    pool: &SqlitePool,
    new: &NewAttendanceRecord<'_>,
) -> Result<AttendanceRecord, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query(
        r#"
        INSERT INTO attendance_records
            (id, employee_id, record_type, timestamp, method, location, notes, daily_limit_date)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(new.employee_id)
    .bind(new.record_type)
    .bind(new.timestamp)
    .bind(new.method)
    .bind(new.location)
    .bind(new.notes)
    .bind(new.daily_limit_date)
    .execute(pool)
    .await
    .map_err(|err| {
        conflict_on_unique(err, || match new.daily_limit_date {
            Some(date) => format!(
                "Employee already has a {} record on {date}",
                new.record_type.label()
            ),
            None => "Duplicate attendance record".to_string(),
        })
    })?;

    get_attendance_record(pool, &id)
        .await?
        .ok_or(AppError::Internal(
            "Failed to retrieve created attendance record".to_string(),
        ))
}

pub async fn get_attendance_record(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<AttendanceRecord>, AppError> {
    let sql = format!("SELECT {RECORD_COLUMNS} FROM attendance_records WHERE id = ?");
    let record = sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(record)
}

/// 한 직원의 기록을 시간순으로 조회합니다.
///
/// `from`/`to`는 UTC 반열린 구간 `[from, to)`이며, `None`이면 그쪽 경계가 없습니다.
/// SQL의 `(? IS NULL OR ...)` 패턴으로 선택적 조건을 한 쿼리에 표현합니다.
pub async fn list_attendance_for_employee(
    pool: &SqlitePool,
    employee_id: &str,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> Result<Vec<AttendanceRecord>, AppError> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM attendance_records \
         WHERE employee_id = ? \
           AND (? IS NULL OR timestamp >= ?) \
           AND (? IS NULL OR timestamp < ?) \
         ORDER BY timestamp, id"
    );
    let records = sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(employee_id)
        .bind(from)
        .bind(from)
        .bind(to)
        .bind(to)
        .fetch_all(pool)
        .await?;

    Ok(records)
}

/// 모든 직원의 기록 중 `[from, to)` 구간에 속한 것을 조회합니다. (학교 전체 일일 현황용)
pub async fn list_attendance_between(
    pool: &SqlitePool,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<AttendanceRecord>, AppError> {
    let sql = format!(
        "SELECT {RECORD_COLUMNS} FROM attendance_records \
         WHERE timestamp >= ? AND timestamp < ? \
         ORDER BY employee_id, timestamp, id"
    );
    let records = sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

    Ok(records)
}
