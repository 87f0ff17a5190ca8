//! # 출퇴근 기록 및 출결 판정 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | POST | /api/v1/attendance | `record_attendance` | 출근/퇴근 기록 |
//! | GET | /api/v1/employees/{id}/attendance?from=&to= | `list_employee_attendance` | 원시 기록 조회 |
//! | GET | /api/v1/employees/{id}/attendance/status?date= | `employee_daily_status` | 하루 출결 판정 |
//! | GET | /api/v1/attendance/daily?date= | `daily_overview` | 전 직원 하루 출결 판정 |
//! | POST | /api/v1/attendance/classify | `classify_attendance` | 저장 없이 판정만 |
//!
//! ## 시간대 처리
//! 날짜 파라미터(`YYYY-MM-DD`)는 모두 학교 현지 날짜입니다.
//! DB 조회 전에 `calendar::local_day_bounds`로 UTC 구간으로 바꾸고,
//! 판정 전에는 UTC 시각을 학교 시간대로 변환합니다.

use crate::{
    db::{self, NewAttendanceRecord},
    error::AppError,
    models::*,
    routes::{employees::require_employee, AppState},
    services::{
        calendar,
        clock::parse_clock,
        daily::{summarize_day, DailyAttendance},
        status::{get_attendance_status, AttendanceStatus},
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

/// `POST /attendance` + `{ "employee_id": "...", "record_type": "check_in" }`
///
/// - 없는 직원이면 404
/// - `ENFORCE_DAILY_LIMIT`가 켜져 있고 같은 현지 날짜에 같은 종류의 기록이 이미 있으면 409
/// - 성공하면 201 Created와 저장된 기록
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(req): Json<CreateAttendanceRequest>,
) -> Result<(StatusCode, Json<AttendanceRecord>), AppError> {
    require_employee(&state, &req.employee_id).await?;

    let timestamp = req.timestamp.unwrap_or_else(Utc::now);

    // 제한이 켜져 있으면 먼저 조회해서 이미 있는 기록을 409로 돌려주고,
    // 동시에 들어온 요청은 daily_limit_date 유니크 인덱스가 막습니다.
    let daily_limit_date = if state.enforce_daily_limit {
        let day = timestamp.with_timezone(&state.timezone).date_naive();
        let (from, to) = calendar::local_day_bounds(day, &state.timezone);
        let same_day =
            db::list_attendance_for_employee(&state.pool, &req.employee_id, Some(from), Some(to))
                .await?;

        let already = match req.record_type {
            RecordType::CheckIn => calendar::has_checked_in_today(&same_day, day, &state.timezone),
            RecordType::CheckOut => {
                calendar::has_checked_out_today(&same_day, day, &state.timezone)
            }
        };
        if already {
            return Err(AppError::Conflict(format!(
                "Employee already has a {} record on {day}",
                req.record_type.label()
            )));
        }
        Some(day)
    } else {
        None
    };

    let new = NewAttendanceRecord {
        employee_id: &req.employee_id,
        record_type: req.record_type,
        timestamp,
        method: req.method.unwrap_or_default(),
        location: req.location.as_deref(),
        notes: req.notes.as_deref(),
        daily_limit_date,
    };
    let record = db::create_attendance_record(&state.pool, &new).await?;

    tracing::info!(
        employee_id = %record.employee_id,
        record_type = ?record.record_type,
        method = ?record.method,
        timestamp = %record.timestamp,
        "Recorded attendance"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// 기간 조회 파라미터. 양 끝 날짜를 모두 포함합니다.
#[derive(Debug, Deserialize)]
pub struct AttendanceRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// `GET /employees/{id}/attendance?from=2026-10-01&to=2026-10-31` → `{ "records": [...] }`
pub async fn list_employee_attendance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<AttendanceRangeQuery>,
) -> Result<Json<Value>, AppError> {
    require_employee(&state, &id).await?;

    if let (Some(from), Some(to)) = (query.from, query.to) {
        if from > to {
            return Err(AppError::BadRequest(format!(
                "from ({from}) must not be after to ({to})"
            )));
        }
    }

    // from 날짜의 현지 자정부터, to 날짜 다음 날 현지 자정 직전까지
    let from = query
        .from
        .map(|date| calendar::local_day_bounds(date, &state.timezone).0);
    let to = query
        .to
        .map(|date| calendar::local_day_bounds(date, &state.timezone).1);

    let records = db::list_attendance_for_employee(&state.pool, &id, from, to).await?;
    Ok(Json(json!({ "records": records })))
}

#[derive(Debug, Deserialize)]
pub struct DailyQuery {
    /// 현지 날짜. 생략하면 학교 시간대 기준 오늘.
    pub date: Option<NaiveDate>,
}

async fn daily_for_employee(
    state: &AppState,
    employee_id: &str,
    date: NaiveDate,
) -> Result<DailyAttendance, AppError> {
    let (from, to) = calendar::local_day_bounds(date, &state.timezone);
    let sessions = db::list_schedule(&state.pool, employee_id).await?;
    let records =
        db::list_attendance_for_employee(&state.pool, employee_id, Some(from), Some(to)).await?;

    Ok(summarize_day(
        employee_id,
        date,
        &sessions,
        &records,
        &state.periods,
        &state.timezone,
    ))
}

/// `GET /employees/{id}/attendance/status?date=2026-10-19`
///
/// 그날의 예상 출퇴근 시각, 첫 출근, 마지막 퇴근, 출결 판정 결과를 함께 반환합니다.
pub async fn employee_daily_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<DailyAttendance>, AppError> {
    require_employee(&state, &id).await?;
    let date = query
        .date
        .unwrap_or_else(|| calendar::local_today(&state.timezone));

    let daily = daily_for_employee(&state, &id, date).await?;
    tracing::debug!(
        employee_id = %id,
        %date,
        overall = ?daily.status.overall_status,
        "Classified daily attendance"
    );
    Ok(Json(daily))
}

/// 등록된 모든 직원의 `date` 하루 출결 요약 (직원 이름순)
///
/// 직원, 시간표, 그날 기록을 각각 한 번씩만 조회한 뒤 메모리에서 직원별로 나눕니다.
pub(crate) async fn institution_day(
    state: &AppState,
    date: NaiveDate,
) -> Result<Vec<DailyAttendance>, AppError> {
    let (from, to) = calendar::local_day_bounds(date, &state.timezone);

    let employees = db::list_employees(&state.pool).await?;
    let mut schedules: HashMap<String, Vec<ScheduleSession>> = HashMap::new();
    for session in db::list_all_schedules(&state.pool).await? {
        schedules
            .entry(session.employee_id.clone())
            .or_default()
            .push(session);
    }
    let mut records: HashMap<String, Vec<AttendanceRecord>> = HashMap::new();
    for record in db::list_attendance_between(&state.pool, from, to).await? {
        records
            .entry(record.employee_id.clone())
            .or_default()
            .push(record);
    }

    let days = employees
        .iter()
        .map(|employee| {
            summarize_day(
                &employee.id,
                date,
                schedules.get(&employee.id).map_or(&[][..], Vec::as_slice),
                records.get(&employee.id).map_or(&[][..], Vec::as_slice),
                &state.periods,
                &state.timezone,
            )
        })
        .collect();
    Ok(days)
}

/// `GET /attendance/daily?date=2026-10-19` → `{ "date", "attendance": [...] }`
///
/// 등록된 모든 직원의 하루 출결 판정 (관리자 대시보드용). 직원 이름순입니다.
pub async fn daily_overview(
    State(state): State<AppState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<Value>, AppError> {
    let date = query
        .date
        .unwrap_or_else(|| calendar::local_today(&state.timezone));
    let attendance = institution_day(&state, date).await?;

    Ok(Json(json!({ "date": date, "attendance": attendance })))
}

/// `POST /attendance/classify` 요청 본문
///
/// 시각은 오프셋이 붙은 RFC 3339 문자열, 예상 시각은 `"HH:MM"` 학교 벽시계 문자열입니다.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub check_in: Option<DateTime<FixedOffset>>,
    pub check_out: Option<DateTime<FixedOffset>>,
    pub expected_entry: Option<String>,
    pub expected_exit: Option<String>,
}

/// `POST /attendance/classify`: DB 없이 판정 함수만 실행합니다.
///
/// 입력 시각은 어떤 오프셋으로 오든 학교 시간대로 변환한 뒤 비교합니다.
/// 예상 시각 문자열이 `"HH:MM"` 형식이 아니면 400.
pub async fn classify_attendance(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<AttendanceStatus>, AppError> {
    let expected_entry = req.expected_entry.as_deref().map(parse_clock).transpose()?;
    let expected_exit = req.expected_exit.as_deref().map(parse_clock).transpose()?;

    let check_in = req.check_in.map(|ts| ts.with_timezone(&state.timezone));
    let check_out = req.check_out.map(|ts| ts.with_timezone(&state.timezone));

    Ok(Json(get_attendance_status(
        check_in.as_ref(),
        check_out.as_ref(),
        expected_entry,
        expected_exit,
    )))
}
