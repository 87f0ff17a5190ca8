//! # 주간 시간표 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/employees/{id}/schedule | `list_schedule` | 직원 시간표 |
//! | POST | /api/v1/employees/{id}/schedule | `add_schedule_session` | 시간표 한 칸 추가 |
//! | PUT | /api/v1/employees/{id}/schedule | `import_schedule` | 시간표 전체 교체 |
//! | DELETE | /api/v1/employees/{id}/schedule/{session_id} | `delete_schedule_session` | 한 칸 삭제 |
//! | GET | /api/v1/employees/{id}/expected-times?day=N | `get_expected_times` | 예상 출퇴근 시각 |

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{employees::require_employee, AppState},
    services::{calendar, clock::format_clock, schedule::calculate_expected_times},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// 요일 번호는 ISO 기준 1(월) ~ 7(일)
fn validate_day(day_of_week: i64) -> Result<i64, AppError> {
    if (1..=7).contains(&day_of_week) {
        Ok(day_of_week)
    } else {
        Err(AppError::BadRequest(format!(
            "day_of_week must be between 1 (Monday) and 7 (Sunday), got {day_of_week}"
        )))
    }
}

/// `GET /employees/{id}/schedule` → `{ "sessions": [...] }`
pub async fn list_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    require_employee(&state, &id).await?;
    let sessions = db::list_schedule(&state.pool, &id).await?;
    Ok(Json(json!({ "sessions": sessions })))
}

/// `POST /employees/{id}/schedule` + `{ "day_of_week": 1, "hour_period": 3, ... }`
///
/// 교시표에 없는 교시 번호도 저장은 허용합니다. 예상 시각 계산에서 `None`으로 처리됩니다.
pub async fn add_schedule_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateScheduleSessionRequest>,
) -> Result<(StatusCode, Json<ScheduleSession>), AppError> {
    require_employee(&state, &id).await?;
    validate_day(req.day_of_week)?;

    if state.periods.get(req.hour_period).is_none() {
        tracing::warn!(
            employee_id = %id,
            hour_period = req.hour_period,
            "Schedule session refers to a period missing from the period table"
        );
    }

    let session = db::add_schedule_session(&state.pool, &id, &req).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// `PUT /employees/{id}/schedule` + `{ "sessions": [...] }`
///
/// 시간표 가져오기. 요일이 하나라도 잘못되면 아무것도 바꾸지 않고 400을 반환합니다.
pub async fn import_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ImportScheduleRequest>,
) -> Result<Json<Value>, AppError> {
    require_employee(&state, &id).await?;
    for session in &req.sessions {
        validate_day(session.day_of_week)?;
    }

    let sessions = db::replace_schedule(&state.pool, &id, &req.sessions).await?;
    tracing::info!(
        employee_id = %id,
        sessions = sessions.len(),
        "Imported weekly schedule"
    );
    Ok(Json(json!({ "sessions": sessions })))
}

/// `DELETE /employees/{id}/schedule/{session_id}` → 204, 없으면 404
pub async fn delete_schedule_session(
    State(state): State<AppState>,
    Path((id, session_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let deleted = db::delete_schedule_session(&state.pool, &id, &session_id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct ExpectedTimesQuery {
    /// 조회할 요일 (1 = 월요일). 생략하면 학교 시간대 기준 오늘.
    pub day: Option<i64>,
}

/// `GET /employees/{id}/expected-times?day=N`
///
/// 응답: `{ "employee_id", "day_of_week", "expected_entry", "expected_exit", "has_schedule_today" }`
pub async fn get_expected_times(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ExpectedTimesQuery>,
) -> Result<Json<Value>, AppError> {
    require_employee(&state, &id).await?;
    let day_of_week = match query.day {
        Some(day) => validate_day(day)?,
        None => calendar::today_day_of_week(&state.timezone),
    };

    let sessions = db::list_schedule(&state.pool, &id).await?;
    let expected = calculate_expected_times(&sessions, day_of_week, &state.periods);

    Ok(Json(json!({
        "employee_id": id,
        "day_of_week": day_of_week,
        "expected_entry": expected.expected_entry.map(format_clock),
        "expected_exit": expected.expected_exit.map(format_clock),
        "has_schedule_today": expected.has_schedule_today,
    })))
}
