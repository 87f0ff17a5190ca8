//! # 부재 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/absences?employee_id=&status= | `list_absences` | 부재 목록 |
//! | POST | /api/v1/absences | `create_absence` | 부재 신청 (하루짜리 결근 사유서 포함) |
//! | PUT | /api/v1/absences/{id}/review | `review_absence` | 승인 또는 반려 |

use crate::{db, error::AppError, models::*, routes::employees::require_employee, routes::AppState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

/// `GET /absences` 쿼리 파라미터. 둘 다 생략 가능합니다.
#[derive(Debug, Deserialize)]
pub struct AbsenceQuery {
    pub employee_id: Option<String>,
    pub status: Option<ReviewStatus>,
}

/// `GET /absences` → `{ "absences": [...] }` (시작일 순)
pub async fn list_absences(
    State(state): State<AppState>,
    Query(query): Query<AbsenceQuery>,
) -> Result<Json<Value>, AppError> {
    let absences =
        db::list_absences(&state.pool, query.employee_id.as_deref(), query.status).await?;
    Ok(Json(json!({ "absences": absences })))
}

/// `POST /absences` + `{ "employee_id", "absence_type", "start_date", "end_date"?, "reason"? }`
///
/// - 없는 직원이면 404
/// - `end_date`가 `start_date`보다 앞이면 400
/// - 성공하면 201 Created와 `pending` 상태의 부재
pub async fn create_absence(
    State(state): State<AppState>,
    Json(req): Json<CreateAbsenceRequest>,
) -> Result<(StatusCode, Json<Absence>), AppError> {
    require_employee(&state, &req.employee_id).await?;

    let end_date = req.end_date.unwrap_or(req.start_date);
    if end_date < req.start_date {
        return Err(AppError::BadRequest(format!(
            "end_date {end_date} is before start_date {}",
            req.start_date
        )));
    }

    let absence = db::create_absence(
        &state.pool,
        &req.employee_id,
        req.absence_type,
        req.start_date,
        end_date,
        req.reason.as_deref(),
    )
    .await?;

    tracing::info!(
        absence_id = %absence.id,
        employee_id = %absence.employee_id,
        "Requested {:?} absence from {} to {}",
        absence.absence_type,
        absence.start_date,
        absence.end_date
    );
    Ok((StatusCode::CREATED, Json(absence)))
}

/// `PUT /absences/{id}/review` + `{ "status": "approved" | "rejected", "admin_response"? }`
///
/// `pending`으로 되돌리는 요청은 400, 없는 부재면 404.
pub async fn review_absence(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ReviewAbsenceRequest>,
) -> Result<Json<Absence>, AppError> {
    if req.status == ReviewStatus::Pending {
        return Err(AppError::BadRequest(
            "status must be approved or rejected".to_string(),
        ));
    }

    let absence = db::review_absence(&state.pool, &id, req.status, req.admin_response.as_deref())
        .await?
        .ok_or(AppError::NotFound)?;

    tracing::info!(absence_id = %id, status = ?absence.status, "Reviewed absence");
    Ok(Json(absence))
}
