//! # 직원 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/employees | `list_employees` | 전체 직원 목록 (이름순) |
//! | POST | /api/v1/employees | `create_employee` | 직원 등록 |
//! | GET | /api/v1/employees/{id} | `get_employee` | 직원 한 명 조회 |
//! | PUT | /api/v1/employees/{id} | `update_employee` | 이름/이메일 수정 |
//! | DELETE | /api/v1/employees/{id} | `delete_employee` | 직원과 관련 데이터 삭제 |

use crate::{db, error::AppError, models::*, routes::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// 이름 앞뒤 공백을 지우고, 비어 있으면 400
fn normalize_name(full_name: &str) -> Result<&str, AppError> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(AppError::BadRequest("full_name cannot be empty".to_string()));
    }
    Ok(full_name)
}

/// 빈 문자열 이메일은 "이메일 없음"
fn normalize_email(email: &str) -> Option<&str> {
    Some(email.trim()).filter(|email| !email.is_empty())
}

/// `GET /employees` → `{ "employees": [...] }`
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let employees = db::list_employees(&state.pool).await?;
    Ok(Json(json!({ "employees": employees })))
}

/// `POST /employees` + `{ "full_name": "...", "email": "..." }`
///
/// - 이름이 비어 있으면 400
/// - 이미 등록된 이메일이면 409 (동시에 들어온 요청도 DB의 UNIQUE 제약이 409로 돌려줍니다)
/// - 성공하면 201 Created와 생성된 직원
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let full_name = normalize_name(&req.full_name)?;
    let email = req.email.as_deref().and_then(normalize_email);

    let employee = db::create_employee(&state.pool, full_name, email).await?;
    tracing::info!(employee_id = %employee.id, "Registered employee {}", employee.full_name);
    Ok((StatusCode::CREATED, Json(employee)))
}

/// `GET /employees/{id}`: 없으면 404
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let employee = db::get_employee(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(employee))
}

/// `PUT /employees/{id}` + `{ "full_name"?, "email"? }`
///
/// 보낸 필드만 바꿉니다. `"email": ""`은 이메일 삭제.
/// 없는 직원이면 404, 빈 이름이면 400, 다른 직원의 이메일이면 409.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    let full_name = req.full_name.as_deref().map(normalize_name).transpose()?;
    let email = req.email.as_deref().map(normalize_email);

    let employee = db::update_employee(&state.pool, &id, full_name, email)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(employee_id = %employee.id, "Updated employee");
    Ok(Json(employee))
}

/// `DELETE /employees/{id}` → 204, 없으면 404
///
/// 시간표, 출퇴근 기록, 부재, 알림도 함께 삭제됩니다.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if !db::delete_employee(&state.pool, &id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(employee_id = %id, "Deleted employee");
    Ok(StatusCode::NO_CONTENT)
}

/// 직원이 존재하는지 확인하고, 없으면 `AppError::NotFound`를 돌려줍니다.
///
/// 시간표/출결 핸들러에서 "없는 직원"과 "기록이 없는 직원"을 구분하기 위해 사용합니다.
pub(crate) async fn require_employee(state: &AppState, id: &str) -> Result<Employee, AppError> {
    db::get_employee(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)
}
