//! # 알림 API 라우트 핸들러
//!
//! ## 엔드포인트 목록
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | /api/v1/alerts?status=&employee_id= | `list_alerts` | 알림 목록 (기본: active) |
//! | POST | /api/v1/alerts/generate?date= | `generate_alerts` | 하루 출결 판정에서 알림 생성 |
//! | PUT | /api/v1/alerts/{id}/resolve | `resolve_alert` | 알림 해결 처리 |

use crate::{
    db,
    error::AppError,
    models::*,
    routes::{
        attendance::{institution_day, DailyQuery},
        AppState,
    },
    services::{alerts::alerts_for_day, calendar},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    /// 생략하면 `active`
    pub status: Option<AlertStatus>,
    pub employee_id: Option<String>,
}

/// `GET /alerts` → `{ "alerts": [...] }` (최근 날짜부터)
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> Result<Json<Value>, AppError> {
    let status = query.status.unwrap_or(AlertStatus::Active);
    let alerts = db::list_alerts(&state.pool, Some(status), query.employee_id.as_deref()).await?;
    Ok(Json(json!({ "alerts": alerts })))
}

/// `POST /alerts/generate?date=2026-10-19` → `{ "date", "created": [...] }`
///
/// 모든 직원의 하루 출결을 판정하고 문제가 있는 항목을 알림으로 저장합니다.
/// 승인된 부재가 덮는 직원은 건너뜁니다.
/// 이미 있는 (직원, 종류, 날짜) 알림은 다시 만들지 않으므로 같은 날을 여러 번 실행해도 됩니다.
pub async fn generate_alerts(
    State(state): State<AppState>,
    Query(query): Query<DailyQuery>,
) -> Result<Json<Value>, AppError> {
    let date = query
        .date
        .unwrap_or_else(|| calendar::local_today(&state.timezone));

    let excused: HashSet<String> = db::list_approved_absences_on(&state.pool, date)
        .await?
        .into_iter()
        .map(|absence| absence.employee_id)
        .collect();

    let mut created = Vec::new();
    for day in institution_day(&state, date).await? {
        let drafts = alerts_for_day(&day, excused.contains(&day.employee_id), &state.timezone);
        for draft in drafts {
            let inserted = db::insert_alert_if_new(
                &state.pool,
                &day.employee_id,
                draft.alert_type,
                date,
                &draft.title,
                Some(draft.description.as_str()),
            )
            .await?;
            if let Some(alert) = inserted {
                created.push(alert);
            }
        }
    }

    tracing::info!(%date, created = created.len(), "Generated attendance alerts");
    Ok(Json(json!({ "date": date, "created": created })))
}

/// `PUT /alerts/{id}/resolve`: 없는 알림이면 404
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Alert>, AppError> {
    let alert = db::resolve_alert(&state.pool, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    tracing::info!(alert_id = %id, "Resolved alert");
    Ok(Json(alert))
}
