//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /api/v1/health` → `{ "status": "ok", "timezone": "Europe/Madrid" }`
//!
//! 로드밸런서나 컨테이너 오케스트레이터의 상태 확인용입니다.
//! 학교 시간대를 함께 돌려주므로, 잘못된 시간대로 배포된 인스턴스를 바로 알아볼 수 있습니다.

use crate::routes::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

/// `GET /health`: DB를 건드리지 않으므로 실패하지 않습니다.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timezone": state.timezone.name()
    }))
}
