//! # 교시표 조회 핸들러
//!
//! - `GET /api/v1/periods` → 현재 서버가 사용하는 교시표
//!
//! 응답 예: `{ "periods": { "1": { "start": "08:00", "end": "09:00" }, ... } }`

use crate::routes::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn list_periods(State(state): State<AppState>) -> Json<Value> {
    // Arc<PeriodTable>은 Deref로 &PeriodTable처럼 쓸 수 있습니다.
    Json(json!({ "periods": &*state.periods }))
}
