//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `absences`: 부재 신청과 승인/반려
//! - `alerts`: 출결 알림 생성, 조회, 해결
//! - `attendance`: 출퇴근 기록, 하루 출결 판정, 저장 없는 판정
//! - `employees`: 직원 등록/조회/수정/삭제
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `periods`: 교시표 조회
//! - `schedule`: 주간 시간표 관리와 예상 출퇴근 시각

pub mod absences;
pub mod alerts;
pub mod attendance;
pub mod employees;
pub mod health;
pub mod periods;
pub mod schedule;

use crate::services::periods::PeriodTable;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use chrono_tz::Tz;
use sqlx::SqlitePool;
use std::sync::Arc;

/// 모든 핸들러가 공유하는 애플리케이션 상태
///
/// Axum이 요청마다 clone하므로 무거운 값은 `Arc`로 감쌉니다.
/// `SqlitePool`은 내부적으로 이미 `Arc`이고, `Tz`는 `Copy`입니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// 서버 시작 시 한 번 읽은 교시표. 실행 중에는 바뀌지 않습니다.
    pub periods: Arc<PeriodTable>,
    /// 학교 시간대. "오늘", "요일", 벽시계 비교는 모두 이 시간대 기준입니다.
    pub timezone: Tz,
    /// 같은 현지 날짜에 출근/퇴근을 한 번씩만 허용할지
    pub enforce_daily_limit: bool,
}

/// `/api/v1` 아래에 붙는 API 라우터를 만듭니다.
///
/// 경로 파라미터는 axum 0.8 문법(`{id}`)을 씁니다.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/periods", get(periods::list_periods))
        // 직원
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        // 주간 시간표
        .route(
            "/employees/{id}/schedule",
            get(schedule::list_schedule)
                .post(schedule::add_schedule_session)
                .put(schedule::import_schedule),
        )
        .route(
            "/employees/{id}/schedule/{session_id}",
            delete(schedule::delete_schedule_session),
        )
        .route(
            "/employees/{id}/expected-times",
            get(schedule::get_expected_times),
        )
        // 출퇴근 기록과 판정
        .route(
            "/employees/{id}/attendance",
            get(attendance::list_employee_attendance),
        )
        .route(
            "/employees/{id}/attendance/status",
            get(attendance::employee_daily_status),
        )
        .route("/attendance", post(attendance::record_attendance))
        .route("/attendance/daily", get(attendance::daily_overview))
        .route("/attendance/classify", post(attendance::classify_attendance))
        // 부재
        .route(
            "/absences",
            get(absences::list_absences).post(absences::create_absence),
        )
        .route("/absences/{id}/review", put(absences::review_absence))
        // 알림
        .route("/alerts", get(alerts::list_alerts))
        .route("/alerts/generate", post(alerts::generate_alerts))
        .route("/alerts/{id}/resolve", put(alerts::resolve_alert))
        .with_state(state)
}
