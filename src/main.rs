//! # EduPresència 웹 서버 진입점
//!
//! 교직원 출퇴근 기록과 출결 상태 판정 API를 제공하는 서버의 시작점입니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 읽기
//! 4. 교시표 로딩
//! 5. SQLite 연결 풀 생성과 마이그레이션
//! 6. API 라우터 설정
//! 7. HTTP 서버 시작

mod config;
mod db;
mod error;
mod models;
mod routes;
mod services;

use anyhow::{Context, Result};
use axum::Router;
use config::Config;
use routes::{api_router, AppState};
use services::periods::PeriodTable;
use sqlx::sqlite::SqlitePoolOptions;
use std::{path::Path, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 교시표를 읽습니다. 경로가 없으면 내장 교시표(08:00 ~ 17:30, 8교시)를 씁니다.
///
/// 파일이 있는데 읽을 수 없거나 형식이 틀리면 서버를 시작하지 않습니다.
async fn load_period_table(path: Option<&str>) -> Result<PeriodTable> {
    let table = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("reading period table {path}"))?;
            let table = PeriodTable::from_json(&raw)
                .with_context(|| format!("parsing period table {path}"))?;
            tracing::info!("Loaded {} periods from {}", table.period_count(), path);
            table
        }
        None => {
            tracing::info!("Using built-in period table");
            PeriodTable::default()
        }
    };

    for (hour, period) in table.iter() {
        tracing::debug!(hour, "Period {} - {}", period.start, period.end);
    }
    Ok(table)
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅 초기화 ──
    // RUST_LOG가 없으면 edupresencia, tower_http, axum 모듈을 debug 레벨로
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edupresencia=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env()?;
    tracing::info!(
        "Starting EduPresència server on {}:{} (timezone {})",
        config.host,
        config.port,
        config.timezone.name()
    );

    // ── 4단계: 교시표 로딩 ──
    let periods = load_period_table(config.period_table_path.as_deref()).await?;

    // ── 5단계: SQLite 연결 풀 생성 + 마이그레이션 ──
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;

    // ── 6단계: 애플리케이션 상태와 라우터 ──
    let state = AppState {
        pool,
        periods: Arc::new(periods),
        timezone: config.timezone,
        enforce_daily_limit: config.enforce_daily_limit,
    };
    if state.enforce_daily_limit {
        tracing::info!("Daily check-in/check-out limit is enforced");
    }
    let api_routes = api_router(state);

    // 개발 환경에서는 모든 출처 허용
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 빌드된 프론트엔드가 있으면 같은 서버에서 서빙 (SPA이므로 없는 경로는 index.html)
    let frontend_dist = Path::new(&config.frontend_dist);
    let app = if frontend_dist.exists() {
        tracing::info!("Serving frontend static files from {}", config.frontend_dist);

        let serve_dir = ServeDir::new(frontend_dist)
            .not_found_service(ServeFile::new(frontend_dist.join("index.html")));

        Router::new()
            .nest("/api/v1", api_routes)
            .fallback_service(serve_dir)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!("Frontend dist directory not found, serving API only");

        Router::new()
            .nest("/api/v1", api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    // ── 7단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
