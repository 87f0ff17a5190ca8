//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! 각 하위 모듈:
//! - `absences`: 부재(휴가, 병가 등) 신청과 승인/반려
//! - `alerts`: 지각, 조퇴, 결근 알림
//! - `attendance`: 출퇴근 원시 기록 저장/조회
//! - `employees`: 직원 CRUD
//! - `schedule`: 주간 시간표 조회, 추가, 전체 교체(가져오기)

pub mod absences;
pub mod alerts;
pub mod attendance;
pub mod employees;
pub mod schedule;

// `crate::db::list_employees`처럼 바로 접근할 수 있게 재공개합니다.
pub use absences::*;
pub use alerts::*;
pub use attendance::*;
pub use employees::*;
pub use schedule::*;

use crate::error::AppError;

/// sqlx 에러를 `AppError`로 바꿉니다. UNIQUE 제약 위반이면 409 Conflict.
///
/// 먼저 조회해서 중복을 확인하더라도, 동시에 들어온 요청은 그 확인을 함께 통과할 수 있습니다.
/// 최종 판정은 DB 제약이 하고, 여기서 그 위반을 클라이언트 에러로 바꿉니다.
pub(crate) fn conflict_on_unique(err: sqlx::Error, message: impl FnOnce() -> String) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(message())
        }
        _ => AppError::Database(err),
    }
}

/// 테스트용 인메모리 SQLite 풀
///
/// `sqlite::memory:`는 연결마다 별개의 DB가 생기므로 연결을 1개로 제한합니다.
#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}

/// 파일 기반 SQLite 풀 (연결 5개). 여러 연결이 동시에 쓰는 상황을 테스트할 때 씁니다.
#[cfg(test)]
pub(crate) async fn file_test_pool(path: &std::path::Path) -> sqlx::SqlitePool {
    let options = sqlx::sqlite::SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("open file sqlite");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    pool
}
