//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 경로 (필수)
//! - `HOST`: 서버 바인딩 주소 (기본값 `0.0.0.0`)
//! - `PORT`: 서버 포트 번호 (기본값 `3000`)
//! - `INSTITUTION_TIMEZONE`: 학교의 IANA 시간대 이름 (기본값 `Europe/Madrid`)
//! - `PERIOD_TABLE_PATH`: 교시표 JSON 파일 경로 (없으면 내장 교시표)
//! - `ENFORCE_DAILY_LIMIT`: 하루 한 번 출근/퇴근 제한 (`true`/`false`, 기본값 `false`)
//! - `FRONTEND_DIST`: 빌드된 프론트엔드 디렉토리 (기본값 `../frontend/dist`)

use chrono_tz::Tz;
use std::env;
use thiserror::Error;

/// 설정을 읽다가 발생한 에러. 서버 시작 단계에서만 나옵니다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// 시간대 이름이 IANA 데이터베이스에 없음 (예: "Europe/Madird")
    #[error("unknown timezone {0:?} in INSTITUTION_TIMEZONE")]
    InvalidTimezone(String),
}

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 한 번 읽어온 후 `main`에서 필요한 값만 `AppState`로 옮깁니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 파일 경로 (예: "sqlite:data/edupresencia.db")
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// 출퇴근 시각을 "현지 벽시계"로 읽을 때 쓰는 시간대.
    /// 교시표의 시각도 이 시간대 기준이라고 가정합니다.
    pub timezone: Tz,
    pub period_table_path: Option<String>,
    pub enforce_daily_limit: bool,
    pub frontend_dist: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`이 없거나 `INSTITUTION_TIMEZONE`이 알 수 없는 시간대면 에러가 발생합니다.
    /// 나머지 설정은 기본값이 있어 환경변수가 없어도 동작합니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정을 만듭니다.
    ///
    /// `from_env`는 이 함수에 `env::var`를 넘긴 것이고,
    /// 테스트에서는 프로세스 환경변수를 건드리지 않고 HashMap 등을 넘길 수 있습니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let timezone_name =
            lookup("INSTITUTION_TIMEZONE").unwrap_or_else(|| "Europe/Madrid".to_string());
        // Tz는 FromStr을 구현하므로 .parse()로 "Europe/Madrid" → Tz::Europe__Madrid 변환
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(timezone_name.clone()))?;

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            // 파싱 실패 시 기본값 3000
            port: lookup("PORT")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(3000),
            timezone,
            period_table_path: lookup("PERIOD_TABLE_PATH").filter(|path| !path.trim().is_empty()),
            enforce_daily_limit: lookup("ENFORCE_DAILY_LIMIT")
                .map(|raw| {
                    matches!(
                        raw.trim().to_ascii_lowercase().as_str(),
                        "1" | "true" | "yes" | "on"
                    )
                })
                .unwrap_or(false),
            frontend_dist: lookup("FRONTEND_DIST")
                .unwrap_or_else(|| "../frontend/dist".to_string()),
        })
    }
}
