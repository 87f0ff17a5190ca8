//! # 주간 시간표 모델 정의
//!
//! 시간표 가져오기(import) 과정에서 만들어지는 "누가, 무슨 요일, 몇 교시에 수업하는지" 데이터입니다.
//! 출결 판정 입장에서는 읽기 전용 입력이며, `(직원, 요일, 교시)` 하나당 한 행입니다.
//!
//! ## 구조체 역할
//! - `ScheduleSession`: DB의 `weekly_schedule` 테이블 한 행 (응답용)
//! - `CreateScheduleSessionRequest`: 시간표 한 칸 추가 요청 본문
//! - `ImportScheduleRequest`: 직원 시간표 전체 교체 요청 본문

use serde::{Deserialize, Serialize};

/// 시간표 한 칸: 한 직원의 특정 요일, 특정 교시
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScheduleSession {
    /// 시간표 칸 고유 식별자 (UUIDv7)
    pub id: String,
    /// 이 시간표의 주인인 직원 ID (외래키)
    pub employee_id: String,
    /// 요일: 월요일 = 1 … 금요일 = 5 (주말은 교시표에 없음)
    pub day_of_week: i64,
    /// 교시 번호. 교시표(`PeriodTable`)의 키로 쓰입니다.
    pub hour_period: i64,
    pub subject_code: Option<String>,
    pub subject_name: Option<String>,
    pub group_code: Option<String>,
    pub classroom_code: Option<String>,
    /// 수업 시간(true)인지, 회의/당직 같은 비수업 업무(false)인지.
    /// 예상 출퇴근 시각 계산에서는 이 값으로 걸러내지 않습니다.
    pub is_lective_hour: bool,
    pub created_at: String,
}

/// 시간표 한 칸 추가 요청: `POST /api/v1/employees/{id}/schedule`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleSessionRequest {
    pub day_of_week: i64,
    pub hour_period: i64,
    pub subject_code: Option<String>,
    pub subject_name: Option<String>,
    pub group_code: Option<String>,
    pub classroom_code: Option<String>,
    /// 생략하면 수업 시간(true)으로 간주합니다.
    pub is_lective_hour: Option<bool>,
}

/// 시간표 전체 교체 요청: `PUT /api/v1/employees/{id}/schedule`
///
/// 기존 시간표를 모두 지우고 `sessions`로 바꿉니다. 빈 배열이면 시간표를 비웁니다.
#[derive(Debug, Deserialize)]
pub struct ImportScheduleRequest {
    pub sessions: Vec<CreateScheduleSessionRequest>,
}
