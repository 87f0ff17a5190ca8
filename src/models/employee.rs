//! # 직원 모델 정의
//!
//! 출퇴근을 기록하는 교사와 직원입니다.
//! 시간표, 출퇴근 기록, 부재 신청, 알림은 모두 `employee_id`로 직원에 연결됩니다.
//!
//! ## 구조체 역할
//! - `Employee`: DB의 `employees` 테이블 한 행 (응답용)
//! - `CreateEmployeeRequest`: 직원 등록 요청 본문
//! - `UpdateEmployeeRequest`: 직원 정보 수정 요청 본문 (부분 수정)

use serde::{Deserialize, Serialize};

/// 직원 엔티티: DB의 `employees` 테이블 한 행
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// 직원 고유 식별자 (UUIDv7 형식 문자열)
    pub id: String,
    /// 표시용 이름 (예: "Laia Puig")
    pub full_name: String,
    /// 학교 이메일. 등록되어 있다면 직원끼리 겹치지 않습니다.
    pub email: Option<String>,
    pub created_at: String,
}

/// 직원 등록 요청: `POST /api/v1/employees`
#[derive(Debug, Deserialize)]
pub struct CreateEmployeeRequest {
    /// 비어 있으면 400
    pub full_name: String,
    /// 빈 문자열은 "이메일 없음"으로 취급합니다.
    pub email: Option<String>,
}

/// 직원 정보 수정 요청: `PUT /api/v1/employees/{id}`
///
/// 보낸 필드만 바뀝니다. `email`에 빈 문자열을 보내면 이메일을 지웁니다.
#[derive(Debug, Deserialize)]
pub struct UpdateEmployeeRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}
