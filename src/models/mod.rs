//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! 각 하위 모듈은 특정 도메인의 데이터 타입을 담당합니다:
//! - `absence`: 부재 신청 (병가, 휴가, 결근 사유서 등)
//! - `alert`: 출결 판정에서 생긴 알림
//! - `attendance`: 출퇴근 원시 기록
//! - `employee`: 직원
//! - `schedule`: 주간 시간표 (요일 × 교시)
//!
//! `pub use X::*;`로 재공개하므로 `crate::models::Employee`처럼 짧게 접근할 수 있습니다.

pub mod absence;
pub mod alert;
pub mod attendance;
pub mod employee;
pub mod schedule;

pub use absence::*;
pub use alert::*;
pub use attendance::*;
pub use employee::*;
pub use schedule::*;
