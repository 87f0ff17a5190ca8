//! # 비즈니스 로직 서비스 모듈
//!
//! DB나 HTTP와 무관한 순수 계산 로직을 모아둔 모듈입니다.
//! 라우트 핸들러는 DB에서 데이터를 읽은 뒤 이 모듈의 함수로 계산합니다.
//!
//! - `clock`: `"HH:MM"` 벽시계 문자열 변환
//! - `periods`: 교시 번호 → 시작/종료 시각 표
//! - `schedule`: 시간표 + 요일 → 예상 출퇴근 시각
//! - `status`: 실제/예상 시각 → 출결 상태와 색상
//! - `calendar`: 학교 시간대 기준 오늘, 요일, 하루 경계
//! - `daily`: 위 단계를 묶은 하루치 출결 요약
//! - `alerts`: 하루치 요약 → 지각/조퇴/결근 알림 초안

pub mod alerts;
pub mod calendar;
pub mod clock;
pub mod daily;
pub mod periods;
pub mod schedule;
pub mod status;
