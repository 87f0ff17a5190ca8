//! # 주간 시간표 데이터베이스 쿼리 모듈
//!
//! ## 테이블 구조
//! - `weekly_schedule`: (직원, 요일, 교시) 한 칸당 한 행
//!
//! 시간표 가져오기는 "직원 시간표 전체 교체"로 처리합니다.
//! 삭제와 삽입을 하나의 트랜잭션으로 묶어, 중간에 실패해도 이전 시간표가 그대로 남습니다.

use crate::error::AppError;
use crate::models::{CreateScheduleSessionRequest, ScheduleSession};
use sqlx::{Sqlite, SqlitePool};

const SESSION_COLUMNS: &str = "id, employee_id, day_of_week, hour_period, subject_code, \
     subject_name, group_code, classroom_code, is_lective_hour, created_at";

/// 한 직원의 시간표를 요일, 교시 순으로 조회합니다.
pub async fn list_schedule(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Vec<ScheduleSession>, AppError> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM weekly_schedule \
         WHERE employee_id = ? ORDER BY day_of_week, hour_period, id"
    );
    let sessions = sqlx::query_as::<_, ScheduleSession>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;

    Ok(sessions)
}

/// 모든 직원의 시간표를 한 번에 조회합니다. (학교 전체 일일 현황용)
pub async fn list_all_schedules(pool: &SqlitePool) -> Result<Vec<ScheduleSession>, AppError> {
    let sql = format!(
        "SELECT {SESSION_COLUMNS} FROM weekly_schedule \
         ORDER BY employee_id, day_of_week, hour_period, id"
    );
    let sessions = sqlx::query_as::<_, ScheduleSession>(&sql)
        .fetch_all(pool)
        .await?;

    Ok(sessions)
}

pub async fn get_schedule_session(
    pool: &SqlitePool,
    id: &str,
) -> Result<Option<ScheduleSession>, AppError> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM weekly_schedule WHERE id = ?");
    let session = sqlx::query_as::<_, ScheduleSession>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(session)
}

/// INSERT 한 건. 풀(pool)과 트랜잭션 양쪽에서 쓸 수 있도록 Executor를 제네릭으로 받습니다.
async fn insert_session<'e, E>(
    executor: E,
    employee_id: &str,
    req: &CreateScheduleSessionRequest,
) -> Result<String, AppError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query(
        r#"
        INSERT INTO weekly_schedule
            (id, employee_id, day_of_week, hour_period, subject_code,
             subject_name, group_code, classroom_code, is_lective_hour)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(employee_id)
    .bind(req.day_of_week)
    .bind(req.hour_period)
    .bind(req.subject_code.as_deref())
    .bind(req.subject_name.as_deref())
    .bind(req.group_code.as_deref())
    .bind(req.classroom_code.as_deref())
    .bind(req.is_lective_hour.unwrap_or(true))
    .execute(executor)
    .await?;

    Ok(id)
}

/// 시간표에 한 칸을 추가합니다.
pub async fn add_schedule_session(
    pool: &SqlitePool,
    employee_id: &str,
    req: &CreateScheduleSessionRequest,
) -> Result<ScheduleSession, AppError> {
    let id = insert_session(pool, employee_id, req).await?;

    get_schedule_session(pool, &id)
        .await?
        .ok_or(AppError::Internal(
            "Failed to retrieve created schedule session".to_string(),
        ))
}

/// 직원 시간표를 통째로 교체합니다 (시간표 가져오기).
///
/// `pool.begin()`으로 트랜잭션을 시작하고, `commit()` 전에 에러가 나면
/// 트랜잭션이 drop되면서 자동으로 롤백됩니다.
pub async fn replace_schedule(
    pool: &SqlitePool,
    employee_id: &str,
    sessions: &[CreateScheduleSessionRequest],
) -> Result<Vec<ScheduleSession>, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM weekly_schedule WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

    for req in sessions {
        insert_session(&mut *tx, employee_id, req).await?;
    }

    tx.commit().await?;

    list_schedule(pool, employee_id).await
}

/// 직원 시간표에서 한 칸을 삭제합니다. 삭제된 행이 없으면 false.
pub async fn delete_schedule_session(
    pool: &SqlitePool,
    employee_id: &str,
    id: &str,
) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM weekly_schedule WHERE id = ? AND employee_id = ?")
        .bind(id)
        .bind(employee_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_employee, test_pool};

    fn slot(day_of_week: i64, hour_period: i64) -> CreateScheduleSessionRequest {
        CreateScheduleSessionRequest {
            day_of_week,
            hour_period,
            subject_code: Some("HIS".to_string()),
            subject_name: None,
            group_code: Some("S2B".to_string()),
            classroom_code: Some("A12".to_string()),
            is_lective_hour: None,
        }
    }

    #[tokio::test]
    async fn adds_and_lists_sessions_in_day_period_order() {
        let pool = test_pool().await;
        let employee = create_employee(&pool, "Marta Soler", None).await.unwrap();

        add_schedule_session(&pool, &employee.id, &slot(2, 1)).await.unwrap();
        let added = add_schedule_session(&pool, &employee.id, &slot(1, 5)).await.unwrap();
        add_schedule_session(&pool, &employee.id, &slot(1, 2)).await.unwrap();
        assert!(added.is_lective_hour);
        assert_eq!(added.classroom_code.as_deref(), Some("A12"));

        let order: Vec<(i64, i64)> = list_schedule(&pool, &employee.id)
            .await
            .unwrap()
            .iter()
            .map(|s| (s.day_of_week, s.hour_period))
            .collect();
        assert_eq!(order, [(1, 2), (1, 5), (2, 1)]);
    }

    #[tokio::test]
    async fn replace_swaps_the_whole_schedule() {
        let pool = test_pool().await;
        let employee = create_employee(&pool, "Pau Ferrer", None).await.unwrap();
        add_schedule_session(&pool, &employee.id, &slot(3, 3)).await.unwrap();

        let mut duty = slot(4, 8);
        duty.is_lective_hour = Some(false);
        let replaced = replace_schedule(&pool, &employee.id, &[slot(4, 1), duty])
            .await
            .unwrap();
        assert_eq!(replaced.len(), 2);
        assert!(replaced.iter().all(|s| s.day_of_week == 4));
        assert!(!replaced[1].is_lective_hour);

        let cleared = replace_schedule(&pool, &employee.id, &[]).await.unwrap();
        assert!(cleared.is_empty());
    }

    #[tokio::test]
    async fn delete_is_scoped_to_the_employee() {
        let pool = test_pool().await;
        let owner = create_employee(&pool, "Owner", None).await.unwrap();
        let other = create_employee(&pool, "Other", None).await.unwrap();
        let session = add_schedule_session(&pool, &owner.id, &slot(1, 1)).await.unwrap();

        assert!(!delete_schedule_session(&pool, &other.id, &session.id).await.unwrap());
        assert!(delete_schedule_session(&pool, &owner.id, &session.id).await.unwrap());
        assert!(get_schedule_session(&pool, &session.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_every_schedule_grouped_by_employee() {
        let pool = test_pool().await;
        let a = create_employee(&pool, "A", None).await.unwrap();
        let b = create_employee(&pool, "B", None).await.unwrap();
        add_schedule_session(&pool, &b.id, &slot(1, 1)).await.unwrap();
        add_schedule_session(&pool, &a.id, &slot(2, 4)).await.unwrap();
        add_schedule_session(&pool, &a.id, &slot(1, 3)).await.unwrap();

        let all = list_all_schedules(&pool).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].employee_id <= w[1].employee_id));
        let of_a: Vec<(i64, i64)> = all
            .iter()
            .filter(|s| s.employee_id == a.id)
            .map(|s| (s.day_of_week, s.hour_period))
            .collect();
        assert_eq!(of_a, [(1, 3), (2, 4)]);
    }
}
