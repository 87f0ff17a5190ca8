//! # 알림 데이터베이스 쿼리 모듈

use crate::error::AppError;
use crate::models::{Alert, AlertStatus, AlertType};
use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

const ALERT_COLUMNS: &str = "id, employee_id, alert_type, status, alert_date, title, \
     description, resolved_at, created_at";

/// 알림을 저장합니다. 같은 (직원, 종류, 날짜) 알림이 이미 있으면 아무것도 하지 않고 `Ok(None)`.
pub async fn insert_alert_if_new(
    pool: &SqlitePool,
    employee_id: &str,
    alert_type: AlertType,
    alert_date: NaiveDate,
    title: &str,
    description: Option<&str>,
) -> Result<Option<Alert>, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    let result = sqlx::query(
        r#"
        INSERT INTO alerts (id, employee_id, alert_type, alert_date, title, description)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT (employee_id, alert_type, alert_date) DO NOTHING
        "#,
    )
    .bind(&id)
    .bind(employee_id)
    .bind(alert_type)
    .bind(alert_date)
    .bind(title)
    .bind(description)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_alert(pool, &id).await
}

pub async fn get_alert(pool: &SqlitePool, id: &str) -> Result<Option<Alert>, AppError> {
    let sql = format!("SELECT {ALERT_COLUMNS} FROM alerts WHERE id = ?");
    let alert = sqlx::query_as::<_, Alert>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(alert)
}

/// 알림 목록 (최근 날짜부터). 조건이 `None`이면 거르지 않습니다.
pub async fn list_alerts(
    pool: &SqlitePool,
    status: Option<AlertStatus>,
    employee_id: Option<&str>,
) -> Result<Vec<Alert>, AppError> {
    let sql = format!(
        "SELECT {ALERT_COLUMNS} FROM alerts \
         WHERE (? IS NULL OR status = ?) \
           AND (? IS NULL OR employee_id = ?) \
         ORDER BY alert_date DESC, id"
    );
    let alerts = sqlx::query_as::<_, Alert>(&sql)
        .bind(status)
        .bind(status)
        .bind(employee_id)
        .bind(employee_id)
        .fetch_all(pool)
        .await?;

    Ok(alerts)
}

/// 알림을 해결 처리합니다. 이미 해결된 알림이면 처음 해결한 시각을 유지합니다.
///
/// 해당 ID가 없으면 `Ok(None)`.
pub async fn resolve_alert(pool: &SqlitePool, id: &str) -> Result<Option<Alert>, AppError> {
    let result = sqlx::query(
        "UPDATE alerts SET status = 'resolved', resolved_at = COALESCE(resolved_at, ?) \
         WHERE id = ?",
    )
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }
    get_alert(pool, id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_employee, test_pool};

    #[tokio::test]
    async fn same_alert_is_stored_once_per_day() {
        let pool = test_pool().await;
        let pau = create_employee(&pool, "Pau Ferrer", None).await.unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();

        let first = insert_alert_if_new(&pool, &pau.id, AlertType::LateArrival, monday, "Late", None)
            .await
            .unwrap();
        assert!(first.is_some());
        let again = insert_alert_if_new(&pool, &pau.id, AlertType::LateArrival, monday, "Late", None)
            .await
            .unwrap();
        assert!(again.is_none());

        insert_alert_if_new(&pool, &pau.id, AlertType::EarlyDeparture, monday, "Early", None)
            .await
            .unwrap()
            .unwrap();
        insert_alert_if_new(&pool, &pau.id, AlertType::LateArrival, tuesday, "Late", None)
            .await
            .unwrap()
            .unwrap();

        let all = list_alerts(&pool, None, Some(&pau.id)).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].alert_date, tuesday);
    }

    #[tokio::test]
    async fn resolving_moves_an_alert_out_of_the_active_list() {
        let pool = test_pool().await;
        let pau = create_employee(&pool, "Pau Ferrer", None).await.unwrap();
        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let alert = insert_alert_if_new(&pool, &pau.id, AlertType::Absence, monday, "Absence", None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(alert.status, AlertStatus::Active);

        let resolved = resolve_alert(&pool, &alert.id).await.unwrap().unwrap();
        assert_eq!(resolved.status, AlertStatus::Resolved);
        let resolved_at = resolved.resolved_at.unwrap();

        let twice = resolve_alert(&pool, &alert.id).await.unwrap().unwrap();
        assert_eq!(twice.resolved_at, Some(resolved_at));

        assert!(list_alerts(&pool, Some(AlertStatus::Active), None).await.unwrap().is_empty());
        assert!(resolve_alert(&pool, "missing").await.unwrap().is_none());
    }
}
