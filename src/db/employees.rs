//! # 직원 데이터베이스 쿼리 모듈

use crate::db::conflict_on_unique;
use crate::error::AppError;
use crate::models::Employee;
use sqlx::SqlitePool;

fn duplicate_email(email: Option<&str>) -> String {
    format!(
        "An employee with email {} already exists",
        email.unwrap_or_default()
    )
}

/// 새 직원을 등록하고, DB 기본값(created_at)이 채워진 행을 반환합니다.
///
/// 이메일이 이미 등록되어 있으면 `AppError::Conflict`.
pub async fn create_employee(
    pool: &SqlitePool,
    full_name: &str,
    email: Option<&str>,
) -> Result<Employee, AppError> {
    let id = uuid::Uuid::now_v7().to_string();

    sqlx::query("INSERT INTO employees (id, full_name, email) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(full_name)
        .bind(email) // None이면 SQL NULL
        .execute(pool)
        .await
        .map_err(|err| conflict_on_unique(err, || duplicate_email(email)))?;

    get_employee(pool, &id)
        .await?
        .ok_or(AppError::Internal(
            "Failed to retrieve created employee".to_string(),
        ))
}

pub async fn get_employee(pool: &SqlitePool, id: &str) -> Result<Option<Employee>, AppError> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, email, created_at FROM employees WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

/// 전체 직원을 이름순으로 조회합니다.
pub async fn list_employees(pool: &SqlitePool) -> Result<Vec<Employee>, AppError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, email, created_at FROM employees ORDER BY full_name, id",
    )
    .fetch_all(pool)
    .await?;

    Ok(employees)
}

/// 직원 정보를 부분 수정합니다.
///
/// # 매개변수
/// - `full_name`: `None`이면 그대로
/// - `email`: `None`이면 그대로, `Some(None)`이면 이메일 삭제, `Some(Some(..))`이면 변경
///
/// # 반환값
/// - `Ok(Some(Employee))`: 수정 성공
/// - `Ok(None)`: 해당 ID의 직원이 없음
pub async fn update_employee(
    pool: &SqlitePool,
    id: &str,
    full_name: Option<&str>,
    email: Option<Option<&str>>,
) -> Result<Option<Employee>, AppError> {
    if get_employee(pool, id).await?.is_none() {
        return Ok(None);
    }

    // 보낸 필드만 SET 절에 넣습니다.
    let mut assignments = Vec::new();
    let mut bindings: Vec<Option<&str>> = Vec::new();
    if let Some(full_name) = full_name {
        assignments.push("full_name = ?");
        bindings.push(Some(full_name));
    }
    if let Some(email) = email {
        assignments.push("email = ?");
        bindings.push(email);
    }
    if assignments.is_empty() {
        return get_employee(pool, id).await;
    }

    let sql = format!("UPDATE employees SET {} WHERE id = ?", assignments.join(", "));
    let mut query = sqlx::query(&sql);
    for binding in bindings {
        query = query.bind(binding);
    }
    query
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| conflict_on_unique(err, || duplicate_email(email.flatten())))?;

    get_employee(pool, id).await
}

/// 직원을 삭제합니다. 시간표, 출퇴근 기록, 부재, 알림도 함께 지워집니다 (ON DELETE CASCADE).
///
/// 삭제된 행이 없으면 false.
pub async fn delete_employee(pool: &SqlitePool, id: &str) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
