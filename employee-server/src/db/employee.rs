//! Employee database operations
//!
//! Every mutation runs inside a transaction; returning early with `?` drops
//! the transaction uncommitted, which rolls it back.

use shared::models::employee::{Employee, EmployeeCreate, EmployeeUpdate};
use shared::util::now_millis;
use sqlx::AnyPool;

// ── Read ──

pub async fn find_all(pool: &AnyPool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, employee_id, name, role, email, created_at, updated_at
        FROM employees
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_employee_id(
    pool: &AnyPool,
    employee_id: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, employee_id, name, role, email, created_at, updated_at
        FROM employees
        WHERE employee_id = ?
        "#,
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await
}

/// First employee already holding `employee_id` or `email`
pub async fn find_conflict(
    pool: &AnyPool,
    employee_id: &str,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT id, employee_id, name, role, email, created_at, updated_at
        FROM employees
        WHERE employee_id = ? OR email = ?
        LIMIT 1
        "#,
    )
    .bind(employee_id)
    .bind(email)
    .fetch_optional(pool)
    .await
}

// ── Write ──

/// Insert a new employee; both timestamps start at the same instant.
///
/// A colliding `employee_id` or `email` surfaces as a unique violation from
/// the database.
pub async fn insert(pool: &AnyPool, data: &EmployeeCreate) -> Result<Employee, sqlx::Error> {
    let now = now_millis();
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO employees (employee_id, name, role, email, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&data.employee_id)
    .bind(&data.name)
    .bind(&data.role)
    .bind(&data.email)
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    // Read back to pick up the generated id
    let employee: Employee = sqlx::query_as(
        r#"
        SELECT id, employee_id, name, role, email, created_at, updated_at
        FROM employees
        WHERE employee_id = ?
        "#,
    )
    .bind(&data.employee_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(employee)
}

/// Assign the supplied fields onto the stored row and advance `updated_at`.
///
/// Returns `None` when no employee carries `employee_id`. An empty payload
/// is not a mutation: the stored record comes back untouched.
///
/// The merge happens inside a single UPDATE: an absent field binds NULL and
/// `COALESCE` keeps the stored column, so concurrent updates of different
/// fields never write back each other's stale values. `updated_at` moves to
/// now, or one past its stored value when the clock has not moved on, so it
/// always ends up strictly later and the row always counts as changed.
pub async fn apply_partial_update(
    pool: &AnyPool,
    employee_id: &str,
    data: &EmployeeUpdate,
) -> Result<Option<Employee>, sqlx::Error> {
    if data.is_empty() {
        return find_by_employee_id(pool, employee_id).await;
    }

    let now = now_millis();
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE employees SET
            employee_id = COALESCE(?, employee_id),
            name = COALESCE(?, name),
            role = COALESCE(?, role),
            email = COALESCE(?, email),
            updated_at = CASE WHEN ? > updated_at THEN ? ELSE updated_at + 1 END
        WHERE employee_id = ?
        "#,
    )
    .bind(data.employee_id.as_deref())
    .bind(data.name.as_deref())
    .bind(data.role.as_deref())
    .bind(data.email.as_deref())
    .bind(now)
    .bind(now)
    .bind(employee_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    // The row may have been renamed by this very update
    let current_id = data.employee_id.as_deref().unwrap_or(employee_id);
    let employee: Employee = sqlx::query_as(
        r#"
        SELECT id, employee_id, name, role, email, created_at, updated_at
        FROM employees
        WHERE employee_id = ?
        "#,
    )
    .bind(current_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(employee))
}

/// Remove the employee permanently. Returns `false` when nothing matched.
pub async fn delete(pool: &AnyPool, employee_id: &str) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let rows = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_unique_violation;

    async fn test_pool() -> AnyPool {
        crate::db::connect("sqlite::memory:", 1).await.unwrap()
    }

    fn ada() -> EmployeeCreate {
        EmployeeCreate {
            employee_id: "E1".to_string(),
            name: "Ada".to_string(),
            role: "Engineer".to_string(),
            email: "ada@x.com".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_and_equal_timestamps() {
        let pool = test_pool().await;
        let employee = insert(&pool, &ada()).await.unwrap();

        assert_eq!(employee.id, 1);
        assert_eq!(employee.employee_id, "E1");
        assert_eq!(employee.created_at, employee.updated_at);

        let found = find_by_employee_id(&pool, "E1").await.unwrap().unwrap();
        assert_eq!(found, employee);
    }

    #[tokio::test]
    async fn insert_duplicate_email_is_unique_violation() {
        let pool = test_pool().await;
        insert(&pool, &ada()).await.unwrap();

        let mut twin = ada();
        twin.employee_id = "E2".to_string();
        let err = insert(&pool, &twin).await.unwrap_err();

        assert!(is_unique_violation(&err), "{err}");
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_conflict_matches_either_key() {
        let pool = test_pool().await;
        insert(&pool, &ada()).await.unwrap();

        assert!(find_conflict(&pool, "E1", "other@x.com").await.unwrap().is_some());
        assert!(find_conflict(&pool, "E9", "ada@x.com").await.unwrap().is_some());
        assert!(find_conflict(&pool, "E9", "other@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn partial_update_changes_only_supplied_fields() {
        let pool = test_pool().await;
        let created = insert(&pool, &ada()).await.unwrap();

        let update = EmployeeUpdate {
            role: Some("Lead".to_string()),
            ..Default::default()
        };
        let updated = apply_partial_update(&pool, "E1", &update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.role, "Lead");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > updated.created_at);

        let stored = find_by_employee_id(&pool, "E1").await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn updated_at_never_moves_backwards() {
        let pool = test_pool().await;
        let created = insert(&pool, &ada()).await.unwrap();
        let ahead = created.created_at + 60_000;
        sqlx::query("UPDATE employees SET updated_at = ? WHERE employee_id = ?")
            .bind(ahead)
            .bind("E1")
            .execute(&pool)
            .await
            .unwrap();

        let update = EmployeeUpdate {
            name: Some("Ada L.".to_string()),
            ..Default::default()
        };
        let updated = apply_partial_update(&pool, "E1", &update)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.updated_at, ahead + 1);
    }

    #[tokio::test]
    async fn updates_of_different_fields_both_persist() {
        let pool = test_pool().await;
        insert(&pool, &ada()).await.unwrap();

        let role = EmployeeUpdate {
            role: Some("Lead".to_string()),
            ..Default::default()
        };
        let name = EmployeeUpdate {
            name: Some("Ada L.".to_string()),
            ..Default::default()
        };
        let (a, b) = tokio::join!(
            apply_partial_update(&pool, "E1", &role),
            apply_partial_update(&pool, "E1", &name),
        );
        a.unwrap().unwrap();
        b.unwrap().unwrap();

        let stored = find_by_employee_id(&pool, "E1").await.unwrap().unwrap();
        assert_eq!(stored.role, "Lead");
        assert_eq!(stored.name, "Ada L.");
        assert_eq!(stored.email, "ada@x.com");
    }

    #[tokio::test]
    async fn renamed_employee_is_returned_under_new_id() {
        let pool = test_pool().await;
        let created = insert(&pool, &ada()).await.unwrap();

        let update = EmployeeUpdate {
            employee_id: Some("E7".to_string()),
            ..Default::default()
        };
        let renamed = apply_partial_update(&pool, "E1", &update)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.employee_id, "E7");
        assert!(find_by_employee_id(&pool, "E1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn partial_update_of_missing_employee_returns_none() {
        let pool = test_pool().await;
        let update = EmployeeUpdate {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert!(apply_partial_update(&pool, "E404", &update)
            .await
            .unwrap()
            .is_none());
        assert!(find_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_update_leaves_timestamps_alone() {
        let pool = test_pool().await;
        let created = insert(&pool, &ada()).await.unwrap();

        let unchanged = apply_partial_update(&pool, "E1", &EmployeeUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn failed_update_rolls_back() {
        let pool = test_pool().await;
        insert(&pool, &ada()).await.unwrap();
        let grace = EmployeeCreate {
            employee_id: "E2".to_string(),
            name: "Grace".to_string(),
            role: "Admiral".to_string(),
            email: "grace@x.com".to_string(),
        };
        insert(&pool, &grace).await.unwrap();

        let update = EmployeeUpdate {
            name: Some("Grace H.".to_string()),
            email: Some("ada@x.com".to_string()),
            ..Default::default()
        };
        let err = apply_partial_update(&pool, "E2", &update).await.unwrap_err();
        assert!(is_unique_violation(&err));

        let stored = find_by_employee_id(&pool, "E2").await.unwrap().unwrap();
        assert_eq!(stored.name, "Grace");
        assert_eq!(stored.email, "grace@x.com");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_existed() {
        let pool = test_pool().await;
        insert(&pool, &ada()).await.unwrap();

        assert!(!delete(&pool, "E404").await.unwrap());
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);

        assert!(delete(&pool, "E1").await.unwrap());
        assert!(find_by_employee_id(&pool, "E1").await.unwrap().is_none());
    }
}
