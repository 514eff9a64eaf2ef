//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::{ApiMessage, AppError};
use shared::models::employee::{Employee, EmployeeCreate, EmployeeUpdate};

use crate::db::employee;
use crate::error::{ServiceResult, is_unique_violation, write_failed};
use crate::state::AppState;

use super::extract::ValidatedJson;

/// GET {prefix}/employee - List all employees
pub async fn list(State(state): State<AppState>) -> ServiceResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// GET {prefix}/employee/{employee_id} - Get one employee
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ServiceResult<Json<Employee>> {
    let found = employee::find_by_employee_id(&state.pool, &employee_id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(&employee_id))?;
    Ok(Json(found))
}

/// POST {prefix}/employee - Create an employee
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<EmployeeCreate>,
) -> ServiceResult<(StatusCode, Json<Employee>)> {
    if employee::find_conflict(&state.pool, &payload.employee_id, &payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::employee_exists().into());
    }

    // A concurrent create can still win the race between the check and the
    // insert; the unique indexes turn that into the same conflict.
    let created = match employee::insert(&state.pool, &payload).await {
        Ok(created) => created,
        Err(e) if is_unique_violation(&e) => return Err(AppError::employee_exists().into()),
        Err(e) => return Err(write_failed(e, "An error occurred while inserting the employee.")),
    };

    tracing::info!(id = created.id, employee_id = %created.employee_id, "Employee created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT {prefix}/employee/{employee_id} - Partially update an employee
///
/// A missing `employee_id` is a 404; nothing is created.
pub async fn update(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<EmployeeUpdate>,
) -> ServiceResult<Json<Employee>> {
    let updated = employee::apply_partial_update(&state.pool, &employee_id, &payload)
        .await
        .map_err(|e| write_failed(e, "An error occurred while updating the employee."))?
        .ok_or_else(|| AppError::employee_not_found(&employee_id))?;

    tracing::info!(id = updated.id, employee_id = %updated.employee_id, "Employee updated");
    Ok(Json(updated))
}

/// DELETE {prefix}/employee/{employee_id} - Delete an employee
pub async fn delete(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ServiceResult<Json<ApiMessage>> {
    if !employee::delete(&state.pool, &employee_id).await? {
        return Err(AppError::employee_not_found(&employee_id).into());
    }

    tracing::info!(%employee_id, "Employee deleted");
    Ok(Json(ApiMessage::new("Employee deleted.")))
}
