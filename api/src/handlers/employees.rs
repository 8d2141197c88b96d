//! Employee handlers
//!
//! Endpoints under `/employees`.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::ports::{CompanyRepository, EmployeeRepository};
use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing employees
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEmployeesQuery {
    /// 1-based page number
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    /// Exact, case-sensitive gender filter
    pub gender: Option<String>,
}

/// GET /employees
///
/// Paging takes precedence over the gender filter; with neither, every
/// employee is listed.
pub async fn list_employees<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    query: Result<Query<ListEmployeesQuery>, QueryRejection>,
) -> Result<Response, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = &state.employee_service;

    let response = match query {
        ListEmployeesQuery {
            page: Some(page),
            page_size: Some(page_size),
            ..
        } => Json(service.list_paged(page, page_size).await?).into_response(),
        ListEmployeesQuery {
            gender: Some(gender),
            ..
        } => Json(service.list_by_gender(&gender).await?).into_response(),
        _ => Json(service.list().await?).into_response(),
    };

    Ok(response)
}

/// GET /employees/:id
pub async fn get_employee<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
) -> Result<Json<EmployeeResponse>, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    Ok(Json(state.employee_service.get_by_id(EmployeeId(id)).await?))
}

/// POST /employees
pub async fn create_employee<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let created = state.employee_service.add(Employee::from(request)).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employees/:id
///
/// The body's `id` must equal the path ID.
pub async fn update_employee<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Result<Json<EmployeeResponse>, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let updated = state
        .employee_service
        .update(EmployeeId(id), Employee::from(request))
        .await?;

    Ok(Json(updated))
}

/// DELETE /employees/:id
pub async fn delete_employee<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let deleted = state.employee_service.delete_by_id(EmployeeId(id)).await?;

    Ok((StatusCode::ACCEPTED, Json(deleted)))
}
