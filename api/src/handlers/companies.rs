//! Company handlers
//!
//! Endpoints under `/companies`.

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

use crate::domain::entities::{Company, CompanyId};
use crate::domain::ports::{CompanyRepository, EmployeeRepository};
use crate::dto::{CompanyRequest, CompanyResponse, EmployeeResponse};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing companies
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesQuery {
    /// 1-based page number
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /companies
///
/// List every company, or one page of them when both `page` and `pageSize`
/// are given.
pub async fn list_companies<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    query: Result<Query<ListCompaniesQuery>, QueryRejection>,
) -> Result<Response, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let response = match (query.page, query.page_size) {
        (Some(page), Some(page_size)) => {
            Json(state.company_service.list_paged(page, page_size).await?).into_response()
        }
        _ => Json(state.company_service.list().await?).into_response(),
    };

    Ok(response)
}

/// GET /companies/:id
pub async fn get_company<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
) -> Result<Json<CompanyResponse>, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    Ok(Json(state.company_service.get_by_id(CompanyId(id)).await?))
}

/// GET /companies/:id/employees
///
/// Employees of a company; an unknown company has none.
pub async fn list_company_employees<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    Ok(Json(
        state.company_service.list_employees_of(CompanyId(id)).await?,
    ))
}

/// POST /companies
pub async fn create_company<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let created = state.company_service.add(Company::from(request)).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /companies/:id
///
/// The body's `id` must equal the path ID.
pub async fn update_company<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
    payload: Result<Json<CompanyRequest>, JsonRejection>,
) -> Result<Json<CompanyResponse>, AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let updated = state
        .company_service
        .update(CompanyId(id), Company::from(request))
        .await?;

    Ok(Json(updated))
}

/// DELETE /companies/:id
///
/// Returns the company as it was before deletion.
pub async fn delete_company<CR, ER>(
    State(state): State<AppState<CR, ER>>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<CompanyResponse>), AppError>
where
    CR: CompanyRepository + 'static,
    ER: EmployeeRepository + 'static,
{
    let deleted = state.company_service.delete_by_id(CompanyId(id)).await?;

    Ok((StatusCode::ACCEPTED, Json(deleted)))
}
