use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::Result;
use crate::model::salary::Salary;
use crate::notify::Notifier;
use crate::payroll::generator::{self, SalaryPreview};
use crate::payroll::period::Period;

#[derive(Deserialize, ToSchema)]
pub struct SalaryGenerationRequest {
    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = 11, minimum = 1, maximum = 12)]
    pub month: u32,

    #[schema(example = 2023, minimum = 2000)]
    pub year: i32,
}

/// Preview Salary
///
/// Runs the full calculation pipeline without persisting anything. The
/// figures and breakdown are exactly what a generation over the same
/// transactions would store.
#[utoipa::path(
    post,
    path = "/api/salaries/preview",
    request_body = SalaryGenerationRequest,
    responses(
        (status = 200, description = "Computed salary preview", body = SalaryPreview),
        (status = 400, description = "Invalid period"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Salary"
)]
pub async fn preview_salary(
    pool: web::Data<MySqlPool>,
    payload: web::Json<SalaryGenerationRequest>,
) -> Result<impl Responder> {
    let period = Period::new(payload.month, payload.year)?;

    let preview = generator::preview(pool.get_ref(), payload.employee_id, period).await?;

    Ok(HttpResponse::Ok().json(preview))
}

/// Generate Salary
///
/// Persists the salary and its ledger atomically, then attempts the payslip
/// SMS. A delivery failure is logged and reflected in the returned record's
/// sms_sent flag; it never rolls back or fails the generation.
#[utoipa::path(
    post,
    path = "/api/salaries/generate",
    request_body = SalaryGenerationRequest,
    responses(
        (status = 201, description = "Salary generated", body = Salary),
        (status = 400, description = "Invalid period"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Salary already generated for the period")
    ),
    tag = "Salary"
)]
pub async fn generate_salary(
    pool: web::Data<MySqlPool>,
    notifier: web::Data<Notifier>,
    payload: web::Json<SalaryGenerationRequest>,
) -> Result<impl Responder> {
    let period = Period::new(payload.month, payload.year)?;

    let salary = generator::generate(pool.get_ref(), payload.employee_id, period).await?;

    // Dispatch strictly after the commit; the generation stands either way.
    let salary = match notifier.send(pool.get_ref(), salary.id).await {
        Ok(()) => generator::fetch_salary(pool.get_ref(), salary.id).await?,
        Err(e) => {
            tracing::warn!(error = %e, salary_id = salary.id, "Salary SMS failed after generation");
            salary
        }
    };

    Ok(HttpResponse::Created().json(salary))
}

/// Salary History for an Employee
#[utoipa::path(
    get,
    path = "/api/salaries/employee/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Generated salaries, most recent period first", body = [Salary])
    ),
    tag = "Salary"
)]
pub async fn salary_history(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let salaries = generator::history(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(salaries))
}

/// Resend Salary SMS
///
/// Allowed for already-sent salaries; only the sent timestamp is refreshed.
#[utoipa::path(
    post,
    path = "/api/salaries/{salary_id}/resend-sms",
    params(
        ("salary_id", description = "Salary ID")
    ),
    responses(
        (status = 200, description = "SMS resent"),
        (status = 404, description = "Salary not found"),
        (status = 502, description = "SMS gateway failure")
    ),
    tag = "Salary"
)]
pub async fn resend_sms(
    pool: web::Data<MySqlPool>,
    notifier: web::Data<Notifier>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    notifier.send(pool.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "SMS resent successfully"
    })))
}
