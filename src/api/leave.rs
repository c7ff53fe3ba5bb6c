use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::{IntoParams, ToSchema};

use crate::error::Result;
use crate::model::leave::{Leave, LeaveType};
use crate::payroll::aggregator::{fetch_employee, leaves_in_period};
use crate::payroll::period::Period;

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-20", value_type = String, format = "date")]
    pub leave_date: NaiveDate,

    #[schema(example = "UNPAID")]
    pub leave_type: LeaveType,

    #[schema(example = "Personal work", nullable = true)]
    pub description: Option<String>,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Restrict to unpaid leave only.
    #[schema(example = false)]
    pub unpaid_only: Option<bool>,
}

/// Record Leave
#[utoipa::path(
    post,
    path = "/api/leaves",
    request_body = CreateLeave,
    responses(
        (status = 201, description = "Leave recorded", body = Leave),
        (status = 404, description = "Employee not found")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateLeave>,
) -> Result<impl Responder> {
    fetch_employee(pool.get_ref(), payload.employee_id).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO leaves (employee_id, leave_date, leave_type, description)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(payload.employee_id)
    .bind(payload.leave_date)
    .bind(payload.leave_type)
    .bind(&payload.description)
    .execute(pool.get_ref())
    .await?;

    let leave = sqlx::query_as::<_, Leave>(
        r#"
        SELECT id, employee_id, leave_date, leave_type, description
        FROM leaves
        WHERE id = ?
        "#,
    )
    .bind(result.last_insert_id())
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(leave))
}

/// List Leaves for an Employee
#[utoipa::path(
    get,
    path = "/api/leaves/employee/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Leave entries", body = [Leave]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Leave"
)]
pub async fn list_leaves(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let employee_id = path.into_inner();

    fetch_employee(pool.get_ref(), employee_id).await?;

    let leaves = sqlx::query_as::<_, Leave>(
        r#"
        SELECT id, employee_id, leave_date, leave_type, description
        FROM leaves
        WHERE employee_id = ?
        ORDER BY leave_date, id
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(leaves))
}

/// List Leaves for an Employee in a Month
#[utoipa::path(
    get,
    path = "/api/leaves/employee/{employee_id}/month/{month}/year/{year}",
    params(
        ("employee_id", description = "Employee ID"),
        ("month", description = "Month (1-12)"),
        ("year", description = "Year (>= 2000)"),
        LeaveFilter
    ),
    responses(
        (status = 200, description = "Leave entries in the period", body = [Leave]),
        (status = 400, description = "Invalid period"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Leave"
)]
pub async fn list_leaves_for_month(
    pool: web::Data<MySqlPool>,
    path: web::Path<(u64, u32, i32)>,
    query: web::Query<LeaveFilter>,
) -> Result<impl Responder> {
    let (employee_id, month, year) = path.into_inner();
    let period = Period::new(month, year)?;

    fetch_employee(pool.get_ref(), employee_id).await?;

    let unpaid_only = query.unpaid_only.unwrap_or(false);
    let leaves = leaves_in_period(pool.get_ref(), employee_id, period, unpaid_only).await?;

    Ok(HttpResponse::Ok().json(leaves))
}
