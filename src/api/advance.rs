use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::model::advance::Advance;
use crate::payroll::aggregator::{advances_in_period, fetch_employee};
use crate::payroll::period::Period;

#[derive(Deserialize, ToSchema)]
pub struct CreateAdvance {
    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub advance_date: NaiveDate,

    #[schema(example = "5000.00", value_type = String)]
    pub amount: Decimal,

    #[schema(example = "Medical emergency", nullable = true)]
    pub description: Option<String>,
}

/// Record Cash Advance
#[utoipa::path(
    post,
    path = "/api/advances",
    request_body = CreateAdvance,
    responses(
        (status = 201, description = "Advance recorded", body = Advance),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Advance"
)]
pub async fn create_advance(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateAdvance>,
) -> Result<impl Responder> {
    if payload.amount <= Decimal::ZERO {
        return Err(Error::validation("amount must be greater than 0"));
    }

    fetch_employee(pool.get_ref(), payload.employee_id).await?;

    let result = sqlx::query(
        r#"
        INSERT INTO advances (employee_id, advance_date, amount, description)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(payload.employee_id)
    .bind(payload.advance_date)
    .bind(payload.amount)
    .bind(&payload.description)
    .execute(pool.get_ref())
    .await?;

    let advance = sqlx::query_as::<_, Advance>(
        r#"
        SELECT id, employee_id, advance_date, amount, description
        FROM advances
        WHERE id = ?
        "#,
    )
    .bind(result.last_insert_id())
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(advance))
}

/// List Advances for an Employee
#[utoipa::path(
    get,
    path = "/api/advances/employee/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Advance entries", body = [Advance]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Advance"
)]
pub async fn list_advances(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let employee_id = path.into_inner();

    fetch_employee(pool.get_ref(), employee_id).await?;

    let advances = sqlx::query_as::<_, Advance>(
        r#"
        SELECT id, employee_id, advance_date, amount, description
        FROM advances
        WHERE employee_id = ?
        ORDER BY advance_date, id
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(advances))
}

/// List Advances for an Employee in a Month
#[utoipa::path(
    get,
    path = "/api/advances/employee/{employee_id}/month/{month}/year/{year}",
    params(
        ("employee_id", description = "Employee ID"),
        ("month", description = "Month (1-12)"),
        ("year", description = "Year (>= 2000)")
    ),
    responses(
        (status = 200, description = "Advance entries in the period", body = [Advance]),
        (status = 400, description = "Invalid period"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Advance"
)]
pub async fn list_advances_for_month(
    pool: web::Data<MySqlPool>,
    path: web::Path<(u64, u32, i32)>,
) -> Result<impl Responder> {
    let (employee_id, month, year) = path.into_inner();
    let period = Period::new(month, year)?;

    fetch_employee(pool.get_ref(), employee_id).await?;

    let advances = advances_in_period(pool.get_ref(), employee_id, period).await?;

    Ok(HttpResponse::Ok().json(advances))
}
