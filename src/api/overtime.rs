use actix_web::{HttpResponse, Responder, web};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use serde_json::json;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::model::overtime::Overtime;
use crate::payroll::aggregator::{fetch_employee, overtimes_in_period};
use crate::payroll::period::Period;

#[derive(Deserialize, ToSchema)]
pub struct CreateOvertime {
    #[schema(example = 1)]
    pub employee_id: u64,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub overtime_date: NaiveDate,

    #[schema(example = "4.00", value_type = String)]
    pub hours: Decimal,

    #[schema(example = "500.00", value_type = String)]
    pub rate_per_hour: Decimal,
}

/// Record Overtime
#[utoipa::path(
    post,
    path = "/api/overtimes",
    request_body = CreateOvertime,
    responses(
        (status = 201, description = "Overtime recorded", body = Overtime),
        (status = 400, description = "Invalid hours or rate"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Overtime"
)]
pub async fn create_overtime(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateOvertime>,
) -> Result<impl Responder> {
    if payload.hours <= Decimal::ZERO {
        return Err(Error::validation("hours must be greater than 0"));
    }
    if payload.rate_per_hour <= Decimal::ZERO {
        return Err(Error::validation("rate per hour must be greater than 0"));
    }

    fetch_employee(pool.get_ref(), payload.employee_id).await?;

    // The stored total is authoritative from here on; the calculator sums it
    // without recomputing hours x rate.
    let total_amount = (payload.hours * payload.rate_per_hour)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let result = sqlx::query(
        r#"
        INSERT INTO overtimes (employee_id, overtime_date, hours, rate_per_hour, total_amount)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(payload.employee_id)
    .bind(payload.overtime_date)
    .bind(payload.hours)
    .bind(payload.rate_per_hour)
    .bind(total_amount)
    .execute(pool.get_ref())
    .await?;

    let overtime = sqlx::query_as::<_, Overtime>(
        r#"
        SELECT id, employee_id, overtime_date, hours, rate_per_hour, total_amount
        FROM overtimes
        WHERE id = ?
        "#,
    )
    .bind(result.last_insert_id())
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Created().json(overtime))
}

/// List Overtimes for an Employee
#[utoipa::path(
    get,
    path = "/api/overtimes/employee/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Overtime entries", body = [Overtime]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Overtime"
)]
pub async fn list_overtimes(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let employee_id = path.into_inner();

    fetch_employee(pool.get_ref(), employee_id).await?;

    let overtimes = sqlx::query_as::<_, Overtime>(
        r#"
        SELECT id, employee_id, overtime_date, hours, rate_per_hour, total_amount
        FROM overtimes
        WHERE employee_id = ?
        ORDER BY overtime_date, id
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(overtimes))
}

/// List Overtimes for an Employee in a Month
#[utoipa::path(
    get,
    path = "/api/overtimes/employee/{employee_id}/month/{month}/year/{year}",
    params(
        ("employee_id", description = "Employee ID"),
        ("month", description = "Month (1-12)"),
        ("year", description = "Year (>= 2000)")
    ),
    responses(
        (status = 200, description = "Overtime entries in the period", body = [Overtime]),
        (status = 400, description = "Invalid period"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Overtime"
)]
pub async fn list_overtimes_for_month(
    pool: web::Data<MySqlPool>,
    path: web::Path<(u64, u32, i32)>,
) -> Result<impl Responder> {
    let (employee_id, month, year) = path.into_inner();
    let period = Period::new(month, year)?;

    fetch_employee(pool.get_ref(), employee_id).await?;

    let overtimes = overtimes_in_period(pool.get_ref(), employee_id, period).await?;

    Ok(HttpResponse::Ok().json(overtimes))
}

/// Delete Overtime
#[utoipa::path(
    delete,
    path = "/api/overtimes/{overtime_id}",
    params(
        ("overtime_id", description = "Overtime ID")
    ),
    responses(
        (status = 200, description = "Overtime deleted"),
        (status = 404, description = "Overtime not found")
    ),
    tag = "Overtime"
)]
pub async fn delete_overtime(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let overtime_id = path.into_inner();

    let result = sqlx::query(r#"DELETE FROM overtimes WHERE id = ?"#)
        .bind(overtime_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::not_found("Overtime", overtime_id));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Overtime deleted successfully"
    })))
}
