use actix_web::{HttpResponse, Responder, web};
use chrono::{Datelike, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::Result;

#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    #[schema(example = 42)]
    pub total_employees: i64,
    #[schema(example = 40)]
    pub active_employees: i64,
    #[schema(example = "1200000.00", value_type = String)]
    pub total_salary_this_month: Decimal,
    #[schema(example = "1180000.00", value_type = String)]
    pub total_salary_last_month: Decimal,
    /// Active employees with no salary generated for the current month.
    #[schema(example = 3)]
    pub pending_salary_generations: i64,
}

async fn total_salary_for(pool: &MySqlPool, month: u32, year: i32) -> Result<Decimal> {
    let total = sqlx::query_scalar::<_, Decimal>(
        r#"
        SELECT COALESCE(SUM(final_salary), 0)
        FROM salaries
        WHERE month = ? AND year = ?
        "#,
    )
    .bind(month)
    .bind(year)
    .fetch_one(pool)
    .await?;

    Ok(total)
}

/// Dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Payroll overview", body = DashboardResponse)
    ),
    tag = "Dashboard"
)]
pub async fn get_dashboard(pool: web::Data<MySqlPool>) -> Result<impl Responder> {
    let today = Local::now().date_naive();
    let (month, year) = (today.month(), today.year());
    let (last_month, last_month_year) = if month == 1 {
        (12, year - 1)
    } else {
        (month - 1, year)
    };

    let total_employees = sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM employees"#)
        .fetch_one(pool.get_ref())
        .await?;

    let active_employees =
        sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM employees WHERE active = TRUE"#)
            .fetch_one(pool.get_ref())
            .await?;

    let total_salary_this_month = total_salary_for(pool.get_ref(), month, year).await?;
    let total_salary_last_month = total_salary_for(pool.get_ref(), last_month, last_month_year).await?;

    let pending_salary_generations = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM employees e
        WHERE e.active = TRUE
          AND NOT EXISTS (
              SELECT 1 FROM salaries s
              WHERE s.employee_id = e.id AND s.month = ? AND s.year = ?
          )
        "#,
    )
    .bind(month)
    .bind(year)
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(DashboardResponse {
        total_employees,
        active_employees,
        total_salary_this_month,
        total_salary_last_month,
        pending_salary_generations,
    }))
}
