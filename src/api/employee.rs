use actix_web::{HttpResponse, Responder, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::MySqlPool;
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::error::{Error, Result};
use crate::model::employee::Employee;
use crate::payroll::aggregator::fetch_employee;

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "9876543210")]
    pub mobile: String,

    #[schema(example = "30000.00", value_type = String)]
    pub base_salary: Decimal,

    #[schema(example = "10.00", value_type = String)]
    pub pf_percentage: Decimal,
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct EmployeeQuery {
    #[schema(example = 1)]
    pub page: Option<u32>,

    #[schema(example = 20)]
    pub per_page: Option<u32>,

    /// Defaults to active employees only.
    #[schema(example = true)]
    pub active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeListResponse {
    pub data: Vec<Employee>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 20)]
    pub per_page: u32,
    #[schema(example = 42)]
    pub total: i64,
}

fn validate_employee_payload(payload: &CreateEmployee) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(Error::validation("name is required"));
    }
    if payload.mobile.len() != 10 || !payload.mobile.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::validation("mobile number must be 10 digits"));
    }
    if payload.base_salary <= Decimal::ZERO {
        return Err(Error::validation("base salary must be greater than 0"));
    }
    if payload.pf_percentage < Decimal::ZERO || payload.pf_percentage > Decimal::from(100) {
        return Err(Error::validation("pf percentage must be between 0 and 100"));
    }
    Ok(())
}

fn mobile_conflict(e: sqlx::Error, mobile: &str) -> Error {
    match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::validation(
            format!("employee with mobile number {} already exists", mobile),
        ),
        other => other.into(),
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid payload or duplicate mobile number")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<MySqlPool>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder> {
    validate_employee_payload(&payload)?;

    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, mobile, base_salary, pf_percentage, active)
        VALUES (?, ?, ?, ?, TRUE)
        "#,
    )
    .bind(payload.name.trim())
    .bind(&payload.mobile)
    .bind(payload.base_salary)
    .bind(payload.pf_percentage)
    .execute(pool.get_ref())
    .await
    .map_err(|e| mobile_conflict(e, &payload.mobile))?;

    let employee = fetch_employee(pool.get_ref(), result.last_insert_id()).await?;

    Ok(HttpResponse::Created().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    params(EmployeeQuery),
    responses(
        (status = 200, description = "Paginated employee list", body = EmployeeListResponse)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    pool: web::Data<MySqlPool>,
    query: web::Query<EmployeeQuery>,
) -> Result<impl Responder> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1) * per_page;

    let where_clause = if query.active.unwrap_or(true) {
        "WHERE active = TRUE"
    } else {
        ""
    };

    let count_sql = format!("SELECT COUNT(*) FROM employees {}", where_clause);
    debug!(sql = %count_sql, "Counting employees");

    let total = sqlx::query_scalar::<_, i64>(&count_sql)
        .fetch_one(pool.get_ref())
        .await?;

    let data_sql = format!(
        r#"
        SELECT id, name, mobile, base_salary, pf_percentage, active, created_at, updated_at
        FROM employees
        {}
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
        where_clause
    );

    let employees = sqlx::query_as::<_, Employee>(&data_sql)
        .bind(per_page as i64)
        .bind(offset as i64)
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(EmployeeListResponse {
        data: employees,
        page,
        per_page,
        total,
    }))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let employee = fetch_employee(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", description = "Employee ID")
    ),
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid payload or duplicate mobile number"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
    payload: web::Json<CreateEmployee>,
) -> Result<impl Responder> {
    let employee_id = path.into_inner();

    validate_employee_payload(&payload)?;

    // Existence first, so a missing row is a 404 rather than a no-op update.
    fetch_employee(pool.get_ref(), employee_id).await?;

    sqlx::query(
        r#"
        UPDATE employees
        SET name = ?, mobile = ?, base_salary = ?, pf_percentage = ?
        WHERE id = ?
        "#,
    )
    .bind(payload.name.trim())
    .bind(&payload.mobile)
    .bind(payload.base_salary)
    .bind(payload.pf_percentage)
    .bind(employee_id)
    .execute(pool.get_ref())
    .await
    .map_err(|e| mobile_conflict(e, &payload.mobile))?;

    let employee = fetch_employee(pool.get_ref(), employee_id).await?;

    Ok(HttpResponse::Ok().json(employee))
}

/// Deactivate Employee
///
/// Soft delete: the employee drops out of listings and dashboard counts but
/// remains referenced by historical transactions and salaries.
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}/deactivate",
    params(
        ("employee_id", description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deactivated"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn deactivate_employee(
    pool: web::Data<MySqlPool>,
    path: web::Path<u64>,
) -> Result<impl Responder> {
    let employee_id = path.into_inner();

    let result = sqlx::query(r#"UPDATE employees SET active = FALSE WHERE id = ?"#)
        .bind(employee_id)
        .execute(pool.get_ref())
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::not_found("Employee", employee_id));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deactivated successfully"
    })))
}
