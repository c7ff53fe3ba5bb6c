use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::MySqlPool;
use utoipa::ToSchema;

use crate::error::{Error, Result};
use crate::model::employee::Employee;
use crate::model::salary::{Salary, SalaryDetail};
use crate::payroll::aggregator;
use crate::payroll::breakdown::{self, DetailLine};
use crate::payroll::calculator::{self, SalaryComputation};
use crate::payroll::period::Period;

/// What a generation would produce, computed without persisting anything.
/// Built by the exact pipeline `generate` runs, so the figures and breakdown
/// always match what a generation over the same rows would store.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SalaryPreview {
    #[schema(example = 1)]
    pub employee_id: u64,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "9876543210")]
    pub employee_mobile: String,
    #[schema(example = 11)]
    pub month: u32,
    #[schema(example = 2023)]
    pub year: i32,
    #[schema(example = "30000.00", value_type = String)]
    pub base_salary: Decimal,
    #[schema(example = "2000.00", value_type = String)]
    pub total_overtime: Decimal,
    #[schema(example = "5000.00", value_type = String)]
    pub total_advances: Decimal,
    #[schema(example = 1)]
    pub unpaid_leave_days: u32,
    #[schema(example = "1666.67", value_type = String)]
    pub leave_deduction: Decimal,
    #[schema(example = "6000.00", value_type = String)]
    pub pf_deduction: Decimal,
    #[schema(example = "39333.33", value_type = String)]
    pub final_salary: Decimal,
    pub date_wise_breakdown: Vec<DetailLine>,
}

/// Shared aggregate -> calculate -> breakdown pipeline behind both preview
/// and generate.
async fn compute(
    pool: &MySqlPool,
    employee_id: u64,
    period: Period,
) -> Result<(Employee, SalaryComputation, Vec<DetailLine>)> {
    let (employee, transactions) = aggregator::aggregate(pool, employee_id, period).await?;
    let computation = calculator::calculate(&employee, &transactions, period.days());
    let lines = breakdown::build(&transactions, computation.daily_salary);
    Ok((employee, computation, lines))
}

pub async fn preview(pool: &MySqlPool, employee_id: u64, period: Period) -> Result<SalaryPreview> {
    let (employee, comp, lines) = compute(pool, employee_id, period).await?;

    Ok(SalaryPreview {
        employee_id: employee.id,
        employee_name: employee.name,
        employee_mobile: employee.mobile,
        month: period.month(),
        year: period.year(),
        base_salary: comp.base_salary,
        total_overtime: comp.total_overtime,
        total_advances: comp.total_advances,
        unpaid_leave_days: comp.unpaid_leave_days,
        leave_deduction: comp.leave_deduction,
        pf_deduction: comp.pf_deduction,
        final_salary: comp.final_salary,
        date_wise_breakdown: lines,
    })
}

/// Computes and persists the salary and its ledger as one transaction.
///
/// Uniqueness of (employee_id, month, year) is enforced by uk_salaries_period
/// at insert time; there is no pre-check query, so concurrent generations for
/// the same key race at the database and exactly one wins. The losing
/// insert's unique violation comes back as `DuplicateGeneration`.
pub async fn generate(pool: &MySqlPool, employee_id: u64, period: Period) -> Result<Salary> {
    let (_employee, comp, lines) = compute(pool, employee_id, period).await?;

    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO salaries
        (employee_id, month, year, base_salary, total_overtime, total_advances,
         total_leaves, pf_deduction, final_salary, sms_sent)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, FALSE)
        "#,
    )
    .bind(employee_id)
    .bind(period.month())
    .bind(period.year())
    .bind(comp.base_salary)
    .bind(comp.total_overtime)
    .bind(comp.total_advances)
    .bind(comp.leave_deduction)
    .bind(comp.pf_deduction)
    .bind(comp.final_salary)
    .execute(&mut *tx)
    .await;

    let inserted = match inserted {
        Ok(res) => res,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(Error::DuplicateGeneration {
                employee_id,
                month: period.month(),
                year: period.year(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let salary_id = inserted.last_insert_id();

    // Ledger rows are inserted in breakdown order, so id order preserves it.
    for line in &lines {
        sqlx::query(
            r#"
            INSERT INTO salary_details (salary_id, entry_type, entry_date, amount, description)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(salary_id)
        .bind(line.entry_type)
        .bind(line.entry_date)
        .bind(line.amount)
        .bind(&line.description)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(employee_id, %period, salary_id, "Salary generated");

    fetch_salary(pool, salary_id).await
}

pub async fn fetch_salary(pool: &MySqlPool, salary_id: u64) -> Result<Salary> {
    let salary = sqlx::query_as::<_, Salary>(
        r#"
        SELECT id, employee_id, month, year, base_salary, total_overtime, total_advances,
               total_leaves, pf_deduction, final_salary, sms_sent, sms_sent_at, created_at
        FROM salaries
        WHERE id = ?
        "#,
    )
    .bind(salary_id)
    .fetch_optional(pool)
    .await?;

    salary.ok_or(Error::not_found("Salary", salary_id))
}

/// Persisted ledger for one salary, in breakdown order.
pub async fn fetch_details(pool: &MySqlPool, salary_id: u64) -> Result<Vec<SalaryDetail>> {
    let details = sqlx::query_as::<_, SalaryDetail>(
        r#"
        SELECT id, salary_id, entry_type, entry_date, amount, description
        FROM salary_details
        WHERE salary_id = ?
        ORDER BY entry_date, FIELD(entry_type, 'OVERTIME', 'ADVANCE', 'LEAVE'), id
        "#,
    )
    .bind(salary_id)
    .fetch_all(pool)
    .await?;

    Ok(details)
}

/// All generated salaries for an employee, most recent period first.
pub async fn history(pool: &MySqlPool, employee_id: u64) -> Result<Vec<Salary>> {
    let salaries = sqlx::query_as::<_, Salary>(
        r#"
        SELECT id, employee_id, month, year, base_salary, total_overtime, total_advances,
               total_leaves, pf_deduction, final_salary, sms_sent, sms_sent_at, created_at
        FROM salaries
        WHERE employee_id = ?
        ORDER BY year DESC, month DESC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(salaries)
}
