use sqlx::MySqlPool;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::payroll::{aggregator, generator};
use crate::utils::phone;

pub mod gateway;
pub mod message;

use gateway::SmsGateway;

/// Payslip SMS capability. Constructed once at startup and handed to the
/// handlers that need it; holds no mutable state.
#[derive(Clone)]
pub struct Notifier {
    gateway: SmsGateway,
    country_prefix: String,
}

impl Notifier {
    pub fn from_config(config: &Config) -> Self {
        Notifier {
            gateway: SmsGateway::new(
                config.sms_base_url.clone(),
                config.sms_account_sid.clone(),
                config.sms_auth_token.clone(),
                config.sms_from_number.clone(),
            ),
            country_prefix: config.sms_country_prefix.clone(),
        }
    }

    /// Sends the payslip summary for a persisted salary and marks it sent.
    ///
    /// A transport failure surfaces as `ExternalService` and leaves the
    /// salary row exactly as it was; the generation it belongs to is never
    /// affected. Re-sending an already-sent salary is allowed and only
    /// refreshes sms_sent_at.
    pub async fn send(&self, pool: &MySqlPool, salary_id: u64) -> Result<()> {
        let salary = generator::fetch_salary(pool, salary_id).await?;
        let employee = aggregator::fetch_employee(pool, salary.employee_id).await?;
        let details = generator::fetch_details(pool, salary_id).await?;

        let body = message::format_salary_sms(&salary, &employee.name, &details);
        let to = phone::normalize(&employee.mobile, &self.country_prefix);

        self.gateway
            .send(&to, &body)
            .await
            .map_err(Error::ExternalService)?;

        // Only the delivery flag and timestamp; financial fields stay frozen.
        sqlx::query(
            r#"
            UPDATE salaries
            SET sms_sent = TRUE, sms_sent_at = NOW()
            WHERE id = ?
            "#,
        )
        .bind(salary_id)
        .execute(pool)
        .await?;

        tracing::info!(salary_id, employee_id = salary.employee_id, "Salary SMS sent");

        Ok(())
    }
}
