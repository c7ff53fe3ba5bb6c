use rust_decimal::Decimal;

use crate::model::salary::{Salary, SalaryDetail};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_name(month: u32) -> String {
    match month {
        1..=12 => MONTH_NAMES[month as usize - 1].to_string(),
        _ => format!("Month {}", month),
    }
}

/// Renders the payslip SMS body. Detail lines come in pre-sorted ledger
/// order, the same ordering the breakdown builder produces.
pub fn format_salary_sms(salary: &Salary, employee_name: &str, details: &[SalaryDetail]) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "Salary Slip - {} {}\n",
        month_name(salary.month),
        salary.year
    ));
    body.push_str(&format!("Emp: {}\n", employee_name));
    body.push_str(&format!("Base: Rs {}\n", salary.base_salary));

    if !details.is_empty() {
        body.push_str("\nDate-wise Details:\n");
        for detail in details {
            let amount = if detail.amount >= Decimal::ZERO {
                format!("+Rs {}", detail.amount)
            } else {
                format!("-Rs {}", detail.amount.abs())
            };
            body.push_str(&format!(
                "{}: {} {}",
                detail.entry_date.format("%d/%m"),
                detail.entry_type,
                amount
            ));
            if let Some(desc) = detail.description.as_deref().filter(|d| !d.is_empty()) {
                body.push_str(&format!(" ({})", desc));
            }
            body.push('\n');
        }
    }

    body.push_str(&format!("\nOvertime: +Rs {}\n", salary.total_overtime));
    body.push_str(&format!("Advances: -Rs {}\n", salary.total_advances));
    body.push_str(&format!("PF: -Rs {}\n", salary.pf_deduction));
    body.push_str(&format!("Leaves: -Rs {}\n", salary.total_leaves));
    body.push_str(&format!("Final: Rs {}\n", salary.final_salary));

    body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::salary::DetailType;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn salary() -> Salary {
        Salary {
            id: 1,
            employee_id: 1,
            month: 11,
            year: 2023,
            base_salary: dec("50000.00"),
            total_overtime: dec("2000.00"),
            total_advances: dec("5000.00"),
            total_leaves: dec("1666.67"),
            pf_deduction: dec("6000.00"),
            final_salary: dec("39333.33"),
            sms_sent: false,
            sms_sent_at: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn detail(entry_type: DetailType, day: u32, amount: &str, desc: Option<&str>) -> SalaryDetail {
        SalaryDetail {
            id: 0,
            salary_id: 1,
            entry_type,
            entry_date: NaiveDate::from_ymd_opt(2023, 11, day).unwrap(),
            amount: dec(amount),
            description: desc.map(String::from),
        }
    }

    #[test]
    fn header_names_the_period_and_employee() {
        let body = format_salary_sms(&salary(), "John Doe", &[]);
        assert!(body.starts_with("Salary Slip - Nov 2023\n"));
        assert!(body.contains("Emp: John Doe\n"));
        assert!(body.contains("Base: Rs 50000.00\n"));
    }

    #[test]
    fn no_details_means_no_details_section() {
        let body = format_salary_sms(&salary(), "John Doe", &[]);
        assert!(!body.contains("Date-wise Details"));
    }

    #[test]
    fn detail_lines_render_in_given_order_with_signs() {
        let details = vec![
            detail(DetailType::Overtime, 3, "2000.00", Some("4.00 hrs @ 500.00/hr")),
            detail(DetailType::Advance, 10, "-5000.00", Some("Advance")),
            detail(DetailType::Leave, 20, "-1666.67", Some("Unpaid Leave")),
        ];

        let body = format_salary_sms(&salary(), "John Doe", &details);

        let ot = body.find("03/11: OVERTIME +Rs 2000.00 (4.00 hrs @ 500.00/hr)").unwrap();
        let adv = body.find("10/11: ADVANCE -Rs 5000.00 (Advance)").unwrap();
        let leave = body.find("20/11: LEAVE -Rs 1666.67 (Unpaid Leave)").unwrap();
        assert!(ot < adv && adv < leave);
    }

    #[test]
    fn summary_lines_close_the_message() {
        let body = format_salary_sms(&salary(), "John Doe", &[]);
        assert!(body.contains("Overtime: +Rs 2000.00\n"));
        assert!(body.contains("Advances: -Rs 5000.00\n"));
        assert!(body.contains("PF: -Rs 6000.00\n"));
        assert!(body.contains("Leaves: -Rs 1666.67\n"));
        assert!(body.ends_with("Final: Rs 39333.33\n"));
    }
}
