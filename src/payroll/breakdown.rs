use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::salary::DetailType;
use crate::payroll::aggregator::PeriodTransactions;

/// One signed, dated line of the salary breakdown. The same lines back both
/// the preview response and the persisted salary_details rows.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DetailLine {
    #[schema(example = "OVERTIME")]
    pub entry_type: DetailType,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub entry_date: NaiveDate,

    #[schema(example = "2000.00", value_type = String)]
    pub amount: Decimal,

    pub description: String,
}

fn type_rank(t: DetailType) -> u8 {
    match t {
        DetailType::Overtime => 0,
        DetailType::Advance => 1,
        DetailType::Leave => 2,
    }
}

/// Turns the period transactions into the date-ordered ledger. Overtime is
/// credited at its stored total; advances debit their amount; each unpaid
/// leave day debits one daily salary. Ordering is date, then
/// OVERTIME < ADVANCE < LEAVE, then retrieval order (the sort is stable).
pub fn build(transactions: &PeriodTransactions, daily_salary: Decimal) -> Vec<DetailLine> {
    let mut lines = Vec::with_capacity(
        transactions.overtimes.len()
            + transactions.advances.len()
            + transactions.unpaid_leaves.len(),
    );

    for ot in &transactions.overtimes {
        lines.push(DetailLine {
            entry_type: DetailType::Overtime,
            entry_date: ot.overtime_date,
            amount: ot.total_amount,
            description: format!("{} hrs @ {}/hr", ot.hours, ot.rate_per_hour),
        });
    }

    for adv in &transactions.advances {
        lines.push(DetailLine {
            entry_type: DetailType::Advance,
            entry_date: adv.advance_date,
            amount: -adv.amount,
            description: adv
                .description
                .clone()
                .unwrap_or_else(|| "Advance".to_string()),
        });
    }

    for leave in &transactions.unpaid_leaves {
        lines.push(DetailLine {
            entry_type: DetailType::Leave,
            entry_date: leave.leave_date,
            amount: -daily_salary,
            description: match &leave.description {
                Some(desc) => format!("Unpaid Leave: {}", desc),
                None => "Unpaid Leave".to_string(),
            },
        });
    }

    lines.sort_by_key(|line| (line.entry_date, type_rank(line.entry_type)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::advance::Advance;
    use crate::model::leave::{Leave, LeaveType};
    use crate::model::overtime::Overtime;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, d).unwrap()
    }

    fn overtime(id: u64, date: NaiveDate, hours: &str, rate: &str) -> Overtime {
        Overtime {
            id,
            employee_id: 1,
            overtime_date: date,
            hours: dec(hours),
            rate_per_hour: dec(rate),
            total_amount: dec(hours) * dec(rate),
        }
    }

    fn advance(id: u64, date: NaiveDate, amount: &str, description: Option<&str>) -> Advance {
        Advance {
            id,
            employee_id: 1,
            advance_date: date,
            amount: dec(amount),
            description: description.map(String::from),
        }
    }

    fn unpaid_leave(id: u64, date: NaiveDate, description: Option<&str>) -> Leave {
        Leave {
            id,
            employee_id: 1,
            leave_date: date,
            leave_type: LeaveType::Unpaid,
            description: description.map(String::from),
        }
    }

    #[test]
    fn lines_carry_signed_amounts_and_descriptions() {
        let txns = PeriodTransactions {
            overtimes: vec![overtime(1, day(3), "4.00", "500.00")],
            advances: vec![advance(2, day(10), "5000.00", None)],
            unpaid_leaves: vec![unpaid_leave(3, day(20), Some("family function"))],
        };

        let lines = build(&txns, dec("1666.67"));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].amount, dec("2000.00"));
        assert_eq!(lines[0].description, "4.00 hrs @ 500.00/hr");
        assert_eq!(lines[1].amount, dec("-5000.00"));
        assert_eq!(lines[1].description, "Advance");
        assert_eq!(lines[2].amount, dec("-1666.67"));
        assert_eq!(lines[2].description, "Unpaid Leave: family function");
    }

    #[test]
    fn orders_by_date_then_fixed_type_order() {
        let txns = PeriodTransactions {
            overtimes: vec![overtime(1, day(15), "1.00", "100.00")],
            advances: vec![
                advance(2, day(15), "200.00", None),
                advance(3, day(2), "50.00", None),
            ],
            unpaid_leaves: vec![unpaid_leave(4, day(15), None)],
        };

        let lines = build(&txns, dec("500.00"));

        assert_eq!(lines[0].entry_date, day(2));
        assert_eq!(lines[0].entry_type, DetailType::Advance);
        // Same date: overtime, then advance, then leave
        assert_eq!(lines[1].entry_type, DetailType::Overtime);
        assert_eq!(lines[2].entry_type, DetailType::Advance);
        assert_eq!(lines[3].entry_type, DetailType::Leave);
    }

    #[test]
    fn same_date_same_type_keeps_retrieval_order() {
        let txns = PeriodTransactions {
            overtimes: vec![],
            advances: vec![
                advance(7, day(5), "100.00", Some("first")),
                advance(8, day(5), "200.00", Some("second")),
            ],
            unpaid_leaves: vec![],
        };

        let lines = build(&txns, dec("1.00"));

        assert_eq!(lines[0].description, "first");
        assert_eq!(lines[1].description, "second");
    }

    #[test]
    fn rebuilding_from_identical_inputs_is_identical() {
        let txns = PeriodTransactions {
            overtimes: vec![overtime(1, day(8), "2.00", "150.00")],
            advances: vec![advance(2, day(8), "300.00", None)],
            unpaid_leaves: vec![unpaid_leave(3, day(1), None)],
        };

        let first = build(&txns, dec("1000.00"));
        let second = build(&txns, dec("1000.00"));

        assert_eq!(first, second);
    }

    #[test]
    fn signed_sum_matches_the_totals_identity() {
        let txns = PeriodTransactions {
            overtimes: vec![
                overtime(1, day(1), "2.00", "250.00"),
                overtime(2, day(9), "1.00", "300.00"),
            ],
            advances: vec![advance(3, day(4), "450.00", None)],
            unpaid_leaves: vec![unpaid_leave(4, day(6), None), unpaid_leave(5, day(7), None)],
        };
        let daily = dec("333.33");

        let lines = build(&txns, daily);
        let sum: Decimal = lines.iter().map(|l| l.amount).sum();

        // total_overtime - total_advances - leave_deduction
        let expected = dec("800.00") - dec("450.00") - dec("666.66");
        assert_eq!(sum, expected);
    }
}
