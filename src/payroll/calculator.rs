use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::employee::Employee;
use crate::payroll::aggregator::PeriodTransactions;

/// Full result of one salary computation. All values carry two decimal
/// places; each term is rounded at the point it is computed, not at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryComputation {
    pub base_salary: Decimal,
    pub total_overtime: Decimal,
    pub total_advances: Decimal,
    pub unpaid_leave_days: u32,
    pub daily_salary: Decimal,
    pub leave_deduction: Decimal,
    pub pf_deduction: Decimal,
    pub final_salary: Decimal,
}

/// Half-up to two decimals. Every monetary term here is non-negative, so
/// midpoint-away-from-zero is exactly HALF_UP.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Pure salary formula:
///
/// final = base + overtime - advances - pf - leave deduction
///
/// where pf is a percentage of base salary and each unpaid-leave day costs
/// one daily salary (base / actual days in the month).
pub fn calculate(
    employee: &Employee,
    transactions: &PeriodTransactions,
    days_in_period: u32,
) -> SalaryComputation {
    let base_salary = employee.base_salary;

    let total_overtime = round2(
        transactions
            .overtimes
            .iter()
            .map(|ot| ot.total_amount)
            .sum(),
    );

    let total_advances = round2(transactions.advances.iter().map(|adv| adv.amount).sum());

    let unpaid_leave_days = transactions.unpaid_leaves.len() as u32;

    let daily_salary = round2(base_salary / Decimal::from(days_in_period));
    let leave_deduction = round2(Decimal::from(unpaid_leave_days) * daily_salary);

    let pf_deduction = round2(base_salary * employee.pf_percentage / Decimal::from(100));

    let final_salary =
        base_salary + total_overtime - total_advances - pf_deduction - leave_deduction;

    SalaryComputation {
        base_salary,
        total_overtime,
        total_advances,
        unpaid_leave_days,
        daily_salary,
        leave_deduction,
        pf_deduction,
        final_salary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::advance::Advance;
    use crate::model::leave::{Leave, LeaveType};
    use crate::model::overtime::Overtime;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn employee(base: &str, pf: &str) -> Employee {
        Employee {
            id: 1,
            name: "Test Employee".into(),
            mobile: "1234567890".into(),
            base_salary: dec(base),
            pf_percentage: dec(pf),
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn overtime(date: NaiveDate, hours: &str, rate: &str) -> Overtime {
        Overtime {
            id: 0,
            employee_id: 1,
            overtime_date: date,
            hours: dec(hours),
            rate_per_hour: dec(rate),
            total_amount: dec(hours) * dec(rate),
        }
    }

    fn advance(date: NaiveDate, amount: &str) -> Advance {
        Advance {
            id: 0,
            employee_id: 1,
            advance_date: date,
            amount: dec(amount),
            description: None,
        }
    }

    fn unpaid_leave(date: NaiveDate) -> Leave {
        Leave {
            id: 0,
            employee_id: 1,
            leave_date: date,
            leave_type: LeaveType::Unpaid,
            description: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, d).unwrap()
    }

    #[test]
    fn no_transactions_leaves_only_pf_deducted() {
        // 30000.00 over a 30-day month at 10% PF
        let emp = employee("30000.00", "10.00");
        let txns = PeriodTransactions::default();

        let comp = calculate(&emp, &txns, 30);

        assert_eq!(comp.daily_salary, dec("1000.00"));
        assert_eq!(comp.pf_deduction, dec("3000.00"));
        assert_eq!(comp.total_overtime, Decimal::ZERO);
        assert_eq!(comp.total_advances, Decimal::ZERO);
        assert_eq!(comp.leave_deduction, Decimal::ZERO);
        assert_eq!(comp.final_salary, dec("27000.00"));
    }

    #[test]
    fn full_formula_with_every_stream() {
        // 50000 base, 12% PF, one 4h @ 500 overtime, one 5000 advance,
        // one unpaid day in a 30-day month
        let emp = employee("50000.00", "12.00");
        let txns = PeriodTransactions {
            overtimes: vec![overtime(day(3), "4.00", "500.00")],
            advances: vec![advance(day(10), "5000.00")],
            unpaid_leaves: vec![unpaid_leave(day(20))],
        };

        let comp = calculate(&emp, &txns, 30);

        assert_eq!(comp.total_overtime, dec("2000.00"));
        assert_eq!(comp.total_advances, dec("5000.00"));
        assert_eq!(comp.unpaid_leave_days, 1);
        assert_eq!(comp.daily_salary, dec("1666.67"));
        assert_eq!(comp.leave_deduction, dec("1666.67"));
        assert_eq!(comp.pf_deduction, dec("6000.00"));
        assert_eq!(comp.final_salary, dec("39333.33"));
    }

    #[test]
    fn daily_salary_rounds_half_up() {
        // 50000 / 30 = 1666.666... -> 1666.67
        let emp = employee("50000.00", "0.00");
        let comp = calculate(&emp, &PeriodTransactions::default(), 30);
        assert_eq!(comp.daily_salary, dec("1666.67"));

        // Exact midpoint: 100.01 / 2 = 50.005 -> 50.01
        let emp = employee("100.01", "0.00");
        let comp = calculate(&emp, &PeriodTransactions::default(), 2);
        assert_eq!(comp.daily_salary, dec("50.01"));
    }

    #[test]
    fn pf_deduction_rounds_half_up_at_the_midpoint() {
        // 6666.70 * 5% = 333.335 -> 333.34
        let emp = employee("6666.70", "5.00");
        let comp = calculate(&emp, &PeriodTransactions::default(), 30);
        assert_eq!(comp.pf_deduction, dec("333.34"));
    }

    #[test]
    fn leave_deduction_prices_each_day_at_the_rounded_daily_rate() {
        // Rounding happens on the daily rate first, then multiplies:
        // 50000/30 -> 1666.67, x3 = 5000.01 (not 50000*3/30 = 5000.00)
        let emp = employee("50000.00", "0.00");
        let txns = PeriodTransactions {
            unpaid_leaves: vec![unpaid_leave(day(1)), unpaid_leave(day(2)), unpaid_leave(day(3))],
            ..Default::default()
        };

        let comp = calculate(&emp, &txns, 30);

        assert_eq!(comp.leave_deduction, dec("5000.01"));
        assert_eq!(comp.final_salary, dec("44999.99"));
    }

    #[test]
    fn divisor_is_the_actual_month_length() {
        let emp = employee("29000.00", "0.00");
        // February of a leap year
        let comp = calculate(&emp, &PeriodTransactions::default(), 29);
        assert_eq!(comp.daily_salary, dec("1000.00"));
        // Non-leap February
        let comp = calculate(&emp, &PeriodTransactions::default(), 28);
        assert_eq!(comp.daily_salary, dec("1035.71"));
    }

    #[test]
    fn overtime_and_advances_accumulate() {
        let emp = employee("10000.00", "0.00");
        let txns = PeriodTransactions {
            overtimes: vec![
                overtime(day(1), "2.00", "250.00"),
                overtime(day(5), "1.50", "300.00"),
            ],
            advances: vec![advance(day(2), "1000.00"), advance(day(9), "250.50")],
            unpaid_leaves: vec![],
        };

        let comp = calculate(&emp, &txns, 30);

        assert_eq!(comp.total_overtime, dec("950.00"));
        assert_eq!(comp.total_advances, dec("1250.50"));
        assert_eq!(comp.final_salary, dec("9699.50"));
    }
}
