use crate::api::advance::CreateAdvance;
use crate::api::dashboard::DashboardResponse;
use crate::api::employee::{CreateEmployee, EmployeeListResponse, EmployeeQuery};
use crate::api::leave::{CreateLeave, LeaveFilter};
use crate::api::overtime::CreateOvertime;
use crate::api::salary::SalaryGenerationRequest;
use crate::model::advance::Advance;
use crate::model::employee::Employee;
use crate::model::leave::{Leave, LeaveType};
use crate::model::overtime::Overtime;
use crate::model::salary::{DetailType, Salary, SalaryDetail};
use crate::payroll::breakdown::DetailLine;
use crate::payroll::generator::SalaryPreview;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payman API",
        version = "1.0.0",
        description = r#"
## Employee Payroll Service

Records base pay, overtime, cash advances and leave per employee, computes a
monthly salary figure with an auditable date-wise ledger, and delivers
payslip summaries over SMS.

### Key Features
- **Employee Management** — profiles with base salary and PF rate
- **Transactions** — overtime, cash advances, paid/unpaid leave
- **Salary Generation** — one generation per employee per month, atomic
  with its ledger; preview before generating
- **Payslip SMS** — date-wise breakdown plus subtotals, resendable

Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::update_employee,
        crate::api::employee::deactivate_employee,

        crate::api::overtime::create_overtime,
        crate::api::overtime::list_overtimes,
        crate::api::overtime::list_overtimes_for_month,
        crate::api::overtime::delete_overtime,

        crate::api::advance::create_advance,
        crate::api::advance::list_advances,
        crate::api::advance::list_advances_for_month,

        crate::api::leave::create_leave,
        crate::api::leave::list_leaves,
        crate::api::leave::list_leaves_for_month,

        crate::api::salary::preview_salary,
        crate::api::salary::generate_salary,
        crate::api::salary::salary_history,
        crate::api::salary::resend_sms,

        crate::api::dashboard::get_dashboard
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            EmployeeQuery,
            EmployeeListResponse,
            Overtime,
            CreateOvertime,
            Advance,
            CreateAdvance,
            Leave,
            LeaveType,
            CreateLeave,
            LeaveFilter,
            Salary,
            SalaryDetail,
            DetailType,
            DetailLine,
            SalaryPreview,
            SalaryGenerationRequest,
            DashboardResponse
        )
    ),
    tags(
        (name = "Employee", description = "Employee profile APIs"),
        (name = "Overtime", description = "Overtime entry APIs"),
        (name = "Advance", description = "Cash advance APIs"),
        (name = "Leave", description = "Leave entry APIs"),
        (name = "Salary", description = "Salary preview, generation, history and SMS APIs"),
        (name = "Dashboard", description = "Payroll overview APIs"),
    )
)]
pub struct ApiDoc;
