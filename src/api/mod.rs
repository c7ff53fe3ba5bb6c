pub mod advance;
pub mod dashboard;
pub mod employee;
pub mod leave;
pub mod overtime;
pub mod salary;
