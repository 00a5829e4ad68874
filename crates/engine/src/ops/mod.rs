mod leaves;
mod salaries;

pub use leaves::{ApprovedLeave, RemainingLeave, SPECIAL_LEAVE_GRANT, SpecialLeave, UsedLeave};
pub use salaries::{BEST_INCENTIVES_LIMIT, ExcellentEmployee, IncentiveTotal, SalaryPayment};
