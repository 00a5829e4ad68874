//! Leave-balance and incentive reporting engine.
//!
//! [`Engine`] wraps the store connection and exposes the read-only reports
//! (approved leaves, usage, balances, payroll, incentive rankings) plus the
//! single write path, [`Engine::reward_special_leave`].

use sea_orm::DatabaseConnection;

pub use error::EngineError;
pub use leave_records::{ApprovalStatus, leave_days};
pub use ops::{
    ApprovedLeave, BEST_INCENTIVES_LIMIT, ExcellentEmployee, IncentiveTotal, RemainingLeave,
    SPECIAL_LEAVE_GRANT, SalaryPayment, SpecialLeave, UsedLeave,
};

pub mod employees;
pub mod leave_records;
pub mod leave_remaining;
pub mod salary_payments;

mod error;
mod ops;

type ResultEngine<T> = Result<T, EngineError>;

/// Run a block inside a DB transaction, committing on success.
///
/// An early return (or `Err`) drops the transaction, which rolls it back.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Parse an employee identifier received from the outside world.
///
/// Only positive integers are valid ids; anything else is rejected before a
/// statement is ever sent to the store.
pub fn parse_employee_id(value: &str) -> ResultEngine<i32> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(EngineError::InvalidId(format!(
            "employee id must be a positive integer, got \"{value}\""
        ))),
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
