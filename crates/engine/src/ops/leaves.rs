use chrono::NaiveDate;
use sea_orm::{
    FromQueryResult, QueryFilter, Statement, TransactionTrait, prelude::*, sea_query::Expr,
};

use crate::{ApprovalStatus, Engine, EngineError, ResultEngine, leave_remaining, with_tx};

/// Days added to `remaining_special_leave` by a single reward.
pub const SPECIAL_LEAVE_GRANT: i32 = 2;

/// An approved leave interval together with the employee name.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct ApprovedLeave {
    pub employee_id: i32,
    pub employee_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub approval_status: i32,
}

/// Days of approved leave consumed by an employee.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct UsedLeave {
    pub employee_id: i32,
    pub employee_name: String,
    pub total_used_leave_days: i64,
}

/// Raw balance counters plus the annual balance net of approved usage.
///
/// `remaining_annual_leave_after_usage` is not floored: an employee who took
/// more approved leave than budgeted shows a negative figure.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct RemainingLeave {
    pub employee_id: i32,
    pub employee_name: String,
    pub remaining_annual_leave: i32,
    pub remaining_sick_leave: i32,
    pub remaining_special_leave: i32,
    pub remaining_annual_leave_after_usage: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpecialLeave {
    pub employee_id: i32,
    pub remaining_special_leave: i32,
}

impl From<leave_remaining::Model> for SpecialLeave {
    fn from(value: leave_remaining::Model) -> Self {
        Self {
            employee_id: value.employee_id,
            remaining_special_leave: value.remaining_special_leave,
        }
    }
}

// Inclusive day count of a leave record, evaluated by SQLite.
const LEAVE_DAYS_SQL: &str = "(julianday(l.end_date) - julianday(l.start_date) + 1)";

impl Engine {
    /// All approved leave intervals, ordered by employee and start date.
    pub async fn approved_leaves(&self) -> ResultEngine<Vec<ApprovedLeave>> {
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            "SELECT e.id AS employee_id, e.name AS employee_name, \
                    l.start_date, l.end_date, l.approval_status \
             FROM leave_records l \
             JOIN employees e ON l.employee_id = e.id \
             WHERE l.approval_status = ? \
             ORDER BY e.id, l.start_date, l.id",
            vec![ApprovalStatus::Approved.as_i32().into()],
        );

        Ok(ApprovedLeave::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }

    /// Approved leave days per employee.
    ///
    /// Employees without any approved interval are not listed.
    pub async fn used_leave_days(&self) -> ResultEngine<Vec<UsedLeave>> {
        let sql = format!(
            "SELECT e.id AS employee_id, e.name AS employee_name, \
                    CAST(SUM({LEAVE_DAYS_SQL}) AS INTEGER) AS total_used_leave_days \
             FROM leave_records l \
             JOIN employees e ON l.employee_id = e.id \
             WHERE l.approval_status = ? \
             GROUP BY e.id, e.name \
             ORDER BY e.id"
        );
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            sql,
            vec![ApprovalStatus::Approved.as_i32().into()],
        );

        Ok(UsedLeave::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }

    /// Balance counters for every employee that has a balance row.
    ///
    /// Usage comes from a left join on approved intervals, so a balance with
    /// no usage is reported with its annual counter untouched.
    pub async fn remaining_leave(&self) -> ResultEngine<Vec<RemainingLeave>> {
        let sql = format!(
            "SELECT e.id AS employee_id, e.name AS employee_name, \
                    lr.remaining_annual_leave, lr.remaining_sick_leave, \
                    lr.remaining_special_leave, \
                    lr.remaining_annual_leave \
                      - CAST(COALESCE(SUM({LEAVE_DAYS_SQL}), 0) AS INTEGER) \
                      AS remaining_annual_leave_after_usage \
             FROM leave_remaining lr \
             JOIN employees e ON lr.employee_id = e.id \
             LEFT JOIN leave_records l \
                    ON l.employee_id = e.id AND l.approval_status = ? \
             GROUP BY e.id, e.name, lr.remaining_annual_leave, \
                      lr.remaining_sick_leave, lr.remaining_special_leave \
             ORDER BY e.id"
        );
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            sql,
            vec![ApprovalStatus::Approved.as_i32().into()],
        );

        Ok(RemainingLeave::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }

    /// Remaining special leave of one employee, `None` when there is no
    /// balance row for it.
    pub async fn special_leave_of(&self, employee_id: i32) -> ResultEngine<Option<SpecialLeave>> {
        let balance = leave_remaining::Entity::find_by_id(employee_id)
            .one(&self.database)
            .await?;
        Ok(balance.map(SpecialLeave::from))
    }

    /// Grant [`SPECIAL_LEAVE_GRANT`] days of special leave and return the new
    /// balance.
    ///
    /// The increment and the read-back share one transaction: the read sees
    /// exactly this call's write, and a concurrent reward for the same
    /// employee waits on the write lock until this one commits.
    pub async fn reward_special_leave(&self, employee_id: i32) -> ResultEngine<SpecialLeave> {
        with_tx!(self, |db_tx| {
            let updated = leave_remaining::Entity::update_many()
                .col_expr(
                    leave_remaining::Column::RemainingSpecialLeave,
                    Expr::col(leave_remaining::Column::RemainingSpecialLeave)
                        .add(SPECIAL_LEAVE_GRANT),
                )
                .filter(leave_remaining::Column::EmployeeId.eq(employee_id))
                .exec(&db_tx)
                .await?;

            if updated.rows_affected == 0 {
                Err(EngineError::KeyNotFound(format!("employee {employee_id}")))
            } else {
                let balance = leave_remaining::Entity::find_by_id(employee_id)
                    .one(&db_tx)
                    .await?
                    .ok_or_else(|| EngineError::KeyNotFound(format!("employee {employee_id}")))?;

                tracing::debug!(
                    employee_id,
                    remaining_special_leave = balance.remaining_special_leave,
                    "special leave granted"
                );
                Ok(SpecialLeave::from(balance))
            }
        })
    }
}
