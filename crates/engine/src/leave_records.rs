//! Leave intervals.
//!
//! A leave record covers the closed range `[start_date, end_date]`: a leave
//! starting and ending on the same day lasts one day. Records are produced by
//! the approval workflow; only approved ones count toward usage.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;

use crate::EngineError;

/// Approval state of a leave record, stored as an integer code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }
}

impl TryFrom<i32> for ApprovalStatus {
    type Error = EngineError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Approved),
            2 => Ok(Self::Rejected),
            other => Err(EngineError::InvalidStatus(other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub approval_status: i32,
}

impl Model {
    pub fn status(&self) -> Result<ApprovalStatus, EngineError> {
        ApprovalStatus::try_from(self.approval_status)
    }

    /// Number of leave days, both ends included.
    pub fn duration_days(&self) -> i64 {
        leave_days(self.start_date, self.end_date)
    }
}

/// Inclusive day count between two dates.
pub fn leave_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Employees,
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
