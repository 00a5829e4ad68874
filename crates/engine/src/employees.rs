//! Employees table.
//!
//! Employees are immutable from the service point of view: they are created
//! by the HR back office and only read here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::leave_records::Entity")]
    LeaveRecords,
    #[sea_orm(has_one = "super::leave_remaining::Entity")]
    LeaveRemaining,
    #[sea_orm(has_many = "super::salary_payments::Entity")]
    SalaryPayments,
}

impl Related<super::leave_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveRecords.def()
    }
}

impl Related<super::leave_remaining::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveRemaining.def()
    }
}

impl Related<super::salary_payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SalaryPayments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
