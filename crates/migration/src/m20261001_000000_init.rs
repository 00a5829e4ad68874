//! Initial schema migration.
//!
//! Creates the four tables the HR service reads and writes:
//!
//! - `employees`: identity and display name
//! - `leave_records`: leave intervals produced by the approval workflow
//! - `leave_remaining`: one balance row per employee (annual, sick, special)
//! - `salary_payments`: append-only payroll ledger with incentives

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Employees {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum LeaveRecords {
    Table,
    Id,
    EmployeeId,
    StartDate,
    EndDate,
    ApprovalStatus,
}

#[derive(Iden)]
enum LeaveRemaining {
    Table,
    EmployeeId,
    RemainingAnnualLeave,
    RemainingSickLeave,
    RemainingSpecialLeave,
}

#[derive(Iden)]
enum SalaryPayments {
    Table,
    Id,
    EmployeeId,
    PaymentDate,
    BaseSalary,
    Incentive,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Employees
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Leave records
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(LeaveRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LeaveRecords::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(LeaveRecords::StartDate).date().not_null())
                    .col(ColumnDef::new(LeaveRecords::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(LeaveRecords::ApprovalStatus)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .check(Expr::col(LeaveRecords::StartDate).lte(Expr::col(LeaveRecords::EndDate)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-leave_records-employee_id")
                            .from(LeaveRecords::Table, LeaveRecords::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-leave_records-employee_id-status")
                    .table(LeaveRecords::Table)
                    .col(LeaveRecords::EmployeeId)
                    .col(LeaveRecords::ApprovalStatus)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Leave balances
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(LeaveRemaining::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LeaveRemaining::EmployeeId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LeaveRemaining::RemainingAnnualLeave)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LeaveRemaining::RemainingSickLeave)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LeaveRemaining::RemainingSpecialLeave)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-leave_remaining-employee_id")
                            .from(LeaveRemaining::Table, LeaveRemaining::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Salary payments
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(SalaryPayments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalaryPayments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalaryPayments::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(SalaryPayments::PaymentDate).date().not_null())
                    .col(ColumnDef::new(SalaryPayments::BaseSalary).big_integer().not_null())
                    .col(
                        ColumnDef::new(SalaryPayments::Incentive)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .check(Expr::col(SalaryPayments::Incentive).gte(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-salary_payments-employee_id")
                            .from(SalaryPayments::Table, SalaryPayments::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-salary_payments-payment_date")
                    .table(SalaryPayments::Table)
                    .col(SalaryPayments::PaymentDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Reverse order of creation (FK dependencies)
        manager
            .drop_table(Table::drop().table(SalaryPayments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeaveRemaining::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LeaveRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        Ok(())
    }
}
