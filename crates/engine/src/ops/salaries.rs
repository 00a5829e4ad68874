use chrono::NaiveDate;
use sea_orm::{FromQueryResult, Statement, prelude::*};

use crate::{Engine, EngineError, ResultEngine};

/// Size of the best-incentives ranking.
pub const BEST_INCENTIVES_LIMIT: i64 = 3;

#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct SalaryPayment {
    pub employee_id: i32,
    pub employee_name: String,
    pub payment_date: NaiveDate,
    pub base_salary: i64,
    pub incentive: i64,
}

/// Incentives earned by one employee over a period.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct IncentiveTotal {
    pub employee_id: i32,
    pub employee_name: String,
    pub total_incentive: i64,
}

/// The employee with the highest incentive total over a period.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcellentEmployee {
    pub employee_id: i32,
    pub employee_name: String,
}

impl From<IncentiveTotal> for ExcellentEmployee {
    fn from(value: IncentiveTotal) -> Self {
        Self {
            employee_id: value.employee_id,
            employee_name: value.employee_name,
        }
    }
}

fn validate_period(start: NaiveDate, end: NaiveDate) -> ResultEngine<()> {
    if start > end {
        return Err(EngineError::InvalidPeriod(format!(
            "period start {start} is after period end {end}"
        )));
    }
    Ok(())
}

impl Engine {
    /// The whole payment ledger with employee names.
    pub async fn salary_payments(&self) -> ResultEngine<Vec<SalaryPayment>> {
        let stmt = Statement::from_string(
            self.database.get_database_backend(),
            "SELECT e.id AS employee_id, e.name AS employee_name, \
                    s.payment_date, s.base_salary, s.incentive \
             FROM salary_payments s \
             JOIN employees e ON s.employee_id = e.id \
             ORDER BY s.payment_date, s.id",
        );

        Ok(SalaryPayment::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }

    /// Top [`BEST_INCENTIVES_LIMIT`] employees by incentives paid within
    /// `[start, end]`, highest first. Ties are ordered by employee id.
    pub async fn best_incentives(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ResultEngine<Vec<IncentiveTotal>> {
        self.top_incentives(start, end, BEST_INCENTIVES_LIMIT).await
    }

    /// The single top incentive earner within `[start, end]`, if any payment
    /// falls in the period.
    pub async fn excellent_employee(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ResultEngine<Option<ExcellentEmployee>> {
        let top = self.top_incentives(start, end, 1).await?;
        Ok(top.into_iter().next().map(ExcellentEmployee::from))
    }

    async fn top_incentives(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        limit: i64,
    ) -> ResultEngine<Vec<IncentiveTotal>> {
        validate_period(start, end)?;

        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            "SELECT e.id AS employee_id, e.name AS employee_name, \
                    SUM(s.incentive) AS total_incentive \
             FROM salary_payments s \
             JOIN employees e ON s.employee_id = e.id \
             WHERE s.payment_date BETWEEN ? AND ? \
             GROUP BY e.id, e.name \
             ORDER BY total_incentive DESC, e.id ASC \
             LIMIT ?",
            vec![start.into(), end.into(), limit.into()],
        );

        Ok(IncentiveTotal::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }
}
