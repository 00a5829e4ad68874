//! Salary and incentive API endpoints

use api_types::salary::{ExcellentEmployee, IncentiveTotal, SalaryPayment};
use axum::{Json, extract::State};
use engine::EngineError;

use crate::{ServerError, period::current_month_window, server::ServerState};

/// Handle requests for the salary payment ledger
pub async fn salary_payments(
    State(state): State<ServerState>,
) -> Result<Json<Vec<SalaryPayment>>, ServerError> {
    let rows = state.engine.salary_payments().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| SalaryPayment {
                employee_id: row.employee_id,
                employee_name: row.employee_name,
                payment_date: row.payment_date,
                base_salary: row.base_salary,
                incentive: row.incentive,
            })
            .collect(),
    ))
}

/// Handle requests for this month's top incentive earners
pub async fn best_incentives(
    State(state): State<ServerState>,
) -> Result<Json<Vec<IncentiveTotal>>, ServerError> {
    let (start, end) = current_month_window();
    let rows = state.engine.best_incentives(start, end).await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| IncentiveTotal {
                employee_id: row.employee_id,
                employee_name: row.employee_name,
                total_incentive: row.total_incentive,
            })
            .collect(),
    ))
}

/// Handle requests for this month's single best incentive earner
pub async fn excellent_employee(
    State(state): State<ServerState>,
) -> Result<Json<ExcellentEmployee>, ServerError> {
    let (start, end) = current_month_window();
    let best = state
        .engine
        .excellent_employee(start, end)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("excellent employee for {start}..{end}")))?;

    Ok(Json(ExcellentEmployee {
        employee_id: best.employee_id,
        employee_name: best.employee_name,
    }))
}
