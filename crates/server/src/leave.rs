//! Leave API endpoints

use api_types::leave::{ApprovedLeave, RemainingLeave, SpecialLeave, UsedLeave};
use axum::{
    Json,
    extract::{Path, State},
};
use engine::{EngineError, parse_employee_id};

use crate::{ServerError, server::ServerState};

fn special_leave_view(balance: engine::SpecialLeave) -> SpecialLeave {
    SpecialLeave {
        employee_id: balance.employee_id,
        remaining_special_leave: balance.remaining_special_leave,
    }
}

/// Handle requests for listing approved leave intervals
pub async fn approved_leaves(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ApprovedLeave>>, ServerError> {
    let rows = state.engine.approved_leaves().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| ApprovedLeave {
                employee_id: row.employee_id,
                employee_name: row.employee_name,
                start_date: row.start_date,
                end_date: row.end_date,
                approval_status: row.approval_status,
            })
            .collect(),
    ))
}

/// Handle requests for approved leave days per employee
pub async fn used_leave(
    State(state): State<ServerState>,
) -> Result<Json<Vec<UsedLeave>>, ServerError> {
    let rows = state.engine.used_leave_days().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| UsedLeave {
                employee_id: row.employee_id,
                employee_name: row.employee_name,
                total_used_leave_days: row.total_used_leave_days,
            })
            .collect(),
    ))
}

/// Handle requests for leave balances net of approved usage
pub async fn remaining_leave(
    State(state): State<ServerState>,
) -> Result<Json<Vec<RemainingLeave>>, ServerError> {
    let rows = state.engine.remaining_leave().await?;

    Ok(Json(
        rows.into_iter()
            .map(|row| RemainingLeave {
                employee_id: row.employee_id,
                employee_name: row.employee_name,
                remaining_annual_leave: row.remaining_annual_leave,
                remaining_sick_leave: row.remaining_sick_leave,
                remaining_special_leave: row.remaining_special_leave,
                remaining_annual_leave_after_usage: row.remaining_annual_leave_after_usage,
            })
            .collect(),
    ))
}

/// Handle requests for one employee's special leave balance
pub async fn special_leave(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> Result<Json<SpecialLeave>, ServerError> {
    let employee_id = parse_employee_id(&employee_id)?;

    let balance = state
        .engine
        .special_leave_of(employee_id)
        .await?
        .ok_or_else(|| EngineError::KeyNotFound(format!("employee {employee_id}")))?;

    Ok(Json(special_leave_view(balance)))
}

/// Handle requests for granting special leave to an employee
pub async fn reward_special_leave(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> Result<Json<SpecialLeave>, ServerError> {
    let employee_id = parse_employee_id(&employee_id)?;

    let balance = state.engine.reward_special_leave(employee_id).await?;
    tracing::info!(
        employee_id,
        remaining_special_leave = balance.remaining_special_leave,
        "special leave rewarded"
    );

    Ok(Json(special_leave_view(balance)))
}
