use axum::{
    Router,
    routing::{get, post},
};

use std::{future::Future, sync::Arc};

use crate::{leave, salary};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Build the HTTP routes on top of `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/approved-leaves", get(leave::approved_leaves))
        .route("/used-leave", get(leave::used_leave))
        .route("/remaining-leave", get(leave::remaining_leave))
        .route("/special-leave/{employee_id}", get(leave::special_leave))
        .route(
            "/special-leave/reward/{employee_id}",
            post(leave::reward_special_leave),
        )
        .route("/salary-payments", get(salary::salary_payments))
        .route("/best-incentives", get(salary::best_incentives))
        .route("/excellent-employee", get(salary::excellent_employee))
        .with_state(state)
}

/// Serve until `shutdown` resolves, then let in-flight requests finish.
pub async fn run_with_listener<F>(
    engine: Engine,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown)
        .await
}
