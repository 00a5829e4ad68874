use api_types::Message;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use period::month_window;
pub use server::{ServerState, router, run_with_listener};

mod leave;
mod period;
mod salary;
mod server;

pub enum ServerError {
    Engine(EngineError),
}

/// Body of every non-404 error answer.
#[derive(Serialize)]
struct Error {
    status: &'static str,
    message: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::InvalidId(_)
        | EngineError::InvalidPeriod(_)
        | EngineError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::KeyNotFound(what) => format!("{what} not found"),
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
        };

        if status == StatusCode::NOT_FOUND {
            return (status, Json(Message { message })).into_response();
        }

        (
            status,
            Json(Error {
                status: "error",
                message,
            }),
        )
            .into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res =
            ServerError::from(EngineError::KeyNotFound("employee 9".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_database_maps_to_500() {
        let res = ServerError::from(EngineError::Database(DbErr::Custom("boom".to_string())))
            .into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn engine_invalid_id_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidId("abc".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_invalid_period_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidPeriod("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_message_does_not_leak_details() {
        let message =
            message_for_engine_error(EngineError::Database(DbErr::Custom("secret".to_string())));
        assert_eq!(message, "internal server error");
    }

    #[test]
    fn not_found_message_names_the_missing_key() {
        let message = message_for_engine_error(EngineError::KeyNotFound("employee 9".to_string()));
        assert_eq!(message, "employee 9 not found");
    }
}
