//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use tetherx_core::log_op_start;
/// log_op_start!("attach_graph");
/// log_op_start!("attach_graph", absolute_path = "/board");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tetherx_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tetherx_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use tetherx_core::log_op_end;
/// log_op_end!("attach_graph", duration_ms = 42);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tetherx_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = tetherx_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Records the stable error code alongside the display form of the error.
///
/// # Example
///
/// ```ignore
/// # use tetherx_core::{log_op_error, errors::TetherXError};
/// let err = TetherXError::AttachFailed {
///     absolute_path: "/board".to_string(),
///     message: "context rejected".to_string(),
/// };
/// log_op_error!("attach_graph", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let err: $crate::errors::TetherXError = $err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tetherx_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
            error = %err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let err: $crate::errors::TetherXError = $err;
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = tetherx_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_code = err.code(),
            error = %err,
            $($field)*
        );
    }};
}
