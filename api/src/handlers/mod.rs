//! Shared response builders for route handlers

pub mod error;

pub use error::{
    handle_domain_error, json_error_handler, missing_bearer_response, query_error_handler,
    status_for, validation_error_response,
};
