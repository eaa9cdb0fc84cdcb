pub mod api_error;
pub mod artifact_schema;
