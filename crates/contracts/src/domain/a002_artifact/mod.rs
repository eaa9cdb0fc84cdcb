pub mod aggregate;
pub mod form;
pub mod unique_check;
