//! Schema-driven editing and read-only rendering of `details` and
//! `measurements` bags.

mod detail;
mod fields;

pub use detail::SchemaDetailSection;
pub use fields::SchemaFields;
