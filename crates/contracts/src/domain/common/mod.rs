//! Common wire types shared by all resources

mod list_response;

pub use list_response::ListResponse;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`.
///
/// The API stores `details`/`measurements` as JSON columns that may come
/// back as `null` for old rows.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
