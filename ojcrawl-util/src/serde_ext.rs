//! Helpers for deserializing loosely typed upstream payloads.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` the same way as a missing field.
///
/// Use together with `#[serde(default)]`.
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
