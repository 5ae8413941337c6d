//! Field-presence wrapper for partial updates.
//!
//! A `Patch<T>` field declared with `#[serde(default)]` is [`Patch::Absent`]
//! when the key is missing from the request body and [`Patch::Present`] when
//! it is there, whatever its value. For nullable attributes use
//! `Patch<Option<T>>`: an explicit `null` becomes `Present(None)` and is
//! applied, while an omitted key leaves the stored value alone.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Present(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Present)
    }
}
