//! A ramp: six values ordered H1 through H6.

use crate::heading::HeadingLevel;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ramp<T>([T; 6]);

impl<T> Ramp<T> {
    pub const fn new(values: [T; 6]) -> Self {
        Self(values)
    }

    /// Builds a ramp by evaluating `f` once per level, H1 first.
    pub fn from_fn(mut f: impl FnMut(HeadingLevel) -> T) -> Self {
        Self(HeadingLevel::ALL.map(&mut f))
    }

    pub fn get(&self, level: HeadingLevel) -> &T {
        &self.0[level.index()]
    }

    /// Iterates `(level, value)` pairs from H1 down to H6.
    pub fn iter(&self) -> impl Iterator<Item = (HeadingLevel, &T)> + '_ {
        HeadingLevel::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Ramp<U> {
        Ramp::from_fn(|level| f(self.get(level)))
    }

    pub fn values(&self) -> &[T; 6] {
        &self.0
    }

    pub fn into_values(self) -> [T; 6] {
        self.0
    }
}

impl<T> Index<HeadingLevel> for Ramp<T> {
    type Output = T;

    fn index(&self, level: HeadingLevel) -> &T {
        self.get(level)
    }
}

impl<T> IndexMut<HeadingLevel> for Ramp<T> {
    fn index_mut(&mut self, level: HeadingLevel) -> &mut T {
        &mut self.0[level.index()]
    }
}

impl<T> From<[T; 6]> for Ramp<T> {
    fn from(values: [T; 6]) -> Self {
        Self(values)
    }
}

impl<T: Serialize> Serialize for Ramp<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Ramp<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        let len = values.len();
        let array: [T; 6] = values.try_into().map_err(|_| {
            de::Error::invalid_length(len, &"exactly six values, one per heading level")
        })?;
        Ok(Self(array))
    }
}
