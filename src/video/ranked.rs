use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize};

/// A single numeric quality key: width for progressive files, bitrate for DASH streams.
pub trait Ranked {
    fn rank(&self) -> u64;
}

/// A collection kept sorted ascending by [`Ranked::rank`].
///
/// Sorting happens once, when the list is built (deserialization included),
/// so `best` and `worst` are plain reads of the two ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedList<T>(Vec<T>);

impl<T: Ranked> RankedList<T> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_by_key(T::rank);
        Self(items)
    }

    /// Highest ranked element.
    pub fn best(&self) -> Option<&T> {
        self.0.last()
    }

    /// Lowest ranked element.
    pub fn worst(&self) -> Option<&T> {
        self.0.first()
    }

    /// Runs `f` over every element, then restores the ordering.
    pub fn try_for_each_mut<E>(
        &mut self,
        mut f: impl FnMut(&mut T) -> Result<(), E>,
    ) -> Result<(), E> {
        let outcome = self.0.iter_mut().try_for_each(&mut f);
        self.0.sort_by_key(T::rank);
        outcome
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Default for RankedList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for RankedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Ranked> From<Vec<T>> for RankedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Ranked> FromIterator<T> for RankedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a RankedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, T> Deserialize<'de> for RankedList<T>
where
    T: Ranked + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::new)
    }
}
