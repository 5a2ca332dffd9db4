//! Serde support for [`Set`] and [`Canonical`].
//!
//! A set is serialized as a sequence of its elements. Deserialization
//! accepts any sequence, inserting every element and collapsing
//! duplicates; a single malformed element fails the whole decode.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Canonical, Set};

/// Upper bound on the capacity reserved from an untrusted size hint.
const MAXIMUM_PREALLOCATION: usize = 4096;

impl<E: Serialize> Serialize for Set<E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<E: Serialize> Serialize for Canonical<'_, E> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

struct SetVisitor<E> {
    marker: PhantomData<E>,
}

impl<E> SetVisitor<E> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, E> Visitor<'de> for SetVisitor<E>
where
    E: Deserialize<'de> + Eq + Hash,
{
    type Value = Set<E>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAXIMUM_PREALLOCATION);
        let mut set = Set::with_capacity(capacity);
        #[cfg(feature = "tracing")]
        let mut received: usize = 0;
        while let Some(element) = seq.next_element()? {
            #[cfg(feature = "tracing")]
            {
                received += 1;
            }
            set.insert(element);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            received,
            distinct = set.len(),
            duplicates = received - set.len(),
            "decoded set from sequence"
        );

        Ok(set)
    }
}

impl<'de, E> Deserialize<'de> for Set<E>
where
    E: Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}
