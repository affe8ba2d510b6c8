use std::fmt;
use std::marker::PhantomData;

use serde_::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde_::ser::{Serialize, Serializer};

use crate::SegDeque;

impl<T> Serialize for SegDeque<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

/// Deserializes any sequence into a deque with the default segment capacity.
impl<'de, T> Deserialize<'de> for SegDeque<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SegDequeVisitor<T> {
            marker: PhantomData<T>,
        }
        impl<'de, T> Visitor<'de> for SegDequeVisitor<T>
        where
            T: Deserialize<'de>,
        {
            type Value = SegDeque<T>;
            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }
            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut values = SegDeque::new();
                while let Some(value) = seq.next_element()? {
                    values.push_back(value);
                }
                Ok(values)
            }
        }
        let visitor = SegDequeVisitor {
            marker: PhantomData,
        };
        deserializer.deserialize_seq(visitor)
    }
}
