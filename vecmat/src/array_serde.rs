//! Serde support for const-generic arrays, which serde only implements up to
//! fixed lengths. Arrays are written as tuples of exactly `N` elements.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

pub(crate) fn serialize<S, T, const N: usize>(array: &[T; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for value in array {
        tuple.serialize_element(value)?;
    }
    tuple.end()
}

pub(crate) fn deserialize<'de, D, T, const N: usize>(deserializer: D) -> Result<[T; N], D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_tuple(N, ArrayVisitor::<T, N>(PhantomData))
}

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for ArrayVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = [T; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an array of length {N}")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(N);
        while values.len() < N {
            match seq.next_element()? {
                Some(value) => values.push(value),
                None => return Err(de::Error::invalid_length(values.len(), &self)),
            }
        }

        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }

        values
            .try_into()
            .map_err(|values: Vec<T>| de::Error::invalid_length(values.len(), &self))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Vec3};

    #[test]
    fn nested_row_major() {
        let m: Mat2 = [[1.0, 2.0], [3.0, 4.5]].into();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.5]]");
        assert_eq!(serde_json::from_str::<Mat2>(&json).unwrap(), m);

        assert!(serde_json::from_str::<Mat2>("[[1.0,2.0],[3.0]]").is_err());
        assert!(serde_json::from_str::<Vec3>("[1.0,2.0,3.0,4.0]").is_err());
        assert_eq!(serde_json::from_str::<Vec3>("[1,2,3]").unwrap(), [1.0, 2.0, 3.0].into());
    }

    #[test]
    fn length_errors() {
        let error = serde_json::from_str::<Vec3>("[1.0,2.0,3.0,4.0,5.0,6.0]").unwrap_err();
        assert!(error.to_string().starts_with("invalid length 4,"), "{error}");

        let error = serde_json::from_str::<Vec3>("[1.0]").unwrap_err();
        assert!(error.to_string().starts_with("invalid length 1,"), "{error}");
    }
}
