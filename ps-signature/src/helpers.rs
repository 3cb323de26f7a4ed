//! Byte conversion and indexed message collection shared by signing and verification.

use alloc::vec::Vec;

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use dock_crypto_utils::try_iter::{IndexIsOutOfBounds, InvalidPair};

/// Serializes the supplied value using its compressed canonical form.
pub fn to_compressed_bytes<T: CanonicalSerialize>(
    value: &T,
) -> Result<Vec<u8>, SerializationError> {
    let mut bytes = Vec::with_capacity(value.compressed_size());
    value.serialize_compressed(&mut bytes)?;

    Ok(bytes)
}

/// Deserializes a value from its compressed canonical form. Trailing bytes are rejected.
pub fn from_compressed_bytes<T: CanonicalDeserialize>(
    mut bytes: &[u8],
) -> Result<T, SerializationError> {
    let value = T::deserialize_compressed(&mut bytes)?;

    if bytes.is_empty() {
        Ok(value)
    } else {
        Err(SerializationError::InvalidData)
    }
}

/// Collects `(index, item)` pairs ensuring every index is below `length` and indices are strictly increasing.
pub fn try_collect_indexed<I, T, E>(iter: I, length: usize) -> Result<Vec<(usize, T)>, E>
where
    I: IntoIterator<Item = (usize, T)>,
    E: From<IndexIsOutOfBounds> + From<InvalidPair<usize>>,
{
    let mut prev: Option<usize> = None;

    iter.into_iter()
        .map(|(index, item)| {
            if index >= length {
                return Err(IndexIsOutOfBounds { index, length }.into());
            }
            if let Some(prev) = prev.replace(index).filter(|&prev| prev >= index) {
                return Err(InvalidPair(prev, index).into());
            }

            Ok((index, item))
        })
        .collect()
}
