//! Mapping of byte-string messages into the scalar field before signing.
//!
//! [`ModOrderReduction`] reads the bytes as a big-endian integer and reduces it modulo the field order.
//! It is neither collision resistant nor domain separated: messages longer than the field size,
//! or differing by a multiple of the order, collide. [`HashToScalar`] hashes the message to the
//! field under a domain separation tag and should be preferred whenever messages are attacker chosen.

use alloc::vec::Vec;
use ark_ff::{
    field_hashers::{DefaultFieldHasher, HashToField},
    PrimeField,
};
use core::marker::PhantomData;
use dock_crypto_utils::aliases::FullDigest;

/// Encodes messages as scalars.
pub trait MessageEncoder<F: PrimeField> {
    fn encode(&self, message: &[u8]) -> F;

    /// Encodes each message preserving order, so the `i`-th output is bound to message slot `i`.
    fn encode_all<I, M>(&self, messages: I) -> Vec<F>
    where
        I: IntoIterator<Item = M>,
        M: AsRef<[u8]>,
    {
        messages
            .into_iter()
            .map(|message| self.encode(message.as_ref()))
            .collect()
    }
}

/// Direct big-endian decoding of the message bytes reduced modulo the field order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModOrderReduction;

impl<F: PrimeField> MessageEncoder<F> for ModOrderReduction {
    fn encode(&self, message: &[u8]) -> F {
        F::from_be_bytes_mod_order(message)
    }
}

/// Hashes the message to the field using `DefaultFieldHasher` keyed by a domain separation tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashToScalar<D> {
    dst: Vec<u8>,
    _digest: PhantomData<D>,
}

impl<D: FullDigest> HashToScalar<D> {
    pub fn new(dst: &[u8]) -> Self {
        Self {
            dst: dst.to_vec(),
            _digest: PhantomData,
        }
    }
}

impl<F: PrimeField, D: FullDigest> MessageEncoder<F> for HashToScalar<D> {
    fn encode(&self, message: &[u8]) -> F {
        let hasher = <DefaultFieldHasher<D> as HashToField<F>>::new(&self.dst);

        // A single element is requested so exactly one is returned
        hasher
            .hash_to_field(message, 1)
            .pop()
            .unwrap_or_default()
    }
}

/// Encodes a message using [`ModOrderReduction`].
pub fn encode_message<F: PrimeField>(message: impl AsRef<[u8]>) -> F {
    ModOrderReduction.encode(message.as_ref())
}

/// Encodes messages using [`ModOrderReduction`].
pub fn encode_messages<F, I, M>(messages: I) -> Vec<F>
where
    F: PrimeField,
    I: IntoIterator<Item = M>,
    M: AsRef<[u8]>,
{
    ModOrderReduction.encode_all(messages)
}
