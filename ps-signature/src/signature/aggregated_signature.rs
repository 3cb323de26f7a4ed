use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use ark_ec::pairing::Pairing;
use ark_serialize::*;
use ark_std::rand::RngCore;

use super::ps_signature::Signature;
use crate::{
    helpers::{from_compressed_bytes, to_compressed_bytes},
    setup::{MessageSecret, PublicKey, SecretKey, SignatureParams},
    PSError,
};

type Result<T, E = PSError> = core::result::Result<T, E>;

/// Sequentially aggregated signature tagged with the amount of message slots it covers.
/// Every co-signer appends the message bound to the next slot, so the chain of `n` links
/// is valid for the first `n` messages of the full public key.
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct AggregatedSignature<E: Pairing> {
    signature: Signature<E>,
    message_count: usize,
}

impl<E: Pairing> AggregatedSignature<E> {
    /// Starts the chain with the message bound to slot 1.
    pub fn initiate<R: RngCore>(
        rng: &mut R,
        message: &E::ScalarField,
        secret_key: &SecretKey<E::ScalarField>,
        params: &SignatureParams<E>,
    ) -> Result<Self> {
        let signature = Signature::initiate_aggregation(rng, message, secret_key, params)?;

        Ok(Self {
            signature,
            message_count: 1,
        })
    }

    /// Appends the message bound to the slot of the supplied secret, which must be the next one.
    pub fn extend<R: RngCore>(
        &self,
        rng: &mut R,
        message_secret: &MessageSecret<E::ScalarField>,
        message: &E::ScalarField,
    ) -> Result<Self> {
        let expected = self
            .message_count
            .checked_add(1)
            .ok_or(PSError::MessageCountOverflow(self.message_count))?;
        if message_secret.slot() != expected {
            Err(PSError::UnexpectedSlot {
                received: message_secret.slot(),
                expected,
            })?
        }

        let signature = self
            .signature
            .extend_aggregation(rng, message_secret.as_ref(), message);

        Ok(Self {
            signature,
            message_count: expected,
        })
    }

    /// Verifies the chain over exactly `message_count` messages.
    pub fn verify(
        &self,
        messages: &[E::ScalarField],
        public_key: &PublicKey<E>,
        params: &SignatureParams<E>,
    ) -> Result<()> {
        if messages.len() != self.message_count {
            Err(PSError::InvalidMessageCount {
                received: messages.len(),
                expected: self.message_count,
            })?
        }

        self.signature.verify(messages, public_key, params)
    }

    pub fn signature(&self) -> &Signature<E> {
        &self.signature
    }

    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Drops the tag. The resulting signature is verified with `Signature::verify` over the same messages.
    pub fn into_signature(self) -> Signature<E> {
        self.signature
    }

    /// Encodes as `sigma_1 || sigma_2 || message_count` in compressed canonical form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        to_compressed_bytes(self).map_err(Into::into)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        from_compressed_bytes(bytes).map_err(Into::into)
    }
}
