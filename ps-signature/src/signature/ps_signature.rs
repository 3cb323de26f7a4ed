use alloc::vec::Vec;
use core::slice;

use ark_ec::{pairing::Pairing, AffineRepr, VariableBaseMSM};
use ark_serialize::*;
use ark_std::{end_timer, rand::RngCore, start_timer, UniformRand, Zero};
use dock_crypto_utils::{misc::rand, pairs::Pairs, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::{
    helpers::{from_compressed_bytes, to_compressed_bytes, try_collect_indexed},
    setup::{PublicKey, SecretKey, SignatureParams},
    PSError,
};

type Result<T, E = PSError> = core::result::Result<T, E>;

/// Pointcheval-Sanders signature over one or more messages.
/// The same pair `(sigma_1, sigma_2)` is produced by direct signing and by sequential aggregation,
/// so both are checked by the same pairing equation.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct Signature<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) sigma_1: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub(crate) sigma_2: E::G1Affine,
}

impl<E: Pairing> Signature<E> {
    /// Signs messages where message `i` is bound to the key slot `i + 1`. A random `h` is chosen for `sigma_1`
    /// so different calls to this method with same messages and secret key will give different signatures.
    /// Fewer messages than key slots are allowed, the remaining slots are left unbound.
    pub fn new<R: RngCore>(
        rng: &mut R,
        messages: &[E::ScalarField],
        secret_key: &SecretKey<E::ScalarField>,
    ) -> Result<Self> {
        let sign_time = start_timer!(|| "PS sign");
        let exponent = secret_key.signing_exponent(messages)?;
        let h = E::G1::rand(rng);

        let signature = Self::from_sigma_1(h, exponent);
        end_timer!(sign_time);

        Ok(signature)
    }

    /// Signs a single message bound to the first message slot.
    pub fn new_single<R: RngCore>(
        rng: &mut R,
        message: &E::ScalarField,
        secret_key: &SecretKey<E::ScalarField>,
    ) -> Result<Self> {
        Self::new(rng, slice::from_ref(message), secret_key)
    }

    /// Signs messages explicitly paired with their (zero-based) message index.
    /// Indices must be unique and sorted in increasing order.
    pub fn new_indexed<R: RngCore>(
        rng: &mut R,
        indexed_messages: &[(usize, E::ScalarField)],
        secret_key: &SecretKey<E::ScalarField>,
    ) -> Result<Self> {
        let sign_time = start_timer!(|| "PS sign indexed");
        let exponent = secret_key.indexed_signing_exponent(indexed_messages)?;
        let h = E::G1::rand(rng);

        let signature = Self::from_sigma_1(h, exponent);
        end_timer!(sign_time);

        Ok(signature)
    }

    /// Starts a sequential aggregation chain by signing the message bound to the first slot.
    /// Unlike `new`, `sigma_1` is a random power of `g1` so that co-signers can re-randomize it.
    pub fn initiate_aggregation<R: RngCore>(
        rng: &mut R,
        message: &E::ScalarField,
        secret_key: &SecretKey<E::ScalarField>,
        &SignatureParams { g1, .. }: &SignatureParams<E>,
    ) -> Result<Self> {
        let aggr_time = start_timer!(|| "PS initiate aggregation");
        let exponent = secret_key.signing_exponent(slice::from_ref(message))?;
        let t: E::ScalarField = rand(rng);

        let signature = Self::from_sigma_1(g1 * t, exponent);
        end_timer!(aggr_time);

        Ok(signature)
    }

    /// Extends the aggregation chain with a message bound to the slot of `y`. Only that slot's secret is required.
    ///
    /// `(sigma_1 * t, (sigma_1 * (y * m) + sigma_2) * t)`
    pub fn extend_aggregation<R: RngCore>(
        &self,
        rng: &mut R,
        y: &E::ScalarField,
        message: &E::ScalarField,
    ) -> Self {
        let aggr_time = start_timer!(|| "PS extend aggregation");
        let t: E::ScalarField = rand(rng);

        let sigma_1 = self.sigma_1 * t;
        let sigma_2 = (self.sigma_1 * (*y * message) + self.sigma_2) * t;
        end_timer!(aggr_time);

        Self::combine(sigma_1, sigma_2)
    }

    /// Produces an unlinkable signature over the same messages: `(sigma_1 * r, sigma_2 * r)`.
    pub fn randomize<R: RngCore>(&self, rng: &mut R) -> Self {
        let r: E::ScalarField = rand(rng);

        Self::combine(self.sigma_1 * r, self.sigma_2 * r)
    }

    /// Verifies the signature over messages bound to the first key slots in order.
    /// Sequentially aggregated signatures are verified the same way.
    pub fn verify(
        &self,
        messages: &[E::ScalarField],
        PublicKey { x_tilde, y_tilde }: &PublicKey<E>,
        &SignatureParams { g2, .. }: &SignatureParams<E>,
    ) -> Result<()> {
        if messages.is_empty() {
            Err(PSError::NoMessages)?
        }
        let verify_time = start_timer!(|| "PS verify");

        // `\sum_{i}(y_tilde_{i} * m_{i})`
        let y_tilde_mul_m = Pairs::new_truncate_left(y_tilde, messages)
            .ok_or(PSError::InvalidMessageCount {
                received: messages.len(),
                expected: y_tilde.len(),
            })?
            .msm();

        let res = self.verify_pairing(y_tilde_mul_m + x_tilde, g2);
        end_timer!(verify_time);

        res
    }

    /// Verifies the signature over a single message bound to the first message slot.
    pub fn verify_single(
        &self,
        message: &E::ScalarField,
        public_key: &PublicKey<E>,
        params: &SignatureParams<E>,
    ) -> Result<()> {
        self.verify(slice::from_ref(message), public_key, params)
    }

    /// Verifies the signature over messages explicitly paired with their message index.
    pub fn verify_indexed(
        &self,
        indexed_messages: &[(usize, E::ScalarField)],
        PublicKey { x_tilde, y_tilde }: &PublicKey<E>,
        &SignatureParams { g2, .. }: &SignatureParams<E>,
    ) -> Result<()> {
        if indexed_messages.is_empty() {
            Err(PSError::NoMessages)?
        }
        let verify_time = start_timer!(|| "PS verify indexed");

        let (bases, messages): (Vec<_>, Vec<_>) =
            try_collect_indexed::<_, _, PSError>(indexed_messages.iter().copied(), y_tilde.len())?
                .into_iter()
                .map(|(index, message)| (y_tilde[index], message))
                .unzip();
        let y_tilde_mul_m = E::G2::msm_unchecked(&bases, &messages);

        let res = self.verify_pairing(y_tilde_mul_m + x_tilde, g2);
        end_timer!(verify_time);

        res
    }

    /// Checks if a signature has zero elements. A valid signature should not have zero elements.
    pub fn is_zero(&self) -> bool {
        self.sigma_1.is_zero() || self.sigma_2.is_zero()
    }

    pub fn sigma_1(&self) -> &E::G1Affine {
        &self.sigma_1
    }

    pub fn sigma_2(&self) -> &E::G1Affine {
        &self.sigma_2
    }

    /// Encodes as `sigma_1 || sigma_2` in compressed canonical form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        to_compressed_bytes(self).map_err(Into::into)
    }

    /// Decodes a signature produced by `to_bytes`. Points not in the prime order subgroup are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        from_compressed_bytes(bytes).map_err(Into::into)
    }

    /// Ensures that `e(sigma_1, p1) == e(sigma_2, p2)` and signature isn't zero.
    pub(crate) fn verify_pairing(&self, p1: E::G2, p2: E::G2Affine) -> Result<()> {
        if self.is_zero() {
            Err(PSError::InvalidSignature)?
        }

        let prod = E::multi_pairing(
            [
                E::G1Prepared::from(self.sigma_1),
                E::G1Prepared::from(-self.sigma_2.into_group()),
            ],
            [E::G2Prepared::from(p1), E::G2Prepared::from(p2)],
        );

        if prod.is_zero() {
            Ok(())
        } else {
            Err(PSError::InvalidSignature)
        }
    }

    pub(crate) fn combine<S1, S2>(sigma_1: S1, sigma_2: S2) -> Self
    where
        S1: Into<E::G1Affine>,
        S2: Into<E::G1Affine>,
    {
        Self {
            sigma_1: sigma_1.into(),
            sigma_2: sigma_2.into(),
        }
    }

    /// `(h, h * exponent)`
    fn from_sigma_1(h: E::G1, exponent: E::ScalarField) -> Self {
        Self::combine(h, h * exponent)
    }
}
