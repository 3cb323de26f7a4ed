use ark_ec::{pairing::Pairing, AffineRepr};
use ark_serialize::*;
use digest::Digest;
use dock_crypto_utils::{
    hashing_utils::affine_group_elem_from_try_and_incr, serde_utils::ArkObjectBytes,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Public parameters shared by signers and verifiers: the bases of the two source groups.
/// Signatures live in `G1` and keys in `G2`.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct SignatureParams<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub g1: E::G1Affine,
    #[serde_as(as = "ArkObjectBytes")]
    pub g2: E::G2Affine,
}

impl<E: Pairing> SignatureParams<E> {
    /// Uses the distinguished generators of `G1` and `G2`.
    pub fn generator() -> Self {
        Self {
            g1: E::G1Affine::generator(),
            g2: E::G2Affine::generator(),
        }
    }

    /// Derives the bases by hashing the given label.
    pub fn new<D: Digest>(label: &[u8]) -> Self {
        let g1 = affine_group_elem_from_try_and_incr::<E::G1Affine, D>(
            &[label, b" : g1".as_slice()].concat(),
        );
        let g2 = affine_group_elem_from_try_and_incr::<E::G2Affine, D>(
            &[label, b" : g2".as_slice()].concat(),
        );

        Self { g1, g2 }
    }

    /// Returns `true` if neither base is the identity.
    pub fn is_valid(&self) -> bool {
        !(self.g1.is_zero() || self.g2.is_zero())
    }
}

impl<E: Pairing> Default for SignatureParams<E> {
    fn default() -> Self {
        Self::generator()
    }
}
