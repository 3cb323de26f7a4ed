use alloc::vec::Vec;

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_serialize::*;
use dock_crypto_utils::{join, misc::points, serde_utils::ArkObjectBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::setup::SignatureParams;

use super::SecretKey;

/// `PublicKey` used in the Pointcheval-Sanders signature scheme.
/// Element `i` is the secret key element `i` lifted to `G2`: `X~ = g2 * x` and `Y~_i = g2 * y_i`.
#[serde_as]
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
pub struct PublicKey<E: Pairing> {
    #[serde_as(as = "ArkObjectBytes")]
    pub x_tilde: E::G2Affine,
    #[serde_as(as = "Vec<ArkObjectBytes>")]
    pub y_tilde: Vec<E::G2Affine>,
}

impl<E: Pairing> PublicKey<E> {
    /// Derives `PublicKey` from the supplied secret key and params.
    pub fn new(
        SecretKey { x, y }: &SecretKey<E::ScalarField>,
        SignatureParams { g2, .. }: &SignatureParams<E>,
    ) -> Self {
        let (x_tilde, y_tilde) = join!((*g2 * x).into_affine(), points(g2, y));

        Self { x_tilde, y_tilde }
    }

    /// Total number of slots, `X~` included.
    pub fn slot_count(&self) -> usize {
        1 + self.y_tilde.len()
    }

    /// Returns max amount of messages supported by this public key.
    pub fn supported_message_count(&self) -> usize {
        self.y_tilde.len()
    }

    /// Returns `true` if the public key is valid, i.e don't have zero elements.
    pub fn valid(&self) -> bool {
        !(self.x_tilde.is_zero() || self.y_tilde.iter().any(AffineRepr::is_zero))
    }
}
