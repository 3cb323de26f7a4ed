//! Key generation from one randomness source per key slot.

use alloc::vec::Vec;

use ark_ec::pairing::Pairing;
use ark_std::{end_timer, rand::RngCore, start_timer};
use dock_crypto_utils::misc::rand;
use zeroize::Zeroize;

use super::{PublicKey, SecretKey, SignatureParams, MIN_SLOT_COUNT};
use crate::PSError;

/// Generates a keypair with one slot per supplied randomness source, drawing exactly one scalar from each.
/// The first source produces `x`, source `i` produces `y_i`.
pub fn generate_keypair<E: Pairing, R: RngCore>(
    randomness: &mut [R],
    params: &SignatureParams<E>,
) -> Result<(SecretKey<E::ScalarField>, PublicKey<E>), PSError> {
    if randomness.len() < MIN_SLOT_COUNT {
        return Err(PSError::InsufficientRandomness {
            received: randomness.len(),
            required: MIN_SLOT_COUNT,
        });
    }
    let keygen_time = start_timer!(|| "PS keygen");

    let mut scalars: Vec<E::ScalarField> = randomness.iter_mut().map(rand).collect();
    let secret_key = SecretKey::new(scalars[0], scalars[1..].to_vec());
    scalars.zeroize();

    let public_key = PublicKey::new(&secret_key, params);

    end_timer!(keygen_time);
    Ok((secret_key, public_key))
}
