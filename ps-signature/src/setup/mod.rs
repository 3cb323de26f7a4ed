use alloc::vec::Vec;

pub mod keygen;
pub mod keypair;
pub mod signature_params;

pub use keypair::*;
pub use signature_params::*;

/// A key needs at least the base secret `x` and one message-binding secret `y_1`.
pub const MIN_SLOT_COUNT: usize = 2;

/// Creates random params, keys and messages. Not intended to be used anywhere except for tests and benches.
#[allow(clippy::type_complexity)]
pub fn test_setup<E: ark_ec::pairing::Pairing, D: digest::Digest, R: ark_std::rand::RngCore>(
    rng: &mut R,
    message_count: usize,
) -> (
    SecretKey<E::ScalarField>,
    PublicKey<E>,
    SignatureParams<E>,
    Vec<E::ScalarField>,
) {
    use dock_crypto_utils::misc::n_rand;

    let params = SignatureParams::new::<D>(b"test");
    let secret = SecretKey::rand(rng, message_count);
    let public = PublicKey::new(&secret, &params);
    let messages = n_rand(rng, message_count).collect();

    (secret, public, params, messages)
}
