use alloc::vec::Vec;

use ark_ff::{
    field_hashers::{DefaultFieldHasher, HashToField},
    PrimeField,
};
use ark_serialize::*;
use ark_std::rand::RngCore;
use dock_crypto_utils::{
    aliases::FullDigest,
    misc::{n_rand, rand},
    pairs::Pairs,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{helpers::try_collect_indexed, PSError};

/// `SecretKey` used in the Pointcheval-Sanders signature scheme.
/// Slot 0 holds `x`, slot `i >= 1` holds `y_i` which binds the `i`-th message.
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Zeroize, ZeroizeOnDrop,
)]
pub struct SecretKey<F: PrimeField> {
    pub(crate) x: F,
    pub(crate) y: Vec<F>,
}

/// The secret `y_i` of a single key slot. This is all a co-signer needs to extend
/// a sequentially aggregated signature with the message bound to that slot.
#[derive(
    Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize, Zeroize, ZeroizeOnDrop,
)]
pub struct MessageSecret<F: PrimeField> {
    pub(crate) slot: usize,
    pub(crate) y: F,
}

impl<F: PrimeField> SecretKey<F> {
    const X_SALT: &'static [u8] = b"PS-SIG-X-KEYGEN-SALT";
    const Y_SALT: &'static [u8] = b"PS-SIG-Y-KEYGEN-SALT";

    pub fn new(x: F, y: Vec<F>) -> Self {
        Self { x, y }
    }

    /// Generates random secret key compatible with `message_count` messages.
    pub fn rand<R: RngCore>(rng: &mut R, message_count: usize) -> Self {
        let x = rand(rng);
        let y = n_rand(rng, message_count).collect();

        Self { x, y }
    }

    /// Generates secret key compatible with `message_count` messages from supplied seed.
    pub fn from_seed<D: FullDigest>(seed: &[u8], message_count: usize) -> Self {
        let hasher = <DefaultFieldHasher<D> as HashToField<F>>::new;

        let x = hasher(Self::X_SALT)
            .hash_to_field(seed, 1)
            .pop()
            .unwrap_or_default();
        let y = hasher(Self::Y_SALT).hash_to_field(seed, message_count);

        Self { x, y }
    }

    /// Total number of slots, `x` included.
    pub fn slot_count(&self) -> usize {
        1 + self.y.len()
    }

    /// Returns max amount of messages supported by this secret key.
    pub fn supported_message_count(&self) -> usize {
        self.y.len()
    }

    /// Extracts the secret of the given message slot. Slot 0 is `x` and can't be handed out.
    pub fn message_secret(&self, slot: usize) -> Option<MessageSecret<F>> {
        let &y = self.y.get(slot.checked_sub(1)?)?;

        Some(MessageSecret { slot, y })
    }

    /// `x + \sum_{i}(y_{i} * m_{i})` where message `i` is bound to slot `i + 1`.
    pub(crate) fn signing_exponent(&self, messages: &[F]) -> Result<F, PSError> {
        if messages.is_empty() {
            return Err(PSError::NoMessages);
        }
        let y_m_pairs = Pairs::new_truncate_left(&self.y, messages).ok_or(
            PSError::InvalidMessageCount {
                received: messages.len(),
                expected: self.y.len(),
            },
        )?;

        Ok(y_m_pairs
            .iter()
            .fold(self.x, |acc, (y, message)| acc + *y * message))
    }

    /// Same as `signing_exponent` but each message carries the index of its `y`.
    /// Indices must be unique and sorted, omitted ones are treated as zero messages.
    pub(crate) fn indexed_signing_exponent(
        &self,
        indexed_messages: &[(usize, F)],
    ) -> Result<F, PSError> {
        if indexed_messages.is_empty() {
            return Err(PSError::NoMessages);
        }
        let indexed_messages: Vec<_> =
            try_collect_indexed::<_, _, PSError>(indexed_messages.iter().copied(), self.y.len())?;

        Ok(indexed_messages
            .into_iter()
            .fold(self.x, |acc, (index, message)| acc + self.y[index] * message))
    }
}

impl<F: PrimeField> MessageSecret<F> {
    pub fn new(slot: usize, y: F) -> Self {
        Self { slot, y }
    }

    /// The key slot this secret belongs to.
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl<F: PrimeField> AsRef<F> for MessageSecret<F> {
    fn as_ref(&self) -> &F {
        &self.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use blake2::Blake2b512;
    use dock_crypto_utils::try_iter::{IndexIsOutOfBounds, InvalidPair};
    use test_utils::Fr;

    #[test]
    fn from_seed() {
        let seed = b"test-seed";
        let other_seed = b"other-seed";

        assert_eq!(
            SecretKey::<Fr>::from_seed::<Blake2b512>(seed, 10),
            SecretKey::<Fr>::from_seed::<Blake2b512>(seed, 10),
        );
        assert_ne!(
            SecretKey::<Fr>::from_seed::<Blake2b512>(seed, 10),
            SecretKey::<Fr>::from_seed::<Blake2b512>(other_seed, 10)
        );
        assert_eq!(
            SecretKey::<Fr>::from_seed::<Blake2b512>(seed, 3).slot_count(),
            4
        );
    }

    #[test]
    fn message_secrets() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let sk = SecretKey::<Fr>::rand(&mut rng, 3);

        assert_eq!(sk.slot_count(), 4);
        assert_eq!(sk.supported_message_count(), 3);
        assert!(sk.message_secret(0).is_none());
        assert!(sk.message_secret(4).is_none());
        for slot in 1..4 {
            let secret = sk.message_secret(slot).unwrap();
            assert_eq!(secret.slot(), slot);
            assert_eq!(*secret.as_ref(), sk.y[slot - 1]);
        }
    }

    #[test]
    fn signing_exponent() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let sk = SecretKey::<Fr>::rand(&mut rng, 3);
        let msgs: Vec<Fr> = n_rand(&mut rng, 3).collect();

        assert_eq!(
            sk.signing_exponent(&msgs[..2]).unwrap(),
            sk.x + sk.y[0] * msgs[0] + sk.y[1] * msgs[1]
        );
        assert_eq!(
            sk.indexed_signing_exponent(&[(0, msgs[0]), (1, msgs[1])])
                .unwrap(),
            sk.signing_exponent(&msgs[..2]).unwrap()
        );
        assert_eq!(
            sk.indexed_signing_exponent(&[(2, msgs[2])]).unwrap(),
            sk.x + sk.y[2] * msgs[2]
        );

        assert_eq!(sk.signing_exponent(&[]), Err(PSError::NoMessages));
        assert_eq!(
            sk.signing_exponent(&[msgs.clone(), msgs.clone()].concat()),
            Err(PSError::InvalidMessageCount {
                received: 6,
                expected: 3
            })
        );
        assert_eq!(
            sk.indexed_signing_exponent(&[(3, msgs[0])]),
            Err(PSError::MessageIndexIsOutOfBounds(IndexIsOutOfBounds {
                index: 3,
                length: 3
            }))
        );
        assert_eq!(
            sk.indexed_signing_exponent(&[(1, msgs[0]), (0, msgs[1])]),
            Err(PSError::MessageIndicesMustBeUniqueAndSorted(InvalidPair(1, 0)))
        );
    }
}
