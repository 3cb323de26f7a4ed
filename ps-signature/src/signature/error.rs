use ark_serialize::SerializationError;
use core::{fmt, mem::discriminant};
use dock_crypto_utils::try_iter::{IndexIsOutOfBounds, InvalidPair};

/// An error originated from key generation, signing, aggregation or verification.
#[derive(Debug)]
pub enum PSError {
    /// Key generation got fewer randomness sources than key slots it needs.
    InsufficientRandomness { received: usize, required: usize },
    NoMessages,
    InvalidMessageCount { received: usize, expected: usize },
    MessageIndexIsOutOfBounds(IndexIsOutOfBounds),
    MessageIndicesMustBeUniqueAndSorted(InvalidPair<usize>),
    /// A co-signer tried to extend an aggregation chain using a slot other than the next one.
    UnexpectedSlot { received: usize, expected: usize },
    /// The aggregated signature claims to already cover the largest possible amount of messages.
    MessageCountOverflow(usize),
    /// The pairing check failed. Every verification failure collapses into this variant.
    InvalidSignature,
    /// A scalar or point failed to (de)serialize through its canonical form.
    Encoding(SerializationError),
}

impl PartialEq for PSError {
    fn eq(&self, other: &Self) -> bool {
        use PSError::*;

        match (self, other) {
            (
                InsufficientRandomness {
                    received: r1,
                    required: e1,
                },
                InsufficientRandomness {
                    received: r2,
                    required: e2,
                },
            ) => r1 == r2 && e1 == e2,
            (NoMessages, NoMessages) | (InvalidSignature, InvalidSignature) => true,
            (
                InvalidMessageCount {
                    received: r1,
                    expected: e1,
                },
                InvalidMessageCount {
                    received: r2,
                    expected: e2,
                },
            )
            | (
                UnexpectedSlot {
                    received: r1,
                    expected: e1,
                },
                UnexpectedSlot {
                    received: r2,
                    expected: e2,
                },
            ) => r1 == r2 && e1 == e2,
            (MessageIndexIsOutOfBounds(a), MessageIndexIsOutOfBounds(b)) => a == b,
            (MessageIndicesMustBeUniqueAndSorted(a), MessageIndicesMustBeUniqueAndSorted(b)) => {
                a == b
            }
            (MessageCountOverflow(a), MessageCountOverflow(b)) => a == b,
            // `SerializationError` doesn't implement `PartialEq`, so only its variant is compared
            (Encoding(a), Encoding(b)) => discriminant(a) == discriminant(b),
            _ => false,
        }
    }
}

impl fmt::Display for PSError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PSError::InsufficientRandomness { received, required } => write!(
                f,
                "Need at least {required} randomness sources for a key, got {received}"
            ),
            PSError::NoMessages => write!(f, "At least one message is required"),
            PSError::InvalidMessageCount { received, expected } => write!(
                f,
                "Got {received} messages but the key supports at most {expected}"
            ),
            PSError::MessageIndexIsOutOfBounds(IndexIsOutOfBounds { index, length }) => write!(
                f,
                "Message index {index} is out of bounds for a key with {length} message slots"
            ),
            PSError::MessageIndicesMustBeUniqueAndSorted(InvalidPair(prev, cur)) => write!(
                f,
                "Message indices must be unique and sorted, got {prev} followed by {cur}"
            ),
            PSError::UnexpectedSlot { received, expected } => write!(
                f,
                "Aggregation expects key slot {expected} next, got {received}"
            ),
            PSError::MessageCountOverflow(count) => write!(
                f,
                "Can't extend an aggregated signature over {count} messages"
            ),
            PSError::InvalidSignature => write!(f, "Invalid signature"),
            PSError::Encoding(err) => write!(f, "Encoding error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PSError {}

impl From<IndexIsOutOfBounds> for PSError {
    fn from(err: IndexIsOutOfBounds) -> Self {
        Self::MessageIndexIsOutOfBounds(err)
    }
}

impl From<InvalidPair<usize>> for PSError {
    fn from(err: InvalidPair<usize>) -> Self {
        Self::MessageIndicesMustBeUniqueAndSorted(err)
    }
}

impl From<SerializationError> for PSError {
    fn from(err: SerializationError) -> Self {
        Self::Encoding(err)
    }
}
