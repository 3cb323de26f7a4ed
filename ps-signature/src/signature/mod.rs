//! Pointcheval-Sanders signature scheme.

mod aggregated_signature;
mod error;
mod ps_signature;

pub use self::ps_signature::Signature;
pub use aggregated_signature::AggregatedSignature;
pub use error::PSError;
