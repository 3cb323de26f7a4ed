//! # Pointcheval-Sanders signatures with sequential aggregation
//!
//! - Based on the paper [Short Randomizable Signatures](https://eprint.iacr.org/2015/525).
//! - A secret key `(x, y_1, .., y_n)` signs up to `n` messages at once. Signatures are pairs of `G1` points
//!   and can be re-randomized to be unlinkable.
//! - Sequential aggregation: the holder of `(x, y_1)` starts a chain over the first message and every
//!   co-signer holding just `y_i` appends message `i`. The resulting signature verifies like a
//!   multi-message one against the full public key.
//! - Messages are mapped to scalars with the encoders from [`message`].

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod helpers;
pub mod message;
pub mod setup;
pub mod signature;


pub use setup::{keygen, MessageSecret, PublicKey, SecretKey, SignatureParams};
pub use signature::*;
