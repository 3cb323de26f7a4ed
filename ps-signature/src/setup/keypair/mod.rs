//! Secret and public keys. Both are laid out in slots: slot 0 is the `x` part, slot `i` binds message `i`.

mod public;
mod secret;

pub use public::*;
pub use secret::*;
