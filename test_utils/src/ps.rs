//! Message fixtures and byte tampering helpers for the PS signature tests.

pub const SINGLE_MESSAGE: &[u8] = b"Hello PS Signature";

pub const BATCH_MESSAGES: [&[u8]; 2] = [b"PS Batch Verify 1", b"PS Batch Verify 2"];

pub const AGGREGATE_MESSAGES: [&[u8]; 3] = [
    b"PS Aggregate verify 1",
    b"PS Aggregate verify 2",
    b"PS Aggregate verify 3",
];

/// Returns a copy of `bytes` with the bit at `bit` (counted from the start, LSB first within a byte) flipped.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut flipped = bytes.to_vec();
    flipped[bit / 8] ^= 1 << (bit % 8);

    flipped
}

/// Returns a copy of `bytes` with every bit of the byte at `index` flipped.
pub fn flip_byte(bytes: &[u8], index: usize) -> Vec<u8> {
    let mut flipped = bytes.to_vec();
    flipped[index] = !flipped[index];

    flipped
}
