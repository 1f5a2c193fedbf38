// Copyright (c) 2022-2023 The MobileCoin Foundation

use sha3::{Digest as _, Keccak256};

/// Message digest, the 32-byte input to signing
pub type Digest = [u8; 32];

/// Hash engine used to compute message digests
pub trait MsgHasher {
    /// Compute the digest over `data`
    fn digest(&self, data: &[u8]) -> Digest;
}

impl<T: MsgHasher> MsgHasher for &T {
    fn digest(&self, data: &[u8]) -> Digest {
        T::digest(self, data)
    }
}

/// Keccak-256 with the original Keccak padding (`0x01`), as used by
/// Ethereum. This differs from standardised SHA3-256 (`0x06` padding).
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Keccak;

impl MsgHasher for Keccak {
    fn digest(&self, data: &[u8]) -> Digest {
        let h = Keccak256::digest(data);

        let mut d = [0u8; 32];
        d.copy_from_slice(&h);
        d
    }
}
