// Copyright (c) 2022-2023 The MobileCoin Foundation

use sha3::{Digest, Keccak256};

use super::Writer;

pub use ledger_eth_apdu::address::ADDRESS_LEN;

/// Display address, `0x` prefixed EIP-0055 checksummed hex
pub type Address = heapless::String<ADDRESS_LEN>;

/// Compute the checksummed address for an uncompressed SEC1 secp256k1 public key
/// (`0x04 || X || Y`).
///
/// Returns `None` where the key is not an uncompressed point.
pub fn eth_address(public_key: &[u8; 65]) -> Option<Address> {
    if public_key[0] != 0x04 {
        return None;
    }

    // Address is the last 20 bytes of the hashed point
    let h = Keccak256::digest(&public_key[1..]);

    let mut a = [0u8; 40];
    hex::encode_to_slice(&h[12..], &mut a).ok()?;
    checksum(&mut a);

    let mut w = Writer::<ADDRESS_LEN>::new();
    w.put_str("0x").ok()?;
    w.put_bytes(&a).ok()?;

    Address::from_utf8(w.into_inner()).ok()
}

/// Apply EIP-0055 mixed-case checksum to lower-case hex address
fn checksum(a: &mut [u8; 40]) {
    let h = Keccak256::digest(&a[..]);

    for (i, c) in a.iter_mut().enumerate() {
        let nibble = match i % 2 {
            0 => h[i / 2] >> 4,
            _ => h[i / 2] & 0x0f,
        };

        if nibble >= 8 {
            c.make_ascii_uppercase();
        }
    }
}
