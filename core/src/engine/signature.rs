// Copyright (c) 2022-2023 The MobileCoin Foundation

use ledger_eth_apdu::sign_msg::SIGNATURE_LEN;
use static_assertions::const_assert_eq;

use super::Fault;

/// Length of the `r || s` signature component
pub const RS_LEN: usize = 64;

const_assert_eq!(RS_LEN + 1, SIGNATURE_LEN);

/// Recoverable secp256k1 signature
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Signature {
    rs: [u8; RS_LEN],
    recovery_id: u8,
}

impl Signature {
    /// Create a signature from keystore output, faulting on a recovery id
    /// that cannot be represented in a byte
    pub fn new(rs: [u8; RS_LEN], recovery_id: i32) -> Result<Self, Fault> {
        let recovery_id = u8::try_from(recovery_id).map_err(|_| Fault::RecoveryId(recovery_id))?;
        Ok(Self { rs, recovery_id })
    }

    /// Fetch the `r || s` component
    pub fn rs(&self) -> &[u8; RS_LEN] {
        &self.rs
    }

    /// Fetch the recovery id
    pub fn recovery_id(&self) -> u8 {
        self.recovery_id
    }

    /// Assemble the wire signature, `r || s || recovery_id`
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut b = [0u8; SIGNATURE_LEN];
        b[..RS_LEN].copy_from_slice(&self.rs);
        b[RS_LEN] = self.recovery_id;
        b
    }
}
