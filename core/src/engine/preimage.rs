// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Domain-separated message preimage construction

use ledger_eth_apdu::MAX_MSG_LEN;
use static_assertions::const_assert_eq;

use super::Fault;
use crate::helpers::{decimal_digits, Writer};

/// Personal message header, `0x19` followed by the protocol tag
pub const MSG_HEADER: &[u8] = b"\x19Ethereum Signed Message:\n";

/// Maximum number of decimal digits in a message length
pub const MAX_MSG_DIGITS: usize = decimal_digits(MAX_MSG_LEN);

/// Preimage buffer capacity, sufficient for the largest accepted message
pub const PREIMAGE_LEN: usize = MSG_HEADER.len() + MAX_MSG_DIGITS + MAX_MSG_LEN;

const_assert_eq!(MSG_HEADER.len(), 26);
const_assert_eq!(MAX_MSG_DIGITS, 4);

/// Message preimage, `header || decimal(len) || msg`
#[derive(Clone, PartialEq, Debug)]
pub struct Preimage {
    buff: Writer<PREIMAGE_LEN>,
    offset: usize,
}

impl Preimage {
    /// Build the preimage for the provided message.
    ///
    /// This fails with [`Fault::Capacity`] only for messages over [`MAX_MSG_LEN`],
    /// which must be rejected prior to calling.
    pub fn build(msg: &[u8]) -> Result<Self, Fault> {
        let mut buff = Writer::new();

        buff.put_bytes(MSG_HEADER)?;
        buff.put_decimal(msg.len())?;

        let offset = buff.len();

        buff.put_bytes(msg)?;

        Ok(Self { buff, offset })
    }

    /// Fetch the used preimage bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buff.as_bytes()
    }

    /// Offset of the message within the preimage
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Used preimage length, `offset + msg.len()`
    pub fn len(&self) -> usize {
        self.buff.len()
    }

    /// Fetch the message portion of the preimage
    pub fn message(&self) -> &[u8] {
        &self.buff.as_bytes()[self.offset..]
    }
}
