// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Address request APDUs

use encdec::{Decode, DecodeOwned, Encode};

use super::{
    coin::Coin, ApduError, ApduStatic, Instruction, KeyPath, ETH_APDU_CLA, MAX_KEYPATH_DEPTH,
};
use crate::helpers::path;

/// Checksummed address length (`0x` prefix and 40 hex characters)
pub const ADDRESS_LEN: usize = 42;

bitflags::bitflags! {
    /// Address request flags
    pub struct AddressFlags: u8 {
        /// Display address for user confirmation prior to responding
        const DISPLAY = 1 << 0;
    }
}

/// Request the EIP-0055 checksummed address for the provided network and
/// derivation path, returning an [`AddressResp`].
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     COIN      |   PATH_LEN    |     FLAGS     |   RESERVED    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                             PATH                              /
/// /                   (PATH_LEN u32 elements)                     /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct AddressReq {
    /// Network identifier
    pub coin: Coin,
    /// BIP-0032 derivation path
    pub path: KeyPath,
    /// Request flags
    pub flags: AddressFlags,
}

impl AddressReq {
    /// Create a new address request
    pub fn new(coin: Coin, path: &[u32], display: bool) -> Result<Self, ApduError> {
        let path = KeyPath::from_slice(path).map_err(|_| ApduError::InvalidLength)?;
        let mut flags = AddressFlags::empty();
        flags.set(AddressFlags::DISPLAY, display);

        Ok(Self { coin, path, flags })
    }

    /// Check whether the address should be displayed prior to responding
    pub fn display(&self) -> bool {
        self.flags.contains(AddressFlags::DISPLAY)
    }
}

impl ApduStatic for AddressReq {
    const CLA: u8 = ETH_APDU_CLA;
    const INS: u8 = Instruction::GetAddress as u8;
}

impl Encode for AddressReq {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        let mut index = 0;

        // Check buffer length is valid
        if buff.len() < 4 + self.path.len() * 4 {
            return Err(ApduError::InvalidLength);
        }

        // Write header
        buff[0] = self.coin.into();
        buff[1] = self.path.len() as u8;
        buff[2] = self.flags.bits();
        buff[3] = 0;
        index += 4;

        // Write path
        index += path::enc(&self.path, &mut buff[index..])?;

        Ok(index)
    }

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(4 + self.path.len() * 4)
    }
}

impl DecodeOwned for AddressReq {
    type Output = Self;

    type Error = ApduError;

    fn decode_owned(buff: &[u8]) -> Result<(Self::Output, usize), Self::Error> {
        let mut index = 0;

        // Check header length
        if buff.len() < 4 {
            return Err(ApduError::InvalidLength);
        }

        // Read header
        let coin = Coin::from(buff[0]);
        let path_len = buff[1] as usize;
        let flags = AddressFlags::from_bits_truncate(buff[2]);
        index += 4;

        if path_len > MAX_KEYPATH_DEPTH {
            return Err(ApduError::InvalidLength);
        }

        // Read path
        let (path, n) = path::dec(&buff[index..], path_len)?;
        index += n;

        Ok((Self { coin, path, flags }, index))
    }
}

/// Address response APDU
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   ADDR_LEN    |                                               |
/// +-+-+-+-+-+-+-+-+                                               +
/// /                            ADDRESS                            /
/// /               (EIP-0055 checksummed, 0x prefixed)             /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct AddressResp<'a> {
    /// Checksummed address string
    pub address: &'a str,
}

impl<'a> AddressResp<'a> {
    /// Create a new [`AddressResp`] APDU
    pub fn new(address: &'a str) -> Self {
        Self { address }
    }
}

impl<'a> Encode for AddressResp<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        let d = self.address.as_bytes();

        if d.len() > u8::MAX as usize || buff.len() < 1 + d.len() {
            return Err(ApduError::InvalidLength);
        }

        buff[0] = d.len() as u8;
        buff[1..][..d.len()].copy_from_slice(d);

        Ok(1 + d.len())
    }

    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(1 + self.address.len())
    }
}

impl<'a> Decode<'a> for AddressResp<'a> {
    type Output = Self;
    type Error = ApduError;

    fn decode(buff: &'a [u8]) -> Result<(Self::Output, usize), Self::Error> {
        if buff.is_empty() {
            return Err(ApduError::InvalidLength);
        }

        let n = buff[0] as usize;
        if buff.len() < 1 + n {
            return Err(ApduError::InvalidLength);
        }

        let address = core::str::from_utf8(&buff[1..][..n]).map_err(|_| ApduError::InvalidUtf8)?;

        Ok((Self { address }, 1 + n))
    }
}
