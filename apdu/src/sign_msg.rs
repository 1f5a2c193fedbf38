// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Personal message signing APDUs

use byteorder::{ByteOrder, LittleEndian};
use encdec::{Decode, Encode};

use super::{
    coin::Coin, ApduError, ApduStatic, Instruction, KeyPath, ETH_APDU_CLA, MAX_KEYPATH_DEPTH,
    MAX_MSG_LEN,
};
use crate::helpers::{arr, path};

/// Signature length, `r || s || recovery_id`
pub const SIGNATURE_LEN: usize = 65;

/// Request a signature over a personal message for the provided
/// network and derivation path, returning a [`SignMsgResp`] following
/// user approval.
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     COIN      |   PATH_LEN    |            MSG_LEN            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                             PATH                              /
/// /                   (PATH_LEN u32 elements)                     /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                            MESSAGE                            /
/// /                       (variable length)                       /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// `MSG_LEN` is not bounded by the wire encoding, the engine
/// rejects messages over [`MAX_MSG_LEN`].
#[derive(Clone, PartialEq, Debug)]
pub struct SignMsgReq<'a> {
    /// Network identifier
    pub coin: Coin,
    /// BIP-0032 derivation path
    pub path: KeyPath,
    /// Message to be signed
    pub msg: &'a [u8],
}

impl<'a> SignMsgReq<'a> {
    /// Create a new message signing request
    pub fn new(coin: Coin, path: &[u32], msg: &'a [u8]) -> Result<Self, ApduError> {
        let path = KeyPath::from_slice(path).map_err(|_| ApduError::InvalidLength)?;
        Ok(Self { coin, path, msg })
    }
}

impl<'a> ApduStatic for SignMsgReq<'a> {
    const CLA: u8 = ETH_APDU_CLA;
    const INS: u8 = Instruction::SignMsg as u8;
}

impl<'a> Encode for SignMsgReq<'a> {
    type Error = ApduError;

    /// Encode a [`SignMsgReq`] APDU into the provided buffer
    #[inline]
    fn encode(&self, buff: &mut [u8]) -> Result<usize, Self::Error> {
        let mut index = 0;
        let path_len = self.path.len();
        let msg_len = self.msg.len();

        // Check buffer and field lengths are valid
        if buff.len() < 4 + path_len * 4 + msg_len || msg_len > u16::MAX as usize {
            return Err(ApduError::InvalidLength);
        }

        // Write header
        buff[0] = self.coin.into();
        buff[1] = path_len as u8;
        LittleEndian::write_u16(&mut buff[2..4], msg_len as u16);
        index += 4;

        // Write path
        index += path::enc(&self.path, &mut buff[index..])?;

        // Write message
        buff[index..][..msg_len].copy_from_slice(self.msg);
        index += msg_len;

        Ok(index)
    }

    #[inline]
    fn encode_len(&self) -> Result<usize, Self::Error> {
        Ok(4 + self.path.len() * 4 + self.msg.len())
    }
}

impl<'a> Decode<'a> for SignMsgReq<'a> {
    type Output = Self;
    type Error = ApduError;

    /// Decode a [`SignMsgReq`] APDU from the provided buffer
    #[inline]
    fn decode(buff: &'a [u8]) -> Result<(Self::Output, usize), Self::Error> {
        let mut index = 0;

        // Check header length
        if buff.len() < 4 {
            return Err(ApduError::InvalidLength);
        }

        // Read header
        let coin = Coin::from(buff[0]);
        let path_len = buff[1] as usize;
        let msg_len = LittleEndian::read_u16(&buff[2..4]) as usize;
        index += 4;

        // Check path depth prior to computing full length
        if path_len > MAX_KEYPATH_DEPTH {
            return Err(ApduError::InvalidLength);
        }

        // Check full buffer length
        if buff.len() < 4 + path_len * 4 + msg_len {
            return Err(ApduError::InvalidLength);
        }

        // Read path
        let (path, n) = path::dec(&buff[index..], path_len)?;
        index += n;

        // Read message
        let msg = &buff[index..][..msg_len];
        index += msg_len;

        Ok((Self { coin, path, msg }, index))
    }
}

/// Message signature response APDU
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                           SIGNATURE                           /
/// /            (65-byte secp256k1 r || s || recovery_id)          /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, PartialEq, Debug, Encode, Decode)]
#[encdec(error = "ApduError")]
pub struct SignMsgResp {
    /// Recoverable signature
    #[encdec(with = "arr")]
    pub signature: [u8; SIGNATURE_LEN],
}

impl SignMsgResp {
    /// Create a new [`SignMsgResp`] APDU
    pub fn new(signature: [u8; SIGNATURE_LEN]) -> Self {
        Self { signature }
    }

    /// Fetch the `r || s` component of the signature
    pub fn rs(&self) -> &[u8] {
        &self.signature[..64]
    }

    /// Fetch the recovery id
    pub fn recovery_id(&self) -> u8 {
        self.signature[64]
    }
}

// Requests for the largest message must fit a 16-bit length field
static_assertions::const_assert!(MAX_MSG_LEN <= u16::MAX as usize);
