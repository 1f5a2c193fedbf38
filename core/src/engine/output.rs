// Copyright (c) 2022-2023 The MobileCoin Foundation

use encdec::Encode;

use ledger_eth_apdu::{prelude::*, ETH_PROTO_VERSION};

use super::Signature;
use crate::helpers::Address;

/// Application name reported via [`AppInfoResp`]
pub const APP_NAME: &str = "Ethereum";

/// Application version reported via [`AppInfoResp`]
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// [`Engine`][super::Engine] outputs (in response to events), typically encoded to response [APDUs][crate::apdu]
#[derive(Clone, PartialEq, Debug)]
pub enum Output {
    None,

    /// Application information
    AppInfo { flags: AppFlags },

    /// Checksummed address
    Address { address: Address },

    /// Message signature
    Signature { signature: Signature },
}

impl Output {
    /// Encode an [`Output`] object to a response [APDU][crate::apdu]
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        match self {
            Output::None => Ok(0),
            Output::AppInfo { flags } => {
                AppInfoResp::new(ETH_PROTO_VERSION, APP_NAME, APP_VERSION, *flags).encode(buff)
            }
            Output::Address { address } => AddressResp::new(address.as_str()).encode(buff),
            Output::Signature { signature } => SignMsgResp::new(signature.to_bytes()).encode(buff),
        }
    }

    /// Fetch signature for outputs containing this
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Output::Signature { signature } => Some(signature),
            _ => None,
        }
    }

    /// Fetch address for outputs containing this
    pub fn address(&self) -> Option<&str> {
        match self {
            Output::Address { address } => Some(address.as_str()),
            _ => None,
        }
    }
}
