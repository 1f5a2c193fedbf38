// Copyright (c) 2022-2023 The MobileCoin Foundation

use encdec::Decode;

use ledger_eth_apdu::prelude::*;

/// [`Engine`][super::Engine] input events, typically decoded from request [APDUs][crate::apdu]
#[derive(Clone, PartialEq, Debug)]
pub enum Event<'a> {
    None,

    /// Fetch application information
    GetAppInfo,

    /// Fetch (and optionally display) the address for a derivation path
    GetAddress {
        coin: Coin,
        path: KeyPath,
        display: bool,
    },

    /// Sign a personal message
    SignMsg {
        coin: Coin,
        path: KeyPath,
        msg: &'a [u8],
    },
}

/// Helper to decode APDUs to events
fn decode_event<'a, T>(buff: &'a [u8]) -> Result<Event<'a>, ApduError>
where
    T: Decode<'a, Output = T, Error = ApduError> + Into<Event<'a>>,
{
    let (a, _n) = T::decode(buff)?;
    Ok(a.into())
}

impl<'a> Event<'a> {
    /// Parse an incoming APDU to engine event
    ///
    /// Instructions should be checked against [`Instruction`][crate::apdu::Instruction]
    /// prior to parsing, unrecognised instructions are reported as [`ApduError::InvalidEncoding`].
    pub fn parse(ins: u8, buff: &'a [u8]) -> Result<Self, ApduError> {
        match ins {
            AppInfoReq::INS => decode_event::<AppInfoReq>(buff),
            AddressReq::INS => decode_event::<AddressReq>(buff),
            SignMsgReq::INS => decode_event::<SignMsgReq>(buff),
            _ => Err(ApduError::InvalidEncoding),
        }
    }
}

impl<'a> From<AppInfoReq> for Event<'a> {
    fn from(_: AppInfoReq) -> Self {
        Event::GetAppInfo
    }
}

impl<'a> From<AddressReq> for Event<'a> {
    fn from(a: AddressReq) -> Self {
        let display = a.display();
        Event::GetAddress {
            coin: a.coin,
            path: a.path,
            display,
        }
    }
}

impl<'a> From<SignMsgReq<'a>> for Event<'a> {
    fn from(a: SignMsgReq<'a>) -> Self {
        Event::SignMsg {
            coin: a.coin,
            path: a.path,
            msg: a.msg,
        }
    }
}
