//! Prelude to simplify downstream use of APDU objects
//!

pub use crate::{
    address::{AddressFlags, AddressReq, AddressResp},
    app_info::{AppFlags, AppInfoReq, AppInfoResp},
    coin::{Coin, Coins},
    sign_msg::{SignMsgReq, SignMsgResp},
    status::Status,
    ApduError, ApduStatic, KeyPath,
};
