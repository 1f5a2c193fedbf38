// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Tests for application information requests

use encdec::Decode;
use ledger_transport::Exchange;

use ledger_eth_apdu::{
    app_info::{AppFlags, AppInfoReq, AppInfoResp},
    ETH_PROTO_VERSION,
};

use crate::{exchange, Error};

/// Application information, owned for return from requests
#[derive(Clone, PartialEq, Debug)]
pub struct AppInfo {
    pub proto: u8,
    pub name: String,
    pub version: String,
    pub flags: AppFlags,
}

/// Request application information
pub async fn get_info<T, E>(t: &T) -> anyhow::Result<AppInfo>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    let data = exchange(t, &AppInfoReq).await?;

    let (resp, _) = AppInfoResp::decode(&data).map_err(Error::Apdu)?;

    Ok(AppInfo {
        proto: resp.proto,
        name: resp.name.to_string(),
        version: resp.version.to_string(),
        flags: resp.flags,
    })
}

/// Test application information, checking the protocol version and expected flags
pub async fn test<T, E>(t: &T, flags: AppFlags) -> anyhow::Result<()>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    let info = get_info(t).await?;

    assert_eq!(info.proto, ETH_PROTO_VERSION, "protocol version mismatch");
    assert_eq!(info.name, "Ethereum");
    assert!(!info.version.is_empty(), "missing application version");
    assert_eq!(info.flags, flags, "application flags mismatch");

    Ok(())
}
