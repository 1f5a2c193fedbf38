// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Tests for address derivation
//!
//! Uses [`sign_msg::VECTORS`][crate::sign_msg::VECTORS] for expected addresses.

use encdec::Decode;
use ledger_transport::Exchange;

use ledger_eth_apdu::{
    address::{AddressReq, AddressResp},
    coin::Coin,
};

use crate::{exchange, sign_msg::Vector, Error};

/// Request the address for a derivation path
pub async fn get_address<T, E>(
    t: &T,
    coin: Coin,
    path: &[u32],
    display: bool,
) -> anyhow::Result<String>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    let req = AddressReq::new(coin, path, display).map_err(Error::Apdu)?;

    let data = exchange(t, &req).await?;

    let (resp, _) = AddressResp::decode(&data).map_err(Error::Apdu)?;

    Ok(resp.address.to_string())
}

/// Test address derivation matches the vector address
pub async fn test<T, E>(t: &T, v: &Vector, display: bool) -> anyhow::Result<()>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    let address = get_address(t, v.coin, &v.path, display).await?;

    assert_eq!(address, v.address, "address derivation mismatch");

    Ok(())
}
