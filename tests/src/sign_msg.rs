// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Tests and vectors for personal message signing
//!
//!

use encdec::Decode;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use ledger_transport::Exchange;
use log::debug;

use ledger_eth_apdu::{
    coin::{Coin, HARDENED},
    sign_msg::{SignMsgReq, SignMsgResp},
    status::Status,
};

use crate::{eth_address, exchange, personal_digest, status, Error};

/// Test vector type for message signing
pub struct Vector {
    pub mnemonic: &'static str,
    pub coin: Coin,
    pub path: [u32; 5],
    pub address: &'static str,
}

impl Vector {
    pub fn seed(&self) -> [u8; 64] {
        crate::seed(self.mnemonic)
    }
}

pub const ABANDON: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

pub const DUCK: &str = "duck deal pretty pen thunder economy wide common goose fit engine main aisle curtain choose cube claim snake enroll detect brief history float unit";

pub const VECTORS: &[Vector] = &[
    Vector {
        mnemonic: ABANDON,
        coin: Coin::Eth,
        path: [44 | HARDENED, 60 | HARDENED, HARDENED, 0, 0],
        address: "0x9858EfFD232B4033E47d90003D41EC34EcaEda94",
    },
    Vector {
        mnemonic: ABANDON,
        coin: Coin::Eth,
        path: [44 | HARDENED, 60 | HARDENED, HARDENED, 0, 1],
        address: "0x6Fac4D18c912343BF86fa7049364Dd4E424Ab9C0",
    },
    Vector {
        mnemonic: DUCK,
        coin: Coin::Eth,
        path: [44 | HARDENED, 60 | HARDENED, HARDENED, 0, 0],
        address: "0xaa20083b895cC370dc72dBC7eacd489c54bfD60E",
    },
    Vector {
        mnemonic: DUCK,
        coin: Coin::Eth,
        path: [44 | HARDENED, 60 | HARDENED, HARDENED, 0, 1],
        address: "0xe3a9CB90a2dCf4fc11066488Debb6964bA174BAf",
    },
];

/// Testnet vectors, requiring testnets to be enabled
pub const TESTNET_VECTORS: &[Vector] = &[
    Vector {
        mnemonic: ABANDON,
        coin: Coin::RopstenEth,
        path: [44 | HARDENED, HARDENED | 1, HARDENED, 0, 0],
        address: "0xb157E208264FF9eDeBbCB1D36E66d156Df8Afa6c",
    },
    Vector {
        mnemonic: DUCK,
        coin: Coin::RinkebyEth,
        path: [44 | HARDENED, HARDENED | 1, HARDENED, 0, 0],
        address: "0xFd91C67F25CBfba3ca8432b555e830cD57f57A02",
    },
];

/// Messages signed for each vector
pub const MESSAGES: &[&[u8]] = &[
    b"hello",
    b"",
    b"Sign in to example.org\nNonce: 8f2e41",
    &[0x00, 0x01, 0x02, 0xfe, 0xff],
    &[b'a'; 1024],
];

/// Request a signature, returning the decoded response
pub async fn sign<T, E>(t: &T, coin: Coin, path: &[u32], msg: &[u8]) -> anyhow::Result<SignMsgResp>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    let req = SignMsgReq::new(coin, path, msg).map_err(Error::Apdu)?;

    let data = exchange(t, &req).await?;

    let (resp, _) = SignMsgResp::decode(&data).map_err(Error::Apdu)?;

    Ok(resp)
}

/// Recover the signing address for a message signature
pub fn recover(msg: &[u8], resp: &SignMsgResp) -> anyhow::Result<String> {
    let digest = personal_digest(msg);

    let sig = Signature::from_slice(resp.rs())?;
    let recid = RecoveryId::from_byte(resp.recovery_id())
        .ok_or_else(|| anyhow::anyhow!("invalid recovery id: {}", resp.recovery_id()))?;

    let key = VerifyingKey::recover_from_prehash(&digest, &sig, recid)?;

    Ok(eth_address(&key))
}

/// Test message signing, checking the signature recovers to the vector address
pub async fn test<T, E>(t: &T, v: &Vector, msg: &[u8]) -> anyhow::Result<()>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    debug!("sign {} bytes with {:x?}", msg.len(), v.path);

    let resp = sign(t, v.coin, &v.path, msg).await?;

    // Signatures are low-s normalised
    let sig = Signature::from_slice(resp.rs())?;
    assert!(sig.normalize_s().is_none(), "signature s not normalised");

    // Check signature recovers to the expected address
    let address = recover(msg, &resp)?;
    assert_eq!(address, v.address, "recovered address mismatch");

    // Check signing is deterministic
    let again = sign(t, v.coin, &v.path, msg).await?;
    assert_eq!(resp, again, "signature not deterministic");

    Ok(())
}

/// Test a signing request fails with the expected status
pub async fn test_reject<T, E>(
    t: &T,
    coin: Coin,
    path: &[u32],
    msg: &[u8],
    expected: Status,
) -> anyhow::Result<()>
where
    T: Exchange<Error = E> + Send + Sync,
    E: std::error::Error + Sync + Send + 'static,
{
    match sign(t, coin, path, msg).await {
        Ok(r) => panic!("expected {expected}, got signature {:02x?}", r.signature),
        Err(e) => assert_eq!(status(&e), Some(expected), "unexpected error: {e}"),
    }

    Ok(())
}
