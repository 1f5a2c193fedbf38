// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Derivation path policy

use ledger_eth_apdu::{
    coin::{Coin, HARDENED},
    MAX_KEYPATH_DEPTH,
};

/// Purpose element for BIP-0044 paths
pub const BIP44_PURPOSE: u32 = 44 | HARDENED;

/// Maximum address index accepted for display / signing
pub const MAX_ADDRESS_INDEX: u32 = 9999;

/// Check a path is non-empty and within [`MAX_KEYPATH_DEPTH`]
pub fn is_valid_depth(path: &[u32]) -> bool {
    !path.is_empty() && path.len() <= MAX_KEYPATH_DEPTH
}

/// Check a path is a BIP-0044 account address path for the provided network,
/// `m/44'/coin'/0'/0/index` with `index <= MAX_ADDRESS_INDEX`
pub fn is_valid_address_path(coin: Coin, path: &[u32]) -> bool {
    let coin_type = match coin.bip44_coin() {
        Some(c) => c | HARDENED,
        None => return false,
    };

    match path {
        [purpose, c, account, change, index] => {
            *purpose == BIP44_PURPOSE
                && *c == coin_type
                && *account == HARDENED
                && *change == 0
                && *index <= MAX_ADDRESS_INDEX
        }
        _ => false,
    }
}
