// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Network / coin identifiers

use num_enum::{FromPrimitive, IntoPrimitive};

/// Hardened derivation flag for BIP-0032 path elements
pub const HARDENED: u32 = 0x8000_0000;

/// Network identifier, encoded as a single byte on the wire
#[derive(Copy, Clone, PartialEq, Eq, Debug, FromPrimitive, IntoPrimitive, strum::Display)]
#[repr(u8)]
pub enum Coin {
    /// Ethereum mainnet
    Eth = 0,
    /// Ropsten testnet
    RopstenEth = 1,
    /// Rinkeby testnet
    RinkebyEth = 2,
    /// Unrecognised network id
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl Coin {
    /// SLIP-0044 coin type (unhardened) for BIP-0044 derivation
    pub const fn bip44_coin(&self) -> Option<u32> {
        match self {
            Coin::Eth => Some(60),
            Coin::RopstenEth | Coin::RinkebyEth => Some(1),
            Coin::Unknown(_) => None,
        }
    }

    /// Network name for display
    pub const fn name(&self) -> &'static str {
        match self {
            Coin::Eth => "Ethereum",
            Coin::RopstenEth => "Ropsten",
            Coin::RinkebyEth => "Rinkeby",
            Coin::Unknown(_) => "Unknown",
        }
    }

    /// Fetch the [`Coins`] flag for this network
    pub const fn flag(&self) -> Coins {
        match self {
            Coin::Eth => Coins::ETH,
            Coin::RopstenEth => Coins::ROPSTEN,
            Coin::RinkebyEth => Coins::RINKEBY,
            Coin::Unknown(_) => Coins::empty(),
        }
    }
}

bitflags::bitflags! {
    /// Set of enabled networks
    pub struct Coins: u8 {
        const ETH = 1 << 0;
        const ROPSTEN = 1 << 1;
        const RINKEBY = 1 << 2;
    }
}

impl Coins {
    /// Check whether the provided network is in this set
    pub fn enabled(&self, coin: Coin) -> bool {
        let f = coin.flag();
        !f.is_empty() && self.contains(f)
    }
}

impl Default for Coins {
    /// Mainnet only
    fn default() -> Self {
        Coins::ETH
    }
}
