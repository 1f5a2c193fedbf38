// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Runtime [Engine][crate::engine::Engine] configuration

use ledger_eth_apdu::{app_info::AppFlags, coin::Coins};

/// Printable classification applied to messages prior to display
#[derive(Copy, Clone, PartialEq, Debug, Default, strum::Display, strum::EnumIter)]
pub enum PrintableMode {
    /// Bytes in `[20, 127]` are printable.
    ///
    /// This matches the classification existing display formats were built
    /// against, though it admits control characters `20..=31` and `DEL`.
    #[default]
    Compat,

    /// Bytes in `[32, 126]` (printable ASCII) are printable
    Strict,
}

impl PrintableMode {
    /// Check whether a byte is printable under this mode
    pub const fn is_printable(&self, b: u8) -> bool {
        match self {
            PrintableMode::Compat => b >= 20 && b <= 127,
            PrintableMode::Strict => b >= 32 && b <= 126,
        }
    }
}

/// Engine configuration
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Config {
    /// Networks enabled for signing
    pub coins: Coins,
    /// Message classification for display
    pub printable: PrintableMode,
}

impl Config {
    /// Default configuration, mainnet only with [`PrintableMode::Compat`]
    pub const fn new() -> Self {
        Self {
            coins: Coins::ETH,
            printable: PrintableMode::Compat,
        }
    }

    /// Set enabled networks
    pub const fn with_coins(mut self, coins: Coins) -> Self {
        self.coins = coins;
        self
    }

    /// Set printable classification mode
    pub const fn with_printable(mut self, printable: PrintableMode) -> Self {
        self.printable = printable;
        self
    }

    /// Fetch application flags for this configuration
    pub fn app_flags(&self) -> AppFlags {
        let mut flags = AppFlags::from_coins(self.coins);
        if self.printable == PrintableMode::Strict {
            flags |= AppFlags::STRICT_PRINTABLE;
        }
        flags
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
