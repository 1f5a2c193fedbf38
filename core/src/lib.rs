// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Ethereum hardware wallet core
//!
//! This provides a common [Engine][engine] supporting personal message signing
//! (`0x19 "Ethereum Signed Message:\n" || len || msg`) for execution on hardware wallets.
//!
//! Interactions with the [Engine][engine] are performed via [Event][engine::Event]s and [Output][engine::Output]s,
//! see [ledger_eth_apdu] for APDU objects and wire encodings. Key material is accessed via a
//! platform [Driver][engine::Driver] and user approval via a [Confirm][engine::Confirm] implementation.
//!
//! ## Operations
//!
//! Prior to interacting with a hardware wallet the client should issue an
//! [`AppInfoReq`][ledger_eth_apdu::app_info::AppInfoReq] to fetch an
//! [`AppInfoResp`][ledger_eth_apdu::app_info::AppInfoResp] containing application information
//! including the applet version, protocol version, and flags for enabled networks.
//!
//! ### Requesting addresses
//!
//! Addresses can be requested via [`AddressReq`][ledger_eth_apdu::address::AddressReq],
//! returning an [`AddressResp`][ledger_eth_apdu::address::AddressResp] containing the
//! EIP-55 checksummed address for the provided derivation path. Where the display flag is set
//! the address is shown for confirmation prior to returning.
//!
//! ### Signing a message
//!
//! Messages are signed via [`SignMsgReq`][ledger_eth_apdu::sign_msg::SignMsgReq], returning a
//! [`SignMsgResp`][ledger_eth_apdu::sign_msg::SignMsgResp] containing `r || s || v`.
//!
//! 1. The request is validated (message length, enabled network, path depth)
//! 2. The signing address is derived and shown for confirmation
//! 3. The message is summarised (verbatim where printable, otherwise hex) and shown for confirmation
//! 4. The preimage is hashed with Keccak-256 and the digest signed by the keystore
//!
//! Rejection at either confirmation returns [`Status::UserAbort`][ledger_eth_apdu::status::Status]
//! without invoking the keystore.
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub use ledger_eth_apdu::{self as apdu};

pub mod config;

pub mod engine;

pub mod helpers;
