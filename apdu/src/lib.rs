// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Protocol / APDU definitions for Ethereum message signing
//!
//! This module provides a protocol specification and reference implementation for communication
//! with hardware wallets supporting personal message signing (`0x19 "Ethereum Signed Message:\n"`).
//!
//! APDUs use a primitive binary encoding to simplify implementation with unsupported languages and platforms.
//! Encodings are intended to be _roughly_ equivalent to packed c structures while maintaining
//! 32-bit field alignment to reduce the need for unaligned access on constrained platforms.
//! All field encodings are little-endian.
//!

#![no_std]

pub use ledger_proto::{ApduError, ApduReq, ApduStatic};

pub mod address;
pub mod app_info;
pub mod coin;
pub mod prelude;
pub mod sign_msg;
pub mod status;

mod helpers;

/// Ethereum APDU Class
pub const ETH_APDU_CLA: u8 = 0xe0;

/// Protocol version reported via [`AppInfoResp`][app_info::AppInfoResp]
pub const ETH_PROTO_VERSION: u8 = 0x01;

/// Maximum message length accepted for signing
pub const MAX_MSG_LEN: usize = 1024;

/// Maximum BIP-0032 derivation path depth
pub const MAX_KEYPATH_DEPTH: usize = 10;

/// Derivation path storage, bounded by [`MAX_KEYPATH_DEPTH`]
pub type KeyPath = heapless::Vec<u32, MAX_KEYPATH_DEPTH>;

/// APDU instruction codes
#[derive(Copy, Clone, Debug, PartialEq, num_enum::TryFromPrimitive)]
#[repr(u8)]
pub enum Instruction {
    // General instructions
    GetAppInfo = 0x00,

    // Ethereum instructions
    /// Fetch (and optionally display) the address for a derivation path
    GetAddress = 0x10,

    /// Sign a personal message
    SignMsg = 0x20,
}
