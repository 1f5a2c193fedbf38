// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Request outcomes and their status word mapping

use ledger_apdu::APDUErrorCode;
use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::ApduError;

/// Signing outcome, returned to the host as the APDU status word
#[derive(
    Copy, Clone, PartialEq, Debug, EnumString, Display, EnumVariantNames, EnumIter, TryFromPrimitive,
)]
#[repr(u8)]
pub enum Status {
    /// Request completed
    Ok = 0x00,
    /// Malformed or policy-disallowed request
    InvalidInput = 0x01,
    /// Rejected at a confirmation prompt
    UserAbort = 0x02,
    /// Keystore failure
    Unknown = 0x03,
}

impl Status {
    /// Fetch the status word for this outcome
    pub const fn code(&self) -> APDUErrorCode {
        match self {
            Status::Ok => APDUErrorCode::NoError,
            Status::InvalidInput => APDUErrorCode::DataInvalid,
            Status::UserAbort => APDUErrorCode::ConditionsNotSatisfied,
            Status::Unknown => APDUErrorCode::Unknown,
        }
    }

    /// Resolve an outcome from a response status word
    pub fn from_code(code: u16) -> Option<Self> {
        let s = match APDUErrorCode::try_from(code).ok()? {
            APDUErrorCode::NoError => Status::Ok,
            APDUErrorCode::DataInvalid => Status::InvalidInput,
            APDUErrorCode::ConditionsNotSatisfied => Status::UserAbort,
            APDUErrorCode::Unknown => Status::Unknown,
            _ => return None,
        };
        Some(s)
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        s.code() as u16
    }
}

/// Fetch the status word reported for request decoding failures
pub fn apdu_error_code(e: &ApduError) -> APDUErrorCode {
    match e {
        ApduError::InvalidLength => APDUErrorCode::WrongLength,
        _ => APDUErrorCode::DataInvalid,
    }
}
