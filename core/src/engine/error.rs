// Copyright (c) 2022-2023 The MobileCoin Foundation

use ledger_eth_apdu::status::Status;

use crate::helpers::CapacityError;

/// [Engine][super::Engine] errors, returned to the caller
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[repr(u8)]
pub enum Error {
    /// Malformed or policy-disallowed request
    /// (oversized message, disabled network, invalid derivation path)
    #[cfg_attr(feature = "thiserror", error("invalid input"))]
    InvalidInput = 0x01,

    /// Request rejected by the user at a confirmation prompt
    #[cfg_attr(feature = "thiserror", error("user abort"))]
    UserAbort = 0x02,

    /// Keystore failed to sign an approved digest
    #[cfg_attr(feature = "thiserror", error("unknown"))]
    Unknown = 0x03,
}

impl From<Error> for Status {
    fn from(e: Error) -> Self {
        match e {
            Error::InvalidInput => Status::InvalidInput,
            Error::UserAbort => Status::UserAbort,
            Error::Unknown => Status::Unknown,
        }
    }
}

/// Opaque keystore failure reported by a [Driver][super::Driver]
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "thiserror", derive(thiserror::Error))]
#[cfg_attr(feature = "thiserror", error("keystore error"))]
pub struct DriverError;

/// Unrecoverable internal faults.
///
/// These indicate a broken build or keystore contract and are never
/// returned to the caller, see [`Fault::halt`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Fault {
    /// Keystore returned a recovery id that does not fit in a byte
    RecoveryId(i32),
    /// Bounded write exceeded a statically sized buffer
    Capacity,
    /// Display buffer contained non UTF-8 data
    Encoding,
}

impl From<CapacityError> for Fault {
    fn from(_: CapacityError) -> Self {
        Fault::Capacity
    }
}

impl Fault {
    /// Halt on an unrecoverable fault
    #[cold]
    pub fn halt(self) -> ! {
        #[cfg(feature = "log")]
        log::error!("fault: {:?}", self);

        panic!("unrecoverable fault: {self:?}")
    }
}
