// Copyright (c) 2022-2023 The MobileCoin Foundation

//! The [Engine] provides message signing functionality required by hardware wallets.
//!
//! This handles [Event] inputs and returns [Output] responses to the caller,
//! see [apdu][crate::apdu] for APDU protocol / encoding specifications.

use strum::{Display, EnumIter, EnumString, EnumVariantNames};

use ledger_eth_apdu::{coin::Coin, MAX_MSG_LEN};

use crate::{config::Config, helpers::Address};

mod confirm;
pub use confirm::{Confirm, ConfirmParams, IDENTITY_TITLE};

mod digest;
pub use digest::{Digest, Keccak, MsgHasher};

mod error;
pub use error::{DriverError, Error, Fault};

mod event;
pub use event::Event;

pub mod keypath;

mod output;
pub use output::{Output, APP_NAME, APP_VERSION};

mod preimage;
pub use preimage::{Preimage, MAX_MSG_DIGITS, MSG_HEADER, PREIMAGE_LEN};

mod signature;
pub use signature::{Signature, RS_LEN};

mod summary;
pub use summary::{MessageKind, Summary, SummaryBody, SUMMARY_LEN, TITLE_HEX, TITLE_TEXT};

/// Engine state enumeration.
///
/// Each request starts at [`State::Validate`] and only moves forward
/// until reaching a terminal state.
#[derive(
    Copy, Clone, PartialEq, PartialOrd, Debug, EnumString, Display, EnumVariantNames, EnumIter,
)]
pub enum State {
    /// Idle, no request handled
    Init,
    /// Validating request
    Validate,
    /// Deriving signing address
    DeriveAddress,
    /// Awaiting identity (address) confirmation
    ConfirmIdentity,
    /// Building message preimage and summary
    BuildPreimage,
    /// Awaiting content confirmation
    ConfirmContent,
    /// Computing digest
    Hash,
    /// Signing digest
    Sign,
    /// Request complete
    Complete,
    /// Request rejected as invalid
    Invalid,
    /// Request rejected by the user
    Aborted,
    /// Keystore failure
    Failed,
}

impl State {
    /// Check whether this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            State::Complete | State::Invalid | State::Aborted | State::Failed
        )
    }
}

/// [`Driver`] trait provides keystore support for [`Engine`] instances.
///
/// Keystore operations must not mutate stored key material.
pub trait Driver {
    /// Derive the display address for a network and derivation path
    fn derive_address(&self, coin: Coin, path: &[u32]) -> Result<Address, DriverError>;

    /// Sign a digest with the key at the provided derivation path,
    /// returning `r || s` and the recovery id
    fn sign(&self, path: &[u32], digest: &Digest) -> Result<([u8; RS_LEN], i32), DriverError>;
}

impl<T: Driver> Driver for &T {
    fn derive_address(&self, coin: Coin, path: &[u32]) -> Result<Address, DriverError> {
        T::derive_address(self, coin, path)
    }

    fn sign(&self, path: &[u32], digest: &Digest) -> Result<([u8; RS_LEN], i32), DriverError> {
        T::sign(self, path, digest)
    }
}

/// [Engine] provides hardware-independent message signing for Ethereum wallets
pub struct Engine<DRV: Driver, H: MsgHasher = Keccak> {
    state: State,
    config: Config,
    drv: DRV,
    hasher: H,
}

impl<DRV: Driver> Engine<DRV> {
    /// Create a new engine instance with the provided driver and default configuration
    pub const fn new(drv: DRV) -> Self {
        Self::new_with_hasher(drv, Config::new(), Keccak)
    }

    /// Create a new engine instance with the provided driver and configuration
    pub const fn new_with_config(drv: DRV, config: Config) -> Self {
        Self::new_with_hasher(drv, config, Keccak)
    }
}

impl<DRV: Driver, H: MsgHasher> Engine<DRV, H> {
    /// Create a new engine instance with the provided driver, configuration and hasher
    pub const fn new_with_hasher(drv: DRV, config: Config, hasher: H) -> Self {
        Self {
            state: State::Init,
            config,
            drv,
            hasher,
        }
    }

    /// Handle incoming events, using the provided [`Confirm`] implementation
    /// for user approval
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn update<C: Confirm>(&mut self, evt: &Event, ui: &mut C) -> Result<Output, Error> {
        #[cfg(feature = "log")]
        log::debug!("event: {:02x?}", evt);

        match evt {
            Event::None => Ok(Output::None),

            Event::GetAppInfo => Ok(Output::AppInfo {
                flags: self.config.app_flags(),
            }),

            Event::GetAddress {
                coin,
                path,
                display,
            } => self
                .get_address(*coin, path, *display, ui)
                .map(|address| Output::Address { address }),

            Event::SignMsg { coin, path, msg } => self
                .sign_msg(*coin, path, msg, ui)
                .map(|signature| Output::Signature { signature }),
        }
    }

    /// Fetch the address for a network and derivation path,
    /// displaying it for confirmation where `display` is set
    pub fn get_address<C: Confirm>(
        &mut self,
        coin: Coin,
        path: &[u32],
        display: bool,
        ui: &mut C,
    ) -> Result<Address, Error> {
        self.state = State::Validate;
        self.validate(coin, path, 0).map_err(|e| self.fail(e))?;

        self.transition(State::DeriveAddress);
        let address = self.derive_address(coin, path).map_err(|e| self.fail(e))?;

        if display {
            self.transition(State::ConfirmIdentity);

            let params = ConfirmParams::new(coin.name(), &address, true);
            if !ui.confirm(&params) {
                return Err(self.fail(Error::UserAbort));
            }
        }

        self.transition(State::Complete);

        Ok(address)
    }

    /// Sign a personal message.
    ///
    /// The signing address and message summary are each confirmed via `ui`
    /// before the digest is computed, rejection at either prompt returns
    /// [`Error::UserAbort`] without invoking the keystore.
    #[cfg_attr(feature = "noinline", inline(never))]
    pub fn sign_msg<C: Confirm>(
        &mut self,
        coin: Coin,
        path: &[u32],
        msg: &[u8],
        ui: &mut C,
    ) -> Result<Signature, Error> {
        self.state = State::Validate;
        self.validate(coin, path, msg.len())
            .map_err(|e| self.fail(e))?;

        // Derive and confirm signing identity
        self.transition(State::DeriveAddress);
        let address = self.derive_address(coin, path).map_err(|e| self.fail(e))?;

        self.transition(State::ConfirmIdentity);
        if !ui.confirm(&ConfirmParams::new(IDENTITY_TITLE, &address, true)) {
            return Err(self.fail(Error::UserAbort));
        }

        // Build preimage and summary, capacity is fixed by MAX_MSG_LEN so
        // failures here are faults rather than errors
        self.transition(State::BuildPreimage);
        let preimage = Preimage::build(msg).unwrap_or_else(|f| f.halt());
        let summary = Summary::build(msg, self.config.printable).unwrap_or_else(|f| f.halt());

        self.transition(State::ConfirmContent);
        if !ui.confirm(&ConfirmParams::new(summary.title(), &summary.body, true)) {
            return Err(self.fail(Error::UserAbort));
        }

        self.transition(State::Hash);
        let digest = self.hasher.digest(preimage.as_bytes());

        self.transition(State::Sign);
        let (rs, recovery_id) = match self.drv.sign(path, &digest) {
            Ok(v) => v,
            Err(_e) => {
                #[cfg(feature = "log")]
                log::warn!("keystore sign failed: {:?}", _e);

                return Err(self.fail(Error::Unknown));
            }
        };

        let signature = Signature::new(rs, recovery_id).unwrap_or_else(|f| f.halt());

        self.transition(State::Complete);

        Ok(signature)
    }

    /// Fetch engine state
    pub fn state(&self) -> State {
        self.state
    }

    /// Fetch engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reset engine state
    pub fn reset(&mut self) {
        self.state = State::Init;
    }

    /// Check request structure and policy prior to any display or keystore interaction
    fn validate(&self, coin: Coin, path: &[u32], msg_len: usize) -> Result<(), Error> {
        if msg_len > MAX_MSG_LEN {
            #[cfg(feature = "log")]
            log::warn!("message length {} exceeds maximum {}", msg_len, MAX_MSG_LEN);

            return Err(Error::InvalidInput);
        }

        if !self.config.coins.enabled(coin) {
            #[cfg(feature = "log")]
            log::warn!("network {} not enabled", coin);

            return Err(Error::InvalidInput);
        }

        if !keypath::is_valid_depth(path) {
            #[cfg(feature = "log")]
            log::warn!("invalid path depth {}", path.len());

            return Err(Error::InvalidInput);
        }

        Ok(())
    }

    /// Derive the address for a validated request
    fn derive_address(&self, coin: Coin, path: &[u32]) -> Result<Address, Error> {
        if !keypath::is_valid_address_path(coin, path) {
            #[cfg(feature = "log")]
            log::warn!("invalid {} address path: {:x?}", coin, path);

            return Err(Error::InvalidInput);
        }

        self.drv.derive_address(coin, path).map_err(|_e| {
            #[cfg(feature = "log")]
            log::warn!("keystore derivation failed: {:?}", _e);

            Error::InvalidInput
        })
    }

    /// Move to the next pipeline state
    fn transition(&mut self, next: State) {
        debug_assert!(
            next > self.state,
            "invalid transition {} -> {}",
            self.state,
            next
        );

        #[cfg(feature = "log")]
        log::trace!("state {} -> {}", self.state, next);

        self.state = next;
    }

    /// Move to the terminal state for an error
    fn fail(&mut self, e: Error) -> Error {
        let next = match e {
            Error::InvalidInput => State::Invalid,
            Error::UserAbort => State::Aborted,
            Error::Unknown => State::Failed,
        };

        self.transition(next);

        #[cfg(feature = "log")]
        log::debug!("request failed: {:?}", e);

        e
    }
}
