// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Bounded message summaries for display

use heapless::String;
use static_assertions::const_assert;

use super::Fault;
use crate::{config::PrintableMode, helpers::Writer};

/// Maximum summary length in characters
pub const SUMMARY_LEN: usize = 64 + ELLIPSIS.len();

/// Bytes shown either side of the ellipsis for printable messages
const TEXT_EDGE: usize = 32;

/// Bytes shown (hex encoded) either side of the ellipsis for binary messages
const HEX_EDGE: usize = 16;

/// Longest binary message shown without elision
const HEX_FULL: usize = SUMMARY_LEN / 2;

const ELLIPSIS: &str = "...";

/// Title for printable messages
pub const TITLE_TEXT: &str = "Sign\nETH Message";

/// Title for binary (hex encoded) messages
pub const TITLE_HEX: &str = "Sign\nETH Message (hex)";

const_assert!(TEXT_EDGE * 2 + ELLIPSIS.len() <= SUMMARY_LEN);
const_assert!(HEX_EDGE * 4 + ELLIPSIS.len() <= SUMMARY_LEN);
const_assert!(HEX_FULL * 2 <= SUMMARY_LEN);

/// Message classification
#[derive(Copy, Clone, PartialEq, Debug, strum::Display)]
pub enum MessageKind {
    /// All bytes printable, displayed verbatim
    Text,
    /// Contains non-printable bytes, displayed hex encoded
    Binary,
}

/// Summary text for display
pub type SummaryBody = String<SUMMARY_LEN>;

/// Message summary, title and elided body
#[derive(Clone, PartialEq, Debug)]
pub struct Summary {
    /// Message classification, selects the prompt title
    pub kind: MessageKind,
    /// Display text, elided where the message exceeds the prompt
    pub body: SummaryBody,
}

impl Summary {
    /// Classify and summarise a message for display
    pub fn build(msg: &[u8], mode: PrintableMode) -> Result<Self, Fault> {
        let kind = if msg.iter().all(|b| mode.is_printable(*b)) {
            MessageKind::Text
        } else {
            MessageKind::Binary
        };

        let mut w = Writer::<SUMMARY_LEN>::new();
        let n = msg.len();

        match kind {
            MessageKind::Text if n <= SUMMARY_LEN => {
                w.put_bytes(msg)?;
            }
            MessageKind::Text => {
                w.put_bytes(&msg[..TEXT_EDGE])?;
                w.put_str(ELLIPSIS)?;
                w.put_bytes(&msg[n - TEXT_EDGE..])?;
            }
            MessageKind::Binary if n <= HEX_FULL => {
                w.put_hex(msg)?;
            }
            MessageKind::Binary => {
                w.put_hex(&msg[..HEX_EDGE])?;
                w.put_str(ELLIPSIS)?;
                w.put_hex(&msg[n - HEX_EDGE..])?;
            }
        }

        // Printable bytes in either mode are ASCII
        let body = String::from_utf8(w.into_inner()).map_err(|_| Fault::Encoding)?;

        Ok(Self { kind, body })
    }

    /// Fetch the confirmation title for this summary
    pub fn title(&self) -> &'static str {
        match self.kind {
            MessageKind::Text => TITLE_TEXT,
            MessageKind::Binary => TITLE_HEX,
        }
    }
}
