// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Bounded formatting helpers
//!
//! All buffers used when building preimages, summaries and addresses are
//! fixed capacity. [`Writer`] wraps these so every write is checked and
//! either applied in full or rejected with [`CapacityError`], never truncated.

use emstr::EncodeStr;
use heapless::Vec;

mod address;
pub use address::{eth_address, Address, ADDRESS_LEN};

/// Write rejected as it would exceed buffer capacity
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CapacityError;

/// Number of decimal digits required to represent `v`
pub const fn decimal_digits(mut v: usize) -> usize {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}

/// Fixed-capacity byte writer
#[derive(Clone, PartialEq, Debug)]
pub struct Writer<const N: usize> {
    buff: Vec<u8, N>,
}

impl<const N: usize> Default for Writer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Writer<N> {
    /// Create a new (empty) writer
    pub const fn new() -> Self {
        Self { buff: Vec::new() }
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.buff.len()
    }

    /// Check whether the writer is empty
    pub fn is_empty(&self) -> bool {
        self.buff.is_empty()
    }

    /// Remaining capacity
    pub fn remaining(&self) -> usize {
        N - self.buff.len()
    }

    fn reserve(&self, n: usize) -> Result<(), CapacityError> {
        if n > self.remaining() {
            return Err(CapacityError);
        }
        Ok(())
    }

    /// Append raw bytes
    pub fn put_bytes(&mut self, d: &[u8]) -> Result<usize, CapacityError> {
        self.reserve(d.len())?;
        self.buff.extend_from_slice(d).map_err(|_| CapacityError)?;
        Ok(d.len())
    }

    /// Append a string
    pub fn put_str(&mut self, s: &str) -> Result<usize, CapacityError> {
        self.put_bytes(s.as_bytes())
    }

    /// Append the decimal representation of `v`
    pub fn put_decimal(&mut self, v: usize) -> Result<usize, CapacityError> {
        self.reserve(decimal_digits(v))?;

        let mut d = [0u8; decimal_digits(usize::MAX)];
        let n = emstr::write!(&mut d[..], v).map_err(|_| CapacityError)?;

        self.put_bytes(&d[..n])
    }

    /// Append the lower-case hex encoding of `d`
    pub fn put_hex(&mut self, d: &[u8]) -> Result<usize, CapacityError> {
        let n = d.len() * 2;
        self.reserve(n)?;

        let start = self.buff.len();
        self.buff.resize(start + n, 0).map_err(|_| CapacityError)?;

        if hex::encode_to_slice(d, &mut self.buff[start..]).is_err() {
            self.buff.truncate(start);
            return Err(CapacityError);
        }

        Ok(n)
    }

    /// Fetch written bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buff
    }

    /// Consume the writer, returning the underlying buffer
    pub fn into_inner(self) -> Vec<u8, N> {
        self.buff
    }
}
