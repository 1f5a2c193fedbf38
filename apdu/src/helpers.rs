// Copyright (c) 2022-2023 The MobileCoin Foundation

/// Encoding helper for fixed-size byte arrays
pub(crate) mod arr {
    use encdec::Error;

    pub fn enc<const N: usize>(d: &[u8; N], buff: &mut [u8]) -> Result<usize, Error> {
        if buff.len() < d.len() {
            return Err(Error::Length);
        }

        buff[..d.len()].copy_from_slice(&d[..]);

        Ok(d.len())
    }

    pub fn enc_len<const N: usize>(d: &[u8; N]) -> Result<usize, Error> {
        Ok(d.len())
    }

    pub fn dec<const N: usize>(buff: &[u8]) -> Result<([u8; N], usize), Error> {
        if buff.len() < N {
            return Err(Error::Length);
        }

        let mut d = [0u8; N];
        d.copy_from_slice(&buff[..N]);

        Ok((d, N))
    }
}

/// Encoding helper for derivation paths (`u32` little-endian elements)
pub(crate) mod path {
    use byteorder::{ByteOrder, LittleEndian};

    use crate::{ApduError, KeyPath, MAX_KEYPATH_DEPTH};

    pub fn enc(p: &[u32], buff: &mut [u8]) -> Result<usize, ApduError> {
        if p.len() > MAX_KEYPATH_DEPTH {
            return Err(ApduError::InvalidLength);
        }
        if buff.len() < p.len() * 4 {
            return Err(ApduError::InvalidLength);
        }

        LittleEndian::write_u32_into(p, &mut buff[..p.len() * 4]);

        Ok(p.len() * 4)
    }

    pub fn dec(buff: &[u8], count: usize) -> Result<(KeyPath, usize), ApduError> {
        // Bound count before touching the buffer
        if count > MAX_KEYPATH_DEPTH {
            return Err(ApduError::InvalidLength);
        }
        if buff.len() < count * 4 {
            return Err(ApduError::InvalidLength);
        }

        let mut p = KeyPath::new();
        for c in buff[..count * 4].chunks_exact(4) {
            // Capacity checked above
            p.push(LittleEndian::read_u32(c))
                .map_err(|_| ApduError::InvalidLength)?;
        }

        Ok((p, count * 4))
    }
}
