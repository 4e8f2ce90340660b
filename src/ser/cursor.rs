//! The bounded write cursor every document fragment goes through

use core::fmt::Write;

use heapless::String;

use super::{Error, Result};

/// Widest rendered `f32` with three fraction digits: a sign, up to 39
/// integer digits, the point and the fraction.
pub(crate) const F32_FIXED3_MAX: usize = 44;

/// Tracks how much of the output buffer is used and refuses to write past
/// its end. An append either fits completely or fails with
/// [`Error::BufferTooSmall`], leaving the already-written prefix in place.
pub(crate) struct Cursor<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Cursor { buf, len: 0 }
    }

    /// Bytes written so far.
    pub fn end(&self) -> usize {
        self.len
    }

    pub fn push(&mut self, c: u8) -> Result<()> {
        if self.len < self.buf.len() {
            self.buf[self.len] = c;
            self.len += 1;
            Ok(())
        } else {
            Err(Error::BufferTooSmall)
        }
    }

    pub fn extend_from_slice(&mut self, other: &[u8]) -> Result<()> {
        if self.len + other.len() > self.buf.len() {
            // won't fit in the buf; don't modify anything and return an error
            return Err(Error::BufferTooSmall);
        }
        self.buf[self.len..self.len + other.len()].copy_from_slice(other);
        self.len += other.len();
        Ok(())
    }

    pub fn push_u32(&mut self, v: u32) -> Result<()> {
        let mut digits = [0u8; 10]; // "4294967295"
        let mut v = v;
        let mut i = digits.len() - 1;
        loop {
            digits[i] = (v % 10) as u8 + b'0';
            v /= 10;
            if v == 0 {
                break;
            }
            i -= 1;
        }
        self.extend_from_slice(&digits[i..])
    }

    /// Accumulated totals travel with exactly three fraction digits.
    pub fn push_f32(&mut self, v: f32) -> Result<()> {
        let mut s: String<F32_FIXED3_MAX> = String::new();
        write!(&mut s, "{:.3}", v).map_err(|_| Error::Format)?;
        self.extend_from_slice(s.as_bytes())
    }
}
