//! Serialize a gateway report into JSON text
//!
//! The document shape is fixed: one report object wrapped in a single-element
//! array, compact (no whitespace), keys always in the same order. [`to_slice`]
//! is the core entry point; [`to_vec`] and [`to_string`] are conveniences on
//! top of it. [`max_output_size`] bounds the buffer a caller has to provide.

use core::fmt;

use heapless::{String, Vec};

use crate::record::{
    DeviceReading, GatewayRecord, MeterDataPoint, ValuesBlock, MAX_DATA_POINTS, MAX_DEVICES,
};

use self::cursor::Cursor;

mod cursor;

/// Serialization result
pub type Result<T> = ::core::result::Result<T, Error>;

/// This type represents all possible errors that can occur when serializing a
/// gateway report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Output buffer has zero capacity
    InvalidArgument,
    /// Output buffer is too small for the document
    BufferTooSmall,
    /// A value could not be formatted
    Format,
}

#[cfg(feature = "std")]
impl ::std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Error::InvalidArgument => "Output buffer has zero capacity",
                Error::BufferTooSmall => "Output buffer is too small",
                Error::Format => "A value could not be formatted",
            }
        )
    }
}

fn key(out: &mut Cursor<'_>, name: &str) -> Result<()> {
    out.push(b'"')?;
    out.extend_from_slice(name.as_bytes())?;
    out.extend_from_slice(b"\":")
}

fn quoted(out: &mut Cursor<'_>, v: &str) -> Result<()> {
    out.push(b'"')?;
    out.extend_from_slice(v.as_bytes())?;
    out.push(b'"')
}

fn data_point(out: &mut Cursor<'_>, point: &MeterDataPoint<'_>) -> Result<()> {
    out.push(b'{')?;
    key(out, "timestamp")?;
    quoted(out, point.timestamp)?;
    out.push(b',')?;
    key(out, "meter_datetime")?;
    quoted(out, point.meter_datetime)?;
    out.push(b',')?;
    key(out, "total_m3")?;
    out.push_f32(point.total_m3)?;
    out.push(b',')?;
    key(out, "status")?;
    quoted(out, point.status)?;
    out.push(b'}')
}

fn device(out: &mut Cursor<'_>, dev: &DeviceReading<'_>) -> Result<()> {
    out.push(b'{')?;
    key(out, "media")?;
    quoted(out, dev.media)?;
    out.push(b',')?;
    key(out, "meter")?;
    quoted(out, dev.meter)?;
    out.push(b',')?;
    key(out, "deviceId")?;
    quoted(out, dev.device_id)?;
    out.push(b',')?;
    key(out, "unit")?;
    quoted(out, dev.unit)?;
    out.push(b',')?;
    key(out, "data")?;
    out.push(b'[')?;
    for (i, point) in dev.data.iter().enumerate() {
        if i > 0 {
            out.push(b',')?;
        }
        data_point(out, point)?;
    }
    out.extend_from_slice(b"]}")
}

fn values(out: &mut Cursor<'_>, block: &ValuesBlock<'_>) -> Result<()> {
    out.push(b'{')?;
    key(out, "device_count")?;
    out.push_u32(block.devices.len() as u32)?;
    out.push(b',')?;
    key(out, "readings")?;
    out.push(b'[')?;
    for (i, dev) in block.devices.iter().enumerate() {
        if i > 0 {
            out.push(b',')?;
        }
        device(out, dev)?;
    }
    out.extend_from_slice(b"]}")
}

fn gateway(out: &mut Cursor<'_>, record: &GatewayRecord<'_>) -> Result<()> {
    out.extend_from_slice(b"[{")?;
    key(out, "gatewayId")?;
    quoted(out, record.gateway_id)?;
    out.push(b',')?;
    key(out, "date")?;
    quoted(out, record.date)?;
    out.push(b',')?;
    key(out, "deviceType")?;
    quoted(out, record.device_type)?;
    out.push(b',')?;
    key(out, "interval_minutes")?;
    out.push_u32(record.interval_minutes)?;
    out.push(b',')?;
    key(out, "total_readings")?;
    out.push_u32(record.total_readings)?;
    out.push(b',')?;
    key(out, "values")?;
    values(out, &record.values)?;
    out.extend_from_slice(b"}]")
}

/// Serializes the report as a JSON document into the provided buffer
///
/// Returns the number of bytes written. The output is not NUL terminated and
/// the buffer may be filled to its full length; bytes past the returned
/// length are left untouched. After an error the buffer holds an unspecified
/// partial prefix.
///
/// Text fields are emitted verbatim, so they must not contain `"`, `\` or
/// control characters; the identifiers, dates and status labels this document
/// carries satisfy that. Totals must be finite to render as valid JSON.
pub fn to_slice(record: &GatewayRecord<'_>, buf: &mut [u8]) -> Result<usize> {
    if buf.is_empty() {
        return Err(Error::InvalidArgument);
    }
    let mut out = Cursor::new(buf);
    gateway(&mut out, record)?;
    Ok(out.end())
}

/// Serializes the report as a JSON document in a byte vector
pub fn to_vec<const N: usize>(record: &GatewayRecord<'_>) -> Result<Vec<u8, N>> {
    let mut buf = Vec::<u8, N>::new();
    buf.resize_default(N).map_err(|_| Error::BufferTooSmall)?;
    let len = to_slice(record, &mut buf)?;
    buf.truncate(len);
    Ok(buf)
}

/// Serializes the report as a JSON document in a string
pub fn to_string<const N: usize>(record: &GatewayRecord<'_>) -> Result<String<N>> {
    // The document is ASCII syntax around borrowed `&str` content, so the
    // bytes are valid UTF-8.
    Ok(unsafe { String::from_utf8_unchecked(to_vec(record)?) })
}

/// Upper bound, in bytes, for the document produced by [`to_slice`]
///
/// The bound is a function of [`MAX_DEVICES`] and [`MAX_DATA_POINTS`] alone
/// and never inspects a record. It is usable in constant context, so one
/// buffer can be sized up front for every report a program will emit:
///
/// ```
/// let _buf = [0u8; gateway_json_core::max_output_size()];
/// ```
///
/// Borrowed text fields are budgeted at 32 bytes each; a record whose
/// identifiers, dates or labels run longer is not covered and needs a
/// caller-sized buffer. The numeric budgets are exact worst cases.
pub const fn max_output_size() -> usize {
    // Keys, quotes, brackets and separators per nesting level. The exact
    // counts are 61 per data point, 58 per device and 124 for the shell.
    const POINT_SYNTAX: usize = 64;
    const DEVICE_SYNTAX: usize = 64;
    const SHELL_SYNTAX: usize = 128;

    const TEXT: usize = 32;
    const FLOAT: usize = cursor::F32_FIXED3_MAX;
    const UINT: usize = 10; // "4294967295"

    const PER_POINT: usize = POINT_SYNTAX + 3 * TEXT + FLOAT;
    const PER_DEVICE: usize = DEVICE_SYNTAX + 4 * TEXT + MAX_DATA_POINTS * PER_POINT;

    SHELL_SYNTAX + 3 * TEXT + 3 * UINT + MAX_DEVICES * PER_DEVICE
}
