//! The bounded record tree one gateway report is built from
//!
//! A report carries at most [`MAX_DEVICES`] devices with at most
//! [`MAX_DATA_POINTS`] data points each. The collections are
//! [`heapless::Vec`]s sized by those constants, so the limits are enforced
//! where the tree is built (an over-capacity `push` is refused) and the
//! serializer can never observe more entries than it budgets for.
//!
//! All text fields are borrowed. Serialization reads the tree exactly once
//! and never copies, mutates, or retains it past the call.

use heapless::Vec;

/// Maximum number of devices in one report.
pub const MAX_DEVICES: usize = 8;

/// Maximum number of data points per device.
pub const MAX_DATA_POINTS: usize = 16;

/// One timestamped meter reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MeterDataPoint<'a> {
    /// Acquisition time, `"YYYY-MM-DD HH:MM"`.
    pub timestamp: &'a str,
    /// Clock reported by the meter itself, `"YYYY-MM-DD HH:MM"`.
    pub meter_datetime: &'a str,
    /// Accumulated total. Rendered with exactly three fraction digits.
    pub total_m3: f32,
    /// Status label, e.g. `"OK"`.
    pub status: &'a str,
}

/// One metering endpoint and its readings.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceReading<'a> {
    /// Medium being metered, e.g. `"water"`.
    pub media: &'a str,
    /// Meter model, e.g. `"waterstarm"`.
    pub meter: &'a str,
    /// Device identifier.
    pub device_id: &'a str,
    /// Unit of the accumulated totals, e.g. `"m3"`.
    pub unit: &'a str,
    /// The readings, in acquisition order.
    pub data: Vec<MeterDataPoint<'a>, MAX_DATA_POINTS>,
}

/// The per-device payload of one report.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValuesBlock<'a> {
    /// Device readings, in report order.
    pub devices: Vec<DeviceReading<'a>, MAX_DEVICES>,
}

/// One gateway report: gateway-level metadata plus the per-device payload.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GatewayRecord<'a> {
    /// Gateway identifier.
    pub gateway_id: &'a str,
    /// Report date, `"YYYY-MM-DD"`.
    pub date: &'a str,
    /// Device type label.
    pub device_type: &'a str,
    /// Sampling interval in minutes.
    pub interval_minutes: u32,
    /// Reading count as reported by the caller. Emitted verbatim, not
    /// recomputed from the nested data points.
    pub total_readings: u32,
    /// The per-device payload.
    pub values: ValuesBlock<'a>,
}
