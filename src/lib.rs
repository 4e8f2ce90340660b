//! Gateway meter readings as JSON for `no_std` programs
//!
//! This crate renders one fixed-shape report of periodic meter readings (a
//! gateway owning up to 8 devices, each carrying up to 16 timestamped data
//! points) as a compact JSON document in a caller-provided byte buffer. It is
//! aimed at firmware and other resource constrained producers that must emit
//! telemetry without a general-purpose JSON library.
//!
//! # Current features
//!
//! - Serialization doesn't require memory allocations and performs no I/O
//! - The record tree is statically bounded; oversized input is refused where
//!   the tree is built, never discovered mid-serialization
//! - Every write is checked against the remaining buffer capacity and the
//!   error type is a simple C like enum (less overhead, smaller memory
//!   footprint)
//! - [`max_output_size`] gives a compile time upper bound for sizing the
//!   output buffer once, up front
//!
//! # Non-features
//!
//! This is explicitly out of scope
//!
//! - Parsing JSON
//! - Escaping or validating field contents (callers supply trusted text; see
//!   [`to_slice`])
//! - Anything that involves dynamic memory allocation
//!
//! # Example
//!
//! ```
//! use gateway_json_core::{max_output_size, to_slice};
//! use gateway_json_core::record::{DeviceReading, GatewayRecord, MeterDataPoint, ValuesBlock};
//!
//! let mut device = DeviceReading {
//!     media: "water",
//!     meter: "m1",
//!     device_id: "d1",
//!     unit: "m3",
//!     data: heapless::Vec::new(),
//! };
//! device
//!     .data
//!     .push(MeterDataPoint {
//!         timestamp: "2024-01-01 00:00",
//!         meter_datetime: "2024-01-01 00:00",
//!         total_m3: 12.345,
//!         status: "OK",
//!     })
//!     .unwrap();
//!
//! let mut values = ValuesBlock::default();
//! values.devices.push(device).unwrap();
//!
//! let record = GatewayRecord {
//!     gateway_id: "GW1",
//!     date: "2024-01-01",
//!     device_type: "meter",
//!     interval_minutes: 15,
//!     total_readings: 1,
//!     values,
//! };
//!
//! let mut buf = [0u8; max_output_size()];
//! let len = to_slice(&record, &mut buf).unwrap();
//!
//! assert_eq!(
//!     &buf[..len],
//!     br#"[{"gatewayId":"GW1","date":"2024-01-01","deviceType":"meter","interval_minutes":15,"total_readings":1,"values":{"device_count":1,"readings":[{"media":"water","meter":"m1","deviceId":"d1","unit":"m3","data":[{"timestamp":"2024-01-01 00:00","meter_datetime":"2024-01-01 00:00","total_m3":12.345,"status":"OK"}]}]}}]"#
//! );
//! ```
#![deny(missing_docs)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod record;
pub mod ser;

pub use self::record::{
    DeviceReading, GatewayRecord, MeterDataPoint, ValuesBlock, MAX_DATA_POINTS, MAX_DEVICES,
};
pub use self::ser::{max_output_size, to_slice, to_string, to_vec, Error, Result};
