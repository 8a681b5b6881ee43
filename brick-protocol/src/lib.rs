//! Sensor Bus Command Protocol
//!
//! Every transaction on the sensor bus is a single fixed-size command frame
//! handed to the bus device through the exchange control call. The device
//! rewrites the frame in place: the status word reports progress and the
//! reply bytes land in the scratch area at the end.
//!
//! # Frame Layout
//!
//! ```text
//! ┌────────┬──────┬────────┬──────┬────────┬──────┬─────┬────────────┬─────────┬─────────────┬─────┐
//! │ STATUS │ PORT │ REPEAT │ TIME │ WR LEN │ ADDR │ REG │ WRITE DATA │ -RD LEN │ REPLY       │ PAD │
//! │ i32 LE │ 1B   │ 1B     │ i16  │ 1B     │ 1B   │ 1B  │ 30B        │ i8      │ 30B         │ 4B  │
//! └────────┴──────┴────────┴──────┴────────┴──────┴─────┴────────────┴─────────┴─────────────┴─────┘
//! ```
//!
//! Numeric fields are little-endian. The write length counts the address and
//! register bytes; the read length is stored negated.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;

pub use frame::{
    BusFrame, FrameError, FrameStatus, EXCHANGE_REQUEST, FRAME_SIZE, MAX_READ_LEN,
    MAX_WRITE_LEN,
};
