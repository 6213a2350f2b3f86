//! Elevator I/O hardware abstraction layer.
//!
//! Exposes the lab elevator's motor, lamps, buttons and sensors in terms of
//! floors, button types and directions. Every operation resolves its
//! physical channel through the fixed tables in [`channels`] and performs
//! one access on an [`IoPort`](ports::IoPort).
//!
//! ```text
//!   controller ──▶ Elevator / Panel ──▶ channels ──▶ IoPort ──▶ card
//! ```

#![deny(unused_must_use)]

pub mod adapters;
pub mod channels;
pub mod config;
pub mod drivers;
pub mod elevator;
pub mod error;
pub mod panel;
pub mod ports;

pub use channels::{ButtonType, Channel, MOTOR_SPEED, N_BUTTONS, N_FLOORS};
pub use drivers::motor::MotorDirection;
pub use drivers::sensors::InputSnapshot;
pub use elevator::Elevator;
pub use error::{Error, Result};
pub use panel::{OutputSnapshot, Panel};
pub use ports::IoPort;
