//! [`IoPort`](crate::ports::IoPort) implementations.
//!
//! `sim` runs everywhere and backs the tests. `gpio` targets boards with
//! the panel wired to `embedded-hal` pins. `comedi` drives the lab I/O
//! card and is only compiled with the `comedi` feature.

pub mod gpio;
pub mod sim;

#[cfg(feature = "comedi")]
pub mod comedi;
