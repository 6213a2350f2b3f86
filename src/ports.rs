//! Port trait: the boundary between the channel map and the I/O card.
//!
//! ```text
//!   Elevator ──▶ IoPort ──▶ SimIo | GpioIo | ComediIo
//! ```
//!
//! The HAL consumes exactly these five primitives. Backends own transport
//! errors: a write that fails after `init` is logged by the backend and
//! never surfaced to the caller.

use crate::channels::Channel;

/// Digital/analog I/O primitives of the underlying card.
pub trait IoPort {
    /// Bring the transport up. `false` means the hardware is unusable.
    fn init(&mut self) -> bool;

    /// Drive a digital output high.
    fn set_bit(&mut self, channel: Channel);

    /// Drive a digital output low.
    fn clear_bit(&mut self, channel: Channel);

    /// Sample a digital input.
    fn read_bit(&mut self, channel: Channel) -> bool;

    /// Write an analog output magnitude.
    fn write_analog(&mut self, channel: Channel, value: u16);

    fn write_bit(&mut self, channel: Channel, high: bool) {
        if high {
            self.set_bit(channel);
        } else {
            self.clear_bit(channel);
        }
    }
}

impl<T: IoPort + ?Sized> IoPort for &mut T {
    fn init(&mut self) -> bool {
        (**self).init()
    }

    fn set_bit(&mut self, channel: Channel) {
        (**self).set_bit(channel);
    }

    fn clear_bit(&mut self, channel: Channel) {
        (**self).clear_bit(channel);
    }

    fn read_bit(&mut self, channel: Channel) -> bool {
        (**self).read_bit(channel)
    }

    fn write_analog(&mut self, channel: Channel, value: u16) {
        (**self).write_analog(channel, value);
    }
}

impl<T: IoPort + ?Sized> IoPort for Box<T> {
    fn init(&mut self) -> bool {
        (**self).init()
    }

    fn set_bit(&mut self, channel: Channel) {
        (**self).set_bit(channel);
    }

    fn clear_bit(&mut self, channel: Channel) {
        (**self).clear_bit(channel);
    }

    fn read_bit(&mut self, channel: Channel) -> bool {
        (**self).read_bit(channel)
    }

    fn write_analog(&mut self, channel: Channel, value: u16) {
        (**self).write_analog(channel, value);
    }
}
