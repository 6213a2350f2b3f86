//! Button lamps, floor indicator, door-open and stop lamps.
//!
//! Each lamp is one digital output. Button lamps are resolved through
//! [`LAMP_CHANNELS`](crate::channels::LAMP_CHANNELS); the others have
//! fixed channels.

use log::trace;

use crate::channels::{
    ButtonType, LIGHT_DOOR_OPEN, LIGHT_FLOOR_IND1, LIGHT_FLOOR_IND2, LIGHT_STOP, N_FLOORS,
    lamp_channel,
};
use crate::elevator::Elevator;
use crate::ports::IoPort;

/// Two-line binary pattern `(line A, line B)` shown for `floor`.
///
/// Line A carries bit 1, line B bit 0. Every floor lights a distinct
/// pattern; floor 0 is both lines dark, which still reads as "ground".
///
/// # Panics
///
/// Panics if `floor >= N_FLOORS`.
pub fn floor_indicator_pattern(floor: u8) -> (bool, bool) {
    assert!(
        floor < N_FLOORS,
        "floor {floor} out of range (must be < {N_FLOORS})"
    );
    (floor & 0x02 != 0, floor & 0x01 != 0)
}

impl<IO: IoPort> Elevator<IO> {
    /// Switch the lamp of `button` at `floor`.
    ///
    /// # Panics
    ///
    /// Panics if `floor >= N_FLOORS`.
    pub fn set_button_lamp(&mut self, button: ButtonType, floor: u8, on: bool) {
        let channel = lamp_channel(floor, button);
        trace!("lamp {:?}@{} -> {}", button, floor, on);
        self.io_mut().write_bit(channel, on);
    }

    /// Show `floor` on the two-line indicator.
    ///
    /// # Panics
    ///
    /// Panics if `floor >= N_FLOORS`.
    pub fn set_floor_indicator(&mut self, floor: u8) {
        let (line_a, line_b) = floor_indicator_pattern(floor);
        let io = self.io_mut();
        io.write_bit(LIGHT_FLOOR_IND1, line_a);
        io.write_bit(LIGHT_FLOOR_IND2, line_b);
    }

    pub fn set_door_open_lamp(&mut self, on: bool) {
        self.io_mut().write_bit(LIGHT_DOOR_OPEN, on);
    }

    pub fn set_stop_lamp(&mut self, on: bool) {
        self.io_mut().write_bit(LIGHT_STOP, on);
    }

    /// Turn every button lamp off, floor by floor.
    pub fn clear_all_button_lamps(&mut self) {
        for floor in 0..N_FLOORS {
            for button in ButtonType::ALL {
                self.set_button_lamp(button, floor, false);
            }
        }
    }
}
