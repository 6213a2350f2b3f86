//! Button, floor-sensor, stop and obstruction inputs.
//!
//! Single reads are passthroughs to the port. [`InputSnapshot`] gathers
//! the whole panel in one pass for poll loops.

use serde::{Deserialize, Serialize};

use crate::channels::{
    ButtonType, FLOOR_SENSOR_CHANNELS, N_BUTTONS, N_FLOORS, OBSTRUCTION, STOP, button_channel,
};
use crate::elevator::Elevator;
use crate::ports::IoPort;

/// Every input of the panel, sampled once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// `buttons[floor][button.index()]`
    pub buttons: [[bool; N_BUTTONS as usize]; N_FLOORS as usize],
    pub floor: Option<u8>,
    pub stop: bool,
    pub obstruction: bool,
}

impl InputSnapshot {
    pub fn button(&self, button: ButtonType, floor: u8) -> bool {
        self.buttons[floor as usize][button.index()]
    }

    /// Pressed `(floor, button)` pairs in floor-major order.
    pub fn pressed_buttons(&self) -> Vec<(u8, ButtonType)> {
        let mut pressed = Vec::new();
        for floor in 0..N_FLOORS {
            for button in ButtonType::ALL {
                if self.button(button, floor) {
                    pressed.push((floor, button));
                }
            }
        }
        pressed
    }
}

impl<IO: IoPort> Elevator<IO> {
    /// # Panics
    ///
    /// Panics if `floor >= N_FLOORS`.
    pub fn button_signal(&mut self, button: ButtonType, floor: u8) -> bool {
        let channel = button_channel(floor, button);
        self.io_mut().read_bit(channel)
    }

    /// Floor the car is level with, or `None` between floors.
    ///
    /// Sensors are scanned lowest floor first and the scan stops at the
    /// first active one. If several read active the lowest wins; the
    /// hardware never reports more than one.
    pub fn floor_sensor_signal(&mut self) -> Option<u8> {
        let io = self.io_mut();
        FLOOR_SENSOR_CHANNELS
            .iter()
            .position(|&channel| io.read_bit(channel))
            .map(|floor| floor as u8)
    }

    pub fn stop_signal(&mut self) -> bool {
        self.io_mut().read_bit(STOP)
    }

    pub fn obstruction_signal(&mut self) -> bool {
        self.io_mut().read_bit(OBSTRUCTION)
    }

    /// Sample all buttons (floor-major), then floor sensors, stop and
    /// obstruction.
    pub fn read_inputs(&mut self) -> InputSnapshot {
        let mut snapshot = InputSnapshot::default();
        for floor in 0..N_FLOORS {
            for button in ButtonType::ALL {
                snapshot.buttons[floor as usize][button.index()] =
                    self.button_signal(button, floor);
            }
        }
        snapshot.floor = self.floor_sensor_signal();
        snapshot.stop = self.stop_signal();
        snapshot.obstruction = self.obstruction_signal();
        snapshot
    }
}
