//! Channel assignments for the lab elevator I/O card.
//!
//! Single source of truth. Every driver resolves its lines through this
//! module rather than hard-coding channel numbers. The tables are `const`
//! and never change after the program starts.
//!
//! A channel is addressed as `subdevice << 8 | line`, matching the card's
//! DIO/analog subdevice layout:
//!
//! ```text
//!   0x100        analog out  (motor speed)
//!   0x200..0x207 digital in  (4 hall buttons, 4 floor sensors)
//!   0x300..0x30F digital out (lamps, floor indicator, motor direction)
//!   0x310..0x317 digital in  (6 buttons, stop, obstruction)
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RangeError;

/// Number of floors. Hardware-fixed.
pub const N_FLOORS: u8 = 4;

/// Buttons (and matching lamps) per floor.
pub const N_BUTTONS: u8 = 3;

/// Analog magnitude written to [`MOTOR`] while the car is moving.
pub const MOTOR_SPEED: u16 = 2800;

/// Largest value the 12-bit DAC accepts.
pub const ANALOG_FULL_SCALE: u16 = 4095;

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// Opaque physical line identifier understood by the I/O port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Channel(u16);

/// Subdevice reserved for positions with no physical line.
const UNWIRED_SUBDEVICE: u8 = 0xFF;

impl Channel {
    pub const fn new(subdevice: u8, line: u8) -> Self {
        Self(((subdevice as u16) << 8) | line as u16)
    }

    const fn unwired(slot: u8) -> Self {
        Self::new(UNWIRED_SUBDEVICE, slot)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn subdevice(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn line(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// `false` for the placeholder channels bound to buttons the rig
    /// does not have. Hardware backends treat these as no-connect.
    pub const fn is_wired(self) -> bool {
        self.subdevice() != UNWIRED_SUBDEVICE
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Button type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ButtonType {
    CallUp = 0,
    CallDown = 1,
    Command = 2,
}

impl ButtonType {
    /// Column order of the channel tables.
    pub const ALL: [ButtonType; N_BUTTONS as usize] =
        [ButtonType::CallUp, ButtonType::CallDown, ButtonType::Command];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Contract-checked conversion from a raw button index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N_BUTTONS`; addressing a nonexistent column
    /// would drive the wrong physical line.
    pub fn from_index(index: u8) -> Self {
        match Self::try_from(index) {
            Ok(button) => button,
            Err(_) => panic!("button type {index} out of range (must be < {N_BUTTONS})"),
        }
    }
}

impl TryFrom<u8> for ButtonType {
    type Error = RangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::CallUp),
            1 => Ok(Self::CallDown),
            2 => Ok(Self::Command),
            other => Err(RangeError::Button(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Motor (analog subdevice 1, DIO subdevice 3)
// ---------------------------------------------------------------------------

pub const MOTOR: Channel = Channel::new(1, 0);
/// HIGH = down, LOW = up.
pub const MOTORDIR: Channel = Channel::new(3, 15);

// ---------------------------------------------------------------------------
// Single-role lamps
// ---------------------------------------------------------------------------

pub const LIGHT_STOP: Channel = Channel::new(3, 14);
pub const LIGHT_DOOR_OPEN: Channel = Channel::new(3, 3);
/// Floor indicator line A, carries bit 1 of the floor index.
pub const LIGHT_FLOOR_IND1: Channel = Channel::new(3, 0);
/// Floor indicator line B, carries bit 0 of the floor index.
pub const LIGHT_FLOOR_IND2: Channel = Channel::new(3, 1);

// ---------------------------------------------------------------------------
// Button lamps
// ---------------------------------------------------------------------------

pub const LIGHT_UP1: Channel = Channel::new(3, 9);
pub const LIGHT_UP2: Channel = Channel::new(3, 8);
pub const LIGHT_UP3: Channel = Channel::new(3, 6);
pub const LIGHT_DOWN2: Channel = Channel::new(3, 7);
pub const LIGHT_DOWN3: Channel = Channel::new(3, 5);
pub const LIGHT_DOWN4: Channel = Channel::new(3, 4);
pub const LIGHT_COMMAND1: Channel = Channel::new(3, 13);
pub const LIGHT_COMMAND2: Channel = Channel::new(3, 12);
pub const LIGHT_COMMAND3: Channel = Channel::new(3, 11);
pub const LIGHT_COMMAND4: Channel = Channel::new(3, 10);
/// No hall-down lamp at the ground floor.
pub const LIGHT_DOWN1: Channel = Channel::unwired(0);
/// No hall-up lamp at the top floor.
pub const LIGHT_UP4: Channel = Channel::unwired(1);

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

pub const BUTTON_UP1: Channel = Channel::new(3, 17);
pub const BUTTON_UP2: Channel = Channel::new(3, 16);
pub const BUTTON_UP3: Channel = Channel::new(2, 1);
pub const BUTTON_DOWN2: Channel = Channel::new(2, 0);
pub const BUTTON_DOWN3: Channel = Channel::new(2, 2);
pub const BUTTON_DOWN4: Channel = Channel::new(2, 3);
pub const BUTTON_COMMAND1: Channel = Channel::new(3, 21);
pub const BUTTON_COMMAND2: Channel = Channel::new(3, 20);
pub const BUTTON_COMMAND3: Channel = Channel::new(3, 19);
pub const BUTTON_COMMAND4: Channel = Channel::new(3, 18);
pub const BUTTON_DOWN1: Channel = Channel::unwired(2);
pub const BUTTON_UP4: Channel = Channel::unwired(3);

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

pub const SENSOR_FLOOR1: Channel = Channel::new(2, 4);
pub const SENSOR_FLOOR2: Channel = Channel::new(2, 5);
pub const SENSOR_FLOOR3: Channel = Channel::new(2, 6);
pub const SENSOR_FLOOR4: Channel = Channel::new(2, 7);
pub const STOP: Channel = Channel::new(3, 22);
pub const OBSTRUCTION: Channel = Channel::new(3, 23);

/// Floor sensors, lowest floor first. Scan order is significant.
pub const FLOOR_SENSOR_CHANNELS: [Channel; N_FLOORS as usize] =
    [SENSOR_FLOOR1, SENSOR_FLOOR2, SENSOR_FLOOR3, SENSOR_FLOOR4];

// ---------------------------------------------------------------------------
// Floor × button tables
// ---------------------------------------------------------------------------

type ChannelMatrix = [[Channel; N_BUTTONS as usize]; N_FLOORS as usize];

pub const LAMP_CHANNELS: ChannelMatrix = [
    [LIGHT_UP1, LIGHT_DOWN1, LIGHT_COMMAND1],
    [LIGHT_UP2, LIGHT_DOWN2, LIGHT_COMMAND2],
    [LIGHT_UP3, LIGHT_DOWN3, LIGHT_COMMAND3],
    [LIGHT_UP4, LIGHT_DOWN4, LIGHT_COMMAND4],
];

pub const BUTTON_CHANNELS: ChannelMatrix = [
    [BUTTON_UP1, BUTTON_DOWN1, BUTTON_COMMAND1],
    [BUTTON_UP2, BUTTON_DOWN2, BUTTON_COMMAND2],
    [BUTTON_UP3, BUTTON_DOWN3, BUTTON_COMMAND3],
    [BUTTON_UP4, BUTTON_DOWN4, BUTTON_COMMAND4],
];

/// Every wired digital output, in the order `init` resets them.
pub const OUTPUT_CHANNELS: [Channel; 15] = [
    LIGHT_FLOOR_IND1,
    LIGHT_FLOOR_IND2,
    LIGHT_DOOR_OPEN,
    LIGHT_DOWN4,
    LIGHT_DOWN3,
    LIGHT_UP3,
    LIGHT_DOWN2,
    LIGHT_UP2,
    LIGHT_UP1,
    LIGHT_COMMAND4,
    LIGHT_COMMAND3,
    LIGHT_COMMAND2,
    LIGHT_COMMAND1,
    LIGHT_STOP,
    MOTORDIR,
];

// ---------------------------------------------------------------------------
// Card line directions
// ---------------------------------------------------------------------------

/// Direction a DIO line must be configured for before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDirection {
    Input,
    Output,
}

/// `(subdevice, first line, line count, direction)` for every DIO bank.
pub const DIO_BANKS: [(u8, u8, u8, LineDirection); 4] = [
    (2, 0, 8, LineDirection::Input),
    (3, 0, 8, LineDirection::Output),
    (3, 8, 8, LineDirection::Output),
    (3, 16, 8, LineDirection::Input),
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

fn check_floor(floor: u8) -> usize {
    assert!(
        floor < N_FLOORS,
        "floor {floor} out of range (must be < {N_FLOORS})"
    );
    floor as usize
}

/// Lamp channel bound to `(floor, button)`.
///
/// # Panics
///
/// Panics if `floor >= N_FLOORS`.
pub fn lamp_channel(floor: u8, button: ButtonType) -> Channel {
    LAMP_CHANNELS[check_floor(floor)][button.index()]
}

/// Button-input channel bound to `(floor, button)`.
///
/// # Panics
///
/// Panics if `floor >= N_FLOORS`.
pub fn button_channel(floor: u8, button: ButtonType) -> Channel {
    BUTTON_CHANNELS[check_floor(floor)][button.index()]
}

/// Validate a floor index from untrusted input.
pub fn floor_from_raw(floor: u8) -> Result<u8, RangeError> {
    if floor < N_FLOORS {
        Ok(floor)
    } else {
        Err(RangeError::Floor(floor))
    }
}
