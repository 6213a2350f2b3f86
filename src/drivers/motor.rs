//! Motor direction and speed.
//!
//! Two-speed drive: either stopped or running at [`MOTOR_SPEED`], with
//! the polarity carried by the single [`MOTORDIR`] bit (HIGH = down).
//! Stopping only zeroes the analog magnitude; the direction bit keeps
//! whatever it was last set to.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::channels::{MOTOR, MOTOR_SPEED, MOTORDIR};
use crate::elevator::Elevator;
use crate::error::RangeError;
use crate::ports::IoPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum MotorDirection {
    Down = -1,
    #[default]
    Stop = 0,
    Up = 1,
}

impl MotorDirection {
    /// Map by sign only: positive is up, negative is down.
    pub fn from_signum(value: i32) -> Self {
        match value.signum() {
            1 => Self::Up,
            -1 => Self::Down,
            _ => Self::Stop,
        }
    }
}

impl TryFrom<i8> for MotorDirection {
    type Error = RangeError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Down),
            0 => Ok(Self::Stop),
            1 => Ok(Self::Up),
            other => Err(RangeError::Direction(other)),
        }
    }
}

impl<IO: IoPort> Elevator<IO> {
    pub fn set_motor_direction(&mut self, direction: MotorDirection) {
        debug!("motor: {:?}", direction);
        let io = self.io_mut();
        match direction {
            MotorDirection::Stop => io.write_analog(MOTOR, 0),
            MotorDirection::Up => {
                io.clear_bit(MOTORDIR);
                io.write_analog(MOTOR, MOTOR_SPEED);
            }
            MotorDirection::Down => {
                io.set_bit(MOTORDIR);
                io.write_analog(MOTOR, MOTOR_SPEED);
            }
        }
    }
}
