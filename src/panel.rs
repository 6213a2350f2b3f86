//! Panel facade with shadow state.
//!
//! The card's outputs cannot be read back, so [`Panel`] remembers the last
//! value commanded on every output. Controllers that need to ask "is this
//! lamp lit?" or "which way is the motor going?" use this instead of
//! keeping their own copy. All commands still go straight through to the
//! [`Elevator`]; the shadow is updated after each write.

use serde::{Deserialize, Serialize};

use crate::channels::{ButtonType, N_BUTTONS, N_FLOORS};
use crate::drivers::motor::MotorDirection;
use crate::drivers::sensors::InputSnapshot;
use crate::elevator::Elevator;
use crate::error::Result;
use crate::ports::IoPort;

/// Last commanded value of every output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputSnapshot {
    /// `lamps[floor][button.index()]`
    pub lamps: [[bool; N_BUTTONS as usize]; N_FLOORS as usize],
    pub motor: MotorDirection,
    pub floor_indicator: u8,
    pub door_open: bool,
    pub stop_lamp: bool,
}

pub struct Panel<IO: IoPort> {
    elevator: Elevator<IO>,
    outputs: OutputSnapshot,
}

impl<IO: IoPort> Panel<IO> {
    /// Initialise the elevator and command the motor to stop.
    ///
    /// The shadow starts at the idle state `Elevator::init` leaves behind.
    pub fn init(io: IO) -> Result<Self> {
        let elevator = Elevator::init(io)?;
        let mut panel = Self {
            elevator,
            outputs: OutputSnapshot::default(),
        };
        panel.set_motor_direction(MotorDirection::Stop);
        Ok(panel)
    }

    pub fn set_motor_direction(&mut self, direction: MotorDirection) {
        self.elevator.set_motor_direction(direction);
        self.outputs.motor = direction;
    }

    /// # Panics
    ///
    /// Panics if `floor >= N_FLOORS`.
    pub fn set_button_lamp(&mut self, button: ButtonType, floor: u8, on: bool) {
        self.elevator.set_button_lamp(button, floor, on);
        self.outputs.lamps[floor as usize][button.index()] = on;
    }

    /// # Panics
    ///
    /// Panics if `floor >= N_FLOORS`.
    pub fn set_floor_indicator(&mut self, floor: u8) {
        self.elevator.set_floor_indicator(floor);
        self.outputs.floor_indicator = floor;
    }

    pub fn open_door(&mut self) {
        self.elevator.set_door_open_lamp(true);
        self.outputs.door_open = true;
    }

    pub fn close_door(&mut self) {
        self.elevator.set_door_open_lamp(false);
        self.outputs.door_open = false;
    }

    pub fn set_stop_lamp(&mut self, on: bool) {
        self.elevator.set_stop_lamp(on);
        self.outputs.stop_lamp = on;
    }

    pub fn motor_direction(&self) -> MotorDirection {
        self.outputs.motor
    }

    /// # Panics
    ///
    /// Panics if `floor >= N_FLOORS`.
    pub fn button_lamp(&self, button: ButtonType, floor: u8) -> bool {
        assert!(
            floor < N_FLOORS,
            "floor {floor} out of range (must be < {N_FLOORS})"
        );
        self.outputs.lamps[floor as usize][button.index()]
    }

    pub fn floor_indicator(&self) -> u8 {
        self.outputs.floor_indicator
    }

    pub fn door_open(&self) -> bool {
        self.outputs.door_open
    }

    pub fn stop_lamp(&self) -> bool {
        self.outputs.stop_lamp
    }

    pub fn outputs(&self) -> &OutputSnapshot {
        &self.outputs
    }

    pub fn read_inputs(&mut self) -> InputSnapshot {
        self.elevator.read_inputs()
    }

    /// Direct access for queries. Commands issued here bypass the shadow.
    pub fn elevator_mut(&mut self) -> &mut Elevator<IO> {
        &mut self.elevator
    }

    pub fn into_elevator(self) -> Elevator<IO> {
        self.elevator
    }
}
