//! The elevator handle and its one-shot initialisation.
//!
//! An [`Elevator`] only exists once the I/O port has come up and every
//! output has been driven to its idle state, so no control request can
//! reach uninitialised hardware. The command and query operations live in
//! [`crate::drivers`], one file per concern.

use log::{error, info};

use crate::channels::{N_FLOORS, OUTPUT_CHANNELS};
use crate::error::{InitError, Result};
use crate::ports::IoPort;

/// Stateless translation layer over an [`IoPort`].
///
/// Holds nothing but the port; every operation maps a logical role to
/// its channel and performs one blocking access.
pub struct Elevator<IO: IoPort> {
    io: IO,
}

impl<IO: IoPort> Elevator<IO> {
    /// Bring the I/O port up and reset the panel.
    ///
    /// On success all twelve button lamps, the stop lamp and the door
    /// lamp are off and the floor indicator shows floor 0. If the port
    /// fails to initialise, nothing is written and the port is dropped.
    pub fn init(mut io: IO) -> Result<Self> {
        if !io.init() {
            error!("elevator: I/O port failed to initialise");
            return Err(InitError::TransportUnavailable.into());
        }

        let mut elevator = Self { io };
        elevator.clear_all_button_lamps();
        elevator.set_stop_lamp(false);
        elevator.set_door_open_lamp(false);
        elevator.set_floor_indicator(0);

        info!(
            "elevator: initialised ({} floors, {} outputs idle)",
            N_FLOORS,
            OUTPUT_CHANNELS.len()
        );
        Ok(elevator)
    }

    /// [`init`](Self::init), aborting on failure.
    ///
    /// # Panics
    ///
    /// Panics if the I/O port cannot be brought up.
    pub fn init_or_halt(io: IO) -> Self {
        match Self::init(io) {
            Ok(elevator) => elevator,
            Err(e) => panic!("Unable to initialize elevator hardware! ({e})"),
        }
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    /// Raw port access, for injecting inputs in simulation.
    pub fn io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    pub fn into_inner(self) -> IO {
        self.io
    }
}
