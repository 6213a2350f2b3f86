//! `embedded-hal` backend: channels bound to GPIO pins and a PWM output.
//!
//! Lets the HAL drive a board wired straight to microcontroller pins
//! instead of the lab I/O card. Each digital channel is bound to one
//! [`OutputPin`] or [`InputPin`]; the motor channel is bound to a
//! [`SetDutyCycle`] PWM whose duty is `value / ANALOG_FULL_SCALE`.
//!
//! Pins are stored in fixed-capacity maps, so a fully wired panel needs
//! no heap. Pin errors after `init` are logged and dropped.

use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use heapless::LinearMap;
use log::{info, trace, warn};

use crate::channels::{ANALOG_FULL_SCALE, Channel, OUTPUT_CHANNELS};
use crate::error::{InitError, Result};
use crate::ports::IoPort;

/// Room for every wired digital output (15 on the rig).
pub const MAX_OUTPUTS: usize = 16;
/// Room for every wired digital input (16 on the rig).
pub const MAX_INPUTS: usize = 16;

pub struct GpioIo<O, I, P> {
    outputs: LinearMap<Channel, O, MAX_OUTPUTS>,
    inputs: LinearMap<Channel, I, MAX_INPUTS>,
    motor: Channel,
    pwm: P,
}

impl<O, I, P> GpioIo<O, I, P>
where
    O: OutputPin,
    I: InputPin,
    P: SetDutyCycle,
{
    pub fn new(motor: Channel, pwm: P) -> Self {
        Self {
            outputs: LinearMap::new(),
            inputs: LinearMap::new(),
            motor,
            pwm,
        }
    }

    /// Bind a digital output. Rebinding a channel replaces its pin.
    pub fn bind_output(&mut self, channel: Channel, pin: O) -> Result<()> {
        self.outputs
            .insert(channel, pin)
            .map(|_| ())
            .map_err(|_| InitError::CapacityExceeded { capacity: MAX_OUTPUTS }.into())
    }

    /// Bind a digital input. Rebinding a channel replaces its pin.
    pub fn bind_input(&mut self, channel: Channel, pin: I) -> Result<()> {
        self.inputs
            .insert(channel, pin)
            .map(|_| ())
            .map_err(|_| InitError::CapacityExceeded { capacity: MAX_INPUTS }.into())
    }

    pub fn pwm(&self) -> &P {
        &self.pwm
    }

    pub fn output_pin(&self, channel: Channel) -> Option<&O> {
        self.outputs.get(&channel)
    }

    fn drive(&mut self, channel: Channel, high: bool) {
        if !channel.is_wired() {
            trace!("gpio: {} is no-connect", channel);
            return;
        }
        let Some(pin) = self.outputs.get_mut(&channel) else {
            warn!("gpio: no output pin bound to {}", channel);
            return;
        };
        let result = if high { pin.set_high() } else { pin.set_low() };
        if let Err(e) = result {
            warn!("gpio: write {} failed: {:?}", channel, e);
        }
    }
}

impl<O, I, P> IoPort for GpioIo<O, I, P>
where
    O: OutputPin,
    I: InputPin,
    P: SetDutyCycle,
{
    fn init(&mut self) -> bool {
        let mut ok = true;

        for channel in OUTPUT_CHANNELS {
            if !self.outputs.contains_key(&channel) {
                warn!("gpio: output {} has no pin bound", channel);
            }
        }

        for (channel, pin) in self.outputs.iter_mut() {
            if let Err(e) = pin.set_low() {
                warn!("gpio: reset of {} failed: {:?}", channel, e);
                ok = false;
            }
        }

        if let Err(e) = self.pwm.set_duty_cycle_fully_off() {
            warn!("gpio: motor PWM reset failed: {:?}", e);
            ok = false;
        }

        if ok {
            info!(
                "gpio: {} outputs, {} inputs bound, motor on {}",
                self.outputs.len(),
                self.inputs.len(),
                self.motor
            );
        }
        ok
    }

    fn set_bit(&mut self, channel: Channel) {
        self.drive(channel, true);
    }

    fn clear_bit(&mut self, channel: Channel) {
        self.drive(channel, false);
    }

    fn read_bit(&mut self, channel: Channel) -> bool {
        if !channel.is_wired() {
            return false;
        }
        let Some(pin) = self.inputs.get_mut(&channel) else {
            warn!("gpio: no input pin bound to {}", channel);
            return false;
        };
        match pin.is_high() {
            Ok(high) => high,
            Err(e) => {
                warn!("gpio: read {} failed: {:?}", channel, e);
                false
            }
        }
    }

    fn write_analog(&mut self, channel: Channel, value: u16) {
        if channel != self.motor {
            warn!("gpio: no PWM bound to {}", channel);
            return;
        }
        let value = value.min(ANALOG_FULL_SCALE);
        if let Err(e) = self.pwm.set_duty_cycle_fraction(value, ANALOG_FULL_SCALE) {
            warn!("gpio: motor PWM write failed: {:?}", e);
        }
    }
}
