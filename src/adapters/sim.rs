//! Simulated I/O card.
//!
//! Holds every digital line and analog channel in memory and records each
//! port call, so host builds and tests run the full HAL without hardware.
//! Inputs are injected with [`SimIo::set_line`]; outputs are read back
//! with [`SimIo::line`] and [`SimIo::analog`].

use std::collections::BTreeMap;

use log::{info, trace, warn};

use crate::channels::Channel;
use crate::ports::IoPort;

/// One recorded port call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoCall {
    Init,
    SetBit(Channel),
    ClearBit(Channel),
    ReadBit(Channel),
    WriteAnalog(Channel, u16),
}

impl IoCall {
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Self::SetBit(_) | Self::ClearBit(_) | Self::WriteAnalog(..)
        )
    }
}

#[derive(Debug, Default)]
pub struct SimIo {
    fail_init: bool,
    initialised: bool,
    lines: BTreeMap<Channel, bool>,
    analog: BTreeMap<Channel, u16>,
    calls: Vec<IoCall>,
}

impl SimIo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A card whose `init` reports failure.
    pub fn failing() -> Self {
        Self {
            fail_init: true,
            ..Self::default()
        }
    }

    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    /// Force a line level, e.g. to press a button or trip a sensor.
    pub fn set_line(&mut self, channel: Channel, high: bool) {
        self.lines.insert(channel, high);
    }

    /// Current level of a line. Lines never written read low.
    pub fn line(&self, channel: Channel) -> bool {
        self.lines.get(&channel).copied().unwrap_or(false)
    }

    /// Last analog value written to `channel`, 0 if never written.
    pub fn analog(&self, channel: Channel) -> u16 {
        self.analog.get(&channel).copied().unwrap_or(0)
    }

    /// Every line currently high.
    pub fn high_lines(&self) -> Vec<Channel> {
        self.lines
            .iter()
            .filter(|&(_, &high)| high)
            .map(|(&ch, _)| ch)
            .collect()
    }

    pub fn calls(&self) -> &[IoCall] {
        &self.calls
    }

    pub fn write_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_write()).count()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn check_ready(&self, op: &str, channel: Channel) {
        if !self.initialised {
            warn!("sim: {} on {} before init", op, channel);
        }
    }
}

impl IoPort for SimIo {
    fn init(&mut self) -> bool {
        self.calls.push(IoCall::Init);
        if self.fail_init {
            warn!("sim: init configured to fail");
            return false;
        }
        self.initialised = true;
        info!("sim: simulated I/O card ready");
        true
    }

    fn set_bit(&mut self, channel: Channel) {
        self.check_ready("set", channel);
        trace!("sim: set {}", channel);
        self.calls.push(IoCall::SetBit(channel));
        self.lines.insert(channel, true);
    }

    fn clear_bit(&mut self, channel: Channel) {
        self.check_ready("clear", channel);
        trace!("sim: clear {}", channel);
        self.calls.push(IoCall::ClearBit(channel));
        self.lines.insert(channel, false);
    }

    fn read_bit(&mut self, channel: Channel) -> bool {
        self.check_ready("read", channel);
        self.calls.push(IoCall::ReadBit(channel));
        self.line(channel)
    }

    fn write_analog(&mut self, channel: Channel, value: u16) {
        self.check_ready("analog write", channel);
        trace!("sim: analog {} = {}", channel, value);
        self.calls.push(IoCall::WriteAnalog(channel, value));
        self.analog.insert(channel, value);
    }
}
