//! Mock I/O port for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history, and serves reads from a set of "active" input channels.

use elevator_hal::{Channel, IoPort};
use std::collections::BTreeSet;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCall {
    Init,
    Set(Channel),
    Clear(Channel),
    Read(Channel),
    Analog(Channel, u16),
}

// ── MockIo ────────────────────────────────────────────────────

pub struct MockIo {
    pub calls: Vec<PortCall>,
    pub active_inputs: BTreeSet<Channel>,
    pub init_ok: bool,
}

impl MockIo {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            active_inputs: BTreeSet::new(),
            init_ok: true,
        }
    }

    pub fn broken() -> Self {
        Self {
            init_ok: false,
            ..Self::new()
        }
    }

    pub fn press(&mut self, channel: Channel) {
        self.active_inputs.insert(channel);
    }

    pub fn release(&mut self, channel: Channel) {
        self.active_inputs.remove(&channel);
    }

    /// Level of an output as left by the most recent write, `None` if
    /// never written.
    pub fn output(&self, channel: Channel) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match *c {
            PortCall::Set(ch) if ch == channel => Some(true),
            PortCall::Clear(ch) if ch == channel => Some(false),
            _ => None,
        })
    }

    pub fn last_analog(&self, channel: Channel) -> Option<u16> {
        self.calls.iter().rev().find_map(|c| match *c {
            PortCall::Analog(ch, v) if ch == channel => Some(v),
            _ => None,
        })
    }

    /// Channels written (set or cleared), in call order.
    pub fn written(&self) -> Vec<Channel> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                PortCall::Set(ch) | PortCall::Clear(ch) | PortCall::Analog(ch, _) => Some(ch),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockIo {
    fn default() -> Self {
        Self::new()
    }
}

impl IoPort for MockIo {
    fn init(&mut self) -> bool {
        self.calls.push(PortCall::Init);
        self.init_ok
    }

    fn set_bit(&mut self, channel: Channel) {
        self.calls.push(PortCall::Set(channel));
    }

    fn clear_bit(&mut self, channel: Channel) {
        self.calls.push(PortCall::Clear(channel));
    }

    fn read_bit(&mut self, channel: Channel) -> bool {
        self.calls.push(PortCall::Read(channel));
        self.active_inputs.contains(&channel)
    }

    fn write_analog(&mut self, channel: Channel, value: u16) {
        self.calls.push(PortCall::Analog(channel, value));
    }
}
