//! elevator-hal: panel diagnostic.
//!
//! Initialises the selected backend and mirrors every input onto the
//! panel: a held button lights its own lamp, the floor sensor drives the
//! floor indicator, the stop button drives the stop lamp and the
//! obstruction switch drives the door lamp. The motor is commanded to stop
//! once and never moved.
#![deny(unused_must_use)]

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use elevator_hal::adapters::sim::SimIo;
use elevator_hal::config::{Backend, HalConfig};
use elevator_hal::{ButtonType, InputSnapshot, IoPort, MotorDirection, N_FLOORS, Panel};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Sim,
    Comedi,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Sim => Backend::Sim,
            BackendArg::Comedi => Backend::Comedi,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Mirror elevator panel inputs onto its lamps")]
struct Args {
    /// JSON configuration file
    #[arg(long, default_value = "elevator-hal.json")]
    config: PathBuf,
    /// Override the configured backend
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,
    /// Override the comedi device node
    #[arg(long)]
    device: Option<String>,
    /// Stop after this many poll cycles
    #[arg(long)]
    cycles: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ── 1. Config ─────────────────────────────────────────────
    let loaded = HalConfig::read(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    let config_found = loaded.is_some();
    let mut config = loaded.unwrap_or_default();
    if let Some(backend) = args.backend {
        config.backend = backend.into();
    }
    if let Some(device) = args.device {
        config.comedi_device = device;
    }
    config.validate()?;

    // ── 2. Logging ────────────────────────────────────────────
    env_logger::Builder::new()
        .filter_level(config.level_filter()?)
        .parse_default_env()
        .init();
    info!("elevator-hal v{} ({:?} backend)", env!("CARGO_PKG_VERSION"), config.backend);
    if !config_found {
        warn!("config: {} not found, using defaults", args.config.display());
    }

    // ── 3. Hardware ───────────────────────────────────────────
    let io = open_backend(&config)?;
    let mut panel = Panel::init(io).context("elevator hardware unavailable, halting")?;

    // ── 4. Poll loop ──────────────────────────────────────────
    let period = Duration::from_millis(u64::from(config.poll_interval_ms));
    let mut last = InputSnapshot::default();
    let mut cycle: u64 = 0;

    while args.cycles.is_none_or(|n| cycle < n) {
        let inputs = panel.read_inputs();
        mirror(&mut panel, &inputs);
        if inputs != last {
            info!("inputs: {}", serde_json::to_string(&inputs)?);
            last = inputs;
        }
        cycle += 1;
        thread::sleep(period);
    }

    panel.set_motor_direction(MotorDirection::Stop);
    info!("outputs: {}", serde_json::to_string(panel.outputs())?);
    Ok(())
}

fn open_backend(config: &HalConfig) -> Result<Box<dyn IoPort>> {
    match config.backend {
        Backend::Sim => Ok(Box::new(SimIo::new())),
        #[cfg(feature = "comedi")]
        Backend::Comedi => Ok(Box::new(elevator_hal::adapters::comedi::ComediIo::new(
            &config.comedi_device,
        )?)),
        #[cfg(not(feature = "comedi"))]
        Backend::Comedi => anyhow::bail!("built without the `comedi` feature"),
    }
}

/// Copy the snapshot onto the outputs, writing only what changed.
fn mirror<IO: IoPort>(panel: &mut Panel<IO>, inputs: &InputSnapshot) {
    for floor in 0..N_FLOORS {
        for button in ButtonType::ALL {
            let pressed = inputs.button(button, floor);
            if panel.button_lamp(button, floor) != pressed {
                panel.set_button_lamp(button, floor, pressed);
            }
        }
    }

    if let Some(floor) = inputs.floor {
        if panel.floor_indicator() != floor {
            panel.set_floor_indicator(floor);
        }
    }

    if panel.stop_lamp() != inputs.stop {
        panel.set_stop_lamp(inputs.stop);
    }

    if panel.door_open() != inputs.obstruction {
        if inputs.obstruction {
            panel.open_door();
        } else {
            panel.close_door();
        }
    }
}
