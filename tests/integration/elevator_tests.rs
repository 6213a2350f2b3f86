//! End-to-end checks of the `Elevator` surface against `MockIo`:
//! initialisation, motor, lamps, indicator and sensor reads.

use crate::mock_hw::{MockIo, PortCall};

use elevator_hal::channels::{
    self, FLOOR_SENSOR_CHANNELS, LIGHT_DOOR_OPEN, LIGHT_FLOOR_IND1, LIGHT_FLOOR_IND2, LIGHT_STOP,
    MOTOR, MOTORDIR, OBSTRUCTION, STOP, button_channel, lamp_channel,
};
use elevator_hal::error::InitError;
use elevator_hal::{ButtonType, Elevator, Error, MOTOR_SPEED, MotorDirection, N_FLOORS};

fn ready(io: &mut MockIo) -> Elevator<&mut MockIo> {
    Elevator::init(io).expect("mock init succeeds")
}

// ── Initialisation ────────────────────────────────────────────

#[test]
fn failed_init_halts_before_any_write() {
    let mut io = MockIo::broken();
    let result = Elevator::init(&mut io);
    assert!(matches!(
        result,
        Err(Error::Init(InitError::TransportUnavailable))
    ));
    assert_eq!(io.calls, vec![PortCall::Init], "only the init attempt may reach the port");
}

#[test]
fn init_resets_every_lamp_and_the_indicator() {
    let mut io = MockIo::new();
    drop(ready(&mut io));

    assert_eq!(io.calls[0], PortCall::Init);
    for floor in 0..N_FLOORS {
        for button in ButtonType::ALL {
            assert_eq!(
                io.output(lamp_channel(floor, button)),
                Some(false),
                "lamp ({floor}, {button:?}) not cleared"
            );
        }
    }
    assert_eq!(io.output(LIGHT_STOP), Some(false));
    assert_eq!(io.output(LIGHT_DOOR_OPEN), Some(false));
    assert_eq!(io.output(LIGHT_FLOOR_IND1), Some(false));
    assert_eq!(io.output(LIGHT_FLOOR_IND2), Some(false));
    assert_eq!(io.output(MOTORDIR), None, "init does not touch the motor");
    assert_eq!(io.last_analog(MOTOR), None);
}

#[test]
fn init_writes_lamps_before_stop_door_and_indicator() {
    let mut io = MockIo::new();
    drop(ready(&mut io));

    let written = io.written();
    assert_eq!(written.len(), 12 + 4);
    assert_eq!(
        &written[12..],
        &[LIGHT_STOP, LIGHT_DOOR_OPEN, LIGHT_FLOOR_IND1, LIGHT_FLOOR_IND2]
    );
}

// ── Motor ─────────────────────────────────────────────────────

#[test]
fn motor_directions() {
    let mut io = MockIo::new();
    let mut e = ready(&mut io);

    e.set_motor_direction(MotorDirection::Up);
    e.set_motor_direction(MotorDirection::Stop);
    e.set_motor_direction(MotorDirection::Down);
    drop(e);

    let tail: Vec<_> = io.calls.iter().rev().take(5).rev().copied().collect();
    assert_eq!(
        tail,
        vec![
            PortCall::Clear(MOTORDIR),
            PortCall::Analog(MOTOR, MOTOR_SPEED),
            PortCall::Analog(MOTOR, 0),
            PortCall::Set(MOTORDIR),
            PortCall::Analog(MOTOR, MOTOR_SPEED),
        ]
    );
}

// ── Lamps ─────────────────────────────────────────────────────

#[test]
fn every_button_lamp_touches_only_its_channel() {
    for floor in 0..N_FLOORS {
        for button in ButtonType::ALL {
            let mut io = MockIo::new();
            let mut e = ready(&mut io);
            e.set_button_lamp(button, floor, true);
            e.set_button_lamp(button, floor, false);
            drop(e);

            let expected = lamp_channel(floor, button);
            let tail: Vec<_> = io.calls.iter().rev().take(2).rev().copied().collect();
            assert_eq!(
                tail,
                vec![PortCall::Set(expected), PortCall::Clear(expected)],
                "lamp ({floor}, {button:?})"
            );
        }
    }
}

#[test]
fn floor_indicator_encodes_binary() {
    let mut io = MockIo::new();
    let mut e = ready(&mut io);
    for floor in 0..N_FLOORS {
        e.set_floor_indicator(floor);
    }
    drop(e);

    let tail: Vec<_> = io.calls.iter().rev().take(8).rev().copied().collect();
    assert_eq!(
        tail,
        vec![
            PortCall::Clear(LIGHT_FLOOR_IND1),
            PortCall::Clear(LIGHT_FLOOR_IND2),
            PortCall::Clear(LIGHT_FLOOR_IND1),
            PortCall::Set(LIGHT_FLOOR_IND2),
            PortCall::Set(LIGHT_FLOOR_IND1),
            PortCall::Clear(LIGHT_FLOOR_IND2),
            PortCall::Set(LIGHT_FLOOR_IND1),
            PortCall::Set(LIGHT_FLOOR_IND2),
        ]
    );
}

#[test]
fn door_and_stop_lamps_are_direct() {
    let mut io = MockIo::new();
    let mut e = ready(&mut io);
    e.set_door_open_lamp(true);
    e.set_stop_lamp(true);
    e.set_stop_lamp(false);
    drop(e);

    assert_eq!(io.output(LIGHT_DOOR_OPEN), Some(true));
    assert_eq!(io.output(LIGHT_STOP), Some(false));
}

// ── Sensors ───────────────────────────────────────────────────

#[test]
fn button_signal_reads_mapped_channel() {
    let mut io = MockIo::new();
    io.press(button_channel(2, ButtonType::CallDown));
    let mut e = ready(&mut io);

    assert!(e.button_signal(ButtonType::CallDown, 2));
    assert!(!e.button_signal(ButtonType::CallUp, 2));
    assert!(!e.button_signal(ButtonType::CallDown, 1));
}

#[test]
fn raw_button_index_resolves_through_contract_check() {
    let mut io = MockIo::new();
    io.press(button_channel(0, ButtonType::Command));
    let mut e = ready(&mut io);
    assert!(e.button_signal(ButtonType::from_index(2), 0));
}

#[test]
fn floor_sensor_cases() {
    let mut io = MockIo::new();
    io.press(FLOOR_SENSOR_CHANNELS[1]);
    assert_eq!(ready(&mut io).floor_sensor_signal(), Some(1));

    io.release(FLOOR_SENSOR_CHANNELS[1]);
    io.press(FLOOR_SENSOR_CHANNELS[0]);
    io.press(FLOOR_SENSOR_CHANNELS[2]);
    assert_eq!(ready(&mut io).floor_sensor_signal(), Some(0));

    io.active_inputs.clear();
    assert_eq!(ready(&mut io).floor_sensor_signal(), None);
}

#[test]
fn stop_and_obstruction() {
    let mut io = MockIo::new();
    io.press(OBSTRUCTION);
    let mut e = ready(&mut io);
    assert!(!e.stop_signal());
    assert!(e.obstruction_signal());
    drop(e);

    io.press(STOP);
    assert!(ready(&mut io).stop_signal());
}

#[test]
fn snapshot_reads_every_input_once() {
    let mut io = MockIo::new();
    let mut e = ready(&mut io);
    let _ = e.read_inputs();
    drop(e);

    let reads: Vec<_> = io
        .calls
        .iter()
        .filter_map(|c| match *c {
            PortCall::Read(ch) => Some(ch),
            _ => None,
        })
        .collect();
    // 12 buttons + 4 floor sensors (none active) + stop + obstruction
    assert_eq!(reads.len(), 12 + 4 + 2);
    assert_eq!(&reads[..3], channels::BUTTON_CHANNELS[0].as_slice());
}

// ── Precondition violations ───────────────────────────────────

#[test]
#[should_panic(expected = "floor 4 out of range")]
fn lamp_on_nonexistent_floor_panics() {
    let mut io = MockIo::new();
    ready(&mut io).set_button_lamp(ButtonType::CallUp, 4, true);
}

#[test]
#[should_panic(expected = "button type 3 out of range")]
fn nonexistent_button_type_panics() {
    let mut io = MockIo::new();
    let _ = ready(&mut io).button_signal(ButtonType::from_index(3), 0);
}

#[test]
#[should_panic(expected = "floor 4 out of range")]
fn indicator_on_nonexistent_floor_panics() {
    let mut io = MockIo::new();
    ready(&mut io).set_floor_indicator(N_FLOORS);
}
