//! `Panel` shadow state against the port's actual command history.

use crate::mock_hw::{MockIo, PortCall};

use elevator_hal::channels::{
    FLOOR_SENSOR_CHANNELS, LIGHT_DOOR_OPEN, LIGHT_STOP, MOTOR, MOTORDIR, STOP, button_channel,
    lamp_channel,
};
use elevator_hal::{ButtonType, MotorDirection, N_FLOORS, OutputSnapshot, Panel};

#[test]
fn init_stops_motor_after_idle_reset() {
    let mut io = MockIo::new();
    let panel = Panel::init(&mut io).unwrap();
    assert_eq!(*panel.outputs(), OutputSnapshot::default());
    drop(panel);

    assert_eq!(io.calls.last(), Some(&PortCall::Analog(MOTOR, 0)));
    assert_eq!(io.output(MOTORDIR), None);
}

#[test]
fn broken_port_yields_no_panel() {
    let mut io = MockIo::broken();
    assert!(Panel::init(&mut io).is_err());
    assert_eq!(io.calls, vec![PortCall::Init]);
}

#[test]
fn shadow_matches_port_after_mixed_commands() {
    let mut io = MockIo::new();
    let mut panel = Panel::init(&mut io).unwrap();

    panel.set_button_lamp(ButtonType::CallUp, 0, true);
    panel.set_button_lamp(ButtonType::Command, 2, true);
    panel.set_button_lamp(ButtonType::CallUp, 0, false);
    panel.set_floor_indicator(3);
    panel.set_stop_lamp(true);
    panel.open_door();
    panel.set_motor_direction(MotorDirection::Up);

    let outputs = *panel.outputs();
    drop(panel);

    for floor in 0..N_FLOORS {
        for button in ButtonType::ALL {
            assert_eq!(
                io.output(lamp_channel(floor, button)),
                Some(outputs.lamps[floor as usize][button.index()]),
                "lamp ({floor}, {button:?})"
            );
        }
    }
    assert_eq!(outputs.floor_indicator, 3);
    assert_eq!(io.output(LIGHT_STOP), Some(outputs.stop_lamp));
    assert_eq!(io.output(LIGHT_DOOR_OPEN), Some(outputs.door_open));
    assert_eq!(outputs.motor, MotorDirection::Up);
    assert_eq!(io.output(MOTORDIR), Some(false));
}

#[test]
fn reads_pass_through() {
    let mut io = MockIo::new();
    io.press(button_channel(1, ButtonType::CallUp));
    io.press(FLOOR_SENSOR_CHANNELS[3]);
    io.press(STOP);

    let mut panel = Panel::init(&mut io).unwrap();
    let inputs = panel.read_inputs();

    assert_eq!(inputs.pressed_buttons(), vec![(1, ButtonType::CallUp)]);
    assert_eq!(inputs.floor, Some(3));
    assert!(inputs.stop);
    assert!(!inputs.obstruction);
    assert!(panel.elevator_mut().stop_signal());
}

#[test]
fn elevator_mut_bypasses_shadow() {
    let mut io = MockIo::new();
    let mut panel = Panel::init(&mut io).unwrap();
    panel.elevator_mut().set_door_open_lamp(true);
    assert!(!panel.door_open());
    drop(panel);
    assert_eq!(io.output(LIGHT_DOOR_OPEN), Some(true));
}

#[test]
fn outputs_serialize_to_json() {
    let mut io = MockIo::new();
    let mut panel = Panel::init(&mut io).unwrap();
    panel.set_motor_direction(MotorDirection::Down);
    panel.set_floor_indicator(1);

    let json = serde_json::to_string(panel.outputs()).unwrap();
    let back: OutputSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, *panel.outputs());
}
