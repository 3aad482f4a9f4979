mod helpers;

use arch_install_helper::{
    cmd::CommandOutput,
    config::Settings,
    error::InstallerError,
    menu::{Menu, MenuState},
    outcome::Outcome,
    registry::Context,
    steps::QUIT,
};
use helpers::{sda, FakeProbe, RecordingExecutor, ScriptedOperator};
use proptest::prelude::*;

/// Inputs that never quit and never wait for the operator, given an empty
/// session and a probe that reports nothing.
fn non_quit_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,6}",
        Just("0".to_string()),
        Just("20".to_string()),
        Just("256".to_string()),
        Just("2".to_string()),
        Just("3".to_string()),
        Just("4".to_string()),
        Just("5".to_string()),
        Just("6".to_string()),
        Just("7".to_string()),
        Just("8".to_string()),
        Just("9".to_string()),
        Just("11".to_string()),
        Just("12".to_string()),
        Just("14".to_string()),
        Just("15".to_string()),
        Just("17".to_string()),
        Just("18".to_string()),
    ]
}

proptest! {
    /// The menu keeps running whatever non-quit inputs arrive, and stops on quit.
    #[test]
    fn only_quit_terminates(inputs in prop::collection::vec(non_quit_input(), 0..40)) {
        let exec = RecordingExecutor::new();
        let probe = FakeProbe::new();
        let mut op = ScriptedOperator::new(Vec::<String>::new());
        let settings = Settings::default();
        let mut ctx = Context::new(&exec, &probe, &mut op, &settings);
        let mut menu = Menu::default();

        for input in &inputs {
            menu.handle(input, &mut ctx).unwrap();
            prop_assert_eq!(menu.state(), MenuState::Running);
        }

        let outcome = menu.handle(&QUIT.to_string(), &mut ctx).unwrap();
        prop_assert_eq!(outcome, Outcome::Quit);
        prop_assert_eq!(menu.state(), MenuState::Terminated);
    }
}

#[test]
fn catalog_has_eighteen_steps_and_quit() {
    let menu = Menu::default();
    let steps = menu.registry().steps();
    let selectors: Vec<u8> = steps.iter().map(|s| s.selector).collect();
    assert_eq!(selectors, (1..=19).collect::<Vec<u8>>());
    assert_eq!(steps.iter().filter(|s| s.is_quit()).count(), 1);
    assert!(steps[18].is_quit());
}

#[test]
fn failed_command_keeps_menu_running() {
    let exec = RecordingExecutor::new().respond("genfstab", CommandOutput::failed(1, ""));
    let probe = FakeProbe::new();
    let mut op = ScriptedOperator::new(Vec::<String>::new());
    let settings = Settings::default();
    let mut ctx = Context::new(&exec, &probe, &mut op, &settings);
    let mut menu = Menu::default();

    let outcome = menu.handle("6", &mut ctx).unwrap();
    assert!(matches!(outcome, Outcome::Failed(_)));
    assert_eq!(menu.state(), MenuState::Running);
    assert!(!ctx.session.has_completed(6));
}

#[test]
fn completed_steps_are_marked() {
    let exec = RecordingExecutor::new();
    let probe = FakeProbe::new();
    let mut op = ScriptedOperator::new(Vec::<String>::new());
    let settings = Settings::default();
    let mut ctx = Context::new(&exec, &probe, &mut op, &settings);
    let mut menu = Menu::default();

    menu.handle("9", &mut ctx).unwrap();
    assert!(ctx.session.has_completed(9));
    menu.handle("2", &mut ctx).unwrap();
    assert!(!ctx.session.has_completed(2));
}

#[test]
fn run_selects_drive_then_quits() {
    let exec = RecordingExecutor::new();
    let probe = FakeProbe::new().with_drives(vec![sda()]);
    // menu: choose drive, drive list: first entry, acknowledge, menu: quit
    let mut op = ScriptedOperator::new(["1", "1", "", "19"]);
    let settings = Settings::default();
    let mut ctx = Context::new(&exec, &probe, &mut op, &settings);
    let mut menu = Menu::default();

    menu.run(&mut ctx).unwrap();
    assert_eq!(menu.state(), MenuState::Terminated);
    assert_eq!(ctx.session.selected_drive(), Some(&sda()));
    assert_eq!(op.remaining(), 0);
}

#[test]
fn run_recovers_from_bad_input() {
    let exec = RecordingExecutor::new();
    let probe = FakeProbe::new();
    let mut op = ScriptedOperator::new(["hello", "", "99", "", "3", "", "19"]);
    let settings = Settings::default();
    let mut ctx = Context::new(&exec, &probe, &mut op, &settings);
    let mut menu = Menu::default();

    menu.run(&mut ctx).unwrap();
    assert_eq!(menu.state(), MenuState::Terminated);
    assert_eq!(exec.count(), 0);
}

#[test]
fn closed_input_ends_run_with_error() {
    let exec = RecordingExecutor::new();
    let probe = FakeProbe::new();
    let mut op = ScriptedOperator::new(["5"]);
    let settings = Settings::default();
    let mut ctx = Context::new(&exec, &probe, &mut op, &settings);
    let mut menu = Menu::default();

    let err = menu.run(&mut ctx).unwrap_err();
    assert!(matches!(err, InstallerError::InputClosed));
    assert_eq!(menu.state(), MenuState::Running);
    assert_eq!(exec.calls(), ["pacstrap /mnt base linux linux-firmware"]);
}
