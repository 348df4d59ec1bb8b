//! End-to-end tests against the real `/dev/uinput` node.
//!
//! The tests that need a device node skip themselves when it is missing or
//! not writable (most CI containers), so the validation tests still run.

use std::fs::OpenOptions;

use vinput::{
    AbsSetup, Capabilities, Device, Error, Gamepad, InputId, Keyboard, Mouse,
    event::{Abs, Key, Misc},
};

const UINPUT: &str = "/dev/uinput";

fn uinput_available() -> bool {
    match OpenOptions::new().write(true).open(UINPUT) {
        Ok(_) => true,
        Err(e) => {
            eprintln!("skipping: cannot open {UINPUT} for writing: {e}");
            false
        }
    }
}

#[test]
fn missing_node_reports_not_found() {
    let err = Keyboard::create("/dev/uinput-does-not-exist", "kbd").unwrap_err();
    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound), "{err:?}");
}

#[test]
fn non_uinput_node_is_rejected() {
    // `/dev/null` is a character device, but doesn't speak the uinput
    // protocol, so creation has to fail before any event is written.
    let err = Keyboard::create("/dev/null", "kbd").unwrap_err();
    assert!(matches!(err, Error::Registration { .. }), "{err:?}");
}

#[test]
fn empty_name_is_rejected_without_syscalls() {
    let err = Keyboard::create(UINPUT, "").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");

    let err = Keyboard::create("", "kbd").unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");
}

#[test]
fn overlong_name_is_rejected_without_syscalls() {
    let name = "x".repeat(80);
    let err = Keyboard::create(UINPUT, &name).unwrap_err();
    match err {
        Error::InvalidConfig(msg) => assert!(msg.contains("80"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn keyboard_lifecycle() -> vinput::Result<()> {
    if !uinput_available() {
        return Ok(());
    }

    let mut kbd = Keyboard::create(UINPUT, "vinput test keyboard")?;

    let syspath = kbd.syspath()?;
    assert!(
        syspath.starts_with("/sys/devices/virtual/input"),
        "{}",
        syspath.display()
    );
    assert!(syspath.exists(), "{}", syspath.display());

    kbd.press(Key::KEY_A)?;
    kbd.key_down(Key::KEY_LEFTSHIFT)?;
    kbd.key_up(Key::KEY_LEFTSHIFT)?;

    kbd.close()?;

    // Everything after `close` has to fail with `Closed`, including another
    // `close`.
    assert!(matches!(kbd.press(Key::KEY_A), Err(Error::Closed)));
    assert!(matches!(kbd.syspath(), Err(Error::Closed)));
    assert!(matches!(kbd.close(), Err(Error::Closed)));
    Ok(())
}

#[test]
fn mouse_lifecycle() -> vinput::Result<()> {
    if !uinput_available() {
        return Ok(());
    }

    let mut mouse = Mouse::create(UINPUT, "vinput test mouse")?;
    mouse.move_rel(5, -3)?;
    mouse.move_left(2)?;
    mouse.wheel(false, 1)?;
    mouse.left_click()?;
    mouse.close()?;
    Ok(())
}

#[test]
fn generic_gamepad_lifecycle() -> vinput::Result<()> {
    if !uinput_available() {
        return Ok(());
    }

    let mut pad = Gamepad::create_generic(
        UINPUT,
        "vinput test pad",
        InputId::new(vinput::Bus::USB, 0x045e, 0x028e, 0x0110),
        [Key::BTN_SOUTH, Key::BTN_EAST],
        [AbsSetup::new(Abs::X, -32767, 32767).with_fuzz(16)],
        [Misc::SCAN],
    )?;
    pad.button_press(Key::BTN_SOUTH)?;
    pad.set_abs(Abs::X, 1234)?;
    pad.send_misc(Misc::SCAN, 0x90001)?;
    pad.close()?;
    Ok(())
}

#[test]
fn bare_device_with_custom_capabilities() -> vinput::Result<()> {
    if !uinput_available() {
        return Ok(());
    }

    let caps = Capabilities::new()
        .with_keys([Key::BTN_TOUCH])
        .with_abs_axes([
            AbsSetup::new(Abs::X, 0, 4095),
            AbsSetup::new(Abs::Y, 0, 4095),
        ]);
    let mut dev = Device::create(
        UINPUT,
        "vinput test surface",
        InputId::new(vinput::Bus::USB, 0x4711, 0x0819, 0x0001),
        &caps,
    )?;

    dev.move_to(100, 200)?;
    // The (0, 0) position is reported as (0, -1).
    dev.move_to(0, 0)?;
    dev.close()?;
    Ok(())
}
