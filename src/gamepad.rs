//! A virtual gamepad with two analog sticks, triggers, and a d-pad hat.

use std::path::{Path, PathBuf};

use crate::{
    device::{AbsSetup, Capabilities, Device},
    error::Result,
    event::{Abs, InputEvent, Key, Misc},
    input_id::{Bus, InputId},
};

/// Range of the analog stick axes (`±STICK_MAX`).
const STICK_MAX: i32 = 32767;

const PAD_BUTTONS: [Key; 15] = [
    Key::BTN_SOUTH,
    Key::BTN_EAST,
    Key::BTN_NORTH,
    Key::BTN_WEST,
    Key::BTN_TL,
    Key::BTN_TR,
    Key::BTN_TL2,
    Key::BTN_TR2,
    Key::BTN_SELECT,
    Key::BTN_START,
    Key::BTN_MODE,
    Key::BTN_THUMBL,
    Key::BTN_THUMBR,
    Key::BTN_DPAD_UP,
    Key::BTN_DPAD_DOWN,
];

/// Scales a normalized stick position to the raw axis range.
fn denormalize(position: f32) -> i32 {
    (position.clamp(-1.0, 1.0) * STICK_MAX as f32) as i32
}

/// A d-pad hat direction.
///
/// The hat is reported as two absolute axes (`ABS_HAT0X`/`ABS_HAT0Y`)
/// taking the values -1, 0, and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HatDirection {
    Up,
    Down,
    Left,
    Right,
}

impl HatDirection {
    fn event(self, pressed: bool) -> InputEvent {
        let (axis, value) = match self {
            Self::Up => (Abs::HAT0Y, -1),
            Self::Down => (Abs::HAT0Y, 1),
            Self::Left => (Abs::HAT0X, -1),
            Self::Right => (Abs::HAT0X, 1),
        };
        InputEvent::abs(axis, if pressed { value } else { 0 })
    }
}

/// A virtual gamepad device.
///
/// [`Gamepad::create`] registers a fixed capability set modeled after a
/// typical dual-stick pad; [`Gamepad::create_generic`] registers exactly the
/// caller-supplied codes instead.
#[derive(Debug)]
pub struct Gamepad {
    dev: Device,
}

impl Gamepad {
    /// Creates a virtual gamepad at the uinput device node `path`.
    ///
    /// `vendor` and `product` are exposed to consumers, which often use them
    /// to pick button layouts and quirk tables.
    pub fn create(path: impl AsRef<Path>, name: &str, vendor: u16, product: u16) -> Result<Self> {
        let caps = Capabilities::new().with_keys(PAD_BUTTONS).with_abs_axes([
            AbsSetup::new(Abs::X, -STICK_MAX, STICK_MAX),
            AbsSetup::new(Abs::Y, -STICK_MAX, STICK_MAX),
            AbsSetup::new(Abs::RX, -STICK_MAX, STICK_MAX),
            AbsSetup::new(Abs::RY, -STICK_MAX, STICK_MAX),
            AbsSetup::new(Abs::HAT0X, -1, 1),
            AbsSetup::new(Abs::HAT0Y, -1, 1),
        ]);
        let dev = Device::create(
            path,
            name,
            InputId::new(Bus::USB, vendor, product, 0x0001),
            &caps,
        )?;
        Ok(Self { dev })
    }

    /// Creates a gamepad with a caller-supplied capability set.
    ///
    /// Exactly the given keys, absolute axes, and misc codes are registered,
    /// in the order given. Use [`Gamepad::set_abs`] and
    /// [`Gamepad::send_misc`] to drive axes and codes that have no dedicated
    /// method.
    pub fn create_generic(
        path: impl AsRef<Path>,
        name: &str,
        id: InputId,
        keys: impl IntoIterator<Item = Key>,
        abs_axes: impl IntoIterator<Item = AbsSetup>,
        misc: impl IntoIterator<Item = Misc>,
    ) -> Result<Self> {
        let caps = Capabilities::new()
            .with_keys(keys)
            .with_abs_axes(abs_axes)
            .with_misc(misc);
        let dev = Device::create(path, name, id, &caps)?;
        Ok(Self { dev })
    }

    /// Presses `button` down. It stays pressed until
    /// [`Gamepad::button_up`].
    pub fn button_down(&self, button: Key) -> Result<()> {
        self.dev.key_down(button)
    }

    /// Releases a previously pressed `button`.
    pub fn button_up(&self, button: Key) -> Result<()> {
        self.dev.key_up(button)
    }

    /// A button press frame immediately followed by a release frame.
    pub fn button_press(&self, button: Key) -> Result<()> {
        self.dev.click(button)
    }

    /// Moves the left analog stick. Positions are normalized to
    /// `-1.0..=1.0` and scaled to the axis range.
    pub fn left_stick_move(&self, x: f32, y: f32) -> Result<()> {
        self.dev.emit(&[
            InputEvent::abs(Abs::X, denormalize(x)),
            InputEvent::abs(Abs::Y, denormalize(y)),
        ])
    }

    /// Moves the right analog stick. Positions are normalized to
    /// `-1.0..=1.0` and scaled to the axis range.
    pub fn right_stick_move(&self, x: f32, y: f32) -> Result<()> {
        self.dev.emit(&[
            InputEvent::abs(Abs::RX, denormalize(x)),
            InputEvent::abs(Abs::RY, denormalize(y)),
        ])
    }

    /// Presses the d-pad hat in the given direction. It stays pressed until
    /// [`Gamepad::hat_release`].
    pub fn hat_press(&self, dir: HatDirection) -> Result<()> {
        self.dev.emit(&[dir.event(true)])
    }

    /// Releases the d-pad hat axis of the given direction.
    pub fn hat_release(&self, dir: HatDirection) -> Result<()> {
        self.dev.emit(&[dir.event(false)])
    }

    /// Sets a single absolute axis to a raw value.
    pub fn set_abs(&self, abs: Abs, value: i32) -> Result<()> {
        self.dev.set_abs(abs, value)
    }

    /// Sends a miscellaneous event (e.g. `MSC_SCAN` codes).
    pub fn send_misc(&self, misc: Misc, value: i32) -> Result<()> {
        self.dev.send_misc(misc, value)
    }

    /// Resolves the sysfs path of this device.
    pub fn syspath(&self) -> Result<PathBuf> {
        self.dev.syspath()
    }

    /// Destroys the device. Subsequent calls fail with
    /// [`Error::Closed`][crate::Error::Closed].
    pub fn close(&mut self) -> Result<()> {
        self.dev.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stick_scaling() {
        assert_eq!(denormalize(0.0), 0);
        assert_eq!(denormalize(1.0), STICK_MAX);
        assert_eq!(denormalize(-1.0), -STICK_MAX);
        assert_eq!(denormalize(2.0), STICK_MAX, "should clamp");
        assert_eq!(denormalize(0.5), STICK_MAX / 2);
    }

    #[test]
    fn hat_events() {
        let ev = HatDirection::Up.event(true);
        assert_eq!(ev, InputEvent::abs(Abs::HAT0Y, -1));
        let ev = HatDirection::Up.event(false);
        assert_eq!(ev, InputEvent::abs(Abs::HAT0Y, 0));
        let ev = HatDirection::Right.event(true);
        assert_eq!(ev, InputEvent::abs(Abs::HAT0X, 1));
    }
}
