//! Virtual pointer devices: relative ([`Mouse`]) and absolute ([`AbsMouse`]).

use std::path::{Path, PathBuf};

use crate::{
    device::{AbsSetup, Capabilities, Device},
    error::Result,
    event::{Abs, InputEvent, Key, Rel},
    input_id::{Bus, InputId},
};

const BUTTONS: [Key; 3] = [Key::BTN_LEFT, Key::BTN_RIGHT, Key::BTN_MIDDLE];

fn wheel_axis(horizontal: bool) -> Rel {
    if horizontal { Rel::HWHEEL } else { Rel::WHEEL }
}

/// A virtual mouse reporting relative motion.
#[derive(Debug)]
pub struct Mouse {
    dev: Device,
}

impl Mouse {
    /// Creates a virtual relative-axis pointer at the uinput device node
    /// `path`.
    pub fn create(path: impl AsRef<Path>, name: &str) -> Result<Self> {
        let caps = Capabilities::new()
            .with_keys(BUTTONS)
            .with_rel_axes([Rel::X, Rel::Y, Rel::WHEEL, Rel::HWHEEL]);
        let dev = Device::create(
            path,
            name,
            InputId::new(Bus::USB, 0x4711, 0x0816, 0x0001),
            &caps,
        )?;
        Ok(Self { dev })
    }

    /// Moves the cursor by `(x, y)` pixels in a single frame.
    ///
    /// Positive `x` moves right, positive `y` moves down.
    pub fn move_rel(&self, x: i32, y: i32) -> Result<()> {
        self.dev
            .emit(&[InputEvent::rel(Rel::X, x), InputEvent::rel(Rel::Y, y)])
    }

    pub fn move_left(&self, pixels: i32) -> Result<()> {
        self.dev.move_rel(Rel::X, -pixels)
    }

    pub fn move_right(&self, pixels: i32) -> Result<()> {
        self.dev.move_rel(Rel::X, pixels)
    }

    pub fn move_up(&self, pixels: i32) -> Result<()> {
        self.dev.move_rel(Rel::Y, -pixels)
    }

    pub fn move_down(&self, pixels: i32) -> Result<()> {
        self.dev.move_rel(Rel::Y, pixels)
    }

    /// Issues a single left click (press immediately followed by release).
    pub fn left_click(&self) -> Result<()> {
        self.dev.click(Key::BTN_LEFT)
    }

    pub fn right_click(&self) -> Result<()> {
        self.dev.click(Key::BTN_RIGHT)
    }

    pub fn middle_click(&self) -> Result<()> {
        self.dev.click(Key::BTN_MIDDLE)
    }

    /// Presses the left button down. It stays pressed until
    /// [`Mouse::left_release`].
    pub fn left_press(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_LEFT)
    }

    pub fn left_release(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_LEFT)
    }

    pub fn right_press(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_RIGHT)
    }

    pub fn right_release(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_RIGHT)
    }

    pub fn middle_press(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_MIDDLE)
    }

    pub fn middle_release(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_MIDDLE)
    }

    /// Turns the scroll wheel by `delta` notches (horizontally if
    /// `horizontal` is set).
    pub fn wheel(&self, horizontal: bool, delta: i32) -> Result<()> {
        self.dev.move_rel(wheel_axis(horizontal), delta)
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

/// A virtual mouse reporting absolute screen positions.
#[derive(Debug)]
pub struct AbsMouse {
    dev: Device,
}

impl AbsMouse {
    /// Creates a virtual absolute-axis pointer whose X axis spans
    /// `min_x..=max_x` and whose Y axis spans `min_y..=max_y`.
    pub fn create(
        path: impl AsRef<Path>,
        name: &str,
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    ) -> Result<Self> {
        let caps = Capabilities::new()
            .with_keys(BUTTONS)
            .with_rel_axes([Rel::WHEEL, Rel::HWHEEL])
            .with_abs_axes([
                AbsSetup::new(Abs::X, min_x, max_x),
                AbsSetup::new(Abs::Y, min_y, max_y),
            ]);
        let dev = Device::create(
            path,
            name,
            InputId::new(Bus::USB, 0x4711, 0x0816, 0x0001),
            &caps,
        )?;
        Ok(Self { dev })
    }

    /// Moves the cursor to the absolute position `(x, y)`.
    ///
    /// Both axis events share one sync frame. Moving to (0, 0) is emitted as
    /// (0, -1); see [`Device::move_to`].
    pub fn move_to(&self, x: i32, y: i32) -> Result<()> {
        self.dev.move_to(x, y)
    }

    /// Issues a single left click.
    pub fn left_click(&self) -> Result<()> {
        self.dev.click(Key::BTN_LEFT)
    }

    pub fn right_click(&self) -> Result<()> {
        self.dev.click(Key::BTN_RIGHT)
    }

    pub fn middle_click(&self) -> Result<()> {
        self.dev.click(Key::BTN_MIDDLE)
    }

    /// Presses the left button down. It stays pressed until
    /// [`AbsMouse::left_release`].
    pub fn left_press(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_LEFT)
    }

    pub fn left_release(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_LEFT)
    }

    pub fn right_press(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_RIGHT)
    }

    pub fn right_release(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_RIGHT)
    }

    pub fn middle_press(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_MIDDLE)
    }

    pub fn middle_release(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_MIDDLE)
    }

    /// Turns the scroll wheel by `delta` notches (horizontally if
    /// `horizontal` is set).
    pub fn wheel(&self, horizontal: bool, delta: i32) -> Result<()> {
        self.dev.move_rel(wheel_axis(horizontal), delta)
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
    fn wheel_axes() {
        assert_eq!(wheel_axis(false), Rel::WHEEL);
        assert_eq!(wheel_axis(true), Rel::HWHEEL);
    }
}
