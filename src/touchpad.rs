//! A virtual touchpad: absolute positioning plus touch contact events.

use std::path::{Path, PathBuf};

use crate::{
    device::{AbsSetup, Capabilities, Device},
    error::Result,
    event::{Abs, Key},
    input_id::{Bus, InputId},
};

/// A virtual touchpad device with a bounded absolute coordinate plane.
#[derive(Debug)]
pub struct Touchpad {
    dev: Device,
}

impl Touchpad {
    /// Creates a virtual touchpad whose X axis spans `min_x..=max_x` and
    /// whose Y axis spans `min_y..=max_y`.
    pub fn create(
        path: impl AsRef<Path>,
        name: &str,
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
    ) -> Result<Self> {
        let caps = Capabilities::new()
            .with_keys([Key::BTN_LEFT, Key::BTN_RIGHT, Key::BTN_TOUCH])
            .with_abs_axes([
                AbsSetup::new(Abs::X, min_x, max_x),
                AbsSetup::new(Abs::Y, min_y, max_y),
            ]);
        let dev = Device::create(
            path,
            name,
            InputId::new(Bus::USB, 0x4711, 0x0817, 0x0001),
            &caps,
        )?;
        Ok(Self { dev })
    }

    /// Moves the pointer to the absolute position `(x, y)`.
    ///
    /// Moving to (0, 0) is emitted as (0, -1); see [`Device::move_to`].
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

    /// Presses the left button down. It stays pressed until
    /// [`Touchpad::left_release`].
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

    /// Starts a touch contact. It lasts until [`Touchpad::touch_up`].
    pub fn touch_down(&self) -> Result<()> {
        self.dev.key_down(Key::BTN_TOUCH)
    }

    /// Ends a touch contact.
    pub fn touch_up(&self) -> Result<()> {
        self.dev.key_up(Key::BTN_TOUCH)
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
