//! A virtual keyboard.

use std::{ops::RangeInclusive, path::Path, path::PathBuf};

use crate::{
    device::{Capabilities, Device},
    error::{Error, Result},
    event::Key,
    input_id::{Bus, InputId},
};

/// The key codes a [`Keyboard`] registers and accepts.
///
/// Covers every keyboard key code up to `KEY_MICMUTE`; the gamepad button
/// ranges above are not part of a keyboard's capability set.
const KEY_RANGE: RangeInclusive<u16> = 1..=248;

/// A virtual keyboard device.
///
/// Registers all key codes in [`KEY_RANGE`] so any keyboard key can be
/// pressed without reconfiguring the device.
#[derive(Debug)]
pub struct Keyboard {
    dev: Device,
}

impl Keyboard {
    /// Creates a virtual keyboard at the uinput device node `path`.
    pub fn create(path: impl AsRef<Path>, name: &str) -> Result<Self> {
        let caps = Capabilities::new().with_keys(KEY_RANGE.map(Key::from_raw));
        let dev = Device::create(
            path,
            name,
            InputId::new(Bus::USB, 0x4711, 0x0815, 0x0001),
            &caps,
        )?;
        Ok(Self { dev })
    }

    fn check_key(key: Key) -> Result<()> {
        if !KEY_RANGE.contains(&key.raw()) {
            return Err(Error::InvalidConfig(format!(
                "{key:?} is not a keyboard key (valid codes are {}..={})",
                KEY_RANGE.start(),
                KEY_RANGE.end(),
            )));
        }
        Ok(())
    }

    /// Types `key`: a press frame immediately followed by a release frame.
    pub fn press(&self, key: Key) -> Result<()> {
        Self::check_key(key)?;
        self.dev.click(key)
    }

    /// Presses `key` down. It stays pressed until [`Keyboard::key_up`].
    pub fn key_down(&self, key: Key) -> Result<()> {
        Self::check_key(key)?;
        self.dev.key_down(key)
    }

    /// Releases a previously pressed `key`.
    pub fn key_up(&self, key: Key) -> Result<()> {
        Self::check_key(key)?;
        self.dev.key_up(key)
    }

    /// Resolves the sysfs path of this device.
    pub fn syspath(&self) -> Result<PathBuf> {
        self.dev.syspath()
    }

    /// Destroys the device. Subsequent calls fail with [`Error::Closed`].
    pub fn close(&mut self) -> Result<()> {
        self.dev.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_keyboard_keys() {
        assert!(Keyboard::check_key(Key::KEY_ESC).is_ok());
        assert!(Keyboard::check_key(Key::from_raw(248)).is_ok());

        let err = Keyboard::check_key(Key::from_raw(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");
        let err = Keyboard::check_key(Key::BTN_LEFT).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");
    }
}
