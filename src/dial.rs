//! A virtual dial (rotary input device).

use std::path::{Path, PathBuf};

use crate::{
    device::{Capabilities, Device},
    error::Result,
    event::Rel,
    input_id::{Bus, InputId},
};

/// A virtual dial reporting rotation as `REL_DIAL` deltas.
#[derive(Debug)]
pub struct Dial {
    dev: Device,
}

impl Dial {
    /// Creates a virtual dial at the uinput device node `path`.
    pub fn create(path: impl AsRef<Path>, name: &str) -> Result<Self> {
        let caps = Capabilities::new().with_rel_axes([Rel::DIAL]);
        let dev = Device::create(
            path,
            name,
            InputId::new(Bus::USB, 0x4711, 0x0818, 0x0001),
            &caps,
        )?;
        Ok(Self { dev })
    }

    /// Turns the dial by `delta` steps (negative values turn the other way).
    pub fn turn(&self, delta: i32) -> Result<()> {
        self.dev.move_rel(Rel::DIAL, delta)
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
