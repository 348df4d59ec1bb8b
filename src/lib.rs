#![doc = include_str!("../README.md")]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

mod device;
mod dial;
mod error;
pub mod event;
mod gamepad;
mod input_id;
mod keyboard;
mod mouse;
mod raw;
mod touchpad;

use std::{
    fs::File,
    io::{self, Write},
    slice,
};

pub use device::{AbsSetup, Capabilities, Device, SETUP_DELAY};
pub use dial::Dial;
pub use error::{Error, Result};
pub use gamepad::{Gamepad, HatDirection};
pub use input_id::{Bus, InputId};
pub use keyboard::Keyboard;
pub use mouse::{AbsMouse, Mouse};
pub use touchpad::Touchpad;

use crate::event::InputEvent;

/// Writes raw events to a device file.
fn write_raw(mut file: &File, events: &[InputEvent]) -> io::Result<()> {
    let bptr = events.as_ptr().cast::<u8>();
    // Safety: this requires that `InputEvent` contains no padding, which is tested where `input_event` is defined.
    let byte_buf = unsafe { slice::from_raw_parts(bptr, size_of::<InputEvent>() * events.len()) };
    file.write_all(byte_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_sync() {
        fn assert<T: Send + Sync>() {}

        assert::<Device>();
        assert::<Keyboard>();
        assert::<Mouse>();
        assert::<AbsMouse>();
        assert::<Touchpad>();
        assert::<Dial>();
        assert::<Gamepad>();
        assert::<Error>();
    }
}
