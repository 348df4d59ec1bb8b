//! `linux/uinput.h`.
//!
//! Only the legacy `uinput_user_dev` device creation protocol is used here,
//! since it is supported by every kernel that ships `/dev/uinput`.

use std::ffi::{c_char, c_int, c_uint};

use uoctl::{_IO, _IOC, _IOC_READ, _IOR, _IOW, Ioctl};

use super::input::{ABS_CNT, input_id};

pub const UINPUT_MAX_NAME_SIZE: usize = 80;

/// The legacy device descriptor: written to the `uinput` fd before
/// `UI_DEV_CREATE` finalizes the device.
///
/// Note that the kernel declares `absmax` *before* `absmin`.
#[repr(C)]
pub struct uinput_user_dev {
    pub name: [c_char; UINPUT_MAX_NAME_SIZE],
    pub id: input_id,
    pub ff_effects_max: u32,
    pub absmax: [i32; ABS_CNT],
    pub absmin: [i32; ABS_CNT],
    pub absfuzz: [i32; ABS_CNT],
    pub absflat: [i32; ABS_CNT],
}

pub const UINPUT_IOCTL_BASE: u8 = b'U';

pub const UI_DEV_CREATE: Ioctl = _IO(UINPUT_IOCTL_BASE, 1);
pub const UI_DEV_DESTROY: Ioctl = _IO(UINPUT_IOCTL_BASE, 2);

pub const UI_SET_EVBIT: Ioctl<c_int> = _IOW(UINPUT_IOCTL_BASE, 100).with_direct_arg();
pub const UI_SET_KEYBIT: Ioctl<c_int> = _IOW(UINPUT_IOCTL_BASE, 101).with_direct_arg();
pub const UI_SET_RELBIT: Ioctl<c_int> = _IOW(UINPUT_IOCTL_BASE, 102).with_direct_arg();
pub const UI_SET_ABSBIT: Ioctl<c_int> = _IOW(UINPUT_IOCTL_BASE, 103).with_direct_arg();
pub const UI_SET_MSCBIT: Ioctl<c_int> = _IOW(UINPUT_IOCTL_BASE, 104).with_direct_arg();

pub const fn UI_GET_SYSNAME(len: usize) -> Ioctl<*mut c_char> {
    _IOC(_IOC_READ, UINPUT_IOCTL_BASE, 44, len)
}

pub const UI_GET_VERSION: Ioctl<*mut c_uint> = _IOR(UINPUT_IOCTL_BASE, 45);

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    /// The descriptor is written to the fd as raw bytes, so its size has to
    /// match the kernel's expectation exactly (80-byte name, 4 `u16` IDs,
    /// `u32`, and 4 axis arrays of 64 `i32` each).
    #[test]
    fn user_dev_layout() {
        assert_eq!(mem::size_of::<uinput_user_dev>(), 1116);
        assert_eq!(mem::offset_of!(uinput_user_dev, id), 80);
        assert_eq!(mem::offset_of!(uinput_user_dev, ff_effects_max), 88);
        assert_eq!(mem::offset_of!(uinput_user_dev, absmax), 92);
        assert_eq!(mem::offset_of!(uinput_user_dev, absmin), 92 + 4 * ABS_CNT);
    }
}
