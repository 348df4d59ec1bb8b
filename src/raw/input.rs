//! `linux/input.h`

use libc::timeval;

#[derive(Clone, Copy)]
#[repr(C)]
pub struct input_event {
    pub time: timeval,
    pub type_: u16,
    pub code: u16,
    pub value: i32,
}

impl PartialEq for input_event {
    fn eq(&self, other: &Self) -> bool {
        self.time.tv_sec == other.time.tv_sec
            && self.time.tv_usec == other.time.tv_usec
            && self.type_ == other.type_
            && self.code == other.code
            && self.value == other.value
    }
}
impl Eq for input_event {}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct input_id {
    pub bustype: u16,
    pub vendor: u16,
    pub product: u16,
    pub version: u16,
}

pub const ABS_CNT: usize = 0x40;

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    /// `input_event` must not contain padding, since event I/O reinterprets
    /// `&[InputEvent]` as a byte slice.
    #[test]
    fn input_event_layout() {
        assert_eq!(
            mem::size_of::<input_event>(),
            mem::size_of::<timeval>() + mem::size_of::<u16>() * 2 + mem::size_of::<i32>(),
        );
    }
}
