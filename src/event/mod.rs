//! Input event records and their type/code enumerations.
//!
//! Every user action is translated to one or more [`InputEvent`]s followed by
//! a `SYN_REPORT` record, which tells the kernel that the preceding records
//! form one atomic input frame.
//!
//! Events carry an **event type** ([`EventType`]), a **code** identifying the
//! affected key or axis ([`Key`], [`Rel`], [`Abs`], [`Misc`], [`Syn`]), and a
//! signed 32-bit **value**. The timestamp is left at zero; the kernel fills
//! it in when the event is queued.

pub(crate) mod codes;

use std::fmt;

use crate::raw::input::input_event;

pub use codes::{Abs, EventType, Key, Misc, Rel, Syn};

/// A fixed-layout input event record, as written to the device fd.
///
/// This is a transparent wrapper around the kernel's `input_event` struct,
/// so a `&[InputEvent]` can be reinterpreted as the exact byte sequence the
/// kernel expects.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct InputEvent(pub(crate) input_event);

impl InputEvent {
    /// Creates an [`InputEvent`] from raw values.
    ///
    /// The timestamp of the event is set to 0.
    #[inline]
    pub const fn new(ty: EventType, raw_code: u16, raw_value: i32) -> Self {
        Self(input_event {
            time: libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            },
            type_: ty.0,
            code: raw_code,
            value: raw_value,
        })
    }

    /// Creates a key press or release event.
    #[inline]
    pub const fn key(key: Key, state: KeyState) -> Self {
        Self::new(EventType::KEY, key.0, state.0)
    }

    /// Creates a relative axis movement by `delta`.
    #[inline]
    pub const fn rel(rel: Rel, delta: i32) -> Self {
        Self::new(EventType::REL, rel.0, delta)
    }

    /// Creates an absolute axis change to `value`.
    #[inline]
    pub const fn abs(abs: Abs, value: i32) -> Self {
        Self::new(EventType::ABS, abs.0, value)
    }

    /// Creates a miscellaneous event.
    #[inline]
    pub const fn misc(misc: Misc, value: i32) -> Self {
        Self::new(EventType::MSC, misc.0, value)
    }

    /// Creates the `SYN_REPORT` record that terminates an event frame.
    #[inline]
    pub const fn syn_report() -> Self {
        Self::new(EventType::SYN, Syn::REPORT.0, 0)
    }

    /// Returns the [`EventType`] of this event.
    #[inline]
    pub fn event_type(&self) -> EventType {
        EventType(self.0.type_)
    }

    /// Returns the raw *event code* field.
    #[inline]
    pub fn raw_code(&self) -> u16 {
        self.0.code
    }

    /// Returns the raw *event value* field.
    #[inline]
    pub fn raw_value(&self) -> i32 {
        self.0.value
    }
}

impl fmt::Debug for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("InputEvent");
        s.field("type", &self.event_type());
        match self.event_type() {
            EventType::SYN => s.field("code", &Syn(self.raw_code())),
            EventType::KEY => s.field("code", &Key(self.raw_code())),
            EventType::REL => s.field("code", &Rel(self.raw_code())),
            EventType::ABS => s.field("code", &Abs(self.raw_code())),
            EventType::MSC => s.field("code", &Misc(self.raw_code())),
            _ => s.field("code", &self.raw_code()),
        };
        s.field("value", &self.raw_value()).finish()
    }
}

ffi_enum! {
    /// State of a [`Key`], stored as the value of a key event.
    pub enum KeyState: i32 {
        /// The key used to be pressed and has now been released.
        RELEASED = 0,
        /// The key used to be released and has now been pressed.
        PRESSED = 1,
    }
}

impl fmt::Debug for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "KeyState({:?})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let ev = InputEvent::key(Key::KEY_A, KeyState::PRESSED);
        assert_eq!(ev.event_type(), EventType::KEY);
        assert_eq!(ev.raw_code(), 30);
        assert_eq!(ev.raw_value(), 1);

        let ev = InputEvent::rel(Rel::HWHEEL, -3);
        assert_eq!(ev.event_type(), EventType::REL);
        assert_eq!(ev.raw_code(), 0x06);
        assert_eq!(ev.raw_value(), -3);

        let ev = InputEvent::syn_report();
        assert_eq!(ev.event_type(), EventType::SYN);
        assert_eq!(ev.raw_code(), 0);
        assert_eq!(ev.raw_value(), 0);
    }

    #[test]
    fn zero_timestamp() {
        let ev = InputEvent::abs(Abs::X, 17);
        assert_eq!(ev.0.time.tv_sec, 0);
        assert_eq!(ev.0.time.tv_usec, 0);
    }
}
