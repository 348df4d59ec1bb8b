//! Event types, codes, axis and button identifiers.
//!
//! Mostly ported from `linux/input-event-codes.h`.

use std::fmt;

ffi_enum! {
    /// Types of [`InputEvent`][crate::event::InputEvent]s.
    pub enum EventType: u16 {
        /// Synchronization event, terminating one atomic input frame.
        SYN = 0x00,
        /// A key or button press or release.
        KEY = 0x01,
        /// A relative axis movement.
        REL = 0x02,
        /// An absolute axis change.
        ABS = 0x03,
        /// A miscellaneous event.
        MSC = 0x04,
    }
}

impl EventType {
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "EV_{name}"),
            None => write!(f, "EventType({:#x})", self.0),
        }
    }
}

ffi_enum! {
    /// Synchronization event types.
    ///
    /// This is the event code of `SYN` events. Only [`Syn::REPORT`] is ever
    /// emitted by this crate.
    pub enum Syn: u16 {
        REPORT    = 0,
        CONFIG    = 1,
        MT_REPORT = 2,
        DROPPED   = 3,
    }
}

impl Syn {
    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Syn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "SYN_{name}"),
            None => write!(f, "Syn({:#x})", self.0),
        }
    }
}

ffi_enum! {
    /// `KEY_*`/`BTN_*`: A key or button identifier.
    pub enum Key: u16 {
        KEY_ESC        = 1,
        KEY_1          = 2,
        KEY_2          = 3,
        KEY_3          = 4,
        KEY_4          = 5,
        KEY_5          = 6,
        KEY_6          = 7,
        KEY_7          = 8,
        KEY_8          = 9,
        KEY_9          = 10,
        KEY_0          = 11,
        KEY_MINUS      = 12,
        KEY_EQUAL      = 13,
        KEY_BACKSPACE  = 14,
        KEY_TAB        = 15,
        KEY_Q          = 16,
        KEY_W          = 17,
        KEY_E          = 18,
        KEY_R          = 19,
        KEY_T          = 20,
        KEY_Y          = 21,
        KEY_U          = 22,
        KEY_I          = 23,
        KEY_O          = 24,
        KEY_P          = 25,
        KEY_LEFTBRACE  = 26,
        KEY_RIGHTBRACE = 27,
        KEY_ENTER      = 28,
        KEY_LEFTCTRL   = 29,
        KEY_A          = 30,
        KEY_S          = 31,
        KEY_D          = 32,
        KEY_F          = 33,
        KEY_G          = 34,
        KEY_H          = 35,
        KEY_J          = 36,
        KEY_K          = 37,
        KEY_L          = 38,
        KEY_SEMICOLON  = 39,
        KEY_APOSTROPHE = 40,
        KEY_GRAVE      = 41,
        KEY_LEFTSHIFT  = 42,
        KEY_BACKSLASH  = 43,
        KEY_Z          = 44,
        KEY_X          = 45,
        KEY_C          = 46,
        KEY_V          = 47,
        KEY_B          = 48,
        KEY_N          = 49,
        KEY_M          = 50,
        KEY_COMMA      = 51,
        KEY_DOT        = 52,
        KEY_SLASH      = 53,
        KEY_RIGHTSHIFT = 54,
        KEY_KPASTERISK = 55,
        KEY_LEFTALT    = 56,
        KEY_SPACE      = 57,
        KEY_CAPSLOCK   = 58,
        KEY_F1         = 59,
        KEY_F2         = 60,
        KEY_F3         = 61,
        KEY_F4         = 62,
        KEY_F5         = 63,
        KEY_F6         = 64,
        KEY_F7         = 65,
        KEY_F8         = 66,
        KEY_F9         = 67,
        KEY_F10        = 68,
        KEY_NUMLOCK    = 69,
        KEY_SCROLLLOCK = 70,
        KEY_KP7        = 71,
        KEY_KP8        = 72,
        KEY_KP9        = 73,
        KEY_KPMINUS    = 74,
        KEY_KP4        = 75,
        KEY_KP5        = 76,
        KEY_KP6        = 77,
        KEY_KPPLUS     = 78,
        KEY_KP1        = 79,
        KEY_KP2        = 80,
        KEY_KP3        = 81,
        KEY_KP0        = 82,
        KEY_KPDOT      = 83,
        KEY_F11        = 87,
        KEY_F12        = 88,
        KEY_KPENTER    = 96,
        KEY_RIGHTCTRL  = 97,
        KEY_KPSLASH    = 98,
        KEY_SYSRQ      = 99,
        KEY_RIGHTALT   = 100,
        KEY_HOME       = 102,
        KEY_UP         = 103,
        KEY_PAGEUP     = 104,
        KEY_LEFT       = 105,
        KEY_RIGHT      = 106,
        KEY_END        = 107,
        KEY_DOWN       = 108,
        KEY_PAGEDOWN   = 109,
        KEY_INSERT     = 110,
        KEY_DELETE     = 111,
        KEY_MUTE       = 113,
        KEY_VOLUMEDOWN = 114,
        KEY_VOLUMEUP   = 115,
        KEY_POWER      = 116,
        KEY_KPEQUAL    = 117,
        KEY_PAUSE      = 119,
        KEY_KPCOMMA    = 121,
        KEY_LEFTMETA   = 125,
        KEY_RIGHTMETA  = 126,
        KEY_COMPOSE    = 127,

        BTN_LEFT       = 0x110,
        BTN_RIGHT      = 0x111,
        BTN_MIDDLE     = 0x112,
        BTN_SIDE       = 0x113,
        BTN_EXTRA      = 0x114,
        BTN_FORWARD    = 0x115,
        BTN_BACK       = 0x116,
        BTN_TASK       = 0x117,

        BTN_SOUTH      = 0x130,
        BTN_EAST       = 0x131,
        BTN_C          = 0x132,
        BTN_NORTH      = 0x133,
        BTN_WEST       = 0x134,
        BTN_Z          = 0x135,
        BTN_TL         = 0x136,
        BTN_TR         = 0x137,
        BTN_TL2        = 0x138,
        BTN_TR2        = 0x139,
        BTN_SELECT     = 0x13a,
        BTN_START      = 0x13b,
        BTN_MODE       = 0x13c,
        BTN_THUMBL     = 0x13d,
        BTN_THUMBR     = 0x13e,

        BTN_TOUCH      = 0x14a,

        BTN_DPAD_UP    = 0x220,
        BTN_DPAD_DOWN  = 0x221,
        BTN_DPAD_LEFT  = 0x222,
        BTN_DPAD_RIGHT = 0x223,
    }
}

impl Key {
    #[inline]
    pub const fn from_raw(code: u16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Key({:#x})", self.0),
        }
    }
}

ffi_enum! {
    /// `REL_*`: A relative axis identifier.
    pub enum Rel: u16 {
        X             = 0x00,
        Y             = 0x01,
        Z             = 0x02,
        RX            = 0x03,
        RY            = 0x04,
        RZ            = 0x05,
        HWHEEL        = 0x06,
        DIAL          = 0x07,
        WHEEL         = 0x08,
        MISC          = 0x09,
        WHEEL_HI_RES  = 0x0b,
        HWHEEL_HI_RES = 0x0c,
    }
}

impl Rel {
    #[inline]
    pub const fn from_raw(code: u16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Rel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "REL_{name}"),
            None => write!(f, "Rel({:#x})", self.0),
        }
    }
}

ffi_enum! {
    /// `ABS_*`: An absolute axis identifier.
    pub enum Abs: u16 {
        X          = 0x00,
        Y          = 0x01,
        Z          = 0x02,
        RX         = 0x03,
        RY         = 0x04,
        RZ         = 0x05,
        THROTTLE   = 0x06,
        RUDDER     = 0x07,
        WHEEL      = 0x08,
        GAS        = 0x09,
        BRAKE      = 0x0a,
        HAT0X      = 0x10,
        HAT0Y      = 0x11,
        HAT1X      = 0x12,
        HAT1Y      = 0x13,
        HAT2X      = 0x14,
        HAT2Y      = 0x15,
        HAT3X      = 0x16,
        HAT3Y      = 0x17,
        PRESSURE   = 0x18,
        DISTANCE   = 0x19,
        TILT_X     = 0x1a,
        TILT_Y     = 0x1b,
        TOOL_WIDTH = 0x1c,
        VOLUME     = 0x20,
        MISC       = 0x28,
    }
}

impl Abs {
    /// The largest valid absolute axis code (`ABS_MAX`).
    pub(crate) const MAX: Self = Self(0x3f);

    #[inline]
    pub const fn from_raw(code: u16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Abs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "ABS_{name}"),
            None => write!(f, "Abs({:#x})", self.0),
        }
    }
}

ffi_enum! {
    /// `MSC_*`: Miscellaneous event codes.
    pub enum Misc: u16 {
        SERIAL    = 0x00,
        PULSELED  = 0x01,
        GESTURE   = 0x02,
        RAW       = 0x03,
        SCAN      = 0x04,
        TIMESTAMP = 0x05,
    }
}

impl Misc {
    #[inline]
    pub const fn from_raw(code: u16) -> Self {
        Self(code)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for Misc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant_name() {
            Some(name) => write!(f, "MSC_{name}"),
            None => write!(f, "Misc({:#x})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_names() {
        assert_eq!(format!("{:?}", Key::BTN_LEFT), "BTN_LEFT");
        assert_eq!(format!("{:?}", Key::from_raw(0x2ff)), "Key(0x2ff)");
        assert_eq!(format!("{:?}", Rel::HWHEEL), "REL_HWHEEL");
        assert_eq!(format!("{:?}", Abs::HAT0X), "ABS_HAT0X");
        assert_eq!(format!("{:?}", EventType::SYN), "EV_SYN");
    }
}
