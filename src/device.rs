//! The shared device core: capability registration, device creation,
//! event emission, and teardown.
//!
//! The per-kind drivers ([`Keyboard`], [`Mouse`], ...) are thin wrappers
//! around [`Device`]; custom devices can use it directly.
//!
//! [`Keyboard`]: crate::Keyboard
//! [`Mouse`]: crate::Mouse

use std::{
    ffi::{OsString, c_char, c_int},
    fmt,
    fs::File,
    io::Write as _,
    mem,
    os::unix::ffi::OsStringExt,
    path::{Path, PathBuf},
    ptr, slice, thread,
    time::Duration,
};

use uoctl::Ioctl;

use crate::{
    error::{Error, Result},
    event::{Abs, EventType, InputEvent, Key, KeyState, Misc, Rel},
    input_id::InputId,
    raw::uinput::{
        UI_DEV_CREATE, UI_DEV_DESTROY, UI_GET_SYSNAME, UI_GET_VERSION, UI_SET_ABSBIT,
        UI_SET_EVBIT, UI_SET_KEYBIT, UI_SET_MSCBIT, UI_SET_RELBIT, UINPUT_MAX_NAME_SIZE,
        uinput_user_dev,
    },
    write_raw,
};

/// How long [`Device::create`] waits after `UI_DEV_CREATE` before returning.
///
/// The kernel sets up the evdev node for a new uinput device asynchronously,
/// and exposes no readiness signal on the uinput fd. Events written before
/// the node exists are lost, so creation always ends with this fixed delay.
pub const SETUP_DELAY: Duration = Duration::from_millis(200);

/// Where the kernel exposes virtual input devices in sysfs.
const SYSPATH_ROOT: &str = "/sys/devices/virtual/input";

/// Absolute axis setup information: the axis code plus its value range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsSetup {
    abs: Abs,
    minimum: i32,
    maximum: i32,
    fuzz: i32,
    flat: i32,
}

impl AbsSetup {
    /// Creates an [`AbsSetup`] for `abs` with a minimum and maximum value.
    ///
    /// Fuzz and flat start out as zero.
    pub const fn new(abs: Abs, minimum: i32, maximum: i32) -> Self {
        Self {
            abs,
            minimum,
            maximum,
            fuzz: 0,
            flat: 0,
        }
    }

    /// Returns a copy of `self` with the given fuzz value (input noise filter).
    pub const fn with_fuzz(mut self, fuzz: i32) -> Self {
        self.fuzz = fuzz;
        self
    }

    /// Returns a copy of `self` with the given flat value (axis deadzone).
    pub const fn with_flat(mut self, flat: i32) -> Self {
        self.flat = flat;
        self
    }

    pub const fn abs(&self) -> Abs {
        self.abs
    }

    pub const fn minimum(&self) -> i32 {
        self.minimum
    }

    pub const fn maximum(&self) -> i32 {
        self.maximum
    }

    pub const fn fuzz(&self) -> i32 {
        self.fuzz
    }

    pub const fn flat(&self) -> i32 {
        self.flat
    }
}

/// The capability declaration of a device: which keys, axes and misc events
/// it will emit.
///
/// Capabilities are registered with the kernel in the order they were added
/// here, and are immutable once the device has been created.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    keys: Vec<Key>,
    rel_axes: Vec<Rel>,
    abs_axes: Vec<AbsSetup>,
    misc: Vec<Misc>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds [`Key`]s (or buttons) to be reported by the device.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    /// Adds [`Rel`]ative axes to be reported by the device.
    pub fn with_rel_axes(mut self, rel: impl IntoIterator<Item = Rel>) -> Self {
        self.rel_axes.extend(rel);
        self
    }

    /// Adds absolute axes, with their value ranges, to be reported by the
    /// device.
    pub fn with_abs_axes(mut self, abs: impl IntoIterator<Item = AbsSetup>) -> Self {
        self.abs_axes.extend(abs);
        self
    }

    /// Adds [`Misc`] events to be reported by the device.
    pub fn with_misc(mut self, misc: impl IntoIterator<Item = Misc>) -> Self {
        self.misc.extend(misc);
        self
    }
}

/// One capability registration ioctl.
struct RegOp {
    name: &'static str,
    ioctl: Ioctl<c_int>,
    code: c_int,
}

/// Flattens a [`Capabilities`] into the ioctl sequence that registers it:
/// for each non-empty category, one `UI_SET_EVBIT`, then one `UI_SET_*BIT`
/// per code, in declaration order.
fn registration_plan(caps: &Capabilities) -> Vec<RegOp> {
    fn category(
        plan: &mut Vec<RegOp>,
        ty: EventType,
        name: &'static str,
        ioctl: Ioctl<c_int>,
        codes: impl Iterator<Item = u16>,
    ) {
        let mut enabled = false;
        for code in codes {
            if !enabled {
                plan.push(RegOp {
                    name: "UI_SET_EVBIT",
                    ioctl: UI_SET_EVBIT,
                    code: ty.raw() as c_int,
                });
                enabled = true;
            }
            plan.push(RegOp {
                name,
                ioctl,
                code: code as c_int,
            });
        }
    }

    let mut plan = Vec::new();
    category(
        &mut plan,
        EventType::KEY,
        "UI_SET_KEYBIT",
        UI_SET_KEYBIT,
        caps.keys.iter().map(|k| k.raw()),
    );
    category(
        &mut plan,
        EventType::REL,
        "UI_SET_RELBIT",
        UI_SET_RELBIT,
        caps.rel_axes.iter().map(|r| r.raw()),
    );
    category(
        &mut plan,
        EventType::ABS,
        "UI_SET_ABSBIT",
        UI_SET_ABSBIT,
        caps.abs_axes.iter().map(|a| a.abs().raw()),
    );
    category(
        &mut plan,
        EventType::MSC,
        "UI_SET_MSCBIT",
        UI_SET_MSCBIT,
        caps.misc.iter().map(|m| m.raw()),
    );
    plan
}

/// Fills in the legacy `uinput_user_dev` descriptor.
///
/// The name buffer stays NUL-padded; callers have validated that the name
/// fits. Axis ranges land at the array index of their axis code.
fn encode_user_dev(name: &str, id: InputId, caps: &Capabilities) -> uinput_user_dev {
    let mut dev: uinput_user_dev = unsafe { mem::zeroed() };
    for (dst, src) in dev.name.iter_mut().zip(name.bytes()) {
        *dst = src as c_char;
    }
    dev.id = id.0;
    for axis in &caps.abs_axes {
        let i = axis.abs().raw() as usize;
        dev.absmin[i] = axis.minimum();
        dev.absmax[i] = axis.maximum();
        dev.absfuzz[i] = axis.fuzz();
        dev.absflat[i] = axis.flat();
    }
    dev
}

fn validate(path: &Path, name: &str, caps: &Capabilities) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidConfig("device path must not be empty".into()));
    }
    if name.is_empty() {
        return Err(Error::InvalidConfig("device name must not be empty".into()));
    }
    if name.len() >= UINPUT_MAX_NAME_SIZE {
        return Err(Error::InvalidConfig(format!(
            "device name must be shorter than {UINPUT_MAX_NAME_SIZE} bytes (got {})",
            name.len(),
        )));
    }
    for axis in &caps.abs_axes {
        if axis.abs() > Abs::MAX {
            return Err(Error::InvalidConfig(format!(
                "absolute axis code {:#x} is out of range",
                axis.abs().raw(),
            )));
        }
    }
    Ok(())
}

/// Builds the event frame for an absolute move to `(x, y)`.
///
/// A target of exactly (0, 0) never registers with consumers as a movement;
/// shifting Y to -1 still lands the pointer in the top-left corner. evtest
/// shows the same behavior for the equivalent C code, so this is not a
/// quirk of this implementation and must not be "fixed" here.
fn abs_move_frame(x: i32, y: i32) -> [InputEvent; 2] {
    let y = if x == 0 && y == 0 { -1 } else { y };
    [InputEvent::abs(Abs::X, x), InputEvent::abs(Abs::Y, y)]
}

/// A handle to a virtual input device.
///
/// The handle is the exclusive owner of the open `/dev/uinput` descriptor.
/// Dropping it (or calling [`Device::close`]) destroys the kernel device.
///
/// A [`Device`] is not meant to be shared across threads; create one device
/// per producer instead.
pub struct Device {
    /// `None` once the device has been closed.
    file: Option<File>,
    name: String,
}

impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Device")
            .field("name", &self.name)
            .field("file", &self.file)
            .finish()
    }
}

impl Device {
    /// Creates a virtual input device with the given capability declaration.
    ///
    /// Performs, in order: configuration validation (before any system
    /// call), opening `path` read/write, the capability registration ioctl
    /// sequence, writing the `uinput_user_dev` descriptor, `UI_DEV_CREATE`,
    /// and finally the [`SETUP_DELAY`] wait.
    ///
    /// A registration failure closes the partially-created descriptor and
    /// reports the failing ioctl and code.
    pub fn create(
        path: impl AsRef<Path>,
        name: &str,
        id: InputId,
        caps: &Capabilities,
    ) -> Result<Self> {
        let path = path.as_ref();
        validate(path, name, caps)?;

        let file = File::options()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| Error::registration(format!("open {}", path.display()), e))?;

        // Fails with ENOTTY if `path` is not actually a uinput device node.
        unsafe {
            let mut version = 0;
            UI_GET_VERSION
                .ioctl(&file, &mut version)
                .map_err(|e| Error::registration("UI_GET_VERSION", e))?;
            log::debug!("opened {}; version={version:#x}", path.display());
        }

        // An error in here drops (and thereby closes) the fd before the
        // kernel device was created.
        Self::setup(&file, name, id, caps)?;

        log::debug!("created uinput device {name:?}, waiting {SETUP_DELAY:?} for device node");
        thread::sleep(SETUP_DELAY);

        Ok(Self {
            file: Some(file),
            name: name.to_owned(),
        })
    }

    fn setup(file: &File, name: &str, id: InputId, caps: &Capabilities) -> Result<()> {
        for op in registration_plan(caps) {
            log::trace!("ioctl {} code {:#x}", op.name, op.code);
            unsafe { op.ioctl.ioctl(file, op.code) }
                .map_err(|e| Error::registration(format!("{} code {:#x}", op.name, op.code), e))?;
        }

        let user_dev = encode_user_dev(name, id, caps);
        // Safety: `uinput_user_dev` is `#[repr(C)]` without pointers; its
        // layout is asserted where it is defined.
        let bytes = unsafe {
            slice::from_raw_parts(
                ptr::from_ref(&user_dev).cast::<u8>(),
                mem::size_of::<uinput_user_dev>(),
            )
        };
        (&*file)
            .write_all(bytes)
            .map_err(|e| Error::registration("write uinput_user_dev", e))?;

        unsafe { UI_DEV_CREATE.ioctl(file) }
            .map_err(|e| Error::registration("UI_DEV_CREATE", e))?;
        Ok(())
    }

    fn file(&self) -> Result<&File> {
        self.file.as_ref().ok_or(Error::Closed)
    }

    /// Returns the device name passed to [`Device::create`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes one atomic input frame: `events` followed by a `SYN_REPORT`
    /// record.
    pub fn emit(&self, events: &[InputEvent]) -> Result<()> {
        let file = self.file()?;
        write_raw(file, events).map_err(|e| Error::io("write input events", e))?;
        write_raw(file, &[InputEvent::syn_report()])
            .map_err(|e| Error::io("write SYN_REPORT", e))?;
        Ok(())
    }

    /// Presses `key` down. The key stays pressed until [`Device::key_up`].
    pub fn key_down(&self, key: Key) -> Result<()> {
        self.emit(&[InputEvent::key(key, KeyState::PRESSED)])
    }

    /// Releases a previously pressed `key`.
    pub fn key_up(&self, key: Key) -> Result<()> {
        self.emit(&[InputEvent::key(key, KeyState::RELEASED)])
    }

    /// A key press frame immediately followed by a release frame.
    pub fn click(&self, key: Key) -> Result<()> {
        self.key_down(key)?;
        self.key_up(key)
    }

    /// Moves a relative axis by `delta`.
    pub fn move_rel(&self, rel: Rel, delta: i32) -> Result<()> {
        self.emit(&[InputEvent::rel(rel, delta)])
    }

    /// Moves the absolute X and Y axes to `(x, y)` in a single frame.
    pub fn move_to(&self, x: i32, y: i32) -> Result<()> {
        self.emit(&abs_move_frame(x, y))
    }

    /// Sets a single absolute axis to `value`.
    pub fn set_abs(&self, abs: Abs, value: i32) -> Result<()> {
        self.emit(&[InputEvent::abs(abs, value)])
    }

    /// Sends a miscellaneous event.
    pub fn send_misc(&self, misc: Misc, value: i32) -> Result<()> {
        self.emit(&[InputEvent::misc(misc, value)])
    }

    /// Retrieves the device's directory name in the sysfs hierarchy via
    /// `UI_GET_SYSNAME`.
    fn sysname(&self) -> Result<OsString> {
        let file = self.file()?;

        // The ioctl returns the number of bytes copied into the buffer. If
        // the buffer was filled completely, bytes may have been lost, so
        // retry with a doubled buffer.
        const INITIAL_LEN: usize = 64;
        let mut buf = vec![0_u8; INITIAL_LEN];
        let len = loop {
            let len = unsafe { UI_GET_SYSNAME(buf.len()).ioctl(file, buf.as_mut_ptr().cast()) }
                .map_err(Error::Lookup)?;
            if len as usize == buf.len() {
                buf.resize(buf.len() * 2, 0);
            } else {
                break len;
            }
        };

        // `len` includes the trailing 0 byte
        buf.truncate(len.saturating_sub(1) as usize);
        Ok(OsString::from_vec(buf))
    }

    /// Resolves the sysfs path of the created device, e.g.
    /// `/sys/devices/virtual/input/input123`.
    pub fn syspath(&self) -> Result<PathBuf> {
        Ok(Path::new(SYSPATH_ROOT).join(self.sysname()?))
    }

    /// Destroys the kernel device and closes the descriptor.
    ///
    /// Every subsequent operation on this handle, including a second
    /// `close`, returns [`Error::Closed`].
    pub fn close(&mut self) -> Result<()> {
        let file = self.file.take().ok_or(Error::Closed)?;
        unsafe { UI_DEV_DESTROY.ioctl(&file) }.map_err(|e| Error::io("UI_DEV_DESTROY", e))?;
        Ok(())
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = unsafe { UI_DEV_DESTROY.ioctl(&file) } {
                log::error!("failed to destroy uinput device {:?}: {e}", self.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::input_id::Bus;

    use super::*;

    fn caps() -> Capabilities {
        Capabilities::new()
            .with_keys([Key::BTN_LEFT, Key::BTN_RIGHT])
            .with_rel_axes([Rel::WHEEL])
            .with_abs_axes([AbsSetup::new(Abs::X, 0, 1900), AbsSetup::new(Abs::Y, 0, 1080)])
    }

    fn id() -> InputId {
        InputId::new(Bus::USB, 0x4711, 0x0816, 1)
    }

    #[test]
    fn empty_path_is_rejected_before_any_syscall() {
        let err = Device::create("", "TestMouse", id(), &caps()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");
        assert_eq!(err.io_kind(), None);
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = Device::create("/dev/uinput", "", id(), &caps()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");
    }

    #[test]
    fn overlong_name_error_names_the_limit() {
        let name = "x".repeat(UINPUT_MAX_NAME_SIZE);
        let err = Device::create("/dev/uinput", &name, id(), &caps()).unwrap_err();
        match err {
            Error::InvalidConfig(msg) => assert!(msg.contains("80"), "{msg}"),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_abs_code_is_rejected() {
        let caps = Capabilities::new().with_abs_axes([AbsSetup::new(Abs::from_raw(0x40), 0, 1)]);
        let err = Device::create("/dev/uinput", "dev", id(), &caps).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "{err:?}");
    }

    #[test]
    fn registration_order_matches_declaration_order() {
        let plan = registration_plan(&caps());
        let trace: Vec<(&str, c_int)> = plan.iter().map(|op| (op.name, op.code)).collect();
        assert_eq!(
            trace,
            [
                ("UI_SET_EVBIT", 0x01),
                ("UI_SET_KEYBIT", 0x110),
                ("UI_SET_KEYBIT", 0x111),
                ("UI_SET_EVBIT", 0x02),
                ("UI_SET_RELBIT", 0x08),
                ("UI_SET_EVBIT", 0x03),
                ("UI_SET_ABSBIT", 0x00),
                ("UI_SET_ABSBIT", 0x01),
            ],
        );
    }

    #[test]
    fn empty_categories_are_not_enabled() {
        let plan = registration_plan(&Capabilities::new().with_rel_axes([Rel::DIAL]));
        let trace: Vec<(&str, c_int)> = plan.iter().map(|op| (op.name, op.code)).collect();
        assert_eq!(trace, [("UI_SET_EVBIT", 0x02), ("UI_SET_RELBIT", 0x07)]);
    }

    #[test]
    fn user_dev_encoding() {
        let dev = encode_user_dev("TestMouse", id(), &caps());

        let name: Vec<u8> = dev.name.iter().map(|&c| c as u8).collect();
        assert!(name.starts_with(b"TestMouse"));
        assert!(name[9..].iter().all(|&b| b == 0), "name must be NUL-padded");

        assert_eq!(dev.id.bustype, 0x03);
        assert_eq!(dev.id.vendor, 0x4711);
        assert_eq!(dev.id.product, 0x0816);
        assert_eq!(dev.id.version, 1);

        assert_eq!(dev.absmin[0], 0);
        assert_eq!(dev.absmax[0], 1900);
        assert_eq!(dev.absmin[1], 0);
        assert_eq!(dev.absmax[1], 1080);
        assert_eq!(dev.absfuzz[0], 0);
        assert_eq!(dev.absflat[0], 0);
    }

    #[test]
    fn origin_move_is_special_cased() {
        let frame = abs_move_frame(0, 0);
        assert_eq!(frame, abs_move_frame(0, -1));
        assert_eq!(frame[0], InputEvent::abs(Abs::X, 0));
        assert_eq!(frame[1], InputEvent::abs(Abs::Y, -1));
    }

    #[test]
    fn regular_moves_are_not_special_cased() {
        let frame = abs_move_frame(0, 7);
        assert_eq!(frame[1], InputEvent::abs(Abs::Y, 7));
        let frame = abs_move_frame(5, 0);
        assert_eq!(frame, [InputEvent::abs(Abs::X, 5), InputEvent::abs(Abs::Y, 0)]);
    }
}
