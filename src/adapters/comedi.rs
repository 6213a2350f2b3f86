//! Lab I/O card backend over libcomedi.
//!
//! Opens the comedi device, configures every DIO line in the direction
//! [`DIO_BANKS`] prescribes, and then maps each port call onto one
//! `comedi_dio_*` / `comedi_data_write` call. Channels split as
//! `subdevice = raw >> 8`, `line = raw & 0xFF`.
//!
//! Only built with the `comedi` feature; links against `libcomedi`.

use std::ffi::{CString, c_char, c_int, c_uint};

use log::{error, info, trace, warn};

use crate::channels::{Channel, DIO_BANKS, LineDirection};
use crate::error::{ConfigError, Result};
use crate::ports::IoPort;

#[repr(C)]
struct ComediDevice {
    _private: [u8; 0],
}

const COMEDI_INPUT: c_uint = 0;
const COMEDI_OUTPUT: c_uint = 1;
const AREF_GROUND: c_uint = 0;
const ANALOG_RANGE: c_uint = 0;

#[link(name = "comedi")]
unsafe extern "C" {
    fn comedi_open(filename: *const c_char) -> *mut ComediDevice;
    fn comedi_close(it: *mut ComediDevice) -> c_int;
    fn comedi_dio_config(
        it: *mut ComediDevice,
        subdevice: c_uint,
        channel: c_uint,
        direction: c_uint,
    ) -> c_int;
    fn comedi_dio_write(
        it: *mut ComediDevice,
        subdevice: c_uint,
        channel: c_uint,
        bit: c_uint,
    ) -> c_int;
    fn comedi_dio_read(
        it: *mut ComediDevice,
        subdevice: c_uint,
        channel: c_uint,
        bit: *mut c_uint,
    ) -> c_int;
    fn comedi_data_write(
        it: *mut ComediDevice,
        subdevice: c_uint,
        channel: c_uint,
        range: c_uint,
        aref: c_uint,
        data: c_uint,
    ) -> c_int;
}

pub struct ComediIo {
    device: CString,
    handle: *mut ComediDevice,
}

impl ComediIo {
    /// Prepare a backend for `device` (e.g. `/dev/comedi0`). Nothing is
    /// opened until [`IoPort::init`].
    pub fn new(device: &str) -> Result<Self> {
        let device = CString::new(device)
            .map_err(|_| ConfigError::ValidationFailed("comedi_device must not contain NUL"))?;
        Ok(Self {
            device,
            handle: core::ptr::null_mut(),
        })
    }

    fn is_open(&self) -> bool {
        !self.handle.is_null()
    }

    fn write_line(&mut self, channel: Channel, bit: bool) {
        if !channel.is_wired() {
            trace!("comedi: {} is no-connect", channel);
            return;
        }
        if !self.is_open() {
            warn!("comedi: write {} before init", channel);
            return;
        }
        // SAFETY: handle is a live device returned by comedi_open and only
        // closed in Drop; access is serialised through &mut self.
        let rc = unsafe {
            comedi_dio_write(
                self.handle,
                c_uint::from(channel.subdevice()),
                c_uint::from(channel.line()),
                c_uint::from(bit),
            )
        };
        if rc < 0 {
            warn!("comedi: write {} failed (rc={})", channel, rc);
        }
    }

    /// # Safety
    ///
    /// `self.handle` must be an open device.
    unsafe fn configure_lines(&mut self) -> bool {
        let mut ok = true;
        for (subdevice, first, count, direction) in DIO_BANKS {
            let dir = match direction {
                LineDirection::Input => COMEDI_INPUT,
                LineDirection::Output => COMEDI_OUTPUT,
            };
            for line in first..first + count {
                // SAFETY: caller guarantees the handle is open.
                let rc = unsafe {
                    comedi_dio_config(
                        self.handle,
                        c_uint::from(subdevice),
                        c_uint::from(line),
                        dir,
                    )
                };
                if rc < 0 {
                    error!(
                        "comedi: config of line {} on subdevice {} failed (rc={})",
                        line, subdevice, rc
                    );
                    ok = false;
                }
            }
        }
        ok
    }
}

impl IoPort for ComediIo {
    fn init(&mut self) -> bool {
        if self.is_open() {
            return true;
        }
        // SAFETY: device is a valid NUL-terminated path.
        let handle = unsafe { comedi_open(self.device.as_ptr()) };
        if handle.is_null() {
            error!("comedi: unable to open {:?}", self.device);
            return false;
        }
        self.handle = handle;

        // SAFETY: handle was just opened.
        if !unsafe { self.configure_lines() } {
            // SAFETY: handle is open and not used again after this.
            unsafe { comedi_close(self.handle) };
            self.handle = core::ptr::null_mut();
            return false;
        }
        info!("comedi: {:?} open, DIO lines configured", self.device);
        true
    }

    fn set_bit(&mut self, channel: Channel) {
        self.write_line(channel, true);
    }

    fn clear_bit(&mut self, channel: Channel) {
        self.write_line(channel, false);
    }

    fn read_bit(&mut self, channel: Channel) -> bool {
        if !channel.is_wired() || !self.is_open() {
            return false;
        }
        let mut bit: c_uint = 0;
        // SAFETY: handle is open (checked above); bit outlives the call.
        let rc = unsafe {
            comedi_dio_read(
                self.handle,
                c_uint::from(channel.subdevice()),
                c_uint::from(channel.line()),
                &raw mut bit,
            )
        };
        if rc < 0 {
            warn!("comedi: read {} failed (rc={})", channel, rc);
            return false;
        }
        bit != 0
    }

    fn write_analog(&mut self, channel: Channel, value: u16) {
        if !self.is_open() {
            warn!("comedi: analog write {} before init", channel);
            return;
        }
        // SAFETY: handle is open (checked above).
        let rc = unsafe {
            comedi_data_write(
                self.handle,
                c_uint::from(channel.subdevice()),
                c_uint::from(channel.line()),
                ANALOG_RANGE,
                AREF_GROUND,
                c_uint::from(value),
            )
        };
        if rc < 0 {
            warn!("comedi: analog write {} failed (rc={})", channel, rc);
        }
    }
}

impl Drop for ComediIo {
    fn drop(&mut self) {
        if self.is_open() {
            // SAFETY: handle is open and never used again after this.
            unsafe {
                comedi_close(self.handle);
            }
            self.handle = core::ptr::null_mut();
        }
    }
}
