//! PS/2 Controller Access
//!
//! The 8042-style controller exposes two byte-wide registers: data (`0x60`,
//! read/write) and status/command (`0x64`, status on read, command on
//! write). Everything above this module talks to the controller through the
//! [`DeviceRegisters`] trait so tests can substitute a scripted fake.
//!
//! # Status Register
//!
//! | Bit | Name | Description |
//! |-----|------|-------------|
//! | 0   | OBF  | Output buffer full (data available to read) |
//! | 1   | IBF  | Input buffer full (controller busy) |
//! | 5   | AUX  | Output buffer holds a byte from the auxiliary device |
//!
//! # Bounded waits
//!
//! Every read waits for OBF and every write waits for IBF to clear, for at
//! most `spins` status polls. Running out is a [`DeviceError::Timeout`].

use crate::error::{DeviceError, HandshakeStep};
use x86_64::instructions::port::Port;

pub const DATA_PORT: u16 = 0x60;
pub const STATUS_PORT: u16 = 0x64;

pub const STATUS_OUTPUT_FULL: u8 = 0x01;
pub const STATUS_INPUT_FULL: u8 = 0x02;
pub const STATUS_AUX_DATA: u8 = 0x20;

pub const CMD_READ_CONFIG: u8 = 0x20;
pub const CMD_WRITE_CONFIG: u8 = 0x60;
pub const CMD_ENABLE_AUX: u8 = 0xA8;
pub const CMD_WRITE_AUX: u8 = 0xD4;

/// Configuration byte: raise IRQ12 for auxiliary data.
pub const CONFIG_AUX_IRQ: u8 = 0x02;
/// Configuration byte: auxiliary clock disabled.
pub const CONFIG_AUX_CLOCK_DISABLED: u8 = 0x20;

pub const DEV_CMD_SET_DEFAULTS: u8 = 0xF6;
pub const DEV_CMD_ENABLE_STREAMING: u8 = 0xF4;
pub const DEV_ACK: u8 = 0xFA;

pub const DEFAULT_HANDSHAKE_SPINS: u32 = 100_000;

/// Bytes discarded at most when flushing stale controller output.
const FLUSH_LIMIT: usize = 16;

pub trait DeviceRegisters {
    fn read_status(&mut self) -> u8;
    fn read_data(&mut self) -> u8;
    fn write_command(&mut self, command: u8);
    fn write_data(&mut self, data: u8);
}

impl<R: DeviceRegisters + ?Sized> DeviceRegisters for &mut R {
    fn read_status(&mut self) -> u8 {
        (**self).read_status()
    }

    fn read_data(&mut self) -> u8 {
        (**self).read_data()
    }

    fn write_command(&mut self, command: u8) {
        (**self).write_command(command)
    }

    fn write_data(&mut self, data: u8) {
        (**self).write_data(data)
    }
}

/// Real controller behind x86 I/O ports.
pub struct PortRegisters {
    data: Port<u8>,
    command: Port<u8>,
}

impl PortRegisters {
    /// # Safety
    /// The caller must own the PS/2 controller ports; nothing else may
    /// access `0x60`/`0x64` concurrently.
    pub const unsafe fn new() -> Self {
        Self {
            data: Port::new(DATA_PORT),
            command: Port::new(STATUS_PORT),
        }
    }
}

impl DeviceRegisters for PortRegisters {
    fn read_status(&mut self) -> u8 {
        unsafe { self.command.read() }
    }

    fn read_data(&mut self) -> u8 {
        unsafe { self.data.read() }
    }

    fn write_command(&mut self, command: u8) {
        unsafe { self.command.write(command) }
    }

    fn write_data(&mut self, data: u8) {
        unsafe { self.data.write(data) }
    }
}

/// Handshake helpers over a borrowed register interface.
pub struct Ps2Controller<'r, R: DeviceRegisters + ?Sized> {
    regs: &'r mut R,
    spins: u32,
}

impl<'r, R: DeviceRegisters + ?Sized> Ps2Controller<'r, R> {
    pub fn new(regs: &'r mut R, spins: u32) -> Self {
        Self { regs, spins: spins.max(1) }
    }

    fn wait_until(&mut self, step: HandshakeStep, ready: impl Fn(u8) -> bool) -> Result<(), DeviceError> {
        for _ in 0..self.spins {
            if ready(self.regs.read_status()) {
                return Ok(());
            }
            core::hint::spin_loop();
        }
        Err(DeviceError::Timeout { step })
    }

    /// Wait for the controller input buffer to drain (can write).
    pub fn wait_for_write(&mut self) -> Result<(), DeviceError> {
        self.wait_until(HandshakeStep::Write, |s| s & STATUS_INPUT_FULL == 0)
    }

    /// Wait for the controller output buffer to fill (can read).
    pub fn wait_for_read(&mut self) -> Result<(), DeviceError> {
        self.wait_until(HandshakeStep::Read, |s| s & STATUS_OUTPUT_FULL != 0)
    }

    pub fn send_command(&mut self, command: u8) -> Result<(), DeviceError> {
        self.wait_for_write()?;
        self.regs.write_command(command);
        Ok(())
    }

    pub fn send_data(&mut self, data: u8) -> Result<(), DeviceError> {
        self.wait_for_write()?;
        self.regs.write_data(data);
        Ok(())
    }

    pub fn read_data(&mut self) -> Result<u8, DeviceError> {
        self.wait_for_read()?;
        Ok(self.regs.read_data())
    }

    pub fn read_config(&mut self) -> Result<u8, DeviceError> {
        self.send_command(CMD_READ_CONFIG)?;
        self.read_data()
    }

    pub fn write_config(&mut self, config: u8) -> Result<(), DeviceError> {
        self.send_command(CMD_WRITE_CONFIG)?;
        self.send_data(config)
    }

    /// Route `command` to the auxiliary device and require an ACK.
    pub fn send_aux(&mut self, command: u8) -> Result<(), DeviceError> {
        self.send_command(CMD_WRITE_AUX)?;
        self.send_data(command)?;
        let response = self.read_data()?;
        if response != DEV_ACK {
            return Err(DeviceError::NoAck { command, response });
        }
        Ok(())
    }

    /// Discard bytes left in the output buffer. Returns how many were dropped.
    pub fn flush(&mut self) -> usize {
        let mut dropped = 0;
        while dropped < FLUSH_LIMIT && self.regs.read_status() & STATUS_OUTPUT_FULL != 0 {
            self.regs.read_data();
            dropped += 1;
        }
        dropped
    }

    /// Next auxiliary-device byte if one is waiting. Never blocks.
    pub fn read_pending_aux(&mut self) -> Option<u8> {
        let status = self.regs.read_status();
        let wanted = STATUS_OUTPUT_FULL | STATUS_AUX_DATA;
        (status & wanted == wanted).then(|| self.regs.read_data())
    }

    /// Enable the auxiliary port, turn on its interrupt in the configuration
    /// byte, then put the mouse in streaming mode.
    pub fn enable_mouse(&mut self) -> Result<(), DeviceError> {
        let stale = self.flush();
        if stale > 0 {
            klog_debug!("ps2: flushed {} stale bytes", stale);
        }

        self.send_command(CMD_ENABLE_AUX)?;

        let config = self.read_config()?;
        let new_config = (config | CONFIG_AUX_IRQ) & !CONFIG_AUX_CLOCK_DISABLED;
        klog_debug!("ps2: config {:#04x} -> {:#04x}", config, new_config);
        self.write_config(new_config)?;

        self.send_aux(DEV_CMD_SET_DEFAULTS)?;
        self.send_aux(DEV_CMD_ENABLE_STREAMING)?;

        klog_info!("ps2: mouse streaming enabled");
        Ok(())
    }
}
