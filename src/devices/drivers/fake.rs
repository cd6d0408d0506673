//! Scripted 8042 stand-in for host tests.

use super::ps2_controller::{
    DeviceRegisters, CMD_ENABLE_AUX, CMD_READ_CONFIG, CMD_WRITE_AUX, CMD_WRITE_CONFIG,
    CONFIG_AUX_CLOCK_DISABLED, DEV_ACK, STATUS_AUX_DATA, STATUS_INPUT_FULL, STATUS_OUTPUT_FULL,
};
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    None,
    Config,
    Aux,
}

pub struct FakeController {
    pub config: u8,
    /// Command-port writes, in order.
    pub commands: Vec<u8>,
    /// Bytes forwarded to the auxiliary device.
    pub aux_commands: Vec<u8>,
    /// Data-port writes not consumed by a pending controller command.
    pub keyboard_writes: Vec<u8>,
    pub status_reads: u32,
    /// Input buffer never drains.
    pub stall_input: bool,
    /// Device never answers.
    pub mute_device: bool,
    /// Device answer to every command.
    pub reply: u8,
    output: VecDeque<(u8, bool)>,
    pending: Pending,
}

impl FakeController {
    pub fn new(config: u8) -> Self {
        Self {
            config,
            commands: Vec::new(),
            aux_commands: Vec::new(),
            keyboard_writes: Vec::new(),
            status_reads: 0,
            stall_input: false,
            mute_device: false,
            reply: DEV_ACK,
            output: VecDeque::new(),
            pending: Pending::None,
        }
    }

    pub fn push_aux(&mut self, bytes: &[u8]) {
        self.output.extend(bytes.iter().map(|&b| (b, true)));
    }

    pub fn push_keyboard(&mut self, byte: u8) {
        self.output.push_back((byte, false));
    }

    pub fn pending_output(&self) -> usize {
        self.output.len()
    }
}

impl DeviceRegisters for FakeController {
    fn read_status(&mut self) -> u8 {
        self.status_reads += 1;
        let mut status = 0;
        if self.stall_input {
            status |= STATUS_INPUT_FULL;
        }
        if let Some(&(_, aux)) = self.output.front() {
            status |= STATUS_OUTPUT_FULL;
            if aux {
                status |= STATUS_AUX_DATA;
            }
        }
        status
    }

    fn read_data(&mut self) -> u8 {
        self.output.pop_front().map(|(b, _)| b).unwrap_or(0)
    }

    fn write_command(&mut self, command: u8) {
        self.commands.push(command);
        match command {
            CMD_READ_CONFIG => self.output.push_back((self.config, false)),
            CMD_WRITE_CONFIG => self.pending = Pending::Config,
            CMD_WRITE_AUX => self.pending = Pending::Aux,
            CMD_ENABLE_AUX => self.config &= !CONFIG_AUX_CLOCK_DISABLED,
            _ => {}
        }
    }

    fn write_data(&mut self, data: u8) {
        match core::mem::replace(&mut self.pending, Pending::None) {
            Pending::Config => self.config = data,
            Pending::Aux => {
                self.aux_commands.push(data);
                if !self.mute_device {
                    self.output.push_back((self.reply, true));
                }
            }
            Pending::None => self.keyboard_writes.push(data),
        }
    }
}
