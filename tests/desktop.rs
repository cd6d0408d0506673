//! Drives `Desktop` the way a kernel main loop would, with a scripted PS/2
//! controller standing in for ports 0x60/0x64.

use std::collections::VecDeque;

use deskcore::config::{DesktopConfig, InputConfig};
use deskcore::desktop::back_buffer_len;
use deskcore::devices::drivers::DeviceRegisters;
use deskcore::devices::input::ByteQueue;
use deskcore::error::HandshakeStep;
use deskcore::ui::{window::notepad, Theme};
use deskcore::{Color, Desktop, DeviceError, PixelSurface, Rect, Window};

const W: u32 = 800;
const H: u32 = 600;

/// ACKs every auxiliary command; device bytes are queued in `out`.
#[derive(Default)]
struct Scripted8042 {
    config: u8,
    expect_config: bool,
    expect_aux: bool,
    out: VecDeque<(u8, bool)>,
    aux_log: Vec<u8>,
    dead: bool,
}

impl DeviceRegisters for Scripted8042 {
    fn read_status(&mut self) -> u8 {
        if self.dead {
            return 0x02;
        }
        match self.out.front() {
            Some(&(_, true)) => 0x21,
            Some(&(_, false)) => 0x01,
            None => 0x00,
        }
    }

    fn read_data(&mut self) -> u8 {
        self.out.pop_front().map_or(0, |(b, _)| b)
    }

    fn write_command(&mut self, command: u8) {
        match command {
            0x20 => self.out.push_back((self.config, false)),
            0x60 => self.expect_config = true,
            0xD4 => self.expect_aux = true,
            _ => {}
        }
    }

    fn write_data(&mut self, data: u8) {
        if std::mem::take(&mut self.expect_config) {
            self.config = data;
        } else if std::mem::take(&mut self.expect_aux) {
            self.aux_log.push(data);
            self.out.push_back((0xFA, true));
        }
    }
}

fn screen() -> (Vec<u32>, Vec<u32>) {
    (vec![0u32; (W * H) as usize], vec![0u32; back_buffer_len(W, H)])
}

#[test]
fn stock_scene_matches_classic_layout() {
    let (mut video, mut back) = screen();
    let front = PixelSurface::packed(&mut video, W, H).unwrap();
    let mut desktop = Desktop::new(front, &mut back, Theme::classic(), DesktopConfig::default()).unwrap();
    desktop.render_frame(&[notepad()]);

    let front = desktop.front();
    assert_eq!(front.read_pixel(10, 10), Some(Color::from_hex(0x008080)));
    assert_eq!(front.read_pixel(400, 580), Some(Color::from_hex(0x333333)));
    assert_eq!(front.read_pixel(400, 110), Some(Color::from_hex(0x000080)));
    assert_eq!(front.read_pixel(400, 300), Some(Color::WHITE));
    assert_eq!(front.read_pixel(103, 103), Some(Color::RED));
    assert!(front.same_pixels(desktop.back()));
}

#[test]
fn polled_mouse_moves_cursor_after_bring_up() {
    let (mut video, mut back) = screen();
    let front = PixelSurface::packed(&mut video, W, H).unwrap();
    let config = DesktopConfig {
        input: InputConfig::ps2_hardware(),
        ..DesktopConfig::default()
    };
    let mut desktop = Desktop::new(front, &mut back, Theme::classic(), config).unwrap();

    let mut ctl = Scripted8042 { config: 0x65, ..Default::default() };
    desktop.initialize_input(&mut ctl).unwrap();
    assert_eq!(ctl.aux_log, [0xF6, 0xF4]);
    assert_eq!(ctl.config & 0x22, 0x02);

    // a stray tail byte, then two well-formed packets
    for b in [0x04, 0x08, 30, 0x00, 0x09, 0xF6, 0x00] {
        ctl.out.push_back((b, true));
    }
    assert_eq!(desktop.poll_input(&mut ctl), 7);
    assert_eq!(desktop.cursor_position(), (120, 100));
    assert!(desktop.input().buttons().left);
    assert_eq!(desktop.input().rejected(), 1);

    desktop.render_frame(&[]);
    assert_eq!(desktop.front().read_pixel(120, 100), Some(Color::RED));
}

#[test]
fn dead_controller_fails_bring_up_without_hanging() {
    let (mut video, mut back) = screen();
    let front = PixelSurface::packed(&mut video, W, H).unwrap();
    let config = DesktopConfig {
        input: InputConfig { handshake_spins: 1_000, ..InputConfig::default() },
        ..DesktopConfig::default()
    };
    let mut desktop = Desktop::new(front, &mut back, Theme::classic(), config).unwrap();
    let mut ctl = Scripted8042 { dead: true, ..Default::default() };
    assert_eq!(
        desktop.initialize_input(&mut ctl),
        Err(DeviceError::Timeout { step: HandshakeStep::Write })
    );

    // rendering is unaffected by the failed bring-up
    desktop.render_frame(&[]);
    assert!(desktop.front().same_pixels(desktop.back()));
}

#[test]
fn queued_bytes_match_direct_feed() {
    let stream = [0x00u8, 10, 0xFB, 0x01, 0, 0, 0x02, 0x80, 0x81];
    let (mut video_a, mut back_a) = screen();
    let (mut video_b, mut back_b) = screen();
    let mut a = Desktop::new(
        PixelSurface::packed(&mut video_a, W, H).unwrap(),
        &mut back_a,
        Theme::dark_modern(),
        DesktopConfig::default(),
    )
    .unwrap();
    let mut b = Desktop::new(
        PixelSurface::packed(&mut video_b, W, H).unwrap(),
        &mut back_b,
        Theme::dark_modern(),
        DesktopConfig::default(),
    )
    .unwrap();

    for byte in stream {
        a.feed_input_byte(byte);
    }
    let queue: ByteQueue<8> = ByteQueue::new();
    let mut fed = 0;
    for chunk in stream.chunks(4) {
        for &byte in chunk {
            assert!(queue.push(byte));
        }
        fed += b.drain_input(&queue);
    }
    assert_eq!(fed, stream.len());
    assert_eq!(a.cursor_position(), b.cursor_position());
    assert_eq!(a.cursor_position(), (0, 232));

    let scene = [Window::new(Rect::new(-50, 400, 300, 300), "Off edge", "line 1\nline 2")];
    a.render_frame(&scene);
    b.render_frame(&scene);
    assert!(a.front().same_pixels(b.front()));
}
