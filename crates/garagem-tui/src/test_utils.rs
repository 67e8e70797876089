//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's TestBackend and
//! asserted on as plain text.

use garagem_core::{Vehicle, VehicleId, VehiclePayload};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Full-frame rendering, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string (for debugging failed assertions)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }

    pub fn clear(&mut self) {
        self.terminal.clear().expect("Failed to clear terminal");
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

fn vehicle(id: i64, plate: &str, make: &str, model: &str, year: i32, color: &str) -> Vehicle {
    Vehicle::from_payload(
        VehicleId::Number(id),
        VehiclePayload {
            plate: plate.into(),
            make: make.into(),
            model: model.into(),
            year,
            color: color.into(),
        },
    )
}

/// Fiat Uno (id 1) and Ford Ka (id 2)
pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        vehicle(1, "ABC1234", "Fiat", "Uno", 2010, "Red"),
        vehicle(2, "XYZ9999", "Ford", "Ka", 2015, "Blue"),
    ]
}
