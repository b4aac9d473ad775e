//! Test doubles shared across integration tests: a surface with a fixed
//! per-character width model and a sink that records every event.
#![allow(dead_code)]

use pdf_flow::{colours, Alignment, Colour, EventSink, LineEmission, Pt, Surface, TextOptions};

/// A surface where every non-control character is `char_width` wide and
/// pages run from y 0 down to `page_bottom`.
pub struct TestSurface {
    pub x: Pt,
    pub y: Pt,
    pub char_width: f32,
    pub line_h: f32,
    pub page_top: Pt,
    pub page_bottom: Pt,
    pub pages: usize,
    pub fill: Colour,
    pub fill_applications: usize,
}

impl TestSurface {
    pub fn new(char_width: f32, line_h: f32, page_bottom: f32) -> TestSurface {
        TestSurface {
            x: Pt(0.0),
            y: Pt(0.0),
            char_width,
            line_h,
            page_top: Pt(0.0),
            page_bottom: Pt(page_bottom),
            pages: 1,
            fill: colours::BLACK,
            fill_applications: 0,
        }
    }
}

impl Surface for TestSurface {
    fn measure_width(&self, text: &str) -> Pt {
        let count = text.chars().filter(|c| !c.is_control()).count();
        Pt(count as f32 * self.char_width)
    }

    fn line_height(&self, _include_gap: bool) -> Pt {
        Pt(self.line_h)
    }

    fn page_max_y(&self) -> Pt {
        self.page_bottom
    }

    fn page_margin_top(&self) -> Pt {
        self.page_top
    }

    fn request_new_page(&mut self) {
        self.pages += 1;
        self.x = Pt(0.0);
        self.y = self.page_top;
    }

    fn x(&self) -> Pt {
        self.x
    }

    fn set_x(&mut self, x: Pt) {
        self.x = x;
    }

    fn y(&self) -> Pt {
        self.y
    }

    fn set_y(&mut self, y: Pt) {
        self.y = y;
    }

    fn fill_colour(&self) -> Colour {
        self.fill
    }

    fn set_fill_colour(&mut self, colour: Colour) {
        self.fill = colour;
        self.fill_applications += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SectionStart,
    FirstLine { x: f32 },
    Line {
        text: String,
        width: f32,
        line_width: f32,
        words: usize,
        align: Alignment,
        x: f32,
        y: f32,
    },
    LastLine,
    ColumnBreak,
    PageBreak,
    SectionEnd,
}

/// Records every event, along with the cursor position lines were emitted at.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    /// The emitted lines as (text, text_width) pairs
    pub fn lines(&self) -> Vec<(String, f32)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Line { text, width, .. } => Some((text.clone(), *width)),
                _ => None,
            })
            .collect()
    }

    pub fn line_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Line { .. }))
            .collect()
    }

    /// All emitted text concatenated back together
    pub fn joined(&self) -> String {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Line { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl EventSink<TestSurface> for Recorder {
    fn section_start(&mut self, _options: &TextOptions, _surface: &mut TestSurface) {
        self.events.push(Event::SectionStart);
    }

    fn first_line(&mut self, _options: &TextOptions, surface: &mut TestSurface) {
        self.events.push(Event::FirstLine { x: surface.x().0 });
    }

    fn line(&mut self, line: &LineEmission, _options: &TextOptions, surface: &mut TestSurface) {
        self.events.push(Event::Line {
            text: line.text.clone(),
            width: line.text_width.0,
            line_width: line.line_width.0,
            words: line.word_count,
            align: line.align,
            x: surface.x().0,
            y: surface.y().0,
        });
    }

    fn last_line(&mut self, _options: &TextOptions, _surface: &mut TestSurface) {
        self.events.push(Event::LastLine);
    }

    fn column_break(&mut self, _options: &TextOptions, _surface: &mut TestSurface) {
        self.events.push(Event::ColumnBreak);
    }

    fn page_break(&mut self, _options: &TextOptions, _surface: &mut TestSurface) {
        self.events.push(Event::PageBreak);
    }

    fn section_end(&mut self, _options: &TextOptions, _surface: &mut TestSurface) {
        self.events.push(Event::SectionEnd);
    }
}
