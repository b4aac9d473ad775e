use crate::options::{Alignment, TextOptions};
use crate::surface::Surface;
use crate::units::Pt;

/// A finalized line, handed to [EventSink::line] in reading order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineEmission {
    /// The line's text, exactly as accumulated (trailing whitespace at an
    /// optional break is kept so that concatenating emissions reproduces
    /// the input)
    pub text: String,
    /// Measured width of the text, including character and word spacing
    pub text_width: Pt,
    /// Number of break units packed into the line
    pub word_count: usize,
    /// The usable width the line was packed against. `text_width <=
    /// line_width` unless ellipsis clipping could not make the marker fit.
    pub line_width: Pt,
    /// Effective alignment for this line (`Justify` demoted to `Left` on
    /// the final line of a paragraph)
    pub align: Alignment,
}

/// Consumer of layout events: the painting layer implements this.
///
/// All methods have empty default bodies so a consumer only implements what
/// it cares about. Events fire synchronously, in reading order; a
/// `section_start` always precedes the first line of its section and a
/// `section_end` always follows the last. Each method receives the active
/// per-call options and the surface, so handlers can paint directly.
pub trait EventSink<S: Surface> {
    /// A new column-or-page slot of vertical flow is about to receive lines
    fn section_start(&mut self, _options: &TextOptions, _surface: &mut S) {}

    /// The next line starts a paragraph; its one-time indent is already
    /// applied to the cursor
    fn first_line(&mut self, _options: &TextOptions, _surface: &mut S) {}

    /// A line is ready to paint at the surface's current cursor
    fn line(&mut self, _line: &LineEmission, _options: &TextOptions, _surface: &mut S) {}

    /// The next emitted line ends its paragraph
    fn last_line(&mut self, _options: &TextOptions, _surface: &mut S) {}

    /// Flow moved to the next column of the same page
    fn column_break(&mut self, _options: &TextOptions, _surface: &mut S) {}

    /// Flow requested a new page from the host
    fn page_break(&mut self, _options: &TextOptions, _surface: &mut S) {}

    /// The current section will receive no further lines
    fn section_end(&mut self, _options: &TextOptions, _surface: &mut S) {}
}

/// An [EventSink] that ignores every event; useful when only the cursor
/// movement or the measurement side effects of a wrap are wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardEvents;

impl<S: Surface> EventSink<S> for DiscardEvents {}

/// Helper for consumers that only want the emitted lines: collects each
/// [LineEmission] along with the cursor position it was emitted at.
#[derive(Debug, Default, Clone)]
pub struct CollectLines {
    pub lines: Vec<(Pt, Pt, LineEmission)>,
}

impl<S: Surface> EventSink<S> for CollectLines {
    fn line(&mut self, line: &LineEmission, _options: &TextOptions, surface: &mut S) {
        self.lines.push((surface.x(), surface.y(), line.clone()));
    }
}
