use crate::colour::Colour;
use crate::units::Pt;

/// The host document the engine lays text out into.
///
/// The engine is deliberately ignorant of fonts, glyphs, and page contents;
/// everything it needs from the rendering layer comes through this trait.
/// Coordinates grow downward: `y` increases towards the bottom of the page,
/// and [Surface::page_max_y] is the lowest coordinate content may occupy.
///
/// The engine assumes exclusive, non-reentrant access to the surface for the
/// full duration of one [Wrapper::wrap](crate::flow::Wrapper::wrap) call.
/// Concurrent wraps against the same surface must be serialized by the
/// caller.
pub trait Surface {
    /// Width of a string under the currently active font, size, and style
    fn measure_width(&self, text: &str) -> Pt;

    /// Height of one line under the currently active font and size,
    /// optionally including the font's line gap
    fn line_height(&self, include_gap: bool) -> Pt;

    /// The lowest y coordinate content may occupy on the current page
    fn page_max_y(&self) -> Pt;

    /// The y coordinate of the top content margin on a fresh page
    fn page_margin_top(&self) -> Pt;

    /// Append a new page to the document. The host is expected to reset its
    /// cursor conventions for the fresh page; note that this may also reset
    /// paint state, which is why the engine reapplies the fill colour
    /// afterwards.
    fn request_new_page(&mut self);

    /// The horizontal cursor
    fn x(&self) -> Pt;
    fn set_x(&mut self, x: Pt);

    /// The vertical cursor
    fn y(&self) -> Pt;
    fn set_y(&mut self, y: Pt);

    /// The currently active fill colour
    fn fill_colour(&self) -> Colour;
    fn set_fill_colour(&mut self, colour: Colour);
}
