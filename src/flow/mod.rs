//! The text-flow core: flows a stream of text into lines that fit a
//! caller-supplied width, lines into columns, and columns into pages.
//!
//! The engine is a greedy, single-pass packer. Text is segmented into break
//! units per the Unicode line-breaking algorithm (UAX #14); units are packed
//! into the current line until one no longer fits; units wider than a whole
//! line are cut into maximal-fit pieces. Everything the engine decides is
//! reported through an [EventSink](crate::EventSink), and everything it
//! needs from the rendering layer comes through a
//! [Surface](crate::Surface) — it never touches fonts or page contents
//! itself.
//!
//! # Example
//!
//! ```
//! use pdf_flow::{colours, Colour, CollectLines, Pt, Surface, TextOptions, WrapOptions};
//! use pdf_flow::flow::Wrapper;
//!
//! // a monospaced stand-in for a real document's metrics
//! struct Mono { x: Pt, y: Pt, fill: Colour }
//!
//! impl Surface for Mono {
//!     fn measure_width(&self, text: &str) -> Pt {
//!         Pt(text.chars().count() as f32 * 6.0)
//!     }
//!     fn line_height(&self, _include_gap: bool) -> Pt { Pt(12.0) }
//!     fn page_max_y(&self) -> Pt { Pt(720.0) }
//!     fn page_margin_top(&self) -> Pt { Pt(72.0) }
//!     fn request_new_page(&mut self) { self.y = self.page_margin_top(); }
//!     fn x(&self) -> Pt { self.x }
//!     fn set_x(&mut self, x: Pt) { self.x = x; }
//!     fn y(&self) -> Pt { self.y }
//!     fn set_y(&mut self, y: Pt) { self.y = y; }
//!     fn fill_colour(&self) -> Colour { self.fill }
//!     fn set_fill_colour(&mut self, colour: Colour) { self.fill = colour; }
//! }
//!
//! let mut surface = Mono { x: Pt(72.0), y: Pt(72.0), fill: colours::BLACK };
//! let mut lines = CollectLines::default();
//! let mut wrapper = Wrapper::new(&mut surface, &mut lines, &WrapOptions::new(Pt(180.0)))
//!     .expect("valid configuration");
//! wrapper.wrap("The quick brown fox jumps over the lazy dog.", &TextOptions::default());
//!
//! assert!(lines.lines.len() > 1);
//! ```

mod ellipsis;
mod section;
mod split;
mod words;
mod wrapper;

pub use words::{Break, Word, Words};
pub use wrapper::{WrapOutcome, Wrapper};
