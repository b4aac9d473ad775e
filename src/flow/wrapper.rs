use log::{debug, trace};

use crate::error::LayoutError;
use crate::event::{EventSink, LineEmission};
use crate::options::{Alignment, EllipsisConfig, TextOptions, WrapOptions};
use crate::surface::Surface;
use crate::units::Pt;

use super::ellipsis;
use super::section::{Advance, SectionFlow};
use super::split::{char_prefix, char_suffix, max_fit_chars};
use super::words::{Break, WidthCache, Word, Words};

/// Whether a [Wrapper::wrap] call laid out everything it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapOutcome {
    /// Every break unit of the call was placed
    Complete,
    /// A bounded region ran out of vertical room; the lines already emitted
    /// stand, the rest of the text was dropped. Not an error.
    OutOfSpace,
}

/// Styling and indent state the session carries between continued calls.
/// Updated only at defined transition points: the top of each `wrap` call
/// absorbs the per-call styling, and the first emitted line of a paragraph
/// settles `continued_x`.
#[derive(Debug, Default, Clone)]
struct Carried {
    continued_x: Pt,
    indent: Pt,
    character_spacing: Pt,
    word_spacing: Pt,
    ellipsis: Option<EllipsisConfig>,
}

/// Accounting for the line currently being accumulated.
#[derive(Default)]
struct LineState {
    buffer: String,
    text_width: Pt,
    word_count: usize,
    line_count: usize,
    /// y of the start of the most recently emitted line
    line_start_y: Pt,
    /// emitted width of the most recently emitted line
    last_text_width: Pt,
}

impl LineState {
    fn clear_line(&mut self) {
        self.buffer.clear();
        self.text_width = Pt(0.0);
        self.word_count = 0;
    }

    fn seed(&mut self, word: &str, width: Pt) {
        self.buffer.clear();
        self.buffer.push_str(word);
        self.text_width = width;
        self.word_count = 1;
    }
}

/// A wrap session: flows text into width-fitting lines, lines into columns,
/// and columns into pages, reporting everything it decides through an
/// [EventSink].
///
/// Create one per paragraph or flow region and keep it across calls when a
/// logical paragraph is split over several styled runs (`continued` in
/// [TextOptions]); the session preserves horizontal and vertical continuity
/// between those calls.
pub struct Wrapper<'a, S: Surface, E: EventSink<S>> {
    surface: &'a mut S,
    sink: &'a mut E,
    /// usable width per line; constant except while a first-line indent
    /// temporarily narrows it
    line_width: Pt,
    space_left: Pt,
    section: SectionFlow,
    carried: Carried,
    /// the next emitted line ends its paragraph
    last_line: bool,
    /// indent applied to the line being accumulated, restored when it emits
    first_line_indent: Option<Pt>,
    section_open: bool,
}

impl<'a, S: Surface, E: EventSink<S>> Wrapper<'a, S, E> {
    /// Start a wrap session at the surface's current cursor. Configuration
    /// that could never be meant is rejected here; layout itself cannot
    /// fail.
    pub fn new(
        surface: &'a mut S,
        sink: &'a mut E,
        options: &WrapOptions,
    ) -> Result<Wrapper<'a, S, E>, LayoutError> {
        if options.columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        if !(options.width > Pt(0.0)) {
            return Err(LayoutError::InvalidWidth(options.width));
        }
        let line_width =
            (options.width - options.column_gap * (options.columns - 1) as f32) / options.columns as f32;
        if !(line_width > Pt(0.0)) {
            return Err(LayoutError::NoUsableWidth {
                width: options.width,
                columns: options.columns,
                column_gap: options.column_gap,
            });
        }

        let start_x = surface.x();
        let start_y = surface.y();
        let max_y = match options.height {
            Some(height) => start_y + height,
            None => surface.page_max_y(),
        };

        Ok(Wrapper {
            surface,
            sink,
            line_width,
            space_left: line_width,
            section: SectionFlow {
                column: 1,
                columns: options.columns,
                column_gap: options.column_gap,
                start_x,
                start_y,
                max_y,
                bounded: options.height.is_some(),
            },
            carried: Carried::default(),
            last_line: false,
            first_line_indent: None,
            section_open: false,
        })
    }

    /// The usable width per line in the current configuration
    pub fn line_width(&self) -> Pt {
        self.line_width
    }

    /// The 1-based column currently receiving lines
    pub fn column(&self) -> usize {
        self.section.column
    }

    /// Horizontal offset carried into the next continued call's first line
    pub fn continued_x(&self) -> Pt {
        self.carried.continued_x
    }

    /// Flow one styled run of text into the region.
    ///
    /// Emits `line` events in reading order, advancing the surface cursor
    /// one line height per line, and moves across columns and pages as
    /// vertical room runs out. Returns [WrapOutcome::OutOfSpace] when a
    /// bounded region refused further content; everything emitted before
    /// the refusal stands.
    pub fn wrap(&mut self, text: &str, options: &TextOptions) -> WrapOutcome {
        self.carried.indent = options.indent;
        self.carried.character_spacing = options.character_spacing;
        self.carried.word_spacing = options.word_spacing;
        self.carried.ellipsis = options.ellipsis.clone();

        debug!(
            "wrapping {} bytes into lines {} wide",
            text.len(),
            self.line_width
        );

        let mut stopped = false;

        // never strand the first line of a region alone at the bottom of a
        // column or page
        let line_height = self.surface.line_height(true);
        if !self.section.fits(self.surface.y(), line_height) && !self.next_section(options) {
            return WrapOutcome::OutOfSpace;
        }
        if !self.section_open {
            self.sink.section_start(options, self.surface);
            self.section_open = true;
        }

        let mut state = LineState {
            line_start_y: self.surface.y(),
            ..LineState::default()
        };
        let mut cache = WidthCache::default();
        let mut previous: Option<Break> = None;

        for word in Words::new(text) {
            let width = cache.width_of(word.text, |t| self.word_width(t));
            let keep_going = if width > self.line_width + self.carried.continued_x {
                self.split_word(word, width, previous, &mut state, options)
            } else {
                self.consume(word.text, width, word.brk, previous, &mut state, options)
            };
            if !keep_going {
                stopped = true;
                break;
            }
            previous = Some(word.brk);
        }

        if state.word_count > 0 {
            self.last_line = true;
            self.sink.last_line(options, self.surface);
            self.emit_line(&mut state, options);
        }

        if self.section_open {
            self.sink.section_end(options, self.surface);
            self.section_open = false;
        }

        if options.continued {
            // the next run continues the trailing partial line: restore the
            // cursor to that line's own start and remember how far along it
            // the text already reaches
            if state.line_count > 1 {
                self.carried.continued_x = Pt(0.0);
            }
            self.carried.continued_x += state.last_text_width;
            self.surface.set_y(state.line_start_y);
        } else {
            self.surface.set_x(self.section.start_x);
        }

        if stopped {
            WrapOutcome::OutOfSpace
        } else {
            WrapOutcome::Complete
        }
    }

    fn word_width(&self, text: &str) -> Pt {
        self.surface.measure_width(text)
            + self.carried.character_spacing
            + self.carried.word_spacing
    }

    /// The packer's per-unit step. Returns false when the section flow
    /// refused more vertical space and all further processing must stop.
    fn consume(
        &mut self,
        word: &str,
        width: Pt,
        brk: Break,
        previous: Option<Break>,
        state: &mut LineState,
        options: &TextOptions,
    ) -> bool {
        if previous.map_or(true, |b| b.required()) {
            self.begin_paragraph_line(options);
        }

        let fits = width <= self.space_left;
        // a unit that cannot fit even a completely fresh line is still
        // placed, overflowing, so layout always makes progress
        let force_place = !fits && state.buffer.is_empty() && self.space_left == self.line_width;
        if fits || force_place {
            state.buffer.push_str(word);
            state.text_width += width;
            state.word_count += 1;
        }

        if brk.required() || !fits {
            self.maybe_ellipsis(state, options);

            if brk.required() {
                if !fits && !force_place {
                    // the unit that forced the break also ends a paragraph:
                    // it becomes a line of its own instead of seeding the
                    // next one
                    self.emit_line(state, options);
                    state.seed(word, width);
                }
                self.last_line = true;
                self.sink.last_line(options, self.surface);
            }

            self.emit_line(state, options);

            let line_height = self.surface.line_height(true);
            if !self.section.fits(self.surface.y(), line_height) && !self.next_section(options) {
                state.clear_line();
                return false;
            }

            if brk.required() || force_place {
                self.space_left = self.line_width;
                state.clear_line();
            } else {
                self.space_left = self.line_width - width;
                state.seed(word, width);
            }
        } else {
            self.space_left -= width;
        }
        true
    }

    /// Cuts a unit wider than even a fresh line into maximal-fit pieces,
    /// delivering each piece to the packer before computing the next so the
    /// piece after a line break is guessed against the fresh line's budget.
    fn split_word(
        &mut self,
        word: Word<'_>,
        width: Pt,
        previous: Option<Break>,
        state: &mut LineState,
        options: &TextOptions,
    ) -> bool {
        trace!("splitting over-wide unit of width {}", width);
        let mut rest = word.text;
        let mut rest_width = width;
        let mut prev_break = previous;

        loop {
            let rest_length = rest.chars().count();
            let (count, piece_width) = max_fit_chars(
                rest,
                rest_width,
                self.space_left,
                self.line_width,
                |t| self.word_width(t),
            );

            if count == 0 {
                // not even one character fits what is left of this line;
                // finish the line and retry against a fresh one
                if !self.finish_partial_line(state, options) {
                    return false;
                }
                continue;
            }

            let piece = char_prefix(rest, count);
            // every piece except possibly the very last is a forced break
            let required = word.brk.required() || count < rest_length;
            if !self.consume(
                piece,
                piece_width,
                Break::Synthetic { required },
                prev_break,
                state,
                options,
            ) {
                return false;
            }
            prev_break = Some(Break::Synthetic { required: false });

            rest = char_suffix(rest, count);
            if rest.is_empty() {
                return true;
            }
            rest_width = self.word_width(rest);
        }
    }

    /// Emits whatever the current line holds and resets to a fresh line.
    /// Used when the splitter cannot place a single character mid-line.
    fn finish_partial_line(&mut self, state: &mut LineState, options: &TextOptions) -> bool {
        self.maybe_ellipsis(state, options);
        self.emit_line(state, options);

        let line_height = self.surface.line_height(true);
        if !self.section.fits(self.surface.y(), line_height) && !self.next_section(options) {
            state.clear_line();
            return false;
        }

        self.space_left = self.line_width;
        state.clear_line();
        true
    }

    /// Raises the first-line notification and applies the paragraph's
    /// one-time indent: the configured indent, or whatever horizontal
    /// offset a previous continued call left behind. The narrowing is
    /// undone when this line emits.
    fn begin_paragraph_line(&mut self, options: &TextOptions) {
        let indent = if self.carried.continued_x != Pt(0.0) {
            self.carried.continued_x
        } else {
            self.carried.indent
        };
        self.surface.set_x(self.surface.x() + indent);
        self.line_width -= indent;
        self.first_line_indent = Some(indent);
        self.space_left = self.line_width;
        self.sink.first_line(options, self.surface);
    }

    /// Clips the candidate line and splices in the truncation marker when
    /// this is the last line a bounded region can hold.
    fn maybe_ellipsis(&mut self, state: &mut LineState, _options: &TextOptions) {
        if !self.section.bounded || self.section.column < self.section.columns {
            return;
        }
        let Some(config) = self.carried.ellipsis.clone() else {
            return;
        };
        let line_height = self.surface.line_height(true);
        if self.surface.y() + line_height * 2.0 <= self.section.max_y {
            return;
        }

        debug!("clipping final line of a bounded region");
        state.text_width = ellipsis::truncate(&mut state.buffer, &config, self.line_width, |t| {
            self.word_width(t)
        });
    }

    fn emit_line(&mut self, state: &mut LineState, options: &TextOptions) {
        let align = if self.last_line && options.align == Alignment::Justify {
            Alignment::Left
        } else {
            options.align
        };
        let text_width = state.text_width
            + self.carried.word_spacing * state.word_count.saturating_sub(1) as f32;
        let emission = LineEmission {
            text: state.buffer.clone(),
            text_width,
            word_count: state.word_count,
            line_width: self.line_width,
            align,
        };

        state.line_start_y = self.surface.y();
        self.sink.line(&emission, options, self.surface);
        let line_height = self.surface.line_height(true);
        self.surface.set_y(self.surface.y() + line_height);

        if let Some(indent) = self.first_line_indent.take() {
            self.surface.set_x(self.surface.x() - indent);
            self.line_width += indent;
            if options.continued && self.carried.continued_x == Pt(0.0) {
                self.carried.continued_x = self.carried.indent;
            }
            if !options.continued {
                self.carried.continued_x = Pt(0.0);
            }
        }

        if self.last_line {
            self.surface
                .set_y(self.surface.y() + options.paragraph_gap);
            self.last_line = false;
        }

        state.last_text_width = text_width;
        state.line_count += 1;
    }

    /// Advances to the next column or page, keeping the event protocol
    /// balanced. Returns false when a bounded region refused.
    fn next_section(&mut self, options: &TextOptions) -> bool {
        if self.section_open {
            self.sink.section_end(options, self.surface);
            self.section_open = false;
        }
        match self.section.advance(self.surface, self.line_width) {
            Advance::Refused => false,
            Advance::Column => {
                self.sink.column_break(options, self.surface);
                self.sink.section_start(options, self.surface);
                self.section_open = true;
                true
            }
            Advance::Page => {
                self.sink.page_break(options, self.surface);
                self.sink.section_start(options, self.surface);
                self.section_open = true;
                true
            }
        }
    }
}
