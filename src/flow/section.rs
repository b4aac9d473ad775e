use log::debug;

use crate::surface::Surface;
use crate::units::Pt;

/// Outcome of advancing to the next section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advance {
    /// Moved to the next column of the same page
    Column,
    /// Requested a new page from the host and restarted at column 1
    Page,
    /// A bounded region has no columns left; no more content fits
    Refused,
}

/// Tracks which column the flow is in and how much vertical room remains.
///
/// A "section" is one column-or-page slot of vertical flow; advancing means
/// moving to the next column, or to a fresh page once the columns are
/// exhausted. A region with a bounded height never makes a new page:
/// running out of columns is the defined stopping condition, not an error.
pub(crate) struct SectionFlow {
    pub column: usize,
    pub columns: usize,
    pub column_gap: Pt,
    pub start_x: Pt,
    pub start_y: Pt,
    pub max_y: Pt,
    pub bounded: bool,
}

impl SectionFlow {
    /// Whether one more line of the given height fits above the ceiling
    pub fn fits(&self, y: Pt, line_height: Pt) -> bool {
        y + line_height <= self.max_y
    }

    pub fn advance<S: Surface>(&mut self, surface: &mut S, line_width: Pt) -> Advance {
        if self.column < self.columns {
            self.column += 1;
            surface.set_x(surface.x() + line_width + self.column_gap);
            surface.set_y(self.start_y);
            debug!("column break to column {} of {}", self.column, self.columns);
            Advance::Column
        } else if self.bounded {
            debug!("bounded region out of columns, refusing more content");
            Advance::Refused
        } else {
            surface.request_new_page();
            self.column = 1;
            self.start_y = surface.page_margin_top();
            self.max_y = surface.page_max_y();
            surface.set_x(self.start_x);
            surface.set_y(self.start_y);
            // page creation may reset the host's paint state
            let fill = surface.fill_colour();
            surface.set_fill_colour(fill);
            debug!("page break, flow continues at y {}", self.start_y);
            Advance::Page
        }
    }
}
