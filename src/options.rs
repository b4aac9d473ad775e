use crate::units::Pt;

/// Horizontal alignment of a line within its column.
///
/// The engine does not position glyphs itself; the alignment is carried on
/// each [LineEmission](crate::LineEmission) so the consumer can distribute
/// the slack. `Justify` is demoted to `Left` for the final line of a
/// paragraph.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// Where the truncation marker lands in a clipped line
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EllipsisLocation {
    /// Characters are dropped from the front of the line
    Start,
    /// Characters are dropped from the middle of the line
    Middle,
    /// Characters are dropped from the end of the line
    #[default]
    End,
}

/// How to mark clipped content when a bounded region runs out of vertical
/// room. Without one of these configured, layout simply stops at the last
/// line that fits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EllipsisConfig {
    pub location: EllipsisLocation,
    /// The marker spliced into the clipped line; need not be a single
    /// character
    pub character: String,
}

impl Default for EllipsisConfig {
    fn default() -> EllipsisConfig {
        EllipsisConfig {
            location: EllipsisLocation::End,
            character: "…".into(),
        }
    }
}

impl EllipsisConfig {
    /// Truncate at `location` with the standard horizontal ellipsis
    pub fn at(location: EllipsisLocation) -> EllipsisConfig {
        EllipsisConfig {
            location,
            ..Default::default()
        }
    }

    /// Truncate at the end of the line with a custom marker
    pub fn with_character<S: ToString>(character: S) -> EllipsisConfig {
        EllipsisConfig {
            location: EllipsisLocation::End,
            character: character.to_string(),
        }
    }
}

/// The default gap between adjacent columns
pub const DEFAULT_COLUMN_GAP: Pt = Pt(18.0);

/// Region-scoped configuration, fixed for the lifetime of a
/// [Wrapper](crate::flow::Wrapper). The usable line width per column is
/// derived once: `(width - column_gap * (columns - 1)) / columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapOptions {
    /// Total width of the region, across all columns
    pub width: Pt,
    /// Bound on the total vertical extent of the region; [None] flows
    /// across as many pages as the text needs
    pub height: Option<Pt>,
    /// Number of columns to flow into, at least 1
    pub columns: usize,
    /// Horizontal gap between adjacent columns
    pub column_gap: Pt,
}

impl WrapOptions {
    /// A single unbounded column of the given width
    pub fn new(width: Pt) -> WrapOptions {
        WrapOptions {
            width,
            height: None,
            columns: 1,
            column_gap: DEFAULT_COLUMN_GAP,
        }
    }

    /// An unbounded multi-column region
    pub fn columns(width: Pt, columns: usize, column_gap: Pt) -> WrapOptions {
        WrapOptions {
            width,
            height: None,
            columns,
            column_gap,
        }
    }

    /// A single column clipped to the given height
    pub fn bounded(width: Pt, height: Pt) -> WrapOptions {
        WrapOptions {
            width,
            height: Some(height),
            columns: 1,
            column_gap: DEFAULT_COLUMN_GAP,
        }
    }
}

/// Per-call text styling. A logical paragraph split across styled runs
/// passes one of these with every [Wrapper::wrap](crate::flow::Wrapper::wrap)
/// call; the session absorbs the styling fields into its carried state at
/// the start of each call.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// One-time indent applied to the first line of each paragraph
    pub indent: Pt,
    /// Additional width added per character by the renderer
    pub character_spacing: Pt,
    /// Additional width added to every break unit. Numeric: zero means no
    /// extra spacing, it is not a toggle.
    pub word_spacing: Pt,
    pub align: Alignment,
    /// Truncation policy for bounded regions; [None] disables it
    pub ellipsis: Option<EllipsisConfig>,
    /// More styled runs of this paragraph follow in a later call
    pub continued: bool,
    /// Vertical gap applied after the final line of a paragraph
    pub paragraph_gap: Pt,
}

impl Default for TextOptions {
    fn default() -> TextOptions {
        TextOptions {
            indent: Pt(0.0),
            character_spacing: Pt(0.0),
            word_spacing: Pt(0.0),
            align: Alignment::Left,
            ellipsis: None,
            continued: false,
            paragraph_gap: Pt(0.0),
        }
    }
}
