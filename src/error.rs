use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate.
///
/// Layout itself never fails: over-wide tokens are force-split, and a
/// bounded region that runs out of room simply stops emitting lines. Errors
/// are reserved for configuration a caller could never have meant, caught
/// eagerly when the wrap session is created.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A region must flow into at least one column
    #[error("column count must be at least 1")]
    NoColumns,

    /// The region width must be a positive measurement
    #[error("region width must be positive, got {0}pt")]
    InvalidWidth(Pt),

    /// The column gaps consume the entire region width
    #[error(
        "column gap {column_gap}pt leaves no usable line width in a {width}pt wide region with {columns} columns"
    )]
    NoUsableWidth {
        width: Pt,
        columns: usize,
        column_gap: Pt,
    },
}
