mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod event;
pub use event::*;

/// The line-wrapping, column-flow, and pagination engine
pub mod flow;

mod options;
pub use options::*;

mod surface;
pub use surface::*;

mod units;
pub use units::*;
