//! Combining several symbols' series into one synthetic series.
//!
//! Modules include:
//! - `align`: trim unequal-length series to a comparable window
//! - `average`: unweighted per-field arithmetic mean
//! - `weighted`: weight- and scale-normalized average
/// Shared length/window alignment applied before mixing.
pub mod align;
/// Unweighted per-field average mixer.
pub mod average;
/// Weight- and scale-normalized average mixer.
pub mod weighted;

pub use align::align_series;
pub use average::mix_average;
pub use weighted::mix_weighted;
