//! Wall layout computation for hanging paintings.
//!
//! Pure geometry with no I/O and no hidden state. `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`mount`]: Mount hardware (wire, D-ring) and hanger point resolution
//! - [`layout`]: Wall, paintings, spacing policies, and layout computation
//! - [`plan`]: Editable plan, spacing modes, measurements, and warnings
//! - [`svg`]: SVG visualization of an arrangement (feature `svg`)
//! - [`units`]: Centimeter/inch conversion, fractional inches, parsing (feature `units`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod layout;
pub mod mount;
pub mod plan;
#[cfg(feature = "svg")]
pub mod svg;
#[cfg(feature = "units")]
pub mod units;

pub use layout::{
    DEFAULT_SPACING, LayoutConfig, LayoutError, MINIMUM_SPACING, Painting, PaintingLayout, Point,
    SpacingPolicy, Wall, compute_auto_spacing, compute_layouts,
};
pub use mount::{HangerPoints, MountType};
pub use plan::{Arrangement, HangPlan, SpacingMode, Warning};
