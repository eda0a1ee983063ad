// Deterministic binary-split treemap layout.
//
// The engine maps a sequence of non-negative weights onto a container
// rectangle, one axis-aligned rectangle per weight, with area proportional
// to weight. Data loading, color mapping, and rendering are the caller's
// concern; the engine carries each weight through alongside the geometry.

pub mod layout;

pub use layout::{compute_layout, LayoutConfig, LayoutRect};
