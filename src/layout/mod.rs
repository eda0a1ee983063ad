pub mod bisect;

pub use bisect::{compute_layout, LayoutConfig, LayoutRect};
