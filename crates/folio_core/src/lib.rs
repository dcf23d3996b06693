//! Folio Core
//!
//! Foundational primitives shared by the Folio portfolio crates:
//!
//! - **Geometry**: points, sizes, rects, vectors and colors in logical pixels
//! - **Value cells**: single-threaded observable values with last-write-wins
//!   semantics, used for per-region pointer tracking
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Point, Rect};
//!
//! let card = Rect::new(0.0, 0.0, 200.0, 100.0);
//! assert_eq!(card.center(), Point::new(100.0, 50.0));
//! ```

pub mod cell;
pub mod geometry;

pub use cell::{SubscriptionId, ValueCell};
pub use geometry::{finite_or_zero, trim_float, Color, Point, Rect, Size, Vec2, Vec3};
