//! Scrollbar geometry and interaction engine.
//!
//! - [`AxisScrollModel`] owns one axis: value range, track/thumb/button
//!   geometry and the hover/press/drag state machine
//! - [`ScrollRegionCoordinator`] owns both axes, resolves their coupled
//!   sizing and routes host input to them
//! - [`ScrollEvent`] notifications are queued and drained by the host

mod axis;
mod notify;
mod region;

pub use axis::{AxisScrollModel, InteractionState, ScrollPart};
pub use notify::{EventQueue, ScrollEvent};
pub use region::{ScrollRegionCoordinator, MAX_RECONVERGE_PASSES};
