pub mod config;
pub mod event;
pub mod layout;
pub mod scroll;

pub use config::{RegionConfig, ScrollbarConfig};
pub use event::{MouseButton, ScrollKey};
pub use layout::{Axis, Point, Rect, Size};
pub use scroll::{
    AxisScrollModel, InteractionState, ScrollEvent, ScrollPart, ScrollRegionCoordinator,
};
