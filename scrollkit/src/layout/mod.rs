mod rect;

pub use rect::{Axis, Point, Rect, Size};
