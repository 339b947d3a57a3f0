//! Outbound notifications from the scroll engine to its host.

use crate::layout::Axis;

/// Notification raised by an axis model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// The scroll value moved; the host should reposition its content.
    ValueChanged { axis: Axis, old: i32, new: i32 },
    /// Scrollbar visuals changed (hover, press, thumb position).
    RedrawNeeded { axis: Axis },
}

impl ScrollEvent {
    pub fn axis(&self) -> Axis {
        match self {
            ScrollEvent::ValueChanged { axis, .. } | ScrollEvent::RedrawNeeded { axis } => *axis,
        }
    }
}

/// Pending notifications, drained by the host after each input event.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<ScrollEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: ScrollEvent) {
        // Back-to-back redraw requests carry no extra information.
        if matches!(event, ScrollEvent::RedrawNeeded { .. }) && self.events.last() == Some(&event) {
            return;
        }
        self.events.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ScrollEvent> + '_ {
        self.events.drain(..)
    }
}
