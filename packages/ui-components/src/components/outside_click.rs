//! Detect pointer presses that land outside a region
//!
//! [`pointer_events`] listens to the whole window, not to a widget, so presses
//! anywhere are observed. Mouse presses carry no position in iced, so the last
//! cursor position is tracked by [`OutsideClick`].

use iced::{event, mouse, touch, Event, Point, Rectangle, Size, Subscription};

/// Pointer activity relevant to outside-click detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    /// Cursor left the window
    Left,
    /// Pointer went down; touch presses carry their own position
    Pressed(Option<Point>),
}

/// Window-wide pointer events
pub fn pointer_events() -> Subscription<PointerEvent> {
    event::listen_with(to_pointer_event)
}

fn to_pointer_event(event: Event, _status: event::Status) -> Option<PointerEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(PointerEvent::Moved(position)),
        Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::Left),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(PointerEvent::Pressed(None)),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerEvent::Pressed(Some(position)))
        }
        _ => None,
    }
}

/// Area owned by a panel, in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelRegion {
    bounds: Rectangle,
}

impl PanelRegion {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }

    /// Full-height strip anchored to the left edge of the window
    pub fn left_edge(width: f32) -> Self {
        Self::new(Rectangle::new(Point::ORIGIN, Size::new(width, f32::INFINITY)))
    }

    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }
}

/// Tracks the cursor and reports presses outside a region
#[derive(Debug, Clone, Default)]
pub struct OutsideClick {
    cursor: Option<Point>,
}

impl OutsideClick {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the last known cursor position
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Returns `true` when `event` is a press outside `region`.
    ///
    /// A press with no known position is never treated as outside.
    pub fn handle(&mut self, event: PointerEvent, region: &PanelRegion) -> bool {
        match event {
            PointerEvent::Moved(position) => {
                self.cursor = Some(position);
                false
            }
            PointerEvent::Left => {
                self.cursor = None;
                false
            }
            PointerEvent::Pressed(position) => position
                .or(self.cursor)
                .is_some_and(|point| !region.contains(point)),
        }
    }
}
