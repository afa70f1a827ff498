//! Drag gesture tracker.
//!
//! Turns a stream of [`PointerEvent`]s into start → move* → end/cancel
//! callbacks carrying cumulative displacement, velocity and the locked axis.
//! One tracker follows at most one gesture at a time; presses that arrive
//! while a gesture is active are ignored.

use crate::gesture_constants::{LOCK_THRESHOLD, MIN_OVERALL_ELAPSED_MS};
use crate::nodes::input::gestures::transport::InputTransport;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::{DragSample, DragVelocityTracker};
use prismatia_ui_graphics::Point;
use prismatia_ui_layout::Axis;

/// Snapshot of a tracked drag, reported on every move and at release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Displacement from the press position.
    pub delta_x: f32,
    pub delta_y: f32,
    /// Instantaneous velocity in px/ms.
    pub velocity_x: f32,
    pub velocity_y: f32,
    /// Total displacement divided by total elapsed time, in px/ms.
    pub overall_velocity_x: f32,
    pub overall_velocity_y: f32,
    /// Whether the gesture has committed to an axis.
    pub locked: bool,
    pub axis: Option<Axis>,
}

impl GestureState {
    /// True once the gesture committed to horizontal movement.
    pub fn is_locked_horizontal(&self) -> bool {
        self.locked && self.axis == Some(Axis::Horizontal)
    }
}

/// Receiver of tracker callbacks.
pub trait GestureHandler {
    /// Veto hook consulted before a press commits to a gesture.
    fn should_start(&mut self, _event: &PointerEvent) -> bool {
        true
    }

    fn on_start(&mut self, event: &PointerEvent);

    fn on_move(&mut self, state: &GestureState, event: &PointerEvent);

    fn on_end(&mut self, state: &GestureState, event: &PointerEvent);

    /// The gesture was aborted by the platform. No final state is reported.
    fn on_cancel(&mut self);
}

/// What the tracker did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureDisposition {
    /// The event did not belong to a gesture, or the handler vetoed it.
    Ignored,
    /// A gesture began. `capture` names the pointer the host should capture.
    Started { capture: Option<PointerId> },
    Moved,
    Ended,
    Cancelled,
}

#[derive(Debug)]
struct ActiveGesture {
    transport: InputTransport,
    pointer: PointerId,
    anchor: Point,
    start_time_ms: f64,
    velocity: DragVelocityTracker,
    axis: Option<Axis>,
}

impl ActiveGesture {
    fn begin(event: &PointerEvent) -> Self {
        Self {
            transport: event.transport,
            pointer: event.id,
            anchor: event.position,
            start_time_ms: event.time_ms,
            velocity: DragVelocityTracker::new(DragSample::new(event.time_ms, Point::ZERO)),
            axis: None,
        }
    }

    fn move_to(&mut self, position: Point, time_ms: f64) {
        let delta = position - self.anchor;
        if self.axis.is_none()
            && (delta.x.abs() >= LOCK_THRESHOLD || delta.y.abs() >= LOCK_THRESHOLD)
        {
            let axis = Axis::dominant(delta.x, delta.y);
            log::trace!("gesture locked on {:?}", axis);
            self.axis = Some(axis);
        }
        self.velocity.add_sample(DragSample::new(time_ms, delta));
    }

    fn state(&self) -> GestureState {
        let last = self.velocity.last_sample();
        let velocity = self.velocity.velocity();
        let elapsed = (last.time_ms - self.start_time_ms).max(MIN_OVERALL_ELAPSED_MS);
        GestureState {
            delta_x: last.delta.x,
            delta_y: last.delta.y,
            velocity_x: velocity.x,
            velocity_y: velocity.y,
            overall_velocity_x: (last.delta.x as f64 / elapsed) as f32,
            overall_velocity_y: (last.delta.y as f64 / elapsed) as f32,
            locked: self.axis.is_some(),
            axis: self.axis,
        }
    }
}

/// Pointer/touch drag tracker.
#[derive(Debug, Default)]
pub struct GestureTracker {
    active: Option<ActiveGesture>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Returns true while a gesture is being tracked.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Transport the active gesture is bound to.
    pub fn active_transport(&self) -> Option<InputTransport> {
        self.active.as_ref().map(|active| active.transport)
    }

    /// Feeds one event through the tracker, invoking `handler` as the
    /// gesture progresses.
    pub fn handle<H>(&mut self, event: &PointerEvent, handler: &mut H) -> GestureDisposition
    where
        H: GestureHandler + ?Sized,
    {
        match event.kind {
            PointerEventKind::Down => self.press(event, handler),
            PointerEventKind::Move => self.drag(event, handler),
            PointerEventKind::Up => self.release(event, handler),
            PointerEventKind::Cancel => self.cancel(event, handler),
        }
    }

    /// Drops any in-flight gesture without notifying a handler.
    pub fn reset(&mut self) {
        if self.active.take().is_some() {
            log::debug!("gesture tracker reset with an active gesture");
        }
    }

    fn press<H>(&mut self, event: &PointerEvent, handler: &mut H) -> GestureDisposition
    where
        H: GestureHandler + ?Sized,
    {
        if self.active.is_some() {
            return GestureDisposition::Ignored;
        }
        let stream = event.transport.stream();
        if !stream.accepts_press(event) || !handler.should_start(event) {
            return GestureDisposition::Ignored;
        }

        self.active = Some(ActiveGesture::begin(event));
        log::debug!(
            "gesture start via {:?} at ({}, {})",
            event.transport,
            event.position.x,
            event.position.y
        );
        handler.on_start(event);
        GestureDisposition::Started {
            capture: stream.captures_pointer().then_some(event.id),
        }
    }

    fn drag<H>(&mut self, event: &PointerEvent, handler: &mut H) -> GestureDisposition
    where
        H: GestureHandler + ?Sized,
    {
        let Some(active) = self.active.as_mut() else {
            return GestureDisposition::Ignored;
        };
        let stream = active.transport.stream();
        if !stream.owns(active.pointer, event) {
            return GestureDisposition::Ignored;
        }

        active.move_to(event.position, event.time_ms);
        let state = active.state();
        handler.on_move(&state, event);

        if stream.blocks_native_scroll() && state.locked && state.axis == Some(Axis::Vertical) {
            event.consume();
        }
        GestureDisposition::Moved
    }

    fn release<H>(&mut self, event: &PointerEvent, handler: &mut H) -> GestureDisposition
    where
        H: GestureHandler + ?Sized,
    {
        let owned = self
            .active
            .as_ref()
            .is_some_and(|active| active.transport.stream().owns(active.pointer, event));
        if !owned {
            return GestureDisposition::Ignored;
        }
        let Some(mut active) = self.active.take() else {
            return GestureDisposition::Ignored;
        };

        active.velocity.release(event.time_ms);
        let state = active.state();
        log::debug!(
            "gesture end: delta=({}, {}) velocity=({}, {})",
            state.delta_x,
            state.delta_y,
            state.velocity_x,
            state.velocity_y
        );
        handler.on_end(&state, event);
        GestureDisposition::Ended
    }

    fn cancel<H>(&mut self, event: &PointerEvent, handler: &mut H) -> GestureDisposition
    where
        H: GestureHandler + ?Sized,
    {
        let owned = self
            .active
            .as_ref()
            .is_some_and(|active| active.transport.stream().owns(active.pointer, event));
        if !owned {
            return GestureDisposition::Ignored;
        }
        self.active = None;
        log::debug!("gesture cancelled");
        handler.on_cancel();
        GestureDisposition::Cancelled
    }
}

#[cfg(test)]
#[path = "../../../tests/gesture_tracker_tests.rs"]
mod tests;
