//! The scroll bar widget and its interaction state machine.

use std::time::Duration;

use log::{debug, trace};

use crate::config::{RepeatConfig, ScrollBarOptions};
use crate::effect::{Direction, Effect, EventResult, Intent, Response};
use crate::event::{Event, Key, MouseButton};
use crate::hit::{self, Part};
use crate::layout::{PartLayout, Rect};
use crate::model::{Orientation, ValueModel};
use crate::render::{self, Frame};
use crate::session::{CursorIcon, CursorLease, LeaseId, PressSession, TimerId};

/// An interactive scroll bar.
///
/// `ScrollBar` turns pointer and keyboard input over its four parts into a
/// bounded value and step/page/thumb intents. It is a pure state machine:
/// the host feeds it [`Event`]s through [`dispatch`](Self::dispatch) and
/// carries out the returned [`Effect`]s (cursor override, pointer capture,
/// repeat timers, redraw requests, notifications).
///
/// The widget is *Idle* while no press session exists and *Pressed* while
/// one does. Every path out of *Pressed* (primary release, `Escape`,
/// [`detach`](Self::detach), orientation change) goes through the same
/// release, which cancels the repeat timer, restores the cursor and drops
/// pointer capture.
///
/// # Example
///
/// ```
/// use scrollbar::{arrange, Event, MouseButton, Rect, ScrollBar, ScrollBarOptions};
///
/// let mut bar = ScrollBar::new(ScrollBarOptions::new().max_value(100.0).page_size(10.0));
/// bar.attach();
/// let frame = bar.render();
/// bar.set_layout(arrange(Rect::new(0, 0, 1, 22), bar.orientation(), &frame.thumb));
///
/// // Press the increment button at the bottom.
/// let response = bar.dispatch(&Event::PointerDown { x: 0, y: 21, button: MouseButton::Left });
/// assert!(response.result.is_handled());
/// ```
#[derive(Debug)]
pub struct ScrollBar {
    model: ValueModel,
    orientation: Orientation,
    repeat_config: RepeatConfig,
    /// Part rectangles, published by the host after each layout.
    layout: PartLayout,
    /// Whether the widget is mounted and accepts presses.
    attached: bool,
    /// Present exactly while a press is captured.
    session: Option<PressSession>,
    /// Pending repeat timer; only ever set while `session` is.
    repeat: Option<TimerId>,
    /// Redraw requested and not yet rendered.
    dirty: bool,
    next_timer: u64,
    next_lease: u64,
}

impl Default for ScrollBar {
    fn default() -> Self {
        Self::new(ScrollBarOptions::default())
    }
}

impl ScrollBar {
    /// Create a scroll bar, clamping the options into range.
    pub fn new(options: ScrollBarOptions) -> Self {
        Self {
            model: ValueModel::new(options.value, options.max_value, options.page_size),
            orientation: options.orientation,
            repeat_config: options.repeat,
            layout: PartLayout::default(),
            attached: false,
            session: None,
            repeat: None,
            dirty: false,
            next_timer: 0,
            next_lease: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the orientation.
    ///
    /// Ends any active press session first, since its offsets were measured
    /// on the old axis.
    pub fn set_orientation(&mut self, orientation: Orientation) -> Vec<Effect> {
        if orientation == self.orientation {
            return Vec::new();
        }
        let mut effects = self.release_session();
        debug!("Scroll bar orientation {} -> {}", self.orientation, orientation);
        self.orientation = orientation;
        self.mark_dirty(&mut effects);
        effects
    }

    pub fn value(&self) -> f64 {
        self.model.value()
    }

    /// Set the value, clamped to `[0, max_value]`.
    pub fn set_value(&mut self, value: f64) -> Vec<Effect> {
        let changed = self.model.set_value(value);
        self.redraw_if(changed)
    }

    pub fn max_value(&self) -> f64 {
        self.model.max_value()
    }

    /// Set the maximum, clamped to `[0, inf)`. The value follows it down.
    pub fn set_max_value(&mut self, max_value: f64) -> Vec<Effect> {
        let changed = self.model.set_max_value(max_value);
        self.redraw_if(changed)
    }

    pub fn page_size(&self) -> f64 {
        self.model.page_size()
    }

    /// Set the page size, clamped to `[0, inf)`.
    pub fn set_page_size(&mut self, page_size: f64) -> Vec<Effect> {
        let changed = self.model.set_page_size(page_size);
        self.redraw_if(changed)
    }

    pub fn repeat_config(&self) -> RepeatConfig {
        self.repeat_config
    }

    /// Whether there is a range to scroll through.
    pub fn is_scrollable(&self) -> bool {
        self.model.is_scrollable()
    }

    // -------------------------------------------------------------------------
    // Parts
    // -------------------------------------------------------------------------

    /// Publish the part rectangles computed by the host layout.
    pub fn set_layout(&mut self, layout: PartLayout) {
        self.layout = layout;
    }

    pub fn layout(&self) -> &PartLayout {
        &self.layout
    }

    pub fn decrement_rect(&self) -> Option<Rect> {
        self.layout.rect(Part::Decrement)
    }

    pub fn increment_rect(&self) -> Option<Rect> {
        self.layout.rect(Part::Increment)
    }

    pub fn track_rect(&self) -> Option<Rect> {
        self.layout.rect(Part::Track)
    }

    pub fn thumb_rect(&self) -> Option<Rect> {
        self.layout.rect(Part::Thumb)
    }

    // -------------------------------------------------------------------------
    // Lifecycle and rendering
    // -------------------------------------------------------------------------

    /// Mount hook. Presses are only accepted while attached.
    pub fn attach(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.attached {
            self.attached = true;
            self.mark_dirty(&mut effects);
        }
        effects
    }

    /// Unmount hook. Ends any active press session.
    pub fn detach(&mut self) -> Vec<Effect> {
        self.attached = false;
        self.release_session()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a redraw was requested and not yet rendered.
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Run the render pass: project the current state and clear the
    /// pending redraw.
    pub fn render(&mut self) -> Frame {
        self.dirty = false;
        Frame {
            orientation: self.orientation,
            thumb: render::project(&self.model, self.orientation),
            active: self.active_part(),
        }
    }

    /// Part currently showing the active modifier.
    pub fn active_part(&self) -> Option<Part> {
        self.session
            .as_ref()
            .map(|session| session.part)
            .filter(|part| *part != Part::Track)
    }

    /// Whether a press session is active.
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// Part the active session started on.
    pub fn pressed_part(&self) -> Option<Part> {
        self.session.as_ref().map(|session| session.part)
    }

    /// Timer the widget is waiting on, if any.
    pub fn pending_repeat(&self) -> Option<TimerId> {
        self.repeat
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Feed one event through the state machine.
    pub fn dispatch(&mut self, event: &Event) -> Response {
        match *event {
            Event::PointerDown { x, y, button } => self.on_pointer_down(x, y, button),
            Event::PointerMove { x, y } => self.on_pointer_move(x, y),
            Event::PointerUp { button, .. } => self.on_pointer_up(button),
            Event::Key { key, .. } => self.on_key(key),
            Event::ContextMenu { .. } => self.on_context_menu(),
            Event::Repeat(timer) => self.on_repeat(timer),
        }
    }

    fn on_pointer_down(&mut self, x: u16, y: u16, button: MouseButton) -> Response {
        if !self.attached {
            return Response::ignored();
        }
        if self.session.is_some() {
            trace!("Press at ({}, {}) swallowed, session already active", x, y);
            return Response::new(EventResult::Consumed, Vec::new());
        }
        if !button.is_primary() {
            return Response::ignored();
        }
        if !self.model.is_scrollable() {
            return Response::ignored();
        }
        let Some(part) = hit::classify(&self.layout, x, y) else {
            return Response::ignored();
        };

        let mut effects = Vec::new();
        let (cursor, acquire) = CursorLease::acquire(self.take_lease_id(), CursorIcon::Default);
        effects.push(acquire);
        effects.push(Effect::CapturePointer);

        let along = self.orientation.along(x, y);
        let delta = match part {
            Part::Thumb => self
                .thumb_edge()
                .map(|edge| along.saturating_sub(edge)),
            _ => None,
        };

        debug!("Press session started on {:?} at ({}, {})", part, x, y);
        self.session = Some(PressSession {
            part,
            delta,
            cursor,
            last_x: x,
            last_y: y,
        });

        match part {
            Part::Thumb => {
                self.mark_dirty(&mut effects);
            }
            Part::Track => {
                let direction = self.page_direction(along);
                effects.push(self.schedule_repeat(self.repeat_config.initial_delay()));
                effects.push(Effect::Notify(Intent::PageRequested(direction)));
            }
            Part::Decrement => self.press_button(Direction::Decrement, &mut effects),
            Part::Increment => self.press_button(Direction::Increment, &mut effects),
        }

        Response::new(EventResult::StartDrag, effects)
    }

    fn on_pointer_move(&mut self, x: u16, y: u16) -> Response {
        let Some(session) = self.session.as_mut() else {
            return Response::ignored();
        };
        session.last_x = x;
        session.last_y = y;

        if !self.model.is_scrollable() || !session.is_dragging() {
            return Response::new(EventResult::Consumed, Vec::new());
        }
        let delta = session.delta.unwrap_or(0);

        let Some(thumb) = self.layout.thumb else {
            return Response::new(EventResult::Consumed, Vec::new());
        };
        let track = self.layout.track;
        let orientation = self.orientation;

        let offset = i32::from(orientation.along(x, y))
            - i32::from(track.start(orientation))
            - i32::from(delta);
        let travel = i32::from(track.length(orientation)) - i32::from(thumb.length(orientation));
        let value = self.model.value_for_offset(offset, travel);

        let mut effects = Vec::new();
        if self.model.set_value(value) {
            trace!("Thumb dragged to {}", self.model.value());
            self.mark_dirty(&mut effects);
            effects.push(Effect::Notify(Intent::ThumbMoved(self.model.value())));
        }
        Response::new(EventResult::Consumed, effects)
    }

    fn on_pointer_up(&mut self, button: MouseButton) -> Response {
        if self.session.is_none() {
            return Response::ignored();
        }
        if !button.is_primary() {
            return Response::new(EventResult::Consumed, Vec::new());
        }
        Response::new(EventResult::Consumed, self.release_session())
    }

    fn on_key(&mut self, key: Key) -> Response {
        if self.session.is_none() {
            return Response::ignored();
        }
        if key != Key::Escape {
            return Response::new(EventResult::Consumed, Vec::new());
        }
        debug!("Escape pressed, cancelling press session");
        Response::new(EventResult::Consumed, self.release_session())
    }

    fn on_context_menu(&self) -> Response {
        if self.session.is_none() {
            return Response::ignored();
        }
        Response::new(EventResult::Consumed, Vec::new())
    }

    fn on_repeat(&mut self, timer: TimerId) -> Response {
        if self.repeat != Some(timer) {
            trace!("Dropping stale {}", timer);
            return Response::ignored();
        }
        self.repeat = None;

        let Some((part, x, y)) = self
            .session
            .as_ref()
            .map(|session| (session.part, session.last_x, session.last_y))
        else {
            return Response::ignored();
        };
        if part == Part::Thumb {
            return Response::ignored();
        }
        if !self.model.is_scrollable() {
            trace!("Range no longer scrollable, repeat stopped");
            return Response::new(EventResult::Consumed, Vec::new());
        }

        let mut effects = vec![self.schedule_repeat(self.repeat_config.interval())];

        let held = hit::hit_part(&self.layout, part, x, y);
        match part {
            Part::Decrement if held => {
                effects.push(Effect::Notify(Intent::StepRequested(Direction::Decrement)));
            }
            Part::Increment if held => {
                effects.push(Effect::Notify(Intent::StepRequested(Direction::Increment)));
            }
            Part::Track if held && !hit::hit_part(&self.layout, Part::Thumb, x, y) => {
                let direction = self.page_direction(self.orientation.along(x, y));
                effects.push(Effect::Notify(Intent::PageRequested(direction)));
            }
            _ => {}
        }
        trace!("Repeat fired for {:?}", part);

        Response::new(EventResult::Consumed, effects)
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    /// End the press session, if any. Safe to call when idle.
    fn release_session(&mut self) -> Vec<Effect> {
        let Some(session) = self.session.take() else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        if let Some(timer) = self.repeat.take() {
            effects.push(Effect::CancelRepeat { timer });
        }
        effects.push(session.cursor.release());
        effects.push(Effect::ReleasePointer);
        self.mark_dirty(&mut effects);

        debug!("Press session on {:?} released", session.part);
        effects
    }

    /// Arrow button press: active modifier, first step, repeat armed.
    fn press_button(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        self.mark_dirty(effects);
        effects.push(self.schedule_repeat(self.repeat_config.initial_delay()));
        effects.push(Effect::Notify(Intent::StepRequested(direction)));
    }

    fn schedule_repeat(&mut self, delay: Duration) -> Effect {
        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        self.repeat = Some(timer);
        Effect::ScheduleRepeat { timer, delay }
    }

    fn take_lease_id(&mut self) -> LeaseId {
        let id = LeaseId(self.next_lease);
        self.next_lease += 1;
        id
    }

    /// Leading edge of the thumb along the axis.
    fn thumb_edge(&self) -> Option<u16> {
        self.layout
            .thumb
            .map(|thumb| thumb.start(self.orientation))
    }

    /// Track presses before the thumb page backwards, everything else forwards.
    fn page_direction(&self, along: u16) -> Direction {
        let edge = self
            .thumb_edge()
            .unwrap_or_else(|| self.layout.track.start(self.orientation));
        if along < edge {
            Direction::Decrement
        } else {
            Direction::Increment
        }
    }

    fn mark_dirty(&mut self, effects: &mut Vec<Effect>) {
        if !self.dirty {
            self.dirty = true;
            effects.push(Effect::RequestRedraw);
        }
    }

    fn redraw_if(&mut self, changed: bool) -> Vec<Effect> {
        let mut effects = Vec::new();
        if changed {
            self.mark_dirty(&mut effects);
        }
        effects
    }
}
