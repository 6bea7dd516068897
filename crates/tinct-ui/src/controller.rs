//! Pointer gesture state machine for the preview canvas.
//!
//! The controller owns the drag state and the canvas geometry, and borrows the
//! spec only for the duration of one event. Which handler runs is decided by a
//! static table keyed on the gesture and on what the pointer is over.

use tinct_engine::gradient::{GradientSpec, MAX_STOPS};

use crate::canvas::CanvasGeometry;
use crate::event::{Gesture, PointerEvent};
use crate::status::StatusMessage;

/// Drag state of the canvas.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// A stop is following the pointer. `grab_offset` is the horizontal
    /// distance in pixels between the press point and the marker center, so
    /// the marker does not jump under the cursor.
    DraggingStop { index: usize, grab_offset: f64 },
}

/// What the shell should do after an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub redraw_preview: bool,
    pub refresh_labels: bool,
    /// Open the color editor for this stop.
    pub open_editor: Option<usize>,
    pub status: Option<StatusMessage>,
}

impl Response {
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Only the preview changed.
    #[inline]
    pub fn redraw() -> Self {
        Self { redraw_preview: true, ..Self::default() }
    }

    /// Stops changed: preview and labels both need a refresh.
    #[inline]
    pub fn changed() -> Self {
        Self { redraw_preview: true, refresh_labels: true, ..Self::default() }
    }

    #[inline]
    pub fn labels() -> Self {
        Self { refresh_labels: true, ..Self::default() }
    }

    pub fn with_status(mut self, status: StatusMessage) -> Self {
        self.status = Some(status);
        self
    }

    pub fn status(status: StatusMessage) -> Self {
        Self::none().with_status(status)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::none()
    }
}

/// What a gesture landed on.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Target {
    Stop(usize),
    Canvas,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum On {
    Stop,
    Canvas,
    Anywhere,
}

impl On {
    fn matches(self, target: Target) -> bool {
        match (self, target) {
            (On::Anywhere, _) => true,
            (On::Stop, Target::Stop(_)) => true,
            (On::Canvas, Target::Canvas) => true,
            _ => false,
        }
    }
}

type Handler = fn(&mut Controller, &mut GradientSpec, &PointerEvent, Target) -> Response;

struct Binding {
    gesture: Gesture,
    on: On,
    handler: Handler,
}

// First match wins.
const BINDINGS: &[Binding] = &[
    Binding { gesture: Gesture::Press, on: On::Stop, handler: Controller::begin_drag },
    Binding { gesture: Gesture::Motion, on: On::Anywhere, handler: Controller::drag_to },
    Binding { gesture: Gesture::Release, on: On::Anywhere, handler: Controller::end_drag },
    Binding { gesture: Gesture::DoubleClick, on: On::Stop, handler: Controller::open_color_editor },
    Binding { gesture: Gesture::DoubleClick, on: On::Canvas, handler: Controller::add_stop },
    Binding { gesture: Gesture::RightClick, on: On::Stop, handler: Controller::remove_stop },
];

/// Canvas interaction controller.
#[derive(Debug, Clone)]
pub struct Controller {
    canvas: CanvasGeometry,
    drag: DragState,
    /// Double-clicks within this many pixels of a marker column add nothing.
    add_guard: f64,
}

impl Controller {
    pub fn new(canvas: CanvasGeometry, add_guard: f64) -> Self {
        Self { canvas, drag: DragState::Idle, add_guard }
    }

    #[inline]
    pub fn canvas(&self) -> CanvasGeometry {
        self.canvas
    }

    pub fn set_canvas(&mut self, canvas: CanvasGeometry) {
        self.canvas = canvas;
    }

    #[inline]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Abandons a drag in flight, e.g. when the stops are replaced wholesale.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Resolves the target of `event` and runs the matching handler.
    pub fn handle(&mut self, spec: &mut GradientSpec, event: PointerEvent) -> Response {
        let target = self.resolve(spec, &event);
        match BINDINGS
            .iter()
            .find(|b| b.gesture == event.gesture && b.on.matches(target))
        {
            Some(binding) => (binding.handler)(self, spec, &event, target),
            None => Response::none(),
        }
    }

    fn resolve(&self, spec: &GradientSpec, event: &PointerEvent) -> Target {
        match self.canvas.hit_test(spec.stops(), event.x, event.y) {
            Some(index) => Target::Stop(index),
            None => Target::Canvas,
        }
    }

    // ── handlers ──────────────────────────────────────────────────────────

    fn begin_drag(&mut self, spec: &mut GradientSpec, event: &PointerEvent, target: Target) -> Response {
        let Target::Stop(index) = target else {
            return Response::none();
        };
        let Some(stop) = spec.stops().get(index) else {
            return Response::none();
        };
        let grab_offset = event.x - self.canvas.stop_x(stop.position);
        self.drag = DragState::DraggingStop { index, grab_offset };
        log::debug!("drag start on stop {index} (offset {grab_offset:.1}px)");
        Response::none()
    }

    fn drag_to(&mut self, spec: &mut GradientSpec, event: &PointerEvent, _: Target) -> Response {
        let DragState::DraggingStop { index, grab_offset } = self.drag else {
            return Response::none();
        };
        let requested = self.canvas.fraction_at(event.x - grab_offset);
        match spec.move_stop(index, requested) {
            Ok(_) => Response::redraw(),
            Err(e) => {
                log::warn!("dropping drag: {e}");
                self.drag = DragState::Idle;
                Response::none()
            }
        }
    }

    fn end_drag(&mut self, _: &mut GradientSpec, _: &PointerEvent, _: Target) -> Response {
        match std::mem::take(&mut self.drag) {
            DragState::DraggingStop { index, .. } => {
                log::debug!("drag end on stop {index}");
                Response::labels()
            }
            DragState::Idle => Response::none(),
        }
    }

    fn open_color_editor(&mut self, _: &mut GradientSpec, _: &PointerEvent, target: Target) -> Response {
        match target {
            Target::Stop(index) => Response { open_editor: Some(index), ..Response::none() },
            Target::Canvas => Response::none(),
        }
    }

    fn add_stop(&mut self, spec: &mut GradientSpec, event: &PointerEvent, _: Target) -> Response {
        if spec.len() < MAX_STOPS && self.canvas.near_marker(spec.stops(), event.x, self.add_guard) {
            return Response::none();
        }
        match spec.add_stop_at(self.canvas.fraction_at(event.x)) {
            Ok(index) => {
                let color = spec.stops()[index].color;
                Response::changed().with_status(StatusMessage::success(format!(
                    "Added new color stop: {color}!"
                )))
            }
            Err(e) => Response::status(StatusMessage::from_error(&e)),
        }
    }

    fn remove_stop(&mut self, spec: &mut GradientSpec, _: &PointerEvent, target: Target) -> Response {
        let Target::Stop(index) = target else {
            return Response::none();
        };
        match spec.remove_stop(index) {
            Ok(_) => {
                self.drag = DragState::Idle;
                Response::changed()
                    .with_status(StatusMessage::success(format!("Removed color stop {}!", index + 1)))
            }
            Err(e) => Response::status(StatusMessage::from_error(&e)),
        }
    }
}
