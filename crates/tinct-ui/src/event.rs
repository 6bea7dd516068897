/// Pointer gestures the preview canvas reacts to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Gesture {
    /// Primary button pressed.
    Press,
    /// Pointer moved while the primary button is held.
    Motion,
    /// Primary button released. Delivered even outside the canvas.
    Release,
    /// Primary button double-clicked.
    DoubleClick,
    /// Secondary button clicked.
    RightClick,
}

/// One gesture at canvas-relative pixel coordinates.
///
/// Coordinates may fall outside the canvas (negative or past the edge) while
/// a drag is in flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerEvent {
    pub gesture: Gesture,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[inline]
    pub const fn new(gesture: Gesture, x: f64, y: f64) -> Self {
        Self { gesture, x, y }
    }

    #[inline]
    pub const fn press(x: f64, y: f64) -> Self {
        Self::new(Gesture::Press, x, y)
    }

    #[inline]
    pub const fn motion(x: f64, y: f64) -> Self {
        Self::new(Gesture::Motion, x, y)
    }

    #[inline]
    pub const fn release(x: f64, y: f64) -> Self {
        Self::new(Gesture::Release, x, y)
    }

    #[inline]
    pub const fn double_click(x: f64, y: f64) -> Self {
        Self::new(Gesture::DoubleClick, x, y)
    }

    #[inline]
    pub const fn right_click(x: f64, y: f64) -> Self {
        Self::new(Gesture::RightClick, x, y)
    }
}
