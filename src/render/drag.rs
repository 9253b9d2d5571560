//! Pointer input and drag tracking.

/// Which mouse button a pointer-down used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayButton {
    Toggle,
    Pin,
    Close,
}

/// Element under the pointer when it went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Header,
    MinimizedIndicator,
    Button(OverlayButton),
}

/// An in-progress drag, anchored at the pointer position minus the offset at grab time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    origin_x: f64,
    origin_y: f64,
}

impl DragSession {
    /// Starts a drag if the target accepts one. The header drags with any
    /// button, the minimized indicator only with the primary one, and action
    /// buttons never start a drag.
    pub(crate) fn start(
        target: PointerTarget,
        button: MouseButton,
        pointer: (f64, f64),
        offset: (f64, f64),
    ) -> Option<Self> {
        let accepted = match target {
            PointerTarget::Header => true,
            PointerTarget::MinimizedIndicator => button == MouseButton::Primary,
            PointerTarget::Button(_) => false,
        };
        accepted.then(|| DragSession {
            origin_x: pointer.0 - offset.0,
            origin_y: pointer.1 - offset.1,
        })
    }

    /// Offset that keeps the grab point under the pointer.
    pub(crate) fn offset_at(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.origin_x, y - self.origin_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_accepts_any_button() {
        for button in [MouseButton::Primary, MouseButton::Middle, MouseButton::Secondary] {
            assert!(DragSession::start(PointerTarget::Header, button, (0.0, 0.0), (0.0, 0.0)).is_some());
        }
    }

    #[test]
    fn test_indicator_requires_primary_button() {
        let start = |button| {
            DragSession::start(PointerTarget::MinimizedIndicator, button, (5.0, 5.0), (0.0, 0.0))
        };
        assert!(start(MouseButton::Primary).is_some());
        assert!(start(MouseButton::Secondary).is_none());
        assert!(start(MouseButton::Middle).is_none());
    }

    #[test]
    fn test_buttons_never_drag() {
        for button in [OverlayButton::Toggle, OverlayButton::Pin, OverlayButton::Close] {
            assert!(DragSession::start(
                PointerTarget::Button(button),
                MouseButton::Primary,
                (0.0, 0.0),
                (0.0, 0.0)
            )
            .is_none());
        }
    }

    #[test]
    fn test_offset_follows_pointer_from_existing_offset() {
        let drag = DragSession::start(
            PointerTarget::Header,
            MouseButton::Primary,
            (200.0, 50.0),
            (-10.0, 5.0),
        )
        .unwrap();
        assert_eq!(drag.offset_at(200.0, 50.0), (-10.0, 5.0));
        assert_eq!(drag.offset_at(150.0, 80.0), (-60.0, 35.0));
    }
}
