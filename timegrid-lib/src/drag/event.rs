//! Pointer input

use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button or finger down.
    Press,
    /// Movement while pressed.
    Move,
    /// Button or finger up.
    Release,
}

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    pub fn press(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Press,
            x,
            y,
        }
    }

    pub fn moved(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub fn release(x: u16, y: u16) -> Self {
        Self {
            kind: PointerKind::Release,
            x,
            y,
        }
    }

    /// Converts a left-button terminal mouse event. Other buttons, scrolling
    /// and plain movement without a button yield `None`.
    pub fn from_mouse(event: &MouseEvent) -> Option<Self> {
        let kind = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
            MouseEventKind::Drag(MouseButton::Left) => PointerKind::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
            _ => return None,
        };
        Some(Self {
            kind,
            x: event.column,
            y: event.row,
        })
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_from_mouse() {
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerEvent::press(7, 3))
        );
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left))),
            Some(PointerEvent::moved(7, 3))
        );
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Up(MouseButton::Left))),
            Some(PointerEvent::release(7, 3))
        );
        assert_eq!(
            PointerEvent::from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(PointerEvent::from_mouse(&mouse(MouseEventKind::Moved)), None);
    }
}
