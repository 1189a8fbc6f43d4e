//! Drag state machine

use std::fmt;

use super::Axis;
use super::PointerEvent;
use super::PointerKind;
use super::Sibling;
use crate::error::DragError;

/// Where a dragged element would land if released now.
///
/// `before` is the sibling that would precede the dropped element and `after`
/// the sibling that would follow it. Either may be missing at the ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropTarget<K> {
    pub after: Option<K>,
    pub before: Option<K>,
}

impl<K> DropTarget<K> {
    /// Returns `true` when neither neighbour is known.
    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}

/// Callbacks invoked by a [`DragRecognizer`].
pub trait DragHandler<K> {
    /// A drag began on `dragged`.
    fn on_drag_start(&mut self, _dragged: &K) {}

    /// The pointer moved during a drag. Called for every move event.
    fn on_dragging(&mut self, _dragged: &K, _target: &DropTarget<K>) {}

    /// The pointer was released.
    fn on_drop(&mut self, dragged: &K, target: &DropTarget<K>);
}

type StartFn<K> = Box<dyn FnMut(&K)>;
type TargetFn<K> = Box<dyn FnMut(&K, &DropTarget<K>)>;

/// A [`DragHandler`] built from closures.
///
/// # Example
///
/// ```
/// use timegrid_lib::drag::DragCallbacks;
///
/// let callbacks = DragCallbacks::<String>::new()
///     .on_drop(|dragged, target| println!("{dragged} -> {target:?}"));
/// ```
pub struct DragCallbacks<K> {
    on_drag_start: Option<StartFn<K>>,
    on_dragging: Option<TargetFn<K>>,
    on_drop: Option<TargetFn<K>>,
}

impl<K> DragCallbacks<K> {
    pub fn new() -> Self {
        Self {
            on_drag_start: None,
            on_dragging: None,
            on_drop: None,
        }
    }

    pub fn on_drag_start(mut self, f: impl FnMut(&K) + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    pub fn on_dragging(mut self, f: impl FnMut(&K, &DropTarget<K>) + 'static) -> Self {
        self.on_dragging = Some(Box::new(f));
        self
    }

    pub fn on_drop(mut self, f: impl FnMut(&K, &DropTarget<K>) + 'static) -> Self {
        self.on_drop = Some(Box::new(f));
        self
    }
}

impl<K> Default for DragCallbacks<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for DragCallbacks<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragCallbacks")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_dragging", &self.on_dragging.is_some())
            .field("on_drop", &self.on_drop.is_some())
            .finish()
    }
}

impl<K> DragHandler<K> for DragCallbacks<K> {
    fn on_drag_start(&mut self, dragged: &K) {
        if let Some(f) = self.on_drag_start.as_mut() {
            f(dragged);
        }
    }

    fn on_dragging(&mut self, dragged: &K, target: &DropTarget<K>) {
        if let Some(f) = self.on_dragging.as_mut() {
            f(dragged, target);
        }
    }

    fn on_drop(&mut self, dragged: &K, target: &DropTarget<K>) {
        if let Some(f) = self.on_drop.as_mut() {
            f(dragged, target);
        }
    }
}

/// One active drag: the dragged element and the siblings as they were when
/// the drag started. Later layout changes are not seen.
#[derive(Debug, Clone)]
pub struct DragSession<K> {
    dragged: K,
    siblings: Vec<Sibling<K>>,
}

impl<K: Clone> DragSession<K> {
    pub fn new(dragged: K, siblings: Vec<Sibling<K>>) -> Result<Self, DragError> {
        if siblings.is_empty() {
            return Err(DragError::NoSiblings);
        }
        Ok(Self { dragged, siblings })
    }

    pub fn dragged(&self) -> &K {
        &self.dragged
    }

    pub fn siblings(&self) -> &[Sibling<K>] {
        &self.siblings
    }

    /// Drop target for a pointer at `(x, y)`.
    ///
    /// The closest sibling is the one whose center along `axis` is nearest to
    /// the pointer; the first one wins ties. A pointer before that center
    /// drops between it and its previous sibling, otherwise between it and
    /// its next sibling.
    pub fn drop_target(&self, axis: Axis, x: u16, y: u16) -> DropTarget<K> {
        let position = axis.position(x, y);

        let mut closest = 0;
        let mut closest_distance = f32::INFINITY;
        for (i, sibling) in self.siblings.iter().enumerate() {
            let distance = (position - axis.center(&sibling.rect)).abs();
            if distance < closest_distance {
                closest = i;
                closest_distance = distance;
            }
        }

        let key = |i: usize| self.siblings.get(i).map(|s| s.key.clone());
        if position < axis.center(&self.siblings[closest].rect) {
            DropTarget {
                after: key(closest),
                before: closest.checked_sub(1).and_then(key),
            }
        } else {
            DropTarget {
                before: key(closest),
                after: key(closest + 1),
            }
        }
    }
}

/// Tracks drags over one collection of siblings laid out along an axis.
///
/// Idle until [`start`](Self::start) (or a [`press`](Self::press) that hits a
/// sibling); then every move event reports the current drop target and the
/// release event reports the final one and returns to idle. A drag ends only
/// on release.
pub struct DragRecognizer<K> {
    axis: Axis,
    handler: Box<dyn DragHandler<K>>,
    session: Option<DragSession<K>>,
}

impl<K: Clone> DragRecognizer<K> {
    pub fn new(axis: Axis, handler: impl DragHandler<K> + 'static) -> Self {
        Self {
            axis,
            handler: Box::new(handler),
            session: None,
        }
    }

    /// Recognizer for stacked rows.
    pub fn rows(handler: impl DragHandler<K> + 'static) -> Self {
        Self::new(Axis::Vertical, handler)
    }

    /// Recognizer for side-by-side columns.
    pub fn columns(handler: impl DragHandler<K> + 'static) -> Self {
        Self::new(Axis::Horizontal, handler)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// Starts dragging `dragged` over `siblings`.
    pub fn start(&mut self, dragged: K, siblings: Vec<Sibling<K>>) -> Result<(), DragError> {
        if self.session.is_some() {
            return Err(DragError::SessionActive);
        }
        let session = DragSession::new(dragged, siblings)?;
        log::debug!(
            "[DragRecognizer::start] axis={:?} siblings={}",
            self.axis,
            session.siblings.len()
        );
        self.handler.on_drag_start(&session.dragged);
        self.session = Some(session);
        Ok(())
    }

    /// Starts a drag on the sibling under `(x, y)`, if any.
    ///
    /// Returns `Ok(false)` when the press hit no sibling.
    pub fn press(&mut self, x: u16, y: u16, siblings: Vec<Sibling<K>>) -> Result<bool, DragError> {
        let Some(hit) = siblings.iter().find(|s| s.rect.contains(x, y)) else {
            return Ok(false);
        };
        let dragged = hit.key.clone();
        self.start(dragged, siblings)?;
        Ok(true)
    }

    /// Feeds a pointer event to the active drag.
    ///
    /// Returns the drop target for move and release events while dragging,
    /// `None` otherwise. Press events are ignored here; use
    /// [`press`](Self::press).
    pub fn handle(&mut self, event: &PointerEvent) -> Option<DropTarget<K>> {
        match event.kind {
            PointerKind::Press => None,
            PointerKind::Move => {
                let session = self.session.as_ref()?;
                let target = session.drop_target(self.axis, event.x, event.y);
                self.handler.on_dragging(&session.dragged, &target);
                Some(target)
            }
            PointerKind::Release => {
                let session = self.session.take()?;
                let target = session.drop_target(self.axis, event.x, event.y);
                log::debug!("[DragRecognizer::handle] drop at ({}, {})", event.x, event.y);
                self.handler.on_drop(&session.dragged, &target);
                Some(target)
            }
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for DragRecognizer<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragRecognizer")
            .field("axis", &self.axis)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::Rect;

    fn columns() -> Vec<Sibling<&'static str>> {
        vec![
            Sibling::new("a", Rect::new(50, 0, 100, 1)),
            Sibling::new("b", Rect::new(150, 0, 100, 1)),
            Sibling::new("c", Rect::new(250, 0, 100, 1)),
        ]
    }

    #[test]
    fn test_drop_target_after_center() {
        let session = DragSession::new("c", columns()).unwrap();
        let target = session.drop_target(Axis::Horizontal, 140, 0);
        assert_eq!(target.before, Some("a"));
        assert_eq!(target.after, Some("b"));
    }

    #[test]
    fn test_drop_target_before_center() {
        let session = DragSession::new("a", columns()).unwrap();
        let target = session.drop_target(Axis::Horizontal, 190, 0);
        assert_eq!(target.after, Some("b"));
        assert_eq!(target.before, Some("a"));
    }

    #[test]
    fn test_drop_target_ends() {
        let session = DragSession::new("b", columns()).unwrap();
        let first = session.drop_target(Axis::Horizontal, 0, 0);
        assert_eq!(first, DropTarget { after: Some("a"), before: None });
        let last = session.drop_target(Axis::Horizontal, 400, 0);
        assert_eq!(last, DropTarget { after: None, before: Some("c") });
    }

    #[test]
    fn test_tie_goes_to_first_sibling() {
        let session = DragSession::new("a", columns()).unwrap();
        // 150 is 50 away from both "a" (100) and "b" (200).
        let target = session.drop_target(Axis::Horizontal, 150, 0);
        assert_eq!(target.before, Some("a"));
        assert_eq!(target.after, Some("b"));
    }

    #[test]
    fn test_empty_siblings_rejected() {
        assert_eq!(
            DragSession::<u8>::new(0, Vec::new()).unwrap_err(),
            DragError::NoSiblings
        );
    }
}
