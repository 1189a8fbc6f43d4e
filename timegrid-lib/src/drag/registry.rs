//! Per-root draggable registrations

use std::collections::HashMap;
use std::fmt;

use super::DragHandler;
use super::DragRecognizer;
use super::PointerEvent;
use super::Sibling;
use crate::error::DragError;

/// Draggable collections keyed by their root element.
///
/// Each root owns its own recognizer and session, so drags on different
/// roots are tracked independently; a second drag on the same root is
/// rejected with [`DragError::SessionActive`]. Call
/// [`destroy_draggable`](Self::destroy_draggable) when a root goes away.
pub struct Draggables<K> {
    roots: HashMap<String, DragRecognizer<K>>,
}

impl<K: Clone> Draggables<K> {
    pub fn new() -> Self {
        Self {
            roots: HashMap::new(),
        }
    }

    /// Makes the rows under `root` draggable. Replaces any previous
    /// registration for the root.
    pub fn make_row_draggable(
        &mut self,
        root: impl Into<String>,
        handler: impl DragHandler<K> + 'static,
    ) {
        self.register(root.into(), DragRecognizer::rows(handler));
    }

    /// Makes the columns under `root` draggable. Replaces any previous
    /// registration for the root.
    pub fn make_column_draggable(
        &mut self,
        root: impl Into<String>,
        handler: impl DragHandler<K> + 'static,
    ) {
        self.register(root.into(), DragRecognizer::columns(handler));
    }

    fn register(&mut self, root: String, recognizer: DragRecognizer<K>) {
        log::debug!("[Draggables::register] root={} axis={:?}", root, recognizer.axis());
        self.roots.insert(root, recognizer);
    }

    /// Removes the registration for `root`, abandoning any drag in progress.
    /// Returns `false` if the root was not registered.
    pub fn destroy_draggable(&mut self, root: &str) -> bool {
        self.roots.remove(root).is_some()
    }

    pub fn is_registered(&self, root: &str) -> bool {
        self.roots.contains_key(root)
    }

    /// Returns `true` if `root` has a drag in progress.
    pub fn is_dragging(&self, root: &str) -> bool {
        self.roots.get(root).is_some_and(|r| r.is_dragging())
    }

    /// Starts dragging `dragged` within `root`.
    pub fn start(&mut self, root: &str, dragged: K, siblings: Vec<Sibling<K>>) -> Result<(), DragError> {
        self.recognizer(root)?.start(dragged, siblings)
    }

    /// Starts a drag within `root` on the sibling under `(x, y)`, if any.
    pub fn press(
        &mut self,
        root: &str,
        x: u16,
        y: u16,
        siblings: Vec<Sibling<K>>,
    ) -> Result<bool, DragError> {
        self.recognizer(root)?.press(x, y, siblings)
    }

    /// Delivers a move or release event to every root with a drag in
    /// progress.
    pub fn dispatch(&mut self, event: &PointerEvent) {
        for recognizer in self.roots.values_mut().filter(|r| r.is_dragging()) {
            recognizer.handle(event);
        }
    }

    fn recognizer(&mut self, root: &str) -> Result<&mut DragRecognizer<K>, DragError> {
        self.roots
            .get_mut(root)
            .ok_or_else(|| DragError::unknown_root(root))
    }
}

impl<K: Clone> Default for Draggables<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Draggables<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draggables")
            .field("roots", &self.roots)
            .finish()
    }
}
