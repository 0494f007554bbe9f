use crate::surface::Surface;

use super::{Shape, ShapeId, ShapeListError};

#[derive(Debug)]
struct Entry {
    id: ShapeId,
    shape: Shape,
}

/// Z-ordered scene: index 0 is the farthest back, the last index is frontmost.
///
/// The list owns its shapes and hands out [`ShapeId`] handles. Sequence
/// position is the only z-order state; there is no separate layer attribute.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - handle lookups and re-layering are O(n) (linear scan by identity)
/// - `shape_at()` stops at the first (frontmost) hit
///
/// Handles are process-unique, so a handle from another list is always
/// reported as [`ShapeListError::NotFound`].
#[derive(Debug, Default)]
pub struct ShapeList {
    entries: Vec<Entry>,
}

impl ShapeList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ── membership ────────────────────────────────────────────────────────

    /// Adds `shape` in front of everything else and returns its handle.
    pub fn push(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId::mint();
        self.entries.push(Entry { id, shape });
        id
    }

    /// Inserts `shape` at z-position `index`, shifting later shapes forward.
    ///
    /// `index` past the end is clamped, which makes the shape frontmost.
    pub fn insert(&mut self, index: usize, shape: Shape) -> ShapeId {
        let id = ShapeId::mint();
        let index = index.min(self.entries.len());
        self.entries.insert(index, Entry { id, shape });
        id
    }

    /// Removes the shape and hands ownership back to the caller.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, ShapeListError> {
        let i = self.position(id)?;
        log::debug!("ShapeList: removing {id} from index {i}");
        Ok(self.entries.remove(i).shape)
    }

    /// Removes every shape. Handles minted so far stay retired.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains_id(&self, id: ShapeId) -> bool {
        self.index_of(id).is_some()
    }

    /// Current z-position of `id`, 0 being the back.
    #[inline]
    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.shape)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.entries.iter_mut().find(|e| e.id == id).map(|e| &mut e.shape)
    }

    /// Iterates shapes in paint order (back-to-front).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ShapeId, &Shape)> + '_ {
        self.entries.iter().map(|e| (e.id, &e.shape))
    }

    /// Handles in paint order (back-to-front).
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = ShapeId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    // ── re-layering ───────────────────────────────────────────────────────

    /// Moves `id` to the front. Other shapes keep their relative order.
    pub fn move_to_front(&mut self, id: ShapeId) -> Result<(), ShapeListError> {
        let i = self.position(id)?;
        self.entries[i..].rotate_left(1);
        log::debug!("ShapeList: {id} {i} -> front");
        Ok(())
    }

    /// Moves `id` to the back. Other shapes keep their relative order.
    pub fn move_to_back(&mut self, id: ShapeId) -> Result<(), ShapeListError> {
        let i = self.position(id)?;
        self.entries[..=i].rotate_right(1);
        log::debug!("ShapeList: {id} {i} -> back");
        Ok(())
    }

    /// Swaps `id` with the shape directly in front of it.
    ///
    /// No-op if `id` is already frontmost.
    pub fn move_forward(&mut self, id: ShapeId) -> Result<(), ShapeListError> {
        let i = self.position(id)?;
        if i + 1 < self.entries.len() {
            self.entries.swap(i, i + 1);
            log::debug!("ShapeList: {id} {i} -> {}", i + 1);
        }
        Ok(())
    }

    /// Swaps `id` with the shape directly behind it.
    ///
    /// No-op if `id` is already backmost.
    pub fn move_backward(&mut self, id: ShapeId) -> Result<(), ShapeListError> {
        let i = self.position(id)?;
        if i > 0 {
            self.entries.swap(i, i - 1);
            log::debug!("ShapeList: {id} {i} -> {}", i - 1);
        }
        Ok(())
    }

    // ── drawing / picking ─────────────────────────────────────────────────

    /// Painter's algorithm: draws every shape once, back to front.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for e in &self.entries {
            log::trace!("ShapeList: draw {}", e.id);
            e.shape.draw(surface);
        }
    }

    /// Topmost shape containing `(x, y)`, or `None` if nothing is hit.
    pub fn shape_at(&self, x: f64, y: f64) -> Option<ShapeId> {
        self.shapes_at(x, y).next()
    }

    /// Every shape containing `(x, y)`, frontmost first.
    pub fn shapes_at(&self, x: f64, y: f64) -> impl Iterator<Item = ShapeId> + '_ {
        self.entries
            .iter()
            .rev()
            .filter(move |e| e.shape.contains(x, y))
            .map(|e| e.id)
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn position(&self, id: ShapeId) -> Result<usize, ShapeListError> {
        self.index_of(id).ok_or(ShapeListError::NotFound(id))
    }
}
