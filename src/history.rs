use std::collections::VecDeque;
use std::sync::Arc;

use image::RgbaImage;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Immutable full-raster snapshot.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pixels: Arc<RgbaImage>,
}

impl HistoryEntry {
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn byte_len(&self) -> usize {
        self.pixels.as_raw().len()
    }

    /// Copies the snapshot into `target`. Returns `false` on a size mismatch,
    /// in which case `target` is left alone.
    pub fn restore_into(&self, target: &mut RgbaImage) -> bool {
        if target.dimensions() != self.pixels.dimensions() {
            return false;
        }
        target.copy_from_slice(self.pixels.as_raw());
        true
    }
}

/// Bounded undo/redo stack of full-raster snapshots.
///
/// The entry at `cursor` is the state currently shown. Memory use is at most
/// `capacity` snapshots; this is a hard limit, the oldest entry is dropped
/// when a commit would exceed it.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn seeded(raster: &RgbaImage, capacity: usize) -> Self {
        let mut stack = Self::new(capacity);
        stack.reset(raster);
        stack
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn memory_bytes(&self) -> usize {
        self.entries.iter().map(HistoryEntry::byte_len).sum()
    }

    /// Pushes a snapshot of `raster`, discarding any undone entries first.
    ///
    /// Returns `false` when no snapshot could be allocated even after
    /// evicting old entries; the stack is then left as it was apart from
    /// the truncation and eviction.
    pub fn commit(&mut self, raster: &RgbaImage) -> bool {
        self.commit_with(raster, try_snapshot)
    }

    fn commit_with(
        &mut self,
        raster: &RgbaImage,
        mut snapshot: impl FnMut(&RgbaImage) -> Option<RgbaImage>,
    ) -> bool {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        // Make room first so no more than `capacity` snapshots are ever alive.
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }

        let pixels = loop {
            if let Some(pixels) = snapshot(raster) {
                break pixels;
            }
            if self.entries.len() <= 1 {
                log::warn!(
                    "history snapshot of {}x{} could not be allocated; edit not recorded",
                    raster.width(),
                    raster.height()
                );
                self.cursor = self.entries.len().saturating_sub(1);
                return false;
            }
            self.entries.pop_front();
            log::warn!("evicted history entry under memory pressure");
        };

        self.entries.push_back(HistoryEntry {
            pixels: Arc::new(pixels),
        });
        self.cursor = self.entries.len() - 1;
        true
    }

    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn reset(&mut self, raster: &RgbaImage) {
        self.entries.clear();
        self.cursor = 0;
        self.commit(raster);
    }
}

fn try_snapshot(raster: &RgbaImage) -> Option<RgbaImage> {
    let source = raster.as_raw();
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(source.len()).ok()?;
    buffer.extend_from_slice(source);
    RgbaImage::from_raw(raster.width(), raster.height(), buffer)
}
