use super::snapshot::Snapshot;
use crate::core::store::PixelStore;
use std::collections::VecDeque;
use tracing::debug;

/// Book-keeping for the action between `begin_action` and `finalize_action`,
/// enough to take the push back out if the action changed nothing.
struct PendingAction {
    pushed: bool,
    evicted: Option<Snapshot>,
    stashed_redo: VecDeque<Snapshot>,
}

pub struct HistoryManager {
    pub undo_stack: VecDeque<Snapshot>,
    pub redo_stack: VecDeque<Snapshot>,
    pub max_steps: usize,
    pending: Option<PendingAction>,
}

impl HistoryManager {
    pub fn new(max_steps: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_steps: max_steps.max(1),
            pending: None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.pending.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn begin_action(&mut self, store: &PixelStore) {
        if self.pending.is_some() {
            return;
        }
        let (pushed, evicted) = self.push_undo(Snapshot::capture(store));
        let stashed_redo = std::mem::take(&mut self.redo_stack);
        debug!(pushed, depth = self.undo_stack.len(), "history: begin action");
        self.pending = Some(PendingAction { pushed, evicted, stashed_redo });
    }

    pub fn finalize_action(&mut self, store: &PixelStore) {
        let Some(pending) = self.pending.take() else { return };
        let unchanged = self.undo_stack.back().is_some_and(|top| top.matches(store));
        if !unchanged {
            debug!(depth = self.undo_stack.len(), "history: finalize action");
            return;
        }

        if pending.pushed {
            self.undo_stack.pop_back();
            if let Some(evicted) = pending.evicted {
                self.undo_stack.push_front(evicted);
            }
        }
        self.redo_stack = pending.stashed_redo;
        debug!("history: no-op action coalesced");
    }

    /// One-shot snapshot of the current state, for changes made outside a
    /// begin/finalize bracket. Returns whether anything was pushed.
    pub fn record_snapshot(&mut self, store: &PixelStore) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let (pushed, _) = self.push_undo(Snapshot::capture(store));
        if pushed {
            self.redo_stack.clear();
        }
        pushed
    }

    pub fn undo(&mut self, store: &mut PixelStore) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let Some(snapshot) = self.undo_stack.pop_back() else { return false };
        Self::push_bounded(&mut self.redo_stack, Snapshot::capture(store), self.max_steps);
        snapshot.restore(store);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "history: undo");
        true
    }

    pub fn redo(&mut self, store: &mut PixelStore) -> bool {
        if self.pending.is_some() {
            return false;
        }
        let Some(snapshot) = self.redo_stack.pop_back() else { return false };
        Self::push_bounded(&mut self.undo_stack, Snapshot::capture(store), self.max_steps);
        snapshot.restore(store);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "history: redo");
        true
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.pending = None;
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps.max(1);
        while self.undo_stack.len() > self.max_steps {
            self.undo_stack.pop_front();
        }
        while self.redo_stack.len() > self.max_steps {
            self.redo_stack.pop_front();
        }
    }

    /// Pushes unless identical to the current top. Returns whether it was
    /// pushed and the entry evicted to make room, if any.
    fn push_undo(&mut self, snapshot: Snapshot) -> (bool, Option<Snapshot>) {
        if self.undo_stack.back() == Some(&snapshot) {
            return (false, None);
        }
        let evicted = Self::push_bounded(&mut self.undo_stack, snapshot, self.max_steps);
        (true, evicted)
    }

    fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, max: usize) -> Option<Snapshot> {
        stack.push_back(snapshot);
        if stack.len() > max {
            stack.pop_front()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests;
