//! Charts
//!
//! Chart specs are plain data built by the panels; [`canvas`] draws them.
//! The registry keeps at most one live chart per slot.

pub mod canvas;
pub mod spec;

use std::collections::HashMap;

pub use canvas::CanvasChart;
pub use spec::{AxisFormat, ChartKind, ChartSpec, Series};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Usage,
    Cost,
    Pattern,
}

impl ChartSlot {
    /// Id of the canvas element the slot draws into
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartSlot::Usage => "usage-chart",
            ChartSlot::Cost => "cost-chart",
            ChartSlot::Pattern => "pattern-chart",
        }
    }
}

/// A drawn chart that can be torn down
pub trait ChartHandle {
    fn destroy(&mut self);
}

pub struct ChartRegistry<H: ChartHandle> {
    live: HashMap<ChartSlot, H>,
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self {
            live: HashMap::new(),
        }
    }
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroys the slot's current chart, then stores whatever `create` builds
    pub fn render<F>(&mut self, slot: ChartSlot, create: F) -> bool
    where
        F: FnOnce() -> Option<H>,
    {
        self.release(slot);
        match create() {
            Some(handle) => {
                self.live.insert(slot, handle);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, slot: ChartSlot) {
        if let Some(mut old) = self.live.remove(&slot) {
            old.destroy();
        }
    }

    #[cfg(test)]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeChart {
        alive: Rc<Cell<usize>>,
    }

    impl FakeChart {
        fn new(alive: &Rc<Cell<usize>>) -> Self {
            alive.set(alive.get() + 1);
            Self {
                alive: Rc::clone(alive),
            }
        }
    }

    impl ChartHandle for FakeChart {
        fn destroy(&mut self) {
            self.alive.set(self.alive.get() - 1);
        }
    }

    #[test]
    fn test_rerender_keeps_one_chart() {
        let alive = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::new();

        registry.render(ChartSlot::Usage, || Some(FakeChart::new(&alive)));
        registry.render(ChartSlot::Usage, || Some(FakeChart::new(&alive)));

        assert_eq!(alive.get(), 1);
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_slots_are_separate() {
        let alive = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::new();

        registry.render(ChartSlot::Usage, || Some(FakeChart::new(&alive)));
        registry.render(ChartSlot::Cost, || Some(FakeChart::new(&alive)));
        registry.render(ChartSlot::Pattern, || Some(FakeChart::new(&alive)));
        assert_eq!(alive.get(), 3);

        registry.release(ChartSlot::Cost);
        assert_eq!(alive.get(), 2);
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn test_failed_create_still_releases_old() {
        let alive = Rc::new(Cell::new(0));
        let mut registry = ChartRegistry::new();

        assert!(registry.render(ChartSlot::Pattern, || Some(FakeChart::new(&alive))));
        assert!(!registry.render(ChartSlot::Pattern, || None));
        assert_eq!(alive.get(), 0);
        assert_eq!(registry.live_count(), 0);
    }
}
