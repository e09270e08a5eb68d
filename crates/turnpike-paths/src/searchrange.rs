use turnpike_core::{Heading, Point, Range, State};

/// Number of headings per cell.
pub(crate) const HEADINGS: usize = 4;

// ---------------------------------------------------------------------------
// Internal node for the directional priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreached" in cost queries.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Central coordinator for directional search on a grid rectangle.
///
/// `SearchRange` owns the cost and predecessor tables for the full state
/// space (every cell × four headings) as flat arrays, invalidated lazily
/// by a generation counter, so repeated solves over the same rectangle
/// incur no allocations after the first.
pub struct SearchRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) preds: Vec<Vec<u32>>,
    pub(crate) generation: u32,
    // shared scratch buffer for successor queries
    pub(crate) sbuf: Vec<(State, i32)>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len() * HEADINGS;
        Self {
            rng,
            width: w,
            nodes: vec![Node::default(); len],
            preds: vec![Vec::new(); len],
            // One ahead of the nodes' default generation, so an unsearched
            // range reports every state as unreached.
            generation: 1,
            sbuf: Vec::with_capacity(HEADINGS),
        }
    }

    /// Replace the underlying range, reallocating caches as needed.
    ///
    /// If the new state space fits within existing capacity, the arrays are
    /// preserved and only the generation counter is bumped so stale entries
    /// are ignored. Otherwise the arrays are reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len() * HEADINGS;
        let old_capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.preds.clear();
        self.preds.resize(new_len, Vec::new());
        self.generation = 1;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// A defensive expansion budget for [`turn_dijkstra`](Self::turn_dijkstra).
    ///
    /// Each state has at most three incoming edges, so the queue can never
    /// see more entries than this; exceeding it means a broken pather, not
    /// a hard maze.
    pub fn default_budget(&self) -> u64 {
        (self.nodes.len() as u64).saturating_mul(4).max(16)
    }

    // -----------------------------------------------------------------------
    // State indexing
    // -----------------------------------------------------------------------

    /// Convert a `State` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, s: State) -> Option<usize> {
        if !self.rng.contains(s.pos) {
            return None;
        }
        let x = (s.pos.x - self.rng.min.x) as usize;
        let y = (s.pos.y - self.rng.min.y) as usize;
        Some((y * self.width + x) * HEADINGS + s.heading.index())
    }

    /// Convert a flat index back to a `State`.
    #[inline]
    pub(crate) fn state(&self, idx: usize) -> State {
        let heading = Heading::from_index(idx % HEADINGS);
        let cell = idx / HEADINGS;
        let x = (cell % self.width) as i32 + self.rng.min.x;
        let y = (cell / self.width) as i32 + self.rng.min.y;
        State::new(Point::new(x, y), heading)
    }
}
