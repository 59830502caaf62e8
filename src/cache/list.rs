//! Recency List Module
//!
//! Doubly linked most- to least-recently-used ordering, backed by a
//! stable slot arena instead of pointer-linked nodes.

// == Sentinel Slots ==
/// Arena index of the MRU-adjacent sentinel.
const HEAD: usize = 0;
/// Arena index of the LRU-adjacent sentinel.
const TAIL: usize = 1;

// == Slot ==
/// One arena cell: a link pair plus an optional payload.
///
/// Sentinels and freed slots carry no payload.
#[derive(Debug)]
struct Slot<T> {
    prev: usize,
    next: usize,
    data: Option<T>,
}

// == Recency List ==
/// Doubly linked recency order addressed by integer slot index.
///
/// The two sentinel slots always exist and are never exposed, so linking
/// and unlinking never branch at the list boundaries. Removing a node
/// vacates its slot onto a free list for reuse; indices handed out by
/// [`push_front`](Self::push_front) stay valid until that node is removed,
/// which keeps an external key-to-index map stable with no pointer
/// aliasing.
#[derive(Debug)]
pub struct RecencyList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> RecencyList<T> {
    // == Constructor ==
    /// Creates an empty list holding only the two linked sentinels.
    pub fn new() -> Self {
        Self {
            slots: vec![
                Slot { prev: HEAD, next: TAIL, data: None },
                Slot { prev: HEAD, next: TAIL, data: None },
            ],
            free: Vec::new(),
            len: 0,
        }
    }

    // == Length ==
    /// Number of payload-carrying nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Push Front ==
    /// Inserts `data` at the MRU position and returns its slot index.
    ///
    /// Recycles a freed slot when one is available, so the arena stops
    /// growing once it has seen its peak occupancy.
    pub fn push_front(&mut self, data: T) -> usize {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx].data = Some(data);
                idx
            }
            None => {
                self.slots.push(Slot { prev: HEAD, next: TAIL, data: Some(data) });
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Remove ==
    /// Unlinks the node at `idx`, vacates its slot, and returns the payload.
    ///
    /// `idx` must come from [`push_front`](Self::push_front) and not have
    /// been removed since.
    pub fn remove(&mut self, idx: usize) -> T {
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        self.slots[idx].data.take().expect("removed slot holds a payload")
    }

    // == Promote ==
    /// Relinks the node at `idx` to the MRU position.
    pub fn promote(&mut self, idx: usize) {
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Accessors ==
    /// Payload stored at `idx`.
    pub fn get(&self, idx: usize) -> &T {
        self.slots[idx].data.as_ref().expect("live slot holds a payload")
    }

    /// Slot index of the least-recently-used node, if any.
    pub fn lru(&self) -> Option<usize> {
        let idx = self.slots[TAIL].prev;
        (idx != HEAD).then_some(idx)
    }

    /// Slot index of the most-recently-used node, if any.
    pub fn first(&self) -> Option<usize> {
        let idx = self.slots[HEAD].next;
        (idx != TAIL).then_some(idx)
    }

    /// Slot index of the node following `idx` toward the LRU end, if any.
    pub fn next_of(&self, idx: usize) -> Option<usize> {
        let next = self.slots[idx].next;
        (next != TAIL).then_some(next)
    }

    // == Clear ==
    /// Drops every node and resets the arena to two freshly linked sentinels.
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD].next = TAIL;
        self.slots[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    // == Link Primitives ==
    fn unlink(&mut self, idx: usize) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }

    fn link_front(&mut self, idx: usize) {
        let next = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = next;
        self.slots[next].prev = idx;
        self.slots[HEAD].next = idx;
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<T> RecencyList<T> {
    /// Walks the list front to back, asserting that every link pair is
    /// mutually consistent and that exactly `len` payload-carrying nodes
    /// are reachable. Returns the reachable indices in MRU-to-LRU order.
    pub(crate) fn check_links(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        let mut prev = HEAD;
        let mut idx = self.slots[HEAD].next;
        while idx != TAIL {
            assert_eq!(self.slots[idx].prev, prev, "prev link broken at slot {idx}");
            assert!(self.slots[idx].data.is_some(), "linked slot {idx} has no payload");
            seen.push(idx);
            prev = idx;
            idx = self.slots[idx].next;
        }
        assert_eq!(self.slots[TAIL].prev, prev, "tail prev link broken");
        assert_eq!(seen.len(), self.len, "reachable node count diverges from len");
        seen
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_is_empty() {
        let list: RecencyList<u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.lru(), None);
        list.check_links();
    }

    #[test]
    fn test_push_front_orders_mru_first() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(list.len(), 3);
        assert_eq!(list.first(), Some(c));
        assert_eq!(list.lru(), Some(a));
        assert_eq!(list.check_links(), vec![c, b, a]);
    }

    #[test]
    fn test_remove_returns_payload_and_relinks() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        assert_eq!(list.remove(b), "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.check_links(), vec![c, a]);
    }

    #[test]
    fn test_remove_sole_node_empties_list() {
        let mut list = RecencyList::new();

        let a = list.push_front(7);
        assert_eq!(list.remove(a), 7);

        assert!(list.is_empty());
        assert_eq!(list.first(), None);
        assert_eq!(list.lru(), None);
        list.check_links();
    }

    #[test]
    fn test_promote_moves_node_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");
        let c = list.push_front("c");

        list.promote(a);

        assert_eq!(list.first(), Some(a));
        assert_eq!(list.lru(), Some(b));
        assert_eq!(list.check_links(), vec![a, c, b]);
    }

    #[test]
    fn test_promote_front_node_is_noop() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");

        list.promote(b);

        assert_eq!(list.check_links(), vec![b, a]);
    }

    #[test]
    fn test_freed_slot_is_reused() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let arena_size = list.slots.len();

        list.remove(a);
        let b = list.push_front("b");

        assert_eq!(b, a);
        assert_eq!(list.slots.len(), arena_size);
        assert_eq!(list.get(b), &"b");
    }

    #[test]
    fn test_arena_stops_growing_at_peak_occupancy() {
        let mut list = RecencyList::new();

        for i in 0..4 {
            list.push_front(i);
        }
        let arena_size = list.slots.len();

        // Churn: repeatedly drop the LRU node and push a fresh one.
        for i in 0..32 {
            let lru = list.lru().unwrap();
            list.remove(lru);
            list.push_front(100 + i);
        }

        assert_eq!(list.slots.len(), arena_size);
        assert_eq!(list.len(), 4);
        list.check_links();
    }

    #[test]
    fn test_next_of_walks_toward_lru() {
        let mut list = RecencyList::new();

        let a = list.push_front("a");
        let b = list.push_front("b");

        assert_eq!(list.next_of(b), Some(a));
        assert_eq!(list.next_of(a), None);
    }

    #[test]
    fn test_clear_resets_to_sentinels() {
        let mut list = RecencyList::new();

        for i in 0..5 {
            list.push_front(i);
        }
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.slots.len(), 2);
        assert_eq!(list.first(), None);
        list.check_links();

        // The list is fully usable after a clear.
        let a = list.push_front(9);
        assert_eq!(list.first(), Some(a));
        list.check_links();
    }
}
