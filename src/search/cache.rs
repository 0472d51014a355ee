//! Evaluation cache: a fixed-capacity hash -> score map with LRU
//! eviction (`spec.md` §4.3, design notes §9).
//!
//! Kept as an intrusive hash-linked list (a `HashMap` from hash to an
//! index into a flat node pool, nodes carrying their own prev/next
//! indices) rather than `std::collections::LinkedList`, since moving a
//! node to the front on every cache hit would otherwise mean either an
//! O(n) search through a real linked list or fighting the borrow
//! checker over cursors. The reference engine's `std::list` +
//! `unordered_map<U64, list::iterator>` does the same thing; Rust just
//! can't hold iterators into a container across mutations as cheaply.

use std::collections::HashMap;

const NIL: u32 = u32::MAX;

struct Node {
    hash: u64,
    score: i32,
    prev: u32,
    next: u32,
}

/// Fixed-capacity LRU cache from Zobrist hash to a static evaluation.
pub struct EvalCache {
    capacity: usize,
    index: HashMap<u64, u32>,
    pool: Vec<Node>,
    /// Free slots in `pool` left behind by eviction, reused before
    /// growing the pool.
    free: Vec<u32>,
    head: u32, // most recently used
    tail: u32, // least recently used
}

impl EvalCache {
    pub fn new(capacity: usize) -> Self {
        EvalCache {
            capacity: capacity.max(1),
            index: HashMap::with_capacity(capacity),
            pool: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Looks up `hash` and, on a hit, moves it to the most-recently-used
    /// end of the list.
    pub fn get(&mut self, hash: u64) -> Option<i32> {
        let &slot = self.index.get(&hash)?;
        self.move_to_front(slot);
        Some(self.pool[slot as usize].score)
    }

    /// Inserts or overwrites the score for `hash`, evicting the least
    /// recently used entry if the cache is now over capacity.
    pub fn insert(&mut self, hash: u64, score: i32) {
        if let Some(&slot) = self.index.get(&hash) {
            self.pool[slot as usize].score = score;
            self.move_to_front(slot);
            return;
        }

        let slot = if let Some(reused) = self.free.pop() {
            self.pool[reused as usize] = Node { hash, score, prev: NIL, next: NIL };
            reused
        } else {
            let slot = self.pool.len() as u32;
            self.pool.push(Node { hash, score, prev: NIL, next: NIL });
            slot
        };
        self.index.insert(hash, slot);
        self.push_front(slot);

        if self.index.len() > self.capacity {
            self.evict_lru();
        }
    }

    fn unlink(&mut self, slot: u32) {
        let (prev, next) = {
            let node = &self.pool[slot as usize];
            (node.prev, node.next)
        };
        if prev != NIL {
            self.pool[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.pool[next as usize].prev = prev;
        } else {
            self.tail = prev;
        }
    }

    fn push_front(&mut self, slot: u32) {
        self.pool[slot as usize].prev = NIL;
        self.pool[slot as usize].next = self.head;
        if self.head != NIL {
            self.pool[self.head as usize].prev = slot;
        }
        self.head = slot;
        if self.tail == NIL {
            self.tail = slot;
        }
    }

    fn move_to_front(&mut self, slot: u32) {
        if self.head == slot {
            return;
        }
        self.unlink(slot);
        self.push_front(slot);
    }

    fn evict_lru(&mut self) {
        let lru = self.tail;
        debug_assert_ne!(lru, NIL, "eviction requested on an empty cache");
        self.unlink(lru);
        self.index.remove(&self.pool[lru as usize].hash);
        self.free.push(lru);
    }
}
