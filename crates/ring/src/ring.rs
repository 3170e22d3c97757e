use std::fmt;

use tracing::trace;

use crate::{Base, Result, RingError};

/// Arena slot id of a node
pub(crate) type NodeId = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) digit: u8,
    pub(crate) next: NodeId,
}

/// Circular singly-linked list of digits in a fixed [`Base`].
///
/// Nodes are stored in an arena and linked by slot id. When the ring is
/// non-empty the tail's successor is the head and exactly `len` nodes are
/// reachable from the head. Freed slots are recycled by later insertions.
#[derive(Debug, Clone, Default)]
pub struct DigitRing {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    base: Base,
}

impl DigitRing {
    /// Creates an empty ring in the primary base
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ring in the given base
    pub fn with_base(base: Base) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Builds a ring from explicit digits, most significant first.
    ///
    /// Every digit is validated before any node is created.
    pub fn from_digits<D, I>(base: Base, digits: I) -> Result<Self>
    where
        D: Into<Option<u8>>,
        I: IntoIterator<Item = D>,
    {
        let mut ring = Self::with_base(base);
        ring.extend_digits(digits)?;
        Ok(ring)
    }

    pub fn base(&self) -> Base {
        self.base
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a digit after the tail
    pub fn push(&mut self, digit: impl Into<Option<u8>>) -> Result<()> {
        let digit = self.admit(digit)?;
        self.link_back(digit);
        Ok(())
    }

    /// Inserts a digit so that it ends up at `index`, shifting later digits
    /// one position toward the tail. `index == len` appends.
    pub fn insert(&mut self, index: usize, digit: impl Into<Option<u8>>) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }
        let digit = self.admit(digit)?;
        self.link_at(index, digit);
        Ok(())
    }

    /// Removes and returns the digit at `index`
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) if index < self.len => (head, tail),
            _ => return Err(self.out_of_bounds(index)),
        };

        let removed = if index == 0 {
            if self.len == 1 {
                self.head = None;
                self.tail = None;
            } else {
                let next = self.nodes[head].next;
                self.head = Some(next);
                self.nodes[tail].next = next;
            }
            head
        } else {
            let prev = self.walk(head, index - 1);
            let target = self.nodes[prev].next;
            self.nodes[prev].next = self.nodes[target].next;
            if target == tail {
                self.tail = Some(prev);
            }
            target
        };

        self.len -= 1;
        self.free.push(removed);
        trace!(index, len = self.len, "removed digit");
        Ok(self.nodes[removed].digit)
    }

    /// Removes the first digit equal to `digit`, scanning from the head.
    ///
    /// Returns whether a digit was removed.
    pub fn remove_value(&mut self, digit: u8) -> bool {
        match self.index_of(digit) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Result<u8> {
        let id = self.locate(index)?;
        Ok(self.nodes[id].digit)
    }

    /// Replaces the digit at `index`, returning the previous one
    pub fn set(&mut self, index: usize, digit: impl Into<Option<u8>>) -> Result<u8> {
        let id = self.locate(index)?;
        let digit = self.admit(digit)?;
        Ok(std::mem::replace(&mut self.nodes[id].digit, digit))
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.index_of(digit).is_some()
    }

    /// Position of the first digit equal to `digit`
    pub fn index_of(&self, digit: u8) -> Option<usize> {
        self.iter().position(|d| d == digit)
    }

    /// Position of the last digit equal to `digit`
    pub fn last_index_of(&self, digit: u8) -> Option<usize> {
        self.iter()
            .enumerate()
            .filter(|&(_, d)| d == digit)
            .map(|(index, _)| index)
            .last()
    }

    /// Exchanges the digits at `i` and `j`.
    ///
    /// Unlike the indexed accessors this never fails: out-of-range indices
    /// return `false` and leave the ring as it was.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        match (self.locate(i), self.locate(j)) {
            (Ok(a), Ok(b)) => {
                if a != b {
                    let digit = self.nodes[a].digit;
                    self.nodes[a].digit = self.nodes[b].digit;
                    self.nodes[b].digit = digit;
                }
                true
            }
            _ => false,
        }
    }

    /// Bubble sort, non-decreasing from head to tail
    pub fn sort_ascending(&mut self) {
        self.bubble_sort(|left, right| left > right);
    }

    /// Bubble sort, non-increasing from head to tail
    pub fn sort_descending(&mut self) {
        self.bubble_sort(|left, right| left < right);
    }

    /// Each pass walks the successor links from head, exchanging the digits
    /// of adjacent nodes; the links themselves never move.
    fn bubble_sort(&mut self, out_of_order: impl Fn(u8, u8) -> bool) {
        let Some(head) = self.head else {
            return;
        };
        for pass in 1..self.len {
            let mut left = head;
            for _ in 0..self.len - pass {
                let right = self.nodes[left].next;
                let (l, r) = (self.nodes[left].digit, self.nodes[right].digit);
                if out_of_order(l, r) {
                    self.nodes[left].digit = r;
                    self.nodes[right].digit = l;
                }
                left = right;
            }
        }
        trace!(len = self.len, "sorted");
    }

    /// Rotates one step toward the head: the old head becomes the tail
    pub fn shift_left(&mut self) {
        if self.len <= 1 {
            return;
        }
        if let Some(head) = self.head {
            self.tail = Some(head);
            self.head = Some(self.nodes[head].next);
        }
    }

    /// Rotates one step toward the tail: the old tail becomes the head
    pub fn shift_right(&mut self) {
        if self.len <= 1 {
            return;
        }
        if let (Some(head), Some(tail)) = (self.head, self.tail) {
            self.tail = Some(self.walk(head, self.len - 2));
            self.head = Some(tail);
        }
    }

    /// Drops every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Digits from head to tail
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    pub(crate) fn head(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Validates a digit argument against this ring's base
    pub(crate) fn admit(&self, digit: impl Into<Option<u8>>) -> Result<u8> {
        match digit.into() {
            None => Err(RingError::NullDigit),
            Some(digit) if !self.base.admits(digit) => Err(RingError::DigitOutOfRange {
                digit,
                base: self.base,
            }),
            Some(digit) => Ok(digit),
        }
    }

    pub(crate) fn out_of_bounds(&self, index: usize) -> RingError {
        RingError::IndexOutOfBounds {
            index,
            len: self.len,
        }
    }

    /// Appends an already validated digit
    pub(crate) fn link_back(&mut self, digit: u8) {
        let id = self.alloc(digit);
        match self.tail {
            None => {
                self.head = Some(id);
            }
            Some(tail) => {
                self.nodes[id].next = self.nodes[tail].next;
                self.nodes[tail].next = id;
            }
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Inserts an already validated digit at a validated position
    pub(crate) fn link_at(&mut self, index: usize, digit: u8) {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) if index < self.len => (head, tail),
            _ => return self.link_back(digit),
        };

        let id = self.alloc(digit);
        if index == 0 {
            self.nodes[id].next = head;
            self.nodes[tail].next = id;
            self.head = Some(id);
        } else {
            let prev = self.walk(head, index - 1);
            self.nodes[id].next = self.nodes[prev].next;
            self.nodes[prev].next = id;
        }
        self.len += 1;
        trace!(index, len = self.len, "inserted digit");
    }

    /// Slot id of the node at `index`
    fn locate(&self, index: usize) -> Result<NodeId> {
        match self.head {
            Some(head) if index < self.len => Ok(self.walk(head, index)),
            _ => Err(self.out_of_bounds(index)),
        }
    }

    fn walk(&self, from: NodeId, steps: usize) -> NodeId {
        (0..steps).fold(from, |id, _| self.nodes[id].next)
    }

    /// New self-linked node, reusing a freed slot when one is available
    fn alloc(&mut self, digit: u8) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = Node { digit, next: id };
                id
            }
            None => {
                let id = self.nodes.len();
                self.nodes.push(Node { digit, next: id });
                id
            }
        }
    }
}

/// Digits concatenated head to tail, without separators
impl fmt::Display for DigitRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Rings compare digit by digit; the base is not part of equality
impl PartialEq for DigitRing {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DigitRing {}
