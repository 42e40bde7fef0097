use std::fmt;

use super::iter::Iter;

/// Slot index of a node in the arena.
pub(super) type Link = Option<usize>;

pub(super) struct Node<T> {
    pub(super) item: T,
    pub(super) prev: Link,
    pub(super) next: Link,
}

/// An ordered playlist with a "current" cursor.
///
/// Appends go to the tail; deletion only happens at the cursor. Every
/// operation is O(1) and none of them fail: calls that make no sense for the
/// current state (deleting from an empty list, advancing past the tail) are
/// no-ops.
pub struct Playlist<T> {
    slots: Vec<Option<Node<T>>>,
    // Freed slots, reused before the arena grows.
    free: Vec<usize>,
    head: Link,
    tail: Link,
    cursor: Link,
    len: usize,
}

impl<T> Default for Playlist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Playlist<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            cursor: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append `item` after the tail.
    ///
    /// On an empty list the new node becomes head, tail and cursor. Otherwise
    /// only the tail moves; the cursor stays where it was.
    pub fn append(&mut self, item: T) {
        let id = self.alloc(Node {
            item,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old_tail) => {
                self.node_mut(old_tail).next = Some(id);
                self.tail = Some(id);
            }
            None => {
                self.head = Some(id);
                self.tail = Some(id);
                self.cursor = Some(id);
            }
        }
        self.len += 1;
    }

    /// Remove the node under the cursor and return its item.
    ///
    /// The cursor moves to the successor, or to the predecessor when the tail
    /// was removed. Returns `None` (and changes nothing) when the list is empty.
    pub fn delete_current(&mut self) -> Option<T> {
        let id = self.cursor?;
        let node = self.slots[id].take()?;
        self.free.push(id);
        self.len -= 1;

        match (node.prev, node.next) {
            (None, None) => {
                self.head = None;
                self.tail = None;
                self.cursor = None;
            }
            (None, Some(next)) => {
                self.node_mut(next).prev = None;
                self.head = Some(next);
                self.cursor = Some(next);
            }
            (Some(prev), None) => {
                self.node_mut(prev).next = None;
                self.tail = Some(prev);
                self.cursor = Some(prev);
            }
            (Some(prev), Some(next)) => {
                self.node_mut(prev).next = Some(next);
                self.node_mut(next).prev = Some(prev);
                self.cursor = Some(next);
            }
        }

        Some(node.item)
    }

    /// Move the cursor to the next node. Returns `false` at the tail or when empty.
    pub fn advance(&mut self) -> bool {
        match self.cursor.and_then(|id| self.node(id).next) {
            Some(next) => {
                self.cursor = Some(next);
                true
            }
            None => false,
        }
    }

    /// Move the cursor to the previous node. Returns `false` at the head or when empty.
    pub fn go_back(&mut self) -> bool {
        match self.cursor.and_then(|id| self.node(id).prev) {
            Some(prev) => {
                self.cursor = Some(prev);
                true
            }
            None => false,
        }
    }

    /// The item under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.cursor.map(|id| &self.node(id).item)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|id| &self.node(id).item)
    }

    /// Zero-based position of the cursor counted from the head.
    ///
    /// Walks the chain, so this is O(n); meant for rendering.
    pub fn cursor_index(&self) -> Option<usize> {
        let cursor = self.cursor?;
        let mut at = self.head;
        let mut index = 0;
        while let Some(id) = at {
            if id == cursor {
                return Some(index);
            }
            at = self.node(id).next;
            index += 1;
        }
        None
    }

    /// Iterate head→tail; `.rev()` walks tail→head through the `prev` links.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.tail, self.len)
    }

    pub(super) fn node(&self, id: usize) -> &Node<T> {
        self.slots[id]
            .as_ref()
            .unwrap_or_else(|| unreachable!("link to freed slot {id}"))
    }

    fn node_mut(&mut self, id: usize) -> &mut Node<T> {
        self.slots[id]
            .as_mut()
            .unwrap_or_else(|| unreachable!("link to freed slot {id}"))
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Check every structural invariant, panicking with a description on failure.
    #[cfg(test)]
    pub(super) fn assert_links(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none(), "head/tail emptiness");
        assert_eq!(self.head.is_none(), self.cursor.is_none(), "head/cursor emptiness");
        assert_eq!(self.head.is_none(), self.len == 0, "head/len emptiness");

        if let Some(h) = self.head {
            assert!(self.node(h).prev.is_none(), "head has a prev");
        }
        if let Some(t) = self.tail {
            assert!(self.node(t).next.is_none(), "tail has a next");
        }

        let mut count = 0;
        let mut seen_cursor = self.cursor.is_none();
        let mut last = None;
        let mut at = self.head;
        while let Some(id) = at {
            let node = self.node(id);
            assert_eq!(node.prev, last, "broken prev link at slot {id}");
            if Some(id) == self.cursor {
                seen_cursor = true;
            }
            last = Some(id);
            at = node.next;
            count += 1;
        }
        assert_eq!(last, self.tail, "chain does not end at tail");
        assert_eq!(count, self.len, "len mismatch");
        assert!(seen_cursor, "cursor not in chain");
    }
}

impl<T> FromIterator<T> for Playlist<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for Playlist<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Playlist<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Playlist<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("items", &self.iter().collect::<Vec<_>>())
            .field("cursor", &self.cursor_index())
            .finish()
    }
}
