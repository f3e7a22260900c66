//! Recency list ordering cached images from least to most recently used
//!
//! Nodes live in an index arena; links are slot indices so the two-way
//! chain never forms an ownership cycle. Freed slots are recycled.

use crate::error::{Error, Result};
use crate::item::Image;

/// Node in the recency doubly-linked list
struct Node {
    item: Image,
    /// Neighbour toward the LRU end
    prev: Option<usize>,
    /// Neighbour toward the MRU end
    next: Option<usize>,
}

/// Doubly-linked list of images ordered by recency of insertion
#[derive(Default)]
pub struct RecencyList {
    nodes: Vec<Option<Node>>,
    /// MRU end
    head: Option<usize>,
    /// LRU end
    tail: Option<usize>,
    free_list: Vec<usize>,
    len: usize,
}

impl RecencyList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of linked nodes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the list has no nodes
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Link `item` as the new most recent node and return its slot.
    ///
    /// Names are not checked for duplicates here.
    pub fn insert_most_recent(&mut self, item: Image) -> usize {
        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            item,
            prev: self.head,
            next: None,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.next = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.len += 1;
        idx
    }

    /// Unlink the least recent node and return its image
    pub fn evict_least_recent(&mut self) -> Result<Image> {
        let tail_idx = self.tail.ok_or(Error::EmptyStructure)?;
        self.unlink(tail_idx);

        let node = self.nodes[tail_idx].take().ok_or(Error::EmptyStructure)?;
        self.free_node(tail_idx);
        self.len -= 1;

        Ok(node.item)
    }

    /// Image at the MRU end
    pub fn peek_most_recent(&self) -> Option<&Image> {
        self.item_at(self.head)
    }

    /// Image at the LRU end
    pub fn peek_least_recent(&self) -> Option<&Image> {
        self.item_at(self.tail)
    }

    /// Move the node in `slot` to the MRU end. Unknown slots are ignored.
    pub fn promote(&mut self, slot: usize) {
        if self.head == Some(slot) || !matches!(self.nodes.get(slot), Some(Some(_))) {
            return;
        }

        self.unlink(slot);

        if let Some(node) = &mut self.nodes[slot] {
            node.prev = self.head;
            node.next = None;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.next = Some(slot);
            }
        }

        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }

    /// Iterate from the MRU end toward the LRU end
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
            toward_lru: true,
        }
    }

    /// Iterate from the LRU end toward the MRU end
    pub fn iter_from_least_recent(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.tail,
            remaining: self.len,
            toward_lru: false,
        }
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    fn item_at(&self, idx: Option<usize>) -> Option<&Image> {
        idx.and_then(|i| self.nodes[i].as_ref()).map(|node| &node.item)
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &mut self.nodes[idx] {
            (node.prev.take(), node.next.take())
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.tail = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.head = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}

/// Borrowing iterator over a [`RecencyList`]
pub struct Iter<'a> {
    list: &'a RecencyList,
    cursor: Option<usize>,
    remaining: usize,
    toward_lru: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Image;

    fn next(&mut self) -> Option<Self::Item> {
        // never walk more than `len` nodes
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.nodes[self.cursor?].as_ref()?;
        self.cursor = if self.toward_lru { node.prev } else { node.next };
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular_images() -> Vec<Image> {
        vec![
            Image::new("img_1", 3),
            Image::new("img_2", 3),
            Image::new("img_3", 4),
            Image::new("img_4", 20),
        ]
    }

    fn filled(images: &[Image]) -> RecencyList {
        let mut list = RecencyList::new();
        for img in images {
            list.insert_most_recent(img.clone());
        }
        list
    }

    #[test]
    fn test_evict_empty_list() {
        let mut list = RecencyList::new();
        assert_eq!(list.evict_least_recent(), Err(Error::EmptyStructure));
        assert!(list.peek_most_recent().is_none());
        assert!(list.peek_least_recent().is_none());
    }

    #[test]
    fn test_single_node_is_both_ends() {
        let mut list = RecencyList::new();
        list.insert_most_recent(Image::new("only", 1));

        assert_eq!(list.peek_most_recent(), list.peek_least_recent());
        assert_eq!(list.evict_least_recent().unwrap(), Image::new("only", 1));
        assert!(list.is_empty());
        assert!(list.peek_most_recent().is_none());
        assert!(list.peek_least_recent().is_none());
    }

    #[test]
    fn test_grow_chain_order() {
        let images = regular_images();
        let list = filled(&images);

        assert_eq!(list.len(), 4);
        assert_eq!(list.peek_most_recent(), images.last());
        assert_eq!(list.peek_least_recent(), images.first());

        let mru_first: Vec<_> = list.iter().cloned().collect();
        let expected: Vec<_> = images.iter().rev().cloned().collect();
        assert_eq!(mru_first, expected);
    }

    #[test]
    fn test_traversals_are_reverses() {
        let list = filled(&regular_images());

        let mut forward: Vec<_> = list.iter().collect();
        let backward: Vec<_> = list.iter_from_least_recent().collect();
        forward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_evict_in_insertion_order() {
        let images = regular_images();
        let mut list = filled(&images);

        assert_eq!(list.evict_least_recent().unwrap(), images[0]);
        assert_eq!(list.evict_least_recent().unwrap(), images[1]);
        assert_eq!(list.peek_least_recent(), Some(&images[2]));
    }

    #[test]
    fn test_drain_then_fail() {
        let images = regular_images();
        let mut list = filled(&images);

        let mut last = None;
        for _ in 0..images.len() {
            last = Some(list.evict_least_recent().unwrap());
        }
        assert_eq!(last.as_ref(), images.last());
        assert_eq!(list.evict_least_recent(), Err(Error::EmptyStructure));
    }

    #[test]
    fn test_slots_are_reused() {
        let mut list = RecencyList::new();
        let first = list.insert_most_recent(Image::new("a", 1));
        list.evict_least_recent().unwrap();

        let second = list.insert_most_recent(Image::new("b", 1));
        assert_eq!(first, second);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_promote_tail() {
        let mut list = RecencyList::new();
        let a = list.insert_most_recent(Image::new("a", 1));
        list.insert_most_recent(Image::new("b", 1));
        list.insert_most_recent(Image::new("c", 1));

        list.promote(a);

        let names: Vec<_> = list.iter().map(|img| img.name().to_string()).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
        assert_eq!(list.peek_least_recent().unwrap().name(), "b");

        let backward: Vec<_> = list
            .iter_from_least_recent()
            .map(|img| img.name().to_string())
            .collect();
        assert_eq!(backward, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_promote_middle_and_head() {
        let mut list = RecencyList::new();
        list.insert_most_recent(Image::new("a", 1));
        let b = list.insert_most_recent(Image::new("b", 1));
        let c = list.insert_most_recent(Image::new("c", 1));

        list.promote(c);
        list.promote(b);
        list.promote(99);

        let names: Vec<_> = list.iter().map(|img| img.name().to_string()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut list = filled(&regular_images());
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.evict_least_recent(), Err(Error::EmptyStructure));
    }
}
