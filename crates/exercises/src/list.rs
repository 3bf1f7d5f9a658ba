//! Singly linked list stored in an arena, so a node's `next` link may point
//! back at an earlier node and form a cycle.

use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListNode {
    value: i64,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedList {
    nodes: Vec<ListNode>,
    head: Option<usize>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list holding `values` in order.
    pub fn from_values(values: &[i64]) -> Self {
        let nodes = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ListNode {
                value,
                next: (i + 1 < values.len()).then_some(i + 1),
            })
            .collect();
        Self {
            nodes,
            head: (!values.is_empty()).then_some(0),
        }
    }

    /// A list holding `values` whose last node links back to the node at
    /// `cycle_index`. An out-of-range index leaves the list acyclic.
    pub fn with_cycle(values: &[i64], cycle_index: usize) -> Self {
        let mut list = Self::from_values(values);
        if cycle_index < values.len() {
            if let Some(last) = list.nodes.last_mut() {
                last.next = Some(cycle_index);
            }
        }
        list
    }

    /// Number of nodes, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Values from the head, at most `limit` of them.
    pub fn values(&self, limit: usize) -> Vec<i64> {
        let mut out = Vec::new();
        let mut current = self.head;
        while let Some(index) = current {
            if out.len() == limit {
                break;
            }
            out.push(self.nodes[index].value);
            current = self.nodes[index].next;
        }
        out
    }

    /// Flip every link so the old tail becomes the head.
    pub fn reverse(&mut self) {
        let mut previous = None;
        let mut current = self.head;
        while let Some(index) = current {
            current = self.nodes[index].next;
            self.nodes[index].next = previous;
            previous = Some(index);
        }
        self.head = previous;
    }

    fn next(&self, index: usize) -> Option<usize> {
        self.nodes[index].next
    }

    /// Floyd's tortoise and hare: the node where the two pointers meet.
    fn meeting_point(&self) -> Option<usize> {
        let head = self.head?;
        let (mut slow, mut fast) = (head, head);
        loop {
            fast = self.next(self.next(fast)?)?;
            slow = self.next(slow)?;
            if slow == fast {
                trace!("Pointers met at node {}", self.nodes[slow].value);
                return Some(slow);
            }
        }
    }

    /// The first node of the cycle, if there is one.
    pub fn cycle_start(&self) -> Option<usize> {
        let mut fast = self.meeting_point()?;
        let mut slow = self.head?;
        // Both pointers are now the same distance from the cycle start
        while slow != fast {
            slow = self.next(slow)?;
            fast = self.next(fast)?;
        }
        Some(slow)
    }

    pub fn has_cycle(&self) -> bool {
        self.meeting_point().is_some()
    }

    /// Detect a cycle and cut the link that closes it.
    ///
    /// Returns true if a cycle was found and removed.
    pub fn remove_cycle(&mut self) -> bool {
        let Some(start) = self.cycle_start() else {
            return false;
        };

        let mut last = start;
        while let Some(next) = self.next(last) {
            if next == start {
                break;
            }
            last = next;
        }
        trace!(
            "Cycle starts at node {}, cutting the link from node {}",
            self.nodes[start].value,
            self.nodes[last].value
        );
        self.nodes[last].next = None;
        true
    }
}
