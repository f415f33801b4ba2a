//! Frontier of unexpanded branch-and-bound nodes.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::bound::PartialSolution;
use crate::error::KnapsackError;

/// Order in which the frontier hands out nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierDiscipline {
    /// Breadth-first: nodes leave in the order they were admitted.
    #[default]
    Fifo,
    /// Best-first: the node with the largest bound leaves first.
    ///
    /// Ties go to the deeper node.
    BestFirst,
}

/// Heap entry ordered by bound, then depth.
struct ByBound(PartialSolution);

impl Ord for ByBound {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .bound()
            .cmp(&other.0.bound())
            .then_with(|| self.0.decided().cmp(&other.0.decided()))
    }
}

impl PartialOrd for ByBound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ByBound {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ByBound {}

enum Queue {
    Fifo(VecDeque<PartialSolution>),
    BestFirst(BinaryHeap<ByBound>),
}

/// Growable node container with an optional hard limit.
///
/// Without a limit the frontier grows as far as the search needs. With a
/// limit, a push beyond it fails with
/// [`KnapsackError::FrontierExhausted`] instead of dropping nodes.
pub struct Frontier {
    queue: Queue,
    limit: Option<usize>,
    peak: usize,
}

impl Frontier {
    pub fn new(discipline: FrontierDiscipline, limit: Option<usize>) -> Self {
        let queue = match discipline {
            FrontierDiscipline::Fifo => Queue::Fifo(VecDeque::new()),
            FrontierDiscipline::BestFirst => Queue::BestFirst(BinaryHeap::new()),
        };
        Self {
            queue,
            limit,
            peak: 0,
        }
    }

    pub fn push(&mut self, node: PartialSolution) -> Result<(), KnapsackError> {
        if let Some(limit) = self.limit {
            if self.len() >= limit {
                return Err(KnapsackError::FrontierExhausted { limit });
            }
        }
        match &mut self.queue {
            Queue::Fifo(q) => q.push_back(node),
            Queue::BestFirst(h) => h.push(ByBound(node)),
        }
        self.peak = self.peak.max(self.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Option<PartialSolution> {
        match &mut self.queue {
            Queue::Fifo(q) => q.pop_front(),
            Queue::BestFirst(h) => h.pop().map(|entry| entry.0),
        }
    }

    pub fn len(&self) -> usize {
        match &self.queue {
            Queue::Fifo(q) => q.len(),
            Queue::BestFirst(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier reached.
    pub fn peak(&self) -> usize {
        self.peak
    }
}
