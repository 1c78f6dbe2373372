//! Bounded top-K tracking for match candidates.

/// Match proposal for one template alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Column offset of the aligned template's top-left corner.
    pub x: usize,
    /// Row offset of the aligned template's top-left corner.
    pub y: usize,
    /// Dissimilarity score; zero means a pixel-exact match.
    pub score: u64,
}

/// Keeps the K lowest-scoring candidates seen so far, sorted ascending.
///
/// Candidates must be offered in discovery order: among equal scores the
/// earlier offer wins, both for eviction (a newcomer that merely ties the
/// current worst is discarded) and for the final ordering (insertion keeps
/// equal scores in arrival order).
pub struct TopK {
    k: usize,
    items: Vec<Candidate>,
}

impl TopK {
    /// Creates a collector for at most `k` candidates.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            items: Vec::with_capacity(k),
        }
    }

    /// Offers a candidate, evicting the current worst when a strictly
    /// better score arrives at capacity.
    pub fn push(&mut self, cand: Candidate) {
        if self.k == 0 {
            return;
        }
        if self.items.len() == self.k {
            let worst = self.items.last().expect("capacity > 0 so buffer is non-empty");
            if cand.score >= worst.score {
                return;
            }
            self.items.pop();
        }
        let idx = self.items.partition_point(|held| held.score <= cand.score);
        self.items.insert(idx, cand);
    }

    /// Returns the number of candidates currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no candidate has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the collector, returning candidates ascending by score.
    ///
    /// The buffer is kept sorted by `push`, so this is a move, not a sort.
    pub fn into_sorted_asc(self) -> Vec<Candidate> {
        self.items
    }
}
