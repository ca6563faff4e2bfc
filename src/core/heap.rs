use crate::models::Applicant;

/// Array-backed binary max-heap of applicants, ordered by priority score
///
/// The heap is stored as a dense `Vec` with the usual index arithmetic:
/// `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`, `right(i) = 2i + 2`.
/// No pointer graph, so no cycles are possible by construction.
///
/// Every comparison reads the applicant's stored `priority_score`, which is
/// fixed at construction. The API deliberately takes no separate priority
/// parameter; ordering by anything other than the stored score would let the
/// heap and the applicant disagree about an applicant's rank.
///
/// Ties between equal scores break arbitrarily by heap structure. Callers
/// may rely on all score-90 applicants popping before all score-80 ones, but
/// not on any particular order among equals.
#[derive(Debug, Clone, Default)]
pub struct ApplicantHeap {
    heap: Vec<Applicant>,
}

impl ApplicantHeap {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Insert an applicant, sifting it up to its rank
    pub fn push(&mut self, applicant: Applicant) {
        self.heap.push(applicant);
        let mut i = self.heap.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[parent].priority_score >= self.heap[i].priority_score {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    /// Remove and return the highest-priority applicant
    ///
    /// Returns `None` on an empty heap so callers can't mistake "no more
    /// applicants" for an applicant with placeholder fields.
    pub fn pop(&mut self) -> Option<Applicant> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let result = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        result
    }

    /// The highest-priority applicant without removing it
    pub fn peek(&self) -> Option<&Applicant> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Restore the heap property downward from `i`
    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut largest = i;

            if left < self.heap.len()
                && self.heap[left].priority_score > self.heap[largest].priority_score
            {
                largest = left;
            }
            if right < self.heap.len()
                && self.heap[right].priority_score > self.heap[largest].priority_score
            {
                largest = right;
            }

            if largest == i {
                break;
            }
            self.heap.swap(i, largest);
            i = largest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.heap.len()).all(|i| {
            self.heap[(i - 1) / 2].priority_score >= self.heap[i].priority_score
        })
    }
}

impl FromIterator<Applicant> for ApplicantHeap {
    fn from_iter<T: IntoIterator<Item = Applicant>>(iter: T) -> Self {
        let mut heap = ApplicantHeap::new();
        for applicant in iter {
            heap.push(applicant);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applicant_with_score(id: &str, age: u32) -> Applicant {
        // Vary age to steer the score; family and income held constant.
        // age >=60 -> 80, >=50 -> 70, >=40 -> 60, else 50.
        Applicant::new(id, "Heap Tester", age, 4, 12000.0)
    }

    #[test]
    fn test_pop_empty_is_none() {
        let mut heap = ApplicantHeap::new();
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_pop_order_non_increasing() {
        let mut heap = ApplicantHeap::new();
        for (id, age) in [("a", 30), ("b", 65), ("c", 45), ("d", 52), ("e", 41)] {
            heap.push(applicant_with_score(id, age));
        }

        let mut last = u32::MAX;
        while let Some(applicant) = heap.pop() {
            assert!(
                applicant.priority_score <= last,
                "pop order regressed: {} after {}",
                applicant.priority_score,
                last
            );
            last = applicant.priority_score;
        }
    }

    #[test]
    fn test_heap_property_after_mixed_ops() {
        let mut heap = ApplicantHeap::new();
        let ages = [25, 61, 44, 58, 33, 70, 49, 51, 39, 62];
        for (i, age) in ages.iter().enumerate() {
            heap.push(applicant_with_score(&format!("app-{}", i), *age));
            assert!(heap.is_valid(), "heap invariant broken after push {}", i);
        }

        for _ in 0..4 {
            heap.pop();
            assert!(heap.is_valid(), "heap invariant broken after pop");
        }

        heap.push(applicant_with_score("late", 67));
        assert!(heap.is_valid());
        assert_eq!(heap.peek().map(|a| a.priority_score), Some(80));
    }

    #[test]
    fn test_peek_matches_next_pop() {
        let mut heap: ApplicantHeap = [("x", 55), ("y", 62), ("z", 48)]
            .into_iter()
            .map(|(id, age)| applicant_with_score(id, age))
            .collect();

        let peeked = heap.peek().map(|a| a.id.clone());
        let popped = heap.pop().map(|a| a.id);
        assert_eq!(peeked, popped);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_ties_all_drain_before_lower_scores() {
        // Three equal-score applicants followed by a lower one; order among
        // the equals is unspecified, but all must pop before the lower score
        let mut heap = ApplicantHeap::new();
        for id in ["t1", "t2", "t3"] {
            heap.push(applicant_with_score(id, 52));
        }
        heap.push(applicant_with_score("low", 20));

        for _ in 0..3 {
            assert_eq!(heap.pop().map(|a| a.priority_score), Some(70));
        }
        assert_eq!(heap.pop().map(|a| a.priority_score), Some(50));
        assert!(heap.pop().is_none());
    }
}
