use crate::core::{heap::ApplicantHeap, scoring::match_score};
use crate::models::{Allocation, Applicant, House};

/// Default minimum compatibility score for an allocation to be accepted.
pub const DEFAULT_MIN_MATCH_SCORE: f64 = 60.0;

/// Result of one allocation run
#[derive(Debug)]
pub struct AllocationRun {
    pub allocations: Vec<Allocation>,
    pub total_applicants: usize,
}

/// Greedy housing allocator
///
/// Drains applicants in priority order and assigns each the best
/// still-available house scoring at or above the acceptance floor. This is a
/// deliberate single-pass heuristic: once a house is taken it is never
/// reassigned, so a better global assignment can be left on the table. There
/// is no exchange or augmenting-path improvement step, by requirement.
#[derive(Debug, Clone)]
pub struct Allocator {
    min_match_score: f64,
}

impl Allocator {
    pub fn new(min_match_score: f64) -> Self {
        Self { min_match_score }
    }

    pub fn with_default_threshold() -> Self {
        Self {
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
        }
    }

    /// Run one greedy allocation over the supplied applicants and houses
    ///
    /// Both collections are consumed: the applicant heap and the available
    /// house pool are destroyed by the run, and a house can appear in at
    /// most one allocation.
    ///
    /// # Arguments
    /// * `applicants` - All applicants under consideration
    /// * `houses` - The available house pool
    ///
    /// # Returns
    /// AllocationRun with allocations in pop order (non-increasing priority
    /// score, modulo heap tie order). Applicants for whom no available house
    /// clears the floor receive nothing and do not block later applicants.
    pub fn allocate(&self, applicants: Vec<Applicant>, houses: Vec<House>) -> AllocationRun {
        let total_applicants = applicants.len();

        let mut queue: ApplicantHeap = applicants.into_iter().collect();

        // Sort houses by bedrooms (descending). The sort is stable, so
        // equal-bedroom houses keep their input order; that order decides
        // which house wins a score tie during the scan below.
        let mut available = houses;
        available.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms));

        let mut allocations = Vec::new();

        while let Some(applicant) = queue.pop() {
            let mut best_house: Option<usize> = None;
            let mut best_score = -1.0;

            for (i, house) in available.iter().enumerate() {
                let score = match_score(&applicant, house);
                // Strict improvement only: an equal score never displaces
                // the house found earlier in the scan order
                if score > best_score && score >= self.min_match_score {
                    best_score = score;
                    best_house = Some(i);
                }
            }

            match best_house {
                Some(i) => {
                    let house = available.remove(i);
                    tracing::debug!(
                        "Allocated {} to {} (score {:.1})",
                        house.id,
                        applicant.id,
                        best_score
                    );
                    allocations.push(Allocation {
                        applicant_id: applicant.id,
                        applicant_name: applicant.name,
                        house_id: house.id,
                        match_score: best_score,
                    });
                }
                None => {
                    // No qualifying house: the applicant is dropped for this
                    // run, with no retry and no backtracking
                    tracing::debug!("No qualifying house for {}", applicant.id);
                }
            }
        }

        AllocationRun {
            allocations,
            total_applicants,
        }
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::with_default_threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_applicants() -> Vec<Applicant> {
        vec![
            Applicant::new("APP-001", "Ali Khan", 45, 6, 15000.0),
            Applicant::new("APP-002", "Sara Ahmed", 38, 4, 12000.0),
            Applicant::new("APP-003", "Ahmed Raza", 50, 5, 10000.0),
        ]
    }

    fn sample_houses() -> Vec<House> {
        vec![
            House::new("H-101", "123 Main St", 3, 1200.0, "apartment"),
            House::new("H-102", "456 Park Rd", 4, 2000.0, "house"),
            House::new("H-103", "789 Garden Ave", 5, 2500.0, "duplex"),
        ]
    }

    #[test]
    fn test_sample_run_allocates_in_priority_order() {
        let allocator = Allocator::with_default_threshold();
        let run = allocator.allocate(sample_applicants(), sample_houses());

        assert_eq!(run.total_applicants, 3);
        assert_eq!(run.allocations.len(), 3);

        let ids: Vec<(&str, &str)> = run
            .allocations
            .iter()
            .map(|a| (a.applicant_id.as_str(), a.house_id.as_str()))
            .collect();
        assert_eq!(
            ids,
            vec![
                ("APP-003", "H-102"),
                ("APP-001", "H-101"),
                ("APP-002", "H-103"),
            ]
        );

        assert_eq!(run.allocations[0].match_score, 90.0);
        assert_eq!(run.allocations[1].match_score, 86.0);
        assert_eq!(run.allocations[2].match_score, 70.0);
    }

    #[test]
    fn test_house_allocated_at_most_once() {
        let allocator = Allocator::with_default_threshold();
        let applicants: Vec<Applicant> = (0..10)
            .map(|i| Applicant::new(&format!("APP-{:03}", i), "Dup Check", 40 + i, 4, 9000.0))
            .collect();
        let houses: Vec<House> = (0..4)
            .map(|i| House::new(&format!("H-{:03}", i), "Somewhere", 2 + i, 1000.0, "house"))
            .collect();

        let run = allocator.allocate(applicants, houses);

        let mut seen = HashSet::new();
        for allocation in &run.allocations {
            assert!(
                seen.insert(allocation.house_id.clone()),
                "house {} allocated twice",
                allocation.house_id
            );
        }
        assert!(run.allocations.len() <= 4);
    }

    #[test]
    fn test_every_allocation_clears_the_floor() {
        let allocator = Allocator::with_default_threshold();
        let run = allocator.allocate(sample_applicants(), sample_houses());

        for allocation in &run.allocations {
            assert!(allocation.match_score >= DEFAULT_MIN_MATCH_SCORE);
        }
    }

    #[test]
    fn test_unmatched_applicant_does_not_block_others() {
        let allocator = Allocator::with_default_threshold();
        // Family of 12 wants 6 bedrooms; a 1br shack scores 50 and misses
        // the floor, while the family of 2 fits it comfortably
        let applicants = vec![
            Applicant::new("APP-BIG", "Large Family", 70, 12, 5000.0),
            Applicant::new("APP-SMALL", "Small Family", 30, 2, 15000.0),
        ];
        let houses = vec![House::new("H-SHACK", "9 Tiny Ct", 1, 600.0, "cabin")];

        let run = allocator.allocate(applicants, houses);

        assert_eq!(run.allocations.len(), 1);
        assert_eq!(run.allocations[0].applicant_id, "APP-SMALL");
    }

    #[test]
    fn test_no_houses_yields_empty_run() {
        let allocator = Allocator::with_default_threshold();
        let run = allocator.allocate(sample_applicants(), vec![]);

        assert_eq!(run.total_applicants, 3);
        assert!(run.allocations.is_empty());
    }

    #[test]
    fn test_score_tie_goes_to_first_in_scan_order() {
        let allocator = Allocator::with_default_threshold();
        // Two identical houses; with equal bedrooms the stable sort keeps
        // input order, and strict improvement keeps the first one scanned
        let applicants = vec![Applicant::new("APP-001", "Tie Breaker", 45, 4, 9000.0)];
        let houses = vec![
            House::new("H-FIRST", "1 First St", 2, 900.0, "house"),
            House::new("H-SECOND", "2 Second St", 2, 900.0, "house"),
        ];

        let run = allocator.allocate(applicants, houses);

        assert_eq!(run.allocations.len(), 1);
        assert_eq!(run.allocations[0].house_id, "H-FIRST");
    }

    #[test]
    fn test_greedy_takes_best_for_highest_priority_first() {
        let allocator = Allocator::with_default_threshold();
        // The higher-priority applicant takes the house that is also best
        // for the lower-priority one; greedy never revisits that choice
        let applicants = vec![
            Applicant::new("APP-HIGH", "High Priority", 62, 4, 8000.0),
            Applicant::new("APP-LOW", "Low Priority", 30, 4, 19000.0),
        ];
        let houses = vec![
            House::new("H-GOOD", "10 Best Ave", 3, 2000.0, "house"),
            House::new("H-OKAY", "11 Okay Ave", 3, 700.0, "house"),
        ];

        let run = allocator.allocate(applicants, houses);

        assert_eq!(run.allocations.len(), 2);
        assert_eq!(run.allocations[0].applicant_id, "APP-HIGH");
        assert_eq!(run.allocations[0].house_id, "H-GOOD");
        assert_eq!(run.allocations[1].applicant_id, "APP-LOW");
        assert_eq!(run.allocations[1].house_id, "H-OKAY");
    }
}
