use std::collections::{HashMap, HashSet, VecDeque};

/// Outgoing edge to a neighboring house
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub destination: String,
    pub distance: f64,
}

/// Undirected weighted graph of house locations
///
/// Keyed by house identifier; every edge insertion adds both directions
/// with the same weight.
#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    adjacency: HashMap<String, Vec<Edge>>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Add an undirected edge between two houses
    pub fn add_edge(&mut self, house1: &str, house2: &str, distance: f64) {
        self.adjacency
            .entry(house1.to_string())
            .or_default()
            .push(Edge {
                destination: house2.to_string(),
                distance,
            });
        self.adjacency
            .entry(house2.to_string())
            .or_default()
            .push(Edge {
                destination: house1.to_string(),
                distance,
            });
    }

    /// Whether a house id has any recorded edges
    pub fn contains(&self, house: &str) -> bool {
        self.adjacency.contains_key(house)
    }

    /// Number of houses with at least one edge
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Find houses reachable from `start` within a distance budget
    ///
    /// Traversal is plain FIFO breadth-first, not a shortest-path search:
    /// each node is finalized with the cumulative distance of whichever
    /// path dequeued it first in BFS order, and is never re-examined even
    /// if a shorter route to it exists. A node dequeued over budget is
    /// skipped without being marked visited, so a later, shorter queue
    /// entry may still admit it. These are long-standing quirks of the
    /// allocation system's location analysis and are kept as-is; callers
    /// wanting true minimum-distance semantics would need a cost-ordered
    /// frontier instead.
    ///
    /// The start house is never part of the result. An unknown start id
    /// yields an empty result. Results come back in discovery order.
    pub fn find_nearby(&self, start: &str, max_distance: f64) -> Vec<String> {
        let mut nearby = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, f64)> = VecDeque::new();

        queue.push_back((start.to_string(), 0.0));

        while let Some((house, distance)) = queue.pop_front() {
            // Budget check comes before the visited check and does not
            // mark the node; a cheaper queue entry may still admit it
            if distance > max_distance {
                continue;
            }
            if visited.contains(&house) {
                continue;
            }

            visited.insert(house.clone());
            if house != start {
                nearby.push(house.clone());
            }

            if let Some(edges) = self.adjacency.get(&house) {
                for edge in edges {
                    if !visited.contains(&edge.destination) {
                        queue.push_back((edge.destination.clone(), distance + edge.distance));
                    }
                }
            }
        }

        nearby
    }
}
