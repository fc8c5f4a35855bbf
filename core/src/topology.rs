// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board topology: the fixed 23-vertex graph, its capture edges, and the
//! precomputed middle position of every capture jump.
//!
//! Rows are numbered 1 to 5, columns A to F; every row has a differing
//! number of columns. Rules of the game:
//! <https://en.wikipedia.org/wiki/Lambs_and_Tigers>

use std::collections::HashMap;

use crate::{Pos, TopologyError};

/// Directed seed edges traversable by either side in a single step.
/// Reverse edges are synthesized at construction.
const COMMON_EDGES: &[(&str, &[&str])] = &[
    ("1A", &["2B", "2C", "2D", "2E"]),
    ("2A", &["2B", "3A"]),
    ("2B", &["2C", "3B"]),
    ("2C", &["2D", "3C"]),
    ("2D", &["2E", "3D"]),
    ("2E", &["2F", "3E"]),
    ("2F", &["3F"]),
    ("3A", &["3B", "4A"]),
    ("3B", &["3C", "4B"]),
    ("3C", &["3D", "4C"]),
    ("3D", &["3E", "4D"]),
    ("3E", &["3F", "4E"]),
    ("3F", &["4F"]),
    ("4A", &["4B"]),
    ("4B", &["4C", "5A"]),
    ("4C", &["4D", "5B"]),
    ("4D", &["4E", "5C"]),
    ("4E", &["4F", "5D"]),
    ("5A", &["5B"]),
    ("5B", &["5C"]),
    ("5C", &["5D"]),
];

/// Directed seed edges for tiger capture jumps.
const CAPTURE_EDGES: &[(&str, &[&str])] = &[
    ("1A", &["3B", "3C", "3D", "3E"]),
    ("2A", &["2C", "4A"]),
    ("2B", &["2D", "4B"]),
    ("2C", &["2E", "4C"]),
    ("2D", &["4D", "2F"]),
    ("2E", &["4E"]),
    ("2F", &["4F"]),
    ("3A", &["3C"]),
    ("3B", &["3D", "5A"]),
    ("3C", &["3E", "5B"]),
    ("3D", &["3F", "5C"]),
    ("3E", &["5D"]),
    ("4A", &["4C"]),
    ("4B", &["4D"]),
    ("4C", &["4E"]),
    ("4D", &["4F"]),
    ("5A", &["5C"]),
    ("5B", &["5D"]),
];

/// Immutable board connectivity, constructed once and shared read-only.
#[derive(Debug, Clone)]
pub struct Topology {
    positions: Vec<Pos>,
    common: HashMap<Pos, Vec<Pos>>,
    capture: HashMap<Pos, Vec<Pos>>,
    middles: HashMap<(Pos, Pos), Pos>,
}

impl Topology {
    /// Build the standard Tiger and Goat board and run the startup
    /// self-check. Failure means the fixed edge tables are wrong.
    pub fn standard() -> Result<Self, TopologyError> {
        let common = parse_edges(COMMON_EDGES)?;
        let capture = parse_edges(CAPTURE_EDGES)?;

        let mut middles = HashMap::new();
        for (&from, targets) in &capture {
            for &to in targets {
                middles.insert((from, to), middle_of(from, to));
            }
        }

        let mut positions: Vec<Pos> = common.keys().copied().collect();
        positions.sort();

        let topology = Self {
            positions,
            common,
            capture,
            middles,
        };
        topology.validate()?;
        Ok(topology)
    }

    /// All 23 board vertices, in sorted order.
    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    /// Single-step neighbors of a vertex, usable by either side.
    pub fn neighbors(&self, pos: Pos) -> &[Pos] {
        self.common.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Capture-jump targets from a vertex, tiger only.
    pub fn jumps(&self, pos: Pos) -> &[Pos] {
        self.capture.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The vertex a tiger jumps over when capturing along `from -> to`.
    pub fn middle(&self, from: Pos, to: Pos) -> Option<Pos> {
        self.middles.get(&(from, to)).copied()
    }

    /// Whether `from -> to` is a single-step edge.
    pub fn is_common_edge(&self, from: Pos, to: Pos) -> bool {
        self.neighbors(from).contains(&to)
    }

    /// Whether `from -> to` is a capture edge.
    pub fn is_capture_edge(&self, from: Pos, to: Pos) -> bool {
        self.jumps(from).contains(&to)
    }

    /// Startup self-check: both edge relations are symmetric, every capture
    /// edge has a middle, and every middle is itself a board vertex with
    /// `middle(a, b) == middle(b, a)`.
    fn validate(&self) -> Result<(), TopologyError> {
        for edges in [&self.common, &self.capture] {
            for (&from, targets) in edges {
                for &to in targets {
                    let reversed = edges.get(&to).map_or(false, |back| back.contains(&from));
                    if !reversed {
                        return Err(TopologyError::AsymmetricEdge { from, to });
                    }
                }
            }
        }

        for (&from, targets) in &self.capture {
            for &to in targets {
                let middle = self
                    .middle(from, to)
                    .ok_or(TopologyError::MissingMiddle { from, to })?;
                if !self.positions.contains(&middle) {
                    return Err(TopologyError::MiddleOffBoard { from, to, middle });
                }
                if self.middle(to, from) != Some(middle) {
                    return Err(TopologyError::MissingMiddle { from: to, to: from });
                }
            }
        }

        Ok(())
    }
}

/// Parse a seed table and synthesize the reverse of every directed edge,
/// yielding a symmetric adjacency relation.
fn parse_edges(seed: &[(&str, &[&str])]) -> Result<HashMap<Pos, Vec<Pos>>, TopologyError> {
    let mut edges: HashMap<Pos, Vec<Pos>> = HashMap::new();
    for (from, targets) in seed {
        let from: Pos = from.parse()?;
        for to in *targets {
            let to: Pos = to.parse()?;
            edges.entry(from).or_default().push(to);
        }
    }

    let mut reversed: Vec<(Pos, Pos)> = Vec::new();
    for (&from, targets) in &edges {
        for &to in targets {
            reversed.push((to, from));
        }
    }

    for (from, to) in reversed {
        let targets = edges.entry(from).or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    Ok(edges)
}

/// Middle vertex of a capture jump, derived from board geometry:
/// - either endpoint on the apex row (1): one row inward from the other
///   endpoint, same column;
/// - crossing the outer row (5): one row outward from the inner endpoint,
///   same column;
/// - same row: the column between the endpoints;
/// - same column line: the row between the endpoints.
fn middle_of(from: Pos, to: Pos) -> Pos {
    if from.row() == 1 || to.row() == 1 {
        let other = if from.row() == 1 { to } else { from };
        return Pos::new(other.row() - 1, other.col());
    }

    if (from.row() == 5 || to.row() == 5) && from.row() != to.row() {
        let other = if from.row() == 5 { to } else { from };
        return Pos::new(other.row() + 1, other.col());
    }

    if from.row() == to.row() {
        let min = if from.col() < to.col() { from } else { to };
        Pos::new(min.row(), min.col() + 1)
    } else {
        let min = if from.row() < to.row() { from } else { to };
        Pos::new(min.row() + 1, min.col())
    }
}
