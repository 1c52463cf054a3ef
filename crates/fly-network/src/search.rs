//! Randomized depth/cost-bounded path search.
//!
//! The workhorse under both engines: bee scouts and foragers call it
//! directly; the ant engine explores the same graph through its own
//! event-driven walk but shares the feasibility rules encoded here.
//!
//! # Algorithm
//!
//! Iterative depth-first search.  Each frame tries its airport's outgoing
//! flights in a fresh uniformly random permutation and *descends
//! immediately* on the first acceptable one; backtracking resumes the
//! permutation where it left off.  Repeated invocations with one advancing
//! RNG therefore sample different corners of the itinerary space — a
//! direct flight is only one of the orderings, not a guaranteed first hit.
//! Revisits are pruned by an *improvement* test on arrival time rather
//! than a visited set: a later push may supersede an earlier one whenever
//! it reaches the airport strictly earlier.  The first flight to land on
//! the target wins; the path is reconstructed immediately from parent
//! flights.

use fly_core::{AirportId, FlightId, SearchRng, Stamp};

use crate::network::FlightNetwork;

// ── SearchBounds ─────────────────────────────────────────────────────────────

/// Per-invocation search limits.
#[derive(Copy, Clone, Debug)]
pub struct SearchBounds {
    /// Maximum number of flight legs (edges) in the path.
    pub max_depth: usize,
    /// Maximum cumulative ticket price.
    pub max_cost: f64,
    /// Floor under every airport's own transfer time, in minutes.  Zero
    /// leaves the per-airport values untouched.
    pub min_transfer: i64,
}

impl SearchBounds {
    pub fn new(max_depth: usize, max_cost: f64) -> Self {
        Self { max_depth, max_cost, min_transfer: 0 }
    }

    pub fn with_min_transfer(mut self, minutes: i64) -> Self {
        self.min_transfer = minutes;
        self
    }
}

// ── Search ───────────────────────────────────────────────────────────────────

/// One DFS frame: where we are, what the partial path has consumed, and how
/// far into this airport's shuffled candidate list the search has advanced.
struct Frame {
    /// Earliest usable departure: arrival plus transfer slack.
    usable: Stamp,
    depth: usize,
    spent: f64,
    candidates: Vec<FlightId>,
    cursor: usize,
}

impl Frame {
    fn open(
        net: &FlightNetwork,
        rng: &mut SearchRng,
        airport: AirportId,
        at: Stamp,
        depth: usize,
        spent: f64,
        min_transfer: i64,
    ) -> Frame {
        let slack = net.airport(airport).transfer_minutes.max(min_transfer);
        let mut candidates: Vec<FlightId> = net.out_flights(airport).collect();
        rng.shuffle(&mut candidates);
        Frame { usable: at + slack, depth, spent, candidates, cursor: 0 }
    }
}

/// Find a feasible flight sequence from `source` to `target` no earlier
/// than `start`, or `None` if the bounded search space holds none.
///
/// `source == target` is the trivial itinerary: `Some(vec![])`.
pub fn random_search(
    net: &FlightNetwork,
    rng: &mut SearchRng,
    source: AirportId,
    target: AirportId,
    start: Stamp,
    bounds: SearchBounds,
) -> Option<Vec<FlightId>> {
    if source == target {
        return Some(Vec::new());
    }

    let n = net.airport_count();

    // Best (earliest) known arrival per airport.  The far-future sentinel
    // means every airport can be improved at least once.
    let mut best_arrival = vec![Stamp::MAX; n];
    // Flight that last improved each airport, for path reconstruction.
    let mut parent = vec![FlightId::INVALID; n];

    let mut stack = vec![Frame::open(net, rng, source, start, 0, 0.0, bounds.min_transfer)];

    while let Some(frame) = stack.last_mut() {
        let mut advanced = None;
        while let Some(&fid) = frame.candidates.get(frame.cursor) {
            frame.cursor += 1;
            let f = net.flight(fid);

            if f.departure < frame.usable {
                continue;
            }
            if best_arrival[f.destination.index()] <= f.arrival {
                continue; // no improvement over a previously found route
            }
            if frame.depth + 1 > bounds.max_depth {
                continue;
            }
            let spent = frame.spent + f.price;
            if spent > bounds.max_cost {
                continue;
            }

            best_arrival[f.destination.index()] = f.arrival;
            parent[f.destination.index()] = fid;
            advanced = Some((fid, frame.depth + 1, spent));
            break;
        }

        match advanced {
            // Permutation exhausted: backtrack.
            None => {
                stack.pop();
            }
            Some((fid, depth, spent)) => {
                let f = net.flight(fid);
                if f.destination == target {
                    return Some(reconstruct(net, &parent, source, target));
                }
                stack.push(Frame::open(
                    net, rng, f.destination, f.arrival, depth, spent, bounds.min_transfer,
                ));
            }
        }
    }

    None
}

/// Walk parent flights backward from `target` until `source`, then reverse.
///
/// Termination: every recorded improvement strictly lowers an airport's best
/// arrival, and each parent flight departs after its origin's best arrival,
/// so times strictly decrease along the walk — the chain cannot cycle.
fn reconstruct(
    net: &FlightNetwork,
    parent: &[FlightId],
    source: AirportId,
    target: AirportId,
) -> Vec<FlightId> {
    let mut legs = Vec::new();
    let mut at = target;
    while at != source {
        let fid = parent[at.index()];
        debug_assert!(fid != FlightId::INVALID, "broken parent chain at {at}");
        legs.push(fid);
        at = net.flight(fid).origin;
    }
    legs.reverse();
    legs
}
