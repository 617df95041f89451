//! Lane assignment for concurrent events in one day column.

use chrono::{DateTime, Duration, Utc};

use crate::models::event::CalendarEvent;
use crate::models::layout::LaneAssignment;
use crate::models::settings::LaneStrategy;

/// Assign a lane to every event. The result is parallel to `events`.
pub fn assign_lanes(
    events: &[&CalendarEvent],
    strategy: LaneStrategy,
    default_duration: Duration,
) -> Vec<LaneAssignment> {
    match strategy {
        LaneStrategy::PerEvent => per_event_lanes(events, default_duration),
        LaneStrategy::Clustered => clustered_lanes(events, default_duration),
    }
}

/// Each event counts its own overlaps. Cheap, but two members of a chain
/// of overlaps (A-B, B-C) can end up with different lane counts.
fn per_event_lanes(events: &[&CalendarEvent], default_duration: Duration) -> Vec<LaneAssignment> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let overlapping: Vec<&CalendarEvent> = events
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && event.overlaps(other, default_duration))
                .map(|(_, other)| *other)
                .collect();

            let lane_index = overlapping
                .iter()
                .filter(|other| other.id < event.id)
                .count();

            LaneAssignment {
                lane_index,
                total_lanes: overlapping.len() + 1,
            }
        })
        .collect()
}

/// Group events into overlap clusters, then pack each cluster greedily in
/// (start, id) order. Every member of a cluster gets the cluster's lane count.
fn clustered_lanes(events: &[&CalendarEvent], default_duration: Duration) -> Vec<LaneAssignment> {
    let mut clusters = DisjointSet::new(events.len());
    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            if events[i].overlaps(events[j], default_duration) {
                clusters.union(i, j);
            }
        }
    }

    let mut assignments = vec![LaneAssignment::SOLO; events.len()];

    for members in clusters.groups() {
        let mut ordered = members;
        ordered.sort_by(|&a, &b| {
            events[a]
                .start_time
                .cmp(&events[b].start_time)
                .then_with(|| events[a].id.cmp(&events[b].id))
                .then_with(|| a.cmp(&b))
        });

        // End of the last event placed in each lane.
        let mut lane_ends: Vec<DateTime<Utc>> = Vec::new();
        let mut lane_of = Vec::with_capacity(ordered.len());

        for &idx in &ordered {
            let event = events[idx];
            let end = event.effective_end(default_duration);
            let lane = match lane_ends.iter().position(|&lane_end| lane_end <= event.start_time) {
                Some(free) => {
                    lane_ends[free] = end;
                    free
                }
                None => {
                    lane_ends.push(end);
                    lane_ends.len() - 1
                }
            };
            lane_of.push((idx, lane));
        }

        let total_lanes = lane_ends.len();
        for (idx, lane_index) in lane_of {
            assignments[idx] = LaneAssignment {
                lane_index,
                total_lanes,
            };
        }
    }

    assignments
}

/// Union-find over event indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Smaller root wins so groups come out in a stable order.
            let (keep, merge) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[merge] = keep;
        }
    }

    /// Member indices per group, groups ordered by their smallest member.
    fn groups(&mut self) -> Vec<Vec<usize>> {
        let mut by_root: Vec<Vec<usize>> = vec![Vec::new(); self.parent.len()];
        for i in 0..self.parent.len() {
            let root = self.find(i);
            by_root[root].push(i);
        }
        by_root.into_iter().filter(|g| !g.is_empty()).collect()
    }
}
