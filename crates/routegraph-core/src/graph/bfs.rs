use crate::graph::types::{NodeIdx, PathRecord};
use crate::graph::GraphProvider;
use std::collections::VecDeque;
use tracing::debug;

/// A partial walk waiting in the work queue
struct Walk {
    node: NodeIdx,
    path: Vec<NodeIdx>,
    cost: u64,
}

impl Walk {
    fn extend(&self, next: NodeIdx, weight: u32) -> Walk {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);
        Walk {
            node: next,
            path,
            cost: self.cost + u64::from(weight),
        }
    }

    fn to_record(&self, provider: &dyn GraphProvider) -> PathRecord {
        PathRecord {
            path: self
                .path
                .iter()
                .map(|idx| provider.node_id(*idx).to_string())
                .collect(),
            cost: self.cost,
        }
    }
}

/// Enumerate every walk from `start` that reaches `destination`.
///
/// Breadth-first over walks (revisits allowed), seeded with the zero-length
/// walk `[start]`. A walk is recorded each time it stands on `destination`,
/// including the trivial walk when `start == destination`. Walks longer than
/// `max_path_length` nodes are not extended, so the bound is what guarantees
/// termination on cyclic graphs.
pub fn bfs_find_paths(
    provider: &dyn GraphProvider,
    start: NodeIdx,
    destination: NodeIdx,
    max_path_length: usize,
) -> Vec<PathRecord> {
    let mut queue: VecDeque<Walk> = VecDeque::new();
    let mut found = Vec::new();
    let mut expanded: usize = 0;

    queue.push_back(Walk {
        node: start,
        path: vec![start],
        cost: 0,
    });

    while let Some(walk) = queue.pop_front() {
        if walk.node == destination {
            found.push(walk.to_record(provider));
        }

        if walk.path.len() > max_path_length {
            continue;
        }

        expanded += 1;
        for dest in provider.outbound(walk.node) {
            queue.push_back(walk.extend(dest.node, dest.weight));
        }
    }

    debug!(expanded, found = found.len(), max_path_length, "bfs_find_paths");
    found
}
