//! Cycle detection and topological ordering over the inheritance graph.

const UNVISITED: usize = usize::MAX;

/// Result of walking the child → supers adjacency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Walk {
    /// Post-order: every node after all of its supers.
    pub order: Vec<usize>,
    /// One entry per strongly connected component that contains a cycle,
    /// members in discovery order.
    pub cycles: Vec<Vec<usize>>,
    pub in_cycle: Vec<bool>,
}

struct Marks {
    discovered: Vec<usize>,
    low: Vec<usize>,
    /// Visited but its component is not closed yet.
    open: Vec<bool>,
    /// Open nodes in discovery order.
    pending: Vec<usize>,
    next_index: usize,
}

impl Marks {
    fn enter(&mut self, node: usize, stack: &mut Vec<(usize, usize)>) {
        self.discovered[node] = self.next_index;
        self.low[node] = self.next_index;
        self.next_index += 1;
        self.open[node] = true;
        self.pending.push(node);
        stack.push((node, 0));
    }

    /// Close the component rooted at `node`, returning its members.
    fn close(&mut self, node: usize) -> Vec<usize> {
        let at = self.pending.iter().rposition(|&n| n == node).unwrap_or(0);
        let members = self.pending.split_off(at);
        for &m in &members {
            self.open[m] = false;
        }
        members
    }
}

/// Iterative Tarjan walk over `supers` (indexed by node).
///
/// Roots are taken in index order and edges in list order, so the result is
/// deterministic. A component is a cycle when it has more than one member
/// or its only member lists itself as a super.
pub(crate) fn walk(supers: &[Vec<usize>]) -> Walk {
    let count = supers.len();
    let mut marks = Marks {
        discovered: vec![UNVISITED; count],
        low: vec![0; count],
        open: vec![false; count],
        pending: Vec::new(),
        next_index: 0,
    };
    let mut walk = Walk {
        order: Vec::with_capacity(count),
        cycles: Vec::new(),
        in_cycle: vec![false; count],
    };

    for root in 0..count {
        if marks.discovered[root] != UNVISITED {
            continue;
        }
        // (node, next edge to follow)
        let mut stack: Vec<(usize, usize)> = Vec::new();
        marks.enter(root, &mut stack);

        while let Some(&(node, edge)) = stack.last() {
            if let Some(&next) = supers[node].get(edge) {
                if let Some(top) = stack.last_mut() {
                    top.1 += 1;
                }
                if marks.discovered[next] == UNVISITED {
                    marks.enter(next, &mut stack);
                } else if marks.open[next] {
                    marks.low[node] = marks.low[node].min(marks.discovered[next]);
                }
                continue;
            }

            stack.pop();
            walk.order.push(node);
            if let Some(&(parent, _)) = stack.last() {
                marks.low[parent] = marks.low[parent].min(marks.low[node]);
            }
            if marks.low[node] != marks.discovered[node] {
                continue;
            }

            let members = marks.close(node);
            if members.len() > 1 || supers[node].contains(&node) {
                for &m in &members {
                    walk.in_cycle[m] = true;
                }
                walk.cycles.push(members);
            }
        }
    }

    walk
}
