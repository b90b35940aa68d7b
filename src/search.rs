//! Best-first search over boards.
//!
//! Every node the search creates lives in a [`SearchTree`] arena until the
//! search returns; nodes refer to their parent by index. The open set is a
//! plain vector scanned linearly so that, among equal evaluations, the
//! entry that was added first is always selected first.

use std::{collections::HashSet, ops::Index};

use itertools::Itertools;
use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::{
    board::Board,
    error::{Error, Result, Unsolvable},
    heuristic::Evaluator,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct Node {
    pub board: Board,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
}

/// Arena owning every node created during one search.
#[derive(Clone, Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn insert(&mut self, board: Board, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            board,
            parent,
            children: SmallVec::new(),
        });
        id
    }

    /// Creates one child per feasible move of `id` and records them as its
    /// children.
    pub fn expand(&mut self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let board = self[id].board;
        let children: SmallVec<[NodeId; 4]> = board
            .feasible_moves()
            .into_iter()
            .flatten()
            .map(|tile| self.insert(board.apply_move(tile), Some(id)))
            .collect();

        self.nodes[id.0].children.extend(children.iter().copied());
        children
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&n| self[n].parent)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for SearchTree {
    type Output = Node;
    fn index(&self, index: NodeId) -> &Self::Output {
        &self.nodes[index.0]
    }
}

/// What to do with a child whose board is already waiting in the open set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Append it anyway, so the open set may hold the same board several
    /// times.
    #[default]
    Literal,
    /// Keep a single entry per board, replacing it only when the child has
    /// a strictly lower cost proxy.
    Dedup,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub policy: DuplicatePolicy,
    /// Give up after this many expansions.
    pub expansion_limit: Option<usize>,
    /// Reject parity-mismatched pairs before searching.
    pub check_parity: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            policy: DuplicatePolicy::default(),
            expansion_limit: None,
            check_parity: true,
        }
    }
}

impl SearchConfig {
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_expansion_limit(mut self, limit: Option<usize>) -> Self {
        self.expansion_limit = limit;
        self
    }

    pub fn with_parity_check(mut self, check: bool) -> Self {
        self.check_parity = check;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    node: NodeId,
    board: Board,
    cost: u32,
    eval: u32,
}

impl OpenEntry {
    fn new(node: NodeId, board: Board, evaluator: &Evaluator) -> Self {
        let cost = evaluator.cost_proxy(&board);
        OpenEntry {
            node,
            board,
            cost,
            eval: cost + evaluator.heuristic(&board),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Admission {
    Closed,
    Appended,
    Replaced,
    Kept,
}

/// The open and closed sets.
#[derive(Debug, Default)]
struct Frontier {
    open: Vec<OpenEntry>,
    closed: Vec<NodeId>,
    closed_boards: HashSet<Board>,
}

impl Frontier {
    /// Removes the first entry with the lowest evaluation.
    fn pop_best(&mut self) -> Option<OpenEntry> {
        let ix = self.open.iter().position_min_by_key(|e| e.eval)?;
        Some(self.open.remove(ix))
    }

    fn close(&mut self, entry: &OpenEntry) {
        self.closed.push(entry.node);
        self.closed_boards.insert(entry.board);
    }

    fn is_closed(&self, board: &Board) -> bool {
        self.closed_boards.contains(board)
    }

    fn admit(&mut self, entry: OpenEntry, policy: DuplicatePolicy) -> Admission {
        if self.is_closed(&entry.board) {
            return Admission::Closed;
        }

        if policy == DuplicatePolicy::Dedup {
            if let Some(existing) = self.open.iter_mut().find(|e| e.board == entry.board) {
                if entry.cost < existing.cost {
                    *existing = entry;
                    return Admission::Replaced;
                }
                return Admission::Kept;
            }
        }

        self.open.push(entry);
        Admission::Appended
    }
}

/// A successful search: the tree it built and the node holding the goal.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub tree: SearchTree,
    pub goal: NodeId,
    /// Children created across all expansions.
    pub nodes_produced: usize,
    pub nodes_expanded: usize,
}

/// Runs the best-first search from `initial` until `goal` is selected.
pub fn search(initial: &Board, goal: &Board, config: &SearchConfig) -> Result<SearchOutcome> {
    if config.check_parity && !initial.can_reach(goal) {
        return Err(Error::NoSolutionFound {
            reason: Unsolvable::ParityMismatch,
        });
    }

    info!("searching with {:?}", config);

    let evaluator = Evaluator::new(initial, goal);
    let mut tree = SearchTree::default();
    let mut frontier = Frontier::default();

    let root = tree.insert(*initial, None);
    frontier.open.push(OpenEntry::new(root, *initial, &evaluator));

    let mut nodes_produced = 0;
    let mut nodes_expanded = 0;

    while let Some(current) = frontier.pop_best() {
        frontier.close(&current);

        if current.board == *goal {
            info!(
                "goal selected after {} expansions ({} nodes produced)",
                nodes_expanded, nodes_produced
            );
            return Ok(SearchOutcome {
                tree,
                goal: current.node,
                nodes_produced,
                nodes_expanded,
            });
        }

        if let Some(limit) = config.expansion_limit {
            if nodes_expanded >= limit {
                return Err(Error::ExpansionLimit { limit });
            }
        }

        let children = tree.expand(current.node);
        nodes_expanded += 1;
        nodes_produced += children.len();
        trace!(
            "expanded {:?} (f = {}) into {} children",
            current.node,
            current.eval,
            children.len()
        );

        for child in children {
            let entry = OpenEntry::new(child, tree[child].board, &evaluator);
            let admission = frontier.admit(entry, config.policy);
            trace!("child {:?}: {:?}", child, admission);
        }

        if nodes_expanded % 10_000 == 0 {
            debug!(
                "{} expansions: open = {}, closed = {}, tree = {}",
                nodes_expanded,
                frontier.open.len(),
                frontier.closed.len(),
                tree.len()
            );
        }
    }

    Err(Error::NoSolutionFound {
        reason: Unsolvable::Exhausted {
            expanded: nodes_expanded,
        },
    })
}
