// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::model::ids::StepId;

use super::branching::sorted_next_nodes;
use super::graph::StepGraph;
use super::grid::GridCoord;
use super::matrix::Matrix;
use super::tile::Tile;
use super::LayoutError;

/// Coordinate bookkeeping produced by the placement traversal and consumed
/// by the connector router.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Placements {
    node_coords: BTreeMap<StepId, GridCoord>,
    parent_coords: BTreeMap<StepId, Vec<GridCoord>>,
    parent_ids: BTreeMap<StepId, Vec<StepId>>,
}

impl Placements {
    pub fn node_coords(&self) -> &BTreeMap<StepId, GridCoord> {
        &self.node_coords
    }

    /// Coordinates of every parent that discovered the node, in discovery
    /// order.
    pub fn parent_coords(&self) -> &BTreeMap<StepId, Vec<GridCoord>> {
        &self.parent_coords
    }

    pub fn parent_ids(&self) -> &BTreeMap<StepId, Vec<StepId>> {
        &self.parent_ids
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        BTreeMap<StepId, GridCoord>,
        BTreeMap<StepId, Vec<GridCoord>>,
        BTreeMap<StepId, Vec<StepId>>,
    ) {
        (self.node_coords, self.parent_coords, self.parent_ids)
    }
}

/// A queued node keyed by the fraction `order + child_index / sibling_count`.
///
/// The fraction is compared exactly by cross-multiplication, no floats, so
/// primary/left branches always dequeue before later siblings while overall
/// ordering follows step order. `seq` breaks exact ties in insertion order.
#[derive(Debug, Clone)]
struct QueueEntry {
    numerator: u64,
    denominator: u64,
    seq: u64,
    step_id: StepId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        let left = (self.numerator as u128) * (other.denominator as u128);
        let right = (other.numerator as u128) * (self.denominator as u128);
        left.cmp(&right).then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority-first BFS over the step graph, assigning each reachable node to
/// a grid cell.
///
/// A node's column is `order * 2`. Its row is the first unoccupied row in
/// that column, or, when parents are already placed, the larger of the
/// lowest-rowed parent's row and the first unoccupied row. A target cell
/// that is not a placeholder fails fast instead of overwriting.
pub(crate) fn place_nodes(
    graph: &StepGraph,
    matrix: &mut Matrix,
) -> Result<Placements, LayoutError> {
    let mut placements = Placements::default();

    let mut seq = 0u64;
    let mut queue = BinaryHeap::new();
    queue.push(Reverse(QueueEntry {
        numerator: 0,
        denominator: 1,
        seq,
        step_id: graph.first_node_id().clone(),
    }));
    let mut enqueued = BTreeSet::new();
    enqueued.insert(graph.first_node_id().clone());

    while let Some(Reverse(entry)) = queue.pop() {
        let step_id = entry.step_id;
        let node = graph
            .nodes()
            .get(&step_id)
            .expect("enqueued ids come from the validated graph");

        let col = node.order() as usize * 2;
        let anchor_row = placements
            .parent_coords
            .get(&step_id)
            .and_then(|coords| coords.iter().map(GridCoord::row).min());
        let row = match (anchor_row, matrix.first_unoccupied_row(col)) {
            (Some(anchor), Some(first_free)) => anchor.max(first_free),
            (None, Some(first_free)) => first_free,
            (_, None) => return Err(LayoutError::ColumnExhausted { step_id, col }),
        };
        let coord = GridCoord::new(col, row);

        let target = matrix
            .tile(coord)
            .expect("target row within allocated matrix");
        if !target.is_placeholder() {
            return Err(LayoutError::PlacementCollision { step_id, coord });
        }

        let container = matrix
            .column_container(col)
            .expect("node column within allocated matrix");
        matrix.set(Tile::node(step_id.clone(), container, coord));
        placements.node_coords.insert(step_id.clone(), coord);

        let sorted = sorted_next_nodes(node, graph.nodes());
        let sibling_count = sorted.len() as u64;
        for (index, next_id) in sorted.into_iter().enumerate() {
            placements
                .parent_coords
                .entry(next_id.clone())
                .or_default()
                .push(coord);
            placements
                .parent_ids
                .entry(next_id.clone())
                .or_default()
                .push(step_id.clone());

            if enqueued.insert(next_id.clone()) {
                let order = graph
                    .nodes()
                    .get(&next_id)
                    .expect("successors validated against the graph")
                    .order() as u64;
                seq += 1;
                queue.push(Reverse(QueueEntry {
                    numerator: order * sibling_count + index as u64,
                    denominator: sibling_count,
                    seq,
                    step_id: next_id,
                }));
            }
        }
    }

    Ok(placements)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use smallvec::smallvec;

    use super::{place_nodes, QueueEntry};
    use crate::layout::graph::{build_step_graph, StepGraph};
    use crate::layout::grid::GridCoord;
    use crate::layout::matrix::Matrix;
    use crate::layout::LayoutError;
    use crate::model::fixtures::{forked_workflow, linear_workflow, sid, wide_fork_workflow};
    use crate::model::{NextNode, NodeType, StepId, WorkflowStepNode};

    fn entry(numerator: u64, denominator: u64, seq: u64) -> QueueEntry {
        QueueEntry {
            numerator,
            denominator,
            seq,
            step_id: sid("x"),
        }
    }

    #[test]
    fn queue_entries_compare_as_exact_fractions() {
        // 2 + 1/3 < 2 + 1/2
        assert!(entry(7, 3, 0) < entry(5, 2, 1));
        // 3/1 == 6/2, insertion order decides
        assert!(entry(3, 1, 0) < entry(6, 2, 1));
        assert!(entry(3, 1, 2) > entry(6, 2, 1));
    }

    #[test]
    fn linear_workflow_places_every_node_on_row_zero() {
        let (workflow_id, steps) = linear_workflow();
        let graph = build_step_graph(&workflow_id, &steps).expect("graph");
        let mut matrix = Matrix::allocate(&graph);
        let placements = place_nodes(&graph, &mut matrix).expect("placements");

        let coords = placements.node_coords();
        assert_eq!(coords.get(&sid("wf-linear-auth")), Some(&GridCoord::new(0, 0)));
        assert_eq!(coords.get(&sid("draft")), Some(&GridCoord::new(2, 0)));
        assert_eq!(coords.get(&sid("review")), Some(&GridCoord::new(4, 0)));
        assert_eq!(coords.get(&sid("approve")), Some(&GridCoord::new(6, 0)));
        assert_eq!(coords.get(&sid("publish")), Some(&GridCoord::new(8, 0)));
    }

    #[test]
    fn fork_branches_stack_down_the_shared_column() {
        let (workflow_id, steps) = forked_workflow();
        let graph = build_step_graph(&workflow_id, &steps).expect("graph");
        let mut matrix = Matrix::allocate(&graph);
        let placements = place_nodes(&graph, &mut matrix).expect("placements");

        let coords = placements.node_coords();
        // Primary branch keeps row 0, the alternate drops to row 1, and the
        // reconverged tail anchors back on the primary row.
        assert_eq!(coords.get(&sid("translate")), Some(&GridCoord::new(4, 0)));
        assert_eq!(coords.get(&sid("machine")), Some(&GridCoord::new(4, 1)));
        assert_eq!(coords.get(&sid("review")), Some(&GridCoord::new(6, 0)));
        assert_eq!(coords.get(&sid("publish")), Some(&GridCoord::new(10, 0)));

        let review_parents = placements.parent_coords().get(&sid("review")).expect("parents");
        assert_eq!(review_parents, &[GridCoord::new(4, 0), GridCoord::new(4, 1)]);
        assert_eq!(
            placements.parent_ids().get(&sid("review")),
            Some(&vec![sid("translate"), sid("machine")])
        );
    }

    #[test]
    fn wide_fork_orders_rows_by_branch_sort() {
        let (workflow_id, steps) = wide_fork_workflow();
        let graph = build_step_graph(&workflow_id, &steps).expect("graph");
        let mut matrix = Matrix::allocate(&graph);
        let placements = place_nodes(&graph, &mut matrix).expect("placements");

        let coords = placements.node_coords();
        assert_eq!(coords.get(&sid("edit")), Some(&GridCoord::new(4, 0)));
        assert_eq!(coords.get(&sid("spell")), Some(&GridCoord::new(4, 1)));
        assert_eq!(coords.get(&sid("legal")), Some(&GridCoord::new(4, 2)));
        assert_eq!(coords.get(&sid("review")), Some(&GridCoord::new(6, 0)));
        assert_eq!(coords.get(&sid("sign")), Some(&GridCoord::new(8, 0)));
    }

    fn hand_built_node(id: &str, order: u32, next: &[&str]) -> WorkflowStepNode {
        let next_nodes = next.iter().map(|id| NextNode::new(sid(id), false)).collect();
        WorkflowStepNode::new(
            sid(id),
            order,
            if next.len() > 1 { NodeType::Fork } else { NodeType::Task },
            next_nodes,
            Vec::new(),
            Vec::new(),
            false,
            None,
        )
    }

    fn hand_built_graph(
        nodes: Vec<WorkflowStepNode>,
        order_occurrences: &[(u32, usize)],
        first: &str,
        fork_columns: Vec<usize>,
    ) -> StepGraph {
        let nodes: BTreeMap<StepId, WorkflowStepNode> = nodes
            .into_iter()
            .map(|node| (node.id().clone(), node))
            .collect();
        StepGraph::new(
            nodes,
            order_occurrences.iter().copied().collect(),
            sid(first),
            fork_columns,
        )
    }

    #[test]
    fn collision_on_an_anchored_row_fails_fast() {
        // Two row-1 parents funnel children into the same column: the second
        // child's anchor row is already taken while row 0 stays free. The
        // graph builder rejects double forks, so build the graph by hand.
        let start = WorkflowStepNode::new(
            sid("start"),
            0,
            NodeType::Start,
            smallvec![NextNode::new(sid("f"), true)],
            Vec::new(),
            Vec::new(),
            false,
            None,
        );
        let graph = hand_built_graph(
            vec![
                start,
                hand_built_node("f", 1, &["a", "b"]),
                hand_built_node("a", 2, &[]),
                hand_built_node("b", 2, &["c", "d"]),
                hand_built_node("c", 3, &[]),
                hand_built_node("d", 3, &[]),
            ],
            &[(1, 1), (2, 2), (3, 2)],
            "start",
            vec![2],
        );

        let mut matrix = Matrix::allocate(&graph);
        let err = place_nodes(&graph, &mut matrix).unwrap_err();
        assert_eq!(
            err,
            LayoutError::PlacementCollision {
                step_id: sid("d"),
                coord: GridCoord::new(6, 1),
            }
        );
    }

    #[test]
    fn exhausted_column_fails_fast() {
        // The occurrence tally understates column 4, so the second order-2
        // node finds no free row.
        let start = WorkflowStepNode::new(
            sid("start"),
            0,
            NodeType::Start,
            smallvec![NextNode::new(sid("f"), true)],
            Vec::new(),
            Vec::new(),
            false,
            None,
        );
        let graph = hand_built_graph(
            vec![
                start,
                hand_built_node("f", 1, &["a", "b"]),
                hand_built_node("a", 2, &[]),
                hand_built_node("b", 2, &[]),
            ],
            &[(1, 1), (2, 1)],
            "start",
            Vec::new(),
        );

        let mut matrix = Matrix::allocate(&graph);
        let err = place_nodes(&graph, &mut matrix).unwrap_err();
        assert_eq!(
            err,
            LayoutError::ColumnExhausted {
                step_id: sid("b"),
                col: 4,
            }
        );
    }
}
