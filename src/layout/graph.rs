// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use smallvec::SmallVec;

use crate::model::ids::{StepId, WorkflowId};
use crate::model::node::{NextNode, WorkflowStepNode};
use crate::model::step::{NodeType, WorkflowStep};

/// The derived step graph: one node per real step plus the synthetic start
/// node, with the sizing inputs the allocator needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepGraph {
    nodes: BTreeMap<StepId, WorkflowStepNode>,
    order_occurrences: BTreeMap<u32, usize>,
    first_node_id: StepId,
    fork_columns: Vec<usize>,
}

impl StepGraph {
    pub(crate) fn new(
        nodes: BTreeMap<StepId, WorkflowStepNode>,
        order_occurrences: BTreeMap<u32, usize>,
        first_node_id: StepId,
        fork_columns: Vec<usize>,
    ) -> Self {
        Self {
            nodes,
            order_occurrences,
            first_node_id,
            fork_columns,
        }
    }

    pub fn nodes(&self) -> &BTreeMap<StepId, WorkflowStepNode> {
        &self.nodes
    }

    /// How many real steps share each order. The synthetic start node at
    /// order 0 is not counted.
    pub fn order_occurrences(&self) -> &BTreeMap<u32, usize> {
        &self.order_occurrences
    }

    pub fn first_node_id(&self) -> &StepId {
        &self.first_node_id
    }

    /// Column indices of fork steps (`order * 2`); at most one entry.
    pub fn fork_columns(&self) -> &[usize] {
        &self.fork_columns
    }

    pub(crate) fn into_nodes(self) -> BTreeMap<StepId, WorkflowStepNode> {
        self.nodes
    }
}

/// Builds the step graph from the raw step list.
///
/// Synthesizes the start node as `<workflow_id>-auth` at order 0 with a
/// single primary successor pointing at the order-1 step. Validates the
/// single-fork and single-root preconditions the placement and branch-sort
/// stages rely on.
pub fn build_step_graph(
    workflow_id: &WorkflowId,
    steps: &[WorkflowStep],
) -> Result<StepGraph, InvalidGraphError> {
    let first_node_id = StepId::new(format!("{workflow_id}-auth"))
        .expect("workflow id is delimiter-free, appending '-auth' keeps it so");

    let mut known = BTreeSet::new();
    for step in steps {
        if !known.insert(step.step_id().clone()) {
            return Err(InvalidGraphError::DuplicateStep {
                step_id: step.step_id().clone(),
            });
        }
    }

    let mut nodes = BTreeMap::new();
    let mut order_occurrences: BTreeMap<u32, usize> = BTreeMap::new();
    let mut fork_columns = Vec::new();
    let mut fork_id: Option<StepId> = None;
    let mut root_id: Option<StepId> = None;

    for step in steps {
        if step.node_type().is_start() {
            return Err(InvalidGraphError::ReservedStartType {
                step_id: step.step_id().clone(),
            });
        }
        if step.order() == 0 {
            return Err(InvalidGraphError::ReservedStartOrder {
                step_id: step.step_id().clone(),
            });
        }

        *order_occurrences.entry(step.order()).or_insert(0) += 1;

        if step.node_type().is_fork() {
            if let Some(first) = &fork_id {
                return Err(InvalidGraphError::MultipleForks {
                    first: first.clone(),
                    second: step.step_id().clone(),
                });
            }
            fork_id = Some(step.step_id().clone());
            fork_columns.push(step.order() as usize * 2);
        }

        if step.order() == 1 {
            if let Some(first) = &root_id {
                return Err(InvalidGraphError::ConflictingRoots {
                    first: first.clone(),
                    second: step.step_id().clone(),
                });
            }
            root_id = Some(step.step_id().clone());
        }

        for next in step.next_steps() {
            if !known.contains(next.step_id()) {
                return Err(InvalidGraphError::DanglingSuccessor {
                    from: step.step_id().clone(),
                    to: next.step_id().clone(),
                });
            }
        }

        let next_nodes: SmallVec<[NextNode; 2]> = step
            .next_steps()
            .iter()
            .map(|next| NextNode::new(next.step_id().clone(), next.is_primary()))
            .collect();
        let prev_steps = steps
            .iter()
            .filter(|other| !other.node_type().is_fork() && other.order() < step.order())
            .map(|other| other.step_id().clone())
            .collect();
        let next_steps = steps
            .iter()
            .filter(|other| other.order() > step.order())
            .map(|other| other.step_id().clone())
            .collect();

        nodes.insert(
            step.step_id().clone(),
            WorkflowStepNode::new(
                step.step_id().clone(),
                step.order(),
                step.node_type(),
                next_nodes,
                next_steps,
                prev_steps,
                step.is_disabled(),
                step.warning_message().map(str::to_owned),
            ),
        );
    }

    if !steps.is_empty() && root_id.is_none() {
        return Err(InvalidGraphError::MissingRoot);
    }

    let start_next_nodes: SmallVec<[NextNode; 2]> = root_id
        .into_iter()
        .map(|id| NextNode::new(id, true))
        .collect();
    let start_next_steps = steps.iter().map(|step| step.step_id().clone()).collect();
    nodes.insert(
        first_node_id.clone(),
        WorkflowStepNode::new(
            first_node_id.clone(),
            0,
            NodeType::Start,
            start_next_nodes,
            start_next_steps,
            Vec::new(),
            false,
            None,
        ),
    );

    Ok(StepGraph::new(
        nodes,
        order_occurrences,
        first_node_id,
        fork_columns,
    ))
}

/// Structural input problems. Fatal: the layout call surfaces these and
/// returns no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGraphError {
    DuplicateStep { step_id: StepId },
    MultipleForks { first: StepId, second: StepId },
    ConflictingRoots { first: StepId, second: StepId },
    DanglingSuccessor { from: StepId, to: StepId },
    ReservedStartType { step_id: StepId },
    ReservedStartOrder { step_id: StepId },
    MissingRoot,
}

impl fmt::Display for InvalidGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateStep { step_id } => {
                write!(f, "step id {step_id} appears more than once")
            }
            Self::MultipleForks { first, second } => {
                write!(
                    f,
                    "workflow contains more than one fork step ({first}, {second})"
                )
            }
            Self::ConflictingRoots { first, second } => {
                write!(
                    f,
                    "more than one step has order 1 ({first}, {second}); the start node needs a single successor"
                )
            }
            Self::DanglingSuccessor { from, to } => {
                write!(f, "step {from} references unknown successor {to}")
            }
            Self::ReservedStartType { step_id } => {
                write!(f, "step {step_id} uses the reserved start type")
            }
            Self::ReservedStartOrder { step_id } => {
                write!(f, "step {step_id} uses order 0, reserved for the start node")
            }
            Self::MissingRoot => f.write_str("no step has order 1"),
        }
    }
}

impl std::error::Error for InvalidGraphError {}
