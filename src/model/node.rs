// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::StepId;
use super::step::NodeType;

/// A successor edge on a derived node, ordered as supplied by the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextNode {
    id: StepId,
    is_primary: bool,
}

impl NextNode {
    pub fn new(id: StepId, is_primary: bool) -> Self {
        Self { id, is_primary }
    }

    pub fn id(&self) -> &StepId {
        &self.id
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// One node of the step graph: a real step, or the synthetic start node at
/// order 0. Built once per layout call and never mutated afterwards.
///
/// `next_steps` and `prev_steps` are the order-relative step sets the
/// rendering layer feeds into its edit menus; placement ignores them and
/// follows `next_nodes` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStepNode {
    id: StepId,
    order: u32,
    node_type: NodeType,
    next_nodes: SmallVec<[NextNode; 2]>,
    next_steps: Vec<StepId>,
    prev_steps: Vec<StepId>,
    is_disabled: bool,
    display_warning: Option<String>,
}

impl WorkflowStepNode {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: StepId,
        order: u32,
        node_type: NodeType,
        next_nodes: SmallVec<[NextNode; 2]>,
        next_steps: Vec<StepId>,
        prev_steps: Vec<StepId>,
        is_disabled: bool,
        display_warning: Option<String>,
    ) -> Self {
        Self {
            id,
            order,
            node_type,
            next_nodes,
            next_steps,
            prev_steps,
            is_disabled,
            display_warning,
        }
    }

    pub fn id(&self) -> &StepId {
        &self.id
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn next_nodes(&self) -> &[NextNode] {
        &self.next_nodes
    }

    pub fn next_steps(&self) -> &[StepId] {
        &self.next_steps
    }

    pub fn prev_steps(&self) -> &[StepId] {
        &self.prev_steps
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn display_warning(&self) -> Option<&str> {
        self.display_warning.as_deref()
    }
}
