// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{StepId, WorkflowId};
use super::step::{NextStepRef, NodeType, WorkflowStep};

pub(crate) fn sid(value: &str) -> StepId {
    StepId::new(value).expect("step id")
}

pub(crate) fn wid(value: &str) -> WorkflowId {
    WorkflowId::new(value).expect("workflow id")
}

fn step(
    id: &str,
    order: u32,
    name: &str,
    node_type: NodeType,
    next: &[(&str, bool)],
) -> WorkflowStep {
    let next_steps = next
        .iter()
        .map(|(id, is_primary)| NextStepRef::new(sid(id), *is_primary))
        .collect();
    WorkflowStep::new_with(sid(id), order, name, node_type, next_steps, false, None)
}

/// Four chained steps, no fork. Lays out as a single row of nine columns.
pub(crate) fn linear_workflow() -> (WorkflowId, Vec<WorkflowStep>) {
    let steps = vec![
        step("draft", 1, "Draft", NodeType::Task, &[("review", true)]),
        step("review", 2, "Review", NodeType::Review, &[("approve", true)]),
        step("approve", 3, "Approve", NodeType::Approval, &[("publish", true)]),
        step("publish", 4, "Publish", NodeType::Upload, &[]),
    ];
    (wid("wf-linear"), steps)
}

/// A fork at order 1 with two branches of equal depth that reconverge at
/// order 3. The alternate branch lands on row 1 and rejoins with a
/// right-up arrow.
pub(crate) fn forked_workflow() -> (WorkflowId, Vec<WorkflowStep>) {
    let steps = vec![
        step(
            "gate",
            1,
            "Gate",
            NodeType::Fork,
            &[("translate", true), ("machine", false)],
        ),
        step("translate", 2, "Translate", NodeType::Task, &[("review", true)]),
        step("machine", 2, "Machine translate", NodeType::Task, &[("review", true)]),
        step("review", 3, "Review", NodeType::Review, &[("approve", true)]),
        step("approve", 4, "Approve", NodeType::Approval, &[("publish", true)]),
        step("publish", 5, "Publish", NodeType::Upload, &[]),
    ];
    (wid("wf-fork"), steps)
}

/// A fork at order 1 with three branches converging at staggered points:
/// `edit` and `spell` rejoin at `review`, `legal` skips ahead to `sign`.
/// Exercises the closest-common-descendant order and the taller right-up
/// routes.
pub(crate) fn wide_fork_workflow() -> (WorkflowId, Vec<WorkflowStep>) {
    let steps = vec![
        step(
            "gate",
            1,
            "Gate",
            NodeType::Fork,
            &[("edit", true), ("spell", false), ("legal", false)],
        ),
        step("edit", 2, "Edit", NodeType::Task, &[("review", true)]),
        step("spell", 2, "Spell check", NodeType::Test, &[("review", true)]),
        step("legal", 2, "Legal check", NodeType::Review, &[("sign", true)]),
        step("review", 3, "Review", NodeType::Review, &[("sign", true)]),
        step("sign", 4, "Sign off", NodeType::Approval, &[]),
    ];
    (wid("wf-wide"), steps)
}
