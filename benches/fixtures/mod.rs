// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use triton::model::{NextStepRef, NodeType, StepId, WorkflowId, WorkflowStep};

fn sid(value: &str) -> StepId {
    StepId::new(value).expect("step id")
}

pub fn workflow_id(value: &str) -> WorkflowId {
    WorkflowId::new(value).expect("workflow id")
}

/// A straight chain of `len` steps.
pub fn linear(len: u32) -> Vec<WorkflowStep> {
    (1..=len)
        .map(|order| {
            let mut step = WorkflowStep::new(
                sid(&format!("step-{order}")),
                order,
                format!("Step {order}"),
                NodeType::Task,
            );
            if order < len {
                step.push_next_step(NextStepRef::new(sid(&format!("step-{}", order + 1)), true));
            }
            step
        })
        .collect()
}

/// A fork with `branches` alternates that all reconverge two columns later,
/// followed by a linear tail.
pub fn forked(branches: u32, tail: u32) -> Vec<WorkflowStep> {
    let mut steps = Vec::new();

    let mut fork = WorkflowStep::new(sid("fork"), 1, "Fork", NodeType::Fork);
    for branch in 0..branches {
        fork.push_next_step(NextStepRef::new(sid(&format!("branch-{branch}")), branch == 0));
    }
    steps.push(fork);

    for branch in 0..branches {
        let mut step = WorkflowStep::new(
            sid(&format!("branch-{branch}")),
            2,
            format!("Branch {branch}"),
            NodeType::Task,
        );
        step.push_next_step(NextStepRef::new(sid("join"), true));
        steps.push(step);
    }

    let mut join = WorkflowStep::new(sid("join"), 3, "Join", NodeType::Review);
    if tail > 0 {
        join.push_next_step(NextStepRef::new(sid("tail-1"), true));
    }
    steps.push(join);

    for offset in 1..=tail {
        let mut step = WorkflowStep::new(
            sid(&format!("tail-{offset}")),
            3 + offset,
            format!("Tail {offset}"),
            NodeType::Task,
        );
        if offset < tail {
            step.push_next_step(NextStepRef::new(sid(&format!("tail-{}", offset + 1)), true));
        }
        steps.push(step);
    }

    steps
}
