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

/// Step taxonomy as rendered by the host product.
///
/// The layout engine itself only distinguishes `Start` (the synthetic entry
/// marker, never valid in input) and `Fork` (the diamond decision step); the
/// remaining variants pass through to the rendering layer's icon mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    Start,
    Fork,
    Intake,
    Task,
    Review,
    Approval,
    Hold,
    Upload,
    Test,
}

impl NodeType {
    pub fn is_start(self) -> bool {
        self == Self::Start
    }

    pub fn is_fork(self) -> bool {
        self == Self::Fork
    }
}

/// A successor reference on a raw step. Only a fork step carries more than
/// one, and exactly one of a fork's successors is flagged primary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextStepRef {
    step_id: StepId,
    is_primary: bool,
}

impl NextStepRef {
    pub fn new(step_id: StepId, is_primary: bool) -> Self {
        Self { step_id, is_primary }
    }

    pub fn step_id(&self) -> &StepId {
        &self.step_id
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

/// One raw workflow step as supplied by the step-editing layer.
///
/// `order` is 1-based and contiguous per branch; order 0 is reserved for the
/// synthetic start node the graph builder prepends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    step_id: StepId,
    order: u32,
    name: String,
    node_type: NodeType,
    #[serde(default)]
    next_steps: SmallVec<[NextStepRef; 2]>,
    #[serde(default)]
    is_disabled: bool,
    #[serde(default)]
    warning_message: Option<String>,
}

impl WorkflowStep {
    pub fn new(step_id: StepId, order: u32, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            step_id,
            order,
            name: name.into(),
            node_type,
            next_steps: SmallVec::new(),
            is_disabled: false,
            warning_message: None,
        }
    }

    pub fn new_with(
        step_id: StepId,
        order: u32,
        name: impl Into<String>,
        node_type: NodeType,
        next_steps: Vec<NextStepRef>,
        is_disabled: bool,
        warning_message: Option<String>,
    ) -> Self {
        Self {
            step_id,
            order,
            name: name.into(),
            node_type,
            next_steps: SmallVec::from_vec(next_steps),
            is_disabled,
            warning_message,
        }
    }

    pub fn set_next_steps(&mut self, next_steps: Vec<NextStepRef>) {
        self.next_steps = SmallVec::from_vec(next_steps);
    }

    pub fn push_next_step(&mut self, next_step: NextStepRef) {
        self.next_steps.push(next_step);
    }

    pub fn set_is_disabled(&mut self, is_disabled: bool) {
        self.is_disabled = is_disabled;
    }

    pub fn set_warning_message<T: Into<String>>(&mut self, warning_message: Option<T>) {
        self.warning_message = warning_message.map(Into::into);
    }

    pub fn step_id(&self) -> &StepId {
        &self.step_id
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn next_steps(&self) -> &[NextStepRef] {
        &self.next_steps
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn warning_message(&self) -> Option<&str> {
        self.warning_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{NextStepRef, NodeType, WorkflowStep};
    use crate::model::StepId;

    #[test]
    fn workflow_step_can_be_constructed_and_updated() {
        let id = StepId::new("draft").expect("step id");
        let next = StepId::new("review").expect("step id");
        let mut step = WorkflowStep::new(id.clone(), 1, "Draft", NodeType::Task);

        assert_eq!(step.step_id(), &id);
        assert_eq!(step.order(), 1);
        assert_eq!(step.name(), "Draft");
        assert_eq!(step.node_type(), NodeType::Task);
        assert!(step.next_steps().is_empty());
        assert!(!step.is_disabled());
        assert_eq!(step.warning_message(), None);

        step.push_next_step(NextStepRef::new(next.clone(), true));
        step.set_is_disabled(true);
        step.set_warning_message(Some("unassigned"));

        assert_eq!(step.next_steps().len(), 1);
        assert_eq!(step.next_steps()[0].step_id(), &next);
        assert!(step.next_steps()[0].is_primary());
        assert!(step.is_disabled());
        assert_eq!(step.warning_message(), Some("unassigned"));

        step.set_warning_message::<&str>(None);
        assert_eq!(step.warning_message(), None);
    }

    #[test]
    fn node_type_distinguishes_engine_variants() {
        assert!(NodeType::Start.is_start());
        assert!(NodeType::Fork.is_fork());
        assert!(!NodeType::Task.is_fork());
        assert!(!NodeType::Review.is_start());
    }

    #[test]
    fn workflow_step_serializes_with_camel_case_keys() {
        let id = StepId::new("draft").expect("step id");
        let step = WorkflowStep::new(id, 1, "Draft", NodeType::Task);
        let value = serde_json::to_value(&step).expect("serialize");

        assert_eq!(value["stepId"], "draft");
        assert_eq!(value["nodeType"], "task");
        assert_eq!(value["isDisabled"], false);
    }
}
