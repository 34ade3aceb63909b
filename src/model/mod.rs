// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model: raw workflow step records and derived node records.
//!
//! `WorkflowStep` is what the step-editing layer hands us; `WorkflowStepNode`
//! is the immutable per-node record the layout engine derives from it.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node;
pub mod step;

pub use ids::{Id, IdError, StepId, WorkflowId};
pub use node::{NextNode, WorkflowStepNode};
pub use step::{NextStepRef, NodeType, WorkflowStep};
