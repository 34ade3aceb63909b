// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The layout engine: step graph, matrix allocation, placement, routing.
//!
//! `layout_workflow` runs the whole pipeline. The matrix it allocates is
//! passed by unique ownership through the stages and handed to the caller
//! inside `WorkflowLayout`; no stage observes another's partial mutation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ids::{StepId, WorkflowId};
use crate::model::node::WorkflowStepNode;
use crate::model::step::WorkflowStep;

pub mod branching;
pub mod graph;
pub mod grid;
pub mod matrix;
pub mod placement;
pub mod routing;
pub mod tile;

pub use branching::sorted_next_nodes;
pub use graph::{build_step_graph, InvalidGraphError, StepGraph};
pub use grid::{GridCoord, ParseGridCoordError};
pub use matrix::Matrix;
pub use placement::Placements;
pub use tile::{ConnectorKind, ParseTileError, Tile, TileContainer, TileId, TileKind};

/// Everything the rendering layer consumes: the node lookup, the routed
/// tile matrix, and the auxiliary coordinate maps for wiring click targets.
/// Serializes to plain string-keyed structures throughout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowLayout {
    nodes: BTreeMap<StepId, WorkflowStepNode>,
    matrix: Matrix,
    node_coords: BTreeMap<StepId, GridCoord>,
    parent_ids: BTreeMap<StepId, Vec<StepId>>,
}

impl WorkflowLayout {
    pub fn nodes(&self) -> &BTreeMap<StepId, WorkflowStepNode> {
        &self.nodes
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn node_coords(&self) -> &BTreeMap<StepId, GridCoord> {
        &self.node_coords
    }

    pub fn parent_ids(&self) -> &BTreeMap<StepId, Vec<StepId>> {
        &self.parent_ids
    }
}

/// Lays out a workflow from scratch: build the step graph, allocate the
/// placeholder matrix, place every reachable node, route the connectors.
///
/// Deterministic and idempotent: the same step list and workflow id always
/// produce an identical layout. Fails with no partial result on malformed
/// input or a placement conflict.
pub fn layout_workflow(
    workflow_id: &WorkflowId,
    steps: &[WorkflowStep],
) -> Result<WorkflowLayout, LayoutError> {
    let graph = build_step_graph(workflow_id, steps)?;
    let mut matrix = Matrix::allocate(&graph);
    let placements = placement::place_nodes(&graph, &mut matrix)?;
    routing::route_connectors(&mut matrix, &placements, graph.fork_columns());

    let (node_coords, _parent_coords, parent_ids) = placements.into_parts();
    Ok(WorkflowLayout {
        nodes: graph.into_nodes(),
        matrix,
        node_coords,
        parent_ids,
    })
}

/// Failures of the layout pipeline. Structural input problems arrive
/// wrapped from the graph builder; the placement variants fire when a
/// node's target cell is taken or its column has no free row left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    InvalidGraph(InvalidGraphError),
    PlacementCollision { step_id: StepId, coord: GridCoord },
    ColumnExhausted { step_id: StepId, col: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGraph(err) => write!(f, "invalid workflow graph: {err}"),
            Self::PlacementCollision { step_id, coord } => {
                write!(f, "step {step_id} would overwrite the occupied cell at {coord}")
            }
            Self::ColumnExhausted { step_id, col } => {
                write!(f, "no free row remains in column {col} for step {step_id}")
            }
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGraph(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidGraphError> for LayoutError {
    fn from(err: InvalidGraphError) -> Self {
        Self::InvalidGraph(err)
    }
}
