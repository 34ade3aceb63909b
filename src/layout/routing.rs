// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::grid::GridCoord;
use super::matrix::Matrix;
use super::placement::Placements;
use super::tile::{ConnectorKind, Tile, TileContainer, TileKind};

/// One connector awaiting placement. `parent` chains the run together: the
/// first tile of a run references the real parent node, later tiles
/// reference the previous connector (and lose the reference when applied,
/// since only node coordinates survive the filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConnectorToPlace {
    own: GridCoord,
    parent: GridCoord,
    kind: ConnectorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CoordPair {
    from: GridCoord,
    to: GridCoord,
}

/// Fills the matrix with the connector tiles joining every parent/child
/// coordinate pair, overlays vertical runs above right-up corners, and
/// places the dashed add-branch affordance under each fork column.
pub(crate) fn route_connectors(
    matrix: &mut Matrix,
    placements: &Placements,
    fork_columns: &[usize],
) {
    let connectors: Vec<ConnectorToPlace> = coord_pairs(placements)
        .into_iter()
        .flat_map(horiz_connectors)
        .collect();

    let node_coords: BTreeSet<GridCoord> = placements.node_coords().values().copied().collect();
    for connector in &connectors {
        apply_connector(matrix, *connector, &node_coords);
    }

    for connector in &connectors {
        if connector.kind == ConnectorKind::RightUp {
            add_vert_connectors(matrix, connector.own);
        }
    }

    add_fork_dashes(matrix, fork_columns);
}

/// Expands the per-child parent lists into parent→child coordinate pairs.
fn coord_pairs(placements: &Placements) -> Vec<CoordPair> {
    let mut pairs = Vec::new();
    for (child_id, parents) in placements.parent_coords() {
        let to = *placements
            .node_coords()
            .get(child_id)
            .expect("every child with recorded parents was placed");
        for from in parents {
            pairs.push(CoordPair { from: *from, to });
        }
    }
    pairs
}

/// A run of horizontal lines over `start_col..end_col`, chaining each
/// tile's parent reference to its predecessor. Returns the chain tail for
/// the tile that follows the run.
fn line_run(
    start_col: usize,
    end_col: usize,
    row: usize,
    chain_start: GridCoord,
) -> (Vec<ConnectorToPlace>, GridCoord) {
    let mut lines = Vec::new();
    let mut chain = chain_start;
    for col in start_col..end_col {
        let own = GridCoord::new(col, row);
        lines.push(ConnectorToPlace {
            own,
            parent: chain,
            kind: ConnectorKind::LineHoriz,
        });
        chain = own;
    }
    (lines, chain)
}

/// The horizontal connector sequence for one parent→child pair. Three
/// cases on the row comparison; connectors always fill strictly between
/// the two node columns.
fn horiz_connectors(pair: CoordPair) -> Vec<ConnectorToPlace> {
    let (from_col, from_row) = (pair.from.col(), pair.from.row());
    let (to_col, to_row) = (pair.to.col(), pair.to.row());
    let parent_node = pair.from;

    if from_row == to_row {
        // lineHoriz ... arrowRight along the shared row.
        let end_col = to_col - 1;
        let (mut out, chain) = line_run(from_col + 1, end_col, from_row, parent_node);
        out.push(ConnectorToPlace {
            own: GridCoord::new(end_col, from_row),
            parent: chain,
            kind: ConnectorKind::ArrowRight,
        });
        out
    } else if from_row < to_row {
        // downRight under the parent, then lineHoriz ... arrowRight along
        // the child's row. The corner's parent reference points at the
        // empty slot to its left, not the real parent, so the add-step
        // control is not rendered twice for this pair.
        let end_col = to_col - 1;
        let corner = ConnectorToPlace {
            own: GridCoord::new(from_col, to_row),
            parent: GridCoord::new(from_col.saturating_sub(1), to_row),
            kind: ConnectorKind::DownRight,
        };
        let (lines, chain) = line_run(from_col + 1, end_col, to_row, parent_node);
        let mut out = vec![corner];
        out.extend(lines);
        out.push(ConnectorToPlace {
            own: GridCoord::new(end_col, to_row),
            parent: chain,
            kind: ConnectorKind::ArrowRight,
        });
        out
    } else {
        // lineHoriz along the parent's row into the child's column, closed
        // by a right-up corner, or a right-up arrow when the child is one
        // row up.
        let end_col = to_col;
        let (mut out, chain) = line_run(from_col + 1, end_col, from_row, parent_node);
        let kind = if from_row - to_row > 1 {
            ConnectorKind::RightUp
        } else {
            ConnectorKind::RightUpArrow
        };
        out.push(ConnectorToPlace {
            own: GridCoord::new(end_col, from_row),
            parent: chain,
            kind,
        });
        out
    }
}

/// Writes one connector, keeping the column's container and keeping the
/// parent reference only when it points at a real node coordinate.
fn apply_connector(matrix: &mut Matrix, connector: ConnectorToPlace, node_coords: &BTreeSet<GridCoord>) {
    let container = matrix
        .tile(connector.own)
        .expect("connector coord within allocated matrix")
        .container();
    let parent = node_coords
        .contains(&connector.parent)
        .then_some(connector.parent);
    matrix.set(Tile::connector(connector.kind, container, connector.own, parent));
}

/// Walks upward from the row above a right-up corner, turning placeholders
/// into a vertical run: lineVert while the cell above stays clear, arrowUp
/// when the cell above holds a node or fork. Stops at the first occupied
/// cell or the top of the grid.
fn add_vert_connectors(matrix: &mut Matrix, start: GridCoord) {
    let col = start.col();
    let mut row = start.row();
    while row > 1 {
        row -= 1;
        let coord = GridCoord::new(col, row);
        let current = matrix
            .tile(coord)
            .expect("vertical run within allocated matrix")
            .clone();
        if !current.is_placeholder() {
            break;
        }
        let above = matrix
            .tile(GridCoord::new(col, row - 1))
            .expect("vertical run within allocated matrix");
        let kind = if above.is_placeholder() || above.kind() == TileKind::Connector {
            ConnectorKind::LineVert
        } else {
            ConnectorKind::ArrowUp
        };
        matrix.set(Tile::connector(
            kind,
            current.container(),
            coord,
            current.parent_coord(),
        ));
    }
}

/// Places the dashed add-branch connector one row below the last occupied
/// tile of each fork column, with the fork node itself as the parent
/// reference (this is the tile the rendering layer turns into the "add new
/// branch" control).
fn add_fork_dashes(matrix: &mut Matrix, fork_columns: &[usize]) {
    for &col in fork_columns {
        let parent_row = matrix
            .last_node_row(col)
            .expect("fork column holds its fork node");
        let Some(last_occupied) = matrix.last_occupied_row(col) else {
            continue;
        };
        let row = last_occupied + 1;
        if row >= matrix.num_rows() {
            // The allocator reserved a spare row below the deepest branch.
            continue;
        }
        let own = GridCoord::new(col, row);
        matrix.set(Tile::connector(
            ConnectorKind::DownRightDash,
            TileContainer::Diamond,
            own,
            Some(GridCoord::new(col, parent_row)),
        ));
    }
}
