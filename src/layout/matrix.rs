// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::graph::StepGraph;
use super::grid::GridCoord;
use super::tile::{Tile, TileContainer, TileKind};

/// The column-major tile grid: a sequence of columns, each a sequence of
/// tiles of equal length. Every cell holds exactly one tile at all times;
/// unplaced cells hold the empty placeholder typed with the column's
/// container.
///
/// The matrix is owned by the layout call that allocated it and is passed
/// by unique ownership through placement and routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    columns: Vec<Vec<Tile>>,
}

impl Matrix {
    /// Sizes the grid from the step graph and fills it with placeholders.
    ///
    /// Columns: `2 * max_order + 1` — even columns hold nodes, odd columns
    /// connectors. Rows: the maximum number of steps sharing an order, plus
    /// one reserved row when a fork is present (for the dashed add-branch
    /// control); never fewer than one.
    pub(crate) fn allocate(graph: &StepGraph) -> Self {
        let max_order = graph
            .order_occurrences()
            .keys()
            .next_back()
            .copied()
            .unwrap_or(0) as usize;
        let num_cols = max_order * 2 + 1;

        let max_occurrence = graph
            .order_occurrences()
            .values()
            .copied()
            .max()
            .unwrap_or(0);
        let fork_row = usize::from(!graph.fork_columns().is_empty());
        let num_rows = (max_occurrence + fork_row).max(1);

        let columns = (0..num_cols)
            .map(|col| {
                let container = if graph.fork_columns().contains(&col) {
                    TileContainer::Diamond
                } else if col % 2 == 0 {
                    TileContainer::Box
                } else {
                    TileContainer::Standard
                };
                (0..num_rows)
                    .map(|row| Tile::placeholder(container, GridCoord::new(col, row)))
                    .collect()
            })
            .collect();

        Self { columns }
    }

    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(Vec::len).unwrap_or(0)
    }

    pub fn columns(&self) -> &[Vec<Tile>] {
        &self.columns
    }

    pub fn tile(&self, coord: GridCoord) -> Option<&Tile> {
        self.columns.get(coord.col())?.get(coord.row())
    }

    /// The container shared by every tile in the column.
    pub fn column_container(&self, col: usize) -> Option<TileContainer> {
        Some(self.columns.get(col)?.first()?.container())
    }

    /// Overwrites the cell at the tile's own coordinate.
    pub(crate) fn set(&mut self, tile: Tile) {
        let coord = tile.own_coord();
        let column = self
            .columns
            .get_mut(coord.col())
            .expect("tile column within allocated matrix");
        let cell = column
            .get_mut(coord.row())
            .expect("tile row within allocated matrix");
        *cell = tile;
    }

    /// Row of the first placeholder in the column, top down.
    pub fn first_unoccupied_row(&self, col: usize) -> Option<usize> {
        self.columns
            .get(col)?
            .iter()
            .position(Tile::is_placeholder)
    }

    /// Row of the lowest node or fork tile in the column.
    pub fn last_node_row(&self, col: usize) -> Option<usize> {
        self.columns
            .get(col)?
            .iter()
            .rposition(|tile| tile.kind() != TileKind::Connector)
    }

    /// Row of the lowest non-placeholder tile in the column.
    pub fn last_occupied_row(&self, col: usize) -> Option<usize> {
        self.columns
            .get(col)?
            .iter()
            .rposition(|tile| !tile.is_placeholder())
    }
}
