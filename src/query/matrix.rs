// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::layout::grid::GridCoord;
use crate::model::ids::StepId;

/// Inverts the node→coordinate map. Coordinates are unique per node, so no
/// entries collapse.
pub fn coord_to_node_id(
    node_coords: &BTreeMap<StepId, GridCoord>,
) -> BTreeMap<GridCoord, StepId> {
    node_coords
        .iter()
        .map(|(id, coord)| (*coord, id.clone()))
        .collect()
}

/// Resolves which of the candidate next nodes an add-step affordance feeds
/// into.
///
/// All candidates sit to the right of the affordance, so only rows matter:
/// the successor is the candidate on the lowest row that is still at or
/// above the affordance's row. Candidates without a placed coordinate are
/// ignored; `None` means no candidate qualifies.
pub fn next_node_for_affordance(
    affordance: GridCoord,
    node_coords: &BTreeMap<StepId, GridCoord>,
    candidates: &[StepId],
) -> Option<StepId> {
    let mut best: Option<(GridCoord, &StepId)> = None;
    for candidate in candidates {
        let Some(coord) = node_coords.get(candidate).copied() else {
            continue;
        };
        if coord.row() > affordance.row() {
            continue;
        }
        match best {
            None => best = Some((coord, candidate)),
            Some((best_coord, _)) if coord.row() > best_coord.row() => {
                best = Some((coord, candidate));
            }
            Some(_) => {}
        }
    }
    best.map(|(_, id)| id.clone())
}
