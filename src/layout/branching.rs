// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::ids::StepId;
use crate::model::node::WorkflowStepNode;

/// Visual left-to-right order of a node's successors.
///
/// With fewer than two successors this is the input order. At a fork the
/// primary branch comes first; the remaining branches are ordered by how
/// soon their downstream path re-converges with the growing primary path,
/// so earlier-reconverging branches sit closer to the primary line.
pub fn sorted_next_nodes(
    node: &WorkflowStepNode,
    nodes: &BTreeMap<StepId, WorkflowStepNode>,
) -> Vec<StepId> {
    let next = node.next_nodes();
    if next.len() < 2 {
        return next.iter().map(|n| n.id().clone()).collect();
    }

    let primary_id = next
        .iter()
        .find(|n| n.is_primary())
        .unwrap_or(&next[0])
        .id()
        .clone();

    let mut paths = BTreeMap::new();
    for branch in next {
        paths.insert(branch.id().clone(), downstream_path(branch.id(), nodes));
    }

    let mut sorted = vec![primary_id.clone()];
    let mut to_sort: Vec<StepId> = next
        .iter()
        .map(|n| n.id().clone())
        .filter(|id| *id != primary_id)
        .collect();
    let mut primary_path = paths
        .get(&primary_id)
        .cloned()
        .expect("path built for every branch");

    while !to_sort.is_empty() {
        let next_id = closest_converging(&primary_path, &to_sort, &paths);
        primary_path = paths
            .get(&next_id)
            .cloned()
            .expect("path built for every branch");
        to_sort.retain(|id| *id != next_id);
        sorted.push(next_id);
    }

    sorted
}

/// The path from `start` to the sink, always following the first successor.
/// Downstream of a fork every node has at most one successor, so this is
/// the branch's full path. Stops on a revisited id so malformed input
/// cannot hang the sort.
fn downstream_path(start: &StepId, nodes: &BTreeMap<StepId, WorkflowStepNode>) -> Vec<StepId> {
    let mut path = vec![start.clone()];
    let mut seen = BTreeSet::new();
    seen.insert(start.clone());

    let mut current = start.clone();
    while let Some(next) = nodes.get(&current).and_then(|node| node.next_nodes().first()) {
        let next_id = next.id().clone();
        if !seen.insert(next_id.clone()) {
            break;
        }
        path.push(next_id.clone());
        current = next_id;
    }

    path
}

/// The unsorted branch whose path converges earliest into the primary path.
///
/// Scans the primary path from its second node; at the first primary-path
/// element any candidate path contains (at index > 0, i.e. not an immediate
/// self-match), picks the candidate with the smallest such index. Falls
/// back to the first remaining candidate so the sort always terminates.
fn closest_converging(
    primary_path: &[StepId],
    to_sort: &[StepId],
    paths: &BTreeMap<StepId, Vec<StepId>>,
) -> StepId {
    for anchor in primary_path.iter().skip(1) {
        let mut best: Option<(usize, &StepId)> = None;
        for candidate in to_sort {
            let Some(path) = paths.get(candidate) else {
                continue;
            };
            let Some(index) = path.iter().position(|id| id == anchor) else {
                continue;
            };
            if index == 0 {
                continue;
            }
            match best {
                None => best = Some((index, candidate)),
                Some((best_index, _)) if index < best_index => best = Some((index, candidate)),
                Some(_) => {}
            }
        }
        if let Some((_, candidate)) = best {
            return candidate.clone();
        }
    }

    to_sort[0].clone()
}
