// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton — tile-matrix layout for workflow diagrams.
//!
//! The pipeline is `model` (input step records) → `layout` (step graph,
//! matrix allocation, placement, connector routing) → `query` (helpers for
//! the rendering layer). `layout::layout_workflow` is the entry point.

pub mod layout;
pub mod model;
pub mod query;
