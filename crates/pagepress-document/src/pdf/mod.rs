// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// PDF module: assembly of converted images into a single document.

pub mod writer;

pub use writer::assemble;
