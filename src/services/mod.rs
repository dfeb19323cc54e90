// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

pub mod git;
pub mod markdown;
pub mod parser;
