// SPDX-FileCopyrightText: 2026 chlog contributors
//
// SPDX-License-Identifier: MIT

mod commit;
mod diagnostic;

pub use commit::*;
pub use diagnostic::*;
