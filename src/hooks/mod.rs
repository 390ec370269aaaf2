// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hooks management.

mod manager;

pub use manager::{hook_script, HookManager, HOOK_NAME};
