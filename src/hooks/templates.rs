// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// File name git runs for message validation.
pub const HOOK_NAME: &str = "commit-msg";

/// Marker identifying scripts we wrote.
pub const HOOK_MARKER: &str = "Generated by validate-commit-msg";

/// The `commit-msg` hook script.
pub fn commit_msg_script() -> String {
    format!(
        "#!/bin/sh\n\
         # {} v{}\n\
         # Remove this file or run `validate-commit-msg hooks uninstall` to disable.\n\
         exec validate-commit-msg \"$1\"\n",
        HOOK_MARKER,
        crate::version::VERSION
    )
}

/// Whether a hook script was written by us.
pub fn is_own_script(content: &[u8]) -> bool {
    content
        .windows(HOOK_MARKER.len())
        .any(|window| window == HOOK_MARKER.as_bytes())
}
