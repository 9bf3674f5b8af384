// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

fn main() {
    // Building from a tarball has no git metadata; the version falls back to
    // the crate version alone.
    if let Err(e) = EmitBuilder::builder().git_sha(true).git_commit_date().emit() {
        println!("cargo:warning=git version metadata unavailable: {}", e);
    }
}
