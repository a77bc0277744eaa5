//! Fuzz target for syntax-tree document parsing.
//!
//! Goal: the loader should **never panic** on any input, including type references that point
//! outside the table and pathologically nested node lists.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_tree_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = gramguard_tree::fuzz::parse_tree(text);
    }
});
