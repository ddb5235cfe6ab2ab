//! Runs every demo world in every search mode and prints deterministic
//! `key=value` lines for cross-process verification.
//!
//! Usage: `search_fixture`

fn main() {
    let lines = lock_tests::fixture::fixture_lines().expect("fixture run failed");
    for line in lines {
        println!("{line}");
    }
}
