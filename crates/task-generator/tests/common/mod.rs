//! Shared test material
//!
//! ## Authors
//!
//! The Veracruz Development Team.
//!
//! ## Licensing and copyright notice
//!
//! See the `LICENSE.md` file in the root directory for information on
//! licensing and copyright.

#![allow(dead_code)]

pub use task_generator::testing::ScriptedSource;

/// Parses a task file line into its four fields, panicking on anything else.
pub fn parse_line(line: &str) -> [u64; 4] {
    let fields = line
        .split(' ')
        .map(|field| field.parse::<u64>().expect("field is not an integer"))
        .collect::<Vec<_>>();
    assert_eq!(fields.len(), 4, "line '{}' does not have four fields", line);
    [fields[0], fields[1], fields[2], fields[3]]
}

/// Asserts the invariants every generated task file satisfies.
pub fn assert_valid_task_file(contents: &str) {
    assert!(contents.ends_with('\n'), "file is not newline-terminated");

    let lines = contents.lines().collect::<Vec<_>>();
    assert!(
        (1..=16).contains(&lines.len()),
        "{} lines generated",
        lines.len()
    );

    for line in lines {
        let [max_cpu_time, cpu_burst_len, io_burst_len, weight] = parse_line(line);
        assert!((1..=1 << 20).contains(&max_cpu_time));
        assert!((1..=1 << 16).contains(&cpu_burst_len));
        assert!(cpu_burst_len <= max_cpu_time);
        assert!(io_burst_len <= 1 << 11);
        assert!((1..=1 << 5).contains(&weight));
    }
}
