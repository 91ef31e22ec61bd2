// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Identity of the lazily created global logger

use logger::{Format, Level, global};

#[test]
fn global_returns_the_same_instance() {
    let first = global();
    let second = global();

    assert!(first.same_instance(&second));
    assert_eq!(first.format(), Format::Json);
}

#[test]
fn concurrent_first_use_yields_one_instance() {
    let handles: Vec<_> = (0..16)
        .map(|_| std::thread::spawn(global))
        .collect();
    let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for logger in &loggers[1..] {
        assert!(logger.same_instance(&loggers[0]));
    }
}

#[test]
fn global_level_defaults_to_info() {
    assert_eq!(global().level(), Level::Info);
}
