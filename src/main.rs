//! Sampledump CLI entry point.

#![allow(clippy::print_stderr)]

use std::error::Error as _;

fn main() {
    if let Err(e) = sampledump::run() {
        eprintln!("error: {e}");
        let mut cause = e.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {inner}");
            cause = inner.source();
        }
        std::process::exit(1);
    }
}
