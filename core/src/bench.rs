//! Greeter inputs measured by the criterion benches.
//!
//! Kept in the library so the bench binary and any ad-hoc timing loop use
//! the same names and requests.

use crate::greeter::hello_world;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchCase {
    pub name: &'static str,
    pub request: &'static str,
}

impl BenchCase {
    pub const fn new(name: &'static str, request: &'static str) -> Self {
        Self { name, request }
    }

    /// One greeter call. The result is returned so callers can `black_box` it.
    #[inline]
    pub fn run_once(&self) -> String {
        hello_world(self.request)
    }
}

/// Standalone benchmarks, one fixed input each.
pub static FLAT_BENCHES: &[BenchCase] = &[
    BenchCase::new("HelloWorld", "Didik"),
    BenchCase::new("HelloWorldHidayat", "Hidayat"),
];

/// Members of the `Sub` benchmark group.
pub static SUB_BENCHES: &[BenchCase] = &[BenchCase::new("Didik", "Didik"), BenchCase::new("Nur", "Nur")];

/// Members of the `HelloWorldTable` benchmark group.
pub static TABLE_BENCHES: &[BenchCase] = &[
    BenchCase::new("HelloWorld(Didik)", "Didik"),
    BenchCase::new("HelloWorld(Hidayat)", "Hidayat"),
];
