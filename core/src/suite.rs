//! The greeter's own case suite, shared by the `hello_world_suite`
//! integration test and `helper test`.

use anyhow::Result;

use crate::greeter::hello_world;
use crate::harness::{Case, Suite, TableRow};

/// Platform on which `TestSkip` does not run.
pub const SKIP_PLATFORM: &str = "linux";

pub static TEST_TABLE: &[TableRow] = &[
    TableRow::new("Didik", "Didik", "Hello, Didik"),
    TableRow::new("Nur", "Nur", "Hello, Nur"),
    TableRow::new("Hidayat", "Hidayat", "Hello, Hidayat"),
    TableRow::new("Anies", "Anies", "Hello, Anies"),
];

pub fn hello_world_suite() -> Result<Suite> {
    Suite::new()
        .with_case(Case::table("TestHelloWorldTable", TEST_TABLE, |ctx, row| {
            let result = hello_world(row.request);
            ctx.require_eq(row.expected, result, "table result")
        }))?
        .with_case(Case::group(
            "TestSubTest",
            vec![
                Case::new("Didik", |ctx| {
                    let result = hello_world("Didik");
                    ctx.check_eq("Hello, Didik", result, "result must be 'Hello, Didik'");
                    Ok(())
                }),
                Case::new("Hidayat", |ctx| {
                    let result = hello_world("Hidayat");
                    ctx.check_eq("Hello, Hidayat", result, "result must be 'Hello, Hidayat'");
                    Ok(())
                }),
            ],
        ))?
        .with_case(Case::new("TestSkip", |ctx| {
            if ctx.platform() == SKIP_PLATFORM {
                return ctx.skip(format!("Cannot run in {}", SKIP_PLATFORM));
            }
            let result = hello_world("Didik");
            ctx.check_eq("Hello, Didik", result, "result must be 'Hello, Didik'");
            Ok(())
        }))?
        .with_case(Case::new("TestHelloWorldRequire", |ctx| {
            let result = hello_world("Didik");
            ctx.require_eq("Hello, Didik", result, "result must be 'Hello, Didik'")
        }))?
        .with_case(Case::new("TestHelloWorldAssert", |ctx| {
            let result = hello_world("Didik");
            ctx.check_eq("Hello, Didik", result, "result must be 'Hello, Didik'");
            Ok(())
        }))?
        .with_case(Case::new("TestHelloWorld", |ctx| {
            let result = hello_world("Didik");
            if result != "Hello, Didik" {
                ctx.error("result must be 'Hello, Didik'");
            }
            Ok(())
        }))?
        .with_case(Case::new("TestHelloWorldSecond", |ctx| {
            let result = hello_world("Didik Nur Hidayat");
            if result != "Hello, Didik Nur Hidayat" {
                return ctx.fatal("result must be 'Hello, Didik Nur Hidayat'");
            }
            Ok(())
        }))
}
