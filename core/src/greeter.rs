/// Literal placed in front of every name.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Greet `name` by prefixing it with [`GREETING_PREFIX`].
///
/// The name is taken as-is: no trimming, no case folding, and the empty
/// string is a valid input (yielding just the prefix).
pub fn hello_world(name: &str) -> String {
    let mut out = String::with_capacity(GREETING_PREFIX.len() + name.len());
    out.push_str(GREETING_PREFIX);
    out.push_str(name);
    out
}
