//! Sample `///` programs from the language's folklore.
//!
//! These are real programs, not toys invented for this crate: the
//! hello-world family demonstrates each way a program can arrive at its
//! output, and the remaining entries are the classic compute-by-rewriting
//! demonstrations. They double as fixtures for the test suite.

/// No rules at all: the program is its own output.
pub const HELLO_WORLD: &str = "Hello, world!";

/// A single rule whose substitution produces the entire output.
pub const HELLO_WORLD_SUBSTITUTED: &str = "/ world! world!/Hello,/ world! world! world!";

/// Two chained rules; the second is rewritten by the first before it runs.
pub const HELLO_WORLD_CHAINED: &str = "/foo/Hello, world!//bar/foo/bar";

/// Literal output interleaved with rules that never match.
pub const HELLO_WORLD_INTERLEAVED: &str = "Hello, /foo/bar/World/asdf/qwer/!";

/// A staged build-up where later rules are assembled by earlier ones.
pub const HELLO_WORLD_STAGED: &str = "/-/World//--/Hello//--W/--, w/---!";

/// Escaped delimiters and escape markers inside patterns and replacements.
pub const HELLO_WORLD_ESCAPED: &str = r"/foo/Hello, world!//B\/\\R/foo/B/\R";

/// Converts the binary numeral after the last rule to unary: `100010`
/// becomes 34 `*`s.
pub const BINARY_TO_UNARY: &str = "/1/0*//*0/0**//0//100010";

/// Prints a prefix of the Thue-Morse sequence.
pub const THUE_MORSE: &str =
    r"/*/\/.\\0\/,\\,0,\\,1\/\/.\\1\/,\\,1,\\,0\/\/,\\,\/.\//****/.//.0";

/// Prints Fibonacci numbers in unary.
pub const FIBONACCI: &str = r"/!/\/.\\0\/,\\,0,\\,1\/\/.\\1\/,\\,0\/\/,\\,\/.\/\/+\\+\/=\\=.\\1-\/\/=\\=\/+\\+\//!!!!!!!!!/.///+\+///-/\\\///0/1//1/*/++.1";
