use alloc::{format, string::String};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::{rewriter, run};

/// Reference decoding for rule-free programs: drop each escape marker and
/// keep the following character literally; a trailing marker vanishes.
fn unescape(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[quickcheck]
fn delimiter_free_programs_echo(text: String) -> bool {
    let program: String = text.chars().filter(|&c| c != '/').collect();
    run(&program) == unescape(&program)
}

#[quickcheck]
fn escaped_delimiters_are_literal_output(left: String, right: String) -> bool {
    let left: String = left.chars().filter(|&c| c != '/' && c != '\\').collect();
    let right: String = right.chars().filter(|&c| c != '/' && c != '\\').collect();
    let program = format!("{left}\\/{right}");
    run(&program) == format!("{left}/{right}")
}

#[quickcheck]
fn unmatched_rules_leave_the_tail_untouched(tail: String) -> bool {
    let tail: String = tail
        .chars()
        .filter(|&c| c != '/' && c != '\\' && c != 'x')
        .collect();
    let program = format!("/x/y/{tail}");
    run(&program) == tail
}

#[quickcheck]
fn settled_buffers_no_longer_contain_the_pattern(
    buffer: String,
    pattern: String,
    replacement: String,
) -> TestResult {
    if pattern.is_empty() {
        return TestResult::discard();
    }
    let mut current = buffer;
    let mut steps = 0;
    while let Some(next) = rewriter::substitute_once(&current, &pattern, &replacement) {
        current = next;
        steps += 1;
        if steps > 1_000 {
            // This rule does not settle within the probe bound.
            return TestResult::discard();
        }
    }
    // At fixpoint: the pattern is absent and reapplication changes nothing.
    TestResult::from_bool(
        !current.contains(pattern.as_str())
            && rewriter::substitute_once(&current, &pattern, &replacement).is_none(),
    )
}
