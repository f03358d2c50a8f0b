use alloc::string::String;

use crate::{EngineOptions, Highlight, Interpreter, TextTracer, Tracer};

fn traced(program: &str, options: EngineOptions) -> (String, String) {
    let mut log = String::new();
    let tracer = TextTracer::new(&mut log, options.highlight);
    let output: String = Interpreter::with_tracer(program, options, tracer).collect();
    (output, log)
}

#[test]
fn level_three_reports_every_transition() {
    let options = EngineOptions {
        trace_level: 3,
        ..Default::default()
    };
    let (output, log) = traced("/a/b/a", options);
    assert_eq!(output, "b");
    assert_eq!(
        log,
        "INPUT:  /a/b/a\n\n\
         \x20       v v v\nAPPLY:  /a/b/a\n\n\
         \x20       v v v\nAPPLY:  /a/b/b\n\n\
         \nOUTPUT: b\n"
    );
}

#[test]
fn level_two_skips_substitution_steps() {
    let options = EngineOptions {
        trace_level: 2,
        ..Default::default()
    };
    let (_, log) = traced("/a/b/aa", options);
    // One APPLY block for the capture, none for the two substitutions.
    assert_eq!(log.matches("APPLY:").count(), 1);
}

#[test]
fn level_one_reports_only_input_and_output() {
    let options = EngineOptions {
        trace_level: 1,
        ..Default::default()
    };
    let (_, log) = traced("/a/b/a", options);
    assert_eq!(log, "INPUT:  /a/b/a\n\n\nOUTPUT: b\n");
}

#[test]
fn level_zero_is_silent() {
    let (output, log) = traced("/a/b/a", EngineOptions::default());
    assert_eq!(output, "b");
    assert!(log.is_empty());
}

#[test]
fn caret_line_tracks_rule_widths() {
    let options = EngineOptions {
        trace_level: 2,
        ..Default::default()
    };
    let (_, log) = traced("/abc/de/abc", options);
    assert!(log.contains("        v   v  v\nAPPLY:  /abc/de/abc\n"));
}

#[test]
fn bright_highlight_decorates_the_rule_spans() {
    let options = EngineOptions {
        trace_level: 2,
        highlight: Highlight::Bright,
        ..Default::default()
    };
    let (_, log) = traced("/a/b/a", options);
    assert!(log.contains("\u{1b}[1;36ma\u{1b}[0m"));
    assert!(log.contains("\u{1b}[1;33mb\u{1b}[0m"));
    // Alignment comes from undecorated character counts.
    assert!(log.contains("        v v v\n"));
}

#[derive(Debug, Default)]
struct CountingTracer {
    captures: usize,
    substitutions: usize,
    pauses: usize,
}

impl Tracer for &mut CountingTracer {
    fn rule_captured(&mut self, _pattern: &str, _replacement: &str, _buffer: &str) {
        self.captures += 1;
    }

    fn substituted(&mut self, _pattern: &str, _replacement: &str, _buffer: &str) {
        self.substitutions += 1;
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }
}

#[test]
fn interactive_step_pauses_at_every_visible_transition() {
    let options = EngineOptions {
        trace_level: 3,
        interactive_step: true,
        ..Default::default()
    };
    let mut counter = CountingTracer::default();
    let output: String = Interpreter::with_tracer("/a/b/aa", options, &mut counter).collect();
    assert_eq!(output, "bb");
    assert_eq!(counter.captures, 1);
    assert_eq!(counter.substitutions, 2);
    assert_eq!(counter.pauses, 3);
}

#[test]
fn pause_is_not_called_without_interactive_step() {
    let options = EngineOptions {
        trace_level: 3,
        ..Default::default()
    };
    let mut counter = CountingTracer::default();
    let _: String = Interpreter::with_tracer("/a/b/aa", options, &mut counter).collect();
    assert_eq!(counter.pauses, 0);
}
