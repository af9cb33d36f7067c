//! Coercion runner trait and implementations.

use coax_core::{maybe, must, CoerceError, Fallback, Options, TargetKind, Value};

use crate::table::{Case, Expect, Output};

/// Result of running a coercion through one API surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// Whether the coercion succeeded.
    pub success: bool,

    /// The coerced value on success.
    pub output: Option<Output>,

    /// Error message on failure.
    pub message: String,

    /// Stable error type on failure.
    pub error_type: Option<String>,
}

impl RunResult {
    /// Create a successful result.
    pub fn success(output: Output) -> Self {
        Self {
            success: true,
            output: Some(output),
            message: String::new(),
            error_type: None,
        }
    }

    /// Create a failed result.
    pub fn failure(err: &CoerceError) -> Self {
        Self {
            success: false,
            output: None,
            message: err.to_string(),
            error_type: Some(err.error_type().to_string()),
        }
    }

    fn from_result(result: Result<Output, CoerceError>) -> Self {
        match result {
            Ok(output) => Self::success(output),
            Err(err) => Self::failure(&err),
        }
    }

    /// Whether this result is what `expect` asks for.
    pub fn satisfies(&self, expect: &Expect) -> bool {
        match expect {
            Expect::Value(output) => self.output.as_ref() == Some(output),
            Expect::Error(error_type) => self.error_type.as_deref() == Some(error_type.as_str()),
        }
    }
}

/// Trait for running coercions through different API surfaces.
///
/// Implementations:
/// - `CoreRunner`: Calls the `Result` API directly (baseline)
/// - `MustRunner`: Calls `must::*` under `maybe`
pub trait CoercionRunner {
    /// Get the runner name.
    fn name(&self) -> &'static str;

    /// Coerce `value` into `target`.
    fn run(&self, value: &Value<'_>, options: &Options, target: TargetKind) -> RunResult;
}

/// Core runner - calls the `Result` API directly.
///
/// This is the baseline implementation that all other runners
/// should match.
#[derive(Debug, Default)]
pub struct CoreRunner;

impl CoreRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CoercionRunner for CoreRunner {
    fn name(&self) -> &'static str {
        "core"
    }

    fn run(&self, value: &Value<'_>, options: &Options, target: TargetKind) -> RunResult {
        RunResult::from_result(match target {
            TargetKind::Int => coax_core::int(value, options).map(Output::Int),
            TargetKind::Uint => coax_core::uint(value, options).map(Output::Uint),
            TargetKind::Float => coax_core::float(value, options).map(Output::Float),
            TargetKind::String => coax_core::string(value, options).map(Output::String),
        })
    }
}

/// Panic runner - calls `must::*` and recovers the panic with `maybe`.
#[derive(Debug, Default)]
pub struct MustRunner;

impl MustRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CoercionRunner for MustRunner {
    fn name(&self) -> &'static str {
        "must"
    }

    fn run(&self, value: &Value<'_>, options: &Options, target: TargetKind) -> RunResult {
        RunResult::from_result(match target {
            TargetKind::Int => maybe(must::int, value, options).map(Output::Int),
            TargetKind::Uint => maybe(must::uint, value, options).map(Output::Uint),
            TargetKind::Float => maybe(must::float, value, options).map(Output::Float),
            TargetKind::String => maybe(must::string, value, options).map(Output::String),
        })
    }
}

/// The `can_*` predicate for `target`.
pub fn predicate(value: &Value<'_>, options: &Options, target: TargetKind) -> bool {
    match target {
        TargetKind::Int => coax_core::can_int(value, options),
        TargetKind::Uint => coax_core::can_uint(value, options),
        TargetKind::Float => coax_core::can_float(value, options),
        TargetKind::String => coax_core::can_string(value, options),
    }
}

// ============================================================================
// Conformance testing utilities
// ============================================================================

/// Run cases through two runners, comparing them with each other and with
/// each case's expectations. Stops at the first failure.
pub fn run_conformance_test<R1: CoercionRunner, R2: CoercionRunner>(
    baseline: &R1,
    runner: &R2,
    cases: &[Case],
) -> ConformanceResult {
    for case in cases {
        let value = case.input.value();
        let expected = baseline.run(&value, &case.options, case.target);
        let actual = runner.run(&value, &case.options, case.target);

        if expected != actual {
            return ConformanceResult::Mismatch {
                case: case.name.clone(),
                baseline_name: baseline.name().to_string(),
                runner_name: runner.name().to_string(),
                baseline: expected,
                runner: actual,
            };
        }

        if !expected.satisfies(&case.expect) {
            return ConformanceResult::Unexpected {
                case: case.name.clone(),
                expected: case.expect.clone(),
                actual: expected,
            };
        }

        if let Some(want) = case.predicate {
            if predicate(&value, &case.options, case.target) != want {
                return ConformanceResult::PredicateMismatch {
                    case: case.name.clone(),
                    expected: want,
                };
            }
        }
    }
    ConformanceResult::Pass
}

/// Result of a conformance test.
#[derive(Debug)]
pub enum ConformanceResult {
    /// Test passed - results match.
    Pass,
    /// The two runners disagree.
    Mismatch {
        case: String,
        baseline_name: String,
        runner_name: String,
        baseline: RunResult,
        runner: RunResult,
    },
    /// Both runners agree, but not with the case.
    Unexpected {
        case: String,
        expected: Expect,
        actual: RunResult,
    },
    /// The predicate gave the wrong answer.
    PredicateMismatch { case: String, expected: bool },
}

impl ConformanceResult {
    /// Check if the test passed.
    pub fn passed(&self) -> bool {
        matches!(self, ConformanceResult::Pass)
    }
}

/// A predicate that disagrees with its conversion.
#[derive(Debug, Clone)]
pub struct Disagreement {
    pub target: TargetKind,
    pub options: Options,
    pub predicate: bool,
    pub result: RunResult,
}

/// Every policy under which a predicate must agree with its conversion for
/// `target`: string conversion and reflection on and off, with and without
/// a fallback of the right kind. Marshaler verification stays on.
pub fn agreement_options(target: TargetKind) -> Vec<Options> {
    let fallback = match target {
        TargetKind::Int => Fallback::Int(-1),
        TargetKind::Uint => Fallback::Uint(1),
        TargetKind::Float => Fallback::Float(-1.0),
        TargetKind::String => Fallback::String("fallback".to_string()),
    };

    let mut all = Vec::with_capacity(8);
    for convert in [false, true] {
        for reflect in [true, false] {
            for with_fallback in [false, true] {
                let mut options = Options::new();
                if convert {
                    options = options.convert_strings();
                }
                if !reflect {
                    options = options.without_reflection();
                }
                if with_fallback {
                    options = options.with_fallback(fallback.clone());
                }
                all.push(options);
            }
        }
    }
    all
}

/// Check `can_T(value) == T(value).is_ok()` for every target kind under
/// every [`agreement_options`] policy.
pub fn check_agreement(value: &Value<'_>) -> Vec<Disagreement> {
    let runner = CoreRunner::new();
    let mut found = Vec::new();
    for target in TargetKind::ALL {
        for options in agreement_options(target) {
            let can = predicate(value, &options, target);
            let result = runner.run(value, &options, target);
            if can != result.success {
                found.push(Disagreement {
                    target,
                    options,
                    predicate: can,
                    result,
                });
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{standard, Literal};

    #[test]
    fn test_core_runner() {
        let runner = CoreRunner::new();
        let result = runner.run(&Value::from(42i32), &Options::new(), TargetKind::Int);
        assert!(result.success);
        assert_eq!(result.output, Some(Output::Int(42)));

        let result = runner.run(&Value::from("cat"), &Options::new(), TargetKind::Int);
        assert!(!result.success);
        assert_eq!(result.error_type.as_deref(), Some("invalid_value"));
        assert!(result.message.contains("cat"));
    }

    #[test]
    fn test_must_runner_matches_core() {
        let text = Literal::Str("42".into());
        let bytes = Literal::Bytes(Some(b"hi".to_vec()));
        let wrong = Options::new().with_fallback(1.0);
        let cases = vec![
            Case::ok("exact", Literal::I32(42), Output::Int(42)),
            Case::err("text", text, TargetKind::Int, "invalid_value"),
            Case::ok("bytes", bytes, Output::String("hi".into())),
            Case::err(
                "fallback",
                Literal::Nil,
                TargetKind::Uint,
                "invalid_fallback",
            )
            .with_options(wrong),
        ];
        let result = run_conformance_test(&CoreRunner::new(), &MustRunner::new(), &cases);
        assert!(result.passed(), "{result:?}");
    }

    #[test]
    fn test_unexpected_outcome_is_reported() {
        let cases = vec![Case::ok("wrong", Literal::I8(1), Output::Int(2))];
        let result = run_conformance_test(&CoreRunner::new(), &MustRunner::new(), &cases);
        assert!(matches!(result, ConformanceResult::Unexpected { .. }));

        let case = Case::ok("pred", Literal::I8(1), Output::Int(1));
        let case = case.with_predicate(false);
        let result = run_conformance_test(&CoreRunner::new(), &CoreRunner::new(), &[case]);
        let wrong = matches!(result, ConformanceResult::PredicateMismatch { .. });
        assert!(wrong, "{result:?}");
    }

    #[test]
    fn test_agreement_options_cover_all_combinations() {
        let all = agreement_options(TargetKind::Float);
        assert_eq!(all.len(), 8);
        assert!(all.iter().all(|o| o.checks_marshaler()));
        assert_eq!(all.iter().filter(|o| o.fallback().is_some()).count(), 4);
    }

    #[test]
    fn test_predicates_agree_on_standard_corpus() {
        for literal in standard::all() {
            let value = literal.value();
            let found = check_agreement(&value);
            assert!(found.is_empty(), "{value:?}: {found:?}");
        }
    }
}
