//! Test scenario definitions.

use std::path::Path;

use coax_core::{Options, TargetKind};
use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::corpus::Literal;
use crate::table::{Case, Output};

/// A named table of cases sharing a theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name.
    pub name: String,

    /// Description of what this scenario tests.
    #[serde(default)]
    pub description: String,

    /// Cases, run in order.
    pub cases: Vec<Case>,
}

impl Scenario {
    /// Create a new scenario builder.
    pub fn builder(name: &str) -> ScenarioBuilder {
        ScenarioBuilder::new(name)
    }

    /// Parse a JSON array of scenarios.
    pub fn from_json(content: &str) -> Result<Vec<Scenario>, ScenarioError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a JSON file holding an array of scenarios.
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ScenarioError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }
}

/// Builder for creating scenarios.
pub struct ScenarioBuilder {
    name: String,
    description: String,
    options: Options,
    cases: Vec<Case>,
}

impl ScenarioBuilder {
    /// Create a new builder.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: String::new(),
            options: Options::default(),
            cases: Vec::new(),
        }
    }

    /// Set the description.
    pub fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Options for the cases added after this call.
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Add a case expecting `output`.
    pub fn expect(mut self, name: &str, input: Literal, output: Output) -> Self {
        let case = Case::ok(name, input, output);
        let case = case.with_options(self.options.clone());
        self.cases.push(case);
        self
    }

    /// Add a case expecting a failure with `error_type`.
    pub fn expect_error(
        mut self,
        name: &str,
        input: Literal,
        target: TargetKind,
        error_type: &str,
    ) -> Self {
        let case = Case::err(name, input, target, error_type);
        let case = case.with_options(self.options.clone());
        self.cases.push(case);
        self
    }

    /// Add a prepared case as-is.
    pub fn case(mut self, case: Case) -> Self {
        self.cases.push(case);
        self
    }

    /// Build the scenario.
    pub fn build(self) -> Scenario {
        Scenario {
            name: self.name,
            description: self.description,
            cases: self.cases,
        }
    }
}

/// Error type for scenario loading.
#[derive(Debug)]
pub enum ScenarioError {
    /// I/O error.
    Io(std::io::Error),
    /// Malformed JSON.
    Json(serde_json::Error),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "I/O error: {}", e),
            ScenarioError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<std::io::Error> for ScenarioError {
    fn from(e: std::io::Error) -> Self {
        ScenarioError::Io(e)
    }
}

impl From<serde_json::Error> for ScenarioError {
    fn from(e: serde_json::Error) -> Self {
        ScenarioError::Json(e)
    }
}

/// Standard scenarios for conformance testing.
pub mod standard {
    use super::*;
    use crate::corpus::{Marshal, NamedValue};
    use coax_core::Kind;

    /// Exact built-in types at every target.
    pub fn exact_types() -> Scenario {
        let bytes = Literal::Bytes(Some(b"hi".to_vec()));
        let invalid = "invalid_value";
        Scenario::builder("exact_types")
            .description("Built-in values of each family convert without options")
            .expect("i32", Literal::I32(42), Output::Int(42))
            .expect("u8", Literal::U8(42), Output::Uint(42))
            .expect("f32", Literal::F32(42.5), Output::Float(42.5))
            .expect("bytes", bytes, Output::String("hi".into()))
            .expect_error("bool", Literal::Bool(true), TargetKind::Int, invalid)
            .expect_error("i64 to uint", Literal::I64(1), TargetKind::Uint, invalid)
            .build()
    }

    /// Nil inputs and fallbacks.
    pub fn fallbacks() -> Scenario {
        let empty = Output::String(String::new());
        let wrong_kind = "invalid_fallback";
        Scenario::builder("fallbacks")
            .description("Nil inputs yield the zero value or a fallback of the right kind")
            .expect("nil int", Literal::Nil, Output::Int(0))
            .expect("nil ptr string", Literal::NullPtr(Kind::Str), empty)
            .options(Options::new().with_fallback(7isize))
            .expect("fallback", Literal::NullPtr(Kind::I64), Output::Int(7))
            .expect_error("wrong kind", Literal::Nil, TargetKind::Float, wrong_kind)
            .build()
    }

    /// Named types with and without reflection.
    pub fn named_types() -> Scenario {
        let my_int: Literal = NamedValue::new("MyInt", Literal::I64(42)).into();
        Scenario::builder("named_types")
            .description("Named types convert like their underlying type only with reflection")
            .expect("reflect", my_int.clone(), Output::Int(42))
            .options(Options::new().without_reflection())
            .expect_error("no reflect", my_int, TargetKind::Int, "invalid_value")
            .build()
    }

    /// Text parsing and marshalers.
    pub fn string_conversion() -> Scenario {
        let failing: Literal = NamedValue::new("Broken", Literal::Other(vec![]))
            .with_marshal(Marshal::Fail("marshal failure".into()))
            .into();
        let answer: Literal = NamedValue::new("Answer", Literal::Other(vec![]))
            .with_marshal(Marshal::Text("42".into()))
            .into();
        let via_ptr = Literal::ptr(answer);
        let answered = Output::String("42".into());
        let invalid = "invalid_value";
        Scenario::builder("string_conversion")
            .description("Textual inputs parse only with string conversion enabled")
            .expect_error("disabled", Literal::from("42"), TargetKind::Int, invalid)
            .expect_error("marshal", failing.clone(), TargetKind::String, invalid)
            .expect("marshal via ptr", via_ptr.clone(), answered)
            .options(Options::new().convert_strings())
            .expect("int", Literal::from("42"), Output::Int(42))
            .expect("empty", Literal::from(""), Output::Int(0))
            .expect("float", Literal::from("1e3"), Output::Float(1000.0))
            .expect("int via ptr", via_ptr, Output::Int(42))
            .expect_error("bad", Literal::from("abc"), TargetKind::Int, invalid)
            .expect_error("marshal int", failing, TargetKind::Int, invalid)
            .build()
    }

    /// All standard scenarios.
    pub fn all() -> Vec<Scenario> {
        vec![
            exact_types(),
            fallbacks(),
            named_types(),
            string_conversion(),
        ]
    }
}
