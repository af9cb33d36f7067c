//! Case tables.

use coax_core::{Options, TargetKind};
use serde::{Deserialize, Serialize};

use crate::corpus::Literal;

/// A successful coercion result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    Int(isize),
    Uint(usize),
    Float(f64),
    String(String),
}

impl Output {
    pub fn kind(&self) -> TargetKind {
        match self {
            Output::Int(_) => TargetKind::Int,
            Output::Uint(_) => TargetKind::Uint,
            Output::Float(_) => TargetKind::Float,
            Output::String(_) => TargetKind::String,
        }
    }
}

/// Expected outcome of a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expect {
    /// The coercion succeeds with this output.
    Value(Output),
    /// The coercion fails with this `error_type()`.
    Error(String),
}

/// One input run through one coercion under one policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    pub input: Literal,
    #[serde(default)]
    pub options: Options,
    pub target: TargetKind,
    pub expect: Expect,
    /// Expected `can_*` answer, when it is worth pinning down.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicate: Option<bool>,
}

impl Case {
    /// A case expecting `output` from the coercion matching its kind.
    pub fn ok(name: &str, input: Literal, output: Output) -> Self {
        Self {
            name: name.to_string(),
            input,
            options: Options::default(),
            target: output.kind(),
            expect: Expect::Value(output),
            predicate: None,
        }
    }

    /// A case expecting the coercion into `target` to fail with `error_type`.
    pub fn err(name: &str, input: Literal, target: TargetKind, error_type: &str) -> Self {
        Self {
            name: name.to_string(),
            input,
            options: Options::default(),
            target,
            expect: Expect::Error(error_type.to_string()),
            predicate: None,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn with_predicate(mut self, expected: bool) -> Self {
        self.predicate = Some(expected);
        self
    }
}
