//! Owned stand-ins for dynamic values.
//!
//! A [`Value`] borrows its payload, so test tables keep [`Literal`]s and
//! borrow a `Value` from them when a case runs.

use std::fmt;

use coax_core::{BoxError, Dynamic, Kind, MarshalText, Value};
use serde::{Deserialize, Serialize};

/// Serializable description of a dynamic input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Nil,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Char(char),
    Str(String),
    /// `null` is a nil sequence.
    Bytes(Option<Vec<u8>>),
    Chars(Option<Vec<char>>),
    /// Non-nil pointer.
    Ptr(Box<Literal>),
    /// Nil pointer to a value of the given kind.
    NullPtr(Kind),
    Named(NamedValue),
    /// A list, which no coercion supports.
    Other(Vec<i64>),
}

impl Literal {
    /// Borrow this literal as a dynamic value.
    pub fn value(&self) -> Value<'_> {
        match self {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::I8(n) => Value::I8(*n),
            Literal::I16(n) => Value::I16(*n),
            Literal::I32(n) => Value::I32(*n),
            Literal::I64(n) => Value::I64(*n),
            Literal::Isize(n) => Value::Isize(*n),
            Literal::U8(n) => Value::U8(*n),
            Literal::U16(n) => Value::U16(*n),
            Literal::U32(n) => Value::U32(*n),
            Literal::U64(n) => Value::U64(*n),
            Literal::Usize(n) => Value::Usize(*n),
            Literal::F32(n) => Value::F32(*n),
            Literal::F64(n) => Value::F64(*n),
            Literal::Char(c) => Value::Char(*c),
            Literal::Str(s) => Value::Str(s),
            Literal::Bytes(bytes) => Value::Bytes(bytes.as_deref()),
            Literal::Chars(chars) => Value::Chars(chars.as_deref()),
            Literal::Ptr(target) => Value::ptr(target.value()),
            Literal::NullPtr(kind) => Value::null_ptr(*kind),
            Literal::Named(named) => Value::named(named),
            Literal::Other(list) => Value::other(list),
        }
    }

    pub fn ptr(target: Literal) -> Self {
        Literal::Ptr(Box::new(target))
    }
}

/// A user-defined type with configurable capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    pub underlying: Box<Literal>,
    /// Text rendered by the `Display` capability, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marshal: Option<Marshal>,
}

impl NamedValue {
    pub fn new(name: &str, underlying: Literal) -> Self {
        Self {
            name: name.to_string(),
            underlying: Box::new(underlying),
            display: None,
            marshal: None,
        }
    }

    pub fn with_display(mut self, text: &str) -> Self {
        self.display = Some(text.to_string());
        self
    }

    pub fn with_marshal(mut self, marshal: Marshal) -> Self {
        self.marshal = Some(marshal);
        self
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Literal::Str(text.to_string())
    }
}

impl From<NamedValue> for Literal {
    fn from(named: NamedValue) -> Self {
        Literal::Named(named)
    }
}

/// Behavior of a marshaler capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marshal {
    /// Succeeds with this text.
    Text(String),
    /// Fails with this message.
    Fail(String),
}

impl MarshalText for Marshal {
    fn marshal_text(&self) -> Result<Vec<u8>, BoxError> {
        match self {
            Marshal::Text(text) => Ok(text.as_bytes().to_vec()),
            Marshal::Fail(message) => Err(message.clone().into()),
        }
    }
}

impl Dynamic for NamedValue {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn underlying(&self) -> Value<'_> {
        self.underlying.value()
    }

    fn as_marshaler(&self) -> Option<&dyn MarshalText> {
        self.marshal.as_ref().map(|m| m as &dyn MarshalText)
    }

    fn as_display(&self) -> Option<&dyn fmt::Display> {
        self.display.as_ref().map(|d| d as &dyn fmt::Display)
    }
}

/// A spread of inputs covering every resolution path.
pub mod standard {
    use super::*;

    pub fn all() -> Vec<Literal> {
        let text = ["", "42", "-7", "1.5", "abc", "1e3"];
        let mut corpus = vec![
            Literal::Nil,
            Literal::Bool(true),
            Literal::I8(-8),
            Literal::I32(42),
            Literal::I64(-64),
            Literal::Isize(7),
            Literal::U8(8),
            Literal::U64(64),
            Literal::Usize(7),
            Literal::F32(42.5),
            Literal::F64(0.25),
            Literal::Char('7'),
            Literal::Bytes(None),
            Literal::Bytes(Some(b"12".to_vec())),
            Literal::Chars(None),
            Literal::Chars(Some(vec!['3', '4'])),
            Literal::Other(vec![1, 2]),
        ];
        corpus.extend(text.iter().map(|t| Literal::from(*t)));

        let kinds = [Kind::I16, Kind::U32, Kind::F64, Kind::Str, Kind::Char];
        corpus.extend(kinds.iter().map(|k| Literal::NullPtr(*k)));
        corpus.push(Literal::NullPtr(Kind::Named));
        corpus.push(Literal::ptr(Literal::I16(16)));
        corpus.push(Literal::ptr(Literal::Str("5".into())));
        corpus.push(Literal::ptr(Literal::ptr(Literal::NullPtr(Kind::Named))));

        let runes = Literal::Chars(Some(vec!['x']));
        let wrapped = Literal::ptr(Literal::I32(3));
        corpus.extend([
            NamedValue::new("MyInt", Literal::I64(42)).into(),
            NamedValue::new("MyUint", Literal::U16(9)).into(),
            NamedValue::new("MyFloat", Literal::F64(2.5)).into(),
            NamedValue::new("MyString", Literal::from("17")).into(),
            NamedValue::new("MyBytes", Literal::Bytes(None)).into(),
            NamedValue::new("MyRunes", runes).into(),
            NamedValue::new("Wrapped", wrapped).into(),
            NamedValue::new("Answer", Literal::Other(vec![]))
                .with_marshal(Marshal::Text("42".into()))
                .into(),
            NamedValue::new("Broken", Literal::Str("1".into()))
                .with_marshal(Marshal::Fail("marshal failure".into()))
                .into(),
            NamedValue::new("Shout", Literal::Str("1".into()))
                .with_display("1!")
                .into(),
            NamedValue::new("Quiet", Literal::Str("x".into()))
                .with_display("8")
                .into(),
        ]);
        let inner: Literal = NamedValue::new("MyInt", Literal::I8(1)).into();
        corpus.push(Literal::ptr(inner));
        corpus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_borrow_as_values() {
        let lit = Literal::ptr(Literal::Str("hi".into()));
        assert_eq!(lit.value().type_name(), "*&str");

        let nil = Literal::NullPtr(Kind::I32);
        assert_eq!(nil.value().type_name(), "*i32");
    }

    #[test]
    fn named_values_expose_capabilities() {
        let named = NamedValue::new("Answer", Literal::Nil)
            .with_marshal(Marshal::Fail("nope".into()))
            .with_display("shown");
        assert_eq!(named.type_name(), "Answer");
        assert!(named.as_marshaler().unwrap().marshal_text().is_err());
        assert_eq!(named.as_display().unwrap().to_string(), "shown");
    }

    #[test]
    fn literals_roundtrip_through_json() {
        let lit: Literal = NamedValue::new("MyBytes", Literal::Bytes(None)).into();
        let json = serde_json::to_string(&lit).unwrap();
        let parsed: Literal = serde_json::from_str(&json).unwrap();
        assert_eq!(lit, parsed);

        let parsed: Literal = serde_json::from_str(r#"{"null_ptr": "i64"}"#).unwrap();
        assert_eq!(parsed, Literal::NullPtr(Kind::I64));
    }

    #[test]
    fn standard_corpus_is_not_empty() {
        assert!(standard::all().len() > 30);
    }
}
