//! Target kinds and value shapes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of types a value can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TargetKind {
    /// Signed integer, returned as `isize`.
    Int,
    /// Unsigned integer, returned as `usize`.
    Uint,
    /// Floating point, returned as `f64`.
    Float,
    /// Text, returned as `String`.
    String,
}

impl TargetKind {
    /// Every target kind, in declaration order.
    pub const ALL: [TargetKind; 4] = [
        TargetKind::Int,
        TargetKind::Uint,
        TargetKind::Float,
        TargetKind::String,
    ];

    /// Short name used in error messages.
    ///
    /// These strings are stable.
    pub fn name(&self) -> &'static str {
        match self {
            TargetKind::Int => "int",
            TargetKind::Uint => "uint",
            TargetKind::Float => "float",
            TargetKind::String => "string",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of a [`Value`](crate::Value), independent of its payload.
///
/// Typed pointers remember the kind of their pointee even when nil, which is
/// what lets a nil `Option<&i64>` count as an exact integer pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    /// The untyped nil.
    Nil,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Char,
    /// A string slice.
    Str,
    /// A byte slice, possibly nil.
    Bytes,
    /// A slice of `char`s, possibly nil.
    Chars,
    /// A typed pointer. Its pointee kind lives on [`Ptr`](crate::Ptr).
    Ptr,
    /// A user-defined type implementing [`Dynamic`](crate::Dynamic).
    Named,
    /// Anything else. Never coercible.
    Other,
}

impl Kind {
    /// Rust-flavored type name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::Str => "&str",
            Kind::Bytes => "&[u8]",
            Kind::Chars => "&[char]",
            Kind::Ptr => "pointer",
            Kind::Named => "named",
            Kind::Other => "other",
        }
    }

    /// Built-in signed integers.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 | Kind::Isize
        )
    }

    /// Built-in unsigned integers.
    pub fn is_unsigned(&self) -> bool {
        matches!(
            self,
            Kind::U8 | Kind::U16 | Kind::U32 | Kind::U64 | Kind::Usize
        )
    }

    /// `f32` or `f64`.
    pub fn is_float(&self) -> bool {
        matches!(self, Kind::F32 | Kind::F64)
    }

    /// Kinds that can be dereferenced by a single typed pointer and rendered
    /// as text without reflection.
    pub fn is_scalar_text(&self) -> bool {
        matches!(self, Kind::Str | Kind::Char)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
