use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the four slots of the proportion `A / B = C / D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    A,
    B,
    C,
    D,
}

impl Field {
    /// All fields in scan priority order.
    pub const ALL: [Field; 4] = [Field::A, Field::B, Field::C, Field::D];

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Next field in reading order, wrapping from D back to A
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Previous field in reading order, wrapping from A to D
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed four-slot container keyed by [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fields<T>([T; 4]);

impl<T> Fields<T> {
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Self([a, b, c, d])
    }

    pub fn from_fn(mut f: impl FnMut(Field) -> T) -> Self {
        Self([f(Field::A), f(Field::B), f(Field::C), f(Field::D)])
    }

    /// Iterate `(field, value)` pairs in A, B, C, D order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &T)> {
        Field::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(&self, mut f: impl FnMut(Field, &T) -> U) -> Fields<U> {
        Fields::from_fn(|field| f(field, &self[field]))
    }
}

impl<T> Index<Field> for Fields<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        &self.0[field.index()]
    }
}

impl<T> IndexMut<Field> for Fields<T> {
    fn index_mut(&mut self, field: Field) -> &mut T {
        &mut self.0[field.index()]
    }
}
