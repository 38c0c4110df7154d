// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Zero-value detection.
//!
//! `omitempty` and the empty-record check need to know whether a value is
//! the zero value of its type. [`IsZero`] answers that for standard types;
//! `#[derive(TagMap)]` implements it for records as the conjunction over all
//! of their fields.
//!
//! Implement it by hand for custom leaf types:
//!
//! ```rust
//! use tagmap_core::IsZero;
//!
//! struct Cents(u64);
//!
//! impl IsZero for Cents {
//!     fn is_zero(&self) -> bool {
//!         self.0 == 0
//!     }
//! }
//! ```

use std::{
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    rc::Rc,
    sync::Arc,
    time::Duration
};

use serde_json::{Map, Value};

/// Types with a distinguished zero value.
pub trait IsZero {
    /// Returns `true` if `self` is the zero value of its type.
    fn is_zero(&self) -> bool;
}

macro_rules! zero_by_eq {
    ($zero:expr => $($ty:ty),* $(,)?) => {
        $(
            impl IsZero for $ty {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

zero_by_eq!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
zero_by_eq!(0.0 => f32, f64);
zero_by_eq!(false => bool);
zero_by_eq!('\0' => char);
zero_by_eq!(Duration::ZERO => Duration);

macro_rules! zero_by_len {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> IsZero for $ty {
                #[inline]
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

zero_by_len!(
    [] String,
    [] str,
    [T] [T],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [] Map<String, Value>,
    [] OsStr,
    [] OsString
);

impl IsZero for Path {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

impl IsZero for PathBuf {
    fn is_zero(&self) -> bool {
        self.as_os_str().is_empty()
    }
}

// Tuples are zero when every element is.
macro_rules! zero_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: IsZero),+> IsZero for ($($name,)+) {
                #[allow(non_snake_case)]
                fn is_zero(&self) -> bool {
                    let ($($name,)+) = self;
                    true $(&& $name.is_zero())+
                }
            }
        )*
    };
}

zero_tuple!(
    (A),
    (A, B),
    (A, B, C),
    (A, B, C, D),
    (A, B, C, D, E),
    (A, B, C, D, E, F),
    (A, B, C, D, E, F, G),
    (A, B, C, D, E, F, G, H)
);

impl IsZero for () {
    fn is_zero(&self) -> bool {
        true
    }
}

impl<T: IsZero, const N: usize> IsZero for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(IsZero::is_zero)
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: IsZero + ?Sized> IsZero for Box<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Rc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for Arc<T> {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl IsZero for Cow<'_, str> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for Value {
    fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty()
        }
    }
}
