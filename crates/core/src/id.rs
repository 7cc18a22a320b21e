// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric identifiers and their allocator

use thiserror::Error;

/// Define a newtype ID wrapper around `u64`.
///
/// Generates `new()`, `get()`, `Display` (the bare number), `From<u64>`, and
/// `PartialEq<u64>` implementations. IDs are ordered by value, which is also
/// their allocation order.
///
/// ```ignore
/// define_id! {
///     /// Doc comment for the ID type.
///     pub struct MyId;
/// }
/// ```
#[macro_export]
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        pub struct $name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl PartialEq<u64> for $name {
            fn eq(&self, other: &u64) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Every value from the sequence's base up to `u64::MAX` has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("id space exhausted after {last}")]
pub struct IdExhausted {
    pub last: u64,
}

/// Monotonic allocator for numeric IDs.
///
/// Not synchronized: callers hold it inside whatever lock guards the
/// collection the IDs index into, so allocation order matches insertion order.
#[derive(Debug, Clone)]
pub struct IdSequence {
    /// `None` once `u64::MAX` has been allocated
    next: Option<u64>,
    issued: u64,
}

impl IdSequence {
    /// Start a sequence whose first allocated value is `base`.
    pub fn starting_at(base: u64) -> Self {
        Self {
            next: Some(base),
            issued: 0,
        }
    }

    /// Allocate the next value. Never wraps: after `u64::MAX` every call fails.
    pub fn next_id<T: From<u64>>(&mut self) -> Result<T, IdExhausted> {
        let id = self.next.ok_or(IdExhausted { last: u64::MAX })?;
        self.next = id.checked_add(1);
        self.issued = self.issued.saturating_add(1);
        Ok(T::from(id))
    }

    /// The value the next call to [`IdSequence::next_id`] will return.
    pub fn peek(&self) -> Option<u64> {
        self.next
    }

    /// How many values have been allocated.
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
