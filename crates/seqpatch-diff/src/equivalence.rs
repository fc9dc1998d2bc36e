//! The equivalence capability supplied by callers.
//!
//! Diffing compares elements through an [`Equivalence`] provider rather than
//! `PartialEq`, so callers can choose coarser or finer notions of "the same
//! element" (e.g. comparing records with timestamps truncated to date-only).
//! The asynchronous form exists so equality can depend on I/O (a remote
//! lookup, a content hash fetch) without blocking a thread per check.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use async_trait::async_trait;

/// Failure of an individual equality or hash check.
#[derive(Debug, thiserror::Error)]
pub enum EquivalenceError {
    /// The provider cannot handle this element at all.
    #[error("invalid element: {0}")]
    InvalidElement(String),

    /// The check itself raised.
    #[error("check failed: {0}")]
    Failed(String),

    /// An asynchronous check did not complete in time.
    #[error("check timed out after {0:?}")]
    Timeout(Duration),
}

/// A caller-supplied equivalence relation over elements of type `T`.
///
/// Contract: `equals` must be reflexive, symmetric, and transitive, and
/// `hash_value(x) == hash_value(y)` must hold whenever `equals(x, y)` is
/// true. The engine relies on the hash contract to skip `equals` calls for
/// pairs whose hashes differ.
pub trait Equivalence<T> {
    /// Are `a` and `b` interchangeable for diffing purposes?
    fn equals(&self, a: &T, b: &T) -> Result<bool, EquivalenceError>;

    /// Hash consistent with [`Equivalence::equals`].
    fn hash_value(&self, x: &T) -> Result<u64, EquivalenceError>;
}

/// The asynchronous form of [`Equivalence`].
///
/// Checks are awaited strictly sequentially by the engine, so implementations
/// never see concurrent calls from a single diff.
#[async_trait]
pub trait AsyncEquivalence<T: Sync>: Sync {
    /// Are `a` and `b` interchangeable for diffing purposes?
    async fn equals(&self, a: &T, b: &T) -> Result<bool, EquivalenceError>;

    /// Hash consistent with [`AsyncEquivalence::equals`].
    async fn hash_value(&self, x: &T) -> Result<u64, EquivalenceError>;
}

/// Adapter exposing a synchronous provider through the asynchronous trait.
///
/// The sync result is returned from an already-ready future, mirroring how
/// callers with a plain equality lift it into the suspending form.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blocking<E>(pub E);

#[async_trait]
impl<T, E> AsyncEquivalence<T> for Blocking<E>
where
    T: Sync,
    E: Equivalence<T> + Sync,
{
    async fn equals(&self, a: &T, b: &T) -> Result<bool, EquivalenceError> {
        self.0.equals(a, b)
    }

    async fn hash_value(&self, x: &T) -> Result<u64, EquivalenceError> {
        self.0.hash_value(x)
    }
}

/// Equivalence by structural equality: delegates to `Eq` and `Hash`.
///
/// This is the "full field equality" notion most callers want when their
/// element type already derives `PartialEq` and `Hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Structural;

impl<T: Eq + Hash> Equivalence<T> for Structural {
    fn equals(&self, a: &T, b: &T) -> Result<bool, EquivalenceError> {
        Ok(a == b)
    }

    fn hash_value(&self, x: &T) -> Result<u64, EquivalenceError> {
        let mut hasher = DefaultHasher::new();
        x.hash(&mut hasher);
        Ok(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_matches_eq() {
        let eq = Structural;
        assert!(eq.equals(&1u32, &1u32).unwrap());
        assert!(!eq.equals(&1u32, &2u32).unwrap());
    }

    #[test]
    fn structural_hash_agrees_with_equals() {
        let eq = Structural;
        let a = "hello".to_string();
        let b = "hello".to_string();
        assert!(eq.equals(&a, &b).unwrap());
        assert_eq!(eq.hash_value(&a).unwrap(), eq.hash_value(&b).unwrap());
    }

    #[tokio::test]
    async fn blocking_adapter_lifts_sync_provider() {
        let eq = Blocking(Structural);
        let result = eq.equals(&7u8, &7u8).await.unwrap();
        assert!(result);
    }

    #[tokio::test]
    async fn custom_async_provider() {
        struct CaseInsensitive;

        #[async_trait]
        impl AsyncEquivalence<String> for CaseInsensitive {
            async fn equals(&self, a: &String, b: &String) -> Result<bool, EquivalenceError> {
                Ok(a.to_lowercase() == b.to_lowercase())
            }

            async fn hash_value(&self, x: &String) -> Result<u64, EquivalenceError> {
                Structural.hash_value(&x.to_lowercase())
            }
        }

        let eq = CaseInsensitive;
        assert!(eq
            .equals(&"Apple".to_string(), &"aPPLE".to_string())
            .await
            .unwrap());
    }
}
