use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference-counted, immutable string for zero-cost cloning.
///
/// Render command lists are rebuilt every frame and the same labels appear
/// in each of them; wrapping `Arc<str>` makes `.clone()` a refcount bump
/// instead of a heap allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedStr(Arc<str>);

impl SharedStr {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SharedStr {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SharedStr {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl std::ops::Deref for SharedStr {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SharedStr {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SharedStr {
    #[inline]
    fn from(s: &str) -> Self {
        SharedStr(Arc::from(s))
    }
}

impl From<String> for SharedStr {
    #[inline]
    fn from(s: String) -> Self {
        SharedStr(Arc::from(s.as_str()))
    }
}

impl std::fmt::Display for SharedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// Hand-rolled serde impls so the `rc` feature flag stays off.

impl Serialize for SharedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SharedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SharedStr(Arc::from(s.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_is_cheap_and_equal() {
        let a = SharedStr::from("portfolio");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b, "portfolio");
    }

    #[test]
    fn from_string() {
        let s = SharedStr::from(format!("item {}", 3));
        assert_eq!(s, "item 3");
    }

    #[test]
    fn serde_roundtrip() {
        let s = SharedStr::from("hero");
        let json = serde_json::to_string(&s).unwrap_or_default();
        assert_eq!(json, "\"hero\"");
        let back: SharedStr = serde_json::from_str(&json).unwrap_or_else(|_| SharedStr::from(""));
        assert_eq!(back, "hero");
    }

    #[test]
    fn display_and_deref() {
        let s = SharedStr::from("nav");
        assert_eq!(format!("{s}"), "nav");
        let _: &str = &s;
    }
}
