//! The kogut entity and its input shape.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a kogut is created.
///
/// Never reused and never mutated once assigned.
pub type KogutId = i32;

/// A kogut record.
///
/// `age` is tri-state on the wire: an integer (zero included), an
/// explicit `null`, or an omitted field. The latter two both map to
/// `None`, and `None` serializes back as an absent field, so a stored
/// age of 0 stays distinguishable from "no age recorded".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kogut {
    /// Unique identifier.
    pub id: KogutId,
    /// Display name; never persisted empty.
    pub name: String,
    /// Age in years, when recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// Sex flag.
    pub sex: bool,
}

/// Request body for the create and update operations.
///
/// Carries every mutable field of [`Kogut`]; the id is supplied by the
/// store (create) or the path (update). `sex` defaults to `false` when
/// the field is omitted, but callers should always send it explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KogutInput {
    /// Display name; must be non-empty.
    pub name: String,
    /// Age in years; omit or send `null` for "unknown".
    #[serde(default)]
    pub age: Option<i32>,
    /// Sex flag.
    #[serde(default)]
    pub sex: bool,
}
