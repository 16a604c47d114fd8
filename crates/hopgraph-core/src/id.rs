//! Packed node identifiers.
//!
//! A node identity carries its partition id in the high 16 bits and its
//! local id in the low 16 bits. Input files express ids in this split
//! form, so the packing is part of the external contract. Local ids are
//! only guaranteed unique within one registry; the same local id may
//! appear in different partitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Packed node identifier: `partition << 16 | local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Packs a partition id and a local id into one identifier.
    #[must_use]
    pub fn new(partition: u16, local: u16) -> Self {
        Self(u32::from(partition) << 16 | u32::from(local))
    }

    /// Returns the partition id (high 16 bits).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // high half of a u32
    pub fn partition(self) -> u16 {
        (self.0 >> 16) as u16
    }

    /// Returns the local id (low 16 bits).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // masked to 16 bits
    pub fn local(self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Returns the raw packed value.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.partition(), self.local())
    }
}
