//! Variable identifiers.
//!
//! Lambda and variable tokens carry a base-94 id with no upper bound, so the
//! wire-level [`VarId`] wraps a `BigUint`. Hashing and comparing big integers
//! on every environment lookup is wasteful, so each arena interns the ids it
//! sees into dense 32-bit [`VarName`]s.

use std::fmt;

use num_bigint::BigUint;
use rustc_hash::FxHashMap;

/// A variable id exactly as decoded from a `L` or `v` token.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct VarId(BigUint);

impl VarId {
    pub fn new(id: BigUint) -> Self {
        VarId(id)
    }

    /// The underlying integer.
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// The id as a machine integer, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }
}

impl From<u64> for VarId {
    fn from(id: u64) -> Self {
        VarId(BigUint::from(id))
    }
}

impl From<BigUint> for VarId {
    fn from(id: BigUint) -> Self {
        VarId(id)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interned variable name, valid only within the arena that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct VarName(u32);

impl VarName {
    /// Get the index into the interner.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Bidirectional map between [`VarId`] and [`VarName`].
#[derive(Clone, Debug, Default)]
pub struct VarInterner {
    map: FxHashMap<VarId, VarName>,
    ids: Vec<VarId>,
}

impl VarInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern an id, returning the existing name if it was seen before.
    pub fn intern(&mut self, id: &VarId) -> VarName {
        if let Some(&name) = self.map.get(id) {
            return name;
        }
        let raw = u32::try_from(self.ids.len()).unwrap_or_else(|_| {
            panic!("variable interner exceeded {} entries", u32::MAX)
        });
        let name = VarName(raw);
        self.ids.push(id.clone());
        self.map.insert(id.clone(), name);
        name
    }

    /// Look up the wire id for an interned name.
    pub fn lookup(&self, name: VarName) -> &VarId {
        &self.ids[name.index()]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
