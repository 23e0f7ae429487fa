//! Strongly typed identifier wrappers.
//!
//! Agents and traps live in separate namespaces.  Both are `Copy + Ord + Hash`
//! so they can be used as map keys without ceremony.  [`Owner`] is the union
//! used to tag a trace sequence, and it owns the mapping onto the single
//! signed integer column of the output stream.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of a traveler or wild traveler.  Travelers take
    /// `0..travelers`, wild travelers the range right after.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identity of a placed trap, assigned in placement order.
    pub struct TrapId(u32);
}

// ── Owner ─────────────────────────────────────────────────────────────────────

/// Who a [`TraceSequence`][crate::TraceSequence] belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    Agent(AgentId),
    Trap(TrapId),
}

impl Owner {
    /// The integer printed in the id column.
    ///
    /// Agents print their own index; trap `k` prints as `-(k + 1)` so the two
    /// namespaces never collide.
    pub fn wire_id(self) -> i64 {
        match self {
            Owner::Agent(a) => a.0 as i64,
            Owner::Trap(t)  => -(t.0 as i64) - 1,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Agent(a) => a.fmt(f),
            Owner::Trap(t)  => t.fmt(f),
        }
    }
}

impl From<AgentId> for Owner {
    fn from(a: AgentId) -> Self {
        Owner::Agent(a)
    }
}

impl From<TrapId> for Owner {
    fn from(t: TrapId) -> Self {
        Owner::Trap(t)
    }
}
