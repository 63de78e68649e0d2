//! Strongly typed identifier wrappers.
//!
//! Ids are `Copy + Ord + Hash` so they work as map keys and sort keys without
//! ceremony.  A `RouteId` is assigned by the routing collaborator and is only
//! meaningful within the candidate set it came from.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Raw integer value, e.g. for CSV columns.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identifier of one candidate route within a `CandidateSet`.
    pub struct RouteId(u32) => "route";
}

typed_id! {
    /// Identifier of one simulated trip.  Independent trips never share state.
    pub struct TripId(u32) => "trip";
}
