//! Error types shared by the disjoint-set engine and its consumers.
//!
//! Every public error enum is paired with a code enum carrying a stable,
//! machine-readable identifier so callers can match on failures without
//! depending on message text.

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element id lies outside `[0, capacity)`.
    #[error("element {element} is out of bounds for capacity {capacity}")]
    OutOfBounds {
        /// The offending element id.
        element: usize,
        /// Number of addressable elements in the set.
        capacity: usize,
    },
    /// The element exists in the universe but was never activated.
    #[error("element {element} has not been activated")]
    Inactive {
        /// The inactive element id.
        element: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The element id lies outside `[0, capacity)`.
        OutOfBounds => OutOfBounds { .. } => "DISJOINT_SET_OUT_OF_BOUNDS",
        /// The element exists in the universe but was never activated.
        Inactive => Inactive { .. } => "DISJOINT_SET_INACTIVE_ELEMENT",
    }
}
