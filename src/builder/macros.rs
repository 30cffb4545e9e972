//! Macros for ergonomic state and event definitions.

/// Generate a unit-variant state enum and its State trait implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`,
/// `Serialize` and `Deserialize`.
///
/// # Example
///
/// ```
/// use turnstile::core::State;
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum OriginState {
///         Active,
///         Inactive,
///         Disabled,
///     }
/// }
///
/// assert_eq!(OriginState::Inactive.name(), "Inactive");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an event enum, its fieldless kind enum, and the Event trait
/// implementation.
///
/// Variants may be unit, tuple or struct variants. The event enum derives
/// `Debug`; the kind enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// and `Debug` and has one variant per event variant, with the same name.
///
/// # Example
///
/// ```
/// use turnstile::core::Event;
/// use turnstile::event_enum;
///
/// event_enum! {
///     pub enum PoolEvent => PoolEventKind {
///         ConnectionBorrowed { id: u64 },
///         ConnectionReturned(u64),
///         Closed,
///     }
/// }
///
/// let event = PoolEvent::ConnectionBorrowed { id: 7 };
/// assert_eq!(event.kind(), PoolEventKind::ConnectionBorrowed);
/// assert_eq!(PoolEvent::Closed.kind(), PoolEventKind::Closed);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident => $kind:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple_ty:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple_ty),* ) )?
                $( { $($field : $field_ty),* } )?
            ),*
        }

        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }
        }
    };
}
