//! Declarative macro for protocol enums that travel as numeric codes
//!
//! Every enumerated field in the device protocol is sent as a `u32`. This macro
//! generates the Rust enum together with its code table so the two can never
//! drift apart.

/// Define a protocol enum with fixed wire codes
///
/// Generates:
/// - the enum itself (`Copy`, `Eq`, `Hash`, serde)
/// - `NAME` and `ALL` associated constants
/// - `code()` / `from_code()` and the matching `From`/`TryFrom<u32>` impls
///
/// # Example
/// ```rust,ignore
/// define_wire_enum! {
///     /// Repeat mode reported by the device
///     pub enum MediaPlayerRepeatMode {
///         Off = 0,
///         One = 1,
///         All = 2,
///     }
/// }
/// ```
macro_rules! define_wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),* $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Protocol name of this enum, used in error messages
            pub const NAME: &'static str = stringify!($name);

            /// Every variant, in wire-code order
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Numeric code used on the wire
            pub fn code(self) -> u32 {
                match self {
                    $( $name::$variant => $code, )*
                }
            }

            /// Decode a numeric wire code
            ///
            /// Returns `ApiError::UnknownEnumValue` for codes this protocol
            /// revision does not define.
            pub fn from_code(code: u32) -> $crate::Result<Self> {
                match code {
                    $( $code => Ok($name::$variant), )*
                    other => Err($crate::ApiError::UnknownEnumValue {
                        enum_name: Self::NAME,
                        value: other,
                    }),
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = $crate::ApiError;

            fn try_from(code: u32) -> $crate::Result<Self> {
                Self::from_code(code)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value.code()
            }
        }
    };
}
