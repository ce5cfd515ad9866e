//! Identifiers handed to the editor by the page.
//!
//! All three are opaque to the editor. A `RecordId` is only ever spliced into
//! the endpoint URL, and the DOM ids are only ever passed back to the host.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(SmolStr);

        impl $name {
            pub fn new(value: impl AsRef<str>) -> Self {
                Self(SmolStr::new(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(SmolStr::from(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Primary key of the record whose description is edited.
    ///
    /// Pages pass either a channel-name fragment or a numeric key; both are
    /// kept as text and never validated here.
    RecordId
);

opaque_id!(
    /// Id of the element whose content is swapped between fragments.
    ContainerId
);

opaque_id!(
    /// Id of the form serialized on save.
    FormId
);

macro_rules! record_id_from_int {
    ($($int:ty),*) => {
        $(
            impl From<$int> for RecordId {
                fn from(value: $int) -> Self {
                    Self(smol_str::format_smolstr!("{value}"))
                }
            }
        )*
    };
}

record_id_from_int!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_integer() {
        assert_eq!(RecordId::from(42u32).as_str(), "42");
        assert_eq!(RecordId::from(-7i64).as_str(), "-7");
    }

    #[test]
    fn test_record_id_from_string_is_verbatim() {
        let pk = RecordId::from("H1:SUS-ETMX_M0");
        assert_eq!(pk.to_string(), "H1:SUS-ETMX_M0");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&ContainerId::new("desc1")).unwrap();
        assert_eq!(json, "\"desc1\"");
        let back: FormId = serde_json::from_str("\"f1\"").unwrap();
        assert_eq!(back.as_str(), "f1");
    }
}
