use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

/// Capability bound for everything stored in the collections of this crate.
///
/// A type is `Serializable` when it can be converted to and from the
/// persisted byte form and copied by value. The trait is blanket-implemented;
/// deriving `serde::Serialize`, `serde::Deserialize` and `Clone` is all a
/// type needs to qualify.
pub trait Serializable: Serialize + DeserializeOwned + Clone {
    fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(self, bincode::config::standard()).map_err(Into::into)
    }

    fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Result<Self> {
        bincode::serde::decode_from_slice(bytes.as_ref(), bincode::config::standard())
            .map(|(value, _)| value)
            .map_err(Into::into)
    }
}

impl<T> Serializable for T where T: Serialize + DeserializeOwned + Clone {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_round_trip() {
        let value = 42u32;
        let bytes = value.to_bytes().unwrap();
        let back = u32::from_bytes(&bytes).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    fn string_round_trip() {
        let value = "Frodo".to_string();
        let back = String::from_bytes(value.to_bytes().unwrap()).unwrap();
        assert_eq!(value, back);
    }

    #[test]
    fn decode_fails_on_garbage() {
        let result = String::from_bytes([0xff, 0xff, 0xff, 0xff, 0xff]);
        assert!(result.is_err());
    }
}
