//! Serde support for curve points, encoded as their compressed hex strings.

use core::fmt;

use serde::de::{Error as DeError, Visitor};
use serde::ser::Error as SerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bls12381::{G1, G2};
use crate::Result;

macro_rules! impl_serde_compressed_hex {
    ($point:ident, $len:expr) => {
        impl Serialize for $point {
            fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
                let hex = self.to_compressed_hex().map_err(S::Error::custom)?;
                serializer.serialize_str(&hex)
            }
        }

        impl<'de> Deserialize<'de> for $point {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
                deserializer.deserialize_str(CompressedHexVisitor::<$point>::new(
                    $len,
                    $point::from_compressed_hex,
                ))
            }
        }
    };
}

struct CompressedHexVisitor<T> {
    len: usize,
    decode: fn(&str) -> Result<T>,
}

impl<T> CompressedHexVisitor<T> {
    fn new(len: usize, decode: fn(&str) -> Result<T>) -> Self {
        Self { len, decode }
    }
}

impl<'de, T> Visitor<'de> for CompressedHexVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a compressed point of {} hex characters", self.len)
    }

    fn visit_str<E: DeError>(self, v: &str) -> core::result::Result<T, E> {
        (self.decode)(v).map_err(E::custom)
    }
}

impl_serde_compressed_hex!(G1, 96);
impl_serde_compressed_hex!(G2, 192);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_serde_json() {
        let g = G1::generator().scalar_mul(5u64);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(
            json,
            "\"b0e7791fb972fe014159aa33a98622da3cdc98ff707965e536d8636b5fcc5ac7a91a8c46e59a00dca575af0f18fb13dc\""
        );
        assert_eq!(serde_json::from_str::<G1>(&json).unwrap(), g);

        let h = G2::generator().double();
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(serde_json::from_str::<G2>(&json).unwrap(), h);

        let pair = (G1::identity(), G2::generator());
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(serde_json::from_str::<(G1, G2)>(&json).unwrap(), pair);

        assert!(serde_json::from_str::<G1>("\"c0\"").is_err());
        assert!(serde_json::from_str::<G2>("5").is_err());
    }
}
