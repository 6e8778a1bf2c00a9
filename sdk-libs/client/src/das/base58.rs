use crate::das::error::DasError;

pub trait Base58Conversions {
    fn to_base58(&self) -> String;
    fn from_base58(s: &str) -> Result<Self, DasError>
    where
        Self: Sized;
}

impl Base58Conversions for [u8; 32] {
    fn to_base58(&self) -> String {
        bs58::encode(self).into_string()
    }

    fn from_base58(s: &str) -> Result<Self, DasError> {
        decode_base58_to_fixed_array(s)
    }
}

/// Decodes a base58 string into exactly `N` bytes. Surrounding whitespace is
/// tolerated because some indexers pad hash strings.
pub fn decode_base58_to_fixed_array<const N: usize>(input: &str) -> Result<[u8; N], DasError> {
    let mut buffer = [0u8; N];
    let decoded_len = bs58::decode(input.trim())
        .onto(&mut buffer)
        .map_err(|_| DasError::InvalidResponseData)?;

    if decoded_len != N {
        return Err(DasError::InvalidResponseData);
    }

    Ok(buffer)
}
