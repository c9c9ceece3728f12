//! Base58Check addresses and WIF keys under a network's prefixes.

use trbod_consensus::Base58Prefixes;

use crate::hash::{hash160, sha256d};
use crate::script::{p2pkh_hash, p2pkh_script, p2sh_hash, p2sh_script};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    InvalidLength,
    InvalidCharacter,
    InvalidChecksum,
    UnknownPrefix,
}

impl std::fmt::Display for AddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressError::InvalidLength => write!(f, "invalid payload length"),
            AddressError::InvalidCharacter => write!(f, "invalid base58 character"),
            AddressError::InvalidChecksum => write!(f, "checksum mismatch"),
            AddressError::UnknownPrefix => write!(f, "prefix does not belong to this network"),
        }
    }
}

impl std::error::Error for AddressError {}

pub fn address_to_script_pubkey(
    address: &str,
    prefixes: &Base58Prefixes,
) -> Result<Vec<u8>, AddressError> {
    let payload = base58check_decode(address)?;
    if let Some(hash) = payload.strip_prefix(prefixes.pubkey_address) {
        return Ok(p2pkh_script(&hash20(hash)?));
    }
    if let Some(hash) = payload.strip_prefix(prefixes.script_address) {
        return Ok(p2sh_script(&hash20(hash)?));
    }
    Err(AddressError::UnknownPrefix)
}

pub fn script_pubkey_to_address(script: &[u8], prefixes: &Base58Prefixes) -> Option<String> {
    if let Some(hash) = p2pkh_hash(script) {
        return Some(prefixed(prefixes.pubkey_address, &hash));
    }
    p2sh_hash(script).map(|hash| prefixed(prefixes.script_address, &hash))
}

/// P2PKH address paying to `pubkey`.
pub fn pubkey_to_address(pubkey: &[u8], prefixes: &Base58Prefixes) -> String {
    prefixed(prefixes.pubkey_address, &hash160(pubkey))
}

pub fn secret_key_to_wif(secret: &[u8; 32], prefixes: &Base58Prefixes, compressed: bool) -> String {
    let mut body = secret.to_vec();
    if compressed {
        body.push(0x01);
    }
    prefixed(prefixes.secret_key, &body)
}

pub fn wif_to_secret_key(
    wif: &str,
    prefixes: &Base58Prefixes,
) -> Result<([u8; 32], bool), AddressError> {
    let payload = base58check_decode(wif)?;
    let body = payload
        .strip_prefix(prefixes.secret_key)
        .ok_or(AddressError::UnknownPrefix)?;
    let compressed = match body.len() {
        32 => false,
        33 if body[32] == 0x01 => true,
        _ => return Err(AddressError::InvalidLength),
    };
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&body[..32]);
    Ok((secret, compressed))
}

fn hash20(bytes: &[u8]) -> Result<[u8; 20], AddressError> {
    bytes.try_into().map_err(|_| AddressError::InvalidLength)
}

fn prefixed(prefix: &[u8], body: &[u8]) -> String {
    let mut payload = Vec::with_capacity(prefix.len() + body.len());
    payload.extend_from_slice(prefix);
    payload.extend_from_slice(body);
    base58check_encode(&payload)
}

pub fn base58check_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let mut bytes = base58_decode(input)?;
    if bytes.len() < 4 {
        return Err(AddressError::InvalidLength);
    }
    let checksum = bytes.split_off(bytes.len() - 4);
    if checksum[..] != sha256d(&bytes)[..4] {
        return Err(AddressError::InvalidChecksum);
    }
    Ok(bytes)
}

pub fn base58check_encode(payload: &[u8]) -> String {
    let mut data = payload.to_vec();
    data.extend_from_slice(&sha256d(payload)[..4]);
    base58_encode(&data)
}

fn base58_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    if input.is_empty() {
        return Err(AddressError::InvalidLength);
    }
    // Big-endian base-256 accumulator.
    let mut bytes: Vec<u8> = Vec::new();
    for ch in input.bytes() {
        let mut carry = ALPHABET
            .iter()
            .position(|symbol| *symbol == ch)
            .ok_or(AddressError::InvalidCharacter)? as u32;
        for byte in bytes.iter_mut().rev() {
            carry += u32::from(*byte) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.insert(0, carry as u8);
            carry >>= 8;
        }
    }

    let zeros = input.bytes().take_while(|ch| *ch == b'1').count();
    let mut out = vec![0u8; zeros];
    out.extend_from_slice(&bytes);
    Ok(out)
}

fn base58_encode(data: &[u8]) -> String {
    // Big-endian base-58 digits.
    let mut digits: Vec<u8> = Vec::new();
    for byte in data {
        let mut carry = u32::from(*byte);
        for digit in digits.iter_mut().rev() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.insert(0, (carry % 58) as u8);
            carry /= 58;
        }
    }

    let zeros = data.iter().take_while(|byte| **byte == 0).count();
    std::iter::repeat('1')
        .take(zeros)
        .chain(digits.iter().map(|digit| ALPHABET[*digit as usize] as char))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base58_leading_zeros() {
        assert_eq!(base58_encode(&[0, 0, 1]), "112");
        assert_eq!(base58_decode("112").expect("decode"), [0, 0, 1]);
        assert_eq!(base58_encode(&[0]), "1");
        assert_eq!(base58_encode(&[]), "");
        assert_eq!(base58_decode("0OIl"), Err(AddressError::InvalidCharacter));
    }

    #[test]
    fn checksum_detects_corruption() {
        let encoded = base58check_encode(&[65, 1, 2, 3]);
        assert_eq!(base58check_decode(&encoded).expect("decode"), [65, 1, 2, 3]);

        let mut corrupted = encoded.into_bytes();
        let last = corrupted.len() - 1;
        corrupted[last] = if corrupted[last] == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).expect("ascii");
        assert_eq!(
            base58check_decode(&corrupted),
            Err(AddressError::InvalidChecksum)
        );
    }
}
