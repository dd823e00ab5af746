use crate::constants::{BITS_PER_BYTE, LENGTH_HEADER_BITS, MAX_MESSAGE_BYTES};
use crate::error::StegoError;

pub fn embed(carrier: &[u8], payload: &[u8]) -> Result<Vec<u8>, StegoError> {
    let required = payload.len() as u64 * BITS_PER_BYTE as u64 + LENGTH_HEADER_BITS as u64;
    let available = carrier.len() as u64;

    if required > available || payload.len() > u32::MAX as usize {
        return Err(StegoError::CapacityExceeded { required, available });
    }

    let mut stego = carrier.to_vec();
    let length = payload.len() as u32;

    for (i, byte) in stego[..LENGTH_HEADER_BITS].iter_mut().enumerate() {
        let bit = ((length >> (31 - i)) & 1) as u8;
        *byte = (*byte & 0xFE) | bit;
    }

    for (i, &payload_byte) in payload.iter().enumerate() {
        let offset = LENGTH_HEADER_BITS + i * BITS_PER_BYTE;
        for (j, byte) in stego[offset..(offset + BITS_PER_BYTE)].iter_mut().enumerate() {
            let bit = (payload_byte >> (7 - j)) & 1;
            *byte = (*byte & 0xFE) | bit;
        }
    }

    Ok(stego)
}

pub fn extract(carrier: &[u8]) -> Result<Vec<u8>, StegoError> {
    if carrier.len() < LENGTH_HEADER_BITS {
        return Err(StegoError::NoMessageFound);
    }

    let mut declared: u32 = 0;
    for &byte in &carrier[..LENGTH_HEADER_BITS] {
        declared = (declared << 1) | u32::from(byte & 1);
    }

    if declared == 0 || declared > MAX_MESSAGE_BYTES {
        return Err(StegoError::NoMessageFound);
    }

    let length = declared as usize;
    if LENGTH_HEADER_BITS + length * BITS_PER_BYTE > carrier.len() {
        return Err(StegoError::NoMessageFound);
    }

    let payload = carrier[LENGTH_HEADER_BITS..]
        .chunks_exact(BITS_PER_BYTE)
        .take(length)
        .map(|bits| bits.iter().fold(0u8, |byte, &b| (byte << 1) | (b & 1)))
        .collect();

    Ok(payload)
}
