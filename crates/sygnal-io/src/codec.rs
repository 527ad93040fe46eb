//! Encoding and decoding of the length-prefixed binary signal format.

use sygnal_core::{Complex64, Error, Metadata, Result, Signal};

/// Byte width of one sample on the wire.
fn sample_width(is_complex: bool) -> usize {
    if is_complex { 16 } else { 8 }
}

/// Encode a metadata/signal pair into the binary format.
///
/// The pair must be consistent: `metadata.num_samples` equal to the signal
/// length and `metadata.is_complex` matching the sample domain. A real
/// signal tagged complex is widened with zero imaginary parts; a complex
/// signal tagged real would silently lose its imaginary parts, so it is
/// rejected as [`Error::MalformedMetadata`].
pub fn encode(metadata: &Metadata, signal: &Signal) -> Result<Vec<u8>> {
    metadata.validate(signal)?;
    if signal.is_complex() && !metadata.is_complex {
        return Err(Error::MalformedMetadata(
            "is_complex is false but the signal holds complex samples".into(),
        ));
    }

    let metadata_json = serde_json::to_vec(metadata)
        .map_err(|e| Error::MalformedMetadata(e.to_string()))?;

    let payload_len = metadata.num_samples * sample_width(metadata.is_complex);
    let mut bytes = Vec::with_capacity(4 + metadata_json.len() + payload_len);
    bytes.extend_from_slice(&(metadata_json.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&metadata_json);

    if metadata.is_complex {
        for c in signal.to_complex() {
            bytes.extend_from_slice(&c.re.to_le_bytes());
            bytes.extend_from_slice(&c.im.to_le_bytes());
        }
    } else {
        // validate() plus the domain check above guarantee a real signal here
        for &x in signal.as_real().unwrap_or(&[]) {
            bytes.extend_from_slice(&x.to_le_bytes());
        }
    }

    Ok(bytes)
}

/// Decode a binary buffer into a metadata/signal pair.
///
/// Reads exactly `num_samples` samples after the metadata block; trailing
/// bytes are ignored. Fails with [`Error::MalformedMetadata`] when the JSON
/// is unparsable or missing a required field, and [`Error::CorruptFile`]
/// when the buffer is shorter than the metadata promises.
pub fn decode(bytes: &[u8]) -> Result<(Metadata, Signal)> {
    let header: [u8; 4] = bytes
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or(Error::CorruptFile {
            needed: 4,
            available: bytes.len(),
        })?;
    let metadata_len = u32::from_le_bytes(header) as usize;

    let metadata_json = bytes
        .get(4..4 + metadata_len)
        .ok_or(Error::CorruptFile {
            needed: metadata_len,
            available: bytes.len().saturating_sub(4),
        })?;
    let metadata: Metadata = serde_json::from_slice(metadata_json)
        .map_err(|e| Error::MalformedMetadata(e.to_string()))?;

    let payload = &bytes[4 + metadata_len..];
    // a hostile num_samples can overflow the byte count; treat it as corrupt
    let needed = metadata
        .num_samples
        .checked_mul(sample_width(metadata.is_complex))
        .ok_or(Error::CorruptFile {
            needed: usize::MAX,
            available: payload.len(),
        })?;
    if payload.len() < needed {
        return Err(Error::CorruptFile {
            needed,
            available: payload.len(),
        });
    }

    let signal = if metadata.is_complex {
        Signal::Complex(
            payload[..needed]
                .chunks_exact(16)
                .map(|pair| {
                    Complex64::new(read_f64(&pair[..8]), read_f64(&pair[8..]))
                })
                .collect(),
        )
    } else {
        Signal::Real(payload[..needed].chunks_exact(8).map(read_f64).collect())
    };

    Ok((metadata, signal))
}

fn read_f64(bytes: &[u8]) -> f64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    f64::from_le_bytes(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_real_bit_exact() {
        // End-to-end scenario: [1,2,3,4] at 2 Hz over 2 s.
        let metadata = Metadata::new(0.0, 2.0, 4);
        let signal = Signal::Real(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(metadata.duration, 2.0);

        let bytes = encode(&metadata, &signal).unwrap();
        let (back_meta, back_signal) = decode(&bytes).unwrap();

        assert_eq!(back_meta, metadata);
        assert_eq!(back_signal, signal);
    }

    #[test]
    fn test_roundtrip_complex_bit_exact() {
        let metadata = Metadata::new_complex(0.25, 100.0, 3);
        let signal = Signal::Complex(vec![
            Complex64::new(1.0, -1.0),
            Complex64::new(0.0, f64::MIN_POSITIVE),
            Complex64::new(-3.5, 1e300),
        ]);

        let bytes = encode(&metadata, &signal).unwrap();
        let (back_meta, back_signal) = decode(&bytes).unwrap();

        assert_eq!(back_meta, metadata);
        assert_eq!(back_signal, signal);
    }

    #[test]
    fn test_metadata_floats_roundtrip_to_the_last_ulp() {
        // a derived duration with a long decimal expansion must come back
        // bit-identical through the JSON leg
        let metadata = Metadata::new(0.0, 63865.128909292645, 113);
        let signal = Signal::Real(vec![0.0; 113]);

        let bytes = encode(&metadata, &signal).unwrap();
        let (back, _) = decode(&bytes).unwrap();
        assert_eq!(back.duration.to_bits(), metadata.duration.to_bits());
        assert_eq!(back.sampling_freq.to_bits(), metadata.sampling_freq.to_bits());
    }

    #[test]
    fn test_wire_layout() {
        let metadata = Metadata::new(0.0, 1.0, 1);
        let signal = Signal::Real(vec![1.5]);
        let bytes = encode(&metadata, &signal).unwrap();

        let metadata_len = u32::from_le_bytes(bytes[..4].try_into().unwrap()) as usize;
        let json: serde_json::Value =
            serde_json::from_slice(&bytes[4..4 + metadata_len]).unwrap();
        assert_eq!(json["num_samples"], 1);
        assert_eq!(json["is_complex"], false);

        // payload is exactly one little-endian double
        assert_eq!(bytes.len(), 4 + metadata_len + 8);
        assert_eq!(&bytes[4 + metadata_len..], &1.5f64.to_le_bytes());
    }

    #[test]
    fn test_truncated_payload_is_corrupt() {
        let metadata = Metadata::new(0.0, 10.0, 4);
        let signal = Signal::Real(vec![1.0, 2.0, 3.0, 4.0]);
        let mut bytes = encode(&metadata, &signal).unwrap();
        bytes.truncate(bytes.len() - 5);

        assert!(matches!(decode(&bytes), Err(Error::CorruptFile { .. })));
    }

    #[test]
    fn test_truncated_header_is_corrupt() {
        assert!(matches!(
            decode(&[0x01, 0x00]),
            Err(Error::CorruptFile { .. })
        ));
    }

    #[test]
    fn test_unparsable_metadata() {
        let garbage = b"not json at all";
        let mut bytes = (garbage.len() as u32).to_le_bytes().to_vec();
        bytes.extend_from_slice(garbage);
        assert!(matches!(
            decode(&bytes),
            Err(Error::MalformedMetadata(_))
        ));
    }

    #[test]
    fn test_missing_is_complex_rejected() {
        let json = br#"{"start_time":0.0,"sampling_freq":1.0,"num_samples":0,"duration":0.0}"#;
        let mut bytes = (json.len() as u32).to_le_bytes().to_vec();
        bytes.extend_from_slice(json);
        assert!(matches!(
            decode(&bytes),
            Err(Error::MalformedMetadata(_))
        ));
    }

    #[test]
    fn test_complex_signal_with_real_flag_rejected() {
        let metadata = Metadata::new(0.0, 1.0, 1); // is_complex = false
        let signal = Signal::Complex(vec![Complex64::new(1.0, 2.0)]);
        assert!(matches!(
            encode(&metadata, &signal),
            Err(Error::MalformedMetadata(_))
        ));
    }

    #[test]
    fn test_huge_sample_count_is_corrupt() {
        // num_samples * 8 would wrap around usize; must not panic or
        // hand back an inconsistent pair
        let json = format!(
            r#"{{"start_time":0.0,"sampling_freq":1.0,"is_complex":false,"num_samples":{},"duration":0.0}}"#,
            1usize << 61
        );
        let mut bytes = (json.len() as u32).to_le_bytes().to_vec();
        bytes.extend_from_slice(json.as_bytes());
        bytes.extend_from_slice(&1.0f64.to_le_bytes());

        assert!(matches!(decode(&bytes), Err(Error::CorruptFile { .. })));
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let metadata = Metadata::new(0.0, 1.0, 2);
        let signal = Signal::Real(vec![7.0, 8.0]);
        let mut bytes = encode(&metadata, &signal).unwrap();
        bytes.extend_from_slice(&[0xAA; 3]);

        let (_, back) = decode(&bytes).unwrap();
        assert_eq!(back, signal);
    }
}
