use base64ct::{Base64, Encoding};

/// Base64 encode bytes with the standard alphabet and padding.
pub fn base64_encode(data: &[u8]) -> String {
    Base64::encode_string(data)
}

/// Base64 decode a string to bytes. Strict: only canonical, padded input.
pub fn base64_decode(s: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64::decode_vec(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let data = b"Hello, World!";
        let encoded = base64_encode(data);
        let decoded = base64_decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn standard_alphabet_with_padding() {
        assert_eq!(base64_encode(b"ab"), "YWI=");
        // Bytes that exercise the + and / positions
        let data = vec![0xfb, 0xff, 0xfe];
        assert_eq!(base64_encode(&data), "+//+");
    }

    #[test]
    fn rejects_invalid_input() {
        assert!(base64_decode("not base64!!").is_err());
        assert!(base64_decode("YWI").is_err()); // missing padding
    }

    #[test]
    fn empty_input() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_decode("").unwrap(), Vec::<u8>::new());
    }
}
