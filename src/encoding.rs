use encoding_rs::{Encoding, UTF_8};
use tracing::trace;
use xhtmlchardet::detect;

pub(crate) fn encoding(data: &[u8], hint: Option<String>) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, hint).ok()?;
    // no encoding detected
    let label = if charsets.is_empty() {
        "UTF-8"
    } else {
        charsets[0].as_str()
    };
    trace!(charset = label, "detected charset");
    Encoding::for_label(label.as_bytes())
}

/// Decode file contents into a string.
///
/// A byte order mark wins, then a declared charset; UTF-8 is assumed
/// otherwise. Malformed sequences are replaced rather than rejected.
pub(crate) fn decode(data: &[u8]) -> String {
    let encoding = encoding(data, None).unwrap_or(UTF_8);
    let (decoded, _, _) = encoding.decode(data);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8() {
        let data = b"<?xml version=\"1.0\" encoding=\"UTF-8\"?><a/>";
        let enc = encoding(data, None).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_utf8_without_declaration() {
        let data = b"body { color: red; }";
        let enc = encoding(data, None).unwrap();
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn test_declared_charset() {
        let data = b"<?xml version=\"1.0\" encoding=\"iso-8859-1\"?><p>caf\xe9</p>";
        // windows-1252 is a superset of 8859-1
        assert_eq!(encoding(data, None).unwrap().name(), "windows-1252");
        assert!(decode(data).ends_with("<p>caf\u{e9}</p>"));
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let data = b"\xef\xbb\xbfalert('hi');";
        assert_eq!(decode(data), "alert('hi');");
    }

    #[test]
    fn test_decode_utf16_bom() {
        let data = b"\xff\xfea\x00;\x00";
        assert_eq!(decode(data), "a;");
    }
}
