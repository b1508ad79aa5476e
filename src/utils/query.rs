const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encodes every UTF-8 byte outside the URI-component
/// unreserved set.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(b >> 4)]));
            out.push(char::from(HEX[usize::from(b & 0x0f)]));
        }
    }
    out
}

/// Joins `key=value` pairs with `&`. Values are encoded, keys are
/// written as given.
pub fn create_query<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), encode_uri_component(value.as_ref())))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_unreserved() {
        assert_eq!(encode_uri_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
    }

    #[test]
    fn test_encode_reserved_and_multibyte() {
        assert_eq!(encode_uri_component("a b&c=d/e?"), "a%20b%26c%3Dd%2Fe%3F");
        assert_eq!(encode_uri_component("日本"), "%E6%97%A5%E6%9C%AC");
    }

    #[test]
    fn test_create_query() {
        let query = create_query(&[("page", "2"), ("q", "rust lang"), ("tag", "c++")]);
        assert_eq!(query, "page=2&q=rust%20lang&tag=c%2B%2B");
    }

    #[test]
    fn test_create_query_empty() {
        let params: [(&str, &str); 0] = [];
        assert_eq!(create_query(&params), "");
    }

    #[test]
    fn test_create_query_owned_pairs() {
        let params = vec![("name".to_string(), "a&b".to_string())];
        assert_eq!(create_query(&params), "name=a%26b");
    }
}
