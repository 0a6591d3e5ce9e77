/// Parsed query-string parameters. Order-preserving; first value wins on
/// duplicate keys, matching browser `URLSearchParams::get` behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Parse a raw query string. A leading `?` is tolerated; a pair without
    /// `=` becomes a key with an empty value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(pair), String::new()),
            })
            .collect();
        Self { pairs }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Percent-decode a query component; `+` decodes to a space. Malformed
/// escapes pass through literally rather than failing the parse.
fn decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let Some(byte) = hex_pair(bytes[i + 1], bytes[i + 2]) {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi as u8) << 4 | lo as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_and_tolerates_leading_question_mark() {
        let query = Query::parse("?id=42&from=add-bank");
        assert_eq!(query.get("id"), Some("42"));
        assert_eq!(query.get("from"), Some("add-bank"));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn decodes_percent_escapes_and_plus() {
        let query = Query::parse("returnUrl=%2Fdeposit%2Fonline&note=hello+world");
        assert_eq!(query.get("returnUrl"), Some("/deposit/online"));
        assert_eq!(query.get("note"), Some("hello world"));
    }

    #[test]
    fn malformed_escape_passes_through() {
        let query = Query::parse("a=%zz&b=%2");
        assert_eq!(query.get("a"), Some("%zz"));
        assert_eq!(query.get("b"), Some("%2"));
    }

    #[test]
    fn key_without_value_maps_to_empty_string() {
        let query = Query::parse("flag&id=7");
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.get("id"), Some("7"));
    }

    #[test]
    fn first_value_wins_on_duplicates() {
        let query = Query::parse("id=1&id=2");
        assert_eq!(query.get("id"), Some("1"));
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(Query::parse("").is_empty());
        assert!(Query::parse("?").is_empty());
    }
}
