use std::fmt;

/// Ordered `key=value` pairs of a URL query string
///
/// Keeps pairs it does not understand, in their original order, so the
/// search state can rewrite its own keys without dropping anyone else's.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=two%20words`, with or without a leading '?'
    pub fn parse(query: &str) -> Self {
        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let (key, value) = part.split_once('=').unwrap_or((part, ""));
                (decode_component(key), decode_component(value))
            })
            .filter(|(key, _)| !key.is_empty())
            .collect();

        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Non-empty value for `key`
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Replace every `key` pair with a single one, at the first one's position
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_values() {
        let query = QueryString::parse("?city=H%C3%A0%20N%E1%BB%99i&numGuests=2&flag&ref=home+page");
        assert_eq!(query.get("city"), Some("Hà Nội"));
        assert_eq!(query.get("numGuests"), Some("2"));
        assert_eq!(query.get("flag"), Some(""));
        assert_eq!(query.get("ref"), Some("home page"));
        assert_eq!(query.get_non_empty("flag"), None);
    }

    #[test]
    fn test_set_keeps_position_and_dedupes() {
        let mut query = QueryString::parse("a=1&b=2&a=3&c=4");
        query.set("a", "9");
        assert_eq!(query.to_string(), "a=9&b=2&c=4");

        query.set("d", "x y");
        assert_eq!(query.to_string(), "a=9&b=2&c=4&d=x%20y");

        query.remove("b");
        assert_eq!(query.to_string(), "a=9&c=4&d=x%20y");
    }

    #[test]
    fn test_empty() {
        assert!(QueryString::parse("").is_empty());
        assert!(QueryString::parse("?").is_empty());
        assert_eq!(QueryString::new().to_string(), "");
    }
}
