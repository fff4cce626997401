use lazy_static::lazy_static;
use regex::Regex;

/// Splits a metadata line in the form `key: value`.
/// The value is returned trimmed and may be empty.
pub fn extract_field(line: &str) -> Option<(&str, &str)> {
    lazy_static! {
            static ref FIELD_REGEX : Regex = Regex::new(r"^(?P<key>[A-Za-z_][A-Za-z0-9_-]*):(?P<value>.*)$").unwrap();
        }
    extract_key_val(line, &FIELD_REGEX)
}

fn extract_key_val<'a>(line: &'a str, field_regex: &Regex) -> Option<(&'a str, &'a str)> {
    let res = field_regex.captures(line).and_then(|cap| {
        let key = cap.name("key").map(|key| key.as_str());
        let val = cap.name("value").map(|val| val.as_str().trim());
        match (key, val) {
            (Some(key), Some(val)) => Some((key, val)),
            _ => None
        }
    });

    res
}

/// Returns the value of the first line whose key is `field`.
/// Later lines with the same key are ignored.
pub fn find_field<I, S>(lines: I, field: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        if let Some((key, val)) = extract_field(line.as_ref()) {
            if key == field {
                return Some(val.to_string());
            }
        }
    }
    None
}
