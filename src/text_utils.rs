/// Converts a post title into the name its folder should have.
///
/// Example: `Ábaco: a post, of mine!` becomes `abaco-a-post-of-mine`
pub fn slugify(title: &str) -> String {
    let ascii = strip_digit_commas(&unidecode::unidecode(title));

    let mut slug = String::with_capacity(ascii.len());
    let mut prev_char = None;

    for c in ascii.chars().map(|c| c.to_ascii_lowercase()) {
        let c = if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' };
        if c == '-' && (prev_char.is_none() || prev_char == Some('-')) {
            continue;
        }
        slug.push(c);
        prev_char = Some(c);
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// `1,000` becomes `1000`, so thousands separators do not split numbers.
fn strip_digit_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars.iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
            !(c == ',' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}

pub fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
