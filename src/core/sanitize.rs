// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;`, already decoded by the
/// parser) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// "Case Type :" → "Case Type". Only trailing colons go; "Time: 10:30" stays.
pub fn strip_label_colon(label: &str) -> String {
    label.trim().trim_end_matches(':').trim_end().to_string()
}

/// "filing_number" → "Filing Number"
pub fn title_case(key: &str) -> String {
    key.replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => s!(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
