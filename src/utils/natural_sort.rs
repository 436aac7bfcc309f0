use std::cmp::Ordering;

/// One run of a layer name, either all digits or no digits at all.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameChunk {
    Number(u64),
    Text(String),
}

/// Split a name into digit and non-digit runs so that "conv10" sorts after "conv9".
/// Text runs are lowercased; digit runs too long for a u64 saturate.
pub fn natural_key(name: &str) -> Vec<NameChunk> {
    let mut key = Vec::new();
    let mut current = String::new();
    let mut in_digits = false;

    for ch in name.chars() {
        let is_digit = ch.is_ascii_digit();
        if !current.is_empty() && is_digit != in_digits {
            key.push(make_chunk(&current, in_digits));
            current.clear();
        }
        in_digits = is_digit;
        current.push(ch);
    }

    if !current.is_empty() {
        key.push(make_chunk(&current, in_digits));
    }

    key
}

fn make_chunk(run: &str, digits: bool) -> NameChunk {
    if digits {
        NameChunk::Number(run.parse().unwrap_or(u64::MAX))
    } else {
        NameChunk::Text(run.to_lowercase())
    }
}

pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key(a).cmp(&natural_key(b)).then_with(|| a.cmp(b))
}
