// src/core/sanitize.rs

/// Resolve the XML entities the portal actually emits: the five named
/// ones plus numeric references (accented Spanish letters arrive as
/// `&#243;` and friends).
pub fn unescape_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match entity_at(tail) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one entity at the start of `s` (which begins with '&').
/// Returns the character and the byte length consumed.
fn entity_at(s: &str) -> Option<(char, usize)> {
    let semi = s.find(';')?;
    if semi > 8 {
        return None; // not an entity, just a stray ampersand
    }
    let name = &s[1..semi];
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some((ch, semi + 1))
}

/// Base-10 integer parse with the upstream's forgiving semantics:
/// missing, empty or non-numeric cells become 0. A leading numeric
/// prefix wins over trailing junk, like parseInt.
pub fn int_or_zero(s: &str) -> i64 {
    let t = s.trim();
    let digits_end = numeric_prefix_len(t, false);
    t[..digits_end].parse::<i64>().unwrap_or(0)
}

/// Float counterpart of `int_or_zero` (parseFloat semantics).
pub fn float_or_zero(s: &str) -> f64 {
    let t = s.trim();
    let digits_end = numeric_prefix_len(t, true);
    t[..digits_end].parse::<f64>().unwrap_or(0.0)
}

fn numeric_prefix_len(s: &str, allow_dot: bool) -> usize {
    let mut end = 0usize;
    let mut seen_dot = false;
    for (i, ch) in s.char_indices() {
        let ok = ch.is_ascii_digit()
            || (i == 0 && (ch == '-' || ch == '+'))
            || (allow_dot && ch == '.' && !seen_dot);
        if !ok {
            break;
        }
        if ch == '.' {
            seen_dot = true;
        }
        end = i + ch.len_utf8();
    }
    end
}

/// Empty cell → the documented "Sin X" placeholder.
pub fn text_or(s: &str, placeholder: &str) -> String {
    let t = s.trim();
    if t.is_empty() {
        placeholder.to_string()
    } else {
        t.to_string()
    }
}
