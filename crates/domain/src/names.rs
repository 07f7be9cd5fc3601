//! Name helpers shared by zone matching, key derivation and fallthrough.
//!
//! All comparisons work on "folded" names: ASCII lowercase, fully qualified
//! (single trailing dot). The root zone folds to `"."`.

/// Fold a name for comparison: lowercase and ensure a trailing dot.
pub fn fold(name: &str) -> String {
    let mut folded = name.trim().to_ascii_lowercase();
    if !folded.ends_with('.') {
        folded.push('.');
    }
    folded
}

/// Ensure a name is fully qualified without touching its casing.
pub fn fqdn(name: &str) -> String {
    let name = name.trim();
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Drop the trailing root dot, if any.
pub fn trim_root(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

/// Join a relative label sequence onto a zone origin (`dns1` + `example.com.`).
pub fn join(label: &str, zone: &str) -> String {
    let label = trim_root(label.trim());
    if zone == "." {
        format!("{}.", label)
    } else {
        format!("{}.{}", label, fqdn(zone))
    }
}

/// True when `name` equals `zone` or sits below it. Both must be folded.
pub fn is_within(name: &str, zone: &str) -> bool {
    if zone == "." {
        return true;
    }
    if name == zone {
        return true;
    }
    name.len() > zone.len()
        && name.ends_with(zone)
        && name.as_bytes()[name.len() - zone.len() - 1] == b'.'
}
