/// Syntactic check of a domain name as it appears in configuration.
///
/// Accepts the root zone `"."` and names with or without a trailing dot.
/// Wildcard labels are rejected since lookups match names literally.
pub fn validate_domain_name(name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("domain name cannot be empty".to_string());
    }
    if name == "." {
        return Ok(());
    }
    let relative = name.strip_suffix('.').unwrap_or(name);
    if relative.len() > 253 {
        return Err(format!("domain name '{name}' exceeds 253 characters"));
    }
    for label in relative.split('.') {
        if label.is_empty() {
            return Err(format!("domain name '{name}' contains an empty label"));
        }
        if label.len() > 63 {
            return Err(format!("label '{label}' in '{name}' exceeds 63 characters"));
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!("label '{label}' in '{name}' contains invalid characters"));
        }
    }
    Ok(())
}
