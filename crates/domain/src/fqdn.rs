/// True when `name` is fully qualified, i.e. ends in a dot. The root name
/// "." on its own does not count.
pub fn is_fqdn(name: &str) -> bool {
    name.len() > 1 && name.ends_with('.')
}

/// Returns `name` fully qualified, appending the trailing dot if missing.
pub fn fqdn(name: &str) -> String {
    if is_fqdn(name) {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}
