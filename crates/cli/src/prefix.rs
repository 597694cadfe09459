use casenumber_core::Config;

/// Pick the case prefix: an explicit, non-blank value wins over the
/// configured default. Either way the config's sanitizing policy applies.
pub fn resolve_prefix(explicit: Option<&str>, config: &Config) -> Option<String> {
    let chosen = match explicit {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => config.default_prefix.as_deref(),
    };

    chosen.map(|prefix| config.prepare_prefix(prefix))
}

/// Template variables for a CLI invocation.
///
/// The first variable is the prefix and goes through [`resolve_prefix`]; the
/// rest are passed along untouched.
pub fn resolve_variables(mut variables: Vec<String>, config: &Config) -> Vec<String> {
    let explicit = if variables.is_empty() {
        None
    } else {
        Some(variables.remove(0))
    };

    match resolve_prefix(explicit.as_deref(), config) {
        Some(prefix) => {
            variables.insert(0, prefix);
            variables
        }
        None => Vec::new(),
    }
}
