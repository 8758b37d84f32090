use routegraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Split a dash-separated route such as `A-B-C` into node labels
pub fn parse_route(route: &str) -> std::result::Result<Vec<String>, String> {
    let labels: Vec<String> = route.split('-').map(|s| s.trim().to_string()).collect();
    if labels.iter().any(String::is_empty) {
        return Err(format!(
            "invalid route '{}' (expected nodes separated by '-', e.g. A-B-C)",
            route
        ));
    }
    Ok(labels)
}
