use route_query_params::TableParameters;

/// Serialize parsed table parameters to a pretty-printed JSON string.
pub fn to_pretty_json(params: &TableParameters) -> String {
    serde_json::to_string_pretty(params).expect("TableParameters serialization cannot fail")
}
