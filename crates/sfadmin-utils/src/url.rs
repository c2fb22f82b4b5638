//! URL query-string parsing

use crate::error::UrlError;
use std::collections::HashMap;

/// Parses the query string of `url` into a key/value map
///
/// Everything after the first `?` is percent-decoded once and `+` becomes a
/// space. The result is then split on `&`. Each pair is split on its first `=`. Pairs
/// without `=` are skipped, and a repeated key keeps its last value.
///
/// # Examples
///
/// ```
/// use sfadmin_utils::param_to_map;
///
/// let params = param_to_map("http://x?a=1&b=2").unwrap();
/// assert_eq!(params.get("a").map(String::as_str), Some("1"));
/// assert!(param_to_map("http://x").unwrap().is_empty());
/// ```
pub fn param_to_map(url: &str) -> Result<HashMap<String, String>, UrlError> {
    let mut params = HashMap::new();

    let Some((_, raw_search)) = url.split_once('?') else {
        return Ok(params);
    };

    let search = urlencoding::decode(raw_search)
        .map_err(|e| UrlError::Decode(e.to_string()))?
        .replace('+', " ");

    if search.is_empty() {
        return Ok(params);
    }

    for pair in search.split('&') {
        if let Some((name, value)) = pair.split_once('=') {
            params.insert(name.to_string(), value.to_string());
        }
    }

    Ok(params)
}
