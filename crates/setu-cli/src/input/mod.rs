use atty::Stream;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Load a typed JSON input from `--input <path>`, falling back to piped
/// stdin. Returns `None` when neither is supplied (stdin is a TTY).
pub fn load<T: DeserializeOwned>(
    path: &Option<String>,
    what: &str,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        let p = Path::new(path);
        if !p.is_file() {
            return Err(format!("Not a readable file: {path}").into());
        }
        let contents =
            std::fs::read_to_string(p).map_err(|e| format!("Failed to read '{path}': {e}"))?;
        let value: T = serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{path}' as {what}: {e}"))?;
        return Ok(Some(value));
    }

    if atty::is(Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: T =
        serde_json::from_str(trimmed).map_err(|e| format!("Failed to parse stdin as {what}: {e}"))?;
    Ok(Some(value))
}
