use std::io::{self, Write};

/// Search depth used by a bare `go`.
pub const DEFAULT_DEPTH: u32 = 3;

/// Deepest search `go depth` will run.
pub const MAX_DEPTH: u32 = 4;

/// Advertised hash size. There is no table behind it.
pub const DEFAULT_HASH_MB: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOptions {
    pub hash_mb: usize,
    pub depth: u32,
}

impl Default for UciOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl UciOptions {
    #[must_use]
    pub fn new() -> Self {
        UciOptions {
            hash_mb: DEFAULT_HASH_MB,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Write the reply to `uci`: identification, options and `uciok`.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name simple_engine")?;
        writeln!(out, "id author the simple_engine developers")?;
        writeln!(
            out,
            "option name Hash type spin default {} min 1 max 1024",
            self.hash_mb
        )?;
        writeln!(
            out,
            "option name Depth type spin default {DEFAULT_DEPTH} min 1 max {MAX_DEPTH}"
        )?;
        writeln!(out, "uciok")
    }

    pub fn apply_setoption(&mut self, name: &str, value: Option<&str>) {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "hash" => {
                if let Some(mb) = value.and_then(|v| v.parse::<usize>().ok()) {
                    self.hash_mb = mb.max(1);
                }
            }
            "depth" => {
                self.depth = clamp_depth(value, self.depth);
            }
            _ => log::warn!("ignoring unknown option '{name}'"),
        }
    }

    /// Depth for a `go` command: `go depth N` if given, else the configured
    /// default.
    #[must_use]
    pub fn go_depth(&self, parts: &[&str]) -> u32 {
        let requested = parts
            .iter()
            .position(|&p| p == "depth")
            .and_then(|i| parts.get(i + 1).copied());
        match requested {
            Some(value) => clamp_depth(Some(value), self.depth),
            None => self.depth,
        }
    }
}

/// Parse a depth value into `1..=MAX_DEPTH`, using `fallback` when it does
/// not parse.
#[must_use]
pub fn clamp_depth(value: Option<&str>, fallback: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map_or(fallback, |d| d.clamp(1, i64::from(MAX_DEPTH)) as u32)
}

#[must_use]
pub fn parse_setoption(parts: &[&str]) -> Option<(String, Option<String>)> {
    if parts.is_empty() || parts[0] != "setoption" {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1) {
        match *part {
            "name" => mode = "name",
            "value" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_is_clamped() {
        assert_eq!(clamp_depth(Some("0"), DEFAULT_DEPTH), 1);
        assert_eq!(clamp_depth(Some("-3"), DEFAULT_DEPTH), 1);
        assert_eq!(clamp_depth(Some("2"), DEFAULT_DEPTH), 2);
        assert_eq!(clamp_depth(Some("99"), DEFAULT_DEPTH), MAX_DEPTH);
    }

    #[test]
    fn unparseable_depth_falls_back() {
        assert_eq!(clamp_depth(Some("deep"), DEFAULT_DEPTH), DEFAULT_DEPTH);
        assert_eq!(clamp_depth(None, 2), 2);
    }

    #[test]
    fn go_depth_uses_configured_default() {
        let mut options = UciOptions::new();
        assert_eq!(options.go_depth(&["go"]), DEFAULT_DEPTH);
        assert_eq!(options.go_depth(&["go", "depth", "1"]), 1);
        assert_eq!(options.go_depth(&["go", "depth"]), DEFAULT_DEPTH);

        options.apply_setoption("Depth", Some("2"));
        assert_eq!(options.go_depth(&["go"]), 2);
        assert_eq!(options.go_depth(&["go", "depth", "x"]), 2);
    }

    #[test]
    fn hash_is_accepted() {
        let mut options = UciOptions::new();
        options.apply_setoption("Hash", Some("64"));
        assert_eq!(options.hash_mb, 64);
        options.apply_setoption("Hash", Some("lots"));
        assert_eq!(options.hash_mb, 64);
    }

    #[test]
    fn setoption_splits_name_and_value() {
        let parts = ["setoption", "name", "Clear", "Hash"];
        assert_eq!(parse_setoption(&parts), Some(("Clear Hash".to_string(), None)));

        let parts = ["setoption", "name", "Depth", "value", "4"];
        assert_eq!(
            parse_setoption(&parts),
            Some(("Depth".to_string(), Some("4".to_string())))
        );

        assert_eq!(parse_setoption(&["setoption", "value", "4"]), None);
        assert_eq!(parse_setoption(&["go"]), None);
    }

    #[test]
    fn uci_reply_lists_options() {
        let mut out = Vec::new();
        UciOptions::new().print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("id name simple_engine\n"));
        assert!(text.contains("option name Hash type spin"));
        assert!(text.contains("option name Depth type spin default 3 min 1 max 4"));
        assert!(text.ends_with("uciok\n"));
    }
}
