use std::{collections::HashMap, fmt};

// ── Data types ────────────────────────────────────────────────────────────────

/// A whole-disk block device the operator can install to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drive {
    pub path: String,  // /dev/sda
    pub size: String,  // 20G
    pub model: String, // SAMSUNG SSD 870
}

impl Drive {
    pub fn new(path: impl Into<String>, size: impl Into<String>, model: impl Into<String>) -> Self {
        Drive {
            path: path.into(),
            size: size.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<12}  {:>8}   {}", self.path, self.size, self.model)
    }
}

/// Command line whose output [`parse_drives`] understands.
pub const LIST_DRIVES: &str = "lsblk -dpP -o NAME,SIZE,TYPE,MODEL";

/// Extracts `TYPE="disk"` rows from [`LIST_DRIVES`] output.
pub fn parse_drives(output: &str) -> Vec<Drive> {
    output
        .lines()
        .filter_map(|line| {
            let m = parse_pairs(line);
            if m.get("TYPE").map(String::as_str) != Some("disk") {
                return None;
            }
            let path = m.get("NAME").filter(|n| !n.is_empty())?.clone();
            Some(Drive {
                path,
                size: m.get("SIZE").cloned().unwrap_or_default(),
                model: {
                    let s = m.get("MODEL").map(|s| s.trim().to_string()).unwrap_or_default();
                    if s.is_empty() { "—".to_string() } else { s }
                },
            })
        })
        .collect()
}

// ── lsblk --pairs parser ──────────────────────────────────────────────────────
//
// Each line looks like:   NAME="/dev/sda" SIZE="20G" TYPE="disk" MODEL="SAMSUNG SSD 870"

fn parse_pairs(line: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    let mut rest = line.trim();

    while !rest.is_empty() {
        let Some(eq) = rest.find('=') else { break };
        let key = rest[..eq].split_whitespace().last().unwrap_or("").to_string();
        rest = &rest[eq + 1..];

        if !rest.starts_with('"') {
            break;
        }
        rest = &rest[1..];

        let Some(close) = rest.find('"') else { break };
        let value = rest[..close].to_string();
        rest = &rest[close + 1..];

        if !key.is_empty() {
            map.insert(key, value);
        }
    }

    map
}
