// One row of the `docker stats --no-stream` table

use serde::Serialize;

/// Display strings exactly as the runtime printed them. No link to `Container` beyond the name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRow {
    pub name: String,
    pub cpu_percent: String,
    pub memory_used: String,
    /// Empty when the runtime printed no limit.
    pub memory_limit: String,
    pub memory_percent: String,
}

impl StatsRow {
    pub fn cpu_percent_value(&self) -> Option<f64> {
        parse_percent(&self.cpu_percent)
    }

    pub fn memory_percent_value(&self) -> Option<f64> {
        parse_percent(&self.memory_percent)
    }

    /// "used / limit", or just "used" when the limit is missing.
    pub fn memory_display(&self) -> String {
        if self.memory_limit.is_empty() {
            self.memory_used.clone()
        } else {
            format!("{} / {}", self.memory_used, self.memory_limit)
        }
    }
}

/// "12.34%" -> 12.34. Anything else ("--", "N/A", "") -> None.
pub fn parse_percent(s: &str) -> Option<f64> {
    let v = s.trim().trim_end_matches('%').trim();
    v.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cpu: &str, mem: &str) -> StatsRow {
        StatsRow {
            name: "web".into(),
            cpu_percent: cpu.into(),
            memory_used: "12MiB".into(),
            memory_limit: "1.9GiB".into(),
            memory_percent: mem.into(),
        }
    }

    #[test]
    fn percent_values_parse() {
        let r = row("0.25%", "1.61%");
        assert_eq!(r.cpu_percent_value(), Some(0.25));
        assert_eq!(r.memory_percent_value(), Some(1.61));
    }

    #[test]
    fn unparsable_percent_is_none() {
        let r = row("--", "N/A");
        assert_eq!(r.cpu_percent_value(), None);
        assert_eq!(r.memory_percent_value(), None);
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("NaN%"), None);
    }

    #[test]
    fn memory_display_without_limit() {
        let mut r = row("1%", "1%");
        assert_eq!(r.memory_display(), "12MiB / 1.9GiB");
        r.memory_limit.clear();
        assert_eq!(r.memory_display(), "12MiB");
    }
}
