// Parse `docker ps` / `docker stats` text output into records.

use crate::models::{Container, StatsRow};
use tracing::debug;

/// Header-bearing marker of the stats table.
pub const STATS_HEADER_MARKER: &str = "NAME";

/// Parsed `docker ps` output plus the number of non-blank lines that were dropped.
#[derive(Debug, Default)]
pub struct ContainerLines {
    pub containers: Vec<Container>,
    pub rejected: usize,
}

/// Parse `name|status|image` lines. Lines with fewer than three fields are dropped, extra fields ignored.
pub fn parse_container_lines(output: &str) -> ContainerLines {
    let mut parsed = ContainerLines::default();
    for line in output.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('|');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(status), Some(image)) => parsed.containers.push(Container {
                name: name.to_string(),
                status: status.to_string(),
                image: image.to_string(),
            }),
            _ => {
                debug!(line, "dropping container line with fewer than 3 fields");
                parsed.rejected += 1;
            }
        }
    }
    parsed
}

/// Start offsets (in chars) of the aligned columns, taken from the header line.
#[derive(Debug, Clone, Copy)]
struct Columns {
    cpu: usize,
    mem: usize,
    mem_pct: usize,
}

impl Columns {
    fn from_header(header: &str) -> Option<Self> {
        let char_offset = |needle: &str| {
            header
                .find(needle)
                .map(|byte| header[..byte].chars().count())
        };
        let cpu = char_offset("CPU %")?;
        let mem = char_offset("MEM USAGE")?;
        let mem_pct = char_offset("MEM %")?;
        (0 < cpu && cpu < mem && mem < mem_pct).then_some(Self { cpu, mem, mem_pct })
    }

    fn split(&self, line: &str) -> Option<StatsRow> {
        let chars: Vec<char> = line.chars().collect();
        let cell = |from: usize, to: usize| -> String {
            let to = to.min(chars.len());
            if from >= to {
                return String::new();
            }
            chars[from..to].iter().collect::<String>().trim().to_string()
        };
        let name = cell(0, self.cpu);
        let cpu = cell(self.cpu, self.mem);
        let mem = cell(self.mem, self.mem_pct);
        let mem_pct = cell(self.mem_pct, chars.len());
        // Any value wider than its column shifts the rest of the row; let the token fallback handle it.
        let clean_boundary = |at: usize| {
            chars.get(at - 1).is_some_and(|c| c.is_whitespace())
                && chars.get(at).is_some_and(|c| !c.is_whitespace())
        };
        let aligned = [self.cpu, self.mem, self.mem_pct]
            .into_iter()
            .all(clean_boundary);
        if !aligned || name.is_empty() || cpu.is_empty() || mem.is_empty() || mem_pct.is_empty() {
            return None;
        }
        let (used, limit) = split_memory(&mem);
        Some(StatsRow {
            name,
            cpu_percent: cpu,
            memory_used: used,
            memory_limit: limit,
            memory_percent: mem_pct,
        })
    }
}

fn split_memory(mem: &str) -> (String, String) {
    match mem.split_once('/') {
        Some((used, limit)) => (used.trim().to_string(), limit.trim().to_string()),
        None => (mem.trim().to_string(), String::new()),
    }
}

/// Whitespace tokens, recognising the standalone "/" between used and limit memory.
fn split_tokens(line: &str) -> Option<StatsRow> {
    let t: Vec<&str> = line.split_whitespace().collect();
    let (name, cpu, used, limit, pct) = match t.len() {
        n if n >= 6 && t[3] == "/" => (t[0], t[1], t[2], t[4], t[5]),
        n if n >= 5 => (t[0], t[1], t[2], t[3], t[4]),
        4 => {
            let (used, limit) = split_memory(t[2]);
            return Some(StatsRow {
                name: t[0].to_string(),
                cpu_percent: t[1].to_string(),
                memory_used: used,
                memory_limit: limit,
                memory_percent: t[3].to_string(),
            });
        }
        _ => return None,
    };
    Some(StatsRow {
        name: name.to_string(),
        cpu_percent: cpu.to_string(),
        memory_used: used.trim_end_matches('/').to_string(),
        memory_limit: limit.trim_start_matches('/').to_string(),
        memory_percent: pct.to_string(),
    })
}

/// Parse the `docker stats` table. `None` when the header marker is absent.
/// Rows come from the lines after the header; lines with fewer than four fields are dropped.
pub fn parse_stats_table(output: &str) -> Option<Vec<StatsRow>> {
    let mut lines = output.lines().map(|l| l.trim_end_matches('\r'));
    let header = lines.by_ref().find(|l| l.contains(STATS_HEADER_MARKER))?;
    let columns = Columns::from_header(header);

    let rows = lines
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| {
            let row = columns
                .and_then(|c| c.split(line))
                .or_else(|| split_tokens(line));
            if row.is_none() {
                debug!(line, "dropping stats line with fewer than 4 fields");
            }
            row
        })
        .collect();
    Some(rows)
}
