//! Static HTML status page.
//!
//! [`render`] is a pure function of a [`DashboardSnapshot`]: the same snapshot always yields the
//! same bytes. Every piece of runtime-provided text goes through [`escape_html`] before it is
//! interpolated, including log output.

mod style;

use crate::docker_repo::parse_stats_table;
use crate::error::CollectError;
use crate::models::{Container, DashboardSnapshot, LogSection, StatsRow};
use crate::version;

pub const NO_CONTAINER_CARD: &str = "Aucun conteneur actif";
pub const NO_STATS_ROW: &str = "Aucun conteneur en cours d'exécution";
pub const NO_LOGS: &str = "Aucun log disponible - Le conteneur n'est pas en cours d'exécution";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn error_note(out: &mut String, err: &CollectError) {
    out.push_str(&format!(
        "<p class=\"section-error\">Indisponible : {}</p>\n",
        escape_html(&err.to_string())
    ));
}

fn container_card(out: &mut String, c: &Container) {
    let (class, glyph) = c.state().badge();
    out.push_str(&format!(
        r#"            <div class="status-card">
                <h3>📦 {name}</h3>
                <p><strong>Status:</strong> <span class="status {class}">{glyph} {status}</span></p>
                <p><strong>Image:</strong> {image}</p>
            </div>
"#,
        name = escape_html(&c.name),
        status = escape_html(&c.status),
        image = escape_html(&c.image),
    ));
}

fn container_cards(containers: &Result<Vec<Container>, CollectError>) -> String {
    let mut out = String::new();
    match containers {
        Ok(list) if !list.is_empty() => {
            for c in list {
                container_card(&mut out, c);
            }
        }
        other => {
            out.push_str(&format!(
                r#"            <div class="status-card">
                <h3>⚠️ {NO_CONTAINER_CARD}</h3>
                <p>Démarrez un conteneur avec: <code>docker-compose up -d</code></p>
"#
            ));
            if let Err(e) = other {
                out.push_str("                ");
                error_note(&mut out, e);
            }
            out.push_str("            </div>\n");
        }
    }
    out
}

fn stats_row(out: &mut String, row: &StatsRow) {
    out.push_str(&format!(
        r#"                            <tr>
                                <td>{}</td>
                                <td>{}</td>
                                <td>{}</td>
                                <td>{}</td>
                            </tr>
"#,
        escape_html(&row.name),
        escape_html(&row.cpu_percent),
        escape_html(&row.memory_display()),
        escape_html(&row.memory_percent),
    ));
}

/// Table body rows; the placeholder row when the header marker is missing or nothing parsed.
fn stats_rows(stats: &Result<String, CollectError>) -> String {
    let rows = stats
        .as_ref()
        .ok()
        .and_then(|raw| parse_stats_table(raw))
        .unwrap_or_default();
    if rows.is_empty() {
        return format!(
            "                            <tr><td colspan='4'>{NO_STATS_ROW}</td></tr>\n"
        );
    }
    let mut out = String::new();
    for row in &rows {
        stats_row(&mut out, row);
    }
    out
}

fn stats_card(stats: &Result<String, CollectError>) -> String {
    let mut out = format!(
        r#"                    <table>
                        <thead>
                            <tr>
                                <th>Conteneur</th>
                                <th>CPU</th>
                                <th>Mémoire</th>
                                <th>% Mémoire</th>
                            </tr>
                        </thead>
                        <tbody>
{}                        </tbody>
                    </table>
"#,
        stats_rows(stats)
    );
    if let Err(e) = stats {
        out.push_str("                    ");
        error_note(&mut out, e);
    }
    out
}

fn logs_card(logs: &LogSection) -> String {
    let body = match &logs.lines {
        Ok(text) => escape_html(text),
        Err(_) => NO_LOGS.to_string(),
    };
    let mut out = format!(
        r#"                    <div class="logs">
                        <pre>{body}</pre>
                    </div>
"#
    );
    // Absent container / empty output are the expected placeholder cases; anything else gets a reason.
    if let Err(e) = &logs.lines
        && !matches!(
            e,
            CollectError::NoSuchContainer { .. } | CollectError::NoLogs { .. }
        )
    {
        out.push_str("                    ");
        error_note(&mut out, e);
    }
    out
}

/// Render the complete, self-contained page.
pub fn render(snapshot: &DashboardSnapshot) -> String {
    let timestamp = snapshot.generated_at.format(TIMESTAMP_FORMAT);
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="{generator}">
    <title>Dashboard Monitoring - jrnl DevOps</title>
    <style>{style}    </style>
</head>
<body>
    <div class="container">
        <header>
            <h1>📊 Dashboard Monitoring - jrnl DevOps</h1>
            <p class="timestamp">Dernière mise à jour: {timestamp}</p>
            <button class="refresh-btn" onclick="location.reload()">🔄 Actualiser</button>
        </header>

        <div class="dashboard">
            <div class="card">
                <h2>🐳 Conteneurs Actifs</h2>
{cards}            </div>

            <div class="card">
                <h2>📈 Métriques des Conteneurs</h2>
{stats}            </div>

            <div class="card">
                <h2>📋 Logs du Conteneur <code>{log_container}</code></h2>
{logs}            </div>
        </div>
    </div>
</body>
</html>
"#,
        generator = version::generator_tag(),
        style = style::STYLE,
        cards = container_cards(&snapshot.containers),
        stats = stats_card(&snapshot.stats),
        log_container = escape_html(&snapshot.logs.container),
        logs = logs_card(&snapshot.logs),
    )
}
