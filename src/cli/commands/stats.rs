use crate::cli::commands::sessionize::load_inputs;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{DatasetStats, describe};
use crate::core::{Core, RuleSet};
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::colors::category_color;
use crate::utils::formatting::{bar, bold};
use crate::utils::percent;
use crate::utils::table::{Column, Table, TableCell};

/// Handle the `stats` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { inputs, top } = cmd {
        let rules = RuleSet::compile(cfg)?;
        let report = load_inputs(inputs, cfg)?;
        let (classified, table) = Core::sessionize(&report.events, &rules);

        if table.is_empty() {
            warning("No sessions found.");
            return Ok(());
        }

        print_stats(&describe(&table, &classified, *top));
    }
    Ok(())
}

fn print_stats(stats: &DatasetStats) {
    println!(
        "{} events in {} sessions",
        bold(&stats.total_events.to_string()),
        bold(&stats.total_sessions.to_string())
    );

    // ---- dominant categories ----
    header("Dominant category per session");
    let mut t = Table::new(vec![
        Column::left("CATEGORY"),
        Column::right("SESSIONS"),
        Column::right("SHARE"),
        Column::right("AVG DOMAINS"),
    ]);
    for (cat, n, share) in &stats.dominant_distribution {
        let avg = stats
            .avg_unique_domains
            .iter()
            .find(|(c, _)| c == cat)
            .map(|(_, a)| *a)
            .unwrap_or(0.0);
        t.add_row(vec![
            TableCell::colored(cat.label(), category_color(*cat)),
            n.to_string().into(),
            percent(*share).into(),
            format!("{avg:.2}").into(),
        ]);
    }
    print!("{}", t.render());

    // ---- hour of day ----
    header("Sessions per hour of day");
    let max_hour = stats.sessions_per_hour.iter().copied().max().unwrap_or(0);
    for (hour, n) in stats.sessions_per_hour.iter().enumerate() {
        if *n > 0 {
            println!("{hour:02}:00 {n:>5} {}", bar(*n, max_hour, 40));
        }
    }

    // ---- weekday ----
    header("Sessions per weekday");
    let max_day = stats.sessions_per_weekday.iter().map(|(_, n)| *n).max().unwrap_or(0);
    for (day, n) in &stats.sessions_per_weekday {
        println!("{day} {n:>5} {}", bar(*n, max_day, 40));
    }

    // ---- domains ----
    header("Top domains");
    let mut t = Table::new(vec![Column::left("DOMAIN"), Column::right("VISITS")]);
    for (domain, n) in &stats.top_domains {
        let shown = if domain.is_empty() { "(none)" } else { domain.as_str() };
        t.add_row(vec![shown.into(), n.to_string().into()]);
    }
    print!("{}", t.render());

    // ---- per user ----
    header("Dominant categories per user");
    for (user, counts) in &stats.dominant_by_user {
        let parts: Vec<String> = counts
            .iter()
            .map(|(c, n)| format!("{}={n}", c.label()))
            .collect();
        println!("{user}: {}", parts.join(", "));
    }
}
