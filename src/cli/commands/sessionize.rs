use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, RuleSet};
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::ingest::{self, InputSource, LoadReport};
use crate::models::SessionTable;
use crate::ui::messages::{info, warning};
use crate::utils::colors::{GREY, category_color};
use crate::utils::formatting::join_elided;
use crate::utils::table::{Column, Table, TableCell};
use crate::utils::{format_minutes, percent};

/// Load every input, warning about dropped rows.
pub(crate) fn load_inputs(inputs: &[InputSource], cfg: &Config) -> AppResult<LoadReport> {
    let report = ingest::load_all(inputs, cfg)?;
    if report.skipped > 0 {
        warning(format!(
            "{} rows skipped (unreadable or without a valid visit_time)",
            report.skipped
        ));
    }
    Ok(report)
}

/// Handle the `sessionize` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sessionize {
        inputs,
        format,
        file,
        events_file,
        force,
    } = cmd
    {
        let rules = RuleSet::compile(cfg)?;
        let report = load_inputs(inputs, cfg)?;
        let (classified, table) = Core::sessionize(&report.events, &rules);

        info(format!(
            "{} events → {} sessions",
            classified.len(),
            table.len()
        ));

        if let Some(path) = events_file {
            export::write_classified(&classified, path, *force)?;
        }

        match file {
            Some(path) => {
                let fmt = (*format)
                    .or_else(|| ExportFormat::from_path(path))
                    .unwrap_or(ExportFormat::Csv);
                export::write_sessions(&table, fmt, path, *force)?;
            }
            None => print_sessions(&table),
        }
    }
    Ok(())
}

fn print_sessions(table: &SessionTable) {
    if table.is_empty() {
        warning("No sessions found.");
        return;
    }

    let mut columns = vec![
        Column::left("SESSION"),
        Column::left("START"),
        Column::left("END"),
        Column::right("VISITS"),
        Column::right("DOMAINS"),
        Column::right("SPAN"),
        Column::left("DOMINANT"),
    ];
    columns.extend(table.categories.iter().map(|c| Column::right(c.label())));
    columns.push(Column::left("TOP DOMAINS"));

    let mut out = Table::new(columns);

    for s in &table.sessions {
        let mut row: Vec<TableCell> = vec![
            s.session_id.as_str().into(),
            s.session_start.format("%Y-%m-%d %H:%M").to_string().into(),
            s.session_end.format("%H:%M").to_string().into(),
            s.num_visits.to_string().into(),
            s.unique_domains.to_string().into(),
            format_minutes(s.observed_span_minutes).into(),
            TableCell::colored(s.dominant_category.label(), category_color(s.dominant_category)),
        ];

        for (cat, share) in table.categories.iter().zip(table.wide_proportions(s)) {
            let text = percent(share);
            row.push(if share == 0.0 {
                TableCell::colored(text, GREY)
            } else {
                TableCell::colored(text, category_color(*cat))
            });
        }

        row.push(join_elided(&s.domains_list, 40).into());
        out.add_row(row);
    }

    println!();
    print!("{}", out.render());
}
