use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{RuleSet, explain};
use crate::errors::AppResult;
use crate::ui::messages::{field, header};
use crate::utils::colors::colorize_category;

/// Handle the `classify` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify { urls } = cmd {
        let rules = RuleSet::compile(cfg)?;

        for url in urls {
            let c = explain(url, &rules);

            header(url);
            field("domain", if c.domain.is_empty() { "-" } else { c.domain.as_str() });
            if let Some(q) = &c.search_query {
                field("search query", q);
            }
            field("category", colorize_category(c.category.label(), c.category));
            field("decided by", c.stage.as_str());
        }
    }
    Ok(())
}
