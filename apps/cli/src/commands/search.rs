use serde::Serialize;
use symbolguard_resolver::{format_suggestions, InstrumentRecord, SymbolEngine};

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandReport;

#[derive(Debug, Serialize)]
struct SearchResponseData<'a> {
    query: &'a str,
    results: Vec<InstrumentRecord>,
}

pub fn run(engine: &SymbolEngine, args: &SearchArgs) -> Result<CommandReport, CliError> {
    if args.limit == 0 {
        return Err(CliError::Config(
            "--limit must be greater than zero".to_string(),
        ));
    }

    let results = engine.search_stocks_with_limit(&args.query, args.limit);
    let text = format_suggestions(&results);

    Ok(CommandReport {
        success: !results.is_empty(),
        text,
        json: serde_json::to_value(SearchResponseData {
            query: &args.query,
            results,
        })?,
    })
}
