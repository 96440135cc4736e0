use symbolguard_resolver::{format_suggestions, lookup, SymbolEngine};

use crate::cli::InputArgs;
use crate::error::CliError;

use super::CommandReport;

pub fn run(engine: &SymbolEngine, args: &InputArgs) -> Result<CommandReport, CliError> {
    let outcome = lookup(engine, &args.input);

    let mut text = outcome.message.clone();
    if outcome.found {
        if let Some(record) = outcome.suggestions.first() {
            text.push_str(&format!("\nVenue: {}", record.venue()));
        }
    } else if !outcome.suggestions.is_empty() {
        text.push('\n');
        text.push_str(&format_suggestions(&outcome.suggestions));
    }

    Ok(CommandReport {
        success: outcome.found,
        text,
        json: serde_json::to_value(&outcome)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::builtin_engine;

    #[test]
    fn test_info_found() {
        let report = run(
            &builtin_engine(),
            &InputArgs {
                input: "tcs".to_string(),
            },
        )
        .unwrap();

        assert!(report.success);
        assert_eq!(
            report.text,
            "Found exact match: TCS - Tata Consultancy Services Ltd\nVenue: NSE"
        );
        assert_eq!(report.json["found"], true);
    }
}
