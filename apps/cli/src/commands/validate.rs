use symbolguard_resolver::{format_suggestions, SymbolEngine};

use crate::cli::InputArgs;
use crate::error::CliError;

use super::CommandReport;

pub fn run(engine: &SymbolEngine, args: &InputArgs) -> Result<CommandReport, CliError> {
    let result = engine.validate(&args.input);

    let mut text = result.message.clone();
    if !result.is_valid && !result.suggestions.is_empty() {
        text.push('\n');
        text.push_str(&format_suggestions(&result.suggestions));
    }

    Ok(CommandReport {
        success: result.is_valid,
        text,
        json: serde_json::to_value(&result)?,
    })
}
