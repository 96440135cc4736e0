use std::sync::Arc;

use async_trait::async_trait;
use symbolguard_resolver::{
    format_suggestions, OrderGate, OrderRequest, OrderSide, OrderSubmitter, ResolverError,
    SymbolEngine, ORDER_SUGGESTION_LIMIT,
};
use uuid::Uuid;

use crate::cli::OrderArgs;
use crate::error::CliError;

use super::CommandReport;

/// Accepts every order without contacting a venue.
#[derive(Debug, Default)]
pub struct DryRunSubmitter;

#[async_trait]
impl OrderSubmitter for DryRunSubmitter {
    fn id(&self) -> &'static str {
        "DRY_RUN"
    }

    async fn submit(&self, order: &OrderRequest) -> Result<String, ResolverError> {
        let order_id = Uuid::new_v4().to_string();
        tracing::info!(
            order_id = %order_id,
            symbol = %order.symbol,
            venue = %order.venue,
            side = %order.side,
            quantity = order.quantity,
            "Dry-run order accepted"
        );
        Ok(order_id)
    }
}

pub async fn run(
    engine: Arc<SymbolEngine>,
    side: OrderSide,
    args: &OrderArgs,
) -> Result<CommandReport, CliError> {
    let gate = OrderGate::new(engine, Arc::new(DryRunSubmitter));
    let mut outcome = gate.place_order(&args.input, side, args.quantity).await;
    outcome.suggestions.truncate(ORDER_SUGGESTION_LIMIT);

    let mut text = outcome.message.clone();
    if let Some(order_id) = &outcome.order_id {
        text.push_str(&format!("\nOrder id: {}", order_id));
    } else if !outcome.suggestions.is_empty() {
        text.push('\n');
        text.push_str(&format_suggestions(&outcome.suggestions));
    }

    Ok(CommandReport {
        success: outcome.success,
        text,
        json: serde_json::to_value(&outcome)?,
    })
}
