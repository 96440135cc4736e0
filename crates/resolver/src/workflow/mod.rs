//! Caller-side workflows around the engine.
//!
//! The engine itself never talks to a venue. An [`OrderGate`] sits between
//! user input and an [`OrderSubmitter`]: it validates first and only submits
//! the validated canonical symbol, never the raw input.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;

use crate::engine::SymbolEngine;
use crate::errors::ResolverError;
use crate::models::InstrumentRecord;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// An order ready for submission. `symbol` is always a catalog symbol.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub venue: String,
    pub side: OrderSide,
    pub quantity: u32,
}

/// Downstream order-submission collaborator (broker API, paper trader, ...).
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    /// Identifier used in logs (e.g., "KITE", "DRY_RUN").
    fn id(&self) -> &'static str;

    /// Submit the order, returning the venue's order id.
    async fn submit(&self, order: &OrderRequest) -> Result<String, ResolverError>;
}

/// Result of a gated order attempt.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_symbol: Option<String>,
    pub suggestions: Vec<InstrumentRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl OrderOutcome {
    fn rejected(message: impl Into<String>, suggestions: Vec<InstrumentRecord>) -> Self {
        Self {
            success: false,
            message: message.into(),
            validated_symbol: None,
            suggestions,
            order_id: None,
        }
    }
}

/// Validates input before letting an order through to the submitter.
pub struct OrderGate {
    engine: Arc<SymbolEngine>,
    submitter: Arc<dyn OrderSubmitter>,
}

impl OrderGate {
    pub fn new(engine: Arc<SymbolEngine>, submitter: Arc<dyn OrderSubmitter>) -> Self {
        Self { engine, submitter }
    }

    /// Validate `input` and submit only on an unambiguous match.
    ///
    /// Validation messages and suggestions are passed through verbatim so the
    /// caller can ask the user to pick an exact symbol.
    pub async fn place_order(&self, input: &str, side: OrderSide, quantity: u32) -> OrderOutcome {
        if quantity == 0 {
            return OrderOutcome::rejected(
                ResolverError::InvalidQuantity(quantity).to_string(),
                Vec::new(),
            );
        }

        let validation = self.engine.validate(input);
        let record = match validation.record() {
            Some(record) => record.clone(),
            None => return OrderOutcome::rejected(validation.message, validation.suggestions),
        };

        let order = OrderRequest {
            symbol: record.symbol().to_string(),
            venue: record.venue().to_string(),
            side,
            quantity,
        };

        info!(
            "Submitting {} {} {} on {} via {}",
            order.side,
            order.quantity,
            order.symbol,
            order.venue,
            self.submitter.id()
        );

        match self.submitter.submit(&order).await {
            Ok(order_id) => OrderOutcome {
                success: true,
                message: format!(
                    "Order placed successfully for {} - {}",
                    record.symbol(),
                    record.display_name()
                ),
                validated_symbol: Some(order.symbol),
                suggestions: Vec::new(),
                order_id: Some(order_id),
            },
            Err(e) => {
                warn!("Order submission via {} failed: {}", self.submitter.id(), e);
                OrderOutcome {
                    validated_symbol: Some(order.symbol),
                    ..OrderOutcome::rejected(e.to_string(), Vec::new())
                }
            }
        }
    }
}

/// Result of the symbol lookup workflow.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LookupOutcome {
    pub found: bool,
    pub message: String,
    pub suggestions: Vec<InstrumentRecord>,
}

/// Look up a symbol for a user who only wants to know what exists.
pub fn lookup(engine: &SymbolEngine, query: &str) -> LookupOutcome {
    let validation = engine.validate(query);
    match validation.record() {
        Some(record) => LookupOutcome {
            found: true,
            message: format!(
                "Found exact match: {} - {}",
                record.symbol(),
                record.display_name()
            ),
            suggestions: validation.suggestions.clone(),
        },
        None => LookupOutcome {
            found: false,
            message: validation.message,
            suggestions: validation.suggestions,
        },
    }
}
