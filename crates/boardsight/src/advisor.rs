//! Main Advisor struct and public API.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::board::{BoardSource, fetch_table};
use crate::clean::TableCleaner;
use crate::error::{BoardsightError, Result};
use crate::llm::{DEFAULT_COMPANY, LlmProvider, advisor_prompt};
use crate::metrics::{BusinessMetrics, MetricsConfig};
use crate::table::Table;

/// Cleaned tables for the deals and work-orders boards.
///
/// Built fresh by every [`Advisor::load`]; keeping it around between
/// questions is up to the caller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    pub deals: Table,
    pub orders: Table,
}

/// A narrative answer and the context it was produced from.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    /// The model's answer.
    pub text: String,
    /// Metrics the prompt was built from.
    pub metrics: BusinessMetrics,
    /// The exact prompt sent to the model.
    pub prompt: String,
    /// Model that produced the answer.
    pub model: String,
}

/// Fetches boards, computes metrics and asks the language model.
pub struct Advisor {
    source: Box<dyn BoardSource>,
    cleaner: TableCleaner,
    metrics: MetricsConfig,
    company: String,
    llm_provider: Option<Arc<dyn LlmProvider>>,
}

impl Advisor {
    /// Create an advisor reading from the given board source.
    pub fn new(source: impl BoardSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cleaner: TableCleaner::new(),
            metrics: MetricsConfig::default(),
            company: DEFAULT_COMPANY.to_string(),
            llm_provider: None,
        }
    }

    /// Add an LLM provider for narrative answers.
    pub fn with_llm(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.llm_provider = Some(Arc::new(provider));
        self
    }

    /// Add an LLM provider that is shared with other owners.
    pub fn with_shared_llm(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.llm_provider = Some(provider);
        self
    }

    /// Replace the table cleaner.
    pub fn with_cleaner(mut self, cleaner: TableCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Set the column names the metrics read.
    pub fn with_metrics_config(mut self, config: MetricsConfig) -> Self {
        self.metrics = config;
        self
    }

    /// Set the company named in the prompt.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Fetch and clean a single board.
    pub fn fetch(&self, board_id: &str) -> Result<Table> {
        fetch_table(self.source.as_ref(), &self.cleaner, board_id)
    }

    /// Fetch both boards, deals first.
    pub fn load(&self, deals_board_id: &str, orders_board_id: &str) -> Result<Dataset> {
        let deals = self.fetch(deals_board_id)?;
        let orders = self.fetch(orders_board_id)?;
        info!(
            deals = deals.row_count(),
            orders = orders.row_count(),
            "data loaded"
        );
        Ok(Dataset { deals, orders })
    }

    /// Compute business metrics for a dataset.
    pub fn metrics(&self, dataset: &Dataset) -> BusinessMetrics {
        BusinessMetrics::compute(&dataset.deals, &dataset.orders, &self.metrics)
    }

    /// Answer a free-text question about a dataset.
    pub fn ask(&self, dataset: &Dataset, question: &str) -> Result<Answer> {
        let question = question.trim();
        if question.is_empty() {
            return Err(BoardsightError::Config("Question must not be empty".to_string()));
        }

        let llm = self
            .llm_provider
            .as_ref()
            .ok_or_else(|| BoardsightError::Config("No LLM provider configured".to_string()))?;

        let metrics = self.metrics(dataset);
        let prompt = advisor_prompt(&self.company, &metrics, question);
        let model = llm.config().model.clone();
        debug!(provider = llm.name(), model = %model, "asking question");

        let text = llm.complete(&prompt)?.trim().to_string();

        Ok(Answer {
            text,
            metrics,
            prompt,
            model,
        })
    }
}
