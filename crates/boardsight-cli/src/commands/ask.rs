//! Ask command - answer a question about the pipeline with the LLM.

use boardsight::{Advisor, BoardsightConfig, GeminiProvider, LlmConfig, MockProvider};
use colored::Colorize;

pub fn run(
    question: String,
    deals: Option<String>,
    orders: Option<String>,
    model: Option<String>,
    mock_llm: bool,
    show_prompt: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = BoardsightConfig::from_env();
    let (deals_id, orders_id) = super::board_ids(&config, deals, orders)?;

    let mut advisor = Advisor::new(super::board_client(&config)?)
        .with_metrics_config(config.metrics.clone())
        .with_company(config.company.clone());

    advisor = if mock_llm {
        advisor.with_llm(MockProvider::new())
    } else {
        let llm_config = LlmConfig {
            model: model.unwrap_or_else(|| config.llm.model.clone()),
            ..config.llm.clone()
        };
        advisor.with_llm(GeminiProvider::with_config(config.require_llm_key()?, llm_config)?)
    };

    eprintln!("{}", "Fetching boards...".cyan());
    let dataset = advisor.load(&deals_id, &orders_id)?;

    eprintln!("{}", "Analyzing data...".cyan());
    let answer = advisor.ask(&dataset, &question)?;

    if verbose {
        super::metrics::print_metrics(&answer.metrics);
        println!();
    }

    if show_prompt {
        println!("{}", "Prompt".yellow().bold());
        println!("{}", answer.prompt.dimmed());
        println!();
    }

    println!("{}", answer.text);
    Ok(())
}
