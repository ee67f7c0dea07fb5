//! Prompt templates for LLM interactions.

use crate::metrics::BusinessMetrics;
use crate::table::format_number;

/// Company the advisor speaks for unless told otherwise.
pub const DEFAULT_COMPANY: &str = "Skylark Drones";

/// Build the executive-advisor prompt from metrics and a user question.
pub fn advisor_prompt(company: &str, metrics: &BusinessMetrics, question: &str) -> String {
    let sector_info = if metrics.top_sectors.is_empty() {
        String::new()
    } else {
        let lines = metrics
            .top_sectors
            .iter()
            .map(|s| format!("- {}: {}", s.sector, format_number(s.value)))
            .collect::<Vec<_>>()
            .join("\n");
        format!("\nTop Sectors by Pipeline:\n{}", lines)
    };

    format!(
        r#"
You are a Business Intelligence Advisor for {company}.

Business Metrics:
- Total Pipeline Value: {total}
- Open Pipeline Value: {open}
- Total Deals: {deals}
- Total Work Orders: {orders}
{sector_info}

User Question:
{question}

Instructions:
1. Give a concise executive-level answer.
2. Provide insight, not just numbers.
3. Mention data caveats if appropriate.
"#,
        total = format_number(metrics.total_pipeline),
        open = format_number(metrics.open_pipeline),
        deals = metrics.total_deals,
        orders = metrics.total_orders,
        question = question.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::SectorTotal;

    fn metrics() -> BusinessMetrics {
        BusinessMetrics {
            total_pipeline: 4150.0,
            open_pipeline: 1600.5,
            total_deals: 5,
            total_orders: 2,
            top_sectors: vec![SectorTotal {
                sector: "Energy".to_string(),
                value: 2500.0,
            }],
        }
    }

    #[test]
    fn test_advisor_prompt() {
        let prompt = advisor_prompt(DEFAULT_COMPANY, &metrics(), "  How is energy doing?  ");

        assert!(prompt.starts_with("\nYou are a Business Intelligence Advisor for Skylark Drones.\n"));
        assert!(prompt.contains("- Total Pipeline Value: 4150\n"));
        assert!(prompt.contains("- Open Pipeline Value: 1600.5\n"));
        assert!(prompt.contains("- Total Deals: 5\n"));
        assert!(prompt.contains("- Total Work Orders: 2\n"));
        assert!(prompt.contains(
            "- Total Work Orders: 2\n\nTop Sectors by Pipeline:\n- Energy: 2500\n\nUser Question:"
        ));
        assert!(prompt.contains("User Question:\nHow is energy doing?\n"));
        assert!(prompt.ends_with("3. Mention data caveats if appropriate.\n"));
    }

    #[test]
    fn test_prompt_without_sectors() {
        let mut m = metrics();
        m.top_sectors.clear();
        let prompt = advisor_prompt("Acme", &m, "Q");
        assert!(!prompt.contains("Top Sectors"));
        assert!(prompt.contains("- Total Work Orders: 2\n\n\nUser Question:"));
    }
}
