//! Classification and template commands.

use console::style;

use crate::config::Config;
use crate::draft::{Classifier, TemplateKind};
use crate::models::{Draft, RiskLevel};

/// Print a draft with its summary and risk label.
pub(super) fn print_draft(draft: &Draft) {
    let risk = match draft.risk_level {
        RiskLevel::Medium => style(draft.risk_level.as_str()).yellow().bold(),
        RiskLevel::Low => style(draft.risk_level.as_str()).green().bold(),
    };
    println!("{}", style("AI Summary").bold());
    println!("  {}", draft.summary);
    println!("  Risk Level: {}", risk);
    println!();
    println!("{}", style("Generated Draft").bold());
    println!("{}", draft.body);
}

/// Classify text and print the draft.
pub fn cmd_classify(config: &Config, text: &str, json: bool) -> anyhow::Result<()> {
    let draft = Classifier::from_config(&config.drafts).classify(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        print_draft(&draft);
    }
    Ok(())
}

/// Print one template, or list the kinds.
pub fn cmd_template(config: &Config, kind: Option<&str>, json: bool) -> anyhow::Result<()> {
    let Some(name) = kind else {
        println!("{}", style("Templates").bold());
        for kind in TemplateKind::ALL {
            println!("  {:<24} {}", kind.slug(), style(kind.label()).dim());
        }
        return Ok(());
    };

    let kind = parse_kind(name)?;
    let draft = Classifier::from_config(&config.drafts).template(kind);
    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        print_draft(&draft);
    }
    Ok(())
}

fn parse_kind(name: &str) -> anyhow::Result<TemplateKind> {
    TemplateKind::from_str(name)
        .or_else(|| TemplateKind::from_label(name))
        .ok_or_else(|| {
            let known: Vec<_> = TemplateKind::ALL.iter().map(|k| k.slug()).collect();
            anyhow::anyhow!(
                "Unknown template '{}'. Expected one of: {}",
                name,
                known.join(", ")
            )
        })
}
