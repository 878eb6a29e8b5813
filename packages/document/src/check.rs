//! Consistency checks over stored `site_data`.
//!
//! Checks run on the wire shape, before loading repairs anything, so a
//! duplicate id or a stray `order` stamp is reported instead of silently
//! fixed.

use crate::props::{MAX_COLUMNS, MIN_COLUMNS};
use crate::SiteData;
use pagewright_catalog::BlockCatalog;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => f.write_str("error"),
            DiagnosticLevel::Warning => f.write_str("warning"),
            DiagnosticLevel::Info => f.write_str("info"),
        }
    }
}

/// One finding about a stored document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub level: DiagnosticLevel,

    /// Rule that produced this diagnostic, e.g. `duplicate-id`
    pub rule: String,

    pub message: String,

    /// Block the finding is about, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn error(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(DiagnosticLevel::Error, rule, message)
    }

    pub fn warning(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(DiagnosticLevel::Warning, rule, message)
    }

    pub fn info(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(DiagnosticLevel::Info, rule, message)
    }

    fn with_level(level: DiagnosticLevel, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            block_id: None,
            suggestion: None,
        }
    }

    pub fn on_block(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}

/// Run every rule over `site_data`
pub fn check(site_data: &SiteData, catalog: &BlockCatalog) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    diagnostics.extend(check_duplicate_ids(site_data));
    diagnostics.extend(check_types_and_props(site_data, catalog));
    diagnostics.extend(check_column_range(site_data));
    diagnostics.extend(check_order_stamps(site_data));
    diagnostics
}

fn check_duplicate_ids(site_data: &SiteData) -> Vec<Diagnostic> {
    let mut seen = HashSet::new();
    let mut diagnostics = Vec::new();

    for block in &site_data.blocks {
        if block.id.is_empty() {
            diagnostics.push(
                Diagnostic::error("duplicate-id", format!("A '{}' block has no id", block.block_type))
                    .with_suggestion("A fresh id is assigned when the site is opened"),
            );
        } else if !seen.insert(block.id.as_str()) {
            diagnostics.push(
                Diagnostic::error("duplicate-id", format!("Block id '{}' is used more than once", block.id))
                    .on_block(&block.id)
                    .with_suggestion("Later copies get a fresh id when the site is opened"),
            );
        }
    }

    diagnostics
}

fn check_types_and_props(site_data: &SiteData, catalog: &BlockCatalog) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for block in &site_data.blocks {
        if !catalog.contains_type(&block.block_type) {
            diagnostics.push(
                Diagnostic::warning(
                    "unknown-type",
                    format!("Unknown block type '{}'", block.block_type),
                )
                .on_block(&block.id)
                .with_suggestion("The block is kept but renders as a placeholder"),
            );
            continue;
        }

        // Legacy blocks carry their content outside props
        let props = match (&block.props, block.extra.get("content")) {
            (props, Some(Value::Object(content))) if props.is_empty() => content,
            (props, _) => props,
        };

        for key in props.keys() {
            if !catalog.recognizes(&block.block_type, key) {
                diagnostics.push(
                    Diagnostic::info(
                        "unrecognized-prop",
                        format!("'{}' is not a prop of '{}' blocks", key, block.block_type),
                    )
                    .on_block(&block.id),
                );
            }
        }
    }

    diagnostics
}

fn check_column_range(site_data: &SiteData) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for block in &site_data.blocks {
        let Some(value) = block.props.get("columns") else {
            continue;
        };

        let numeric = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match numeric {
            Some(n) if n >= MIN_COLUMNS as f64 && n <= MAX_COLUMNS as f64 => {}
            Some(n) => diagnostics.push(
                Diagnostic::warning(
                    "column-range",
                    format!(
                        "Column count {} is outside {}..={} and will be clamped",
                        n, MIN_COLUMNS, MAX_COLUMNS
                    ),
                )
                .on_block(&block.id),
            ),
            None => diagnostics.push(
                Diagnostic::warning(
                    "column-range",
                    format!("Column count {} is not a number; the default is used", value),
                )
                .on_block(&block.id),
            ),
        }
    }

    diagnostics
}

fn check_order_stamps(site_data: &SiteData) -> Vec<Diagnostic> {
    let stamped = site_data.blocks.iter().filter(|b| b.order.is_some()).count();
    if stamped == 0 {
        return Vec::new();
    }

    let mut diagnostics = Vec::new();

    if stamped < site_data.blocks.len() {
        diagnostics.push(
            Diagnostic::info(
                "order-mismatch",
                format!(
                    "{} of {} blocks carry an order stamp",
                    stamped,
                    site_data.blocks.len()
                ),
            )
            .with_suggestion("Unstamped blocks keep their array position; saving re-stamps all"),
        );
    }

    let mut orders = HashSet::new();
    for (index, block) in site_data.blocks.iter().enumerate() {
        let Some(order) = block.order else { continue };
        if !orders.insert(order) {
            diagnostics.push(
                Diagnostic::info("order-mismatch", format!("Order {} appears more than once", order))
                    .on_block(&block.id),
            );
        } else if order != index as i64 {
            diagnostics.push(
                Diagnostic::info(
                    "order-mismatch",
                    format!("Block at position {} is stamped with order {}", index, order),
                )
                .on_block(&block.id)
                .with_suggestion("Blocks are sorted by order when the site is opened"),
            );
        }
    }

    diagnostics
}
