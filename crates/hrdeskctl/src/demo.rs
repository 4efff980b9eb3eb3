//! Demo harness - canned queries through the router

use hrdesk_common::{Intent, Router};
use serde::Serialize;
use std::io::Write;

/// Queries the demo runs, in order. The last one is expected to be refused.
pub const SAMPLE_QUERIES: [&str; 6] = [
    "What are the working hours?",
    "Tell me about the leave policy.",
    "How many leaves do I have left?",
    "Can you draft an email for leave request?",
    "What is the probation period?",
    "Give me my salary details.",
];

pub const SEPARATOR_WIDTH: usize = 40;

/// One routed query and its reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exchange {
    pub query: String,
    pub intent: Intent,
    pub reply: String,
}

impl Exchange {
    pub fn route(router: &Router<'_>, query: &str) -> Self {
        let route = router.route(query);
        Self {
            query: query.to_string(),
            intent: route.intent,
            reply: route.reply,
        }
    }
}

/// `USER:` and `AGENT:` lines
pub fn write_exchange(out: &mut impl Write, exchange: &Exchange) -> std::io::Result<()> {
    writeln!(out, "USER: {}", exchange.query)?;
    writeln!(out, "AGENT: {}", exchange.reply)
}

pub fn write_separator(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

/// Route every query, in order
pub fn run_queries<'q>(
    router: &Router<'_>,
    queries: impl IntoIterator<Item = &'q str>,
) -> Vec<Exchange> {
    queries
        .into_iter()
        .map(|q| Exchange::route(router, q))
        .collect()
}
