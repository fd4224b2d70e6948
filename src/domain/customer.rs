//! Relay-style `customers` connection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerConnection {
    pub page_info: PageInfo,
    pub total_count: u64,
    #[serde(default)]
    pub edges: Vec<CustomerEdge>,
}

impl CustomerConnection {
    pub fn returned(&self) -> usize {
        self.edges.len()
    }

    /// The first node exactly as the server sent it.
    pub fn first_customer(&self) -> Option<&Value> {
        self.edges.first().map(|edge| &edge.node)
    }
}

/// `node` stays untyped: the sample is echoed verbatim, so a field the
/// server renders differently (a string decimal, an unexpected null) must not
/// fail the run or be rewritten.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CustomerEdge {
    pub cursor: Option<String>,
    pub node: Value,
}
