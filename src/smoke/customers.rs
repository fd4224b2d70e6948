use reqwest::StatusCode;
use serde_json::Value;
use std::io::Write;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Thresholds;
use crate::domain::{CustomerConnection, Session};
use crate::error::SmokeError;
use crate::graphql::GraphQlClient;
use crate::report::{self, Console, LatencyTier};

pub fn customers_document(first: u32) -> String {
    format!(
        r#"
query GetCustomers {{
  customers(first: {first}) {{
    pageInfo {{
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }}
    totalCount
    edges {{
      cursor
      node {{
        id
        firstName
        lastName
        email
        phoneNumber
        address {{
          city
        }}
        cars {{
          id
        }}
        lastSessionDate
        totalVisits
        totalSpent
        activeJobCards
        totalCars
      }}
    }}
  }}
}}
"#
    )
}

/// How the timed query ended. None of these abort the run.
#[derive(Debug, Clone)]
pub enum CustomersOutcome {
    Success {
        connection: CustomerConnection,
        elapsed: Duration,
        tier: LatencyTier,
    },
    QueryFailed {
        response: Value,
    },
    HttpError {
        status: StatusCode,
        body: String,
    },
}

impl CustomersOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CustomersOutcome::Success { .. })
    }
}

pub async fn query_customers<W: Write>(
    client: &GraphQlClient,
    session: &Session,
    page_size: u32,
    thresholds: &Thresholds,
    console: &mut Console<W>,
) -> Result<CustomersOutcome, SmokeError> {
    console.line("📊 Querying customers...")?;

    let response = client
        .execute(&customers_document(page_size), None, Some(&session.token))
        .await?;
    let elapsed_ms = response.elapsed_ms();

    if !response.is_ok() {
        warn!(status = %response.status, elapsed_ms, "customers query returned non-200");
        console.line(format_args!("❌ HTTP Error: {}", response.status.as_u16()))?;
        console.line(&response.body)?;
        return Ok(CustomersOutcome::HttpError {
            status: response.status,
            body: response.body,
        });
    }

    let envelope = response.json()?;
    if envelope.has_errors() {
        warn!(elapsed_ms, "customers query returned GraphQL errors");
        console.line("❌ Query failed:")?;
        console.json(envelope.raw())?;
        return Ok(CustomersOutcome::QueryFailed {
            response: envelope.into_raw(),
        });
    }

    let connection: CustomerConnection = envelope.data_field("customers")?;
    info!(
        elapsed_ms,
        total_count = connection.total_count,
        returned = connection.returned(),
        has_next_page = connection.page_info.has_next_page,
        end_cursor = connection.page_info.end_cursor.as_deref().unwrap_or(""),
        "customers query succeeded"
    );

    let tier = report::write_success(console, &connection, elapsed_ms, thresholds)?;
    Ok(CustomersOutcome::Success {
        connection,
        elapsed: response.elapsed,
        tier,
    })
}
