//! Shared fixtures for the end-to-end smoke runs against a mock GraphQL server.
#![allow(dead_code)]

use gixat_smoke::config::Config;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str =
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.eyJzdWIiOiJ1c2VyLTEiLCJlbWFpbCI6ImFsLWh1c3NlaW5AcGFwYXlhdHJhZGluZy5jb20ifQ.signature";

pub fn config_for(server: &MockServer) -> Config {
    let mut cfg = Config::default();
    cfg.endpoint.url = format!("{}/graphql", server.uri());
    cfg
}

pub fn login_ok_body() -> Value {
    json!({
        "data": {
            "login": {
                "token": TOKEN,
                "user": {
                    "id": "user-1",
                    "email": "al-hussein@papayatrading.com",
                    "fullName": "Al Hussein"
                },
                "errors": null
            }
        }
    })
}

pub fn customer_node(id: &str, first_name: &str) -> Value {
    json!({
        "id": id,
        "firstName": first_name,
        "lastName": "Nasser",
        "email": format!("{}@example.com", first_name.to_lowercase()),
        "phoneNumber": "+971500000000",
        "address": { "city": "Dubai" },
        "cars": [{ "id": format!("{id}-car") }],
        "lastSessionDate": "2025-12-20T10:00:00Z",
        "totalVisits": 4,
        "totalSpent": 1250.5,
        "activeJobCards": 1,
        "totalCars": 1
    })
}

pub fn customers_body(nodes: Vec<Value>, total_count: u64) -> Value {
    let edges: Vec<Value> = nodes
        .into_iter()
        .enumerate()
        .map(|(i, node)| json!({ "cursor": format!("cursor-{i}"), "node": node }))
        .collect();
    let has_next_page = (total_count as usize) > edges.len();
    let start_cursor = edges.first().map(|e| e["cursor"].clone());
    let end_cursor = edges.last().map(|e| e["cursor"].clone());
    json!({
        "data": {
            "customers": {
                "pageInfo": {
                    "hasNextPage": has_next_page,
                    "hasPreviousPage": false,
                    "startCursor": start_cursor,
                    "endCursor": end_cursor
                },
                "totalCount": total_count,
                "edges": edges
            }
        }
    })
}

pub async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("mutation Login"))
        .respond_with(response)
        .expect(1)
        .named("login mutation")
        .mount(server)
        .await;
}

pub async fn mount_customers(server: &MockServer, response: ResponseTemplate, expected_calls: u64) {
    let bearer = format!("Bearer {TOKEN}");
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("query GetCustomers"))
        .and(header("authorization", bearer.as_str()))
        .respond_with(response)
        .expect(expected_calls)
        .named("customers query")
        .mount(server)
        .await;
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("console output is UTF-8")
}
