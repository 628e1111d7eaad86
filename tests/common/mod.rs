#![allow(dead_code)]

use dblp_paper_list::dblp::{DblpClient, DblpConfig};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const SEARCH_PATH: &str = "/search/publ/api";

/// Search response with `count` generated hits numbered from `first`.
pub fn hits_body(first: usize, count: usize) -> String {
    let hits: Vec<Value> = (first..first + count)
        .map(|n| {
            json!({
                "@score": "1",
                "@id": n.to_string(),
                "info": {
                    "authors": { "author": [
                        { "@pid": format!("{n}/a"), "text": format!("Author {n}A") },
                        { "@pid": format!("{n}/b"), "text": format!("Author {n}B") }
                    ]},
                    "title": format!("Paper {n}."),
                    "venue": "ICDE",
                    "year": "2024",
                    "ee": format!("https://doi.org/10.1109/ICDE.{n}"),
                }
            })
        })
        .collect();
    json!({
        "result": {
            "query": "toc:*",
            "status": { "@code": "200", "text": "OK" },
            "hits": {
                "@total": count.to_string(),
                "@computed": count.to_string(),
                "@sent": count.to_string(),
                "@first": "0",
                "hit": hits
            }
        }
    })
    .to_string()
}

pub fn empty_body() -> String {
    json!({
        "result": {
            "query": "toc:*",
            "status": { "@code": "200", "text": "OK" },
            "hits": { "@total": "0", "@computed": "0", "@sent": "0", "@first": "0" }
        }
    })
    .to_string()
}

/// Client pointed at the mock server's search path.
pub fn client_for(server: &ServerGuard) -> DblpClient {
    DblpClient::new(DblpConfig {
        api_url: format!("{}{}", server.url(), SEARCH_PATH),
        ..DblpConfig::default()
    })
    .unwrap()
}

/// Client pointed at a local port with nothing listening.
pub fn unreachable_client() -> DblpClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    DblpClient::new(DblpConfig {
        api_url: format!("http://127.0.0.1:{port}{SEARCH_PATH}"),
        ..DblpConfig::default()
    })
    .unwrap()
}

/// Mock answering exactly one search for `query` with `body`.
pub async fn mock_search(server: &mut ServerGuard, query: &str, body: String) -> Mock {
    mock_search_times(server, query, body, 1).await
}

/// Mock for `query` expected to be hit `times` times.
pub async fn mock_search_times(
    server: &mut ServerGuard,
    query: &str,
    body: String,
    times: usize,
) -> Mock {
    server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), query.into()),
            Matcher::UrlEncoded("h".into(), "1000".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(times)
        .create_async()
        .await
}

pub fn count_entries(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
