// Paginated conference fetch against a mock DBLP search endpoint.

mod common;

use common::*;
use dblp_paper_list::fetch_conference_papers;
use tempfile::TempDir;

#[tokio::test]
async fn no_hits_for_bare_key_or_first_part_reports_no_papers() {
    let mut server = mockito::Server::new_async().await;
    let bare = mock_search(&mut server, "toc:db/conf/icde/icde2024.bht:", empty_body()).await;
    let part1 = mock_search(&mut server, "toc:db/conf/icde/icde2024-1.bht:", empty_body()).await;
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "icde", "2024", temp_dir.path())
        .await
        .unwrap();

    assert_eq!(message, "No papers found for ICDE 2024.");
    bare.assert_async().await;
    part1.assert_async().await;
    assert_eq!(count_entries(temp_dir.path()), 0, "no files should be written");
}

#[tokio::test]
async fn single_page_stops_without_probing_parts() {
    let mut server = mockito::Server::new_async().await;
    let bare = mock_search(&mut server, "toc:db/conf/icde/icde2024.bht:", hits_body(1, 3)).await;
    let part1 =
        mock_search_times(&mut server, "toc:db/conf/icde/icde2024-1.bht:", empty_body(), 0).await;
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "icde", "2024", temp_dir.path())
        .await
        .unwrap();

    let save_dir = temp_dir.path().join("icde_2024");
    assert_eq!(
        message,
        format!("Save completed. Save directory: {}", save_dir.display())
    );
    bare.assert_async().await;
    part1.assert_async().await;

    let titles = std::fs::read_to_string(save_dir.join("icde_2024.txt")).unwrap();
    assert_eq!(titles, "Paper 1.\n\nPaper 2.\n\nPaper 3.\n\n");

    let with_authors = std::fs::read_to_string(save_dir.join("icde_2024_with_authors.txt")).unwrap();
    assert!(with_authors.starts_with("Paper 1.\nAuthor 1A, Author 1B\n\n"));
    assert_eq!(with_authors.matches("\n\n").count(), 3);

    let with_links = std::fs::read_to_string(save_dir.join("icde_2024_with_links.txt")).unwrap();
    assert!(with_links.ends_with("Paper 3.\nhttps://doi.org/10.1109/ICDE.3\n\n"));
}

#[tokio::test]
async fn split_proceedings_repeat_first_part_then_advance() {
    let mut server = mockito::Server::new_async().await;
    let mocks = vec![
        mock_search(&mut server, "toc:db/conf/vldb/vldb2023.bht:", empty_body()).await,
        mock_search_times(&mut server, "toc:db/conf/vldb/vldb2023-1.bht:", hits_body(1, 2), 2)
            .await,
        mock_search(&mut server, "toc:db/conf/vldb/vldb2023-2.bht:", hits_body(3, 1)).await,
        mock_search(&mut server, "toc:db/conf/vldb/vldb2023-3.bht:", empty_body()).await,
    ];
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "VLDB", "2023", temp_dir.path())
        .await
        .unwrap();

    assert!(message.starts_with("Save completed."));
    for mock in &mocks {
        mock.assert_async().await;
    }

    let titles =
        std::fs::read_to_string(temp_dir.path().join("VLDB_2023").join("VLDB_2023.txt")).unwrap();
    assert_eq!(
        titles,
        "Paper 1.\n\nPaper 2.\n\nPaper 1.\n\nPaper 2.\n\nPaper 3.\n\n"
    );
}

#[tokio::test]
async fn sigmod_year_is_suffixed_with_c() {
    let mut server = mockito::Server::new_async().await;
    let bare =
        mock_search(&mut server, "toc:db/conf/sigmod/sigmod2020c.bht:", hits_body(1, 1)).await;
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "sigmod", "2020", temp_dir.path())
        .await
        .unwrap();

    bare.assert_async().await;
    assert!(message.ends_with("sigmod_2020c"), "got: {message}");
    assert!(temp_dir.path().join("sigmod_2020c").join("sigmod_2020c.txt").exists());
}

#[tokio::test]
async fn sigmod_empty_proceedings_keep_single_c() {
    let mut server = mockito::Server::new_async().await;
    let bare = mock_search(&mut server, "toc:db/conf/sigmod/sigmod2020c.bht:", empty_body()).await;
    let part1 =
        mock_search(&mut server, "toc:db/conf/sigmod/sigmod2020c-1.bht:", empty_body()).await;
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "SIGMOD", "2020", temp_dir.path())
        .await
        .unwrap();

    assert_eq!(message, "No papers found for SIGMOD 2020c.");
    bare.assert_async().await;
    part1.assert_async().await;
}

#[tokio::test]
async fn transport_failure_returns_error_message() {
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&unreachable_client(), "icde", "2024", temp_dir.path())
        .await
        .unwrap();

    assert!(
        message.contains("Error while accessing DBLP API"),
        "got: {message}"
    );
    assert_eq!(count_entries(temp_dir.path()), 0);
}

#[tokio::test]
async fn failure_after_first_part_discards_accumulated_papers() {
    let mut server = mockito::Server::new_async().await;
    let _bare = mock_search(&mut server, "toc:db/conf/icde/icde2022.bht:", empty_body()).await;
    let _part1 =
        mock_search(&mut server, "toc:db/conf/icde/icde2022-1.bht:", hits_body(1, 2)).await;
    let _part2 = server
        .mock("GET", SEARCH_PATH)
        .match_query(mockito::Matcher::UrlEncoded(
            "q".into(),
            "toc:db/conf/icde/icde2022-2.bht:".into(),
        ))
        .with_status(500)
        .create_async()
        .await;
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "icde", "2022", temp_dir.path())
        .await
        .unwrap();

    assert!(message.starts_with("Error while accessing DBLP API"), "got: {message}");
    assert_eq!(count_entries(temp_dir.path()), 0);
}

#[tokio::test]
async fn malformed_body_returns_error_message() {
    let mut server = mockito::Server::new_async().await;
    let _bare = mock_search(
        &mut server,
        "toc:db/conf/icde/icde2024.bht:",
        "<html>rate limited</html>".to_string(),
    )
    .await;
    let temp_dir = TempDir::new().unwrap();

    let message = fetch_conference_papers(&client_for(&server), "icde", "2024", temp_dir.path())
        .await
        .unwrap();

    assert!(message.starts_with("Error while accessing DBLP API"), "got: {message}");
}
