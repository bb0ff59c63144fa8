use super::*;

/// Tests that aggregate regions and entries without a capital are dropped.
///
/// Expected: only real countries remain, in upstream order, coded by upstream id
#[tokio::test]
async fn excludes_aggregates_and_entries_without_capital() {
    let stub = WorldBankStub::start().await;
    let mock = stub
        .countries(json!([
            country("WLD", "World", "Washington D.C."),
            country("ARG", "Argentina", "Buenos Aires"),
            country("EUU", "European Union", "Brussels"),
            country("AFE", "Africa Eastern and Southern", ""),
            country("DEU", "Germany", "Berlin"),
        ]))
        .await;

    let countries = client_for(&stub).fetch_countries().await;

    mock.assert_async().await;
    let codes: Vec<&str> = countries.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["ARG", "DEU"]);
    assert_eq!(countries[1].name, "Germany");
}

/// Tests that entries missing an id are skipped rather than failing the list.
///
/// Expected: remaining entries are still returned
#[tokio::test]
async fn skips_entries_without_id() {
    let stub = WorldBankStub::start().await;
    stub.countries(json!([
        { "name": "Nowhere", "capitalCity": "Nothing" },
        country("FRA", "France", "Paris"),
    ]))
    .await;

    let countries = client_for(&stub).fetch_countries().await;

    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].code, "FRA");
}

/// Tests that the list is capped at thirty countries.
///
/// Expected: first 30 qualifying entries in upstream order
#[tokio::test]
async fn caps_at_thirty_countries() {
    let stub = WorldBankStub::start().await;
    let entries: Vec<_> = (0..40)
        .map(|i| country(&format!("C{:02}", i), &format!("Country {}", i), "Capital"))
        .collect();
    stub.countries(json!(entries)).await;

    let countries = client_for(&stub).fetch_countries().await;

    assert_eq!(countries.len(), 30);
    assert_eq!(countries[0].code, "C00");
    assert_eq!(countries[29].code, "C29");
}

/// Tests that an upstream failure is absorbed.
///
/// Expected: empty list
#[tokio::test]
async fn upstream_failure_yields_empty_list() {
    let stub = WorldBankStub::start().await;
    stub.countries_raw(503, "unavailable").await;

    let countries = client_for(&stub).fetch_countries().await;

    assert!(countries.is_empty());
}
