use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use test_utils::worldbank::{country, paged, record, WorldBankStub};

use crate::server::{model::probe::UpstreamProbe, worldbank::WorldBankClient};

mod fetch_countries;

/// Builds a client pointed at the stub with a short timeout.
fn client_for(stub: &WorldBankStub) -> WorldBankClient {
    client_with_timeout(stub, Duration::from_secs(2))
}

fn client_with_timeout(stub: &WorldBankStub, timeout: Duration) -> WorldBankClient {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap();

    WorldBankClient::new(http_client, stub.base_url())
}
