use serde_json::json;
use test_utils::worldbank::{record, WorldBankStub};

use crate::{
    model::indicator::IndicatorQuery,
    server::{
        model::indicator::{CountryPoint, IndicatorCategory, IndicatorData, IndicatorRequest},
        service::indicator::{fallback::sample, IndicatorService},
        worldbank::WorldBankClient,
    },
};


fn client_for(stub: &WorldBankStub) -> WorldBankClient {
    let http_client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();

    WorldBankClient::new(http_client, stub.base_url())
}

fn request(category: IndicatorCategory, countries: &str, indicator: Option<&str>) -> IndicatorRequest {
    IndicatorRequest::from_query(
        category,
        IndicatorQuery {
            countries: Some(countries.to_string()),
            start_year: Some("2020".to_string()),
            end_year: Some("2022".to_string()),
            indicator: indicator.map(str::to_string),
        },
    )
    .unwrap()
}
