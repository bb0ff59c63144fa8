use crate::server::{model::country::CountryRef, worldbank::WorldBankClient};

/// Countries offered when upstream yields none.
const FALLBACK_COUNTRIES: [(&str, &str); 10] = [
    ("US", "United States"),
    ("CN", "China"),
    ("IN", "India"),
    ("DE", "Germany"),
    ("JP", "Japan"),
    ("GB", "United Kingdom"),
    ("FR", "France"),
    ("BR", "Brazil"),
    ("CA", "Canada"),
    ("AU", "Australia"),
];

/// Service providing the country picker list.
pub struct CountryService<'a> {
    worldbank: &'a WorldBankClient,
}

impl<'a> CountryService<'a> {
    pub fn new(worldbank: &'a WorldBankClient) -> Self {
        Self { worldbank }
    }

    /// Lists the countries offered to the dashboard.
    ///
    /// # Returns
    /// - `Vec<CountryRef>` - Upstream countries, or a fixed list of ten when upstream yields none
    pub async fn list(&self) -> Vec<CountryRef> {
        let countries = self.worldbank.fetch_countries().await;

        tracing::info!("Returning {} countries to frontend", countries.len());

        if countries.is_empty() {
            return fallback_countries();
        }

        countries
    }
}

pub fn fallback_countries() -> Vec<CountryRef> {
    FALLBACK_COUNTRIES
        .iter()
        .map(|(code, name)| CountryRef::new(*code, *name))
        .collect()
}
