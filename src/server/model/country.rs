use crate::model::country::CountryDto;

/// Country offered to the dashboard's country picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRef {
    /// Upstream country identifier, e.g. `"USA"`.
    pub code: String,
    /// Display name.
    pub name: String,
}

impl CountryRef {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            code: self.code,
            name: self.name,
        }
    }
}
