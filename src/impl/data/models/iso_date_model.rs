use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;
use serde::Deserialize;

use crate::errors::InvalidIsoDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| InvalidIsoDate::with_debug(s, &e))?;
        Ok(ISODateModel(d))
    }
}

impl<'de> Deserialize<'de> for ISODateModel {
    fn deserialize<D>(deserializer: D) -> Result<ISODateModel, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ISODateModel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<ISODateModel> for NaiveDate {
    fn from(model: ISODateModel) -> Self {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date: NaiveDate = ISODateModel::from_str(" 2025-08-15 ").unwrap().into();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
    }

    #[test]
    fn rejects_other_formats() {
        assert!(ISODateModel::from_str("15/08/2025").is_err());
        assert!(ISODateModel::from_str("2025-02-30").is_err());
        assert!(ISODateModel::from_str("").is_err());
    }
}
