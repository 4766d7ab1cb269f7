use crate::entities::RiskLevel;

/// Risk classification as found in stored party records: either a flag or
/// one of several label vocabularies.
#[derive(Debug, Clone, serde_derive::Deserialize)]
#[serde(untagged)]
pub(crate) enum RiskLevelModel {
    Flag(bool),
    Label(String),
}

impl Default for RiskLevelModel {
    fn default() -> Self {
        RiskLevelModel::Label(String::new())
    }
}

impl From<RiskLevelModel> for RiskLevel {
    fn from(model: RiskLevelModel) -> Self {
        match model {
            RiskLevelModel::Flag(at_risk) => RiskLevel::from_flag(at_risk),
            RiskLevelModel::Label(label) => RiskLevel::normalize(&label),
        }
    }
}
