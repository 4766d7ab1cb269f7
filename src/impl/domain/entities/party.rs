use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartyId(pub String);

impl std::fmt::Display for PartyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PartyId {
    fn from(s: &str) -> Self {
        PartyId(s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Deserialize)]
pub enum PartyRole {
    /// Cedente: sells the receivable for early payment.
    Assignor,
    /// Sacado: owes the original invoice at maturity.
    Debtor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
    NotAssessed,
}

impl RiskLevel {
    /// Maps the textual risk labels used across older records onto a single
    /// classification. Unknown labels are treated as not assessed.
    pub fn normalize(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "alto" | "risco" | "high" => RiskLevel::High,
            "moderado" | "moderate" => RiskLevel::Moderate,
            "baixo" | "sem_risco" | "low" => RiskLevel::Low,
            _ => RiskLevel::NotAssessed,
        }
    }

    /// Older records stored risk as a plain flag ("has risk").
    pub fn from_flag(at_risk: bool) -> Self {
        if at_risk {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Party {
    pub id: PartyId,
    pub role: PartyRole,
    pub legal_name: String,
    /// CNPJ, kept as entered (usually with punctuation).
    pub tax_id: String,
    pub address: String,
    pub bank_account: Option<String>,
    pub risk: RiskLevel,
    pub created_on: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_legacy_risk_labels() {
        assert_eq!(RiskLevel::normalize("risco"), RiskLevel::High);
        assert_eq!(RiskLevel::normalize("alto"), RiskLevel::High);
        assert_eq!(RiskLevel::normalize("Moderado"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::normalize("sem_risco"), RiskLevel::Low);
        assert_eq!(RiskLevel::normalize(" baixo "), RiskLevel::Low);
        assert_eq!(RiskLevel::normalize("nao_avaliado"), RiskLevel::NotAssessed);
        assert_eq!(RiskLevel::normalize("???"), RiskLevel::NotAssessed);
    }

    #[test]
    fn normalizes_legacy_risk_flags() {
        assert_eq!(RiskLevel::from_flag(true), RiskLevel::High);
        assert_eq!(RiskLevel::from_flag(false), RiskLevel::Low);
    }
}
