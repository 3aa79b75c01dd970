use serde::{Deserialize, Serialize};

use arbor_core::{Entity, PartnerId};

/// Legal nature of a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerType {
    Company,
    Individual,
}

impl PartnerType {
    pub fn select_value(self) -> i32 {
        match self {
            PartnerType::Company => 1,
            PartnerType::Individual => 2,
        }
    }
}

/// Civility of an individual partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerTitle {
    Mister,
    Miss,
    Doctor,
    Professor,
}

impl PartnerTitle {
    pub fn select_value(self) -> i32 {
        match self {
            PartnerTitle::Mister => 1,
            PartnerTitle::Miss => 2,
            PartnerTitle::Doctor => 3,
            PartnerTitle::Professor => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub full_name: String,
    pub country: Option<Country>,
}

/// Customer, contact or any other third party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub partner_seq: Option<String>,
    pub partner_type: PartnerType,
    pub name: String,
    pub first_name: Option<String>,
    pub title: Option<PartnerTitle>,
    pub fixed_phone: Option<String>,
    pub email_address: Option<String>,
}

impl Partner {
    pub fn new(id: PartnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            partner_seq: None,
            partner_type: PartnerType::Company,
            name: name.into(),
            first_name: None,
            title: None,
            fixed_phone: None,
            email_address: None,
        }
    }

    /// "Name FirstName", skipping missing parts.
    pub fn full_name(&self) -> String {
        match self.first_name.as_deref().filter(|f| !f.is_empty()) {
            Some(first) => format!("{} {}", self.name, first),
            None => self.name.clone(),
        }
    }
}

impl Entity for Partner {
    type Id = PartnerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_missing_first_name() {
        let mut partner = Partner::new(PartnerId::new(1), "Durand");
        assert_eq!(partner.full_name(), "Durand");

        partner.first_name = Some("Paul".to_string());
        assert_eq!(partner.full_name(), "Durand Paul");
    }
}
