use serde::{Deserialize, Serialize};

use arbor_core::{CompanyId, Entity, MetaFile};

/// Where the logo sits on printed documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    None,
    Left,
    Center,
    Right,
}

impl LogoPosition {
    pub fn select_value(self) -> i32 {
        match self {
            LogoPosition::None => 0,
            LogoPosition::Left => 1,
            LogoPosition::Center => 2,
            LogoPosition::Right => 3,
        }
    }
}

/// Header/footer layout used when printing documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintingSettings {
    pub name: String,
    pub pdf_header: Option<String>,
    pub pdf_footer: Option<String>,
    pub logo_position: LogoPosition,
}

/// Alternative commercial identity of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingName {
    pub name: String,
    pub logo: Option<MetaFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub logo: Option<MetaFile>,
    /// Logo height in pixels on printed documents.
    pub logo_height: Option<i32>,
    pub logo_width: Option<i32>,
    pub printing_settings: Option<PrintingSettings>,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            logo: None,
            logo_height: None,
            logo_width: None,
            printing_settings: None,
        }
    }
}

impl Entity for Company {
    type Id = CompanyId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
