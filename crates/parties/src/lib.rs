//! Parties domain module (partners, companies, banking details).
//!
//! Reference data read by sales documents when they are printed. Pure domain
//! types, no IO.

pub mod bank;
pub mod company;
pub mod partner;

pub use bank::{Bank, BankAddress, BankDetails};
pub use company::{Company, LogoPosition, PrintingSettings, TradingName};
pub use partner::{Address, Country, Partner, PartnerTitle, PartnerType};
