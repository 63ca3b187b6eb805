//! Project input model.
//!
//! A project is the immutable input snapshot for one orchestration run:
//! the client identity plus optional structured data buckets, one per
//! analysis concern. Agents read buckets; nothing mutates the snapshot.

pub mod profile;
pub mod value_objects;

pub use profile::ClientProfile;
pub use value_objects::{
    CompanyData, CompanyResources, Competitor, CompetitorData, CustomerData, CustomerSegment,
    FinancialData, MarketData, ProjectData, ProjectInfo,
};
