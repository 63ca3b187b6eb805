//! Project data value objects.
//!
//! [`ProjectData`] is deserialized from a user-supplied JSON data file (or
//! assembled from a fetched [`super::ClientProfile`]); every bucket is
//! optional because a run with partial data is expected, not an error:
//! agents whose bucket is missing report `Skipped`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Project identity triple, embedded in prompts and the report header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub client_name: String,
    pub industry: String,
    pub challenge: String,
}

impl ProjectInfo {
    pub fn new(
        client_name: impl Into<String>,
        industry: impl Into<String>,
        challenge: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            industry: industry.into(),
            challenge: challenge.into(),
        }
    }
}

/// Immutable input snapshot for one orchestration run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectData {
    pub client_name: String,
    pub industry: String,
    pub challenge: String,
    #[serde(default)]
    pub customer_data: Option<CustomerData>,
    #[serde(default)]
    pub competitor_data: Option<CompetitorData>,
    #[serde(default)]
    pub company_data: Option<CompanyData>,
    #[serde(default)]
    pub market_analysis_data: Option<MarketData>,
    #[serde(default)]
    pub financial_data: Option<FinancialData>,
}

impl ProjectData {
    pub fn new(info: ProjectInfo) -> Self {
        Self {
            client_name: info.client_name,
            industry: info.industry,
            challenge: info.challenge,
            ..Default::default()
        }
    }

    /// The identity triple, for prompts and report headers.
    pub fn info(&self) -> ProjectInfo {
        ProjectInfo {
            client_name: self.client_name.clone(),
            industry: self.industry.clone(),
            challenge: self.challenge.clone(),
        }
    }
}

/// Customer-side market view (demand, needs, behavior).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerData {
    #[serde(default)]
    pub market_size: f64,
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub segments: Vec<String>,
    #[serde(default)]
    pub needs: Vec<String>,
    #[serde(default)]
    pub buying_behavior: String,
}

/// One competitor entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Competitor {
    #[serde(default)]
    pub name: String,
    /// "direct" or "indirect".
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub cost_advantage: bool,
}

/// Competitive landscape bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetitorData {
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

/// Own-company resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyResources {
    #[serde(default)]
    pub employees: u64,
    #[serde(default)]
    pub rd_budget: f64,
}

/// Own-company bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyData {
    #[serde(default)]
    pub core_competencies: Vec<String>,
    #[serde(default)]
    pub resources: CompanyResources,
    #[serde(default)]
    pub value_proposition: String,
    #[serde(default)]
    pub market_position: String,
}

/// One customer segment inside the market bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerSegment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub characteristics: Vec<String>,
}

/// Input bucket for the market scoring framework.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub market_size: f64,
    #[serde(default)]
    pub growth_rate: f64,
    #[serde(default)]
    pub market_segments: Vec<String>,
    #[serde(default)]
    pub market_trends: Vec<String>,
    #[serde(default)]
    pub customer_segments: Vec<CustomerSegment>,
    /// Company name → market share in percent. BTreeMap keeps iteration
    /// order deterministic across runs.
    #[serde(default)]
    pub market_share_data: BTreeMap<String, f64>,
}

impl MarketData {
    /// A bucket that deserialized to all defaults carries no signal and is
    /// treated the same as an absent bucket.
    pub fn is_empty(&self) -> bool {
        self.market_size == 0.0
            && self.growth_rate == 0.0
            && self.market_segments.is_empty()
            && self.market_trends.is_empty()
            && self.customer_segments.is_empty()
            && self.market_share_data.is_empty()
    }
}

/// Input bucket for the financial scoring framework. All figures in JPY.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialData {
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub cost_of_sales: f64,
    #[serde(default)]
    pub operating_expenses: f64,
    #[serde(default)]
    pub assets: f64,
    #[serde(default)]
    pub liabilities: f64,
    #[serde(default)]
    pub equity: f64,
    #[serde(default)]
    pub cash_flow_operating: f64,
    #[serde(default)]
    pub cash_flow_investing: f64,
    #[serde(default)]
    pub cash_flow_financing: f64,
}

impl FinancialData {
    pub fn is_empty(&self) -> bool {
        self.revenue == 0.0 && self.assets == 0.0 && self.equity == 0.0
    }
}
