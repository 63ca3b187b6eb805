//! Client profile fetched from the model.
//!
//! The client-info agent asks the model for a complete set of analysis
//! buckets as JSON; this type is the parse target. Every bucket is optional
//! because the model may legitimately omit sections it cannot estimate.

use super::value_objects::{
    CompanyData, CompetitorData, CustomerData, FinancialData, MarketData, ProjectData,
};
use serde::{Deserialize, Serialize};

/// Structured company research result, mirroring the optional buckets of
/// [`ProjectData`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientProfile {
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

impl ClientProfile {
    /// Fill the project's missing buckets from this profile.
    ///
    /// Buckets already present in the project win; fetched data only
    /// supplements what the user did not provide.
    pub fn merge_into(self, data: &mut ProjectData) {
        if data.customer_data.is_none() {
            data.customer_data = self.customer_data;
        }
        if data.competitor_data.is_none() {
            data.competitor_data = self.competitor_data;
        }
        if data.company_data.is_none() {
            data.company_data = self.company_data;
        }
        if data.market_analysis_data.is_none() {
            data.market_analysis_data = self.market_analysis_data;
        }
        if data.financial_data.is_none() {
            data.financial_data = self.financial_data;
        }
    }

    /// Short human-readable digest of what was fetched.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        lines.push("取得したクライアント情報".to_string());

        if let Some(customer) = &self.customer_data {
            lines.push(format!(
                "  顧客データ: 市場規模 ¥{:.0} / 成長率 {}%",
                customer.market_size, customer.growth_rate
            ));
        }
        if let Some(competitor) = &self.competitor_data {
            lines.push(format!(
                "  競合データ: 競合企業数 {}",
                competitor.competitors.len()
            ));
        }
        if let Some(financial) = &self.financial_data {
            lines.push(format!("  財務データ: 売上高 ¥{:.0}", financial.revenue));
        }
        if self.market_analysis_data.is_some() {
            lines.push("  市場分析データ: あり".to_string());
        }
        if self.company_data.is_some() {
            lines.push("  自社データ: あり".to_string());
        }

        lines.join("\n")
    }
}
