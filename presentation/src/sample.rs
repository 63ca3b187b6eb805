//! Bundled sample project.
//!
//! Lets the whole pipeline run without a data file: `consilium --sample`.

use consilium_domain::{
    CompanyData, CompanyResources, Competitor, CompetitorData, CustomerData, CustomerSegment,
    FinancialData, MarketData, ProjectData, ProjectInfo,
};

/// A fictional IT-services client with every analysis bucket populated.
pub fn sample_project() -> ProjectData {
    let mut data = ProjectData::new(ProjectInfo::new(
        "サンプル企業",
        "IT業界",
        "市場シェア拡大と収益性向上",
    ));

    data.customer_data = Some(CustomerData {
        market_size: 150_000_000_000.0,
        growth_rate: 12.0,
        segments: vec!["大企業".to_string(), "中堅企業".to_string()],
        needs: vec![
            "業務効率化".to_string(),
            "セキュリティ強化".to_string(),
            "コスト削減".to_string(),
        ],
        buying_behavior: "稟議による長期検討、実績重視".to_string(),
    });

    data.competitor_data = Some(CompetitorData {
        competitors: vec![
            Competitor {
                name: "大手SIer A社".to_string(),
                kind: "direct".to_string(),
                revenue: 80_000_000_000.0,
                strengths: vec!["営業網".to_string(), "価格競争力".to_string()],
                cost_advantage: true,
            },
            Competitor {
                name: "クラウド専業 B社".to_string(),
                kind: "direct".to_string(),
                revenue: 30_000_000_000.0,
                strengths: vec!["技術力".to_string()],
                cost_advantage: false,
            },
        ],
    });

    data.company_data = Some(CompanyData {
        core_competencies: vec!["業界特化ノウハウ".to_string(), "高い顧客維持率".to_string()],
        resources: CompanyResources {
            employees: 1200,
            rd_budget: 2_000_000_000.0,
        },
        value_proposition: "業界特化型の高品質ソリューション".to_string(),
        market_position: "チャレンジャー".to_string(),
    });

    data.market_analysis_data = Some(MarketData {
        market_size: 150_000_000_000.0,
        growth_rate: 12.0,
        market_segments: vec!["大企業向け".to_string(), "中堅企業向け".to_string()],
        market_trends: vec![
            "AIによる業務自動化".to_string(),
            "クラウド移行の加速".to_string(),
            "働き方改革関連の需要増".to_string(),
        ],
        customer_segments: vec![
            CustomerSegment {
                name: "大企業".to_string(),
                size: 90_000_000_000.0,
                growth_rate: 14.0,
                characteristics: vec!["長期契約".to_string(), "高単価".to_string()],
            },
            CustomerSegment {
                name: "中堅企業".to_string(),
                size: 40_000_000_000.0,
                growth_rate: 6.0,
                characteristics: vec!["価格感度が高い".to_string()],
            },
        ],
        market_share_data: [
            ("大手SIer A社".to_string(), 32.0),
            ("クラウド専業 B社".to_string(), 18.0),
            ("サンプル企業".to_string(), 9.0),
        ]
        .into_iter()
        .collect(),
    });

    data.financial_data = Some(FinancialData {
        revenue: 25_000_000_000.0,
        cost_of_sales: 15_000_000_000.0,
        operating_expenses: 7_500_000_000.0,
        assets: 30_000_000_000.0,
        liabilities: 12_000_000_000.0,
        equity: 18_000_000_000.0,
        cash_flow_operating: 3_000_000_000.0,
        cash_flow_investing: -1_200_000_000.0,
        cash_flow_financing: -500_000_000.0,
    });

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_has_every_bucket() {
        let data = sample_project();
        assert!(data.market_analysis_data.is_some());
        assert!(data.financial_data.is_some());
        assert!(data.customer_data.is_some());
        assert!(data.competitor_data.is_some());
        assert!(data.company_data.is_some());
        assert!(!data.client_name.is_empty());
    }
}
