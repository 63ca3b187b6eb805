//! 3C analysis framework (Customer / Competitor / Company).
//!
//! Produces a compact structured digest of the three perspectives plus a
//! derived strategic direction. The digest is embedded in the strategy
//! agent's prompt as factual grounding.

use crate::project::{CompanyData, CompetitorData, CustomerData};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CustomerInsight {
    pub market_size: f64,
    pub growth_rate: f64,
    pub attractiveness: String,
    pub key_needs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitorInsight {
    pub competitor_count: usize,
    /// Competitor name → estimated share of tracked revenue, in percent.
    pub share_estimates: Vec<(String, f64)>,
    pub cost_leaders: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompanyInsight {
    pub core_competencies: Vec<String>,
    pub value_proposition: String,
    pub market_position: String,
}

/// Complete 3C analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct ThreeCReport {
    pub customer: CustomerInsight,
    pub competitor: CompetitorInsight,
    pub company: CompanyInsight,
    pub strategic_direction: String,
}

/// Run the 3C analysis. Absent buckets are treated as empty.
pub fn analyze(
    customer: &CustomerData,
    competitor: &CompetitorData,
    company: &CompanyData,
) -> ThreeCReport {
    let customer_insight = analyze_customer(customer);
    let competitor_insight = analyze_competitor(competitor);
    let company_insight = analyze_company(company);
    let strategic_direction =
        derive_direction(&customer_insight, &competitor_insight, &company_insight);

    ThreeCReport {
        customer: customer_insight,
        competitor: competitor_insight,
        company: company_insight,
        strategic_direction,
    }
}

fn analyze_customer(customer: &CustomerData) -> CustomerInsight {
    let attractiveness = if customer.growth_rate > 10.0 {
        "高成長市場"
    } else if customer.growth_rate > 3.0 {
        "安定成長市場"
    } else {
        "成熟市場"
    };

    CustomerInsight {
        market_size: customer.market_size,
        growth_rate: customer.growth_rate,
        attractiveness: attractiveness.to_string(),
        key_needs: customer.needs.iter().take(3).cloned().collect(),
    }
}

fn analyze_competitor(competitor: &CompetitorData) -> CompetitorInsight {
    let total_revenue: f64 = competitor.competitors.iter().map(|c| c.revenue).sum();

    let share_estimates = if total_revenue > 0.0 {
        competitor
            .competitors
            .iter()
            .map(|c| {
                let share = (c.revenue / total_revenue * 100.0 * 100.0).round() / 100.0;
                (c.name.clone(), share)
            })
            .collect()
    } else {
        Vec::new()
    };

    let cost_leaders = competitor
        .competitors
        .iter()
        .filter(|c| c.cost_advantage)
        .map(|c| c.name.clone())
        .collect();

    CompetitorInsight {
        competitor_count: competitor.competitors.len(),
        share_estimates,
        cost_leaders,
    }
}

fn analyze_company(company: &CompanyData) -> CompanyInsight {
    CompanyInsight {
        core_competencies: company.core_competencies.clone(),
        value_proposition: company.value_proposition.clone(),
        market_position: company.market_position.clone(),
    }
}

fn derive_direction(
    customer: &CustomerInsight,
    competitor: &CompetitorInsight,
    company: &CompanyInsight,
) -> String {
    let direction = match (
        customer.attractiveness.as_str(),
        competitor.cost_leaders.is_empty(),
    ) {
        ("高成長市場", true) => "成長市場での先行投資と差別化ポジションの確立",
        ("高成長市場", false) => "コスト競争を避けた高付加価値セグメントへの集中",
        (_, false) => "コストリーダーとの直接競争を避けるニッチ戦略",
        _ => "既存顧客基盤の深耕と収益性の改善",
    };

    if company.core_competencies.is_empty() {
        direction.to_string()
    } else {
        format!(
            "{}（コアコンピタンス: {}）",
            direction,
            company.core_competencies.join(", ")
        )
    }
}

/// Render the report as display text (prompt grounding and report detail).
pub fn format_report(report: &ThreeCReport) -> String {
    let mut output = Vec::new();

    output.push("【3C分析】".to_string());
    output.push("■ 顧客 (Customer)".to_string());
    output.push(format!(
        "  市場規模: {:.0}円 / 成長率: {}% ({})",
        report.customer.market_size, report.customer.growth_rate, report.customer.attractiveness
    ));
    if !report.customer.key_needs.is_empty() {
        output.push(format!(
            "  主要ニーズ: {}",
            report.customer.key_needs.join(", ")
        ));
    }

    output.push("■ 競合 (Competitor)".to_string());
    output.push(format!(
        "  競合企業数: {}",
        report.competitor.competitor_count
    ));
    for (name, share) in &report.competitor.share_estimates {
        output.push(format!("  - {}: 推定シェア {:.1}%", name, share));
    }
    if !report.competitor.cost_leaders.is_empty() {
        output.push(format!(
            "  コスト優位: {}",
            report.competitor.cost_leaders.join(", ")
        ));
    }

    output.push("■ 自社 (Company)".to_string());
    if !report.company.core_competencies.is_empty() {
        output.push(format!(
            "  コアコンピタンス: {}",
            report.company.core_competencies.join(", ")
        ));
    }
    if !report.company.value_proposition.is_empty() {
        output.push(format!("  価値提案: {}", report.company.value_proposition));
    }
    if !report.company.market_position.is_empty() {
        output.push(format!(
            "  市場ポジション: {}",
            report.company.market_position
        ));
    }

    output.push(format!("■ 戦略方向性: {}", report.strategic_direction));

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::Competitor;

    fn sample_inputs() -> (CustomerData, CompetitorData, CompanyData) {
        let customer = CustomerData {
            market_size: 80_000_000_000.0,
            growth_rate: 12.0,
            segments: vec!["大企業".to_string()],
            needs: vec![
                "業務効率化".to_string(),
                "コスト削減".to_string(),
                "セキュリティ".to_string(),
                "サポート".to_string(),
            ],
            buying_behavior: "稟議による長期検討".to_string(),
        };
        let competitor = CompetitorData {
            competitors: vec![
                Competitor {
                    name: "A社".to_string(),
                    kind: "direct".to_string(),
                    revenue: 60_000_000_000.0,
                    strengths: vec!["価格".to_string()],
                    cost_advantage: true,
                },
                Competitor {
                    name: "B社".to_string(),
                    kind: "direct".to_string(),
                    revenue: 40_000_000_000.0,
                    strengths: vec![],
                    cost_advantage: false,
                },
            ],
        };
        let company = CompanyData {
            core_competencies: vec!["技術力".to_string()],
            value_proposition: "高品質なソリューション".to_string(),
            market_position: "チャレンジャー".to_string(),
            ..Default::default()
        };
        (customer, competitor, company)
    }

    #[test]
    fn test_share_estimates_from_revenue() {
        let (customer, competitor, company) = sample_inputs();
        let report = analyze(&customer, &competitor, &company);
        assert_eq!(report.competitor.share_estimates[0], ("A社".to_string(), 60.0));
        assert_eq!(report.competitor.share_estimates[1], ("B社".to_string(), 40.0));
        assert_eq!(report.competitor.cost_leaders, vec!["A社".to_string()]);
    }

    #[test]
    fn test_direction_avoids_cost_leader() {
        let (customer, competitor, company) = sample_inputs();
        let report = analyze(&customer, &competitor, &company);
        assert!(report.strategic_direction.contains("高付加価値"));
        assert!(report.strategic_direction.contains("技術力"));
    }

    #[test]
    fn test_key_needs_capped_at_three() {
        let (customer, competitor, company) = sample_inputs();
        let report = analyze(&customer, &competitor, &company);
        assert_eq!(report.customer.key_needs.len(), 3);
    }

    #[test]
    fn test_empty_buckets_are_total() {
        let report = analyze(
            &CustomerData::default(),
            &CompetitorData::default(),
            &CompanyData::default(),
        );
        assert_eq!(report.customer.attractiveness, "成熟市場");
        assert!(report.competitor.share_estimates.is_empty());
        assert!(!report.strategic_direction.is_empty());
    }
}
