//! Financial analysis framework.
//!
//! Computes profitability and financial-health ratios with coarse ratings,
//! classifies the cash-flow pattern, and derives an overall assessment plus
//! recommendations. Ratios over zero denominators default to zero.

use crate::project::FinancialData;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ProfitabilityRatios {
    pub gross_margin: f64,
    pub gross_margin_rating: String,
    pub operating_margin: f64,
    pub operating_margin_rating: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancialHealthRatios {
    pub equity_ratio: f64,
    pub equity_ratio_rating: String,
    pub debt_ratio: f64,
    pub debt_ratio_rating: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CashFlowAnalysis {
    pub operating_cf: f64,
    pub investing_cf: f64,
    pub financing_cf: f64,
    pub total_cf: f64,
    pub free_cash_flow: f64,
    pub pattern: String,
    pub health_status: String,
}

/// Complete financial analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    pub revenue: f64,
    pub gross_profit: f64,
    pub operating_profit: f64,
    pub profitability_ratios: ProfitabilityRatios,
    pub financial_health_ratios: FinancialHealthRatios,
    pub cash_flow_analysis: CashFlowAnalysis,
    pub overall_assessment: String,
    pub recommendations: Vec<String>,
}

/// Run the financial analysis over one input bucket.
pub fn analyze(data: &FinancialData) -> FinancialReport {
    let gross_profit = data.revenue - data.cost_of_sales;
    let operating_profit = gross_profit - data.operating_expenses;

    let profitability = profitability_ratios(data.revenue, gross_profit, operating_profit);
    let health = health_ratios(data.assets, data.liabilities, data.equity);
    let cash_flow = cash_flow_analysis(
        data.cash_flow_operating,
        data.cash_flow_investing,
        data.cash_flow_financing,
    );

    let overall_assessment = overall_assessment(&profitability, &health, &cash_flow);
    let recommendations = build_recommendations(&profitability, &health, &cash_flow);

    FinancialReport {
        revenue: data.revenue,
        gross_profit,
        operating_profit,
        profitability_ratios: profitability,
        financial_health_ratios: health,
        cash_flow_analysis: cash_flow,
        overall_assessment,
        recommendations,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

fn profitability_ratios(
    revenue: f64,
    gross_profit: f64,
    operating_profit: f64,
) -> ProfitabilityRatios {
    let gross_margin = ratio(gross_profit, revenue);
    let operating_margin = ratio(operating_profit, revenue);

    let gross_margin_rating = if gross_margin > 40.0 {
        "優秀"
    } else if gross_margin > 25.0 {
        "良好"
    } else {
        "要改善"
    };
    let operating_margin_rating = if operating_margin > 15.0 {
        "優秀"
    } else if operating_margin > 8.0 {
        "良好"
    } else {
        "要改善"
    };

    ProfitabilityRatios {
        gross_margin,
        gross_margin_rating: gross_margin_rating.to_string(),
        operating_margin,
        operating_margin_rating: operating_margin_rating.to_string(),
    }
}

fn health_ratios(assets: f64, liabilities: f64, equity: f64) -> FinancialHealthRatios {
    let equity_ratio = ratio(equity, assets);
    let debt_ratio = ratio(liabilities, equity);

    let equity_ratio_rating = if equity_ratio > 50.0 {
        "優秀"
    } else if equity_ratio > 30.0 {
        "良好"
    } else {
        "要改善"
    };
    let debt_ratio_rating = if debt_ratio < 100.0 {
        "優秀"
    } else if debt_ratio < 200.0 {
        "良好"
    } else {
        "要改善"
    };

    FinancialHealthRatios {
        equity_ratio,
        equity_ratio_rating: equity_ratio_rating.to_string(),
        debt_ratio,
        debt_ratio_rating: debt_ratio_rating.to_string(),
    }
}

fn cash_flow_analysis(operating: f64, investing: f64, financing: f64) -> CashFlowAnalysis {
    let total_cf = operating + investing + financing;
    let free_cash_flow = operating + investing;

    let pattern = cash_flow_pattern(operating, investing, financing);
    let health_status = if operating > 0.0 && free_cash_flow > 0.0 {
        "健全"
    } else {
        "要注意"
    };

    CashFlowAnalysis {
        operating_cf: operating,
        investing_cf: investing,
        financing_cf: financing,
        total_cf,
        free_cash_flow,
        pattern,
        health_status: health_status.to_string(),
    }
}

fn cash_flow_pattern(operating: f64, investing: f64, financing: f64) -> String {
    let pattern = if operating > 0.0 && investing < 0.0 && financing < 0.0 {
        "優良企業型（本業で稼ぎ、投資と返済を実施）"
    } else if operating > 0.0 && investing < 0.0 && financing > 0.0 {
        "成長企業型（本業で稼ぎつつ、資金調達して投資）"
    } else if operating > 0.0 && investing > 0.0 && financing > 0.0 {
        "資産売却型（資産を売却して資金調達）"
    } else if operating < 0.0 && investing > 0.0 && financing > 0.0 {
        "危機企業型（本業赤字、資産売却と資金調達）"
    } else if operating > 0.0 && investing > 0.0 && financing < 0.0 {
        "リストラ型（資産売却で借入返済）"
    } else {
        "その他のパターン"
    };
    pattern.to_string()
}

fn rating_score(rating: &str) -> f64 {
    match rating {
        "優秀" => 3.0,
        "良好" => 2.0,
        _ => 1.0,
    }
}

fn overall_assessment(
    profitability: &ProfitabilityRatios,
    health: &FinancialHealthRatios,
    cash_flow: &CashFlowAnalysis,
) -> String {
    let scores = [
        rating_score(&profitability.gross_margin_rating),
        rating_score(&health.equity_ratio_rating),
        if cash_flow.health_status == "健全" {
            3.0
        } else {
            1.0
        },
    ];
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;

    let assessment = if avg >= 2.5 {
        "財務状況は非常に良好です"
    } else if avg >= 2.0 {
        "財務状況は良好ですが、一部改善の余地があります"
    } else if avg >= 1.5 {
        "財務状況は中程度です。改善が必要な領域があります"
    } else {
        "財務状況に課題があります。早急な改善が必要です"
    };
    assessment.to_string()
}

fn build_recommendations(
    profitability: &ProfitabilityRatios,
    health: &FinancialHealthRatios,
    cash_flow: &CashFlowAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if profitability.gross_margin_rating == "要改善" {
        recommendations
            .push("売上総利益率が低いため、原価削減または価格戦略の見直しを検討してください".to_string());
    }
    if profitability.operating_margin_rating == "要改善" {
        recommendations.push("営業利益率が低いため、営業費用の最適化を検討してください".to_string());
    }
    if health.equity_ratio_rating == "要改善" {
        recommendations.push(
            "自己資本比率が低いため、財務体質の強化（増資や利益剰余金の蓄積）を検討してください"
                .to_string(),
        );
    }
    if health.debt_ratio_rating == "要改善" {
        recommendations
            .push("負債比率が高いため、借入金の削減や資本増強を検討してください".to_string());
    }
    if cash_flow.health_status == "要注意" {
        recommendations.push(
            "キャッシュフローに課題があります。営業活動からのキャッシュ創出力を強化してください"
                .to_string(),
        );
    }
    if cash_flow.free_cash_flow < 0.0 {
        recommendations.push(
            "フリーキャッシュフローがマイナスです。投資の優先順位を見直し、資金効率を改善してください"
                .to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push(
            "財務状況は良好です。現在の戦略を継続しつつ、さらなる成長機会を探索してください"
                .to_string(),
        );
    }

    recommendations
}

/// Render the report as display text for the integrated document.
pub fn format_report(report: &FinancialReport) -> String {
    let mut output = Vec::new();
    let rule = "=".repeat(60);

    output.push(rule.clone());
    output.push("財務分析結果".to_string());
    output.push(rule.clone());
    output.push(String::new());

    output.push("【損益概要】".to_string());
    output.push(format!("  売上高: {:.0}円", report.revenue));
    output.push(format!("  売上総利益: {:.0}円", report.gross_profit));
    output.push(format!("  営業利益: {:.0}円", report.operating_profit));
    output.push(String::new());

    let prof = &report.profitability_ratios;
    output.push("【収益性指標】".to_string());
    output.push(format!(
        "  売上総利益率: {:.1}% ({})",
        prof.gross_margin, prof.gross_margin_rating
    ));
    output.push(format!(
        "  営業利益率: {:.1}% ({})",
        prof.operating_margin, prof.operating_margin_rating
    ));
    output.push(String::new());

    let health = &report.financial_health_ratios;
    output.push("【財務健全性指標】".to_string());
    output.push(format!(
        "  自己資本比率: {:.1}% ({})",
        health.equity_ratio, health.equity_ratio_rating
    ));
    output.push(format!(
        "  負債比率: {:.1}% ({})",
        health.debt_ratio, health.debt_ratio_rating
    ));
    output.push(String::new());

    let cf = &report.cash_flow_analysis;
    output.push("【キャッシュフロー分析】".to_string());
    output.push(format!("  営業CF: {:.0}円", cf.operating_cf));
    output.push(format!("  投資CF: {:.0}円", cf.investing_cf));
    output.push(format!("  財務CF: {:.0}円", cf.financing_cf));
    output.push(format!("  フリーCF: {:.0}円", cf.free_cash_flow));
    output.push(format!("  パターン: {}", cf.pattern));
    output.push(format!("  健全性: {}", cf.health_status));
    output.push(String::new());

    output.push("【総合評価】".to_string());
    output.push(format!("  {}", report.overall_assessment));
    output.push(String::new());

    output.push("【推奨事項】".to_string());
    for (i, rec) in report.recommendations.iter().enumerate() {
        output.push(format!("  {}. {}", i + 1, rec));
    }
    output.push(String::new());
    output.push(rule);

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy_data() -> FinancialData {
        FinancialData {
            revenue: 100_000.0,
            cost_of_sales: 50_000.0,
            operating_expenses: 30_000.0,
            assets: 200_000.0,
            liabilities: 80_000.0,
            equity: 120_000.0,
            cash_flow_operating: 25_000.0,
            cash_flow_investing: -10_000.0,
            cash_flow_financing: -5_000.0,
        }
    }

    #[test]
    fn test_margin_calculation() {
        let report = analyze(&healthy_data());
        assert_eq!(report.gross_profit, 50_000.0);
        assert_eq!(report.operating_profit, 20_000.0);
        assert_eq!(report.profitability_ratios.gross_margin, 50.0);
        assert_eq!(report.profitability_ratios.operating_margin, 20.0);
        assert_eq!(report.profitability_ratios.operating_margin_rating, "優秀");
    }

    #[test]
    fn test_zero_revenue_ratios_default_to_zero() {
        let report = analyze(&FinancialData::default());
        assert_eq!(report.profitability_ratios.gross_margin, 0.0);
        assert_eq!(report.financial_health_ratios.equity_ratio, 0.0);
    }

    #[test]
    fn test_cash_flow_pattern_classification() {
        let report = analyze(&healthy_data());
        let cf = &report.cash_flow_analysis;
        assert!(cf.pattern.contains("優良企業型"));
        assert_eq!(cf.health_status, "健全");
        assert_eq!(cf.free_cash_flow, 15_000.0);
    }

    #[test]
    fn test_overall_assessment_positive() {
        let report = analyze(&healthy_data());
        assert_eq!(report.overall_assessment, "財務状況は非常に良好です");
        // Healthy books still yield at least the continuation recommendation
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn test_struggling_company_recommendations() {
        let data = FinancialData {
            revenue: 100_000.0,
            cost_of_sales: 90_000.0,
            operating_expenses: 15_000.0,
            assets: 200_000.0,
            liabilities: 170_000.0,
            equity: 30_000.0,
            cash_flow_operating: -5_000.0,
            cash_flow_investing: 2_000.0,
            cash_flow_financing: 8_000.0,
        };
        let report = analyze(&data);
        assert!(report.overall_assessment.contains("課題"));
        assert!(report.recommendations.len() >= 3);
        assert!(report.cash_flow_analysis.pattern.contains("危機企業型"));
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let data = healthy_data();
        assert_eq!(
            format_report(&analyze(&data)),
            format_report(&analyze(&data))
        );
    }
}
