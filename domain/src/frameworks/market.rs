//! Market analysis framework.
//!
//! Scores market attractiveness from size and growth, prioritizes customer
//! segments, measures concentration via HHI, classifies trends by keyword,
//! and synthesizes strategic recommendations.

use crate::project::MarketData;
use serde::Serialize;

/// Assessment of one customer segment.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentAssessment {
    pub segment: String,
    pub size: f64,
    pub growth_rate: f64,
    /// "高" / "中" / "低"
    pub priority: String,
    pub characteristics: Vec<String>,
}

/// One tracked player in the share analysis.
#[derive(Debug, Clone, Serialize)]
pub struct TopPlayer {
    pub company: String,
    pub share: f64,
}

/// Market-share concentration analysis.
#[derive(Debug, Clone, Serialize)]
pub struct ShareAnalysis {
    pub total_tracked_share: f64,
    /// Herfindahl-Hirschman index over tracked shares.
    pub hhi: f64,
    pub concentration_level: String,
    pub top_players: Vec<TopPlayer>,
}

/// A market trend with its keyword classification.
#[derive(Debug, Clone, Serialize)]
pub struct TrendInsight {
    pub trend: String,
    pub category: String,
    pub impact: String,
}

/// Complete market analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub market_size: f64,
    pub growth_rate: f64,
    pub market_attractiveness: String,
    pub segment_analysis: Vec<SegmentAssessment>,
    pub market_share_analysis: ShareAnalysis,
    pub trend_insights: Vec<TrendInsight>,
    pub recommendations: Vec<String>,
}

/// Run the market analysis over one input bucket.
pub fn analyze(data: &MarketData) -> MarketReport {
    let market_attractiveness = rate_attractiveness(data.market_size, data.growth_rate);
    let segment_analysis = assess_segments(data);
    let market_share_analysis = analyze_share(data);
    let trend_insights = classify_trends(&data.market_trends);
    let recommendations = build_recommendations(
        &market_attractiveness,
        &segment_analysis,
        &market_share_analysis,
        &trend_insights,
    );

    MarketReport {
        market_size: data.market_size,
        growth_rate: data.growth_rate,
        market_attractiveness,
        segment_analysis,
        market_share_analysis,
        trend_insights,
        recommendations,
    }
}

fn rate_attractiveness(market_size: f64, growth_rate: f64) -> String {
    let rating = if market_size > 100_000_000_000.0 && growth_rate > 10.0 {
        "非常に高い"
    } else if market_size > 50_000_000_000.0 && growth_rate > 5.0 {
        "高い"
    } else if market_size > 10_000_000_000.0 && growth_rate > 3.0 {
        "中程度"
    } else {
        "低い"
    };
    rating.to_string()
}

fn assess_segments(data: &MarketData) -> Vec<SegmentAssessment> {
    data.customer_segments
        .iter()
        .map(|segment| {
            let priority = if segment.growth_rate > 10.0 && segment.size > 10_000_000_000.0 {
                "高"
            } else if segment.growth_rate > 5.0 {
                "中"
            } else {
                "低"
            };
            SegmentAssessment {
                segment: segment.name.clone(),
                size: segment.size,
                growth_rate: segment.growth_rate,
                priority: priority.to_string(),
                characteristics: segment.characteristics.clone(),
            }
        })
        .collect()
}

fn analyze_share(data: &MarketData) -> ShareAnalysis {
    let shares = &data.market_share_data;
    let total_tracked_share: f64 = shares.values().sum();
    let hhi: f64 = shares.values().map(|share| share * share).sum();

    let concentration_level = if hhi > 2500.0 {
        "高度に集中"
    } else if hhi > 1500.0 {
        "中程度に集中"
    } else {
        "競争的"
    };

    let mut ranked: Vec<TopPlayer> = shares
        .iter()
        .map(|(company, share)| TopPlayer {
            company: company.clone(),
            share: *share,
        })
        .collect();
    ranked.sort_by(|a, b| b.share.total_cmp(&a.share));
    ranked.truncate(3);

    ShareAnalysis {
        total_tracked_share,
        hhi,
        concentration_level: concentration_level.to_string(),
        top_players: ranked,
    }
}

const TECH_KEYWORDS: &[&str] = &["AI", "DX", "クラウド", "IoT", "自動化", "デジタル"];
const SOCIAL_KEYWORDS: &[&str] = &["ESG", "サステナビリティ", "働き方改革", "リモート"];
const ECONOMIC_KEYWORDS: &[&str] = &["コスト削減", "効率化", "生産性向上"];

fn classify_trends(trends: &[String]) -> Vec<TrendInsight> {
    trends
        .iter()
        .map(|trend| {
            let (category, impact) = if TECH_KEYWORDS.iter().any(|k| trend.contains(k)) {
                ("技術トレンド", "高")
            } else if SOCIAL_KEYWORDS.iter().any(|k| trend.contains(k)) {
                ("社会トレンド", "中")
            } else if ECONOMIC_KEYWORDS.iter().any(|k| trend.contains(k)) {
                ("経済トレンド", "高")
            } else {
                ("その他", "高")
            };
            TrendInsight {
                trend: trend.clone(),
                category: category.to_string(),
                impact: impact.to_string(),
            }
        })
        .collect()
}

fn build_recommendations(
    attractiveness: &str,
    segments: &[SegmentAssessment],
    share: &ShareAnalysis,
    trends: &[TrendInsight],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if attractiveness == "非常に高い" || attractiveness == "高い" {
        recommendations.push("高成長市場であり、積極的な市場投資と拡大戦略を推奨します".to_string());
    }

    let high_priority: Vec<&str> = segments
        .iter()
        .filter(|s| s.priority == "高")
        .map(|s| s.segment.as_str())
        .collect();
    if !high_priority.is_empty() {
        recommendations.push(format!(
            "優先セグメント（{}）に注力したマーケティング戦略を展開してください",
            high_priority.join(", ")
        ));
    }

    match share.concentration_level.as_str() {
        "競争的" => recommendations
            .push("競争が激しい市場です。差別化戦略とニッチ市場の開拓を検討してください".to_string()),
        "高度に集中" => recommendations
            .push("寡占市場です。戦略的提携やM&Aによる市場地位の強化を検討してください".to_string()),
        _ => {}
    }

    let high_impact: Vec<&str> = trends
        .iter()
        .filter(|t| t.impact == "高")
        .take(2)
        .map(|t| t.trend.as_str())
        .collect();
    if !high_impact.is_empty() {
        recommendations.push(format!(
            "重要トレンド（{}）への対応を優先してください",
            high_impact.join(", ")
        ));
    }

    recommendations
}

/// Render the report as display text for the integrated document.
pub fn format_report(report: &MarketReport) -> String {
    let mut output = Vec::new();
    let rule = "=".repeat(60);

    output.push(rule.clone());
    output.push("市場分析結果".to_string());
    output.push(rule.clone());
    output.push(String::new());

    output.push("【市場概要】".to_string());
    output.push(format!("  市場規模: {:.0}円", report.market_size));
    output.push(format!("  成長率: {}%", report.growth_rate));
    output.push(format!("  市場魅力度: {}", report.market_attractiveness));
    output.push(String::new());

    output.push("【セグメント分析】".to_string());
    for segment in &report.segment_analysis {
        output.push(format!("  {}:", segment.segment));
        output.push(format!("    - 規模: {:.0}円", segment.size));
        output.push(format!("    - 成長率: {}%", segment.growth_rate));
        output.push(format!("    - 優先度: {}", segment.priority));
    }
    output.push(String::new());

    let share = &report.market_share_analysis;
    output.push("【市場シェア分析】".to_string());
    output.push(format!("  市場集中度: {}", share.concentration_level));
    output.push(format!("  HHI指数: {:.0}", share.hhi));
    output.push("  トッププレイヤー:".to_string());
    for player in &share.top_players {
        output.push(format!("    - {}: {:.1}%", player.company, player.share));
    }
    output.push(String::new());

    output.push("【市場トレンド】".to_string());
    for trend in &report.trend_insights {
        output.push(format!("  {}", trend.trend));
        output.push(format!(
            "    カテゴリ: {}, インパクト: {}",
            trend.category, trend.impact
        ));
    }
    output.push(String::new());

    output.push("【戦略的推奨事項】".to_string());
    for (i, rec) in report.recommendations.iter().enumerate() {
        output.push(format!("  {}. {}", i + 1, rec));
    }
    output.push(String::new());
    output.push(rule);

    output.join("\n")
}
