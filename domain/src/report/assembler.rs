//! Report assembler - merges agent outputs and the dialogue into one
//! ordered Markdown document.
//!
//! Section order is a contract: downstream exporters locate sections by
//! their literal headings, in particular [`RECOMMENDATIONS_HEADING`], which
//! anchors where the dialogue section is spliced in.

use crate::analysis::{AgentResult, AnalysisPayload};
use crate::dialogue::DialogueResult;
use crate::project::ProjectInfo;

/// Anchor heading the dialogue section is inserted before.
pub const RECOMMENDATIONS_HEADING: &str = "## 統合的な推奨事項";

/// Assembles the integrated Markdown report.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Build the full report.
    ///
    /// Pure except for the timestamp in the header.
    pub fn assemble(
        project: &ProjectInfo,
        results: &[AgentResult],
        dialogue: &DialogueResult,
    ) -> String {
        let mut sections = vec![Self::header(project), Self::executive_summary(results)];

        for result in results {
            if result.is_success() && !result.formatted_text.is_empty() {
                sections.push(format!("---\n\n{}", result.formatted_text));
            }
        }

        sections.push(Self::integrated_recommendations(results));
        sections.push(Self::action_plan());
        sections.push(Self::footer());

        let report = sections.join("\n\n");

        if dialogue.occurred {
            Self::insert_dialogue_section(report, &Self::dialogue_section(dialogue))
        } else {
            report
        }
    }

    /// Splice the dialogue section immediately before the recommendations
    /// heading; append at the end when the heading is absent.
    fn insert_dialogue_section(report: String, section: &str) -> String {
        match report.split_once(RECOMMENDATIONS_HEADING) {
            Some((before, after)) => format!(
                "{}{}\n\n---\n\n{}{}",
                before, section, RECOMMENDATIONS_HEADING, after
            ),
            None => format!("{}\n\n{}", report, section),
        }
    }

    fn header(project: &ProjectInfo) -> String {
        let timestamp = chrono::Local::now().format("%Y年%m月%d日 %H:%M");
        format!(
            "# 戦略コンサルティング統合レポート\n\n---\n\n\
             ## プロジェクト情報\n\n\
             - **クライアント**: {}\n\
             - **業界**: {}\n\
             - **課題**: {}\n\
             - **分析日時**: {}\n",
            project.client_name, project.industry, project.challenge, timestamp
        )
    }

    fn executive_summary(results: &[AgentResult]) -> String {
        let mut lines = vec!["## エグゼクティブサマリー".to_string(), String::new()];

        let successful: Vec<&AgentResult> = results.iter().filter(|r| r.is_success()).collect();
        if successful.is_empty() {
            lines.push("分析を実行できませんでした。".to_string());
            return lines.join("\n");
        }

        lines.push(format!(
            "本レポートでは、{}つの観点から包括的な分析を実施しました:",
            successful.len()
        ));
        lines.push(String::new());

        for result in successful {
            // Digest block per known analysis type; others have no fixed
            // rendering and are left to their detail section.
            match &result.payload {
                Some(AnalysisPayload::Market(report)) => {
                    lines.push("### 📊 市場分析".to_string());
                    lines.push(format!("- 市場魅力度: **{}**", report.market_attractiveness));
                    lines.push(format!("- 市場規模: {:.0}円", report.market_size));
                    lines.push(format!("- 成長率: {}%", report.growth_rate));
                }
                Some(AnalysisPayload::Financial(report)) => {
                    let prof = &report.profitability_ratios;
                    lines.push("### 💰 財務分析".to_string());
                    lines.push(format!("- 総合評価: **{}**", report.overall_assessment));
                    lines.push(format!(
                        "- 営業利益率: {:.1}% ({})",
                        prof.operating_margin, prof.operating_margin_rating
                    ));
                }
                Some(AnalysisPayload::Strategy(_)) => {
                    lines.push("### 🎯 戦略分析".to_string());
                    lines.push(
                        "- 複数の戦略フレームワーク（3C、SWOT、5Forces等）を用いた包括的分析を実施"
                            .to_string(),
                    );
                }
                _ => continue,
            }
            lines.push(String::new());
        }

        lines.join("\n")
    }

    fn integrated_recommendations(results: &[AgentResult]) -> String {
        let mut lines = vec![
            "---".to_string(),
            String::new(),
            RECOMMENDATIONS_HEADING.to_string(),
            String::new(),
        ];

        let mut tagged: Vec<(&str, &str)> = Vec::new();
        for result in results.iter().filter(|r| r.is_success()) {
            let category = match &result.payload {
                Some(AnalysisPayload::Market(_)) => "市場",
                Some(AnalysisPayload::Financial(_)) => "財務",
                _ => continue,
            };
            for rec in result.recommendations() {
                tagged.push((category, rec));
            }
        }

        if tagged.is_empty() {
            lines.push("推奨事項を生成できませんでした。".to_string());
        } else {
            lines.push("各分析から得られた推奨事項を統合し、優先順位をつけて提示します:".to_string());
            lines.push(String::new());
            for (i, (category, rec)) in tagged.iter().enumerate() {
                lines.push(format!("{}. **[{}]** {}", i + 1, category, rec));
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }

    fn dialogue_section(dialogue: &DialogueResult) -> String {
        let mut lines = vec![
            "## エージェント間対話の結果".to_string(),
            String::new(),
            "複数のエージェントが分析結果について議論し、以下の合意に達しました。".to_string(),
            String::new(),
        ];

        if !dialogue.consensus_items.is_empty() {
            lines.push("### 合意事項".to_string());
            lines.push(String::new());
            for (i, item) in dialogue.consensus_items.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, item));
            }
            lines.push(String::new());
        }

        if !dialogue.action_items.is_empty() {
            lines.push("### 優先アクション".to_string());
            lines.push(String::new());
            for (i, item) in dialogue.action_items.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, item));
            }
            lines.push(String::new());
        }

        if let Some(narrative) = dialogue.final_narrative() {
            if !narrative.is_empty() {
                lines.push("### 詳細な議論内容".to_string());
                lines.push(String::new());
                lines.push(narrative.to_string());
                lines.push(String::new());
            }
        }

        lines.join("\n")
    }

    fn action_plan() -> String {
        "## アクションプラン\n\n\
         推奨事項を実行するための具体的なアクションプランを以下に示します:\n\n\
         ### 短期（1-3ヶ月）\n\
         - データ収集と詳細分析の実施\n\
         - 優先度の高い施策の計画立案\n\
         - ステークホルダーとの合意形成\n\n\
         ### 中期（3-6ヶ月）\n\
         - 優先施策の実行開始\n\
         - KPIの設定とモニタリング体制の構築\n\
         - 中間評価と軌道修正\n\n\
         ### 長期（6-12ヶ月）\n\
         - 施策の効果測定と評価\n\
         - 次フェーズの戦略立案\n\
         - 継続的改善サイクルの確立\n"
            .to_string()
    }

    fn footer() -> String {
        "---\n\n*本レポートはマルチエージェントシステムにより自動生成されました*\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AgentResult, AnalysisPayload, StrategyReport};
    use crate::dialogue::{DialoguePhase, DialoguePhaseResult};
    use crate::frameworks::{financial, market};
    use crate::project::{FinancialData, MarketData};

    fn project() -> ProjectInfo {
        ProjectInfo::new("サンプル企業", "IT業界", "市場シェア拡大と収益性向上")
    }

    fn market_result() -> AgentResult {
        let data = MarketData {
            market_size: 120_000_000_000.0,
            growth_rate: 12.0,
            ..Default::default()
        };
        let report = market::analyze(&data);
        let text = market::format_report(&report);
        AgentResult::success("MarketAnalysisAgent", AnalysisPayload::Market(report), text)
    }

    fn financial_result() -> AgentResult {
        let data = FinancialData {
            revenue: 100_000.0,
            cost_of_sales: 50_000.0,
            operating_expenses: 30_000.0,
            assets: 200_000.0,
            liabilities: 80_000.0,
            equity: 120_000.0,
            cash_flow_operating: 25_000.0,
            cash_flow_investing: -10_000.0,
            cash_flow_financing: -5_000.0,
        };
        let report = financial::analyze(&data);
        let text = financial::format_report(&report);
        AgentResult::success(
            "FinancialAnalysisAgent",
            AnalysisPayload::Financial(report),
            text,
        )
    }

    fn held_dialogue() -> DialogueResult {
        DialogueResult::held(
            vec![
                DialoguePhaseResult::new(DialoguePhase::InsightSharing, "共有"),
                DialoguePhaseResult::new(DialoguePhase::ConflictIdentification, "矛盾"),
                DialoguePhaseResult::new(DialoguePhase::ConsensusBuilding, "合意の詳細"),
            ],
            vec!["成長セグメントへの集中".to_string()],
            vec!["営業体制の強化".to_string()],
        )
    }

    #[test]
    fn test_section_order() {
        let results = vec![market_result(), financial_result()];
        let report = ReportAssembler::assemble(&project(), &results, &held_dialogue());

        let header = report.find("# 戦略コンサルティング統合レポート").unwrap();
        let summary = report.find("## エグゼクティブサマリー").unwrap();
        let detail = report.find("市場分析結果").unwrap();
        let dialogue = report.find("## エージェント間対話の結果").unwrap();
        let recommendations = report.find(RECOMMENDATIONS_HEADING).unwrap();
        let action_plan = report.find("## アクションプラン").unwrap();

        assert!(header < summary);
        assert!(summary < detail);
        assert!(detail < dialogue);
        assert!(dialogue < recommendations);
        assert!(recommendations < action_plan);
    }

    #[test]
    fn test_dialogue_inserted_before_recommendations_heading() {
        let results = vec![market_result(), financial_result()];
        let report = ReportAssembler::assemble(&project(), &results, &held_dialogue());

        let dialogue_pos = report.find("## エージェント間対話の結果").unwrap();
        let heading_pos = report.find(RECOMMENDATIONS_HEADING).unwrap();
        assert!(dialogue_pos < heading_pos);
        // The region between the two holds only the dialogue body and the
        // separator, no other section heading
        let between = &report[dialogue_pos..heading_pos];
        assert!(!between.contains("## アクションプラン"));
    }

    #[test]
    fn test_dialogue_appended_when_heading_missing() {
        let body = "# レポート\n\n本文".to_string();
        let section = "## エージェント間対話の結果\n内容";
        let spliced = ReportAssembler::insert_dialogue_section(body, section);
        assert!(spliced.ends_with("## エージェント間対話の結果\n内容"));
    }

    #[test]
    fn test_no_dialogue_section_when_not_held() {
        let results = vec![market_result(), financial_result()];
        let report = ReportAssembler::assemble(
            &project(),
            &results,
            &DialogueResult::not_held("対話に必要な分析結果が不足しています"),
        );
        assert!(!report.contains("## エージェント間対話の結果"));
    }

    #[test]
    fn test_recommendations_tagged_by_source() {
        let results = vec![market_result(), financial_result()];
        let report = ReportAssembler::assemble(&project(), &results, &held_dialogue());
        assert!(report.contains("**[市場]**"));
        assert!(report.contains("**[財務]**"));
    }

    #[test]
    fn test_unknown_type_skipped_in_summary() {
        let strategy = AgentResult::success(
            "StrategyAnalysisAgent",
            AnalysisPayload::Strategy(StrategyReport {
                output: "戦略".to_string(),
                frameworks_used: vec![],
            }),
            "戦略分析の詳細",
        );
        let client_info = AgentResult::success(
            "ClientInfoAgent",
            AnalysisPayload::ClientInfo(Default::default()),
            "クライアント情報",
        );
        let report = ReportAssembler::assemble(
            &project(),
            &[strategy, client_info],
            &DialogueResult::not_held("無効"),
        );
        // Strategy has a fixed digest; client info has none in the summary
        assert!(report.contains("### 🎯 戦略分析"));
        let summary_start = report.find("## エグゼクティブサマリー").unwrap();
        let summary_end = report.find("---\n\n戦略分析の詳細").unwrap();
        assert!(!report[summary_start..summary_end].contains("ClientInfoAgent"));
    }

    #[test]
    fn test_empty_results_report_still_assembles() {
        let report =
            ReportAssembler::assemble(&project(), &[], &DialogueResult::not_held("無効"));
        assert!(report.contains("分析を実行できませんでした。"));
        assert!(report.contains("推奨事項を生成できませんでした。"));
    }
}
