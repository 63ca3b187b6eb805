//! Prompt templates for the three dialogue phases.
//!
//! The consensus prompt takes the two preceding narratives as explicit
//! parameters, so the phase chain is visible in the signatures, not in a
//! shared history buffer.

use crate::analysis::AgentResult;
use crate::dialogue::AgentInsight;
use crate::project::ProjectInfo;

/// Templates for the dialogue flow.
pub struct DialoguePromptTemplate;

impl DialoguePromptTemplate {
    fn project_header(project: &ProjectInfo) -> String {
        format!(
            "# プロジェクト情報\n- クライアント: {}\n- 業界: {}\n- 課題: {}\n",
            project.client_name, project.industry, project.challenge
        )
    }

    /// System prompt for the insight-sharing phase.
    pub fn insight_sharing_system() -> &'static str {
        "あなたは戦略コンサルタントとして、複数の分析結果を統合する役割を担っています。"
    }

    /// User prompt for the insight-sharing phase.
    pub fn insight_sharing_prompt(project: &ProjectInfo, insights: &[AgentInsight]) -> String {
        let mut prompt = Self::project_header(project);
        prompt.push_str("\n# 各エージェントの主要な洞察\n\n");

        for insight in insights {
            let type_label = insight
                .analysis_type
                .map(|t| t.as_str())
                .unwrap_or("unknown");
            prompt.push_str(&format!("## {} ({})\n", insight.agent, type_label));
            prompt.push_str(&format!("{}\n\n", insight.digest));
        }

        prompt.push_str(
            "# タスク\n\
             上記の各エージェントの洞察を統合し、以下を提供してください：\n\
             1. 共通するテーマや発見\n\
             2. 相互に補完する洞察\n\
             3. 統合的な視点から見た主要な発見\n\n\
             簡潔に、箇条書きで回答してください。\n",
        );
        prompt
    }

    /// System prompt for the conflict-identification phase.
    pub fn conflict_system() -> &'static str {
        "あなたは批判的思考を持つアナリストとして、分析結果間の矛盾や不一致を特定します。"
    }

    /// User prompt for the conflict-identification phase.
    ///
    /// Lists each agent's leading recommendations for comparison.
    pub fn conflict_prompt(project: &ProjectInfo, results: &[&AgentResult]) -> String {
        let mut prompt = Self::project_header(project);
        prompt.push_str("\n# 分析結果の要約\n\n");

        for result in results {
            prompt.push_str(&format!("## {}\n", result.agent_name));
            let recommendations: Vec<&str> = result
                .recommendations()
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            prompt.push_str(&format!("推奨事項: {}\n\n", recommendations.join(", ")));
        }

        prompt.push_str(
            "# タスク\n\
             上記の分析結果を比較し、以下を特定してください：\n\
             1. 矛盾する推奨事項や見解\n\
             2. 優先順位が異なる領域\n\
             3. 追加の検討が必要な不確実性\n\n\
             矛盾がない場合は「重大な矛盾は見られません」と回答してください。\n\
             簡潔に、箇条書きで回答してください。\n",
        );
        prompt
    }

    /// System prompt for the consensus-building phase.
    pub fn consensus_system() -> &'static str {
        "あなたは経験豊富な戦略コンサルタントとして、異なる視点を統合し、実行可能な合意事項を導出します。"
    }

    /// User prompt for the consensus-building phase.
    ///
    /// `insight_narrative` and `conflict_narrative` are the raw outputs of
    /// the two preceding phases.
    pub fn consensus_prompt(
        project: &ProjectInfo,
        insight_narrative: &str,
        conflict_narrative: &str,
    ) -> String {
        let mut prompt = Self::project_header(project);
        prompt.push_str(&format!(
            "\n# 共有された洞察\n{}\n\n# 特定された矛盾\n{}\n\n",
            insight_narrative, conflict_narrative
        ));
        prompt.push_str(
            "# タスク\n\
             上記の情報を基に、以下を提供してください：\n\n\
             1. **合意事項**: 全てのエージェントが支持する戦略的方向性（3-5項目）\n\
             2. **優先アクション**: 最も重要な実行項目（3項目）\n\
             3. **リスクと緩和策**: 主要なリスクとその対応策（2-3項目）\n\n\
             実行可能で具体的な内容にしてください。\n",
        );
        prompt
    }
}
