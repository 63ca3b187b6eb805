//! Prompt templates for the model-delegated analysis agents.

use crate::project::ProjectInfo;

/// Templates for the strategy analysis call.
pub struct StrategyPrompt;

impl StrategyPrompt {
    /// System prompt: consulting principles the narrative must follow.
    pub fn system() -> &'static str {
        r#"あなたは経験豊富な戦略コンサルタントです。
以下の原則に従って戦略立案を支援してください：

1. イシュードリブン: 本質的な課題を特定する
2. MECE: 漏れなくダブりなく分析する
3. ファクトベース: データに基づいた提案を行う
4. アクショナブル: 実行可能な施策を提示する

分析結果は具体的で実行可能な戦略提案にまとめてください。"#
    }

    /// User prompt embedding the 3C digest as factual grounding.
    pub fn analysis_prompt(project: &ProjectInfo, three_c_digest: &str) -> String {
        format!(
            "# プロジェクト情報\n\
             - クライアント: {}\n\
             - 業界: {}\n\
             - 課題: {}\n\n\
             # 事前分析（3C）\n\
             {}\n\n\
             # タスク\n\
             上記のデータを踏まえ、以下の観点を含む戦略分析を行ってください：\n\
             1. 課題の構造化と本質的な論点\n\
             2. SWOTの観点からの強み・弱み・機会・脅威\n\
             3. 業界構造（競争環境・参入障壁・代替品の脅威）\n\
             4. 推奨する戦略オプションと優先順位\n\n\
             具体的で実行可能な提案にまとめてください。\n",
            project.client_name, project.industry, project.challenge, three_c_digest
        )
    }
}

/// Templates for the client-info research call.
pub struct ClientInfoPrompt;

impl ClientInfoPrompt {
    /// System prompt: factual company research, JPY figures, estimates
    /// allowed when public data is unavailable.
    pub fn system() -> &'static str {
        r#"あなたは企業分析の専門家です。
指定された企業について、公開情報に基づいて詳細な分析データを提供してください。
データは戦略コンサルティングに使用されるため、できる限り具体的で正確な情報を提供してください。

データが不明な場合は、業界標準や合理的な推定値を使用してください。
すべての数値は日本円（JPY）で表記してください。"#
    }

    /// User prompt requesting every analysis bucket as one JSON object.
    pub fn fetch_prompt(project: &ProjectInfo) -> String {
        format!(
            r#"以下の企業について、戦略分析に必要な情報を収集してください：

企業名: {}
業界: {}
課題: {}

以下の形式でJSON形式のデータを返してください：

{{
  "customer_data": {{
    "market_size": <市場規模（円）>,
    "growth_rate": <年間成長率（%）>,
    "segments": [<主要な顧客セグメント>],
    "needs": [<顧客の主要なニーズ>],
    "buying_behavior": "<購買行動の特徴>"
  }},
  "competitor_data": {{
    "competitors": [
      {{
        "name": "<競合企業名>",
        "type": "direct",
        "revenue": <売上高（円）>,
        "strengths": [<強み>],
        "cost_advantage": true/false
      }}
    ]
  }},
  "company_data": {{
    "core_competencies": [<コアコンピタンス>],
    "resources": {{
      "employees": <従業員数>,
      "rd_budget": <研究開発予算（円）>
    }},
    "value_proposition": "<価値提案>",
    "market_position": "<市場ポジション>"
  }},
  "market_analysis_data": {{
    "market_size": <市場規模（円）>,
    "growth_rate": <成長率（%）>,
    "market_segments": [<セグメント>],
    "market_trends": [<トレンド>],
    "customer_segments": [
      {{
        "name": "<セグメント名>",
        "size": <規模（円）>,
        "growth_rate": <成長率（%）>,
        "characteristics": [<特性>]
      }}
    ],
    "market_share_data": {{
      "<企業名>": <シェア（%）>
    }}
  }},
  "financial_data": {{
    "revenue": <売上高（円）>,
    "cost_of_sales": <売上原価（円）>,
    "operating_expenses": <営業費用（円）>,
    "assets": <資産（円）>,
    "liabilities": <負債（円）>,
    "equity": <純資産（円）>,
    "cash_flow_operating": <営業CF（円）>,
    "cash_flow_investing": <投資CF（円）>,
    "cash_flow_financing": <財務CF（円）>
  }}
}}

できる限り具体的で正確なデータを提供してください。
データが不明な場合は、業界標準や合理的な推定値を使用してください。"#,
            project.client_name, project.industry, project.challenge
        )
    }
}
