//! Consensus/action extraction from the final dialogue narrative.
//!
//! These functions scrape structured lists out of free-form model prose.
//! They are pure domain logic: no I/O, just line scanning.
//!
//! The scan keeps a "current section" cursor: a line containing a section
//! marker moves the cursor, and any list-item line is appended to whichever
//! section the cursor points at. Markers are matched by substring
//! containment against mixed-language headers ("合意事項" / "consensus",
//! "優先アクション" / "action"), which is deliberately loose: it tolerates
//! heading decoration and numbering, but drifts with model phrasing. This
//! is best-effort extraction: when no markers appear, both lists come
//! back empty and the caller renders the raw narrative instead.

/// Maximum consensus items kept.
pub const MAX_CONSENSUS_ITEMS: usize = 5;
/// Maximum action items kept.
pub const MAX_ACTION_ITEMS: usize = 3;

#[derive(Clone, Copy, PartialEq)]
enum Section {
    None,
    Consensus,
    Action,
}

/// Extract (consensus items, action items) from a consensus narrative.
pub fn extract_consensus_and_actions(narrative: &str) -> (Vec<String>, Vec<String>) {
    let mut consensus_items = Vec::new();
    let mut action_items = Vec::new();
    let mut section = Section::None;

    for line in narrative.lines() {
        let line = line.trim();
        let lowered = line.to_lowercase();

        if line.contains("合意事項") || lowered.contains("consensus") {
            section = Section::Consensus;
        } else if line.contains("優先アクション") || lowered.contains("action") {
            section = Section::Action;
        } else if is_list_item(line) {
            let item = strip_list_markup(line);
            if item.is_empty() {
                continue;
            }
            match section {
                Section::Consensus => consensus_items.push(item),
                Section::Action => action_items.push(item),
                Section::None => {}
            }
        }
    }

    consensus_items.truncate(MAX_CONSENSUS_ITEMS);
    action_items.truncate(MAX_ACTION_ITEMS);
    (consensus_items, action_items)
}

fn is_list_item(line: &str) -> bool {
    line.starts_with('-')
        || line.starts_with('•')
        || line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn strip_list_markup(line: &str) -> String {
    line.trim_start_matches(|c: char| {
        c == '-' || c == '•' || c == '.' || c == ' ' || c.is_ascii_digit()
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARRATIVE: &str = "\
# 統合結果

1. **合意事項**
- 高成長セグメントへの集中投資
- 営業費用の最適化
• 価格戦略の見直し

2. **優先アクション**
1. 重点セグメントの営業体制を強化する
2. コスト構造を可視化する
3. 四半期ごとのレビューを設置する
4. 余剰リソースを再配置する

3. リスクと緩和策
- 競合の追随: 差別化の継続投資で対応
";

    #[test]
    fn test_sections_are_split() {
        let (consensus, actions) = extract_consensus_and_actions(NARRATIVE);
        assert_eq!(consensus.len(), 3);
        assert_eq!(consensus[0], "高成長セグメントへの集中投資");
        assert_eq!(consensus[2], "価格戦略の見直し");
        // Action list capped at 3 even though 4 items were listed
        assert_eq!(actions.len(), MAX_ACTION_ITEMS);
        assert_eq!(actions[0], "重点セグメントの営業体制を強化する");
    }

    #[test]
    fn test_english_markers() {
        let text = "\
## Consensus
- invest in growth segments

## Action plan
- hire a sales lead
";
        let (consensus, actions) = extract_consensus_and_actions(text);
        assert_eq!(consensus, vec!["invest in growth segments".to_string()]);
        assert_eq!(actions, vec!["hire a sales lead".to_string()]);
    }

    #[test]
    fn test_consensus_capped_at_five() {
        let mut text = String::from("合意事項\n");
        for i in 0..8 {
            text.push_str(&format!("- 項目{}\n", i));
        }
        let (consensus, _) = extract_consensus_and_actions(&text);
        assert_eq!(consensus.len(), MAX_CONSENSUS_ITEMS);
    }

    #[test]
    fn test_no_markers_yields_empty_lists() {
        let text = "- 項目A\n- 項目B\nただの文章です。";
        let (consensus, actions) = extract_consensus_and_actions(text);
        assert!(consensus.is_empty());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_numbered_items_are_stripped() {
        let text = "優先アクション\n1. 最初の施策\n2) は拾われない行\n";
        let (_, actions) = extract_consensus_and_actions(text);
        assert_eq!(actions[0], "最初の施策");
        // "2)" keeps its parenthesis after digit stripping
        assert_eq!(actions[1], ") は拾われない行");
    }

    #[test]
    fn test_marker_inside_list_line_switches_section() {
        // A bullet containing a marker moves the cursor instead of being
        // collected, mirroring the marker-first matching order.
        let text = "- 合意事項は以下の通り\n- 実際の項目\n";
        let (consensus, _) = extract_consensus_and_actions(text);
        assert_eq!(consensus, vec!["実際の項目".to_string()]);
    }
}
