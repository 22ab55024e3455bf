//! Explain-report model: a typed view over the server's explain document.
//!
//! Parsing is a pure function from the BSON reply; it never fails, so a
//! malformed or partial reply still renders with defaults. The display
//! verdict is kept separate from the rendering layer so it stays unit
//! testable.

use mongodb::bson::{Bson, Document};

use crate::bson::document_to_relaxed_extjson_compact;

/// Fields derived from the server's `queryPlanner` section.
#[derive(Debug, Clone, Default)]
pub struct PlannerInfo {
    pub namespace: String,
    pub index_filter_set: bool,
    pub parsed_query: String,
    pub rejected_plans: usize,
    pub winning_plan_stage: String,
}

/// Totals from the server's `executionStats` section.
#[derive(Debug, Clone, Default)]
pub struct ExecutionInfo {
    pub execution_success: bool,
    pub n_returned: u64,
    pub execution_time_ms: u64,
    pub total_keys_examined: u64,
    pub total_docs_examined: u64,
}

/// A parsed explain result, replaced wholesale on each run.
#[derive(Debug, Clone)]
pub struct ExplainReport {
    pub planner: PlannerInfo,
    pub execution: ExecutionInfo,
    /// Human-readable stage chain, e.g. `"FETCH -> IXSCAN (status_1)"`.
    pub winning_plan: String,
    pub index_used: Option<String>,
    pub is_collection_scan: bool,
    /// Pretty-printed relaxed Extended JSON of the full server reply.
    pub raw_json: String,
}

/// Closed set of efficiency verdicts the panel can display.
///
/// Mutually exclusive by construction: any collection scan warns, everything
/// else reads as efficient. Scan volume is expressed through [`PlanHint`]s
/// rather than by suppressing the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanVerdict {
    Efficient,
    CollectionScan,
}

impl PlanVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            PlanVerdict::Efficient => "Efficient Query",
            PlanVerdict::CollectionScan => "Collection Scan Detected",
        }
    }
}

/// Tone of an advisory hint, mapped to theme accents by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintTone {
    Danger,
    Warning,
    Muted,
}

#[derive(Debug, Clone)]
pub struct PlanHint {
    pub message: String,
    pub tone: HintTone,
}

impl ExplainReport {
    /// Parse the explain document returned by the server.
    pub fn from_document(explain_doc: &Document) -> Self {
        let query_planner = explain_doc.get_document("queryPlanner").ok();

        let namespace = query_planner
            .and_then(|planner| planner.get_str("namespace").ok())
            .unwrap_or_default()
            .to_string();
        let index_filter_set = query_planner
            .and_then(|planner| read_bool(planner, "indexFilterSet"))
            .unwrap_or(false);
        let parsed_query = query_planner
            .and_then(|planner| planner.get_document("parsedQuery").ok())
            .map(document_to_relaxed_extjson_compact)
            .unwrap_or_else(|| "{}".to_string());
        let rejected_plans = query_planner
            .and_then(|planner| planner.get_array("rejectedPlans").ok())
            .map(|plans| plans.len())
            .unwrap_or(0);

        let mut stages = Vec::new();
        let mut index_used = None;
        if let Some(winning_plan) =
            query_planner.and_then(|planner| planner.get_document("winningPlan").ok())
        {
            collect_stage_chain(winning_plan, &mut stages, &mut index_used);
        } else if let Some(exec_root) = explain_doc
            .get_document("executionStats")
            .ok()
            .and_then(|stats| stats.get_document("executionStages").ok())
        {
            collect_stage_chain(exec_root, &mut stages, &mut index_used);
        }

        let winning_plan_stage = stages.first().cloned().unwrap_or_else(|| "UNKNOWN".to_string());
        let is_collection_scan =
            stages.iter().any(|stage| stage.to_ascii_uppercase().contains("COLLSCAN"));
        let winning_plan = describe_plan(&stages, index_used.as_deref());

        let execution_stats = explain_doc.get_document("executionStats").ok();
        let execution = ExecutionInfo {
            execution_success: execution_stats
                .map(|stats| read_bool(stats, "executionSuccess").unwrap_or(true))
                .unwrap_or(false),
            n_returned: execution_stats
                .and_then(|stats| read_u64(stats, "nReturned"))
                .unwrap_or(0),
            execution_time_ms: execution_stats
                .and_then(|stats| read_u64(stats, "executionTimeMillis"))
                .unwrap_or(0),
            total_keys_examined: execution_stats
                .and_then(|stats| read_u64(stats, "totalKeysExamined"))
                .unwrap_or(0),
            total_docs_examined: execution_stats
                .and_then(|stats| read_u64(stats, "totalDocsExamined"))
                .unwrap_or(0),
        };

        let raw_json = crate::bson::document_to_relaxed_extjson_string(explain_doc);

        Self {
            planner: PlannerInfo {
                namespace,
                index_filter_set,
                parsed_query,
                rejected_plans,
                winning_plan_stage,
            },
            execution,
            winning_plan,
            index_used,
            is_collection_scan,
            raw_json,
        }
    }

    pub fn verdict(&self) -> PlanVerdict {
        if self.is_collection_scan {
            PlanVerdict::CollectionScan
        } else {
            PlanVerdict::Efficient
        }
    }

    /// Advisory hints ranked from most severe.
    pub fn hints(&self) -> Vec<PlanHint> {
        let mut hints = Vec::new();

        if self.is_collection_scan {
            hints.push(PlanHint {
                message: "Full collection scan detected. Add a selective index for this filter path."
                    .to_string(),
                tone: HintTone::Danger,
            });
        }

        let docs = self.execution.total_docs_examined;
        let returned = self.execution.n_returned;
        if returned > 0 {
            let ratio = docs / returned;
            if ratio >= 500 {
                hints.push(PlanHint {
                    message: format!(
                        "High scan ratio: {ratio} documents examined per returned document. Tighten filters or index coverage."
                    ),
                    tone: HintTone::Warning,
                });
            } else if ratio >= 100 {
                hints.push(PlanHint {
                    message: format!(
                        "Scan ratio is elevated ({ratio}:1). Consider a more selective index."
                    ),
                    tone: HintTone::Muted,
                });
            }
        }

        if self.index_used.is_none() && !self.is_collection_scan && docs > 0 {
            hints.push(PlanHint {
                message: "No index name reported for this plan. Verify index selection in planner output."
                    .to_string(),
                tone: HintTone::Warning,
            });
        }

        if hints.is_empty() {
            hints.push(PlanHint {
                message: "No immediate risk indicators for this plan.".to_string(),
                tone: HintTone::Muted,
            });
        }

        hints
    }
}

/// Per-panel explain state held in [`crate::state::AppState`].
#[derive(Default)]
pub struct ExplainPanelState {
    pub loading: bool,
    pub report: Option<ExplainReport>,
    pub error: Option<String>,
}

/// What the panel should render, derived from loading flag and report
/// presence. Loading always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplainPanelMode {
    Loading,
    Empty,
    Report,
}

impl ExplainPanelState {
    pub fn mode(&self) -> ExplainPanelMode {
        if self.loading {
            ExplainPanelMode::Loading
        } else if self.report.is_none() {
            ExplainPanelMode::Empty
        } else {
            ExplainPanelMode::Report
        }
    }
}

/// Label for the raw-output disclosure control.
pub fn raw_toggle_label(visible: bool) -> &'static str {
    if visible { "Hide Raw Output" } else { "Show Raw Output" }
}

fn read_u64(doc: &Document, key: &str) -> Option<u64> {
    let value = doc.get(key)?;
    match value {
        Bson::Int32(v) if *v >= 0 => Some(*v as u64),
        Bson::Int64(v) if *v >= 0 => Some(*v as u64),
        Bson::Double(v) if *v >= 0.0 => Some(*v as u64),
        _ => None,
    }
}

fn read_bool(doc: &Document, key: &str) -> Option<bool> {
    match doc.get(key)? {
        Bson::Boolean(value) => Some(*value),
        _ => None,
    }
}

/// Walk a winning-plan (or execution-stage) tree root-to-leaf, collecting
/// stage labels and the first index name seen. Handles the SBE `queryPlan`
/// wrapper and both `inputStage` and `inputStages` shapes.
fn collect_stage_chain(doc: &Document, stages: &mut Vec<String>, index_used: &mut Option<String>) {
    let doc = doc.get_document("queryPlan").unwrap_or(doc);

    if let Ok(stage) = doc.get_str("stage") {
        stages.push(stage.to_string());
    }
    if index_used.is_none()
        && let Ok(index_name) = doc.get_str("indexName")
    {
        *index_used = Some(index_name.to_string());
    }

    if let Ok(input) = doc.get_document("inputStage") {
        collect_stage_chain(input, stages, index_used);
    } else if let Ok(inputs) = doc.get_array("inputStages") {
        for input in inputs.iter().filter_map(Bson::as_document) {
            collect_stage_chain(input, stages, index_used);
        }
    }
}

fn describe_plan(stages: &[String], index_used: Option<&str>) -> String {
    if stages.is_empty() {
        return "UNKNOWN".to_string();
    }
    let mut parts = Vec::with_capacity(stages.len());
    for stage in stages {
        let upper = stage.to_ascii_uppercase();
        if upper.contains("IXSCAN")
            && let Some(index_name) = index_used
        {
            parts.push(format!("{upper} ({index_name})"));
        } else {
            parts.push(upper);
        }
    }
    parts.join(" -> ")
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;

    fn collscan_explain() -> Document {
        doc! {
            "queryPlanner": {
                "namespace": "testdb.users",
                "indexFilterSet": false,
                "parsedQuery": { "status": { "$eq": "active" } },
                "winningPlan": {
                    "stage": "COLLSCAN",
                    "direction": "forward"
                },
                "rejectedPlans": []
            },
            "executionStats": {
                "executionSuccess": true,
                "nReturned": 10,
                "executionTimeMillis": 15,
                "totalKeysExamined": 0,
                "totalDocsExamined": 2000,
                "executionStages": {
                    "stage": "COLLSCAN",
                    "nReturned": 10,
                    "docsExamined": 2000
                }
            }
        }
    }

    fn ixscan_explain() -> Document {
        doc! {
            "queryPlanner": {
                "namespace": "testdb.users",
                "indexFilterSet": false,
                "parsedQuery": { "status": { "$eq": "active" } },
                "winningPlan": {
                    "stage": "FETCH",
                    "inputStage": {
                        "stage": "IXSCAN",
                        "indexName": "status_1",
                        "isMultiKey": false
                    }
                },
                "rejectedPlans": [
                    {
                        "stage": "COLLSCAN",
                        "direction": "forward"
                    }
                ]
            },
            "executionStats": {
                "executionSuccess": true,
                "nReturned": 12,
                "executionTimeMillis": 3,
                "totalKeysExamined": 12,
                "totalDocsExamined": 12
            }
        }
    }

    #[test]
    fn parse_collscan_sets_warning_fields() {
        let report = ExplainReport::from_document(&collscan_explain());

        assert!(report.is_collection_scan);
        assert_eq!(report.verdict(), PlanVerdict::CollectionScan);
        assert_eq!(report.planner.namespace, "testdb.users");
        assert_eq!(report.planner.winning_plan_stage, "COLLSCAN");
        assert_eq!(report.planner.rejected_plans, 0);
        assert_eq!(report.index_used, None);
        assert_eq!(report.execution.n_returned, 10);
        assert_eq!(report.execution.execution_time_ms, 15);
        assert_eq!(report.execution.total_docs_examined, 2000);
        assert_eq!(report.execution.total_keys_examined, 0);
        assert!(report.execution.execution_success);
        assert!(report.planner.parsed_query.contains("status"));
        assert!(report.raw_json.contains("COLLSCAN"));
    }

    #[test]
    fn parse_ixscan_reads_index_and_plan_chain() {
        let report = ExplainReport::from_document(&ixscan_explain());

        assert!(!report.is_collection_scan);
        assert_eq!(report.verdict(), PlanVerdict::Efficient);
        assert_eq!(report.planner.winning_plan_stage, "FETCH");
        assert_eq!(report.index_used.as_deref(), Some("status_1"));
        assert_eq!(report.winning_plan, "FETCH -> IXSCAN (status_1)");
        assert_eq!(report.planner.rejected_plans, 1);
    }

    #[test]
    fn verdicts_are_mutually_exclusive() {
        let collscan = ExplainReport::from_document(&collscan_explain());
        let ixscan = ExplainReport::from_document(&ixscan_explain());

        assert_ne!(collscan.verdict(), ixscan.verdict());
        assert_eq!(collscan.verdict().label(), "Collection Scan Detected");
        assert_eq!(ixscan.verdict().label(), "Efficient Query");
    }

    #[test]
    fn parse_sbe_query_plan_wrapper() {
        let explain = doc! {
            "queryPlanner": {
                "namespace": "testdb.orders",
                "winningPlan": {
                    "isCached": false,
                    "queryPlan": {
                        "stage": "PROJECTION_COVERED",
                        "inputStage": {
                            "stage": "IXSCAN",
                            "indexName": "status_1_created_1"
                        }
                    },
                    "slotBasedPlan": { "stages": "omitted" }
                }
            }
        };

        let report = ExplainReport::from_document(&explain);
        assert_eq!(report.planner.winning_plan_stage, "PROJECTION_COVERED");
        assert_eq!(report.index_used.as_deref(), Some("status_1_created_1"));
        assert!(!report.is_collection_scan);
    }

    #[test]
    fn parse_empty_document_degrades_to_defaults() {
        let report = ExplainReport::from_document(&doc! {});

        assert_eq!(report.planner.winning_plan_stage, "UNKNOWN");
        assert_eq!(report.planner.namespace, "");
        assert!(!report.execution.execution_success);
        assert_eq!(report.verdict(), PlanVerdict::Efficient);
    }

    #[test]
    fn collscan_hint_ranks_first() {
        let report = ExplainReport::from_document(&collscan_explain());
        let hints = report.hints();

        assert_eq!(hints[0].tone, HintTone::Danger);
        assert!(hints[0].message.contains("collection scan"));
        // 2000 docs examined for 10 returned is a 200:1 elevated scan ratio.
        assert!(hints.iter().any(|hint| hint.message.contains("200:1")));
    }

    #[test]
    fn panel_mode_loading_wins() {
        let mut state = ExplainPanelState::default();
        assert_eq!(state.mode(), ExplainPanelMode::Empty);

        state.report = Some(ExplainReport::from_document(&ixscan_explain()));
        assert_eq!(state.mode(), ExplainPanelMode::Report);

        state.loading = true;
        assert_eq!(state.mode(), ExplainPanelMode::Loading);
    }

    #[test]
    fn raw_toggle_label_round_trips() {
        assert_eq!(raw_toggle_label(false), "Show Raw Output");
        assert_eq!(raw_toggle_label(true), "Hide Raw Output");
        let mut visible = false;
        visible = !visible;
        visible = !visible;
        assert_eq!(raw_toggle_label(visible), "Show Raw Output");
    }
}
