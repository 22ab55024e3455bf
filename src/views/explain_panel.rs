//! Explain panel: renders the parsed explain report with an efficiency
//! verdict, plan metrics, advisory hints, and a raw-JSON disclosure.

use gpui::*;
use gpui_component::ActiveTheme as _;
use gpui_component::Sizable as _;
use gpui_component::scroll::ScrollableElement;
use gpui_component::spinner::Spinner;

use crate::components::Button;
use crate::helpers::{format_millis, format_number};
use crate::state::{
    AppEvent, AppState, ExplainPanelMode, ExplainReport, HintTone, PlanVerdict, raw_toggle_label,
};
use crate::theme::spacing;

pub struct ExplainPanel {
    state: Entity<AppState>,
    raw_visible: bool,
    _subscriptions: Vec<Subscription>,
}

impl ExplainPanel {
    pub fn new(state: Entity<AppState>, cx: &mut Context<Self>) -> Self {
        let mut subscriptions = Vec::new();

        // Collapse the raw disclosure whenever a new run starts.
        subscriptions.push(cx.subscribe(
            &state,
            |this: &mut Self, _state, event: &AppEvent, cx| {
                if matches!(event, AppEvent::ExplainStarted { .. }) {
                    this.raw_visible = false;
                    cx.notify();
                }
            },
        ));
        cx.observe(&state, |_, _, cx| cx.notify()).detach();

        Self { state, raw_visible: false, _subscriptions: subscriptions }
    }

    fn render_report(&self, report: &ExplainReport, cx: &mut Context<Self>) -> AnyElement {
        let verdict = report.verdict();
        let verdict_accent = match verdict {
            PlanVerdict::Efficient => cx.theme().success,
            PlanVerdict::CollectionScan => cx.theme().danger,
        };

        let header = div()
            .flex()
            .items_center()
            .justify_between()
            .gap(spacing::sm())
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(spacing::sm())
                    .child(div().text_lg().font_weight(FontWeight::SEMIBOLD).child("Explain Plan"))
                    .child(info_chip(verdict.label(), verdict_accent))
                    .child(info_chip(
                        report.planner.winning_plan_stage.clone(),
                        cx.theme().muted_foreground,
                    )),
            )
            .child(
                Button::new("explain-copy-json").compact().ghost().label("Copy JSON").on_click({
                    let raw_json = report.raw_json.clone();
                    move |_, _, cx| {
                        cx.write_to_clipboard(ClipboardItem::new_string(raw_json.clone()));
                    }
                }),
            );

        let index_value =
            report.index_used.clone().unwrap_or_else(|| "None".to_string());

        let mut summary = div()
            .flex()
            .flex_col()
            .gap(px(6.0))
            .child(metric_line("Namespace", &report.planner.namespace, cx))
            .child(metric_line("Winning plan", &report.winning_plan, cx))
            .child(metric_line(
                "Rejected plans",
                &format_number(report.planner.rejected_plans as u64),
                cx,
            ))
            .child(metric_line(
                "Documents returned",
                &format_number(report.execution.n_returned),
                cx,
            ))
            .child(metric_line(
                "Documents examined",
                &format_number(report.execution.total_docs_examined),
                cx,
            ));

        if report.execution.total_keys_examined > 0 {
            summary = summary.child(metric_line(
                "Index keys examined",
                &format_number(report.execution.total_keys_examined),
                cx,
            ));
        }

        summary = summary
            .child(metric_line(
                "Execution time",
                &format_millis(report.execution.execution_time_ms),
                cx,
            ))
            .child(metric_line("Index used", &index_value, cx))
            .child(metric_line(
                "Index filter set",
                if report.planner.index_filter_set { "Yes" } else { "No" },
                cx,
            ))
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child("Parsed query"),
            )
            .child(
                div()
                    .text_xs()
                    .font_family(crate::theme::fonts::mono())
                    .child(report.planner.parsed_query.clone()),
            );

        let mut hints = div().flex().flex_col().gap(px(6.0));
        for hint in report.hints() {
            let accent = match hint.tone {
                HintTone::Danger => cx.theme().danger,
                HintTone::Warning => cx.theme().warning,
                HintTone::Muted => cx.theme().muted_foreground,
            };
            hints = hints.child(hint_row(&hint.message, accent));
        }

        let raw_toggle = Button::new("explain-raw-toggle")
            .compact()
            .ghost()
            .label(raw_toggle_label(self.raw_visible))
            .on_click({
                let view = cx.entity();
                move |_, _, cx| {
                    view.update(cx, |this, cx| {
                        this.raw_visible = !this.raw_visible;
                        cx.notify();
                    });
                }
            });

        let mut body = div()
            .flex()
            .flex_col()
            .flex_1()
            .min_w(px(0.0))
            .min_h(px(0.0))
            .overflow_y_scrollbar()
            .p(spacing::md())
            .gap(spacing::sm())
            .child(header)
            .child(section_card(
                "Query Performance Summary",
                Some("Fast health snapshot for this explain result."),
                summary.into_any_element(),
                cx,
            ))
            .child(section_card("Insights", None, hints.into_any_element(), cx))
            .child(div().flex().items_center().child(raw_toggle));

        if self.raw_visible {
            let lines = report.raw_json.lines().map(|line| {
                div()
                    .text_xs()
                    .font_family(crate::theme::fonts::mono())
                    .child(line.to_string())
                    .into_any_element()
            });
            body = body.child(
                div()
                    .flex()
                    .flex_col()
                    .p(spacing::sm())
                    .rounded(px(6.0))
                    .border_1()
                    .border_color(cx.theme().border)
                    .bg(cx.theme().background)
                    .children(lines),
            );
        }

        body.into_any_element()
    }
}

impl Render for ExplainPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (mode, report, error) = {
            let state = self.state.read(cx);
            (state.explain.mode(), state.explain.report.clone(), state.explain.error.clone())
        };

        let content = match mode {
            ExplainPanelMode::Loading => div()
                .flex()
                .flex_col()
                .flex_1()
                .items_center()
                .justify_center()
                .gap(spacing::sm())
                .child(Spinner::new().small())
                .child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child("Analyzing query plan..."),
                )
                .into_any_element(),
            ExplainPanelMode::Empty => {
                let mut empty = div()
                    .flex()
                    .flex_col()
                    .flex_1()
                    .items_center()
                    .justify_center()
                    .gap(spacing::sm())
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child("Run Explain to inspect how this query executes."),
                    );
                if let Some(error) = error {
                    empty = empty.child(
                        div()
                            .px(spacing::sm())
                            .py(spacing::xs())
                            .rounded(px(6.0))
                            .bg(crate::theme::colors::bg_error(cx))
                            .text_xs()
                            .text_color(cx.theme().danger)
                            .child(error),
                    );
                }
                empty.into_any_element()
            }
            ExplainPanelMode::Report => match report {
                Some(report) => self.render_report(&report, cx),
                None => div().into_any_element(),
            },
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .min_w(px(0.0))
            .min_h(px(0.0))
            .overflow_hidden()
            .child(content)
    }
}

fn info_chip(label: impl Into<SharedString>, accent: Hsla) -> Div {
    div()
        .px(spacing::xs())
        .py(px(2.0))
        .rounded(px(5.0))
        .bg(accent.opacity(0.1))
        .border_1()
        .border_color(accent.opacity(0.28))
        .text_xs()
        .text_color(accent)
        .child(label.into())
}

fn metric_line(label: &str, value: &str, cx: &App) -> Div {
    div()
        .flex()
        .items_center()
        .justify_between()
        .gap(spacing::sm())
        .child(div().text_xs().text_color(cx.theme().muted_foreground).child(label.to_string()))
        .child(
            div()
                .max_w(px(340.0))
                .text_xs()
                .font_weight(FontWeight::MEDIUM)
                .text_right()
                .text_ellipsis()
                .child(value.to_string()),
        )
}

fn hint_row(message: &str, accent: Hsla) -> Div {
    div()
        .px(spacing::xs())
        .py(px(4.0))
        .rounded(px(6.0))
        .border_1()
        .border_color(accent.opacity(0.3))
        .bg(accent.opacity(0.11))
        .text_xs()
        .text_color(accent)
        .child(message.to_string())
}

fn section_card(
    title: &str,
    subtitle: Option<&str>,
    body: AnyElement,
    cx: &App,
) -> AnyElement {
    let mut header = div()
        .flex()
        .flex_col()
        .gap(px(2.0))
        .px(spacing::md())
        .py(spacing::sm())
        .child(div().text_sm().font_weight(FontWeight::SEMIBOLD).child(title.to_string()));

    if let Some(subtitle) = subtitle {
        header = header.child(
            div().text_xs().text_color(cx.theme().muted_foreground).child(subtitle.to_string()),
        );
    }

    div()
        .flex()
        .flex_col()
        .rounded(px(10.0))
        .border_1()
        .border_color(cx.theme().border.opacity(0.55))
        .bg(cx.theme().background.opacity(0.5))
        .overflow_hidden()
        .child(header)
        .child(div().px(spacing::md()).py(spacing::sm()).child(body))
        .into_any_element()
}
