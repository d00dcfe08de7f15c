use shared::analysis::{AnalysisTab, AnalysisView, AnalysisViewEvent, SCAN_MEASUREMENTS};
use shared::{AnalysisReport, Screen};
use strum::IntoEnumIterator;
use yew::prelude::*;

use super::header::{render_header, Link};
use super::risk::{risk_badge, risk_icon, score_bar};
use crate::hooks::use_timed;

/// Analysis of the 3D scan. Always presents the fixed sample report.
#[function_component(AnalysisScreen)]
pub fn analysis_screen() -> Html {
    let view = use_timed(AnalysisView::default());
    let report = use_state(AnalysisReport::sample_now);
    let state = view.0;

    if state.loading {
        return html! {
            <div class="screen centered">
                <div class="spinner"></div>
                <h2>{"Analyzing Your Scan"}</h2>
                <p class="hint">{"Processing 3D model and thermal data..."}</p>
            </div>
        };
    }

    let dispatcher = view.dispatcher();
    let tabs = AnalysisTab::iter().map(|t| {
        let dispatcher = dispatcher.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(AnalysisViewEvent::SelectTab(t))
        });
        html! {
            <button class={classes!("tab", (state.tab == t).then_some("active"))} {onclick}>{ t.as_ref() }</button>
        }
    });

    let body = match state.tab {
        AnalysisTab::Overview => html! {
            <>
                <section class={classes!("card", "risk-summary", report.overall_risk.css_class())}>
                    { risk_icon(report.overall_risk) }
                    <div>
                        <h2>{ report.overall_risk.headline() }</h2>
                        <p class="hint">{"Based on your 3D scan and thermal imaging"}</p>
                    </div>
                </section>
                <section class="card">
                    <h3>{"Key Findings"}</h3>
                    { for report.conditions.iter().map(|c| html! {
                        <div class="condition-row">
                            <div class="condition-head">
                                <span>{ c.name.clone() }</span>
                                { risk_badge(c.risk) }
                            </div>
                            { score_bar(c.score, c.risk) }
                        </div>
                    })}
                </section>
            </>
        },
        AnalysisTab::Model => html! {
            <section class="card">
                <div class="model-placeholder">
                    <i class="fa-solid fa-cube fa-3x"></i>
                    <p class="hint">{"3D foot model"}</p>
                </div>
                <h3>{"Scan Measurements"}</h3>
                <div class="grid-2">
                    { for SCAN_MEASUREMENTS.iter().map(|(label, value)| html! {
                        <div class="tile">
                            <p class="hint small">{ *label }</p>
                            <p class="value">{ *value }</p>
                        </div>
                    })}
                </div>
            </section>
        },
        AnalysisTab::Details => html! {
            <>
                { for report.conditions.iter().map(|c| html! {
                    <section class="card">
                        <div class="condition-head">
                            <h3>{ c.name.clone() }</h3>
                            <span class="score">{ format!("{}/100", c.score) }</span>
                        </div>
                        <p>{ c.details.clone() }</p>
                    </section>
                })}
            </>
        },
    };

    let action = html! {
        <Link to={Screen::Recommendations} class="btn btn-primary btn-small">{"Recommendations"}</Link>
    };

    html! {
        <div class="screen">
            { render_header("Scan Analysis", Some(Screen::Scan), action) }
            <div class="tabs">{ for tabs }</div>
            <main class="screen-body">{ body }</main>
        </div>
    }
}
