use shared::analysis::ResultsTab;
use shared::followup::follow_up_plan;
use shared::{AnalysisReport, Screen};
use strum::IntoEnumIterator;
use yew::prelude::*;

use super::capture::CapturePair;
use super::header::{render_header, Link};
use super::risk::{risk_badge, risk_icon, score_bar};

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    /// Report returned by `/api/analyze`, when one arrived.
    #[prop_or_default]
    pub report: Option<AnalysisReport>,
    #[prop_or_default]
    pub captures: Option<CapturePair>,
}

#[function_component(ResultsScreen)]
pub fn results_screen(props: &ResultsProps) -> Html {
    let fallback = use_state(AnalysisReport::sample_now);
    let tab = use_state(ResultsTab::default);
    let report = props.report.as_ref().unwrap_or(&*fallback);

    let tabs = ResultsTab::iter().map(|t| {
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(t))
        };
        html! {
            <button class={classes!("tab", (*tab == t).then_some("active"))} {onclick}>{ t.as_ref() }</button>
        }
    });

    let body = match *tab {
        ResultsTab::Overview => render_overview(report),
        ResultsTab::Details => render_details(report),
        ResultsTab::Images => render_images(props.captures.as_ref()),
    };

    let action = html! {
        <Link to={Screen::Recommendations} class="btn btn-primary btn-small">{"Recommendations"}</Link>
    };

    html! {
        <div class="screen">
            { render_header("Screening Results", Some(Screen::Home), action) }
            <div class={classes!("risk-summary", report.overall_risk.css_class())}>
                { risk_icon(report.overall_risk) }
                <div>
                    <h2>{ report.overall_risk.headline() }</h2>
                    <p class="hint">
                        { format!("Analyzed on {}", report.timestamp.format("%-m/%-d/%Y")) }
                        <span class="scan-id">{ report.scan_id.as_str() }</span>
                    </p>
                </div>
            </div>
            <div class="tabs">{ for tabs }</div>
            <main class="screen-body">{ body }</main>
        </div>
    }
}

fn render_overview(report: &AnalysisReport) -> Html {
    let plan = follow_up_plan(report);
    html! {
        <>
            <section class="card">
                <h3>{"Risk Summary"}</h3>
                { for report.conditions.iter().map(|condition| html! {
                    <div class="condition-row">
                        <div class="condition-head">
                            <span>{ condition.name.clone() }</span>
                            { risk_badge(condition.risk) }
                        </div>
                        { score_bar(condition.score, condition.risk) }
                    </div>
                })}
            </section>
            <section class="card">
                <h3>{"Recommendations"}</h3>
                <ul class="recommendations">
                    { for report.recommendations.iter().map(|rec| html! {
                        <li><i class="fa-solid fa-circle-check"></i>{" "}{ rec.clone() }</li>
                    })}
                </ul>
            </section>
            <section class="card">
                <h3>{"Next Steps"}</h3>
                { for plan.actions.iter().map(|action| html! {
                    <div class="follow-up-action">
                        <div class="condition-head">
                            <span>{ action.title.clone() }</span>
                            { risk_badge(action.urgency) }
                        </div>
                        <p class="hint">{ action.description.clone() }</p>
                        <p class="hint small">{ action.timeframe.clone() }</p>
                    </div>
                })}
                <p class="hint">{ format!("Recommended follow-up screening in {}", plan.follow_up) }</p>
            </section>
        </>
    }
}

fn render_details(report: &AnalysisReport) -> Html {
    html! {
        <>
            { for report.conditions.iter().map(|condition| html! {
                <section class="card">
                    <div class="condition-head">
                        <h3>{ risk_icon(condition.risk) }{" "}{ condition.name.clone() }</h3>
                        <span class="score">{ format!("{}/100", condition.score) }</span>
                    </div>
                    { score_bar(condition.score, condition.risk) }
                    <p>{ condition.details.clone() }</p>
                </section>
            })}
        </>
    }
}

fn render_images(captures: Option<&CapturePair>) -> Html {
    let still = |label: &str, image: Option<String>| match image {
        Some(src) => html! {
            <figure class="still"><img src={src} alt={label.to_string()} /><figcaption>{ label.to_string() }</figcaption></figure>
        },
        None => html! {
            <figure class="still empty"><i class="fa-regular fa-image fa-2x"></i><figcaption>{ label.to_string() }</figcaption></figure>
        },
    };

    html! {
        <section class="card">
            <h3>{"Captured Images"}</h3>
            <div class="grid-2">
                { still("RGB Image", captures.map(|pair| pair.rgb.data_url().to_string())) }
                { still("Thermal Image", captures.map(|pair| pair.thermal.data_url().to_string())) }
            </div>
            <p class="hint small">{"Risk-area overlays are not available in this version."}</p>
        </section>
    }
}
