use shared::RiskTier;
use yew::prelude::*;

pub fn risk_icon(risk: RiskTier) -> Html {
    let icon = match risk {
        RiskTier::Low => "fa-circle-check",
        RiskTier::Moderate | RiskTier::High => "fa-triangle-exclamation",
    };
    html! { <i class={classes!("fa-solid", icon, risk.css_class())}></i> }
}

pub fn risk_badge(risk: RiskTier) -> Html {
    html! {
        <span class={classes!("risk-badge", risk.css_class())}>{ risk.as_ref() }</span>
    }
}

pub fn score_bar(score: u8, risk: RiskTier) -> Html {
    html! {
        <div class="score-bar">
            <div class={classes!("score-fill", risk.css_class())} style={format!("width: {}%", score.min(100))}></div>
        </div>
    }
}
