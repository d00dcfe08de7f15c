use shared::analyzing::AnalyzingProgress;
use shared::Screen;
use yew::prelude::*;

use crate::hooks::{use_navigator, use_timed};

#[function_component(AnalyzingScreen)]
pub fn analyzing_screen() -> Html {
    let machine = use_timed(AnalyzingProgress::default());
    let navigate = use_navigator();
    let progress = machine.0;

    use_effect_with(progress.finished, move |finished| {
        if *finished {
            navigate.emit(Screen::Results);
        }
    });

    html! {
        <div class="screen centered">
            <div class="progress-ring" style={format!("--progress: {}", progress.progress)}>
                <span>{ format!("{}%", progress.progress) }</span>
            </div>
            <h2>{"Analyzing Your Images"}</h2>
            <p class="hint">{ progress.status_text() }</p>
            <p class="hint small">{"Please keep the app open while we process your results"}</p>
        </div>
    }
}
