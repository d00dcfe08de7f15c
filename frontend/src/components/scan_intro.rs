use shared::Screen;
use yew::prelude::*;

use super::header::{render_header, Link};

const INSTRUCTIONS: [&str; 4] = [
    "Find a well-lit area and remove your socks and shoes",
    "Position your foot within the frame when prompted",
    "Slowly rotate your foot to capture all angles",
    "Remain still during the thermal imaging process",
];

#[function_component(ScanIntro)]
pub fn scan_intro() -> Html {
    html! {
        <div class="screen">
            { render_header("3D Foot Scan", Some(Screen::Home), html! {}) }
            <main class="screen-body">
                <div class="hero small">
                    <i class="fa-solid fa-cube fa-2x"></i>
                    <h2>{"3D Photogrammetry"}</h2>
                    <p>{"Capture your foot from multiple angles"}</p>
                </div>
                <section class="card">
                    <h2>{"Scanning Instructions"}</h2>
                    <ol class="instructions">
                        { for INSTRUCTIONS.iter().map(|step| html! { <li>{ *step }</li> }) }
                    </ol>
                </section>
                <section class="notice">
                    <h3><i class="fa-solid fa-circle-info"></i>{" Important Note"}</h3>
                    <p>
                        {"This screening is not a substitute for professional medical diagnosis. \
                          Always consult with a healthcare provider for proper evaluation."}
                    </p>
                </section>
                <Link to={Screen::Scan} class="btn btn-primary btn-block">
                    {"Begin Scan "}<i class="fa-solid fa-arrow-right"></i>
                </Link>
            </main>
        </div>
    }
}
