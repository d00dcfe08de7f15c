use shared::Screen;
use yew::prelude::*;

use super::header::Link;

const STEPS: [(&str, &str); 3] = [
    ("Capture 3D Images", "Take RGB and thermal images of your feet using 3D photogrammetry"),
    ("AI Analysis", "Our machine learning algorithm analyzes your images for risk factors"),
    ("Get Recommendations", "Receive footwear recommendations based on your specific foot condition"),
];

const DETECTS: [(&str, &str); 4] = [
    ("LOPS", "Loss of Protective Sensation"),
    ("PAD", "Peripheral Artery Disease"),
    ("Deformities", "Foot structure abnormalities"),
    ("Pre-ulcerative", "Early signs of ulceration"),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="screen home">
            <div class="hero">
                <h1>{"Diabetic Foot Screening"}</h1>
                <p>{"Early detection of foot complications using advanced 3D imaging technology"}</p>
            </div>
            <main class="screen-body">
                <section class="card">
                    <h2>{"How It Works"}</h2>
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step">
                            <div class="step-number">{ i + 1 }</div>
                            <div>
                                <h3>{ *title }</h3>
                                <p class="hint">{ *text }</p>
                            </div>
                        </div>
                    })}
                </section>
                <section class="card muted">
                    <h2>{"What We Detect"}</h2>
                    <div class="grid-2">
                        { for DETECTS.iter().map(|(name, text)| html! {
                            <div class="tile">
                                <h3>{ *name }</h3>
                                <p class="hint">{ *text }</p>
                            </div>
                        })}
                    </div>
                </section>
                <Link to={Screen::ScanIntro} class="btn btn-primary btn-block">
                    {"Start Screening "}<i class="fa-solid fa-arrow-right"></i>
                </Link>
                <Link to={Screen::Consent} class="btn btn-outline btn-block">
                    {"Capture RGB & Thermal Images"}
                </Link>
            </main>
        </div>
    }
}
