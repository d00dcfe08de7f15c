use shared::consent::{ConsentEvent, ConsentItem, ConsentState};
use shared::Screen;
use strum::IntoEnumIterator;
use yew::prelude::*;

use super::header::{render_header, Link};

#[function_component(ConsentScreen)]
pub fn consent_screen() -> Html {
    let consent = use_state(ConsentState::default);
    let target = consent.continue_target();

    let items = ConsentItem::iter().map(|item| {
        let onchange = {
            let consent = consent.clone();
            Callback::from(move |_: Event| consent.set(consent.apply(ConsentEvent::Toggle(item))))
        };
        html! {
            <label class="consent-item">
                <input type="checkbox" id={item.id()} checked={consent.is_checked(item)} {onchange} />
                <div>
                    <span class="consent-label">{ item.as_ref() }</span>
                    <p class="hint">{ item.description() }</p>
                </div>
            </label>
        }
    });

    html! {
        <div class="screen">
            { render_header("Consent", Some(Screen::Home), html! {}) }
            <main class="screen-body">
                <section class="card">
                    <h2>{"Before you begin"}</h2>
                    <p class="hint">
                        {"Please review and accept the following to continue with the screening."}
                    </p>
                    { for items }
                </section>
                <Link
                    to={target.clone().unwrap_or(Screen::Capture)}
                    disabled={target.is_none()}
                    class="btn btn-primary btn-block"
                >
                    {"Continue "}<i class="fa-solid fa-arrow-right"></i>
                </Link>
            </main>
        </div>
    }
}
