mod api;
mod camera;
mod components;
mod hooks;

use gloo_events::EventListener;
use shared::{AnalysisReport, ReportSlot, Screen};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::analysis::AnalysisScreen;
use components::analyzing::AnalyzingScreen;
use components::capture::{CapturePair, CaptureScreen};
use components::consent::ConsentScreen;
use components::home::Home;
use components::recommendations::RecommendationsScreen;
use components::results::ResultsScreen;
use components::scan::ScanScreen;
use components::scan_intro::ScanIntro;
use components::shoe_detail::ShoeDetailScreen;
use hooks::Navigator;

enum Msg {
    // Navigation
    Navigate(Screen),
    PopState,

    // Screening
    CapturesReady(CapturePair),
    ReportReceived(u64, AnalysisReport),
    ReportFailed(u64, String),
}

struct App {
    screen: Screen,
    captures: Option<CapturePair>,
    report: ReportSlot,
    navigator: Navigator,
    _popstate_listener: Option<EventListener>,
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history(screen: &Screen) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&screen.path())) {
        log::warn!("Failed to push history entry: {:?}", err);
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let popstate_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "popstate", move |_| link.send_message(Msg::PopState))
        });

        let screen = Screen::from_path(&current_path());
        log::info!("Starting at {}", screen.path());

        Self {
            screen,
            captures: None,
            report: ReportSlot::default(),
            navigator: Navigator {
                navigate: ctx.link().callback(Msg::Navigate),
            },
            _popstate_listener: popstate_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(screen) => {
                if screen == self.screen {
                    return false;
                }
                push_history(&screen);
                scroll_to_top();
                self.screen = screen;
                true
            }
            Msg::PopState => {
                self.screen = Screen::from_path(&current_path());
                true
            }
            Msg::CapturesReady(pair) => {
                let generation = self.report.begin();
                self.submit_captures(ctx, generation, pair.clone());
                self.captures = Some(pair);
                ctx.link().send_message(Msg::Navigate(Screen::Analyzing));
                false
            }
            Msg::ReportReceived(generation, report) => {
                let scan_id = report.scan_id.clone();
                if self.report.accept(generation, report) {
                    log::info!("Received analysis {}", scan_id);
                    self.screen == Screen::Results
                } else {
                    log::debug!("Dropping superseded analysis {}", scan_id);
                    false
                }
            }
            Msg::ReportFailed(generation, error) => {
                if self.report.is_current(generation) {
                    log::error!("Analysis request failed: {}", error);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Navigator> context={self.navigator.clone()}>
                <div class="app-shell">
                    { self.render_screen(ctx) }
                </div>
            </ContextProvider<Navigator>>
        }
    }
}

impl App {
    fn submit_captures(&self, ctx: &Context<Self>, generation: u64, pair: CapturePair) {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::submit_analysis(&pair.rgb, &pair.thermal).await {
                Ok(report) => link.send_message(Msg::ReportReceived(generation, report)),
                Err(err) => link.send_message(Msg::ReportFailed(generation, err)),
            }
        });
    }

    fn render_screen(&self, ctx: &Context<Self>) -> Html {
        match &self.screen {
            Screen::Home => html! { <Home /> },
            Screen::ScanIntro => html! { <ScanIntro /> },
            Screen::Scan => html! { <ScanScreen /> },
            Screen::Analysis => html! { <AnalysisScreen /> },
            Screen::Consent => html! { <ConsentScreen /> },
            Screen::Capture => html! {
                <CaptureScreen on_continue={ctx.link().callback(Msg::CapturesReady)} />
            },
            Screen::Analyzing => html! { <AnalyzingScreen /> },
            Screen::Results => html! {
                <ResultsScreen report={self.report.report().cloned()} captures={self.captures.clone()} />
            },
            Screen::Recommendations => html! { <RecommendationsScreen /> },
            Screen::ShoeDetail(id) => html! {
                <ShoeDetailScreen key={id.clone()} id={AttrValue::from(id.clone())} />
            },
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
