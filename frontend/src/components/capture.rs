use shared::capture::{CaptureEvent, CaptureState, CapturedImage, Modality};
use shared::Screen;
use strum::IntoEnumIterator;
use web_sys::{HtmlCanvasElement, HtmlVideoElement};
use yew::prelude::*;

use super::header::render_header;
use crate::camera::capture_still;
use crate::hooks::use_camera;

/// Both stills, handed to the root once the user continues.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturePair {
    pub rgb: CapturedImage,
    pub thermal: CapturedImage,
}

#[derive(Properties, PartialEq)]
pub struct CaptureProps {
    pub on_continue: Callback<CapturePair>,
}

fn intro_copy(modality: Modality) -> (&'static str, &'static str, &'static str, &'static str) {
    match modality {
        Modality::Rgb => (
            "fa-camera",
            "Capture RGB Image",
            "Position your foot in good lighting and ensure it's clearly visible",
            "Start Camera",
        ),
        Modality::Thermal => (
            "fa-temperature-half",
            "Capture Thermal Image",
            "Position your foot in the same position as the RGB image",
            "Start Thermal Camera",
        ),
    }
}

#[function_component(CaptureScreen)]
pub fn capture_screen(props: &CaptureProps) -> Html {
    let state = use_state(CaptureState::default);
    let video_ref = use_node_ref();
    let canvas_ref = use_node_ref();

    use_camera(state.wants_camera(), state.active, video_ref.clone());

    let dispatch = {
        let state = state.clone();
        Callback::from(move |event: CaptureEvent| state.set(state.apply(event)))
    };

    let on_capture = {
        let dispatch = dispatch.clone();
        let video_ref = video_ref.clone();
        let canvas_ref = canvas_ref.clone();
        let modality = state.active;
        Callback::from(move |_: MouseEvent| {
            let (Some(video), Some(canvas)) = (
                video_ref.cast::<HtmlVideoElement>(),
                canvas_ref.cast::<HtmlCanvasElement>(),
            ) else {
                return;
            };
            match capture_still(&video, &canvas, modality) {
                Ok(image) => dispatch.emit(CaptureEvent::Captured(image)),
                Err(err) => log::error!("Failed to capture frame: {:?}", err),
            }
        })
    };

    let continue_action = match (state.continue_target(), state.image(Modality::Rgb), state.image(Modality::Thermal)) {
        (Some(_), Some(rgb), Some(thermal)) => {
            let pair = CapturePair {
                rgb: rgb.clone(),
                thermal: thermal.clone(),
            };
            let on_continue = props.on_continue.clone();
            html! {
                <button class="btn btn-primary btn-small" onclick={move |_| on_continue.emit(pair.clone())}>
                    {"Continue "}<i class="fa-solid fa-arrow-right"></i>
                </button>
            }
        }
        _ => html! {},
    };

    let tabs = Modality::iter().map(|modality| {
        let onclick = dispatch.reform(move |_: MouseEvent| CaptureEvent::SelectTab(modality));
        html! {
            <button class={classes!("tab", (state.active == modality).then_some("active"))} {onclick}>
                { modality.label() }
                if state.image(modality).is_some() {
                    <span class="ready-dot"></span>
                }
            </button>
        }
    });

    let active = state.active;
    let body = match (state.image(active), state.camera_active) {
        (None, false) => {
            let (icon, title, hint, start) = intro_copy(active);
            html! {
                <div class="capture-intro">
                    <div class="icon-circle"><i class={classes!("fa-solid", icon, "fa-2x")}></i></div>
                    <h2>{ title }</h2>
                    <p class="hint">{ hint }</p>
                    <button class="btn btn-primary" onclick={dispatch.reform(|_: MouseEvent| CaptureEvent::StartCamera)}>
                        { start }
                    </button>
                </div>
            }
        }
        (None, true) => html! {
            <div class="viewfinder">
                <video
                    ref={video_ref}
                    autoplay=true
                    playsinline=true
                    muted=true
                    style={active.preview_filter().map(|f| format!("filter: {}", f))}
                />
                <div class="viewfinder-frame"></div>
                <button class="shutter" onclick={on_capture}>
                    <i class="fa-solid fa-camera"></i>
                </button>
            </div>
        },
        (Some(image), _) => html! {
            <div class="capture-preview">
                <img src={image.data_url().to_string()} alt={active.label()} />
                <button class="btn btn-outline" onclick={dispatch.reform(|_: MouseEvent| CaptureEvent::Retake)}>
                    <i class="fa-solid fa-rotate-left"></i>{" Retake"}
                </button>
                <p class="hint">{ format!("{} captured successfully", active.label()) }</p>
            </div>
        },
    };

    html! {
        <div class="screen">
            { render_header("Capture Images", Some(Screen::Consent), continue_action) }
            <div class="tabs">{ for tabs }</div>
            <main class="screen-body capture-body">{ body }</main>
            <canvas ref={canvas_ref} class="hidden"></canvas>
        </div>
    }
}
