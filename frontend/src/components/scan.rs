use shared::scan::{ScanEvent, ScanSession, ScanStage};
use shared::Screen;
use yew::prelude::*;

use super::header::{render_header, Link};
use crate::hooks::{use_camera, use_timed};

#[function_component(ScanScreen)]
pub fn scan_screen() -> Html {
    let scan = use_timed(ScanSession::new());
    let video_ref = use_node_ref();
    let session = scan.0;

    use_camera(session.stage.wants_camera(), (), video_ref.clone());

    let send = {
        let dispatcher = scan.dispatcher();
        move |event: ScanEvent| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(event))
        }
    };

    let body = match session.stage {
        ScanStage::Prepare => html! {
            <div class="scan-panel">
                <div class="icon-circle dark"><i class="fa-solid fa-camera fa-2x"></i></div>
                <h2>{ session.stage.title() }</h2>
                <p>{"Position your foot on a flat surface and keep the camera steady during scanning"}</p>
                <button class="btn btn-light" onclick={send(ScanEvent::Start)}>{"Start Scanning"}</button>
            </div>
        },
        ScanStage::Scanning => html! {
            <div class="viewfinder full">
                <video ref={video_ref} autoplay=true playsinline=true muted=true />
                <div class="viewfinder-frame"></div>
                <div class="scan-status">
                    <span>{ session.captures_label() }</span>
                    <span>{ format!("{}%", session.progress) }</span>
                </div>
                <div class="scan-progress">
                    <div class="progress">
                        <div class="progress-fill" style={format!("width: {}%", session.progress)}></div>
                    </div>
                    <p>{ session.progress_label() }</p>
                </div>
            </div>
        },
        ScanStage::Processing => html! {
            <div class="scan-panel">
                <div class="spinner"></div>
                <h2>{ session.stage.title() }</h2>
                <p>{"Creating 3D model and analyzing foot structure..."}</p>
            </div>
        },
        ScanStage::Complete => html! {
            <div class="scan-panel">
                <div class="icon-circle success"><i class="fa-solid fa-circle-check fa-2x"></i></div>
                <h2>{ session.stage.title() }</h2>
                <p>{"Your 3D foot scan has been successfully captured and processed"}</p>
                <Link to={Screen::Analysis} class="btn btn-light btn-block">{"View Analysis"}</Link>
                <button class="btn btn-ghost btn-block" onclick={send(ScanEvent::Rescan)}>
                    <i class="fa-solid fa-rotate-left"></i>{" Rescan"}
                </button>
            </div>
        },
    };

    html! {
        <div class="screen dark">
            { render_header("3D Foot Scan", Some(Screen::ScanIntro), html! {}) }
            <main class="scan-body">{ body }</main>
        </div>
    }
}
