use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use shared::{Screen, Timed, Timer};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::camera::CameraStream;

/// Navigation handle shared through context by the root component.
#[derive(Clone, PartialEq)]
pub struct Navigator {
    pub navigate: Callback<Screen>,
}

#[hook]
pub fn use_navigator() -> Callback<Screen> {
    use_context::<Navigator>()
        .map(|nav| nav.navigate)
        .unwrap_or_else(Callback::noop)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Machine<M>(pub M);

impl<M: Timed + Clone> Reducible for Machine<M> {
    type Action = M::Event;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Machine(self.0.apply(action)))
    }
}

/// Runs a [`Timed`] machine on browser timers.
///
/// Whenever the state changes the previous timeout is dropped (which cancels
/// it) and the new state's pending timer is armed. Unmounting drops the last
/// timeout, so no event is delivered to a screen that is gone.
#[hook]
pub fn use_timed<M>(init: M) -> UseReducerHandle<Machine<M>>
where
    M: Timed + Clone + PartialEq + 'static,
    M::Event: 'static,
{
    let machine = use_reducer(move || Machine(init));
    let dispatcher = machine.dispatcher();

    use_effect_with(machine.0.clone(), move |state: &M| {
        let timeout = state.pending_timer().map(|Timer { after, event }| {
            Timeout::new(after.as_millis() as u32, move || dispatcher.dispatch(event))
        });
        move || drop(timeout)
    });

    machine
}

/// Holds the camera open while `wanted` is true.
///
/// A change of `key` (the capture tab, say) releases the current stream and
/// requests a new one. Failures are logged and otherwise ignored.
#[hook]
pub fn use_camera<K>(wanted: bool, key: K, video: NodeRef)
where
    K: PartialEq + 'static,
{
    use_effect_with((wanted, key), move |deps: &(bool, K)| {
        let held: Rc<RefCell<Option<CameraStream>>> = Rc::default();
        let released = Rc::new(Cell::new(false));

        if deps.0 {
            let held = held.clone();
            let released = released.clone();
            spawn_local(async move {
                match CameraStream::open().await {
                    // Left before access was granted: dropping releases it.
                    Ok(_) if released.get() => {}
                    Ok(mut stream) => {
                        if let Some(element) = video.cast::<HtmlVideoElement>() {
                            stream.attach(element);
                        }
                        *held.borrow_mut() = Some(stream);
                    }
                    Err(err) => log::error!("Error accessing camera: {:?}", err),
                }
            });
        }

        move || {
            released.set(true);
            held.borrow_mut().take();
        }
    });
}
