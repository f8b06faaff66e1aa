/// Popup UI for TS_switcher

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::{Interval, Timeout};
use patternfly_yew::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use crate::config::{
    COPY_MESSAGE_MS, EXTENSION_NAME, EXTENSION_VERSION, POLL_INTERVAL_MS, TEXT_COPIED,
    TEXT_COPY_FAILED, TEXT_COPY_LINK, TEXT_COPY_UNAVAILABLE, TEXT_LOADING,
};
use crate::platform::{BrowserApi, Platform};
use crate::session::{copy_link, switch_site, PopupSession, PopupState};
use crate::site::Site;
use crate::ui::components::{StatusLine, SwitchButtons};

pub enum SessionAction {
    TabRead(Option<String>),
    ReadFailed,
}

impl Reducible for PopupSession {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            SessionAction::TabRead(url) => next.update(url.as_deref()),
            SessionAction::ReadFailed => next.fail_read(),
        };

        // Unchanged polls must not re-render
        if changed { Rc::new(next) } else { self }
    }
}

/// Marks a tab read as pending so overlapping poll ticks cannot answer out
/// of order. The ticket clears the mark when dropped.
#[derive(Clone, Default)]
struct ReadInFlight(Rc<Cell<bool>>);

struct ReadTicket(Rc<Cell<bool>>);

impl ReadInFlight {
    fn start(&self) -> Option<ReadTicket> {
        if self.0.replace(true) {
            None
        } else {
            Some(ReadTicket(self.0.clone()))
        }
    }
}

impl Drop for ReadTicket {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Keep at most one pending timer. Setting a new one drops, and so cancels,
/// the previous one.
fn restart_timer<T>(slot: &RefCell<Option<T>>, timer: T) {
    slot.replace(Some(timer));
}

#[function_component(App)]
pub fn app() -> Html {
    let api = *use_memo((), |_| BrowserApi::detect());
    let session = use_reducer(PopupSession::new);
    let copied = use_state(|| false);
    // Dropped with the component, which cancels a pending hide
    let copied_timer = use_mut_ref(|| None::<Timeout>);

    // Read the active tab now and every POLL_INTERVAL_MS; the popup gets no
    // navigation events, so polling is how it follows the tab. Dropping the
    // interval on unmount stops it.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let in_flight = ReadInFlight::default();
            let poll = move || {
                let Some(ticket) = in_flight.start() else {
                    log::debug!("Previous tab read still pending, tick skipped");
                    return;
                };
                let session = session.clone();
                spawn_local(async move {
                    let _ticket = ticket;
                    match api.active_tab().await {
                        Ok(tab) => session.dispatch(SessionAction::TabRead(tab.url)),
                        Err(e) => {
                            log::error!("Failed to read active tab: {}", e);
                            session.dispatch(SessionAction::ReadFailed);
                        }
                    }
                });
            };

            poll();
            let interval = Interval::new(POLL_INTERVAL_MS, poll);
            move || drop(interval)
        });
    }

    // Switch site handler
    let on_switch = {
        let session = session.clone();

        Callback::from(move |target: Site| {
            let session = (*session).clone();
            spawn_local(async move {
                if let Err(e) = switch_site(&api, &session, target).await {
                    log::error!("Switch error: {}", e);
                }
            });
        })
    };

    // Copy link handler
    let on_copy = {
        let session = session.clone();
        let copied = copied.clone();
        let copied_timer = copied_timer.clone();

        Callback::from(move |_: MouseEvent| {
            let session = (*session).clone();
            let copied = copied.clone();
            let copied_timer = copied_timer.clone();
            spawn_local(async move {
                match copy_link(&api, &session).await {
                    Ok(Some(url)) => {
                        log::debug!("Copied {}", url);
                        copied.set(true);
                        let hide = Timeout::new(COPY_MESSAGE_MS, move || copied.set(false));
                        restart_timer(&*copied_timer, hide);
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("Copy error: {}", e);
                        alert(TEXT_COPY_FAILED);
                    }
                }
            });
        })
    };

    let loading = session.state() == PopupState::Uninitialized;
    let copy_enabled = session.copy_enabled();
    let body_class = if loading || copy_enabled {
        "padding-20"
    } else {
        "padding-20 disabled-site"
    };

    html! {
        <div class={body_class}>
            <h1 class="popup-title">{EXTENSION_NAME}</h1>

            if loading {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{TEXT_LOADING}</p>
                </div>
            } else {
                <StatusLine site={session.site()} read_failed={session.read_failed()} />

                <SwitchButtons buttons={session.buttons()} onswitch={on_switch} />

                <div class="message-top-margin">
                    <Button onclick={on_copy} disabled={!copy_enabled} variant={ButtonVariant::Primary} block={true}>
                        {if copy_enabled { TEXT_COPY_LINK } else { TEXT_COPY_UNAVAILABLE }}
                    </Button>
                </div>

                if *copied {
                    <Alert r#type={AlertType::Success} title={TEXT_COPIED} inline={true}>
                    </Alert>
                }
            }

            <p class="footer-popup">
                {format!("{} v{}", EXTENSION_NAME, EXTENSION_VERSION)}
            </p>
        </div>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
