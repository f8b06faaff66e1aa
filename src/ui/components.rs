/// Reusable UI components

use crate::config::TEXT_LOAD_ERROR;
use crate::session::SwitchButton;
use crate::site::{site_status, Site};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub site: Option<Site>,
    #[prop_or(false)]
    pub read_failed: bool,
}

/// Coloured dot plus the name of the site the tab is on
#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    let status = site_status(props.site);
    let label = if props.read_failed { TEXT_LOAD_ERROR } else { status.label };

    html! {
        <div class="status">
            <span class="status-indicator" style={format!("background: {};", status.color)}></span>
            <span id="current-site">{label}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SwitchButtonsProps {
    pub buttons: Vec<SwitchButton>,
    pub onswitch: Callback<Site>,
}

#[function_component(SwitchButtons)]
pub fn switch_buttons(props: &SwitchButtonsProps) -> Html {
    html! {
        <div class="flex-column-gap">
            {for props.buttons.iter().map(|button| {
                let target = button.target();
                let onswitch = props.onswitch.clone();
                let onclick = Callback::from(move |_: MouseEvent| onswitch.emit(target));
                html! {
                    <div id={button.element_id()}>
                        <Button onclick={onclick} variant={ButtonVariant::Secondary} block={true}>
                            {button.label()}
                        </Button>
                    </div>
                }
            })}
        </div>
    }
}
