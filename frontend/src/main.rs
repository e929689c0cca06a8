use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod site;
mod interaction {
    pub mod clock;
    pub mod forms;
    pub mod geometry;
    pub mod key_sequence;
    pub mod navigation;
    pub mod notifications;
    pub mod reveal;
    pub mod severity;
    pub mod style;
    pub mod surface;
    pub mod throttle;
    pub mod timeline;
    pub mod validation;
}
mod browser {
    pub mod dom;
    pub mod lifecycle;
    pub mod listener;
    pub mod reveal;
    pub mod ripple;
    pub mod submit;
    pub mod timers;
    pub mod toasts;
    pub mod visibility;
}
mod components {
    pub mod easter_egg;
    pub mod header;
    pub mod ripple_button;
    pub mod site_form;
}
mod pages {
    pub mod bootstrap;
    pub mod common;
    pub mod generic;
    pub mod smartcare;
}

use browser::toasts::ToastHost;
use pages::{generic::GenericSite, smartcare::SmartCareSite};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/smartcare")]
    SmartCare,
    #[at("/index.html")]
    IndexHtml,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <GenericSite /> }
        }
        Route::SmartCare => {
            info!("Rendering SmartCare page");
            html! { <SmartCareSite /> }
        }
        Route::IndexHtml | Route::NotFound => {
            info!("Redirecting to Home page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let toasts = use_state(ToastHost::new);

    {
        let toasts = (*toasts).clone();
        use_effect_with_deps(
            move |_| {
                let page_events = toasts.listen_for_page_events();
                move || {
                    drop(page_events);
                    toasts.shutdown();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ToastHost> context={(*toasts).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<ToastHost>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
