use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;

use crate::browser::dom::scroll_to_section;
use crate::browser::listener::ListenerGuard;
use crate::browser::timers::{DebouncedFn, ThrottledFn};
use crate::config::{MOBILE_BREAKPOINT_PX, RESIZE_DEBOUNCE_MS};
use crate::interaction::navigation::{hamburger_span_style, header_style, HEADER_THROTTLE_MS};
use crate::site::Site;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub site: Site,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let scroll_y = use_state_eq(|| 0.0_f64);
    let menu_open = use_state_eq(|| false);

    {
        let scroll_y = scroll_y.clone();
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let throttled = ThrottledFn::new(HEADER_THROTTLE_MS, move |y: f64| scroll_y.set(y));
                let on_scroll = window().and_then(|window| {
                    let target = window.clone();
                    ListenerGuard::new(&target, "scroll", move |_: Event| {
                        throttled.call(window.scroll_y().unwrap_or(0.0));
                    })
                });

                let debounced = DebouncedFn::new(RESIZE_DEBOUNCE_MS, move |width: f64| {
                    if width > MOBILE_BREAKPOINT_PX {
                        menu_open.set(false);
                    }
                });
                let on_resize = window().and_then(|window| {
                    let target = window.clone();
                    ListenerGuard::new(&target, "resize", move |_: Event| {
                        let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
                        debounced.call(width);
                    })
                });

                move || {
                    drop(on_scroll);
                    drop(on_resize);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = props.site.nav_links().iter().map(|(label, anchor)| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(anchor);
        });
        html! {
            <li><a class="nav-link" href={*anchor} {onclick}>{*label}</a></li>
        }
    });

    html! {
        <header class="header" style={header_style(*scroll_y).to_css()}>
            <nav class="nav">
                <a class="nav-logo" href="#home">{props.site.brand()}</a>
                <ul class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for links }
                </ul>
                <button class={classes!("hamburger", (*menu_open).then(|| "active"))} onclick={toggle_menu} aria-label="Toggle navigation">
                    { for (0..3).map(|i| html! {
                        <span style={hamburger_span_style(i, *menu_open).to_css()}></span>
                    }) }
                </button>
            </nav>
        </header>
    }
}
