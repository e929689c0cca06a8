use log::{info, warn};
use yew::prelude::*;

use crate::browser::lifecycle::{report_load_time, watch_visibility};
use crate::browser::reveal::RevealHost;
use crate::interaction::reveal::ObserverOptions;
use crate::site::Site;

/// Wires the page-level effects once the page is mounted. Each feature
/// degrades on its own: without intersection support the cards are simply
/// shown.
#[hook]
pub fn use_site_bootstrap(site: Site) {
    use_effect_with_deps(
        move |site| {
            let reveal = match RevealHost::bootstrap(site.reveal_groups(), ObserverOptions::default()) {
                Ok(host) => Some(host),
                Err(e) => {
                    warn!("Reveal animations disabled: {}", e);
                    None
                }
            };
            let visibility = watch_visibility();
            let load_time = report_load_time();
            info!("🚀 {} initialized successfully!", site.brand());

            move || {
                if let Some(reveal) = reveal {
                    reveal.shutdown();
                }
                drop(visibility);
                drop(load_time);
            }
        },
        site,
    );
}
