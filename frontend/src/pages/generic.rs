use yew::prelude::*;

use super::bootstrap::use_site_bootstrap;
use super::common::{SiteFooter, SiteStyles};
use crate::components::easter_egg::EasterEgg;
use crate::components::header::SiteHeader;
use crate::components::ripple_button::RippleButton;
use crate::components::site_form::SiteForm;
use crate::interaction::forms::FormKind;
use crate::site::Site;

const FEATURES: &[(&str, &str, &str)] = &[
    ("⚡", "Fast by default", "Pages load in a blink and stay responsive on any device."),
    ("🔒", "Secure", "Modern hosting with HTTPS everywhere and no tracking scripts."),
    ("📱", "Mobile first", "Every layout is designed for small screens before large ones."),
];

const SERVICES: &[(&str, &str)] = &[
    ("Web design", "Clean, conversion-focused landing pages tailored to your brand."),
    ("Development", "Hand-built sites with performance budgets that stay met."),
    ("Optimization", "Audits and fixes for speed, accessibility and search."),
    ("Support", "A real person answering your questions within one business day."),
];

#[function_component(GenericSite)]
pub fn generic_site() -> Html {
    let site = Site::Generic;
    use_site_bootstrap(site);

    html! {
        <>
            <SiteStyles {site} />
            <SiteHeader {site} />
            <EasterEgg message={site.easter_egg_message()} />

            <section id="home" class="hero">
                <h1>{"Websites that work as hard as you do"}</h1>
                <p>{"Brightline builds fast, friendly landing pages that turn visitors into customers."}</p>
                <div class="hero-buttons">
                    <RippleButton label="Get started" href="#contact" primary={true} />
                    <RippleButton label="Our services" href="#services" />
                </div>
            </section>

            <section id="features">
                <h2>{"Why Brightline"}</h2>
                <div class="card-grid">
                    { for FEATURES.iter().map(|(icon, title, text)| html! {
                        <div class="feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services">
                <h2>{"Services"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|(title, text)| html! {
                        <div class="service-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact">
                <h2>{"Get in touch"}</h2>
                <p>{"Tell us about your project and we will get back to you shortly."}</p>
                <SiteForm kind={FormKind::Contact} />
            </section>

            <SiteFooter {site} />
        </>
    }
}
