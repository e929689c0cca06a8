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
    ("🩺", "Vet-approved", "Every plan is reviewed by licensed veterinarians."),
    ("⏰", "Smart reminders", "Vaccinations, checkups and medication, never missed."),
    ("🐾", "For every pet", "Dogs, cats, rabbits and birds all have a plan."),
];

const CARE_PLANS: &[(&str, &str)] = &[
    ("Puppy & kitten", "First-year vaccinations, checkups and growth tracking."),
    ("Adult care", "Annual exams, dental cleaning and weight management."),
    ("Senior care", "Joint support, bloodwork and gentle monitoring."),
    ("Emergency line", "Around-the-clock advice from our care team."),
];

const PRODUCTS: &[(&str, &str, &str)] = &[
    ("Smart collar", "Activity and sleep tracking with a week of battery.", "$79"),
    ("Auto feeder", "Portioned meals on schedule, controlled from your phone.", "$129"),
    ("Water fountain", "Filtered, flowing water that pets actually drink.", "$49"),
];

#[function_component(SmartCareSite)]
pub fn smartcare_site() -> Html {
    let site = Site::SmartCare;
    use_site_bootstrap(site);

    html! {
        <>
            <SiteStyles {site} />
            <SiteHeader {site} />
            <EasterEgg message={site.easter_egg_message()} />

            <section id="home" class="hero">
                <h1>{"Smarter care for happier pets"}</h1>
                <p>{"SmartCare keeps your pet's health on track with reminders, vet-approved plans and connected gear."}</p>
                <div class="hero-buttons">
                    <RippleButton label="Choose a plan" href="#services" primary={true} />
                    <RippleButton label="Talk to us" href="#contact" />
                </div>
            </section>

            <section id="features">
                <h2>{"Why SmartCare"}</h2>
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
                <h2>{"Care plans"}</h2>
                <div class="card-grid">
                    { for CARE_PLANS.iter().map(|(title, text)| html! {
                        <div class="service-card">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="products">
                <h2>{"Products"}</h2>
                <div class="card-grid">
                    { for PRODUCTS.iter().map(|(name, text, price)| html! {
                        <div class="product-card">
                            <h3>{*name}</h3>
                            <p>{*text}</p>
                            <div class="price">{*price}</div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="newsletter">
                <h2>{"Pet care tips, monthly"}</h2>
                <p>{"One short email a month. No spam, unsubscribe anytime."}</p>
                <SiteForm kind={FormKind::Newsletter} />
            </section>

            <section id="contact">
                <h2>{"Questions about your pet?"}</h2>
                <SiteForm kind={FormKind::Contact} />
            </section>

            <SiteFooter {site} />
        </>
    }
}
