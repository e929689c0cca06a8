use yew::prelude::*;

use crate::interaction::style::RIPPLE_KEYFRAMES;
use crate::site::Site;

pub const BASE_CSS: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1f2937;
        background: #f9fafb;
    }
    body.easter-egg { animation: rainbow 4s linear infinite; }
    @keyframes rainbow {
        from { filter: hue-rotate(0deg); }
        to { filter: hue-rotate(360deg); }
    }
    .header {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 1000;
        backdrop-filter: blur(10px);
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .nav {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #4f46e5;
        text-decoration: none;
    }
    .nav-menu {
        display: flex;
        gap: 2rem;
        list-style: none;
        margin: 0;
        padding: 0;
    }
    .nav-link {
        color: #374151;
        text-decoration: none;
        font-weight: 500;
    }
    .nav-link:hover { color: #4f46e5; }
    .hamburger {
        display: none;
        flex-direction: column;
        gap: 4px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .hamburger span {
        width: 25px;
        height: 3px;
        background: #374151;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    section {
        padding: 6rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .hero {
        min-height: 90vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        text-align: center;
    }
    .hero h1 { font-size: 3rem; margin-bottom: 1rem; }
    .hero p { font-size: 1.25rem; color: #6b7280; }
    .hero-buttons {
        display: flex;
        gap: 1rem;
        justify-content: center;
        margin-top: 2rem;
    }
    .btn {
        display: inline-block;
        padding: 0.9rem 1.8rem;
        border-radius: 8px;
        border: 2px solid #4f46e5;
        color: #4f46e5;
        background: white;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
    }
    .btn-primary { background: #4f46e5; color: white; }
    .btn:disabled { opacity: 0.6; cursor: not-allowed; }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
        gap: 2rem;
    }
    .feature-card, .service-card, .product-card {
        background: white;
        border-radius: 12px;
        padding: 2rem;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
    }
    .product-card .price { font-size: 1.5rem; font-weight: 700; color: #4f46e5; }
    .contact-form, .newsletter-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        max-width: 560px;
    }
    .newsletter-form { flex-direction: row; }
    .contact-form input, .contact-form textarea, .newsletter-form input {
        padding: 0.9rem;
        border: 1px solid #d1d5db;
        border-radius: 8px;
        font: inherit;
    }
    .newsletter-form input { flex: 1; }
    footer {
        text-align: center;
        padding: 2rem;
        color: #9ca3af;
    }
    @media (max-width: 768px) {
        .hamburger { display: flex; }
        .nav-menu {
            position: fixed;
            top: 64px;
            left: -100%;
            width: 100%;
            flex-direction: column;
            background: white;
            padding: 2rem;
            transition: left 0.3s ease;
        }
        .nav-menu.active { left: 0; }
        .hero h1 { font-size: 2.2rem; }
        .newsletter-form { flex-direction: column; }
    }
"#;

const SMARTCARE_ACCENT_CSS: &str = r#"
    .nav-logo, .nav-link:hover, .product-card .price { color: #0d9488; }
    .btn { border-color: #0d9488; color: #0d9488; }
    .btn-primary { background: #0d9488; color: white; }
"#;

#[derive(Properties, PartialEq)]
pub struct SiteChromeProps {
    pub site: Site,
}

#[function_component(SiteStyles)]
pub fn site_styles(props: &SiteChromeProps) -> Html {
    let accent = match props.site {
        Site::Generic => "",
        Site::SmartCare => SMARTCARE_ACCENT_CSS,
    };
    html! {
        <style>
            {BASE_CSS}
            {RIPPLE_KEYFRAMES}
            {accent}
        </style>
    }
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteChromeProps) -> Html {
    html! {
        <footer>
            <p>{format!("© {} {}. All rights reserved.", chrono::Utc::now().format("%Y"), props.site.brand())}</p>
        </footer>
    }
}
