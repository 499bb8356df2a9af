//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{APP_NAME}</h3>
                    <p>
                        "Secure and instant file sharing platform. "
                        "Upload, share, and download files with ease."
                    </p>
                </div>
                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <a href="#" class="footer-link">"How it Works"</a>
                    <a href="#" class="footer-link">"Privacy Policy"</a>
                    <a href="#" class="footer-link">"Terms of Service"</a>
                    <a href="#" class="footer-link">"FAQ"</a>
                </div>
                <div class="footer-social">
                    <h4>"Connect"</h4>
                    <a href="#" class="footer-link">"GitHub"</a>
                    <a href="#" class="footer-link">"Twitter"</a>
                    <a href="#" class="footer-link">"Email"</a>
                </div>
            </div>
            <div class="footer-copyright">
                {format!("© {} {}. All rights reserved.", year, APP_NAME)}
            </div>
        </footer>
    }
}
