use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::logo::Logo;
use crate::config;
use crate::Route;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #EAEAEA;
                    border-top: 1px solid #e5e7eb;
                    padding: 3rem 1.5rem;
                }
                .site-footer-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }
                .site-footer .brand {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .site-footer .brand svg {
                    width: 9rem;
                    height: auto;
                    color: #0A0A0A;
                }
                .site-footer .brand p,
                .site-footer .legal {
                    color: #6b7280;
                    font-size: 0.95rem;
                    margin: 0;
                }
                .site-footer .social {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    background: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #4b5563;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .site-footer .social:hover {
                    background: #000;
                    color: #fff;
                    transform: translateY(-4px);
                }
                .site-footer .legal {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .site-footer .legal a {
                    color: inherit;
                    text-decoration: none;
                }
                .site-footer .legal a:hover {
                    color: #000;
                }
                @media (max-width: 767px) {
                    .site-footer-inner,
                    .site-footer .legal {
                        flex-direction: column;
                        text-align: center;
                    }
                    .site-footer .brand {
                        align-items: center;
                    }
                }
                "#}
            </style>
            <div class="site-footer-inner">
                <div class="brand">
                    <Logo />
                    <p>{config::TAGLINE}</p>
                </div>
                <a
                    class="social"
                    href={config::INSTAGRAM_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Follow us on Instagram"
                >
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <rect x="2" y="2" width="20" height="20" rx="5" ry="5" />
                        <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                        <line x1="17.5" y1="6.5" x2="17.51" y2="6.5" />
                    </svg>
                </a>
                <div class="legal">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms & Conditions"}</Link<Route>>
                    <span>{config::COPYRIGHT}</span>
                </div>
            </div>
        </footer>
    }
}
