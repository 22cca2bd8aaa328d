//! Embedded site styles

use leptos::prelude::*;

/// Page CSS carried inline: loader, hamburger, hero, reveal transitions.
/// The hosting shell supplies fonts and resets.
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .app-container {
                overflow-x: hidden;
                color: #f5f5f0;
                background: #0b1f14;
            }

            /* Loader */
            .loader {
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                background: #0b1f14;
            }

            @keyframes loader-bounce {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-28px); }
            }

            .loader-golf-ball {
                width: 42px;
                height: 42px;
                border-radius: 50%;
                background: radial-gradient(circle at 35% 30%, #ffffff, #cfd4cf 70%);
                box-shadow: 0 18px 10px -10px rgba(0, 0, 0, 0.45);
                animation: loader-bounce 0.9s ease-in-out infinite;
            }

            /* Header */
            .header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 0 24px;
                background: rgba(11, 31, 20, 0.85);
                backdrop-filter: blur(8px);
            }

            .logo-image {
                height: 100px;
                display: block;
            }

            .hamburger {
                display: none;
                flex-direction: column;
                gap: 5px;
                padding: 10px;
                background: none;
                border: none;
                cursor: pointer;
            }

            .hamburger span {
                width: 26px;
                height: 3px;
                background: #f5f5f0;
                border-radius: 2px;
                transition: transform 0.3s ease, opacity 0.3s ease;
            }

            .hamburger.open span:nth-child(1) { transform: translateY(8px) rotate(45deg); }
            .hamburger.open span:nth-child(2) { opacity: 0; }
            .hamburger.open span:nth-child(3) { transform: translateY(-8px) rotate(-45deg); }

            .nav-list {
                display: flex;
                gap: 32px;
                list-style: none;
                margin: 0;
                padding: 0;
            }

            .nav-link {
                color: #f5f5f0;
                text-decoration: none;
                font-weight: 600;
                letter-spacing: 0.04em;
                transition: color 0.2s ease;
            }

            .nav-link:hover { color: #3ddc84; }

            @media (max-width: 768px) {
                .hamburger { display: flex; }
                .nav {
                    position: fixed;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    width: 70vw;
                    padding-top: 120px;
                    background: rgba(11, 31, 20, 0.97);
                    transform: translateX(100%);
                    transition: transform 0.3s ease;
                }
                .nav.open { transform: translateX(0); }
                .nav-list {
                    flex-direction: column;
                    align-items: center;
                }
            }

            /* Hero */
            .hero {
                position: relative;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                min-height: 100vh;
                text-align: center;
                padding: 0 24px;
                overflow: hidden;
                background-image: linear-gradient(180deg, #123524 0%, #0b1f14 100%);
            }

            .hero-video {
                position: absolute;
                inset: 0;
                width: 100%;
                height: 100%;
                object-fit: cover;
            }

            .hero-overlay {
                position: absolute;
                inset: 0;
                background: rgba(5, 14, 9, 0.55);
            }

            .hero-title {
                position: relative;
                font-size: clamp(2.5rem, 7vw, 5rem);
                margin: 0 0 16px;
            }

            .logo-highlight { color: #3ddc84; }

            .hero-text {
                position: relative;
                font-size: 1.25rem;
                margin: 0 0 32px;
                color: #d8e0d8;
            }

            .cta-button {
                position: relative;
                padding: 14px 40px;
                font-size: 1rem;
                font-weight: 700;
                color: #0b1f14;
                background: #3ddc84;
                border: none;
                border-radius: 999px;
                cursor: pointer;
                transition: transform 0.2s ease, background 0.2s ease;
            }

            .cta-button:hover {
                transform: scale(1.05);
                background: #5ae69a;
            }

            @keyframes fade-in {
                from { opacity: 0; transform: translateY(16px); }
                to { opacity: 1; transform: translateY(0); }
            }

            .animate-fade-in { animation: fade-in 0.8s ease-out both; }
            .animate-fade-in-slow { animation: fade-in 1.6s ease-out both; }

            @keyframes heartbeat {
                0%, 40%, 80%, 100% { transform: scale(1); }
                20%, 60% { transform: scale(1.12); }
            }

            .animate-heartbeat {
                display: inline-block;
                animation: heartbeat 2.4s ease-in-out infinite;
            }

            /* Features */
            .features {
                position: relative;
                padding: 120px 24px;
                overflow: hidden;
            }

            .features-backdrop {
                position: absolute;
                inset: -20% 0;
                background: radial-gradient(ellipse at center, rgba(61, 220, 132, 0.08), transparent 70%);
                pointer-events: none;
            }

            .features-title {
                position: relative;
                text-align: center;
                font-size: 2.25rem;
                margin: 0 0 64px;
            }

            .feature-grid {
                position: relative;
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                gap: 32px;
                max-width: 1100px;
                margin: 0 auto;
            }

            .feature-card {
                padding: 32px;
                border: 1px solid rgba(61, 220, 132, 0.25);
                border-radius: 16px;
                background: rgba(18, 53, 36, 0.6);
                opacity: 0;
                transform: translateY(40px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .feature-card.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .feature-card-title {
                margin: 0 0 12px;
                color: #3ddc84;
            }

            /* Footer */
            .footer {
                padding: 40px 24px;
                text-align: center;
                color: #9fb3a4;
                border-top: 1px solid rgba(61, 220, 132, 0.15);
            }

            /* Not found */
            .not-found {
                min-height: 60vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 12px;
                padding: 160px 24px 80px;
            }
            "#
        </style>
    }
}
