//! Site footer

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 Pulse Golf League. All rights reserved."</p>
        </footer>
    }
}
