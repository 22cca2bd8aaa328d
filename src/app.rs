//! Root application component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::{Footer, Header, Loader, SiteStyles};
use crate::pages::HomePage;
use crate::state::provide_page_state;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_page_state();

    view! {
        <Title text="Pulse Golf League"/>
        <Router>
            <div class="app-container">
                <SiteStyles/>
                <Loader/>
                <Header/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to the course"</A>
        </div>
    }
}
