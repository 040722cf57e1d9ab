//! TopUp Shop - root component and routes

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, Toaster};
use crate::pages::{AuthPage, DashboardPage, ProductDetailPage, ProductsPage};
use crate::state::notice::provide_notice_context;
use crate::state::purchases::provide_purchases_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    provide_notice_context();
    let wallet = provide_wallet_context();
    provide_purchases_context(wallet);

    view! {
        <Router>
            <Navbar/>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=ProductsPage/>
                <Route path=path!("/product/:id") view=ProductDetailPage/>
                <Route path=path!("/auth") view=AuthPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
            </Routes>
            <Toaster/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="container center">
            <h1>"404"</h1>
            <p class="muted">"Page not found"</p>
            <A href="/">
                <span class="btn btn-primary">"Back to the shop"</span>
            </A>
        </main>
    }
}
