//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast::Toaster;
use crate::net::api::MockBackend;
use crate::pages::{
    artwork::ArtworkPage, create::CreatePage, explore::ExplorePage, home::HomePage, login::LoginPage,
    profile::ProfilePage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::{dark_mode, session};

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(MockBackend::new());

    // Restore the persisted session once, then let route guards take over.
    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get() {
            return;
        }
        restored.set(true);
        let user = session::load();
        auth.update(|state| {
            state.user = user;
            state.loading = false;
        });

        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sketchsocial.css"/>
        <Title text="SketchSocial"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("explore") view=ExplorePage/>
                <Route path=StaticSegment("create") view=CreatePage/>
                <Route path=(StaticSegment("artwork"), ParamSegment("id")) view=ArtworkPage/>
                <Route path=(StaticSegment("user"), ParamSegment("id")) view=ProfilePage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
