//! App Root Component
//!
//! Routing and the services handed to every page.

use chatterbox::auth::restore_session;
use chatterbox::routes::Route as AppRoute;
use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Feed, ForgotPassword, Login, Register};
use crate::state::AppServices;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let services = AppServices::new();

    // Resolve a stored token into a signed-in session
    let client = services.client();
    spawn_local(async move {
        let session = restore_session(&*client).await;
        if session.is_signed_in() {
            services.session.set(session);
        }
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white">
                <main class="container mx-auto px-4 py-8">
                    <Routes>
                        <Route path=AppRoute::Login.path() view=move || view! { <Login services=services /> } />
                        <Route path=AppRoute::Register.path() view=move || view! { <Register services=services /> } />
                        <Route
                            path=AppRoute::ForgotPassword.path()
                            view=move || view! { <ForgotPassword services=services /> }
                        />
                        <Route path=AppRoute::Feed.path() view=move || view! { <Feed services=services /> } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast toasts=services.toasts />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AppRoute::Login.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to sign in"
            </A>
        </div>
    }
}
