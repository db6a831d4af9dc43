//! Feed Page
//!
//! Latest posts. Selecting one opens it in the post detail modal.

use chatterbox::auth;
use chatterbox::posts::fetch_feed;
use chatterbox::routes::Route as AppRoute;
use chatterbox::{CredentialProvider, Post};
use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Avatar, PostCard, PostDetail, Spinner, SpinnerSize};
use crate::state::AppServices;

#[component]
pub fn Feed(services: AppServices) -> impl IntoView {
    if services.client().credentials().access_token().is_none() {
        return view! { <Redirect path=AppRoute::Login.path() /> }.into_view();
    }

    let posts = create_rw_signal(Vec::<Post>::new());
    let page = create_rw_signal(1u32);
    let loading = create_rw_signal(false);
    let exhausted = create_rw_signal(false);
    let selected = create_rw_signal(None::<Post>);
    let navigate = use_navigate();

    // Fetch a page whenever the requested page changes
    create_effect(move |_| {
        let page = page.get();
        let client = services.client();
        loading.set(true);
        spawn_local(async move {
            match fetch_feed(&*client, page).await {
                Ok(batch) => {
                    if batch.is_empty() {
                        exhausted.set(true);
                    }
                    posts.update(|posts| {
                        for post in batch {
                            if !posts.iter().any(|p| p.id == post.id) {
                                posts.push(post);
                            }
                        }
                    });
                }
                Err(e) => {
                    api::log_error("Failed to fetch posts", &e);
                    services.toasts.show_error("Could not load posts");
                }
            }
            loading.set(false);
        });
    });

    let on_logout = move |_| {
        let client = services.client();
        let mut session = services.session.get_untracked();
        if let Err(e) = auth::logout(client.credentials(), &mut session) {
            api::log_error("Logout failed", &e);
            services.toasts.show_error("Could not sign out");
            return;
        }
        services.session.set(session);
        navigate(AppRoute::Login.path(), Default::default());
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Feed"</h1>
                <div class="flex items-center space-x-3">
                    {move || services.session.with(|s| {
                        s.profile().map(|profile| view! {
                            <Avatar
                                name=profile.display_name.clone()
                                url=profile.avatar_url.clone()
                                size="w-8 h-8"
                            />
                            <span class="text-sm text-gray-300">{profile.display_name.clone()}</span>
                        })
                    })}
                    <button
                        type="button"
                        on:click=on_logout
                        class="px-3 py-1.5 text-sm bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                    >
                        "Sign out"
                    </button>
                </div>
            </div>

            <div class="space-y-4">
                <For
                    each=move || posts.get()
                    key=|post| post.id.clone()
                    children=move |post| view! {
                        <PostCard post=post on_open=move |post: Post| selected.set(Some(post)) />
                    }
                />
            </div>

            <Show when=move || loading.get()>
                <Spinner size=SpinnerSize::Block label="Loading posts..." />
            </Show>

            <Show when=move || !loading.get() && !exhausted.get() && !posts.with(Vec::is_empty)>
                <button
                    type="button"
                    on:click=move |_| page.update(|p| *p += 1)
                    class="w-full py-2 text-sm text-primary-400 hover:text-primary-300"
                >
                    "Load more posts"
                </button>
            </Show>

            <Show when=move || !loading.get() && posts.with(Vec::is_empty)>
                <p class="text-center text-gray-500 py-12">"Nothing here yet"</p>
            </Show>

            {move || selected.get().map(|post| view! {
                <PostDetail services=services post=post on_close=move |_: ()| selected.set(None) />
            })}
        </div>
    }
    .into_view()
}
