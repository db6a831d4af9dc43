//! Comment Form Component
//!
//! Text plus an optional image, posted to the open post.

use chatterbox::comment::{content_type_for, COMMENT_POSTED, IMAGE_UPLOAD_FAILED};
use chatterbox::{CommentDraft, ImageAttachment};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::components::{Avatar, Spinner};
use crate::state::AppServices;

#[component]
pub fn CommentForm(
    services: AppServices,
    post_id: String,
    #[prop(into)]
    on_posted: Callback<()>,
) -> impl IntoView {
    let draft = create_rw_signal(CommentDraft::new());
    let preview = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);
    let post_id = store_value(post_id);

    on_cleanup(move || revoke_preview(preview));

    let on_file = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Let the same file be picked again after removal
        input.set_value("");

        spawn_local(async move {
            match read_image(&file).await {
                Ok(image) => {
                    revoke_preview(preview);
                    preview.set(web_sys::Url::create_object_url_with_blob(&file).ok());
                    draft.update(|d| d.attach_image(image));
                }
                Err(e) => {
                    web_sys::console::error_1(&e);
                    services.toasts.show_error("Could not read the selected image");
                }
            }
        });
    };

    let remove_image = move |_| {
        revoke_preview(preview);
        draft.update(CommentDraft::remove_image);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let mut pending = draft.get_untracked();
        if pending.is_empty() {
            return;
        }

        submitting.set(true);
        let client = services.client();
        let post_id = post_id.get_value();
        spawn_local(async move {
            match pending.submit(&*client, &post_id).await {
                Ok(report) => {
                    draft.set(pending);
                    revoke_preview(preview);
                    if report.image_dropped {
                        services.toasts.show_error(IMAGE_UPLOAD_FAILED);
                    }
                    services.toasts.show_success(COMMENT_POSTED);
                    on_posted.call(());
                }
                Err(e) => {
                    api::log_error("Error posting comment", &e);
                    services.toasts.show_error(&e.to_string());
                }
            }
            submitting.set(false);
        });
    };

    let avatar = move || services.session.with(|s| s.avatar_url().map(str::to_string));
    let name = move || {
        services
            .session
            .with(|s| s.display_name().unwrap_or_default().to_string())
    };

    view! {
        <form on:submit=on_submit class="space-y-2">
            <div class="flex items-start space-x-3">
                {move || view! { <Avatar name=name() url=avatar() size="w-8 h-8" /> }}

                <textarea
                    rows="2"
                    placeholder="Write a comment..."
                    disabled=move || submitting.get()
                    prop:value=move || draft.with(|d| d.content().to_string())
                    on:input=move |ev| draft.update(|d| d.set_content(event_target_value(&ev)))
                    class="flex-1 bg-gray-700 border border-gray-600 rounded-lg px-3 py-2 text-sm
                           resize-none focus:outline-none focus:border-primary-500"
                />
            </div>

            {move || preview.get().map(|src| view! {
                <div class="relative inline-block ml-11">
                    <img src=src alt="Selected image" class="h-20 rounded-lg object-cover" />
                    <button
                        type="button"
                        aria-label="Remove image"
                        disabled=move || submitting.get()
                        on:click=remove_image
                        class="absolute -top-2 -right-2 bg-gray-900 rounded-full w-6 h-6 text-xs"
                    >
                        "✕"
                    </button>
                </div>
            })}

            <div class="flex items-center justify-between ml-11">
                <label class="text-sm text-gray-400 hover:text-white cursor-pointer">
                    "📷 Add image"
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        disabled=move || submitting.get()
                        on:change=on_file
                    />
                </label>

                <button
                    type="submit"
                    disabled=move || submitting.get() || draft.with(CommentDraft::is_empty)
                    class="bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg px-4 py-1.5 text-sm font-semibold
                           flex items-center space-x-2"
                >
                    {move || if submitting.get() {
                        view! { <Spinner label="Posting..." /> }.into_view()
                    } else {
                        view! { <span>"Post"</span> }.into_view()
                    }}
                </button>
            </div>
        </form>
    }
}

async fn read_image(file: &web_sys::File) -> Result<ImageAttachment, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let name = file.name();
    let content_type = match file.type_() {
        t if t.is_empty() => content_type_for(&extension(&name)).to_string(),
        t => t,
    };
    Ok(ImageAttachment::new(&name, &content_type, bytes))
}

fn extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

fn revoke_preview(preview: RwSignal<Option<String>>) {
    if let Some(url) = preview.get_untracked() {
        let _ = web_sys::Url::revoke_object_url(&url);
        preview.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(extension("holiday.JPG"), "jpg");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("README"), "");
    }
}
