//! "Add product" form with drag-and-drop image intake.

use chrono::Utc;
use leptos::*;
use leptos_router::*;
use web_sys::FileList;

use marketplace_listing::{
    Condition, DraftError, DraftField, DraftProduct, ListingCategory, LogSink, SubmissionReceipt, SubmitError,
};

use crate::frontend::app::use_store;
use crate::frontend::file_reader;
use crate::routes::AppRoute;

#[component]
pub fn AddProductPage() -> impl IntoView {
    let draft = create_rw_signal(DraftProduct::new());
    let drag_over = create_rw_signal(false);
    let errors = create_rw_signal(None::<DraftError>);
    let receipt = create_rw_signal(None::<SubmissionReceipt>);
    let file_input = create_node_ref::<html::Input>();
    let currency = use_store().currency_symbol();

    // Each file decodes independently; images land in completion order.
    let intake = move |list: Option<FileList>| {
        let files = file_reader::collect_files(list);
        if files.is_empty() {
            return;
        }
        let Some(ticket) = draft.try_update(|d| d.begin_intake(files.len())) else {
            return;
        };
        for file in files {
            spawn_local(async move {
                let decoded = file_reader::read_image(file).await;
                // The form may have been left while the read was in flight.
                let _ = draft.try_update(|d| d.complete_decode(ticket, decoded));
            });
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match draft.try_update(|d| d.submit(&LogSink, Utc::now())) {
            Some(Ok(done)) => {
                errors.set(None);
                receipt.set(Some(done));
            }
            Some(Err(SubmitError::Invalid(e))) => {
                receipt.set(None);
                errors.set(Some(e));
            }
            Some(Err(e)) => tracing::warn!(error = %e, "listing submission failed"),
            None => {}
        }
    };

    let field_error = move |field: DraftField| {
        move || {
            errors.with(|e| {
                e.as_ref()
                    .and_then(|e| e.for_field(field))
                    .map(|msg| view! { <p class="field-error">{msg.to_string()}</p> })
            })
        }
    };

    view! {
        <div class="container narrow page">
            <div class="page-header">
                <A href=AppRoute::Home.path() class="btn btn-ghost btn-glass">"← Back"</A>
                <div>
                    <h1>"Add New Product"</h1>
                    <p class="muted">"Fill in the details to list your product"</p>
                </div>
            </div>

            {move || receipt.get().map(|r| view! {
                <div class="notice glass-card">
                    {format!("Listing submitted with {} image(s).", r.image_count)}
                </div>
            })}

            <form class="glass-card form animate-scale-in" on:submit=on_submit>
                <div class="form-section">
                    <label class="label-lg">"Product Images"</label>

                    <div
                        class=move || if drag_over.get() { "dropzone dropzone-active" } else { "dropzone" }
                        on:dragover=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            drag_over.set(true);
                        }
                        on:dragleave=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            drag_over.set(false);
                        }
                        on:drop=move |ev: ev::DragEvent| {
                            ev.prevent_default();
                            drag_over.set(false);
                            intake(ev.data_transfer().and_then(|dt| dt.files()));
                        }
                    >
                        <span class="dropzone-icon">"⇪"</span>
                        <h3>"Upload Product Images"</h3>
                        <p class="muted">"Drag and drop images here, or click to browse"</p>
                        <button
                            type="button"
                            class="btn btn-outline btn-glass"
                            on:click=move |_| {
                                if let Some(input) = file_input.get() {
                                    input.click();
                                }
                            }
                        >
                            "+ Add Images"
                        </button>
                        <input
                            node_ref=file_input
                            type="file"
                            multiple=true
                            accept="image/*"
                            class="hidden"
                            on:change=move |ev| {
                                let input: web_sys::HtmlInputElement = event_target(&ev);
                                intake(input.files());
                                input.set_value("");
                            }
                        />
                    </div>

                    {move || {
                        let pending = draft.with(|d| d.pending_decodes());
                        (pending > 0).then(|| view! { <p class="muted">{format!("Reading {pending} image(s)…")}</p> })
                    }}

                    {move || {
                        draft.with(|d| {
                            (!d.images().is_empty()).then(|| {
                                let previews = d
                                    .images()
                                    .iter()
                                    .enumerate()
                                    .map(|(index, image)| {
                                        view! {
                                            <div class="preview">
                                                <img src=image.as_str().to_string() alt=format!("Product {}", index + 1)/>
                                                <button
                                                    type="button"
                                                    class="btn btn-destructive preview-remove"
                                                    aria-label="Remove image"
                                                    on:click=move |_| draft.update(|d| {
                                                        d.remove_image(index);
                                                    })
                                                >
                                                    "✕"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view();
                                view! { <div class="preview-grid">{previews}</div> }
                            })
                        })
                    }}
                </div>

                <div class="form-section">
                    <label for="title" class="label-lg">"Product Title"</label>
                    <input
                        id="title"
                        class="glass-input"
                        placeholder="Enter product title"
                        required=true
                        prop:value=move || draft.with(|d| d.title().to_string())
                        on:input=move |ev| draft.update(|d| d.set_title(event_target_value(&ev)))
                    />
                    {field_error(DraftField::Title)}
                </div>

                <div class="form-grid">
                    <div class="form-section">
                        <label for="category" class="label-lg">"Category"</label>
                        <select
                            id="category"
                            class="glass-input"
                            prop:value=move || draft.with(|d| d.category().map(|c| c.label()).unwrap_or_default().to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set_category(value.parse().ok()));
                            }
                        >
                            <option value="">"Select category"</option>
                            {ListingCategory::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-section">
                        <label for="condition" class="label-lg">"Condition"</label>
                        <select
                            id="condition"
                            class="glass-input"
                            prop:value=move || draft.with(|d| d.condition().map(|c| c.slug()).unwrap_or_default().to_string())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.set_condition(value.parse::<Condition>().ok()));
                            }
                        >
                            <option value="">"Select condition"</option>
                            {Condition::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.slug()>{c.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-section">
                    <label for="price" class="label-lg">"Price"</label>
                    <div class="price-input">
                        <span class="muted currency">{currency}</span>
                        <input
                            id="price"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            class="glass-input"
                            required=true
                            prop:value=move || draft.with(|d| d.price_text().to_string())
                            on:input=move |ev| draft.update(|d| d.set_price_text(event_target_value(&ev)))
                        />
                    </div>
                    {field_error(DraftField::Price)}
                </div>

                <div class="form-section">
                    <label for="description" class="label-lg">"Description"</label>
                    <textarea
                        id="description"
                        class="glass-input"
                        placeholder="Describe your product in detail..."
                        required=true
                        prop:value=move || draft.with(|d| d.description().to_string())
                        on:input=move |ev| draft.update(|d| d.set_description(event_target_value(&ev)))
                    ></textarea>
                    {field_error(DraftField::Description)}
                </div>

                <div class="form-actions">
                    <A href=AppRoute::Home.path() class="btn btn-outline btn-glass grow">"Cancel"</A>
                    <button type="submit" class="btn btn-primary grow">"List Product"</button>
                </div>
            </form>
        </div>
    }
}
