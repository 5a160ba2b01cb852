use crate::shared::icons::icon;
use contracts::shared::pagination::PageLink;
use leptos::prelude::*;

/// Numbered page strip with previous/next buttons.
///
/// `links` is the precomputed strip (pages and ellipsis markers); pages are
/// 1-based. Nothing is rendered for a single page.
#[component]
pub fn PaginationControls(
    #[prop(into)] links: Signal<Vec<PageLink>>,

    #[prop(into)] has_previous: Signal<bool>,

    #[prop(into)] has_next: Signal<bool>,

    /// Called with the 1-based page number
    on_page_change: Callback<usize>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    let single_page = move || links.with(|l| l.len() <= 1);

    view! {
        <Show when=move || !single_page()>
            <nav class="pagination-controls" aria-label="Pagination">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_previous.run(())
                    disabled=move || !has_previous.get()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    links
                        .get()
                        .into_iter()
                        .map(|link| match link {
                            PageLink::Page { number, active } => view! {
                                <button
                                    class="pagination-btn"
                                    class:pagination-btn--active=active
                                    aria-current=if active { Some("page") } else { None }
                                    on:click=move |_| on_page_change.run(number)
                                >
                                    {number.to_string()}
                                </button>
                            }
                            .into_any(),
                            PageLink::Ellipsis => view! {
                                <span class="pagination-ellipsis">"…"</span>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| on_next.run(())
                    disabled=move || !has_next.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
