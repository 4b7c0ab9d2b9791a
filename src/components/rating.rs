use leptos::*;

pub fn star_is_filled(star: u8, rating: u8) -> bool {
    star >= 1 && star <= rating
}

/// Read-only five-star display; `rating` stars are filled, the rest greyed.
#[component]
pub fn RatingStars(rating: u8) -> impl IntoView {
    view! {
        <div class="flex" aria-label=format!("{} out of 5", rating)>
            {(1..=5u8).map(|star| {
                let class = if star_is_filled(star, rating) {
                    "text-amber-300"
                } else {
                    "text-slate-600"
                };
                view! { <span class=class>"★"</span> }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn RatingInput(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="flex gap-1">
            {(1..=5u8).map(|star| {
                view! {
                    <button
                        type="button"
                        class=move || if star_is_filled(star, value.get()) {
                            "text-2xl text-amber-300"
                        } else {
                            "text-2xl text-slate-600 hover:text-slate-400"
                        }
                        on:click=move |_| value.set(star)
                        aria-label=format!("Rate {} out of 5", star)
                    >
                        "★"
                    </button>
                }
            }).collect_view()}
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rating_three_renders_three_filled_and_two_empty() {
        let html = render_to_string(|| view! { <RatingStars rating=3u8/> });
        assert_eq!(html.matches("text-amber-300").count(), 3);
        assert_eq!(html.matches("text-slate-600").count(), 2);
    }

    #[test]
    fn rating_zero_renders_no_filled_stars() {
        let html = render_to_string(|| view! { <RatingStars rating=0u8/> });
        assert_eq!(html.matches("text-amber-300").count(), 0);
        assert_eq!(html.matches("text-slate-600").count(), 5);
    }
}
