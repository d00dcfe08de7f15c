use shared::catalog::{catalog, filter_catalog, Favorites};
use shared::{CatalogItem, CategoryFilter, Screen};
use yew::prelude::*;

use super::header::{render_header, Link};

pub fn render_rating(rating: f32) -> Html {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    html! {
        <div class="rating">
            { for (0..5).map(|i| html! {
                <i class={classes!("fa-star", if i < full { "fa-solid" } else { "fa-regular" })}></i>
            })}
            <span class="hint small">{ format!(" {:.1}", rating) }</span>
        </div>
    }
}

#[function_component(RecommendationsScreen)]
pub fn recommendations_screen() -> Html {
    let items = use_memo((), |_| catalog());
    let filter = use_state(CategoryFilter::default);
    let favorites = use_state(Favorites::default);

    let tabs = CategoryFilter::TABS.iter().map(|&tab| {
        let onclick = {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| filter.set(tab))
        };
        html! {
            <button class={classes!("tab", (*filter == tab).then_some("active"))} {onclick}>{ tab.label() }</button>
        }
    });

    let cards = filter_catalog(&items, *filter)
        .into_iter()
        .map(|item| render_card(item, &favorites))
        .collect::<Html>();

    let action = html! {
        <span class="hint small">{ format!("{} saved", favorites.len()) }</span>
    };

    html! {
        <div class="screen">
            { render_header("Recommended Footwear", Some(Screen::Analysis), action) }
            <section class="notice info">
                <h3>{"Personalized Recommendations"}</h3>
                <p>
                    {"Based on your foot analysis, we've selected footwear options that address your \
                      specific needs, including support for high arches, extra width, and cushioning \
                      for pressure points."}
                </p>
            </section>
            <div class="tabs">{ for tabs }</div>
            <main class="screen-body">{ cards }</main>
        </div>
    }
}

fn render_card(item: &CatalogItem, favorites: &UseStateHandle<Favorites>) -> Html {
    let id = item.id;
    let is_favorite = favorites.contains(id);
    let on_favorite = {
        let favorites = favorites.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*favorites).clone();
            next.toggle(id);
            favorites.set(next);
        })
    };

    html! {
        <article class="card shoe-card" key={id}>
            <div class="shoe-image">
                <i class="fa-solid fa-shoe-prints fa-3x"></i>
                <button
                    class={classes!("favorite", is_favorite.then_some("active"))}
                    onclick={on_favorite}
                    aria-label="Toggle favorite"
                >
                    <i class={classes!("fa-heart", if is_favorite { "fa-solid" } else { "fa-regular" })}></i>
                </button>
            </div>
            <div class="condition-head">
                <h3>{ item.name.clone() }</h3>
                <span class="price">{ format!("${:.2}", item.price) }</span>
            </div>
            { render_rating(item.rating) }
            <h4>{"Key Features:"}</h4>
            <ul class="features">
                { for item.features.iter().map(|f| html! { <li>{ f.clone() }</li> }) }
            </ul>
            <Link to={Screen::ShoeDetail(id.to_string())} class="btn btn-primary btn-block">
                {"View Details"}
            </Link>
        </article>
    }
}
