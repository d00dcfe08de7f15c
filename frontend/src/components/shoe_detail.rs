use shared::catalog::{shoe_details, shoe_or_first, DetailTab, SelectionChange, ShoeSelection};
use shared::{Screen, ShoeDetail};
use strum::IntoEnumIterator;
use yew::prelude::*;

use super::header::render_header;
use super::recommendations::render_rating;

#[derive(Properties, PartialEq)]
pub struct ShoeDetailProps {
    pub id: AttrValue,
}

/// Detail page for one shoe. Unknown ids show the first record.
#[function_component(ShoeDetailScreen)]
pub fn shoe_detail_screen(props: &ShoeDetailProps) -> Html {
    let details = use_memo((), |_| shoe_details());
    let selection = use_state(ShoeSelection::default);

    let Some(shoe) = shoe_or_first(&details, &props.id) else {
        return html! {
            <div class="screen centered"><p>{"Product not found"}</p></div>
        };
    };

    let update = {
        let selection = selection.clone();
        move |change: SelectionChange| {
            let selection = selection.clone();
            Callback::from(move |_: MouseEvent| selection.set(selection.apply(change.clone())))
        }
    };

    let favorite_button = html! {
        <button
            class={classes!("icon-button", "favorite", selection.favorite.then_some("active"))}
            onclick={update(SelectionChange::ToggleFavorite)}
            aria-label="Toggle favorite"
        >
            <i class={classes!("fa-heart", if selection.favorite { "fa-solid" } else { "fa-regular" })}></i>
        </button>
    };

    let tabs = DetailTab::iter().map(|t| {
        let onclick = update(SelectionChange::Tab(t));
        html! {
            <button class={classes!("tab", (selection.tab == t).then_some("active"))} {onclick}>{ t.as_ref() }</button>
        }
    });

    let body = match selection.tab {
        DetailTab::Details => render_details(shoe, &selection, &update),
        DetailTab::Features => html! {
            <>
                <ul class="features">
                    { for shoe.features.iter().map(|f| html! {
                        <li><i class="fa-solid fa-circle-check"></i>{" "}{ f.clone() }</li>
                    })}
                </ul>
                <section class="notice info">
                    <h3>{"Why These Features Matter"}</h3>
                    <p>
                        {"These specialized features are specifically designed to address the foot issues \
                          identified in your scan, providing optimal support and reducing the risk of complications."}
                    </p>
                </section>
            </>
        },
        DetailTab::Benefits => html! {
            <>
                <section class="notice success">
                    <h3>{"Personalized Benefits"}</h3>
                    <p>
                        {"Based on your foot scan analysis, this footwear provides specific benefits to address \
                          your unique foot conditions."}
                    </p>
                </section>
                <ul class="features">
                    { for shoe.benefits.iter().map(|b| html! {
                        <li><i class="fa-solid fa-check"></i>{" "}{ b.clone() }</li>
                    })}
                </ul>
            </>
        },
    };

    html! {
        <div class="screen">
            { render_header("Product Details", Some(Screen::Recommendations), favorite_button) }
            <div class="shoe-image large"><i class="fa-solid fa-shoe-prints fa-4x"></i></div>
            <main class="screen-body">
                <div class="condition-head">
                    <h2>{ shoe.name.clone() }</h2>
                    <span class="price">{ format!("${:.2}", shoe.price) }</span>
                </div>
                { render_rating(shoe.rating) }
                <div class="tabs">{ for tabs }</div>
                { body }
            </main>
            <footer class="screen-footer">
                <button class="btn btn-primary btn-block">
                    <i class="fa-solid fa-cart-shopping"></i>{ format!(" Add to Cart - ${:.2}", shoe.price) }
                </button>
            </footer>
        </div>
    }
}

fn render_details<F>(shoe: &ShoeDetail, selection: &ShoeSelection, update: &F) -> Html
where
    F: Fn(SelectionChange) -> Callback<MouseEvent>,
{
    html! {
        <>
            <p>{ shoe.description.clone() }</p>
            <h3>{"Size"}</h3>
            <div class="chips">
                { for shoe.sizes.iter().map(|&size| html! {
                    <button
                        class={classes!("chip", (selection.size == Some(size)).then_some("active"))}
                        onclick={update(SelectionChange::Size(size))}
                    >
                        { size.to_string() }
                    </button>
                })}
            </div>
            <h3>{"Color"}</h3>
            <div class="chips">
                { for shoe.colors.iter().map(|color| html! {
                    <button
                        class={classes!("chip", (selection.color.as_deref() == Some(color.as_str())).then_some("active"))}
                        onclick={update(SelectionChange::Color(color.clone()))}
                    >
                        { color.clone() }
                    </button>
                })}
            </div>
        </>
    }
}
