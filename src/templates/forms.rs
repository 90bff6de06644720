//! Form pages for creating and editing venues, artists, and shows. Each page
//! renders from the submitted (or pre-populated) payload so a failed
//! validation hands the user back their input.

use maud::{html, Markup};

use super::components::field_errors;
use super::layout::base_layout;
use crate::forms::{checkbox, ArtistForm, FieldError, ShowForm, VenueForm, GENRES, STATES};

fn text_input(label: &str, name: &str, value: &str, required: bool) -> Markup {
    html! {
        div {
            label for=(name) class="block text-sm font-medium text-gray-700 mb-1" {
                (label)
                @if required { span class="text-red-500" { " *" } }
            }
            input
                type="text"
                id=(name)
                name=(name)
                value=(value)
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
        }
    }
}

fn state_select(selected: &str) -> Markup {
    html! {
        div {
            label for="state" class="block text-sm font-medium text-gray-700 mb-1" {
                "State" span class="text-red-500" { " *" }
            }
            select name="state" id="state"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                option value="" { "Select a state" }
                @for state in STATES {
                    option value=(state) selected[*state == selected] { (state) }
                }
            }
        }
    }
}

fn genre_multiselect(selected: &[String]) -> Markup {
    html! {
        div {
            label for="genres" class="block text-sm font-medium text-gray-700 mb-1" { "Genres" }
            select name="genres" id="genres" multiple size="6"
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary" {
                @for genre in GENRES {
                    option value=(genre) selected[selected.iter().any(|g| g == genre)] { (genre) }
                }
            }
        }
    }
}

fn seeking_checkbox(label: &str, name: &str, checked: bool) -> Markup {
    html! {
        div class="flex items-center gap-2" {
            input type="checkbox" id=(name) name=(name) value="y" checked[checked];
            label for=(name) class="text-sm font-medium text-gray-700" { (label) }
        }
    }
}

fn submit_button(label: &str) -> Markup {
    html! {
        button type="submit" class="px-6 py-3 bg-gray-900 text-white rounded-md font-medium" {
            (label)
        }
    }
}

pub fn venue_form_page(
    heading: &str,
    action: &str,
    form: &VenueForm,
    errors: &[FieldError],
) -> Markup {
    base_layout(
        heading,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { (heading) }
            (field_errors(errors))

            form method="post" action=(action) class="bg-white rounded-lg shadow-md p-6 space-y-4 max-w-2xl" {
                (text_input("Name", "name", &form.name, true))
                (text_input("Address", "address", &form.address, true))
                (text_input("City", "city", &form.city, true))
                (state_select(&form.state))
                (text_input("Phone", "phone", &form.phone, false))
                (genre_multiselect(&form.genres))
                (text_input("Website Link", "website_link", &form.website_link, false))
                (text_input("Facebook Link", "facebook_link", &form.facebook_link, false))
                (text_input("Image Link", "image_link", &form.image_link, false))
                (seeking_checkbox(
                    "Seeking talent",
                    "seeking_talent",
                    checkbox(&form.seeking_talent),
                ))
                (text_input("Seeking Description", "seeking_description", &form.seeking_description, false))
                (submit_button(heading))
            }
        },
    )
}

pub fn artist_form_page(
    heading: &str,
    action: &str,
    form: &ArtistForm,
    errors: &[FieldError],
) -> Markup {
    base_layout(
        heading,
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { (heading) }
            (field_errors(errors))

            form method="post" action=(action) class="bg-white rounded-lg shadow-md p-6 space-y-4 max-w-2xl" {
                (text_input("Name", "name", &form.name, true))
                (text_input("City", "city", &form.city, true))
                (state_select(&form.state))
                (text_input("Phone", "phone", &form.phone, false))
                (genre_multiselect(&form.genres))
                (text_input("Website Link", "website_link", &form.website_link, false))
                (text_input("Facebook Link", "facebook_link", &form.facebook_link, false))
                (text_input("Image Link", "image_link", &form.image_link, false))
                (seeking_checkbox(
                    "Seeking a venue",
                    "seeking_venue",
                    checkbox(&form.seeking_venue),
                ))
                (text_input("Seeking Description", "seeking_description", &form.seeking_description, false))
                (submit_button(heading))
            }
        },
    )
}

pub fn show_form_page(form: &ShowForm, errors: &[FieldError]) -> Markup {
    base_layout(
        "List a Show",
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "List a Show" }
            (field_errors(errors))

            form method="post" action="/shows/create" class="bg-white rounded-lg shadow-md p-6 space-y-4 max-w-2xl" {
                (text_input("Artist ID", "artist_id", &form.artist_id, true))
                (text_input("Venue ID", "venue_id", &form.venue_id, true))
                div {
                    label for="start_time" class="block text-sm font-medium text-gray-700 mb-1" {
                        "Start Time" span class="text-red-500" { " *" }
                    }
                    input
                        type="datetime-local"
                        id="start_time"
                        name="start_time"
                        value=(form.start_time)
                        class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
                }
                (submit_button("List a Show"))
            }
        },
    )
}
