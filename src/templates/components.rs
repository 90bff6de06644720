use chrono::NaiveDateTime;
use maud::{html, Markup};

use crate::flash::{Flash, FlashLevel};
use crate::forms::FieldError;

pub struct VenueListItem {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: u64,
}

pub struct CityVenues {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListItem>,
}

pub struct ArtistListItem {
    pub id: i32,
    pub name: String,
}

pub struct CityArtists {
    pub city: String,
    pub state: String,
    pub artists: Vec<ArtistListItem>,
}

pub struct SearchRow {
    pub id: i32,
    pub name: String,
}

/// One show row on a detail page, joined through to the counterpart entity
/// (artist rows on a venue page, venue rows on an artist page).
pub struct ShowSummary {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
}

pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ShowSummary>,
    pub upcoming_shows: Vec<ShowSummary>,
}

pub struct ShowListItem {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

pub fn flash_banner(flash: Option<&Flash>) -> Markup {
    html! {
        @if let Some(flash) = flash {
            @let classes = match flash.level {
                FlashLevel::Success => "bg-green-50 border-green-400 text-green-800",
                FlashLevel::Error => "bg-red-50 border-red-400 text-red-800",
            };
            div class=(format!("border-l-4 p-4 mb-6 rounded {}", classes)) role="alert" {
                (flash.message)
            }
        }
    }
}

pub fn search_form(action: &str, placeholder: &str) -> Markup {
    html! {
        form method="post" action=(action) class="mb-6" {
            div class="flex gap-2" {
                input
                    type="search"
                    name="search_term"
                    placeholder=(placeholder)
                    class="flex-grow px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-primary";
                button type="submit" class="px-4 py-2 bg-gray-900 text-white rounded-md text-sm font-medium" {
                    "Search"
                }
            }
        }
    }
}

pub fn field_errors(errors: &[FieldError]) -> Markup {
    html! {
        @if !errors.is_empty() {
            div class="bg-red-50 border-l-4 border-red-400 text-red-800 p-4 mb-6 rounded" role="alert" {
                ul class="list-disc list-inside space-y-1" {
                    @for error in errors {
                        li { (error.field) ": " (error.message) }
                    }
                }
            }
        }
    }
}

pub fn genre_badges(genres: &[String]) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" {
            @for genre in genres {
                span class="px-2 py-1 text-xs font-semibold bg-gray-100 text-gray-700 rounded-full" {
                    (genre)
                }
            }
        }
    }
}

pub fn show_summary_card(show: &ShowSummary, counterpart_path: &str) -> Markup {
    let image = show
        .counterpart_image_link
        .as_deref()
        .unwrap_or("https://via.placeholder.com/100x100/1a1a1a/ffffff?text=No+Image");

    html! {
        div class="flex items-center gap-4 bg-white rounded-lg shadow-sm p-4" {
            img src=(image) alt=(show.counterpart_name) class="w-16 h-16 rounded-full object-cover";
            div {
                a href=(format!("{}/{}", counterpart_path, show.counterpart_id))
                    class="font-semibold text-gray-900 hover:underline" {
                    (show.counterpart_name)
                }
                p class="text-sm text-gray-600" {
                    (show.start_time.format("%Y-%m-%d %H:%M"))
                }
            }
        }
    }
}
