use maud::{html, Markup};

use super::components::{
    flash_banner, genre_badges, search_form, show_summary_card, ArtistDetail, CityArtists,
    CityVenues, SearchRow, ShowListItem, VenueDetail,
};
use super::layout::base_layout;
use crate::flash::Flash;

pub fn home_page(flash: Option<&Flash>) -> Markup {
    base_layout(
        "Home",
        html! {
            (flash_banner(flash))

            div class="text-center py-16" {
                h1 class="text-4xl font-bold text-gray-900 mb-4" { "Gigboard" }
                p class="text-lg text-gray-600 mb-8" {
                    "Browse venues and artists by city, and find upcoming shows."
                }
                div class="flex justify-center gap-4" {
                    a href="/venues" class="px-6 py-3 bg-gray-900 text-white rounded-md font-medium" {
                        "Find a Venue"
                    }
                    a href="/artists" class="px-6 py-3 bg-gray-900 text-white rounded-md font-medium" {
                        "Find an Artist"
                    }
                    a href="/shows" class="px-6 py-3 bg-gray-900 text-white rounded-md font-medium" {
                        "Upcoming Shows"
                    }
                }
            }
        },
    )
}

pub fn venues_page(areas: &[CityVenues], flash: Option<&Flash>) -> Markup {
    base_layout(
        "Venues",
        html! {
            (flash_banner(flash))
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Venues" }
            (search_form("/venues/search", "Search venues by name..."))

            @if areas.is_empty() {
                p class="text-gray-600" { "No venues listed yet." }
            }
            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold text-gray-800 mb-3" {
                        (area.city) ", " (area.state)
                    }
                    ul class="space-y-2" {
                        @for venue in &area.venues {
                            li class="bg-white rounded-lg shadow-sm p-4 flex justify-between items-center" {
                                a href=(format!("/venues/{}", venue.id))
                                    class="font-medium text-gray-900 hover:underline" {
                                    (venue.name)
                                }
                                span class="text-sm text-gray-500" {
                                    (venue.num_upcoming_shows) " upcoming shows"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn artists_page(areas: &[CityArtists], flash: Option<&Flash>) -> Markup {
    base_layout(
        "Artists",
        html! {
            (flash_banner(flash))
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Artists" }
            (search_form("/artists/search", "Search artists by name..."))

            @if areas.is_empty() {
                p class="text-gray-600" { "No artists listed yet." }
            }
            @for area in areas {
                section class="mb-8" {
                    h2 class="text-xl font-semibold text-gray-800 mb-3" {
                        (area.city) ", " (area.state)
                    }
                    ul class="space-y-2" {
                        @for artist in &area.artists {
                            li class="bg-white rounded-lg shadow-sm p-4" {
                                a href=(format!("/artists/{}", artist.id))
                                    class="font-medium text-gray-900 hover:underline" {
                                    (artist.name)
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn search_results_page(
    kind: &str,
    detail_path: &str,
    search_term: &str,
    results: &[SearchRow],
) -> Markup {
    base_layout(
        &format!("Search {kind}"),
        html! {
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Search " (kind) }
            (search_form(&format!("{detail_path}/search"), "Search by name..."))

            p class="text-gray-600 mb-4" {
                "Found " (results.len()) " results for "
                span class="font-semibold" { "\"" (search_term) "\"" }
            }
            ul class="space-y-2" {
                @for row in results {
                    li class="bg-white rounded-lg shadow-sm p-4" {
                        a href=(format!("{}/{}", detail_path, row.id))
                            class="font-medium text-gray-900 hover:underline" {
                            (row.name)
                        }
                    }
                }
            }
        },
    )
}

pub fn venue_detail_page(venue: &VenueDetail, flash: Option<&Flash>) -> Markup {
    base_layout(
        &venue.name,
        html! {
            (flash_banner(flash))

            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &venue.image_link {
                        img src=(image) alt=(venue.name) class="w-full md:w-64 rounded-lg object-cover";
                    }
                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900 mb-2" { (venue.name) }
                        (genre_badges(&venue.genres))
                        dl class="mt-4 space-y-2 text-gray-700" {
                            div { dt class="inline font-medium" { "City: " } dd class="inline" { (venue.city) ", " (venue.state) } }
                            div { dt class="inline font-medium" { "Address: " } dd class="inline" { (venue.address) } }
                            @if let Some(phone) = &venue.phone {
                                div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (phone) } }
                            }
                            @if let Some(website) = &venue.website {
                                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) class="text-blue-600 hover:underline" { (website) } } }
                            }
                            @if let Some(facebook) = &venue.facebook_link {
                                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) class="text-blue-600 hover:underline" { (facebook) } } }
                            }
                        }
                        @if venue.seeking_talent {
                            div class="mt-4 bg-amber-50 border border-amber-200 rounded p-3" {
                                p class="font-semibold text-amber-800" { "Seeking talent" }
                                @if let Some(description) = &venue.seeking_description {
                                    p class="text-sm text-amber-700" { (description) }
                                }
                            }
                        }
                        div class="mt-6 flex gap-3" {
                            a href=(format!("/venues/{}/edit", venue.id))
                                class="px-4 py-2 bg-gray-900 text-white rounded-md text-sm font-medium" {
                                "Edit Venue"
                            }
                            button
                                class="px-4 py-2 bg-red-600 text-white rounded-md text-sm font-medium"
                                hx-delete=(format!("/venues/{}", venue.id))
                                hx-swap="none" {
                                "Delete Venue"
                            }
                        }
                    }
                }
            }

            section class="mb-8" {
                h2 class="text-xl font-semibold text-gray-800 mb-3" {
                    (venue.upcoming_shows.len()) " Upcoming Shows"
                }
                div class="space-y-3" {
                    @for show in &venue.upcoming_shows {
                        (show_summary_card(show, "/artists"))
                    }
                }
            }

            section {
                h2 class="text-xl font-semibold text-gray-800 mb-3" {
                    (venue.past_shows.len()) " Past Shows"
                }
                div class="space-y-3" {
                    @for show in &venue.past_shows {
                        (show_summary_card(show, "/artists"))
                    }
                }
            }
        },
    )
}

pub fn artist_detail_page(artist: &ArtistDetail, flash: Option<&Flash>) -> Markup {
    base_layout(
        &artist.name,
        html! {
            (flash_banner(flash))

            div class="bg-white rounded-lg shadow-md p-6 mb-8" {
                div class="flex flex-col md:flex-row gap-6" {
                    @if let Some(image) = &artist.image_link {
                        img src=(image) alt=(artist.name) class="w-full md:w-64 rounded-lg object-cover";
                    }
                    div class="flex-grow" {
                        h1 class="text-3xl font-bold text-gray-900 mb-2" { (artist.name) }
                        (genre_badges(&artist.genres))
                        dl class="mt-4 space-y-2 text-gray-700" {
                            div { dt class="inline font-medium" { "City: " } dd class="inline" { (artist.city) ", " (artist.state) } }
                            @if let Some(phone) = &artist.phone {
                                div { dt class="inline font-medium" { "Phone: " } dd class="inline" { (phone) } }
                            }
                            @if let Some(website) = &artist.website {
                                div { dt class="inline font-medium" { "Website: " } dd class="inline" { a href=(website) class="text-blue-600 hover:underline" { (website) } } }
                            }
                            @if let Some(facebook) = &artist.facebook_link {
                                div { dt class="inline font-medium" { "Facebook: " } dd class="inline" { a href=(facebook) class="text-blue-600 hover:underline" { (facebook) } } }
                            }
                        }
                        @if artist.seeking_venue {
                            div class="mt-4 bg-amber-50 border border-amber-200 rounded p-3" {
                                p class="font-semibold text-amber-800" { "Seeking a venue" }
                                @if let Some(description) = &artist.seeking_description {
                                    p class="text-sm text-amber-700" { (description) }
                                }
                            }
                        }
                        div class="mt-6" {
                            a href=(format!("/artists/{}/edit", artist.id))
                                class="px-4 py-2 bg-gray-900 text-white rounded-md text-sm font-medium" {
                                "Edit Artist"
                            }
                        }
                    }
                }
            }

            section class="mb-8" {
                h2 class="text-xl font-semibold text-gray-800 mb-3" {
                    (artist.upcoming_shows.len()) " Upcoming Shows"
                }
                div class="space-y-3" {
                    @for show in &artist.upcoming_shows {
                        (show_summary_card(show, "/venues"))
                    }
                }
            }

            section {
                h2 class="text-xl font-semibold text-gray-800 mb-3" {
                    (artist.past_shows.len()) " Past Shows"
                }
                div class="space-y-3" {
                    @for show in &artist.past_shows {
                        (show_summary_card(show, "/venues"))
                    }
                }
            }
        },
    )
}

pub fn shows_page(shows: &[ShowListItem], flash: Option<&Flash>) -> Markup {
    base_layout(
        "Shows",
        html! {
            (flash_banner(flash))
            h1 class="text-3xl font-bold text-gray-900 mb-6" { "Upcoming Shows" }

            @if shows.is_empty() {
                p class="text-gray-600" { "No upcoming shows." }
            }
            div class="space-y-3" {
                @for show in shows {
                    div class="flex items-center gap-4 bg-white rounded-lg shadow-sm p-4" {
                        @let image = show.artist_image_link.as_deref()
                            .unwrap_or("https://via.placeholder.com/100x100/1a1a1a/ffffff?text=No+Image");
                        img src=(image) alt=(show.artist_name) class="w-16 h-16 rounded-full object-cover";
                        div {
                            a href=(format!("/artists/{}", show.artist_id))
                                class="font-semibold text-gray-900 hover:underline" {
                                (show.artist_name)
                            }
                            p class="text-sm text-gray-600" {
                                "at "
                                a href=(format!("/venues/{}", show.venue_id)) class="hover:underline" {
                                    (show.venue_name)
                                }
                            }
                            p class="text-sm text-gray-500" {
                                (show.start_time.format("%Y-%m-%d %H:%M"))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    base_layout(
        "Not Found",
        html! {
            div class="text-center py-16" {
                h1 class="text-5xl font-bold text-gray-900 mb-4" { "404" }
                p class="text-lg text-gray-600 mb-8" { "The page you were looking for does not exist." }
                a href="/" class="px-6 py-3 bg-gray-900 text-white rounded-md font-medium" { "Back Home" }
            }
        },
    )
}

pub fn server_error_page() -> Markup {
    base_layout(
        "Server Error",
        html! {
            div class="text-center py-16" {
                h1 class="text-5xl font-bold text-gray-900 mb-4" { "500" }
                p class="text-lg text-gray-600 mb-8" { "Something went wrong on our end. Please try again." }
                a href="/" class="px-6 py-3 bg-gray-900 text-white rounded-md font-medium" { "Back Home" }
            }
        },
    )
}
