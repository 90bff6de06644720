use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use sea_orm::{
    prelude::Expr, sea_query::Func, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Set, TransactionTrait,
};

use crate::{
    db::{
        entities::{artist, city, show, venue},
        get_or_create_city,
    },
    error::{classify_db_err, AppError, Result, WriteErrorKind},
    flash::{self, Flash},
    forms::{checkbox, join_genres, opt, split_genres, ArtistForm, SearchForm},
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, home_page, search_results_page,
        ArtistDetail, ArtistListItem, CityArtists, SearchRow, ShowSummary,
    },
};

/// Artists grouped by city
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse> {
    let cities = city::Entity::find().all(&state.db).await?;

    let mut areas = Vec::with_capacity(cities.len());
    for c in cities {
        let artists = artist::Entity::find()
            .filter(artist::Column::Cityid.eq(c.id))
            .all(&state.db)
            .await?;

        areas.push(CityArtists {
            city: c.city,
            state: c.state,
            artists: artists
                .into_iter()
                .map(|a| ArtistListItem {
                    id: a.id,
                    name: a.name,
                })
                .collect(),
        });
    }

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(artists_page(&areas, flash.as_ref()).into_string())))
}

/// Case-insensitive substring search on artist names
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let pattern = format!("%{}%", form.search_term.to_lowercase());
    let results = artist::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(artist::Column::Name))).like(pattern))
        .all(&state.db)
        .await?;

    let rows: Vec<SearchRow> = results
        .into_iter()
        .map(|a| SearchRow {
            id: a.id,
            name: a.name,
        })
        .collect();

    Ok(Html(
        search_results_page("Artists", "/artists", &form.search_term, &rows).into_string(),
    ))
}

/// Artist detail with its shows partitioned into past and upcoming
pub async fn detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let artist = artist::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id}")))?;

    let city = city::Entity::find_by_id(artist.cityid)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("city {} missing for artist {id}", artist.cityid))
        })?;

    let shows = show::Entity::find()
        .filter(show::Column::Artistid.eq(id))
        .find_also_related(venue::Entity)
        .all(&state.db)
        .await?;

    // Same boundary as the venue view: strictly future is upcoming.
    let now = Utc::now().naive_utc();
    let mut past_shows = Vec::new();
    let mut upcoming_shows = Vec::new();
    for (s, v) in shows {
        let Some(v) = v else { continue };
        let row = ShowSummary {
            counterpart_id: v.id,
            counterpart_name: v.name,
            counterpart_image_link: v.image_link,
            start_time: s.start_time,
        };
        if s.start_time > now {
            upcoming_shows.push(row);
        } else {
            past_shows.push(row);
        }
    }

    let data = ArtistDetail {
        id: artist.id,
        name: artist.name,
        city: city.city,
        state: city.state,
        phone: artist.phone,
        website: artist.website,
        facebook_link: artist.facebook_link,
        genres: split_genres(artist.genres.as_deref()),
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows,
        upcoming_shows,
    };

    let (jar, flash) = flash::take(jar);
    Ok((
        jar,
        Html(artist_detail_page(&data, flash.as_ref()).into_string()),
    ))
}

/// Empty create form
pub async fn create_form() -> Html<String> {
    Html(
        artist_form_page("List an Artist", "/artists/create", &ArtistForm::default(), &[])
            .into_string(),
    )
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(Html(
            artist_form_page("List an Artist", "/artists/create", &form, &errors).into_string(),
        )
        .into_response());
    }

    let name = form.name.clone();
    match insert_artist(&state.db, &form).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, "artist listed");
            let flash = Flash::success(format!("Artist {name} was successfully listed!"));
            Ok(Html(home_page(Some(&flash)).into_string()).into_response())
        }
        Err(err) => {
            let kind = classify_db_err(&err);
            tracing::warn!(kind = kind.as_str(), error = %err, "artist create failed");
            let flash =
                Flash::error(format!("An error occurred. Artist {name} could not be listed."));
            Ok(Html(home_page(Some(&flash)).into_string()).into_response())
        }
    }
}

/// Edit form pre-populated from the row, including the one-hop city/state
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = artist::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id}")))?;

    let city = city::Entity::find_by_id(artist.cityid)
        .one(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("city {} missing for artist {id}", artist.cityid))
        })?;

    let form = ArtistForm {
        name: artist.name,
        city: city.city,
        state: city.state,
        phone: artist.phone.unwrap_or_default(),
        website_link: artist.website.unwrap_or_default(),
        facebook_link: artist.facebook_link.unwrap_or_default(),
        genres: split_genres(artist.genres.as_deref()),
        seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
        seeking_description: artist.seeking_description.unwrap_or_default(),
        image_link: artist.image_link.unwrap_or_default(),
    };

    Ok(Html(
        artist_form_page("Edit Artist", &format!("/artists/{id}/edit"), &form, &[]).into_string(),
    ))
}

pub async fn edit_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(Html(
            artist_form_page("Edit Artist", &format!("/artists/{id}/edit"), &form, &errors)
                .into_string(),
        )
        .into_response());
    }

    match update_artist(&state.db, id, &form).await {
        Ok(()) => {
            tracing::info!(artist_id = id, "artist updated");
            let jar = flash::set(jar, Flash::success("Artist was successfully updated!"));
            Ok((jar, Redirect::to(&format!("/artists/{id}"))).into_response())
        }
        Err(err) => {
            let kind = classify_db_err(&err);
            if kind == WriteErrorKind::NotFound {
                return Err(AppError::NotFound(format!("artist {id}")));
            }
            tracing::warn!(artist_id = id, kind = kind.as_str(), error = %err, "artist update failed");
            let jar =
                flash::set(jar, Flash::error("An error occurred. Artist could not be updated."));
            Ok((jar, Redirect::to(&format!("/artists/{id}"))).into_response())
        }
    }
}

async fn insert_artist(
    db: &DatabaseConnection,
    form: &ArtistForm,
) -> std::result::Result<artist::Model, DbErr> {
    let txn = db.begin().await?;
    let cityid = get_or_create_city(&txn, &form.city, &form.state).await?;

    let artist = artist::ActiveModel {
        name: Set(form.name.clone()),
        cityid: Set(cityid),
        phone: Set(opt(&form.phone)),
        website: Set(opt(&form.website_link)),
        facebook_link: Set(opt(&form.facebook_link)),
        genres: Set(opt(&join_genres(&form.genres))),
        seeking_venue: Set(checkbox(&form.seeking_venue)),
        seeking_description: Set(opt(&form.seeking_description)),
        image_link: Set(opt(&form.image_link)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(artist)
}

async fn update_artist(
    db: &DatabaseConnection,
    id: i32,
    form: &ArtistForm,
) -> std::result::Result<(), DbErr> {
    let txn = db.begin().await?;
    let cityid = get_or_create_city(&txn, &form.city, &form.state).await?;

    let artist = artist::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("artist {id}")))?;

    let mut artist: artist::ActiveModel = artist.into();
    artist.name = Set(form.name.clone());
    artist.cityid = Set(cityid);
    artist.phone = Set(opt(&form.phone));
    artist.website = Set(opt(&form.website_link));
    artist.facebook_link = Set(opt(&form.facebook_link));
    artist.genres = Set(opt(&join_genres(&form.genres)));
    artist.seeking_venue = Set(checkbox(&form.seeking_venue));
    artist.seeking_description = Set(opt(&form.seeking_description));
    artist.image_link = Set(opt(&form.image_link));
    artist.update(&txn).await?;

    txn.commit().await?;
    Ok(())
}
