use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use sea_orm::{
    prelude::Expr, sea_query::Func, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

use crate::{
    db::{
        entities::{artist, city, show, venue},
        get_or_create_city,
    },
    error::{classify_db_err, AppError, Result, WriteErrorKind},
    flash::{self, Flash},
    forms::{checkbox, join_genres, opt, split_genres, SearchForm, VenueForm},
    state::AppState,
    templates::{
        home_page, search_results_page, venue_detail_page, venue_form_page, venues_page,
        CityVenues, SearchRow, ShowSummary, VenueDetail, VenueListItem,
    },
};

/// Venues grouped by city, each with its upcoming-show count
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse> {
    let now = Utc::now().naive_utc();
    let cities = city::Entity::find().all(&state.db).await?;

    let mut areas = Vec::with_capacity(cities.len());
    for c in cities {
        let venues = venue::Entity::find()
            .filter(venue::Column::Cityid.eq(c.id))
            .all(&state.db)
            .await?;

        let mut items = Vec::with_capacity(venues.len());
        for v in venues {
            let num_upcoming_shows = show::Entity::find()
                .filter(show::Column::Venueid.eq(v.id))
                .filter(show::Column::StartTime.gt(now))
                .count(&state.db)
                .await?;
            items.push(VenueListItem {
                id: v.id,
                name: v.name,
                num_upcoming_shows,
            });
        }
        areas.push(CityVenues {
            city: c.city,
            state: c.state,
            venues: items,
        });
    }

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(venues_page(&areas, flash.as_ref()).into_string())))
}

/// Case-insensitive substring search on venue names
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let pattern = format!("%{}%", form.search_term.to_lowercase());
    let results = venue::Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(venue::Column::Name))).like(pattern))
        .all(&state.db)
        .await?;

    let rows: Vec<SearchRow> = results
        .into_iter()
        .map(|v| SearchRow {
            id: v.id,
            name: v.name,
        })
        .collect();

    Ok(Html(
        search_results_page("Venues", "/venues", &form.search_term, &rows).into_string(),
    ))
}

/// Venue detail with its shows partitioned into past and upcoming
pub async fn detail(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let venue = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id}")))?;

    let city = city::Entity::find_by_id(venue.cityid)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal(format!("city {} missing for venue {id}", venue.cityid)))?;

    let shows = show::Entity::find()
        .filter(show::Column::Venueid.eq(id))
        .find_also_related(artist::Entity)
        .all(&state.db)
        .await?;

    // Strictly after the current instant counts as upcoming; "now" is past.
    let now = Utc::now().naive_utc();
    let mut past_shows = Vec::new();
    let mut upcoming_shows = Vec::new();
    for (s, a) in shows {
        let Some(a) = a else { continue };
        let row = ShowSummary {
            counterpart_id: a.id,
            counterpart_name: a.name,
            counterpart_image_link: a.image_link,
            start_time: s.start_time,
        };
        if s.start_time > now {
            upcoming_shows.push(row);
        } else {
            past_shows.push(row);
        }
    }

    let data = VenueDetail {
        id: venue.id,
        name: venue.name,
        address: venue.address,
        city: city.city,
        state: city.state,
        phone: venue.phone,
        website: venue.website,
        facebook_link: venue.facebook_link,
        genres: split_genres(venue.genres.as_deref()),
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows,
        upcoming_shows,
    };

    let (jar, flash) = flash::take(jar);
    Ok((
        jar,
        Html(venue_detail_page(&data, flash.as_ref()).into_string()),
    ))
}

/// Empty create form
pub async fn create_form() -> Html<String> {
    Html(venue_form_page("List a Venue", "/venues/create", &VenueForm::default(), &[]).into_string())
}

pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(Html(
            venue_form_page("List a Venue", "/venues/create", &form, &errors).into_string(),
        )
        .into_response());
    }

    let name = form.name.clone();
    match insert_venue(&state.db, &form).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, "venue listed");
            let flash = Flash::success(format!("Venue {name} was successfully listed!"));
            Ok(Html(home_page(Some(&flash)).into_string()).into_response())
        }
        Err(err) => {
            let kind = classify_db_err(&err);
            tracing::warn!(kind = kind.as_str(), error = %err, "venue create failed");
            let flash = Flash::error(format!("An error occurred. Venue {name} could not be listed."));
            Ok(Html(home_page(Some(&flash)).into_string()).into_response())
        }
    }
}

/// Edit form pre-populated from the row, including the one-hop city/state
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = venue::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id}")))?;

    let city = city::Entity::find_by_id(venue.cityid)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Internal(format!("city {} missing for venue {id}", venue.cityid)))?;

    let form = VenueForm {
        name: venue.name,
        address: venue.address,
        city: city.city,
        state: city.state,
        phone: venue.phone.unwrap_or_default(),
        website_link: venue.website.unwrap_or_default(),
        facebook_link: venue.facebook_link.unwrap_or_default(),
        genres: split_genres(venue.genres.as_deref()),
        seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
        seeking_description: venue.seeking_description.unwrap_or_default(),
        image_link: venue.image_link.unwrap_or_default(),
    };

    Ok(Html(
        venue_form_page("Edit Venue", &format!("/venues/{id}/edit"), &form, &[]).into_string(),
    ))
}

pub async fn edit_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Ok(Html(
            venue_form_page("Edit Venue", &format!("/venues/{id}/edit"), &form, &errors)
                .into_string(),
        )
        .into_response());
    }

    match update_venue(&state.db, id, &form).await {
        Ok(()) => {
            tracing::info!(venue_id = id, "venue updated");
            let jar = flash::set(jar, Flash::success("Venue was successfully updated!"));
            Ok((jar, Redirect::to(&format!("/venues/{id}"))).into_response())
        }
        Err(err) => {
            let kind = classify_db_err(&err);
            if kind == WriteErrorKind::NotFound {
                return Err(AppError::NotFound(format!("venue {id}")));
            }
            tracing::warn!(venue_id = id, kind = kind.as_str(), error = %err, "venue update failed");
            let jar = flash::set(jar, Flash::error("An error occurred. Venue could not be updated."));
            Ok((jar, Redirect::to(&format!("/venues/{id}"))).into_response())
        }
    }
}

/// Delete with a restrict policy: venues with booked shows are not deletable.
/// Any failure rolls back and reports 400.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    match delete_venue(&state.db, id).await {
        Ok(()) => {
            tracing::info!(venue_id = id, "venue deleted");
            Ok((StatusCode::OK, [("HX-Redirect", "/")]))
        }
        Err(err) => {
            let kind = classify_db_err(&err);
            tracing::warn!(venue_id = id, kind = kind.as_str(), error = %err, "venue delete failed");
            Err(AppError::BadRequest(format!("venue {id} could not be deleted")))
        }
    }
}

async fn delete_venue(db: &DatabaseConnection, id: i32) -> std::result::Result<(), DbErr> {
    let txn = db.begin().await?;

    let Some(venue) = venue::Entity::find_by_id(id).one(&txn).await? else {
        return Err(DbErr::RecordNotFound(format!("venue {id}")));
    };
    let dependents = show::Entity::find()
        .filter(show::Column::Venueid.eq(id))
        .count(&txn)
        .await?;
    if dependents > 0 {
        return Err(DbErr::Custom(format!(
            "venue {id} has {dependents} booked shows"
        )));
    }

    venue.delete(&txn).await?;
    txn.commit().await?;
    Ok(())
}

async fn insert_venue(db: &DatabaseConnection, form: &VenueForm) -> std::result::Result<venue::Model, DbErr> {
    let txn = db.begin().await?;
    let cityid = get_or_create_city(&txn, &form.city, &form.state).await?;

    let venue = venue::ActiveModel {
        name: Set(form.name.clone()),
        address: Set(form.address.clone()),
        cityid: Set(cityid),
        phone: Set(opt(&form.phone)),
        website: Set(opt(&form.website_link)),
        facebook_link: Set(opt(&form.facebook_link)),
        genres: Set(opt(&join_genres(&form.genres))),
        seeking_talent: Set(checkbox(&form.seeking_talent)),
        seeking_description: Set(opt(&form.seeking_description)),
        image_link: Set(opt(&form.image_link)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(venue)
}

async fn update_venue(
    db: &DatabaseConnection,
    id: i32,
    form: &VenueForm,
) -> std::result::Result<(), DbErr> {
    let txn = db.begin().await?;
    let cityid = get_or_create_city(&txn, &form.city, &form.state).await?;

    let venue = venue::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("venue {id}")))?;

    let mut venue: venue::ActiveModel = venue.into();
    venue.name = Set(form.name.clone());
    venue.address = Set(form.address.clone());
    venue.cityid = Set(cityid);
    venue.phone = Set(opt(&form.phone));
    venue.website = Set(opt(&form.website_link));
    venue.facebook_link = Set(opt(&form.facebook_link));
    venue.genres = Set(opt(&join_genres(&form.genres)));
    venue.seeking_talent = Set(checkbox(&form.seeking_talent));
    venue.seeking_description = Set(opt(&form.seeking_description));
    venue.image_link = Set(opt(&form.image_link));
    venue.update(&txn).await?;

    txn.commit().await?;
    Ok(())
}
