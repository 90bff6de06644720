use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, Form};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    db::entities::{artist, show, venue},
    error::{classify_db_err, Result},
    flash::{self, Flash},
    forms::ShowForm,
    state::AppState,
    templates::{home_page, show_form_page, shows_page, ShowListItem},
};

/// All shows starting after the current instant, joined to artist and venue
/// display fields. Storage order, no explicit sort.
pub async fn list(State(state): State<AppState>, jar: CookieJar) -> Result<impl IntoResponse> {
    let now = Utc::now().naive_utc();
    let shows = show::Entity::find()
        .filter(show::Column::StartTime.gt(now))
        .all(&state.db)
        .await?;

    let mut items = Vec::with_capacity(shows.len());
    for s in shows {
        let Some(a) = artist::Entity::find_by_id(s.artistid).one(&state.db).await? else {
            continue;
        };
        let Some(v) = venue::Entity::find_by_id(s.venueid).one(&state.db).await? else {
            continue;
        };
        items.push(ShowListItem {
            venue_id: v.id,
            venue_name: v.name,
            artist_id: a.id,
            artist_name: a.name,
            artist_image_link: a.image_link,
            start_time: s.start_time,
        });
    }

    let (jar, flash) = flash::take(jar);
    Ok((jar, Html(shows_page(&items, flash.as_ref()).into_string())))
}

/// Empty create form
pub async fn create_form() -> Html<String> {
    Html(show_form_page(&ShowForm::default(), &[]).into_string())
}

/// Insert a show unconditionally; the foreign-key constraint is the only
/// referential check, so a dangling artist or venue id surfaces as a
/// constraint-classified write failure and the generic message.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Response> {
    let parsed = match form.validate() {
        Ok(parsed) => parsed,
        Err(errors) => {
            return Ok(Html(show_form_page(&form, &errors).into_string()).into_response());
        }
    };

    let res = show::ActiveModel {
        artistid: Set(parsed.artistid),
        venueid: Set(parsed.venueid),
        start_time: Set(parsed.start_time),
        ..Default::default()
    }
    .insert(&state.db)
    .await;

    match res {
        Ok(show) => {
            tracing::info!(show_id = show.id, "show listed");
            let flash = Flash::success("Show was successfully listed!");
            Ok(Html(home_page(Some(&flash)).into_string()).into_response())
        }
        Err(err) => {
            let kind = classify_db_err(&err);
            tracing::warn!(kind = kind.as_str(), error = %err, "show create failed");
            let flash = Flash::error("An error occurred. Show could not be listed.");
            Ok(Html(home_page(Some(&flash)).into_string()).into_response())
        }
    }
}
